use std::collections::HashSet;

use crate::{layout::KeyboardLayout, note::NoteId};

/// Contact phase of one touch sample batch, as reported by the host surface.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TouchPhase {
    Pressed,
    Moved,
    Released,
}

impl TouchPhase {
    /// `Pressed` and `Moved` both mean a contact is on the surface.
    pub fn is_contact(self) -> bool {
        !matches!(self, TouchPhase::Released)
    }
}

/// One touch point in surface coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchPoint {
    pub x: f32,
    pub y: f32,
}

impl From<(f32, f32)> for TouchPoint {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Converts raw multi-touch samples into key down-states and note triggers.
///
/// The tracker follows the single-active-note model of the rendered keyboard:
/// one scalar note is considered sounding across *all* contacts. Two
/// simultaneous contacts on different keys therefore keep only the most
/// recently resolved note active, and a release of *any* contact silences
/// tracking for all of them. This is intentional; independent per-finger
/// notes are a different instrument.
#[derive(Clone, Debug, Default)]
pub struct TouchKeyTracker {
    active_note: Option<NoteId>,
    pressed_keys: HashSet<NoteId>,
}

impl TouchKeyTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes one batch of simultaneous touch points against the given
    /// layout and returns the notes to trigger, in resolution order.
    ///
    /// A note is returned at most once per transition into "down with a note
    /// different from the active one". Holding a contact on the same key
    /// emits nothing further, no matter how many batches report it.
    pub fn handle_batch(
        &mut self,
        layout: &KeyboardLayout,
        points: &[TouchPoint],
        phase: TouchPhase,
    ) -> Vec<NoteId> {
        let mut triggered = Vec::new();

        for point in points {
            // Touch samples outside every key are best-effort noise from the
            // host surface and ignored.
            let key = match layout.key_at(point.x, point.y) {
                Some(key) => key,
                None => continue,
            };

            if phase.is_contact() {
                self.pressed_keys.insert(key.note);
                if self.active_note != Some(key.note) {
                    self.active_note = Some(key.note);
                    triggered.push(key.note);
                }
            } else {
                self.pressed_keys.remove(&key.note);
            }
        }

        if phase == TouchPhase::Released {
            self.active_note = None;
        }

        triggered
    }

    /// The single note currently considered sounding, shared across all
    /// contacts. `None` means silence.
    pub fn active_note(&self) -> Option<NoteId> {
        self.active_note
    }

    /// Whether the given key should be drawn in its pressed state.
    pub fn is_pressed(&self, note: NoteId) -> bool {
        self.pressed_keys.contains(&note)
    }

    pub fn pressed_keys(&self) -> impl Iterator<Item = NoteId> + '_ {
        self.pressed_keys.iter().copied()
    }

    /// Lifts all keys, e.g. after the layout has been replaced.
    pub fn lift_all_keys(&mut self) {
        self.pressed_keys.clear();
    }
}
