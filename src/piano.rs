use std::{
    ops::{Deref, DerefMut},
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{
    backend::Backends,
    keypress::{TouchKeyTracker, TouchPhase, TouchPoint},
    layout::KeyboardLayout,
};

/// Connects the keyboard geometry and the touch tracker to the host surface
/// and the audio backends.
pub struct PianoEngine {
    model: Mutex<PianoEngineModel>,
}

/// A snapshot of the piano engine state to be used for screen rendering.
/// By rendering the snapshot version the engine remains responsive even at low screen refresh rates.
#[derive(Clone)]
pub struct PianoEngineSnapshot {
    pub layout: Arc<KeyboardLayout>,
    pub tracker: TouchKeyTracker,
}

struct PianoEngineModel {
    snapshot: PianoEngineSnapshot,
    num_white_keys: u16,
    backends: Backends,
}

impl Deref for PianoEngineModel {
    type Target = PianoEngineSnapshot;
    fn deref(&self) -> &Self::Target {
        &self.snapshot
    }
}

impl DerefMut for PianoEngineModel {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.snapshot
    }
}

impl PianoEngine {
    /// Creates an engine with an empty layout. The keyboard has no keys until
    /// the first [`PianoEngine::handle_resize`] with a valid surface size.
    pub fn new(num_white_keys: u16, backends: Backends) -> (Arc<Self>, PianoEngineSnapshot) {
        let snapshot = PianoEngineSnapshot {
            layout: Arc::new(KeyboardLayout::empty()),
            tracker: TouchKeyTracker::new(),
        };

        let mut model = PianoEngineModel {
            snapshot: snapshot.clone(),
            num_white_keys,
            backends,
        };

        model.send_status();

        let engine = Self {
            model: Mutex::new(model),
        };

        (Arc::new(engine), snapshot)
    }

    /// Rebuilds the key geometry for a new surface size.
    ///
    /// The previous layout is discarded wholesale and all keys are lifted.
    /// Degenerate sizes leave the keyboard without keys instead of failing.
    pub fn handle_resize(&self, width: i32, height: i32) {
        self.lock_model().handle_resize(width, height);
    }

    /// Processes one batch of simultaneous touch points and forwards every
    /// resulting trigger to the backends, at most one per press transition.
    pub fn handle_touch_batch(&self, points: &[TouchPoint], phase: TouchPhase) {
        self.lock_model().handle_touch_batch(points, phase);
    }

    pub fn take_snapshot(&self, target: &mut PianoEngineSnapshot) {
        target.clone_from(&self.lock_model())
    }

    fn lock_model(&self) -> MutexGuard<'_, PianoEngineModel> {
        self.model.lock().unwrap()
    }
}

impl PianoEngineModel {
    fn handle_resize(&mut self, width: i32, height: i32) {
        let layout = KeyboardLayout::build(width, height, self.num_white_keys);
        if layout.num_keys() == 0 {
            log::warn!("Surface size {width}x{height} leaves the keyboard without keys");
        }

        self.snapshot.layout = Arc::new(layout);
        self.snapshot.tracker.lift_all_keys();
    }

    fn handle_touch_batch(&mut self, points: &[TouchPoint], phase: TouchPhase) {
        let PianoEngineSnapshot { layout, tracker } = &mut self.snapshot;
        let triggered = tracker.handle_batch(layout, points, phase);

        for note in triggered {
            for backend in &mut self.backends {
                backend.start(note);
            }
        }
    }

    fn send_status(&mut self) {
        for backend in &mut self.backends {
            backend.send_status();
        }
    }
}
