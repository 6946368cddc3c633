use crate::note::NoteId;

pub const DEFAULT_NUM_WHITE_KEYS: u16 = 14;

/// Vertical share of the surface covered by the black keys.
const BLACK_HEIGHT_FACTOR: f32 = 0.6;

/// An axis-aligned region of the touch surface in surface coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Containment is half-open s.t. adjacent keys never both claim a
    /// boundary coordinate.
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.left <= x && x < self.right && self.top <= y && y < self.bottom
    }
}

/// A single white or black key: a note paired with its screen region.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Key {
    pub note: NoteId,
    pub bounds: Rect,
}

/// The immutable geometric description of the keyboard for one surface size.
///
/// The layout is a pure function of the surface dimensions and the white key
/// count. It is rebuilt wholesale on every resize and replaced atomically;
/// mutable key state lives in [`TouchKeyTracker`](crate::keypress::TouchKeyTracker)
/// so rebuilding never loses or aliases data shared with the renderer.
#[derive(Clone, Debug)]
pub struct KeyboardLayout {
    white_keys: Vec<Key>,
    black_keys: Vec<Key>,
    key_width: i32,
}

impl KeyboardLayout {
    /// A layout without any keys, used until a valid surface size arrives.
    pub fn empty() -> Self {
        Self {
            white_keys: Vec::new(),
            black_keys: Vec::new(),
            key_width: 0,
        }
    }

    /// Computes the key geometry for the given surface size.
    ///
    /// The key width is obtained by truncating integer division. The
    /// fractional remainder is discarded, leaving an uncovered strip on the
    /// right edge when `width` is not evenly divisible. This matches the
    /// behavior of the rendered keyboard and is accepted policy.
    ///
    /// Non-positive dimensions yield an empty layout instead of failing.
    pub fn build(width: i32, height: i32, num_white_keys: u16) -> Self {
        if width <= 0 || height <= 0 || num_white_keys == 0 {
            return Self::empty();
        }

        let key_width = width / i32::from(num_white_keys);
        let key_height = height;

        let mut white_keys = Vec::with_capacity(usize::from(num_white_keys));
        let mut black_keys = Vec::new();
        let mut black_number = num_white_keys + 1;

        for i in 0..num_white_keys {
            let left = i32::from(i) * key_width;
            let right = left + key_width;

            white_keys.push(Key {
                note: NoteId::from_number(i + 1),
                bounds: Rect {
                    left: left as f32,
                    top: 0.0,
                    right: right as f32,
                    bottom: key_height as f32,
                },
            });

            // No semitone above the third and seventh scale degree, so the
            // boundaries after E and B keys carry no black key.
            if i % 7 != 0 && i % 7 != 3 {
                black_keys.push(Key {
                    note: NoteId::from_number(black_number),
                    bounds: Rect {
                        left: (left - key_width) as f32 + 0.75 * key_width as f32,
                        top: 0.0,
                        right: left as f32 + 0.25 * key_width as f32,
                        bottom: BLACK_HEIGHT_FACTOR * key_height as f32,
                    },
                });
                black_number += 1;
            }
        }

        Self {
            white_keys,
            black_keys,
            key_width,
        }
    }

    pub fn white_keys(&self) -> &[Key] {
        &self.white_keys
    }

    pub fn black_keys(&self) -> &[Key] {
        &self.black_keys
    }

    /// Width of one white key. The renderer uses this to draw the separator
    /// lines between adjacent white keys.
    pub fn key_width(&self) -> i32 {
        self.key_width
    }

    pub fn num_keys(&self) -> usize {
        self.white_keys.len() + self.black_keys.len()
    }

    /// Resolves the single key at the given surface coordinate.
    ///
    /// Black keys visually occlude the white keys below them and are tested
    /// first. Coordinates outside every key resolve to `None`.
    pub fn key_at(&self, x: f32, y: f32) -> Option<&Key> {
        self.black_keys
            .iter()
            .chain(&self.white_keys)
            .find(|key| key.bounds.contains(x, y))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn white_key_bounds_on_a_700_by_300_surface() {
        let layout = KeyboardLayout::build(700, 300, 14);

        assert_eq!(layout.key_width(), 50);
        assert_eq!(layout.white_keys().len(), 14);
        assert_eq!(layout.black_keys().len(), 10);

        let key = &layout.white_keys()[4];
        assert_eq!(key.note.number(), 5);
        assert_approx_eq!(key.bounds.left, 200.0);
        assert_approx_eq!(key.bounds.top, 0.0);
        assert_approx_eq!(key.bounds.right, 250.0);
        assert_approx_eq!(key.bounds.bottom, 300.0);
    }

    #[test]
    fn white_keys_are_contiguous_and_disjoint() {
        let layout = KeyboardLayout::build(700, 300, 14);

        for pair in layout.white_keys().windows(2) {
            assert_approx_eq!(pair[0].bounds.right, pair[1].bounds.left);
        }
    }

    #[test]
    fn remainder_is_left_uncovered() {
        let layout = KeyboardLayout::build(705, 300, 14);

        assert_eq!(layout.key_width(), 50);
        let last = layout.white_keys().last().unwrap();
        assert_approx_eq!(last.bounds.right, 700.0);
        assert!(layout.key_at(702.0, 150.0).is_none());
    }

    #[test]
    fn black_keys_sit_in_the_upper_band_across_two_white_keys() {
        let layout = KeyboardLayout::build(700, 300, 14);

        for black in layout.black_keys() {
            assert_approx_eq!(black.bounds.top, 0.0);
            assert_approx_eq!(black.bounds.bottom, 180.0);

            let num_overlapping_whites = layout
                .white_keys()
                .iter()
                .filter(|white| {
                    black.bounds.left < white.bounds.right && white.bounds.left < black.bounds.right
                })
                .count();
            assert_eq!(num_overlapping_whites, 2);
        }
    }

    #[test]
    fn black_key_numbers_continue_after_the_white_keys() {
        let layout = KeyboardLayout::build(700, 300, 14);

        let numbers = layout
            .black_keys()
            .iter()
            .map(|key| key.note.number())
            .collect::<Vec<_>>();
        assert_eq!(numbers, (15..=24).collect::<Vec<_>>());

        let first = &layout.black_keys()[0];
        assert_approx_eq!(first.bounds.left, 37.5);
        assert_approx_eq!(first.bounds.right, 62.5);
    }

    #[test]
    fn black_key_takes_priority_over_the_white_keys_below() {
        let layout = KeyboardLayout::build(700, 300, 14);

        // (210, 10) lies inside white key 5 but also inside the black key
        // spanning 187.5..212.5.
        let black = layout.key_at(210.0, 10.0).unwrap();
        assert_eq!(black.note.number(), 17);

        // Below the black key band the same column resolves to the white key.
        let white = layout.key_at(210.0, 200.0).unwrap();
        assert_eq!(white.note.number(), 5);
    }

    #[test]
    fn coordinates_outside_the_surface_match_no_key() {
        let layout = KeyboardLayout::build(700, 300, 14);

        assert!(layout.key_at(-1.0, 10.0).is_none());
        assert!(layout.key_at(10.0, -1.0).is_none());
        assert!(layout.key_at(700.0, 10.0).is_none());
        assert!(layout.key_at(10.0, 300.0).is_none());
    }

    #[test]
    fn degenerate_surface_sizes_yield_an_empty_layout() {
        assert_eq!(KeyboardLayout::build(0, 300, 14).num_keys(), 0);
        assert_eq!(KeyboardLayout::build(700, -1, 14).num_keys(), 0);
        assert_eq!(KeyboardLayout::build(700, 300, 0).num_keys(), 0);
        assert!(KeyboardLayout::empty().key_at(10.0, 10.0).is_none());
    }

    #[test]
    fn single_octave_skips_black_keys_after_e_and_b() {
        let layout = KeyboardLayout::build(700, 300, 7);

        // C D E F G A B => black keys at C#, D#, F#, G#, A#
        assert_eq!(layout.black_keys().len(), 5);
        let boundaries = layout
            .black_keys()
            .iter()
            .map(|key| (key.bounds.right / layout.key_width() as f32 - 0.25) as i32)
            .collect::<Vec<_>>();
        assert_eq!(boundaries, [1, 2, 4, 5, 6]);
    }
}
