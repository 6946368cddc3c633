/// A playable key on the touch piano without any notion of screen geometry.
///
/// Note numbers are assigned by [`KeyboardLayout`](crate::layout::KeyboardLayout):
/// white keys count up from 1 left to right, black keys continue sequentially
/// after the last white key. Numbers are stable for the lifetime of one layout
/// and never shared between two keys.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct NoteId {
    number: u16,
}

impl NoteId {
    pub fn from_number(number: impl Into<u16>) -> Self {
        Self {
            number: number.into(),
        }
    }

    pub fn number(self) -> u16 {
        self.number
    }

    /// Name of the audio sample for this note on the default 14-key board
    /// (white keys C3..B4, black keys Db3..Bb4).
    ///
    /// Returns `None` for notes outside the default board.
    pub fn sample_name(self) -> Option<&'static str> {
        let index = usize::from(self.number).checked_sub(1)?;
        SAMPLE_NAMES.get(index).copied()
    }
}

const SAMPLE_NAMES: [&str; 24] = [
    "c3", "d3", "e3", "f3", "g3", "a3", "b3", "c4", "d4", "e4", "f4", "g4", "a4", "b4", "db3",
    "eb3", "gb3", "ab3", "bb3", "db4", "eb4", "gb4", "ab4", "bb4",
];
