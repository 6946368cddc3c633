//! Geometry and touch tracking for a two-octave on-screen piano.
//!
//! The crate splits the keyboard into three layers:
//!
//! - [`layout::KeyboardLayout`]: an immutable geometric description of every
//!   white and black key, computed as a pure function of the surface size.
//! - [`keypress::TouchKeyTracker`]: the multi-touch state machine which turns
//!   raw touch samples into key down-states and note triggers.
//! - [`piano::PianoEngine`]: the seam to the outside world, forwarding
//!   triggers to [`backend::Backend`] implementations and handing out
//!   snapshots for screen rendering.
//!
//! Rendering and audio playback are collaborators, not part of this crate.

use std::{
    fmt::{self, Debug},
    io,
};

pub mod backend;
pub mod keypress;
pub mod layout;
pub mod note;
pub mod piano;
pub mod profile;

#[cfg(test)]
mod test;

pub type AppResult<T> = Result<T, AppError>;

pub enum AppError {
    IoError(io::Error),
    CommandError(String),
}

impl Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::IoError(err) => write!(f, "IO error / {err}"),
            AppError::CommandError(err) => write!(f, "The command failed / {err}"),
        }
    }
}

impl From<String> for AppError {
    fn from(v: String) -> Self {
        AppError::CommandError(v)
    }
}

impl From<io::Error> for AppError {
    fn from(v: io::Error) -> Self {
        AppError::IoError(v)
    }
}
