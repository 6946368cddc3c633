use flume::Sender;

use crate::note::NoteId;

pub type DynBackend = Box<dyn Backend>;
pub type Backends = Vec<DynBackend>;

/// Seam to the audio collaborator.
///
/// The modeled instrument plays one-shot samples, so there is no note-off
/// counterpart to [`Backend::start`].
pub trait Backend: Send {
    /// Announces the backend to the host, e.g. for an on-screen status line.
    fn send_status(&mut self);

    /// Begins playback of the given note. Fire-and-forget, called at most
    /// once per resolved press transition.
    fn start(&mut self, note: NoteId);
}

/// Placeholder backend which reports its existence but discards all notes.
pub struct IdleBackend<I, M> {
    info_updates: Sender<I>,
    message: M,
}

impl<I, M> IdleBackend<I, M> {
    pub fn new(info_updates: &Sender<I>, message: M) -> Self {
        Self {
            info_updates: info_updates.clone(),
            message,
        }
    }
}

impl<I: From<M> + Send, M: Send + Clone> Backend for IdleBackend<I, M> {
    fn send_status(&mut self) {
        self.info_updates.send(self.message.clone().into()).unwrap();
    }

    fn start(&mut self, _note: NoteId) {}
}

/// Logs playback requests instead of playing audio.
pub struct LogBackend<I, M> {
    info_updates: Sender<I>,
    message: M,
}

impl<I, M> LogBackend<I, M> {
    pub fn new(info_updates: &Sender<I>, message: M) -> Self {
        Self {
            info_updates: info_updates.clone(),
            message,
        }
    }
}

impl<I: From<M> + Send, M: Send + Clone> Backend for LogBackend<I, M> {
    fn send_status(&mut self) {
        self.info_updates.send(self.message.clone().into()).unwrap();
    }

    fn start(&mut self, note: NoteId) {
        match note.sample_name() {
            Some(sample) => log::info!("Playing sample `{sample}` (note {})", note.number()),
            None => log::warn!("No sample mapped for note {}", note.number()),
        }
    }
}
