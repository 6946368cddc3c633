use std::{fs, path::Path};

use flume::Sender;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    backend::{Backends, IdleBackend, LogBackend},
    layout::DEFAULT_NUM_WHITE_KEYS,
    AppError, AppResult,
};

/// Persistent keyboard settings, stored next to the executable as YAML.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct PianoProfile {
    pub num_white_keys: u16,
    pub stages: Vec<BackendSpec>,
}

impl Default for PianoProfile {
    fn default() -> Self {
        Self {
            num_white_keys: DEFAULT_NUM_WHITE_KEYS,
            stages: vec![BackendSpec::Log],
        }
    }
}

impl PianoProfile {
    /// Loads the profile from the given location. A missing file is replaced
    /// with a freshly written default profile.
    pub fn load(file_name: &str) -> AppResult<Self> {
        let location = Path::new(file_name);

        if location.exists() {
            info!("Loading config file `{file_name}`");
            let data = fs::read_to_string(location)?;
            serde_yaml::from_str(&data)
                .map_err(|err| AppError::CommandError(format!("Could not deserialize file: {err}")))
        } else {
            info!("Config file not found. Creating `{file_name}`");
            let profile = Self::default();
            let data = serde_yaml::to_string(&profile)
                .map_err(|err| AppError::CommandError(format!("Could not serialize file: {err}")))?;
            fs::write(location, data)?;
            Ok(profile)
        }
    }
}

/// One backend stage of the profile.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "backend_type")]
pub enum BackendSpec {
    /// Logs every playback request by sample name.
    Log,
    /// Discards all playback requests.
    NoAudio,
}

impl BackendSpec {
    pub fn create<I: From<BackendInfo> + Send + 'static>(
        &self,
        info_updates: &Sender<I>,
        backends: &mut Backends,
    ) {
        match self {
            BackendSpec::Log => {
                backends.push(Box::new(LogBackend::new(info_updates, BackendInfo::Log)))
            }
            BackendSpec::NoAudio => backends.push(Box::new(IdleBackend::new(
                info_updates,
                BackendInfo::NoAudio,
            ))),
        }
    }
}

/// Status message identifying the backend that produced it.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum BackendInfo {
    Log,
    NoAudio,
}
