use pretty_assertions::assert_eq;

use crate::{
    keypress::{TouchPhase, TouchPoint},
    piano::PianoEngine,
    profile::{BackendInfo, BackendSpec, PianoProfile},
};

#[test]
fn serialize_and_deserialize_default_profile() {
    let profile = PianoProfile::default();

    let serialized = serde_yaml::to_string(&profile).unwrap();
    let deserialized: PianoProfile = serde_yaml::from_str(&serialized).unwrap();

    assert_eq!(deserialized, profile);
}

#[test]
fn deserialize_handwritten_profile() {
    let data = "num_white_keys: 7\nstages:\n  - backend_type: Log\n  - backend_type: NoAudio\n";

    let profile: PianoProfile = serde_yaml::from_str(data).unwrap();

    assert_eq!(
        profile,
        PianoProfile {
            num_white_keys: 7,
            stages: vec![BackendSpec::Log, BackendSpec::NoAudio],
        }
    );
}

#[test]
fn profile_stages_report_their_status() {
    let profile = PianoProfile {
        num_white_keys: 14,
        stages: vec![BackendSpec::Log, BackendSpec::NoAudio],
    };

    let (info_send, info_recv) = flume::unbounded::<BackendInfo>();
    let mut backends = Vec::new();
    for stage in &profile.stages {
        stage.create(&info_send, &mut backends);
    }

    let (engine, _) = PianoEngine::new(profile.num_white_keys, backends);
    engine.handle_resize(700, 300);
    engine.handle_touch_batch(&[TouchPoint { x: 210.0, y: 200.0 }], TouchPhase::Pressed);

    assert_eq!(
        info_recv.try_iter().collect::<Vec<_>>(),
        [BackendInfo::Log, BackendInfo::NoAudio]
    );
}
