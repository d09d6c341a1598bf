//! Voice tables: the built-in drum kit and JSON kit files.
//!
//! A kit is an immutable mapping of voice name to descriptor. The
//! built-in table covers a standard ten-piece kit; a JSON file with the
//! same shape can replace it.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::types::VoiceDescriptor;

/// A named, ordered set of voices. BTreeMap keeps iteration (and thus
/// generation order and reporting) deterministic.
pub type Kit = BTreeMap<String, VoiceDescriptor>;

/// Returns the built-in ten-voice drum kit.
///
/// Each voice has a distinct frequency signature so samples are easy to
/// identify by ear.
pub fn builtin_kit() -> Kit {
    let voices = [
        ("kick", VoiceDescriptor::tone(60.0, 150.0)),
        ("snare", VoiceDescriptor::tone(200.0, 100.0)),
        ("closed_hihat", VoiceDescriptor::tone(8000.0, 50.0)),
        ("open_hihat", VoiceDescriptor::tone(10000.0, 200.0)),
        ("tom_high", VoiceDescriptor::tone(500.0, 80.0)),
        ("tom_mid", VoiceDescriptor::tone(300.0, 100.0)),
        ("tom_low", VoiceDescriptor::tone(150.0, 120.0)),
        ("tom_floor", VoiceDescriptor::tone(100.0, 140.0)),
        ("ride", VoiceDescriptor::tone(6000.0, 300.0)),
        ("crash", VoiceDescriptor::tone(12000.0, 400.0)),
    ];

    voices
        .into_iter()
        .map(|(name, desc)| (name.to_string(), desc))
        .collect()
}

/// Loads a kit from a JSON file.
///
/// The file is a JSON object mapping voice names to descriptors:
///
/// ```json
/// {
///   "kick": { "start_frequency_hz": 150.0, "end_frequency_hz": 50.0,
///             "duration_ms": 100.0 },
///   "clave": { "start_frequency_hz": 2500.0, "duration_ms": 30.0,
///              "decay": true, "amplitude": 0.6 }
/// }
/// ```
pub fn load_kit(path: &Path) -> Result<Kit> {
    let contents = fs::read_to_string(path)
        .map_err(|e| GenError::io_failure(format!("reading kit file {}", path.display()), e))?;

    let kit: Kit = serde_json::from_str(&contents).map_err(|e| {
        GenError::invalid_descriptor(format!("kit file {}: {}", path.display(), e))
    })?;

    for (name, descriptor) in &kit {
        if let Some(reason) = descriptor.validate() {
            return Err(GenError::invalid_descriptor(format!(
                "voice '{}': {}",
                name, reason
            )));
        }
    }

    Ok(kit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_kit_has_ten_voices() {
        let kit = builtin_kit();
        assert_eq!(kit.len(), 10);
        assert!(kit.contains_key("kick"));
        assert!(kit.contains_key("crash"));
    }

    #[test]
    fn builtin_kick_parameters() {
        let kit = builtin_kit();
        let kick = &kit["kick"];
        assert_eq!(kick.start_frequency_hz, 60.0);
        assert_eq!(kick.duration_ms, 150.0);
        assert!(kick.decay);
        assert_eq!(kick.amplitude, 0.8);
    }

    #[test]
    fn builtin_kit_iterates_in_name_order() {
        let kit = builtin_kit();
        let names: Vec<&str> = kit.keys().map(|s| s.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }

    #[test]
    fn load_kit_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kit.json");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(
            file,
            r#"{{
                "kick": {{ "start_frequency_hz": 150.0,
                           "end_frequency_hz": 50.0,
                           "duration_ms": 100.0 }},
                "clave": {{ "start_frequency_hz": 2500.0,
                            "duration_ms": 30.0,
                            "amplitude": 0.6 }}
            }}"#
        )
        .unwrap();

        let kit = load_kit(&path).unwrap();
        assert_eq!(kit.len(), 2);
        assert!(kit["kick"].is_swept());
        assert_eq!(kit["kick"].end_frequency(), 50.0);
        assert_eq!(kit["clave"].amplitude, 0.6);
        assert!(kit["clave"].decay); // defaulted
    }

    #[test]
    fn load_kit_rejects_invalid_descriptor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kit.json");
        std::fs::write(
            &path,
            r#"{ "bad": { "start_frequency_hz": 100.0, "duration_ms": -1.0 } }"#,
        )
        .unwrap();

        let err = load_kit(&path).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::InvalidDescriptor);
        assert!(err.message.contains("bad"));
    }

    #[test]
    fn load_kit_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kit.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(load_kit(&path).is_err());
    }

    #[test]
    fn load_kit_missing_file_is_io_failure() {
        let err = load_kit(Path::new("/no/such/kit.json")).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::IoFailure);
    }
}
