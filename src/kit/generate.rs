//! Kit generation driver.
//!
//! Runs the synthesize → encode → write pipeline for each voice in a
//! kit. Voices are independent: one voice failing does not stop the
//! others, and all failures are collected into the final report.

use std::fs;
use std::path::{Path, PathBuf};

use crate::audio::write_wav;
use crate::error::{GenError, Result};
use crate::kit::Kit;
use crate::synth::synthesize;
use crate::types::{AudioFormat, VoiceDescriptor};

/// One successfully generated voice file.
#[derive(Debug, Clone)]
pub struct VoiceFile {
    /// Voice name from the kit table.
    pub name: String,
    /// Path the WAV file was written to.
    pub path: PathBuf,
    /// Number of samples in the file.
    pub sample_count: usize,
}

/// Outcome of generating a kit: written files plus any per-voice
/// failures.
#[derive(Debug)]
pub struct KitReport {
    pub written: Vec<VoiceFile>,
    pub failures: Vec<(String, GenError)>,
}

impl KitReport {
    /// Returns true if every voice was generated.
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Generates every voice in a kit into `out_dir`.
///
/// The output directory is created if absent (idempotent). Each voice is
/// written to `<out_dir>/<name>.wav`. A voice that fails to synthesize
/// or write produces no file and is recorded in the report; remaining
/// voices still run.
///
/// Returns an error only if the output directory itself cannot be
/// created.
pub fn generate_kit(kit: &Kit, format: &AudioFormat, out_dir: &Path) -> Result<KitReport> {
    fs::create_dir_all(out_dir).map_err(|e| {
        GenError::io_failure(
            format!("creating output directory {}", out_dir.display()),
            e,
        )
    })?;

    let mut written = Vec::new();
    let mut failures = Vec::new();

    for (name, descriptor) in kit {
        let path = out_dir.join(format!("{}.wav", name));
        match generate_voice(descriptor, format, &path) {
            Ok(sample_count) => written.push(VoiceFile {
                name: name.clone(),
                path,
                sample_count,
            }),
            Err(e) => failures.push((name.clone(), e)),
        }
    }

    Ok(KitReport { written, failures })
}

/// Generates a single voice to a file, returning its sample count.
pub fn generate_voice(
    descriptor: &VoiceDescriptor,
    format: &AudioFormat,
    path: &Path,
) -> Result<usize> {
    let samples = synthesize(descriptor, format.sample_rate_hz)?;
    write_wav(&samples, format, path)?;
    Ok(samples.len())
}
