//! CLI argument parser.
//!
//! Provides the command-line interface for generating drum kits.

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::kit::{builtin_kit, load_kit, Kit};
use crate::types::AudioFormat;

/// Default output directory for generated samples.
pub const DEFAULT_OUTPUT_DIR: &str = "assets/samples";

/// drumgen: procedural drum kit sample generator
#[derive(Parser, Debug)]
#[command(name = "drumgen")]
#[command(about = "Procedural drum kit sample generator producing 16-bit PCM WAV files")]
#[command(version)]
pub struct Cli {
    /// Directory to write WAV files into (created if absent)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// JSON kit file replacing the built-in voice table
    #[arg(short, long)]
    pub kit: Option<PathBuf>,

    /// Output sample rate in Hz
    #[arg(short, long, default_value = "44100")]
    pub sample_rate: u32,

    /// Generate only the named voices (repeatable)
    #[arg(short, long = "voice")]
    pub voices: Vec<String>,

    /// List the effective kit table without generating anything
    #[arg(short, long)]
    pub list: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Returns the effective output directory.
    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Returns the output format implied by the arguments.
    pub fn format(&self) -> AudioFormat {
        AudioFormat::mono(self.sample_rate)
    }

    /// Loads the effective kit: the JSON kit file if given, otherwise the
    /// built-in table, filtered to `--voice` selections when present.
    pub fn resolve_kit(&self) -> Result<Kit> {
        let mut kit = match &self.kit {
            Some(path) => load_kit(path)?,
            None => builtin_kit(),
        };

        if !self.voices.is_empty() {
            let unknown: Vec<&String> = self
                .voices
                .iter()
                .filter(|name| !kit.contains_key(*name))
                .collect();
            if let Some(name) = unknown.first() {
                return Err(crate::error::GenError::invalid_descriptor(format!(
                    "unknown voice '{}' (use --list to see the kit)",
                    name
                )));
            }
            kit.retain(|name, _| self.voices.iter().any(|v| v == name));
        }

        Ok(kit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(voices: Vec<&str>) -> Cli {
        Cli {
            output_dir: None,
            kit: None,
            sample_rate: 44100,
            voices: voices.into_iter().map(String::from).collect(),
            list: false,
        }
    }

    #[test]
    fn default_output_dir() {
        assert_eq!(cli(vec![]).output_dir(), PathBuf::from("assets/samples"));
    }

    #[test]
    fn format_uses_sample_rate() {
        let mut c = cli(vec![]);
        c.sample_rate = 22050;
        let f = c.format();
        assert_eq!(f.sample_rate_hz, 22050);
        assert_eq!(f.channel_count, 1);
        assert_eq!(f.bits_per_sample, 16);
    }

    #[test]
    fn resolve_kit_defaults_to_builtin() {
        let kit = cli(vec![]).resolve_kit().unwrap();
        assert_eq!(kit.len(), 10);
    }

    #[test]
    fn voice_filter_restricts_kit() {
        let kit = cli(vec!["kick", "snare"]).resolve_kit().unwrap();
        assert_eq!(kit.len(), 2);
        assert!(kit.contains_key("kick"));
        assert!(kit.contains_key("snare"));
    }

    #[test]
    fn unknown_voice_is_an_error() {
        let err = cli(vec!["cowbell"]).resolve_kit().unwrap_err();
        assert!(err.message.contains("cowbell"));
    }
}
