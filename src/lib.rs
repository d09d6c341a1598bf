//! drumgen: procedural drum kit sample generator.
//!
//! Synthesizes short percussive tones (sine with optional linear
//! frequency sweep and exponential decay) and writes each one as a
//! standard 16-bit PCM mono RIFF/WAVE file.
//!
//! # Modules
//!
//! - [`types`]: Core data types (VoiceDescriptor, AudioFormat)
//! - [`synth`]: Waveform synthesis
//! - [`audio`]: WAV container encoding and file output
//! - [`kit`]: Voice tables and the per-kit generation driver
//! - [`error`]: Error types and codes (GenError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use drumgen::kit::{builtin_kit, generate_kit};
//! use drumgen::types::AudioFormat;
//!
//! let report = generate_kit(
//!     &builtin_kit(),
//!     &AudioFormat::default(),
//!     std::path::Path::new("assets/samples"),
//! )?;
//! assert!(report.all_succeeded());
//! ```

pub mod audio;
pub mod cli;
pub mod error;
pub mod kit;
pub mod synth;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{ErrorCode, GenError, Result};
pub use kit::{builtin_kit, generate_kit, Kit, KitReport};
pub use synth::synthesize;
pub use types::{AudioFormat, VoiceDescriptor};
