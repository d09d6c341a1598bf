//! Audio output module.
//!
//! Provides PCM WAV container encoding and file writing.

pub mod wav;

// Re-export commonly used items
pub use wav::{encode, quantize, write_wav, HEADER_SIZE};
