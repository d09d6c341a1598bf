//! Core types for drumgen.
//!
//! This module re-exports the data types used throughout the generator:
//! - [`VoiceDescriptor`]: an immutable synthesis request for one voice
//! - [`AudioFormat`]: PCM output format parameters

mod format;
mod voice;

// Re-export all types at the module level
pub use format::{AudioFormat, DEFAULT_SAMPLE_RATE};
pub use voice::{VoiceDescriptor, DEFAULT_AMPLITUDE};
