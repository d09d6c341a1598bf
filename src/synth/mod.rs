//! Waveform synthesis module.
//!
//! Turns voice descriptors into sample buffers.

pub mod tone;

// Re-export commonly used items
pub use tone::{sample_count, synthesize};
