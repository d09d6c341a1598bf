//! Output audio format parameters.
//!
//! An AudioFormat is constant across a generation run and, together with
//! the sample count, fully determines the WAV header.

use serde::{Deserialize, Serialize};

use crate::error::{GenError, Result};

/// Default sample rate for generated drum samples (44.1 kHz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

/// PCM output format parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioFormat {
    /// Sample rate in Hz.
    pub sample_rate_hz: u32,

    /// Number of interleaved channels per frame. Mono samples are
    /// duplicated across channels when greater than 1.
    pub channel_count: u16,

    /// Quantization width in bits. Only 16 is supported.
    pub bits_per_sample: u16,
}

impl Default for AudioFormat {
    fn default() -> Self {
        Self {
            sample_rate_hz: DEFAULT_SAMPLE_RATE,
            channel_count: 1,
            bits_per_sample: 16,
        }
    }
}

impl AudioFormat {
    /// Creates a mono 16-bit format at the given sample rate.
    pub fn mono(sample_rate_hz: u32) -> Self {
        Self {
            sample_rate_hz,
            ..Self::default()
        }
    }

    /// Bytes per frame (all channels, one sample instant).
    pub fn block_align(&self) -> u16 {
        self.channel_count * (self.bits_per_sample / 8)
    }

    /// Bytes of audio data per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate_hz * self.block_align() as u32
    }

    /// Validates the format parameters.
    ///
    /// Only 16-bit quantization is supported, and at least one channel
    /// and a positive sample rate are required.
    pub fn validate(&self) -> Result<()> {
        if self.bits_per_sample != 16 {
            return Err(GenError::invalid_format(format!(
                "{} bits per sample (only 16 supported)",
                self.bits_per_sample
            )));
        }

        if self.channel_count < 1 {
            return Err(GenError::invalid_format("channel count must be at least 1"));
        }

        if self.sample_rate_hz == 0 {
            return Err(GenError::invalid_format("sample rate must be positive"));
        }

        Ok(())
    }
}
