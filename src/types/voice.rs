//! Voice descriptor type defining one synthesis request.
//!
//! A VoiceDescriptor is immutable once created and fully determines the
//! waveform a voice produces: frequency (or frequency sweep), duration,
//! decay behavior, and amplitude.

use serde::{Deserialize, Serialize};

/// Default amplitude used by the built-in kit.
pub const DEFAULT_AMPLITUDE: f32 = 0.8;

/// An immutable description of one percussive voice to synthesize.
///
/// Descriptors are plain data: they can come from the built-in kit table
/// or from a user-supplied JSON kit file. The synthesizer never mutates
/// them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoiceDescriptor {
    /// Tone frequency in Hz at the start of the voice.
    pub start_frequency_hz: f32,

    /// Tone frequency in Hz at the end of the voice.
    /// When absent, the tone holds `start_frequency_hz` throughout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_frequency_hz: Option<f32>,

    /// Duration of the voice in milliseconds.
    pub duration_ms: f32,

    /// Whether to apply the exponential decay envelope.
    #[serde(default = "default_decay")]
    pub decay: bool,

    /// Peak amplitude in [0, 1]. Values outside the range are accepted
    /// as-is; the encoder clamps at quantization time.
    #[serde(default = "default_amplitude")]
    pub amplitude: f32,
}

fn default_decay() -> bool {
    true
}

fn default_amplitude() -> f32 {
    DEFAULT_AMPLITUDE
}

impl VoiceDescriptor {
    /// Creates a constant-frequency decaying tone at the default amplitude.
    pub fn tone(frequency_hz: f32, duration_ms: f32) -> Self {
        Self {
            start_frequency_hz: frequency_hz,
            end_frequency_hz: None,
            duration_ms,
            decay: true,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Creates a decaying tone sweeping linearly between two frequencies.
    pub fn sweep(start_frequency_hz: f32, end_frequency_hz: f32, duration_ms: f32) -> Self {
        Self {
            start_frequency_hz,
            end_frequency_hz: Some(end_frequency_hz),
            duration_ms,
            decay: true,
            amplitude: DEFAULT_AMPLITUDE,
        }
    }

    /// Returns the effective end frequency (start frequency for non-swept
    /// tones).
    pub fn end_frequency(&self) -> f32 {
        self.end_frequency_hz.unwrap_or(self.start_frequency_hz)
    }

    /// Returns true if the descriptor requests a frequency sweep.
    pub fn is_swept(&self) -> bool {
        self.end_frequency() != self.start_frequency_hz
    }

    /// Validates the descriptor.
    ///
    /// Returns an error message if validation fails, None otherwise.
    /// Zero duration is valid (it yields an empty buffer); negative or
    /// non-finite values are not.
    pub fn validate(&self) -> Option<String> {
        if !self.duration_ms.is_finite() {
            return Some(format!(
                "duration must be finite, got {}",
                self.duration_ms
            ));
        }

        if self.duration_ms < 0.0 {
            return Some(format!(
                "duration must be non-negative, got {}ms",
                self.duration_ms
            ));
        }

        if !self.start_frequency_hz.is_finite() || !self.end_frequency().is_finite() {
            return Some("frequency must be finite".to_string());
        }

        if !self.amplitude.is_finite() {
            return Some(format!("amplitude must be finite, got {}", self.amplitude));
        }

        None
    }
}
