//! Percussive tone synthesizer.
//!
//! Produces a finite buffer of normalized f32 samples from a
//! [`VoiceDescriptor`]: a sine tone (optionally sweeping linearly between
//! two frequencies) shaped by an exponential decay envelope.

use std::f64::consts::PI;

use crate::error::{GenError, Result};
use crate::types::VoiceDescriptor;

/// Decay time constant. Gives roughly a 1/e amplitude drop one fifth of
/// the way through the voice.
const DECAY_RATE: f64 = 5.0;

/// Synthesizes one voice into a sample buffer.
///
/// The buffer holds `round(sample_rate_hz * duration_ms / 1000)` samples.
/// Samples are not clamped here; the encoder clamps at quantization time.
///
/// The phase at sample `i` is `2π * f(t) * t` with the instantaneous
/// frequency evaluated at the current time rather than integrated.
/// Output compatibility depends on this exact formula; do not replace it
/// with a phase-continuous chirp.
///
/// # Arguments
///
/// * `descriptor` - The voice to synthesize
/// * `sample_rate_hz` - Output sample rate in Hz
///
/// # Returns
///
/// A vector of f32 amplitude samples. Zero duration yields an empty
/// buffer, which is valid.
pub fn synthesize(descriptor: &VoiceDescriptor, sample_rate_hz: u32) -> Result<Vec<f32>> {
    if let Some(reason) = descriptor.validate() {
        return Err(GenError::invalid_descriptor(reason));
    }

    if sample_rate_hz == 0 {
        return Err(GenError::invalid_descriptor("sample rate must be positive"));
    }

    let sample_count = sample_count(descriptor.duration_ms, sample_rate_hz);
    if sample_count == 0 {
        return Ok(Vec::new());
    }

    let rate = sample_rate_hz as f64;
    let n = sample_count as f64;
    let start_freq = descriptor.start_frequency_hz as f64;
    let end_freq = descriptor.end_frequency() as f64;
    let amplitude = descriptor.amplitude as f64;

    let mut buffer = Vec::with_capacity(sample_count);
    for i in 0..sample_count {
        let t = i as f64 / rate;
        let progress = i as f64 / n;
        let freq = start_freq + (end_freq - start_freq) * progress;

        let envelope = if descriptor.decay {
            (-DECAY_RATE * i as f64 / n).exp()
        } else {
            1.0
        };

        let phase = 2.0 * PI * freq * t;
        let sample = amplitude * envelope * phase.sin();
        buffer.push(sample as f32);
    }

    Ok(buffer)
}

/// Number of samples for a duration at a sample rate.
pub fn sample_count(duration_ms: f32, sample_rate_hz: u32) -> usize {
    let samples = sample_rate_hz as f64 * duration_ms as f64 / 1000.0;
    if samples <= 0.0 {
        0
    } else {
        samples.round() as usize
    }
}
