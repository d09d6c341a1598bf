//! RIFF/WAVE PCM container encoder.
//!
//! Builds the complete container (44-byte header + interleaved 16-bit
//! little-endian data) in memory, then writes it to disk in a single
//! operation so a failed write never leaves a truncated file with a
//! valid-looking header.

use std::fs;
use std::path::Path;

use crate::error::{GenError, Result};
use crate::types::AudioFormat;

/// Size of the RIFF/WAVE preamble preceding the sample data.
pub const HEADER_SIZE: usize = 44;

/// Maximum positive value of a 16-bit signed sample.
const I16_SCALE: f32 = 32767.0;

/// Quantizes one normalized sample to a 16-bit signed value.
///
/// The sample is clamped to [-1.0, 1.0] first. This clamp is the only
/// defense against wraparound artifacts from over-range synthesis, so a
/// full-scale 1.0 input maps to exactly 32767.
pub fn quantize(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * I16_SCALE).round() as i16
}

/// Encodes a sample buffer into a complete WAV container.
///
/// Mono samples are duplicated across channels when the format has more
/// than one. The result is `HEADER_SIZE + sample_count * block_align`
/// bytes; an empty buffer produces a well-formed 44-byte container.
///
/// # Arguments
///
/// * `samples` - Normalized f32 samples (clamped here at quantization)
/// * `format` - Output format; only 16-bit depth is supported
pub fn encode(samples: &[f32], format: &AudioFormat) -> Result<Vec<u8>> {
    format.validate()?;

    let block_align = format.block_align();
    let data_size = samples.len() as u32 * block_align as u32;

    let mut out = Vec::with_capacity(HEADER_SIZE + data_size as usize);

    // RIFF chunk
    out.extend_from_slice(b"RIFF");
    out.extend_from_slice(&(36 + data_size).to_le_bytes());
    out.extend_from_slice(b"WAVE");

    // fmt sub-chunk
    out.extend_from_slice(b"fmt ");
    out.extend_from_slice(&16u32.to_le_bytes());
    out.extend_from_slice(&1u16.to_le_bytes()); // linear PCM
    out.extend_from_slice(&format.channel_count.to_le_bytes());
    out.extend_from_slice(&format.sample_rate_hz.to_le_bytes());
    out.extend_from_slice(&format.byte_rate().to_le_bytes());
    out.extend_from_slice(&block_align.to_le_bytes());
    out.extend_from_slice(&format.bits_per_sample.to_le_bytes());

    // data sub-chunk
    out.extend_from_slice(b"data");
    out.extend_from_slice(&data_size.to_le_bytes());

    for sample in samples {
        let q = quantize(*sample).to_le_bytes();
        for _ in 0..format.channel_count {
            out.extend_from_slice(&q);
        }
    }

    Ok(out)
}

/// Encodes a sample buffer and writes the container to a file.
///
/// The container is buffered fully in memory before the write, so on
/// failure no partial header is left behind by this function.
pub fn write_wav(samples: &[f32], format: &AudioFormat, path: &Path) -> Result<()> {
    let container = encode(samples, format)?;

    fs::write(path, &container)
        .map_err(|e| GenError::io_failure(format!("writing {}", path.display()), e))?;

    Ok(())
}
