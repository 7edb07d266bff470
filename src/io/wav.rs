//! Mono 16-bit PCM WAV codec
//!
//! Serializes a floating-point sample buffer into the canonical 44-byte
//! RIFF/WAVE container and back. Encoding operates on the raw, unprocessed
//! capture; decoding is the exact inverse, so round-trip fidelity is bounded
//! only by 16-bit quantization noise. Anything malformed on decode is a hard
//! failure with no partial recovery.

use crate::error::ProcessingError;

/// Size of the canonical RIFF/WAVE/fmt/data header in bytes
pub const WAV_HEADER_LEN: usize = 44;

/// Encode samples as a mono 16-bit PCM WAV byte container
///
/// Each sample is clamped to [-1, 1] and quantized asymmetrically
/// (`s < 0 -> s * 32768`, `s >= 0 -> s * 32767`), little-endian. Output
/// length is exactly `44 + 2 * samples.len()`.
pub fn encode_wav(samples: &[f64], sample_rate: u32) -> Vec<u8> {
    log::debug!(
        "Encoding {} samples at {} Hz as WAV",
        samples.len(),
        sample_rate
    );

    let data_len = samples.len() * 2;
    let mut bytes = Vec::with_capacity(WAV_HEADER_LEN + data_len);

    // RIFF chunk
    bytes.extend_from_slice(b"RIFF");
    bytes.extend_from_slice(&((WAV_HEADER_LEN + data_len - 8) as u32).to_le_bytes());
    bytes.extend_from_slice(b"WAVE");

    // fmt subchunk: PCM, mono, 16-bit
    bytes.extend_from_slice(b"fmt ");
    bytes.extend_from_slice(&16u32.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&sample_rate.to_le_bytes());
    bytes.extend_from_slice(&(sample_rate * 2).to_le_bytes());
    bytes.extend_from_slice(&2u16.to_le_bytes());
    bytes.extend_from_slice(&16u16.to_le_bytes());

    // data subchunk
    bytes.extend_from_slice(b"data");
    bytes.extend_from_slice(&(data_len as u32).to_le_bytes());

    for &sample in samples {
        let s = sample.clamp(-1.0, 1.0);
        let q = if s < 0.0 { s * 32768.0 } else { s * 32767.0 };
        bytes.extend_from_slice(&(q.round() as i16).to_le_bytes());
    }

    bytes
}

/// Decode a mono 16-bit PCM WAV byte container
///
/// The exact inverse of [`encode_wav`]: negative PCM values divide by 32768,
/// non-negative by 32767.
///
/// # Returns
///
/// The decoded samples and the container's sample rate
///
/// # Errors
///
/// Returns `ProcessingError::MalformedWav` for a wrong magic, an unsupported
/// format (non-PCM, non-mono, not 16-bit), or a truncated payload.
pub fn decode_wav(bytes: &[u8]) -> Result<(Vec<f64>, u32), ProcessingError> {
    if bytes.len() < WAV_HEADER_LEN {
        return Err(ProcessingError::MalformedWav(format!(
            "Container of {} bytes is shorter than the {}-byte header",
            bytes.len(),
            WAV_HEADER_LEN
        )));
    }

    if &bytes[0..4] != b"RIFF" || &bytes[8..12] != b"WAVE" {
        return Err(ProcessingError::MalformedWav(
            "Missing RIFF/WAVE magic".to_string(),
        ));
    }
    if &bytes[12..16] != b"fmt " {
        return Err(ProcessingError::MalformedWav(
            "Missing fmt subchunk".to_string(),
        ));
    }
    if read_u32(bytes, 16) != 16 {
        return Err(ProcessingError::MalformedWav(
            "Unexpected fmt subchunk size".to_string(),
        ));
    }

    let format = read_u16(bytes, 20);
    if format != 1 {
        return Err(ProcessingError::MalformedWav(format!(
            "Unsupported audio format {} (expected PCM)",
            format
        )));
    }
    let channels = read_u16(bytes, 22);
    if channels != 1 {
        return Err(ProcessingError::MalformedWav(format!(
            "Unsupported channel count {} (expected mono)",
            channels
        )));
    }
    let bits = read_u16(bytes, 34);
    if bits != 16 {
        return Err(ProcessingError::MalformedWav(format!(
            "Unsupported bit depth {} (expected 16)",
            bits
        )));
    }

    if &bytes[36..40] != b"data" {
        return Err(ProcessingError::MalformedWav(
            "Missing data subchunk".to_string(),
        ));
    }
    let data_len = read_u32(bytes, 40) as usize;
    if data_len % 2 != 0 || bytes.len() - WAV_HEADER_LEN != data_len {
        return Err(ProcessingError::MalformedWav(format!(
            "Declared payload of {} bytes does not match {} available",
            data_len,
            bytes.len() - WAV_HEADER_LEN
        )));
    }

    let sample_rate = read_u32(bytes, 24);
    let samples = bytes[WAV_HEADER_LEN..]
        .chunks_exact(2)
        .map(|pair| {
            let v = i16::from_le_bytes([pair[0], pair[1]]);
            if v < 0 {
                v as f64 / 32768.0
            } else {
                v as f64 / 32767.0
            }
        })
        .collect();

    log::debug!("Decoded {} bytes of WAV at {} Hz", bytes.len(), sample_rate);
    Ok((samples, sample_rate))
}

fn read_u16(bytes: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([bytes[offset], bytes[offset + 1]])
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        bytes[offset],
        bytes[offset + 1],
        bytes[offset + 2],
        bytes[offset + 3],
    ])
}
