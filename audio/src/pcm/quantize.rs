//! Float to 16-bit signed integer conversion.

/// Converts a float sample to a 16-bit signed integer.
///
/// The sample is clamped to `[-1, 1]`. Negative values scale by 32768 and
/// non-negative values by 32767, so both full-scale ends are reachable and
/// nothing overflows.
#[inline]
pub fn to_i16(sample: f32) -> i16 {
    let s = sample.clamp(-1.0, 1.0);
    if s < 0.0 {
        (s * 32768.0).round() as i16
    } else {
        (s * 32767.0).round() as i16
    }
}

/// Converts a 16-bit sample back to a float using the matching scale.
#[inline]
pub fn from_i16(sample: i16) -> f32 {
    if sample < 0 {
        sample as f32 / 32768.0
    } else {
        sample as f32 / 32767.0
    }
}

/// Quantizes a slice of float samples.
pub fn quantize(samples: &[f32]) -> Vec<i16> {
    samples.iter().map(|&s| to_i16(s)).collect()
}

/// Serializes samples as little-endian bytes.
pub fn to_le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut data = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        data.extend_from_slice(&sample.to_le_bytes());
    }
    data
}
