//! Planar to interleaved sample layout.

use super::AudioBuffer;
use crate::error::{AudioError, Result};

/// Interleaves two channels as `L0, R0, L1, R1, ...`.
///
/// Both slices are expected to have the same length; extra samples in the
/// longer one are ignored.
pub fn interleave(left: &[f32], right: &[f32]) -> Vec<f32> {
    let mut out = Vec::with_capacity(left.len() * 2);
    for (&l, &r) in left.iter().zip(right) {
        out.push(l);
        out.push(r);
    }
    out
}

/// Returns the buffer's samples in WAV payload order.
///
/// Mono buffers pass through unchanged and stereo buffers are interleaved.
/// Other layouts are rejected.
pub fn interleaved(buffer: &AudioBuffer) -> Result<Vec<f32>> {
    match buffer.number_of_channels() {
        1 => Ok(buffer.channel(0).unwrap_or_default().to_vec()),
        2 => Ok(interleave(
            buffer.channel(0).unwrap_or_default(),
            buffer.channel(1).unwrap_or_default(),
        )),
        n => Err(AudioError::UnsupportedChannelLayout(n)),
    }
}
