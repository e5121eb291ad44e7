//! Linear amplitude scaling.

use tracing::debug;

use super::AudioBuffer;
use crate::error::{AudioError, Result};

/// Multiplies every sample of every channel by `gain`.
///
/// No clamping is done here; quantizers clip when converting to integers.
/// A gain of `1.0` still returns a full copy.
pub fn apply_gain(buffer: &AudioBuffer, gain: f32) -> Result<AudioBuffer> {
    if !gain.is_finite() || gain < 0.0 {
        return Err(AudioError::InvalidGain(gain));
    }

    debug!(gain, frames = buffer.frame_count(), "apply gain");

    let channels = buffer
        .channels()
        .map(|ch| ch.iter().map(|&s| s * gain).collect())
        .collect();
    Ok(buffer.derive(channels))
}
