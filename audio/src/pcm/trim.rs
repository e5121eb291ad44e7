//! Sample-accurate slicing of a buffer by time.

use tracing::debug;

use super::AudioBuffer;
use crate::error::{AudioError, Result};

/// Converts a time in seconds to a sample index, `floor(time * sample_rate)`.
pub fn sample_index(time: f64, sample_rate: u32) -> f64 {
    (time * sample_rate as f64).floor()
}

/// Copies `[start, end)` seconds of every channel into a new buffer.
///
/// The copy covers samples `floor(start * rate)..floor(end * rate)` verbatim.
/// `start == end` yields an empty buffer. Ranges that start before zero, end
/// before they start, or reach past the last sample are rejected, never
/// clamped.
pub fn trim(buffer: &AudioBuffer, start: f64, end: f64) -> Result<AudioBuffer> {
    let invalid = |reason| AudioError::InvalidRange { start, end, reason };

    if !start.is_finite() || !end.is_finite() {
        return Err(invalid("times must be finite"));
    }
    if start < 0.0 {
        return Err(invalid("start is negative"));
    }
    if end < start {
        return Err(invalid("end is before start"));
    }

    let rate = buffer.sample_rate();
    let start_sample = sample_index(start, rate);
    let end_sample = sample_index(end, rate);
    if end_sample > buffer.frame_count() as f64 {
        return Err(invalid("end is past the end of the buffer"));
    }
    let (start_sample, end_sample) = (start_sample as usize, end_sample as usize);

    debug!(
        start_sample,
        end_sample,
        frames = end_sample - start_sample,
        "trim"
    );

    let channels = buffer
        .channels()
        .map(|ch| ch[start_sample..end_sample].to_vec())
        .collect();
    Ok(buffer.derive(channels))
}
