//! Decoded multi-channel audio held in memory.

use super::Format;
use crate::error::{AudioError, Result};

/// Planar floating-point audio.
///
/// Samples are nominally in `[-1.0, 1.0]`, but values outside that range are
/// kept as-is; clipping happens only when quantizing. All channels share the
/// same length. Every transform returns a new buffer and leaves its input
/// untouched, so one decoded buffer can be exported any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    sample_rate: u32,
    channels: Vec<Vec<f32>>,
}

/// Allocates a silent buffer with `channels` channels of `frame_count` samples.
pub fn make_buffer(channels: usize, frame_count: usize, sample_rate: u32) -> Result<AudioBuffer> {
    AudioBuffer::from_channels(sample_rate, vec![vec![0.0; frame_count]; channels])
}

impl AudioBuffer {
    /// Builds a buffer from per-channel sample vectors.
    pub fn from_channels(sample_rate: u32, channels: Vec<Vec<f32>>) -> Result<Self> {
        if sample_rate == 0 {
            return Err(AudioError::InvalidBuffer("sample rate must be positive".to_string()));
        }
        let Some(first) = channels.first() else {
            return Err(AudioError::InvalidBuffer("at least one channel is required".to_string()));
        };
        let frame_count = first.len();
        if let Some((i, ch)) = channels.iter().enumerate().find(|(_, ch)| ch.len() != frame_count) {
            return Err(AudioError::InvalidBuffer(format!(
                "channel {} has {} samples, expected {}",
                i,
                ch.len(),
                frame_count
            )));
        }
        Ok(Self { sample_rate, channels })
    }

    /// Builds a mono buffer.
    pub fn mono(sample_rate: u32, samples: Vec<f32>) -> Result<Self> {
        Self::from_channels(sample_rate, vec![samples])
    }

    /// Builds a stereo buffer from left and right channels.
    pub fn stereo(sample_rate: u32, left: Vec<f32>, right: Vec<f32>) -> Result<Self> {
        Self::from_channels(sample_rate, vec![left, right])
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of channels.
    pub fn number_of_channels(&self) -> usize {
        self.channels.len()
    }

    /// Samples per channel.
    pub fn frame_count(&self) -> usize {
        self.channels[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }

    /// Length in seconds.
    pub fn duration(&self) -> f64 {
        self.frame_count() as f64 / self.sample_rate as f64
    }

    /// Returns the samples of channel `index`.
    pub fn channel(&self, index: usize) -> Option<&[f32]> {
        self.channels.get(index).map(Vec::as_slice)
    }

    /// Iterates over all channels in order.
    pub fn channels(&self) -> impl Iterator<Item = &[f32]> {
        self.channels.iter().map(Vec::as_slice)
    }

    /// Returns the 16-bit output format for this buffer.
    ///
    /// Fails for layouts other than mono or stereo.
    pub fn format(&self) -> Result<Format> {
        Format::for_channels(self.sample_rate, self.number_of_channels())
    }

    /// Builds a derived buffer with the same sample rate. Callers guarantee
    /// the channel shape invariant.
    pub(crate) fn derive(&self, channels: Vec<Vec<f32>>) -> Self {
        debug_assert_eq!(channels.len(), self.channels.len());
        Self {
            sample_rate: self.sample_rate,
            channels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_buffer() {
        let buf = make_buffer(2, 480, 48000).unwrap();
        assert_eq!(buf.number_of_channels(), 2);
        assert_eq!(buf.frame_count(), 480);
        assert_eq!(buf.sample_rate(), 48000);
        assert!((buf.duration() - 0.01).abs() < 1e-12);
        assert!(buf.channels().all(|ch| ch.iter().all(|&s| s == 0.0)));
    }

    #[test]
    fn test_make_buffer_empty() {
        let buf = make_buffer(1, 0, 44100).unwrap();
        assert!(buf.is_empty());
        assert_eq!(buf.duration(), 0.0);
    }

    #[test]
    fn test_from_channels_rejects_mismatched_lengths() {
        let err = AudioBuffer::stereo(44100, vec![0.0; 4], vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, AudioError::InvalidBuffer(_)));
    }

    #[test]
    fn test_from_channels_rejects_zero_rate() {
        let err = AudioBuffer::mono(0, vec![0.0]).unwrap_err();
        assert!(matches!(err, AudioError::InvalidBuffer(_)));
    }

    #[test]
    fn test_from_channels_rejects_no_channels() {
        let err = AudioBuffer::from_channels(44100, Vec::new()).unwrap_err();
        assert!(matches!(err, AudioError::InvalidBuffer(_)));
    }

    #[test]
    fn test_out_of_range_samples_are_kept() {
        let buf = AudioBuffer::mono(8000, vec![2.5, -3.0]).unwrap();
        assert_eq!(buf.channel(0), Some(&[2.5, -3.0][..]));
    }

    #[test]
    fn test_format() {
        let mono = AudioBuffer::mono(44100, vec![0.0]).unwrap();
        assert_eq!(mono.format().unwrap(), Format::MONO_44K);

        let surround = make_buffer(6, 1, 48000).unwrap();
        assert_eq!(surround.format(), Err(AudioError::UnsupportedChannelLayout(6)));
    }

    #[test]
    fn test_channel_out_of_bounds() {
        let buf = AudioBuffer::mono(44100, vec![0.0]).unwrap();
        assert!(buf.channel(1).is_none());
    }

    #[test]
    fn test_buffer_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AudioBuffer>();
    }
}
