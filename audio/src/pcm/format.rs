//! 16-bit PCM output format.

use crate::error::{AudioError, Result};

/// Bits per quantized sample. Every encoder in this crate writes 16-bit PCM.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Describes a 16-bit signed integer PCM layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Format {
    /// Sample rate in Hz (e.g., 44100, 48000).
    pub sample_rate: u32,
    /// True for stereo (2 channels), false for mono (1 channel).
    pub stereo: bool,
}

impl Format {
    /// Creates a new format with the given sample rate and mono audio.
    pub const fn mono(sample_rate: u32) -> Self {
        Self { sample_rate, stereo: false }
    }

    /// Creates a new format with the given sample rate and stereo audio.
    pub const fn stereo(sample_rate: u32) -> Self {
        Self { sample_rate, stereo: true }
    }

    /// Picks mono or stereo from a channel count.
    ///
    /// Any other channel count is an unsupported layout.
    pub fn for_channels(sample_rate: u32, channels: usize) -> Result<Self> {
        match channels {
            1 => Ok(Self::mono(sample_rate)),
            2 => Ok(Self::stereo(sample_rate)),
            n => Err(AudioError::UnsupportedChannelLayout(n)),
        }
    }

    /// Returns the number of channels (1 for mono, 2 for stereo).
    pub fn channels(&self) -> u16 {
        if self.stereo { 2 } else { 1 }
    }

    /// Returns the number of bytes per sample frame.
    /// 2 bytes for mono, 4 bytes for stereo.
    pub fn block_align(&self) -> u16 {
        self.channels() * (BITS_PER_SAMPLE / 8)
    }

    /// Returns the number of bytes per second of audio, or `None` when it
    /// does not fit the 32-bit header field.
    pub fn byte_rate(&self) -> Option<u32> {
        self.sample_rate.checked_mul(self.block_align() as u32)
    }
}

// Common format presets
impl Format {
    /// 44.1kHz mono
    pub const MONO_44K: Format = Format::mono(44100);
    /// 48kHz mono
    pub const MONO_48K: Format = Format::mono(48000);
    /// 44.1kHz stereo (CD quality)
    pub const STEREO_44K: Format = Format::stereo(44100);
    /// 48kHz stereo
    pub const STEREO_48K: Format = Format::stereo(48000);
}
