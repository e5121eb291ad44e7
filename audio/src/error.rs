//! Error types for audio transforms and encoders.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AudioError>;

/// Errors produced by buffer transforms and encoders.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AudioError {
    /// The requested time range does not fit the buffer.
    #[error("audio: invalid range [{start}, {end}): {reason}")]
    InvalidRange {
        start: f64,
        end: f64,
        reason: &'static str,
    },

    /// Only mono and stereo buffers can be encoded.
    #[error("audio: unsupported channel layout: {0} channels")]
    UnsupportedChannelLayout(usize),

    /// Gain must be finite and non-negative.
    #[error("audio: invalid gain: {0}")]
    InvalidGain(f32),

    /// The buffer violates its shape invariants.
    #[error("audio: invalid buffer: {0}")]
    InvalidBuffer(String),

    /// Bytes are not a canonical 16-bit PCM WAV file.
    #[error("audio: invalid wav: {0}")]
    InvalidWav(String),

    /// The MP3 codec rejected its parameters or failed mid-stream.
    #[error("mp3: {0}")]
    Encoder(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AudioError::InvalidRange {
            start: 1.0,
            end: 0.5,
            reason: "end before start",
        };
        assert_eq!(err.to_string(), "audio: invalid range [1, 0.5): end before start");

        let err = AudioError::UnsupportedChannelLayout(6);
        assert!(err.to_string().contains("6 channels"));

        let err = AudioError::InvalidGain(-1.0);
        assert!(err.to_string().contains("invalid gain"));

        let err = AudioError::Encoder("init failed".to_string());
        assert_eq!(err.to_string(), "mp3: init failed");
    }
}
