//! Export error types.

use chimecut_audio::AudioError;
use thiserror::Error;

/// Result alias for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

/// Errors surfaced by the export pipeline.
///
/// Stage failures are wrapped unchanged in [`ExportError::Audio`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExportError {
    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error("export: unsupported format: {0:?}")]
    UnsupportedFormat(String),

    #[error("export: no decoded audio available")]
    DecodeUnavailable,

    #[error("export: invalid options: {0}")]
    InvalidOptions(String),

    #[error("export: background task failed: {0}")]
    Background(String),
}

/// Coarse classification of an [`ExportError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidRange,
    UnsupportedChannelLayout,
    UnsupportedFormat,
    DecodeUnavailable,
    EncoderFailure,
    InvalidInput,
    /// The offloaded export task panicked or was cancelled.
    TaskFailed,
}

impl ExportError {
    /// Returns the kind of failure, looking through wrapped stage errors.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Audio(AudioError::InvalidRange { .. }) => ErrorKind::InvalidRange,
            Self::Audio(AudioError::UnsupportedChannelLayout(_)) => ErrorKind::UnsupportedChannelLayout,
            Self::Audio(AudioError::Encoder(_)) => ErrorKind::EncoderFailure,
            Self::Background(_) => ErrorKind::TaskFailed,
            Self::Audio(_) | Self::InvalidOptions(_) => ErrorKind::InvalidInput,
            Self::UnsupportedFormat(_) => ErrorKind::UnsupportedFormat,
            Self::DecodeUnavailable => ErrorKind::DecodeUnavailable,
        }
    }
}
