//! Output format tags.

use std::fmt;
use std::str::FromStr;

use chimecut_audio::codec::{mp3, wav};
use serde::{Deserialize, Serialize};

use crate::error::ExportError;

/// Container or bitstream produced by an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Canonical 16-bit PCM WAV.
    Wav,
    /// MPEG-1 Layer III.
    Mp3,
}

impl OutputFormat {
    /// Returns the format tag (`wav` or `mp3`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wav => "wav",
            Self::Mp3 => "mp3",
        }
    }

    /// Returns the MIME type of the encoded bytes.
    pub fn mime(&self) -> &'static str {
        match self {
            Self::Wav => wav::MIME_TYPE,
            Self::Mp3 => mp3::MIME_TYPE,
        }
    }

    /// Returns the file extension, without the dot.
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }

    /// Suggests a download file name.
    ///
    /// A WAV made from an MP3 upload is named `LockChime.wav`, the file a
    /// Tesla reads its custom lock sound from. Everything else is
    /// `edited-audio.<ext>`.
    pub fn file_name(&self, source_mime: Option<&str>) -> String {
        match (self, source_mime) {
            (Self::Wav, Some(mp3::MIME_TYPE)) => "LockChime.wav".to_string(),
            _ => format!("edited-audio.{}", self.extension()),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "wav" => Ok(Self::Wav),
            "mp3" => Ok(Self::Mp3),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}
