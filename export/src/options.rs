//! Export configuration.

use chimecut_audio::codec::mp3::{
    Mp3Options, DEFAULT_BITRATE_KBPS, DEFAULT_BLOCK_SIZE, GRANULE_SIZE, SUPPORTED_BITRATES,
};
use serde::{Deserialize, Serialize};

use crate::error::{ExportError, Result};
use crate::format::OutputFormat;

/// Encoder settings shared by every export of an [`Exporter`](crate::Exporter).
///
/// Missing fields take their defaults when deserialized, so an empty YAML
/// document is a valid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// MP3 constant bitrate in kbps.
    #[serde(default = "default_bitrate")]
    pub bitrate_kbps: u32,

    /// Samples per channel handed to the MP3 codec at a time.
    #[serde(default = "default_block_size")]
    pub block_size: usize,
}

fn default_bitrate() -> u32 {
    DEFAULT_BITRATE_KBPS
}

fn default_block_size() -> usize {
    DEFAULT_BLOCK_SIZE
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            bitrate_kbps: default_bitrate(),
            block_size: default_block_size(),
        }
    }
}

impl ExportOptions {
    /// Parses and validates options from YAML.
    pub fn from_yaml(s: &str) -> Result<Self> {
        let options: Self = if s.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(s).map_err(|e| ExportError::InvalidOptions(e.to_string()))?
        };
        options.validate()?;
        Ok(options)
    }

    /// Sets the MP3 bitrate (in kbps).
    pub fn with_bitrate(mut self, kbps: u32) -> Self {
        self.bitrate_kbps = kbps;
        self
    }

    /// Sets the MP3 block size.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    /// Checks the bitrate is supported and the block size is a positive
    /// multiple of the 576-sample granule.
    pub fn validate(&self) -> Result<()> {
        if !SUPPORTED_BITRATES.contains(&self.bitrate_kbps) {
            return Err(ExportError::InvalidOptions(format!(
                "bitrate {} kbps is not one of {:?}",
                self.bitrate_kbps, SUPPORTED_BITRATES
            )));
        }
        if self.block_size == 0 || self.block_size % GRANULE_SIZE != 0 {
            return Err(ExportError::InvalidOptions(format!(
                "block size {} is not a positive multiple of {}",
                self.block_size, GRANULE_SIZE
            )));
        }
        Ok(())
    }

    /// Returns the MP3 encoder options.
    pub fn mp3(&self) -> Mp3Options {
        Mp3Options::default()
            .with_bitrate(self.bitrate_kbps)
            .with_block_size(self.block_size)
    }
}

/// A single export: time range, gain and target format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Start of the range in seconds.
    pub start: f64,
    /// End of the range in seconds (exclusive).
    pub end: f64,
    /// Linear gain; 1.0 is unity.
    #[serde(default = "default_gain")]
    pub gain: f32,
    pub format: OutputFormat,
}

fn default_gain() -> f32 {
    1.0
}

impl ExportRequest {
    pub fn new(start: f64, end: f64, gain: f32, format: OutputFormat) -> Self {
        Self {
            start,
            end,
            gain,
            format,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExportOptions::default();
        assert_eq!(opts.bitrate_kbps, 128);
        assert_eq!(opts.block_size, 1152);
        assert!(opts.validate().is_ok());
        assert_eq!(opts.mp3(), Mp3Options::default());
    }

    #[test]
    fn test_from_yaml() {
        let opts = ExportOptions::from_yaml("bitrate_kbps: 192\n").unwrap();
        assert_eq!(opts.bitrate_kbps, 192);
        assert_eq!(opts.block_size, 1152);

        let opts = ExportOptions::from_yaml("block_size: 576").unwrap();
        assert_eq!(opts.block_size, 576);

        assert_eq!(ExportOptions::from_yaml("").unwrap(), ExportOptions::default());
    }

    #[test]
    fn test_from_yaml_rejects_invalid() {
        assert!(matches!(
            ExportOptions::from_yaml("bitrate_kbps: 100"),
            Err(ExportError::InvalidOptions(_))
        ));
        assert!(matches!(
            ExportOptions::from_yaml("block_size: 1000"),
            Err(ExportError::InvalidOptions(_))
        ));
        assert!(matches!(
            ExportOptions::from_yaml("block_size: 0"),
            Err(ExportError::InvalidOptions(_))
        ));
        assert!(matches!(
            ExportOptions::from_yaml("bitrate_kbps: [1, 2]"),
            Err(ExportError::InvalidOptions(_))
        ));
    }

    #[test]
    fn test_builders() {
        let opts = ExportOptions::default().with_bitrate(320).with_block_size(2304);
        assert_eq!(opts.mp3().bitrate_kbps, 320);
        assert_eq!(opts.mp3().block_size, 2304);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_request_serde() {
        let req: ExportRequest =
            serde_json::from_str(r#"{"start":0.5,"end":1.25,"format":"mp3"}"#).unwrap();
        assert_eq!(req, ExportRequest::new(0.5, 1.25, 1.0, OutputFormat::Mp3));

        let json = serde_json::to_string(&req).unwrap();
        let back: ExportRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, req);
    }
}
