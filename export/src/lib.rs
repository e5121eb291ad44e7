//! Export pipeline for short audio clips.
//!
//! Takes a decoded [`AudioBuffer`], cuts a time range out of it, scales it by
//! a gain and encodes it as WAV or MP3:
//!
//! - [`process`] / [`Exporter`]: trim → gain → encode
//! - [`OutputFormat`] and [`EncodedOutput`]: format tags, MIME types, bytes
//! - [`ExportOptions`]: MP3 bitrate and block size, loadable from YAML
//! - [`Waveform`]: the decoded-data and region capability of a waveform view
//! - [`export_in_background`]: runs an export on tokio's blocking pool
//!
//! # Example
//!
//! ```rust
//! use chimecut_export::{process, AudioBuffer, OutputFormat};
//!
//! let buffer = AudioBuffer::mono(8000, vec![0.5; 8000]).unwrap();
//! let out = process(&buffer, 0.0, 0.5, 1.5, "wav").unwrap();
//! assert_eq!(out.format(), OutputFormat::Wav);
//! assert_eq!(out.mime(), "audio/wav");
//! assert_eq!(out.len(), 44 + 4000 * 2);
//! ```

mod background;
mod error;
mod format;
mod options;
mod output;
mod pipeline;
mod waveform;

pub use background::export_in_background;
pub use error::{ErrorKind, ExportError, Result};
pub use format::OutputFormat;
pub use options::{ExportOptions, ExportRequest};
pub use output::EncodedOutput;
pub use pipeline::{process, Exporter};
pub use waveform::{Region, Selection, Waveform};

pub use chimecut_audio::AudioBuffer;
