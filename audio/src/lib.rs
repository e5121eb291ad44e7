//! PCM transforms and encoders for short audio clips.
//!
//! This crate provides:
//!
//! - `pcm`: the in-memory [`AudioBuffer`] plus trim, gain, interleave and
//!   16-bit quantization
//! - `codec::wav`: byte-exact canonical PCM WAV output
//! - `codec::mp3`: block-wise MP3 encoding
//!
//! # Example
//!
//! ```rust
//! use chimecut_audio::codec::wav;
//! use chimecut_audio::pcm::{apply_gain, trim, AudioBuffer};
//!
//! let buffer = AudioBuffer::stereo(44100, vec![0.1; 44100], vec![-0.1; 44100]).unwrap();
//! let clip = apply_gain(&trim(&buffer, 0.0, 0.5).unwrap(), 1.5).unwrap();
//! let bytes = wav::encode_wav(&clip).unwrap();
//! assert_eq!(bytes.len(), wav::HEADER_LEN + 22050 * 2 * 2);
//! ```

pub mod codec;
pub mod error;
pub mod pcm;

pub use error::{AudioError, Result};
pub use pcm::{AudioBuffer, Format};
