//! MP3 (MPEG-1 Layer III) encoding.
//!
//! [`Mp3Encoder`] feeds 16-bit blocks to any [`Mp3Codec`] and concatenates
//! the output in order. [`LameCodec`] is the LAME-backed codec used by
//! [`encode_mp3`].

mod encoder;
mod lame;

pub use encoder::*;
pub use lame::{LameCodec, MAX_SAMPLE_RATE, MIN_SAMPLE_RATE, SUPPORTED_BITRATES};

use crate::error::Result;
use crate::pcm::AudioBuffer;

/// MIME type of the encoded output.
pub const MIME_TYPE: &str = "audio/mpeg";

/// Encodes a mono or stereo buffer as a constant-bitrate MP3 stream.
///
/// A fresh LAME instance is created per call; no ID3 tags are written.
pub fn encode_mp3(buffer: &AudioBuffer, options: &Mp3Options) -> Result<Vec<u8>> {
    let format = buffer.format()?;
    let codec = LameCodec::new(format, options.bitrate_kbps)?;
    Mp3Encoder::new(codec, options.block_size)?.encode(buffer)
}
