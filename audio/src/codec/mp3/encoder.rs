//! Block-wise MP3 encoding driver.

use tracing::debug;

use crate::error::{AudioError, Result};
use crate::pcm::{quantize, AudioBuffer};

/// Samples per channel in one MPEG-1 Layer III granule.
pub const GRANULE_SIZE: usize = 576;

/// Default samples per channel submitted per block (one full MPEG-1 frame).
pub const DEFAULT_BLOCK_SIZE: usize = 2 * GRANULE_SIZE;

/// Default constant bitrate in kbps.
pub const DEFAULT_BITRATE_KBPS: u32 = 128;

/// A streaming MP3 codec fed with 16-bit blocks.
///
/// Implementations keep their bit reservoir and lookahead between calls, so
/// the bytes returned by successive calls must be concatenated in order.
pub trait Mp3Codec {
    /// Encodes one block. `right` is `None` for mono input.
    ///
    /// An empty return means the codec buffered the input without completing
    /// a frame.
    fn encode_block(&mut self, left: &[i16], right: Option<&[i16]>) -> Result<Vec<u8>>;

    /// Emits whatever the codec still holds.
    fn flush(&mut self) -> Result<Vec<u8>>;
}

impl<C: Mp3Codec + ?Sized> Mp3Codec for &mut C {
    fn encode_block(&mut self, left: &[i16], right: Option<&[i16]>) -> Result<Vec<u8>> {
        (**self).encode_block(left, right)
    }

    fn flush(&mut self) -> Result<Vec<u8>> {
        (**self).flush()
    }
}

impl<C: Mp3Codec + ?Sized> Mp3Codec for Box<C> {
    fn encode_block(&mut self, left: &[i16], right: Option<&[i16]>) -> Result<Vec<u8>> {
        (**self).encode_block(left, right)
    }

    fn flush(&mut self) -> Result<Vec<u8>> {
        (**self).flush()
    }
}

/// MP3 encoder options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mp3Options {
    /// Constant bitrate in kbps.
    pub bitrate_kbps: u32,
    /// Samples per channel per submitted block.
    pub block_size: usize,
}

impl Default for Mp3Options {
    fn default() -> Self {
        Self {
            bitrate_kbps: DEFAULT_BITRATE_KBPS,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl Mp3Options {
    /// Sets the constant bitrate (in kbps).
    pub fn with_bitrate(mut self, kbps: u32) -> Self {
        self.bitrate_kbps = kbps;
        self
    }

    /// Sets the number of samples per channel per block.
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }
}

/// Drives an [`Mp3Codec`] over a whole buffer.
///
/// The encoder is consumed by [`Mp3Encoder::encode`], so codec state never
/// outlives a single encode.
pub struct Mp3Encoder<C: Mp3Codec> {
    codec: C,
    block_size: usize,
}

impl<C: Mp3Codec> Mp3Encoder<C> {
    /// Wraps a codec. `block_size` must be positive.
    pub fn new(codec: C, block_size: usize) -> Result<Self> {
        if block_size == 0 {
            return Err(AudioError::Encoder("block size must be positive".to_string()));
        }
        Ok(Self { codec, block_size })
    }

    /// Quantizes the buffer, submits it block by block and flushes.
    ///
    /// The last block carries only the remaining samples. Output chunks are
    /// concatenated in the order the codec produced them, flush trailer last.
    pub fn encode(mut self, buffer: &AudioBuffer) -> Result<Vec<u8>> {
        let format = buffer.format()?;
        let left = quantize(buffer.channel(0).unwrap_or_default());
        let right = if format.stereo {
            Some(quantize(buffer.channel(1).unwrap_or_default()))
        } else {
            None
        };

        let total = left.len();
        let mut chunks: Vec<Vec<u8>> = Vec::new();
        let mut blocks = 0usize;

        for start in (0..total).step_by(self.block_size) {
            let end = total.min(start + self.block_size);
            let right_block = right.as_ref().map(|r| &r[start..end]);
            let chunk = self.codec.encode_block(&left[start..end], right_block)?;
            blocks += 1;
            if !chunk.is_empty() {
                chunks.push(chunk);
            }
        }

        let trailer = self.codec.flush()?;
        if !trailer.is_empty() {
            chunks.push(trailer);
        }

        let out = chunks.concat();
        debug!(
            frames = total,
            blocks,
            chunks = chunks.len(),
            bytes = out.len(),
            "encode mp3"
        );
        Ok(out)
    }
}
