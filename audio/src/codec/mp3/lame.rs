//! [`Mp3Codec`] backed by LAME.

use mp3lame_encoder::{Bitrate, Builder, DualPcm, Encoder, FlushNoGap, MonoPcm, Quality};

use super::Mp3Codec;
use crate::error::{AudioError, Result};
use crate::pcm::Format;

/// Bytes LAME may need on flush.
const FLUSH_BUFFER_SIZE: usize = 7200;

/// Input sample rates LAME encodes without a resampling stage, in Hz.
pub const MIN_SAMPLE_RATE: u32 = 8000;
pub const MAX_SAMPLE_RATE: u32 = 96000;

/// Constant bitrates accepted by [`LameCodec`], in kbps.
pub const SUPPORTED_BITRATES: [u32; 9] = [64, 96, 112, 128, 160, 192, 224, 256, 320];

/// A LAME encoder configured for constant bitrate output.
pub struct LameCodec {
    encoder: Encoder,
    stereo: bool,
}

impl LameCodec {
    /// Creates a LAME encoder for the given input format and bitrate.
    pub fn new(format: Format, bitrate_kbps: u32) -> Result<Self> {
        let bitrate = bitrate_for(bitrate_kbps)?;
        if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&format.sample_rate) {
            return Err(AudioError::Encoder(format!(
                "unsupported sample rate: {} Hz (expected {}..={})",
                format.sample_rate, MIN_SAMPLE_RATE, MAX_SAMPLE_RATE
            )));
        }

        let mut builder =
            Builder::new().ok_or_else(|| AudioError::Encoder("failed to initialize LAME".to_string()))?;
        builder
            .set_num_channels(format.channels() as u8)
            .map_err(|e| AudioError::Encoder(format!("set channels: {:?}", e)))?;
        builder
            .set_sample_rate(format.sample_rate)
            .map_err(|e| AudioError::Encoder(format!("set sample rate {}: {:?}", format.sample_rate, e)))?;
        builder
            .set_brate(bitrate)
            .map_err(|e| AudioError::Encoder(format!("set bitrate {}: {:?}", bitrate_kbps, e)))?;
        builder
            .set_quality(Quality::Best)
            .map_err(|e| AudioError::Encoder(format!("set quality: {:?}", e)))?;

        let encoder = builder
            .build()
            .map_err(|e| AudioError::Encoder(format!("init params: {:?}", e)))?;

        Ok(Self {
            encoder,
            stereo: format.stereo,
        })
    }
}

impl Mp3Codec for LameCodec {
    fn encode_block(&mut self, left: &[i16], right: Option<&[i16]>) -> Result<Vec<u8>> {
        if left.is_empty() {
            return Ok(Vec::new());
        }

        // LAME recommends 1.25 * num_samples + 7200
        let mut out = Vec::with_capacity(left.len() * 5 / 4 + FLUSH_BUFFER_SIZE);
        let encoded = match (self.stereo, right) {
            (true, Some(right)) => {
                if right.len() != left.len() {
                    return Err(AudioError::Encoder(format!(
                        "channel blocks differ in length: {} vs {}",
                        left.len(),
                        right.len()
                    )));
                }
                self.encoder.encode(DualPcm { left, right }, out.spare_capacity_mut())
            }
            (false, None) => self.encoder.encode(MonoPcm(left), out.spare_capacity_mut()),
            (true, None) => {
                return Err(AudioError::Encoder("stereo encoder needs a right channel".to_string()));
            }
            (false, Some(_)) => {
                return Err(AudioError::Encoder("mono encoder got a right channel".to_string()));
            }
        }
        .map_err(|e| AudioError::Encoder(format!("encode: {:?}", e)))?;

        // SAFETY: LAME initialized the first `encoded` bytes of the spare capacity.
        unsafe { out.set_len(encoded) };
        Ok(out)
    }

    fn flush(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(FLUSH_BUFFER_SIZE);
        let encoded = self
            .encoder
            .flush::<FlushNoGap>(out.spare_capacity_mut())
            .map_err(|e| AudioError::Encoder(format!("flush: {:?}", e)))?;

        // SAFETY: LAME initialized the first `encoded` bytes of the spare capacity.
        unsafe { out.set_len(encoded) };
        Ok(out)
    }
}

fn bitrate_for(kbps: u32) -> Result<Bitrate> {
    Ok(match kbps {
        64 => Bitrate::Kbps64,
        96 => Bitrate::Kbps96,
        112 => Bitrate::Kbps112,
        128 => Bitrate::Kbps128,
        160 => Bitrate::Kbps160,
        192 => Bitrate::Kbps192,
        224 => Bitrate::Kbps224,
        256 => Bitrate::Kbps256,
        320 => Bitrate::Kbps320,
        other => return Err(AudioError::Encoder(format!("unsupported bitrate: {} kbps", other))),
    })
}
