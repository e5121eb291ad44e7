//! Canonical 16-bit PCM WAV container.
//!
//! The layout is the plain 44-byte RIFF header followed by the interleaved
//! little-endian samples:
//!
//! | offset | size | field                         |
//! |--------|------|-------------------------------|
//! | 0      | 4    | `RIFF`                        |
//! | 4      | 4    | `36 + data_len`               |
//! | 8      | 4    | `WAVE`                        |
//! | 12     | 4    | `fmt `                        |
//! | 16     | 4    | 16                            |
//! | 20     | 2    | 1 (PCM)                       |
//! | 22     | 2    | channels                      |
//! | 24     | 4    | sample rate                   |
//! | 28     | 4    | byte rate                     |
//! | 32     | 2    | block align                   |
//! | 34     | 2    | bits per sample (16)          |
//! | 36     | 4    | `data`                        |
//! | 40     | 4    | `data_len`                    |

use tracing::debug;

use crate::error::{AudioError, Result};
use crate::pcm::{interleaved, quantize, to_le_bytes, AudioBuffer, Format, BITS_PER_SAMPLE};

/// Size of the canonical header in bytes.
pub const HEADER_LEN: usize = 44;

/// MIME type of the encoded output.
pub const MIME_TYPE: &str = "audio/wav";

const PCM_FORMAT: u16 = 1;
const FMT_CHUNK_LEN: u32 = 16;

/// Encodes a mono or stereo buffer as a 16-bit PCM WAV file.
pub fn encode_wav(buffer: &AudioBuffer) -> Result<Vec<u8>> {
    let format = buffer.format()?;
    let samples = interleaved(buffer)?;
    let data_len = samples.len() * 2;

    debug!(
        channels = format.channels(),
        sample_rate = format.sample_rate,
        data_len,
        "encode wav"
    );

    let mut wav = Vec::with_capacity(HEADER_LEN);
    write_header(&mut wav, format, data_len)?;
    wav.extend_from_slice(&to_le_bytes(&quantize(&samples)));
    Ok(wav)
}

/// Appends a 44-byte header for `data_len` bytes of 16-bit samples.
///
/// Fails when the byte rate or the RIFF size does not fit its 32-bit field.
pub fn write_header(wav: &mut Vec<u8>, format: Format, data_len: usize) -> Result<()> {
    let byte_rate = format.byte_rate().ok_or_else(|| {
        AudioError::InvalidBuffer(format!("sample rate {} is too high for WAV", format.sample_rate))
    })?;
    let (data_len, riff_len) = u32::try_from(data_len)
        .ok()
        .and_then(|len| Some((len, len.checked_add(36)?)))
        .ok_or_else(|| {
            AudioError::InvalidBuffer(format!("{data_len} byte payload is too large for WAV"))
        })?;

    // RIFF header
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&riff_len.to_le_bytes());
    wav.extend_from_slice(b"WAVE");

    // fmt chunk
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&FMT_CHUNK_LEN.to_le_bytes());
    wav.extend_from_slice(&PCM_FORMAT.to_le_bytes());
    wav.extend_from_slice(&format.channels().to_le_bytes());
    wav.extend_from_slice(&format.sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&format.block_align().to_le_bytes());
    wav.extend_from_slice(&BITS_PER_SAMPLE.to_le_bytes());

    // data chunk
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    Ok(())
}

/// Fields read back from a canonical WAV header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavHeader {
    pub format: Format,
    pub data_len: u32,
}

impl WavHeader {
    /// Parses the 44-byte header written by [`encode_wav`].
    ///
    /// Only canonical 16-bit PCM mono/stereo headers are accepted.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < HEADER_LEN {
            return Err(invalid(format!("{} bytes is shorter than a header", data.len())));
        }
        if &data[0..4] != b"RIFF" || &data[8..12] != b"WAVE" {
            return Err(invalid("missing RIFF/WAVE tags"));
        }
        if &data[12..16] != b"fmt " || u32_at(data, 16) != FMT_CHUNK_LEN {
            return Err(invalid("missing 16-byte fmt chunk"));
        }
        if u16_at(data, 20) != PCM_FORMAT {
            return Err(invalid("not PCM"));
        }
        if u16_at(data, 34) != BITS_PER_SAMPLE {
            return Err(invalid("not 16-bit"));
        }
        if &data[36..40] != b"data" {
            return Err(invalid("missing data chunk"));
        }

        let channels = u16_at(data, 22) as usize;
        let format = Format::for_channels(u32_at(data, 24), channels)?;
        let byte_rate = format
            .byte_rate()
            .ok_or_else(|| invalid("sample rate overflows byte rate"))?;
        if u32_at(data, 28) != byte_rate || u16_at(data, 32) != format.block_align() {
            return Err(invalid("byte rate or block align does not match channels"));
        }

        let data_len = u32_at(data, 40);
        if data_len % format.block_align() as u32 != 0 {
            return Err(invalid(format!("data length {data_len} is not a whole number of frames")));
        }
        if data_len.checked_add(36) != Some(u32_at(data, 4)) {
            return Err(invalid("RIFF size does not match data length"));
        }
        Ok(Self { format, data_len })
    }

    /// Number of sample frames in the payload.
    pub fn frame_count(&self) -> usize {
        self.data_len as usize / self.format.block_align() as usize
    }
}

/// Parses the header and returns the interleaved payload samples.
pub fn decode_pcm16(data: &[u8]) -> Result<(WavHeader, Vec<i16>)> {
    let header = WavHeader::parse(data)?;
    let payload = &data[HEADER_LEN..];
    if payload.len() != header.data_len as usize {
        return Err(invalid(format!(
            "payload is {} bytes, header declares {}",
            payload.len(),
            header.data_len
        )));
    }
    let samples = payload
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]))
        .collect();
    Ok((header, samples))
}

fn invalid(msg: impl Into<String>) -> AudioError {
    AudioError::InvalidWav(msg.into())
}

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([data[offset], data[offset + 1], data[offset + 2], data[offset + 3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pcm::{from_i16, make_buffer};

    #[test]
    fn test_header_layout_stereo() {
        let buf = AudioBuffer::stereo(44100, vec![0.0; 3], vec![0.0; 3]).unwrap();
        let wav = encode_wav(&buf).unwrap();

        assert_eq!(wav.len(), 44 + 12);
        assert_eq!(&wav[0..4], b"RIFF");
        assert_eq!(u32_at(&wav, 4), 36 + 12);
        assert_eq!(&wav[8..12], b"WAVE");
        assert_eq!(&wav[12..16], b"fmt ");
        assert_eq!(u32_at(&wav, 16), 16);
        assert_eq!(u16_at(&wav, 20), 1);
        assert_eq!(u16_at(&wav, 22), 2);
        assert_eq!(u32_at(&wav, 24), 44100);
        assert_eq!(u32_at(&wav, 28), 44100 * 4);
        assert_eq!(u16_at(&wav, 32), 4);
        assert_eq!(u16_at(&wav, 34), 16);
        assert_eq!(&wav[36..40], b"data");
        assert_eq!(u32_at(&wav, 40), 12);
    }

    #[test]
    fn test_header_bytes_mono() {
        let buf = AudioBuffer::mono(8000, vec![0.0]).unwrap();
        let wav = encode_wav(&buf).unwrap();
        let expected: [u8; 46] = [
            b'R', b'I', b'F', b'F', 38, 0, 0, 0, b'W', b'A', b'V', b'E', //
            b'f', b'm', b't', b' ', 16, 0, 0, 0, 1, 0, 1, 0, //
            0x40, 0x1F, 0, 0, 0x80, 0x3E, 0, 0, 2, 0, 16, 0, //
            b'd', b'a', b't', b'a', 2, 0, 0, 0, 0, 0,
        ];
        assert_eq!(wav, expected);
    }

    #[test]
    fn test_payload_is_interleaved_and_quantized() {
        let buf = AudioBuffer::stereo(8000, vec![1.0, -1.0], vec![0.5, 2.0]).unwrap();
        let (_, samples) = decode_pcm16(&encode_wav(&buf).unwrap()).unwrap();
        assert_eq!(samples, vec![32767, 16384, -32768, 32767]);
    }

    #[test]
    fn test_round_trip() {
        let left: Vec<f32> = (0..500).map(|i| ((i as f32) * 0.05).sin() * 0.8).collect();
        let right: Vec<f32> = left.iter().map(|s| -s * 0.5).collect();
        let buf = AudioBuffer::stereo(22050, left.clone(), right.clone()).unwrap();

        let (header, samples) = decode_pcm16(&encode_wav(&buf).unwrap()).unwrap();
        assert_eq!(header.format, Format::stereo(22050));
        assert_eq!(header.data_len, 2 * 2 * 500);
        assert_eq!(header.frame_count(), 500);

        for (i, frame) in samples.chunks_exact(2).enumerate() {
            assert!((from_i16(frame[0]) - left[i]).abs() <= 1.0 / 32768.0);
            assert!((from_i16(frame[1]) - right[i]).abs() <= 1.0 / 32768.0);
        }
    }

    #[test]
    fn test_empty_buffer() {
        let buf = make_buffer(2, 0, 48000).unwrap();
        let wav = encode_wav(&buf).unwrap();
        assert_eq!(wav.len(), HEADER_LEN);
        let header = WavHeader::parse(&wav).unwrap();
        assert_eq!(header.data_len, 0);
        assert_eq!(u32_at(&wav, 4), 36);
    }

    #[test]
    fn test_rejects_multichannel() {
        let buf = make_buffer(3, 10, 48000).unwrap();
        assert_eq!(encode_wav(&buf), Err(AudioError::UnsupportedChannelLayout(3)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(WavHeader::parse(b"RIFF"), Err(AudioError::InvalidWav(_))));
        assert!(matches!(WavHeader::parse(&[0u8; 44]), Err(AudioError::InvalidWav(_))));
    }

    #[test]
    fn test_decode_rejects_truncated_payload() {
        let buf = AudioBuffer::mono(8000, vec![0.1, 0.2]).unwrap();
        let wav = encode_wav(&buf).unwrap();
        let err = decode_pcm16(&wav[..wav.len() - 1]).unwrap_err();
        assert!(matches!(err, AudioError::InvalidWav(_)));
    }

    fn patch_u32(wav: &mut [u8], offset: usize, value: u32) {
        wav[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
    }

    #[test]
    fn test_parse_rejects_oversized_data_len() {
        let buf = AudioBuffer::mono(8000, vec![0.0; 4]).unwrap();
        let mut wav = encode_wav(&buf).unwrap();
        patch_u32(&mut wav, 40, u32::MAX - 1);
        patch_u32(&mut wav, 4, 34);
        assert!(matches!(WavHeader::parse(&wav), Err(AudioError::InvalidWav(_))));
    }

    #[test]
    fn test_parse_rejects_overflowing_sample_rate() {
        let buf = AudioBuffer::stereo(8000, vec![0.0], vec![0.0]).unwrap();
        let mut wav = encode_wav(&buf).unwrap();
        patch_u32(&mut wav, 24, u32::MAX);
        assert!(matches!(WavHeader::parse(&wav), Err(AudioError::InvalidWav(_))));
    }

    #[test]
    fn test_parse_rejects_partial_frame() {
        let buf = AudioBuffer::stereo(8000, vec![0.0; 2], vec![0.0; 2]).unwrap();
        let mut wav = encode_wav(&buf).unwrap();
        // 7 bytes: not a multiple of the 4-byte stereo block align
        patch_u32(&mut wav, 40, 7);
        patch_u32(&mut wav, 4, 36 + 7);
        assert!(matches!(WavHeader::parse(&wav), Err(AudioError::InvalidWav(_))));

        let buf = AudioBuffer::mono(8000, vec![0.0; 2]).unwrap();
        let mut wav = encode_wav(&buf).unwrap();
        wav.pop();
        patch_u32(&mut wav, 40, 3);
        patch_u32(&mut wav, 4, 36 + 3);
        assert!(matches!(decode_pcm16(&wav), Err(AudioError::InvalidWav(_))));
    }

    #[test]
    fn test_encode_rejects_overflowing_byte_rate() {
        let buf = AudioBuffer::stereo(u32::MAX, vec![0.0], vec![0.0]).unwrap();
        assert!(matches!(encode_wav(&buf), Err(AudioError::InvalidBuffer(_))));
    }

    #[test]
    fn test_write_header_rejects_oversized_payload() {
        let mut wav = Vec::new();
        let err = write_header(&mut wav, Format::MONO_44K, u32::MAX as usize).unwrap_err();
        assert!(matches!(err, AudioError::InvalidBuffer(_)));
        assert!(wav.is_empty());

        write_header(&mut wav, Format::MONO_44K, (u32::MAX - 36) as usize).unwrap();
        assert_eq!(u32_at(&wav, 4), u32::MAX);
    }
}
