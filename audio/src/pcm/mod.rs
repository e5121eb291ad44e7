//! PCM (Pulse Code Modulation) buffers and transforms.
//!
//! # Key Types and Functions
//!
//! - [`AudioBuffer`]: planar float audio with a sample rate
//! - [`Format`]: 16-bit output layout (sample rate, mono/stereo)
//! - [`trim`]: slices a time range out of a buffer
//! - [`apply_gain`]: linear amplitude scaling
//! - [`interleave`]: stereo to `L, R, L, R, ...` order
//! - [`to_i16`]: clamp-and-scale quantization
//!
//! # Example
//!
//! ```rust
//! use chimecut_audio::pcm::{apply_gain, trim, AudioBuffer};
//!
//! let buffer = AudioBuffer::mono(8000, vec![0.25; 8000]).unwrap();
//! let clip = trim(&buffer, 0.25, 0.5).unwrap();
//! let louder = apply_gain(&clip, 2.0).unwrap();
//! assert_eq!(louder.frame_count(), 2000);
//! assert_eq!(louder.channel(0).unwrap()[0], 0.5);
//! ```

mod buffer;
mod format;
mod gain;
mod interleave;
mod quantize;
mod trim;

pub use buffer::{make_buffer, AudioBuffer};
pub use format::{Format, BITS_PER_SAMPLE};
pub use gain::apply_gain;
pub use interleave::{interleave, interleaved};
pub use quantize::{from_i16, quantize, to_i16, to_le_bytes};
pub use trim::{sample_index, trim};
