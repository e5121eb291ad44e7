//! Audio encoders.
//!
//! - `wav`: canonical 16-bit PCM WAV container
//! - `mp3`: MPEG-1 Layer III via LAME

pub mod mp3;
pub mod wav;
