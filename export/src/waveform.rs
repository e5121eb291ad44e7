//! Capability supplied by the waveform/region-selection collaborator.

use chimecut_audio::AudioBuffer;
use serde::{Deserialize, Serialize};

/// A selected time range in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub start: f64,
    pub end: f64,
}

impl Region {
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The whole buffer, `[0, duration)`.
    pub fn full(buffer: &AudioBuffer) -> Self {
        Self::new(0.0, buffer.duration())
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// What the exporter needs from a waveform view.
pub trait Waveform {
    /// The decoded audio, or `None` while nothing has been decoded.
    fn decoded_data(&self) -> Option<&AudioBuffer>;

    /// The selected region, or `None` when nothing is selected.
    fn region(&self) -> Option<Region>;
}

/// A plain in-memory [`Waveform`].
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub buffer: Option<AudioBuffer>,
    pub region: Option<Region>,
}

impl Selection {
    /// Selects the whole of `buffer`.
    pub fn new(buffer: AudioBuffer) -> Self {
        Self {
            buffer: Some(buffer),
            region: None,
        }
    }

    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }
}

impl Waveform for Selection {
    fn decoded_data(&self) -> Option<&AudioBuffer> {
        self.buffer.as_ref()
    }

    fn region(&self) -> Option<Region> {
        self.region
    }
}
