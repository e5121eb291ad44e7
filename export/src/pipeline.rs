//! Trim → gain → encode.

use chimecut_audio::codec::{mp3, wav};
use chimecut_audio::pcm::{apply_gain, trim};
use chimecut_audio::AudioBuffer;
use tracing::{debug, info, warn};

use crate::error::{ExportError, Result};
use crate::format::OutputFormat;
use crate::options::{ExportOptions, ExportRequest};
use crate::output::EncodedOutput;
use crate::waveform::{Region, Waveform};

/// Runs exports with a fixed set of encoder options.
///
/// Exports share no state, so one `Exporter` may serve concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Creates an exporter after validating `options`.
    pub fn new(options: ExportOptions) -> Result<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Trims `buffer` to the requested range, applies gain and encodes.
    ///
    /// The first failing stage aborts the export and its error is returned
    /// as is. The input buffer is never modified.
    pub fn export(&self, buffer: &AudioBuffer, request: &ExportRequest) -> Result<EncodedOutput> {
        let result = self.run(buffer, request);
        match &result {
            Ok(output) => info!(
                format = %request.format,
                start = request.start,
                end = request.end,
                gain = request.gain,
                bytes = output.len(),
                "export done"
            ),
            Err(err) => warn!(format = %request.format, error = %err, "export failed"),
        }
        result
    }

    fn run(&self, buffer: &AudioBuffer, request: &ExportRequest) -> Result<EncodedOutput> {
        let trimmed = trim(buffer, request.start, request.end)?;
        let adjusted = apply_gain(&trimmed, request.gain)?;
        debug!(
            channels = adjusted.number_of_channels(),
            sample_rate = adjusted.sample_rate(),
            frames = adjusted.frame_count(),
            "clip ready"
        );

        let data = match request.format {
            OutputFormat::Wav => wav::encode_wav(&adjusted)?,
            OutputFormat::Mp3 => mp3::encode_mp3(&adjusted, &self.options.mp3())?,
        };
        Ok(EncodedOutput::new(request.format, data))
    }

    /// Exports the region selected in `waveform`.
    ///
    /// Without a selection the whole decoded buffer is exported. Fails with
    /// [`ExportError::DecodeUnavailable`] when nothing has been decoded.
    pub fn export_selection(
        &self,
        waveform: &dyn Waveform,
        gain: f32,
        format: OutputFormat,
    ) -> Result<EncodedOutput> {
        let buffer = waveform.decoded_data().ok_or(ExportError::DecodeUnavailable)?;
        let region = waveform.region().unwrap_or_else(|| Region::full(buffer));
        self.export(buffer, &ExportRequest::new(region.start, region.end, gain, format))
    }
}

/// Exports `[start, end)` of `buffer` with `gain` as `format` (`"wav"` or
/// `"mp3"`) using default options.
///
/// An unknown format tag fails before any work is done.
pub fn process(
    buffer: &AudioBuffer,
    start: f64,
    end: f64,
    gain: f32,
    format: &str,
) -> Result<EncodedOutput> {
    let format: OutputFormat = format.parse()?;
    Exporter::default().export(buffer, &ExportRequest::new(start, end, gain, format))
}
