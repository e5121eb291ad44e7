//! Running exports off an interactive thread.

use std::sync::Arc;

use chimecut_audio::AudioBuffer;

use crate::error::{ExportError, Result};
use crate::options::ExportRequest;
use crate::output::EncodedOutput;
use crate::pipeline::Exporter;

/// Runs [`Exporter::export`] on tokio's blocking pool.
///
/// The buffer is shared, not copied, so several exports of one decoded
/// buffer can run at once.
pub async fn export_in_background(
    exporter: Exporter,
    buffer: Arc<AudioBuffer>,
    request: ExportRequest,
) -> Result<EncodedOutput> {
    tokio::task::spawn_blocking(move || exporter.export(&buffer, &request))
        .await
        .map_err(|e| ExportError::Background(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::OutputFormat;

    #[tokio::test]
    async fn test_concurrent_wav_and_mp3() {
        let samples: Vec<f32> = (0..22050).map(|i| (i as f32 * 0.02).sin() * 0.4).collect();
        let buffer = Arc::new(AudioBuffer::stereo(44100, samples.clone(), samples).unwrap());
        let exporter = Exporter::default();

        let wav = export_in_background(
            exporter.clone(),
            buffer.clone(),
            ExportRequest::new(0.0, 0.5, 1.2, OutputFormat::Wav),
        );
        let mp3 = export_in_background(
            exporter.clone(),
            buffer.clone(),
            ExportRequest::new(0.0, 0.5, 1.2, OutputFormat::Mp3),
        );
        let (wav, mp3) = tokio::join!(wav, mp3);

        let wav = wav.unwrap();
        let mp3 = mp3.unwrap();
        assert_eq!(wav.format(), OutputFormat::Wav);
        assert_eq!(mp3.format(), OutputFormat::Mp3);

        // Same bytes as a plain blocking call.
        let direct = exporter
            .export(&buffer, &ExportRequest::new(0.0, 0.5, 1.2, OutputFormat::Wav))
            .unwrap();
        assert_eq!(wav, direct);
    }

    #[tokio::test]
    async fn test_errors_pass_through() {
        let buffer = Arc::new(AudioBuffer::mono(8000, vec![0.0; 80]).unwrap());
        let err = export_in_background(
            Exporter::default(),
            buffer,
            ExportRequest::new(0.0, 1.0, 1.0, OutputFormat::Wav),
        )
        .await
        .unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidRange);
    }
}
