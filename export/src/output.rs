//! Encoded export result.

use bytes::Bytes;

use crate::format::OutputFormat;

/// Encoded audio tagged with its format.
///
/// The bytes are opaque and immutable; cloning shares the same storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedOutput {
    format: OutputFormat,
    data: Bytes,
}

impl EncodedOutput {
    pub fn new(format: OutputFormat, data: impl Into<Bytes>) -> Self {
        Self {
            format,
            data: data.into(),
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns the MIME type of the data.
    pub fn mime(&self) -> &'static str {
        self.format.mime()
    }

    pub fn data(&self) -> &Bytes {
        &self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Bytes {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Suggests a download name; see [`OutputFormat::file_name`].
    pub fn file_name(&self, source_mime: Option<&str>) -> String {
        self.format.file_name(source_mime)
    }
}
