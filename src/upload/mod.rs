//! Upload handle model
//!
//! Resolves transport-layer upload objects into a single source type the
//! persister can read. Capability probing happens here, at the boundary,
//! so the persister only ever sees a resolved [`UploadSource`].

use std::fmt;
use std::io::{self, Read};

use bytes::Bytes;

use crate::error::UnsupportedHandleError;

/// Display name used for handles that carry none
pub const DEFAULT_NAME: &str = "file";

/// The three byte-retrieval forms an upload handle may expose
pub enum UploadSource {
    /// Spooled handle wrapping a nested stream
    Stream(Box<dyn Read + Send>),
    /// Payload delivered by a direct one-shot read
    Buffer(Vec<u8>),
    /// Shared view of an in-memory buffer, copied out at write time
    Shared(Bytes),
}

impl UploadSource {
    /// Reads the full payload, consuming the source
    pub fn read_all(self) -> io::Result<Vec<u8>> {
        match self {
            UploadSource::Stream(mut stream) => {
                let mut data = Vec::new();
                stream.read_to_end(&mut data)?;
                Ok(data)
            }
            UploadSource::Buffer(data) => Ok(data),
            UploadSource::Shared(view) => Ok(view.to_vec()),
        }
    }
}

impl fmt::Debug for UploadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UploadSource::Stream(_) => f.write_str("Stream(..)"),
            UploadSource::Buffer(data) => write!(f, "Buffer({} bytes)", data.len()),
            UploadSource::Shared(view) => write!(f, "Shared({} bytes)", view.len()),
        }
    }
}

/// A resolved upload handle: a display name plus exactly one byte source
#[derive(Debug)]
pub struct UploadedFile {
    name: Option<String>,
    source: UploadSource,
}

impl UploadedFile {
    pub fn new(name: Option<String>, source: UploadSource) -> Self {
        Self { name, source }
    }

    /// Display name, falling back to [`DEFAULT_NAME`]
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_NAME)
    }

    pub fn into_source(self) -> UploadSource {
        self.source
    }
}

/// An upload object as handed over by the transport layer, before its
/// byte-retrieval capability is known.
///
/// A transport adapter fills in whichever capabilities its upload objects
/// support; [`RawUpload::resolve`] probes them in a fixed order (nested
/// stream, then direct read, then buffer retrieval) and picks the first
/// one present.
#[derive(Default)]
pub struct RawUpload {
    name: Option<String>,
    stream: Option<Box<dyn Read + Send>>,
    data: Option<Vec<u8>>,
    buffer: Option<Bytes>,
}

impl RawUpload {
    /// An upload with no name and no capabilities yet
    pub fn new() -> Self {
        Self::default()
    }

    /// An upload carrying a display name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Attach a nested stream capability
    pub fn with_stream(mut self, stream: impl Read + Send + 'static) -> Self {
        self.stream = Some(Box::new(stream));
        self
    }

    /// Attach a direct-read capability yielding owned bytes
    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = Some(data);
        self
    }

    /// Attach a buffer-retrieval capability yielding a shared view
    pub fn with_buffer(mut self, buffer: Bytes) -> Self {
        self.buffer = Some(buffer);
        self
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Resolve the first available capability into an [`UploadedFile`]
    pub fn resolve(self) -> Result<UploadedFile, UnsupportedHandleError> {
        let source = if let Some(stream) = self.stream {
            UploadSource::Stream(stream)
        } else if let Some(data) = self.data {
            UploadSource::Buffer(data)
        } else if let Some(view) = self.buffer {
            UploadSource::Shared(view)
        } else {
            return Err(UnsupportedHandleError {
                name: self.name.unwrap_or_else(|| DEFAULT_NAME.to_string()),
            });
        };
        Ok(UploadedFile::new(self.name, source))
    }
}

impl fmt::Debug for RawUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawUpload")
            .field("name", &self.name)
            .field("stream", &self.stream.is_some())
            .field("data", &self.data.is_some())
            .field("buffer", &self.buffer.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_resolve_prefers_stream_over_other_capabilities() {
        let upload = RawUpload::named("doc.pdf")
            .with_stream(Cursor::new(b"from stream".to_vec()))
            .with_data(b"from data".to_vec())
            .with_buffer(Bytes::from_static(b"from buffer"));

        let source = upload.resolve().unwrap().into_source();
        assert_eq!(source.read_all().unwrap(), b"from stream");
    }

    #[test]
    fn test_resolve_falls_back_to_data_then_buffer() {
        let upload = RawUpload::named("doc.pdf")
            .with_data(b"from data".to_vec())
            .with_buffer(Bytes::from_static(b"from buffer"));
        let source = upload.resolve().unwrap().into_source();
        assert_eq!(source.read_all().unwrap(), b"from data");

        let upload = RawUpload::named("doc.pdf").with_buffer(Bytes::from_static(b"from buffer"));
        let source = upload.resolve().unwrap().into_source();
        assert_eq!(source.read_all().unwrap(), b"from buffer");
    }

    #[test]
    fn test_resolve_without_capabilities_fails() {
        let err = RawUpload::named("mystery.bin").resolve().unwrap_err();
        assert_eq!(err.name, "mystery.bin");

        let err = RawUpload::new().resolve().unwrap_err();
        assert_eq!(err.name, DEFAULT_NAME);
    }

    #[test]
    fn test_uploaded_file_name_defaults() {
        let file = UploadedFile::new(None, UploadSource::Buffer(Vec::new()));
        assert_eq!(file.name(), "file");

        let file = UploadedFile::new(
            Some("report.docx".to_string()),
            UploadSource::Buffer(Vec::new()),
        );
        assert_eq!(file.name(), "report.docx");
    }
}
