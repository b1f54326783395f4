//! Documents attached to a query for upload-and-analyze.

use crate::error::{LawbotError, Result};
use std::fmt;
use std::path::Path;

/// Document formats the backend can analyze.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Detects the kind from the file extension.
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let mime = mime_guess::from_path(file_name).first()?;
        match (mime.type_().as_str(), mime.subtype().as_str()) {
            ("application", "pdf") => Some(Self::Pdf),
            ("text", "plain") => Some(Self::PlainText),
            _ => None,
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::PlainText => "text/plain",
        }
    }
}

/// A document read into memory, ready to become the `file` part of a
/// multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct DocumentAttachment {
    file_name: String,
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl DocumentAttachment {
    /// Wraps already-read bytes. Only PDF and plain-text files are accepted.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let file_name = file_name.into();
        let base_name = Path::new(&file_name)
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        if base_name.is_empty() {
            return Err(LawbotError::validation("Attached document has no file name."));
        }

        let kind = DocumentKind::from_file_name(&base_name).ok_or_else(|| {
            LawbotError::validation(format!(
                "Unsupported document '{}'. Attach a PDF or plain-text file.",
                base_name
            ))
        })?;

        if bytes.is_empty() {
            return Err(LawbotError::validation(format!(
                "Attached document '{}' is empty.",
                base_name
            )));
        }

        Ok(Self {
            file_name: base_name,
            kind,
            bytes,
        })
    }

    /// Reads a document from disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| LawbotError::validation("Attached document has no file name."))?
            .to_string();

        // Reject unsupported types before touching the file.
        if DocumentKind::from_file_name(&file_name).is_none() {
            return Err(LawbotError::validation(format!(
                "Unsupported document '{}'. Attach a PDF or plain-text file.",
                file_name
            )));
        }

        let bytes = std::fs::read(path)?;
        Self::from_bytes(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

impl fmt::Debug for DocumentAttachment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentAttachment")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type())
            .field("len", &self.bytes.len())
            .finish()
    }
}
