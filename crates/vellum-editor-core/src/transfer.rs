//! Paste and drop payloads.
//!
//! The cancelable paste/drop handlers receive these types. Platform code
//! builds them from native clipboard or drag events.

use smol_str::SmolStr;

/// Whether a drag originated inside the editor or from outside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DragType {
    Internal,
    External,
}

/// A file carried by a paste or drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileBlob {
    pub name: Option<SmolStr>,
    pub mime: SmolStr,
    pub bytes: Vec<u8>,
}

impl FileBlob {
    pub fn new(mime: impl Into<SmolStr>, bytes: Vec<u8>) -> Self {
        Self {
            name: None,
            mime: mime.into(),
            bytes,
        }
    }

    pub fn named(mut self, name: impl Into<SmolStr>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// The content carried by a drop (or rich paste): plain text, optional HTML
/// markup, and any files.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataTransfer {
    pub text: Option<String>,
    pub html: Option<String>,
    pub files: Vec<FileBlob>,
}

impl DataTransfer {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn with_html(mut self, html: impl Into<String>) -> Self {
        self.html = Some(html.into());
        self
    }

    pub fn with_file(mut self, file: FileBlob) -> Self {
        self.files.push(file);
        self
    }

    pub fn has_files(&self) -> bool {
        !self.files.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_blob() {
        let blob = FileBlob::new("image/png", vec![1, 2, 3]).named("shot.png");
        assert_eq!(blob.len(), 3);
        assert_eq!(blob.name.as_deref(), Some("shot.png"));
    }

    #[test]
    fn test_data_transfer() {
        let transfer = DataTransfer::text("hello")
            .with_html("<p>hello</p>")
            .with_file(FileBlob::new("text/plain", b"x".to_vec()));
        assert_eq!(transfer.text.as_deref(), Some("hello"));
        assert!(transfer.has_files());
        assert!(!DataTransfer::default().has_files());
    }
}
