use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputError {
    #[error("File '{0}' does not exist.")]
    FileNotFound(PathBuf),

    #[error("Error reading PDF file: {0}")]
    PdfParse(String),

    #[error("No text extracted from '{0}'.")]
    EmptyText(PathBuf),
}

/// Text extracted from a document, one entry per page in reading order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub pages: Vec<String>,
    pub source: String,
}

impl Document {
    pub fn new(pages: Vec<String>, source: impl Into<String>) -> Self {
        Self {
            pages,
            source: source.into(),
        }
    }

    /// 1-indexed numbers of pages that produced no text.
    pub fn empty_pages(&self) -> Vec<usize> {
        self.pages
            .iter()
            .enumerate()
            .filter(|(_, page)| page.trim().is_empty())
            .map(|(idx, _)| idx + 1)
            .collect()
    }

    /// Concatenate every page that has text, each followed by a newline.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for page in self.pages.iter().filter(|p| !p.trim().is_empty()) {
            text.push_str(page);
            text.push('\n');
        }
        text
    }
}

/// Source of per-page text for a document path.
pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<Document, InputError>;
}

pub mod pdf;

pub use pdf::PdfExtractor;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_text_skips_empty_pages() {
        let doc = Document::new(
            vec![
                "Page one.".to_string(),
                String::new(),
                "  \n".to_string(),
                "Page four.".to_string(),
            ],
            "pdf:test.pdf",
        );
        assert_eq!(doc.text(), "Page one.\nPage four.\n");
        assert_eq!(doc.empty_pages(), vec![2, 3]);
    }

    #[test]
    fn test_document_without_pages() {
        let doc = Document::default();
        assert!(doc.text().is_empty());
        assert!(doc.empty_pages().is_empty());
    }

    #[test]
    fn test_input_error_messages() {
        let err = InputError::FileNotFound(PathBuf::from("missing.pdf"));
        assert_eq!(err.to_string(), "File 'missing.pdf' does not exist.");

        let err = InputError::PdfParse("Invalid PDF structure".to_string());
        assert!(matches!(err, InputError::PdfParse(ref msg) if msg.contains("Invalid")));
    }
}
