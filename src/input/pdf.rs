use super::{Document, InputError, TextExtractor};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Extracts per-page text with the pdf-extract crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<Document, InputError> {
        load(path)
    }
}

/// Load per-page text from a PDF file.
///
/// Pages without text are kept as empty entries so callers can report them;
/// an unreadable or corrupt file is an error.
pub fn load(path: &Path) -> Result<Document, InputError> {
    if !path.is_file() {
        return Err(InputError::FileNotFound(path.to_path_buf()));
    }

    // Read PDF file into memory
    let mut file = File::open(path).map_err(|e| InputError::PdfParse(e.to_string()))?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)
        .map_err(|e| InputError::PdfParse(e.to_string()))?;

    let pages = pdf_extract::extract_text_from_mem_by_pages(&buffer)
        .map_err(|e| InputError::PdfParse(e.to_string()))?;
    log::debug!("extracted {} page(s) from {}", pages.len(), path.display());

    Ok(Document::new(pages, format!("pdf:{}", path.display())))
}
