//! PDF text extraction via `pdf-extract`.

use crate::error::ExtractionError;

/// Extracts text from an in-memory PDF document.
///
/// `pdf-extract` emits a form feed between pages; pages are re-joined with
/// a blank line so chunking never straddles a page boundary without at
/// least a paragraph break.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ExtractionError::Pdf(e.to_string()))?;

    let pages: Vec<&str> = raw
        .split('\x0C')
        .map(str::trim)
        .filter(|page| !page.is_empty())
        .collect();

    Ok(pages.join("\n\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pdf_reports_error() {
        let err = extract(b"not a pdf at all").unwrap_err();
        assert!(matches!(err, ExtractionError::Pdf(_)));
    }
}
