//! Text extraction from uploaded documents.
//!
//! The heavy lifting is delegated to external parsers: `pdf-extract` for
//! PDF and the `zip` crate plus a WordprocessingML run scan for DOCX. This
//! module owns format detection and the dispatch between them; unsupported
//! formats are rejected before any bytes are touched.

mod docx;
mod pdf;

use crate::error::ExtractionError;

/// File extensions accepted by the upload flow.
pub const ALLOWED_EXTENSIONS: [&str; 5] = ["pdf", "docx", "txt", "md", "json"];

/// Media type declared for DOCX uploads.
const DOCX_MEDIA_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// Detected document format, deciding which extractor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// txt, md, json, or any `text/*` media type: decoded as UTF-8
    PlainText,
    /// PDF documents
    Pdf,
    /// Word documents (Office Open XML)
    Docx,
}

/// Returns the lower-cased extension of a filename, if any.
pub fn file_extension(filename: &str) -> Option<String> {
    let (_, ext) = filename.rsplit_once('.')?;
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

/// Detects the document format from filename extension and media type.
///
/// # Errors
///
/// `ExtractionError::UnsupportedFormat` when neither the extension nor the
/// media type identifies a supported format. The error message carries
/// whatever identification was available, for the user-facing notice.
pub fn detect_format(filename: &str, media_type: &str) -> Result<DocumentFormat, ExtractionError> {
    let extension = file_extension(filename);

    match extension.as_deref() {
        Some("txt") | Some("md") | Some("json") => return Ok(DocumentFormat::PlainText),
        Some("pdf") => return Ok(DocumentFormat::Pdf),
        Some("docx") => return Ok(DocumentFormat::Docx),
        _ => {}
    }

    if media_type.starts_with("text/") {
        return Ok(DocumentFormat::PlainText);
    }
    if media_type == "application/pdf" {
        return Ok(DocumentFormat::Pdf);
    }
    if media_type == DOCX_MEDIA_TYPE {
        return Ok(DocumentFormat::Docx);
    }

    let label = extension
        .or_else(|| (!media_type.is_empty()).then(|| media_type.to_string()))
        .unwrap_or_else(|| "unknown".to_string());
    Err(ExtractionError::UnsupportedFormat(label))
}

/// Extracts the plain text content of an uploaded document.
///
/// Plain-text formats are decoded as UTF-8 (lossily, so stray bytes never
/// fail an otherwise readable file). PDF page texts are concatenated in
/// page order separated by a blank line.
pub fn extract_text(
    filename: &str,
    media_type: &str,
    bytes: &[u8],
) -> Result<String, ExtractionError> {
    match detect_format(filename, media_type)? {
        DocumentFormat::PlainText => Ok(String::from_utf8_lossy(bytes).into_owned()),
        DocumentFormat::Pdf => pdf::extract(bytes),
        DocumentFormat::Docx => docx::extract(bytes),
    }
}
