//! DOCX text extraction.
//!
//! A DOCX file is a ZIP archive whose main document part lives at
//! `word/document.xml`. Visible text sits in `<w:t>` runs; paragraphs end
//! with `</w:p>`. That structure is simple enough that a linear scan over
//! the XML beats pulling in a full XML parser.

use std::io::{Cursor, Read};

use crate::error::ExtractionError;

/// Extracts text from an in-memory DOCX document.
///
/// Each `<w:p>` paragraph becomes one output line; text runs within a
/// paragraph are concatenated in document order.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| ExtractionError::Docx(format!("not a valid archive: {e}")))?;

    let mut document_xml = String::new();
    archive
        .by_name("word/document.xml")
        .map_err(|e| ExtractionError::Docx(format!("missing word/document.xml: {e}")))?
        .read_to_string(&mut document_xml)
        .map_err(|e| ExtractionError::Docx(format!("unreadable document part: {e}")))?;

    Ok(scan_document_text(&document_xml))
}

/// Walks the WordprocessingML markup collecting `<w:t>` run contents,
/// inserting a newline at every paragraph close.
fn scan_document_text(xml: &str) -> String {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut rest = xml;

    loop {
        let Some(open) = rest.find('<') else { break };
        let tag_body = &rest[open + 1..];
        let Some(close) = tag_body.find('>') else { break };
        let tag = &tag_body[..close];
        let after_tag = &tag_body[close + 1..];

        if tag == "w:t" || tag.starts_with("w:t ") {
            let Some(end) = after_tag.find("</w:t>") else {
                break;
            };
            current.push_str(&unescape_entities(&after_tag[..end]));
            rest = &after_tag[end + "</w:t>".len()..];
            continue;
        }

        if tag == "/w:p" {
            let paragraph = current.trim().to_string();
            if !paragraph.is_empty() {
                paragraphs.push(paragraph);
            }
            current.clear();
        }
        rest = after_tag;
    }

    let trailing = current.trim();
    if !trailing.is_empty() {
        paragraphs.push(trailing.to_string());
    }

    paragraphs.join("\n")
}

/// Decodes the five predefined XML entities.
fn unescape_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
