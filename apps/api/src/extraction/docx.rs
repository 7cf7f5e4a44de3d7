//! Plain-text extraction from OOXML (.docx) documents.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::errors::AppError;

const DOCUMENT_PART: &str = "word/document.xml";

pub fn extract_docx_text(bytes: &[u8]) -> Result<String, AppError> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| AppError::Extraction(format!("not a Word document archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| AppError::Extraction(format!("{DOCUMENT_PART} missing: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| AppError::Extraction(format!("{DOCUMENT_PART} unreadable: {e}")))?;

    document_xml_to_text(&xml)
}

/// Flattens `word/document.xml` into text, one line per paragraph.
///
/// `w:t` runs are unescaped; `w:br`, `w:cr` and paragraph ends become
/// newlines; a run-level `w:tab` becomes a tab. Tab stops declared under
/// `w:tabs` are paragraph properties and emit nothing.
pub fn document_xml_to_text(xml: &str) -> Result<String, AppError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::with_capacity(xml.len() / 4);
    let mut in_text = false;
    let mut tab_stops_depth = 0usize;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text = true,
                b"w:tabs" => tab_stops_depth += 1,
                b"w:br" | b"w:cr" => out.push('\n'),
                b"w:tab" if tab_stops_depth == 0 => out.push('\t'),
                _ => {}
            },
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:br" | b"w:cr" | b"w:p" => out.push('\n'),
                b"w:tab" if tab_stops_depth == 0 => out.push('\t'),
                _ => {}
            },
            Ok(Event::End(ref e)) => match e.name().as_ref() {
                b"w:t" => in_text = false,
                b"w:tabs" => tab_stops_depth = tab_stops_depth.saturating_sub(1),
                b"w:p" => out.push('\n'),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text => match e.unescape() {
                Ok(text) => out.push_str(&text),
                // unknown entity: keep the run as written
                Err(_) => out.push_str(&String::from_utf8_lossy(&e)),
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(AppError::Extraction(format!(
                    "{DOCUMENT_PART} is not well-formed at byte {}: {e}",
                    reader.buffer_position()
                )))
            }
            _ => {}
        }
    }

    Ok(out)
}
