//! Document Text Extractor — converts an uploaded PDF into plain text.
//!
//! Pages are read in document order and their text is joined with single
//! spaces. No layout reconstruction, no column detection, no OCR. The
//! decoder reads from disk, so the upload is spooled to a scoped temporary
//! file that is removed on every exit path.

use std::io::Write;

use thiserror::Error;
use tracing::debug;

/// Prefix for spool files, so any stray file is attributable.
const SPOOL_PREFIX: &str = "easycover-resume-";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("failed to spool upload to a temporary file: {0}")]
    Spool(#[from] std::io::Error),

    #[error("failed to decode PDF: {0}")]
    Decode(String),

    #[error("document contains no extractable text")]
    NoText,
}

/// Extracts the text layer of a PDF as one string.
///
/// Returns `NoText` for documents with no extractable text layer (e.g. a
/// scanned image without OCR) — downstream structuring has nothing to work
/// with in that case, so the run fails here.
pub fn extract_resume_text(pdf_bytes: &[u8]) -> Result<String, ExtractionError> {
    // NamedTempFile removes the spool on drop — the decode-failure and
    // empty-text paths included.
    let mut spool = tempfile::Builder::new()
        .prefix(SPOOL_PREFIX)
        .suffix(".pdf")
        .tempfile()?;
    spool.write_all(pdf_bytes)?;
    spool.flush()?;

    let pages = pdf_extract::extract_text_by_pages(spool.path())
        .map_err(|e| ExtractionError::Decode(e.to_string()))?;

    let text = join_pages(&pages);
    if text.trim().is_empty() {
        return Err(ExtractionError::NoText);
    }

    debug!(
        pages = pages.len(),
        chars = text.len(),
        "extracted resume text"
    );
    Ok(text)
}

/// Joins per-page text with a single space separator, in page order.
fn join_pages(pages: &[String]) -> String {
    pages.join(" ")
}

#[cfg(test)]
pub(crate) mod testing {
    /// Builds a minimal valid PDF with one page per entry. Pages with text
    /// draw it in Helvetica; an empty entry produces a page whose content
    /// stream paints nothing.
    pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
        let n = pages.len();
        // Object layout: 1 catalog, 2 page tree, 3..3+n pages,
        // 3+n..3+2n content streams, 3+2n font.
        let font_id = 2 * n + 3;
        let total = 2 * n + 3;

        let mut bodies: Vec<String> = Vec::with_capacity(total);
        bodies.push("<< /Type /Catalog /Pages 2 0 R >>".to_string());
        let kids = (0..n)
            .map(|i| format!("{} 0 R", 3 + i))
            .collect::<Vec<_>>()
            .join(" ");
        bodies.push(format!("<< /Type /Pages /Kids [{kids}] /Count {n} >>"));
        for i in 0..n {
            bodies.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 {font_id} 0 R >> >> /Contents {} 0 R >>",
                3 + n + i
            ));
        }
        for text in pages {
            let ops = format!("BT /F1 12 Tf 72 720 Td ({text}) Tj ET");
            bodies.push(format!(
                "<< /Length {} >>\nstream\n{ops}\nendstream",
                ops.len()
            ));
        }
        bodies.push("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string());

        let mut out: Vec<u8> = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(total);
        for (i, body) in bodies.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
        }

        let xref_pos = out.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", total + 1);
        for off in &offsets {
            tail.push_str(&format!("{off:010} 00000 n \n"));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_pos}\n%%EOF",
            total + 1
        ));
        out.extend_from_slice(tail.as_bytes());
        out
    }
}

#[cfg(test)]
mod tests {
    use super::testing::pdf_with_pages;
    use super::*;

    fn spool_files() -> Vec<std::path::PathBuf> {
        std::fs::read_dir(std::env::temp_dir())
            .unwrap()
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| n.starts_with(SPOOL_PREFIX))
            })
            .collect()
    }

    #[test]
    fn test_join_pages_space_separated_in_order() {
        let pages = vec!["first page".to_string(), "second page".to_string()];
        assert_eq!(join_pages(&pages), "first page second page");
    }

    #[test]
    fn test_join_pages_empty_input() {
        assert_eq!(join_pages(&[]), "");
    }

    #[test]
    fn test_extracts_text_from_valid_pdf() {
        let pdf = pdf_with_pages(&["Hello world"]);
        let text = extract_resume_text(&pdf).unwrap();
        assert!(text.contains("Hello world"), "got: {text:?}");
    }

    #[test]
    fn test_extracts_pages_in_document_order() {
        let pdf = pdf_with_pages(&["Alpha experience", "Beta education"]);
        let text = extract_resume_text(&pdf).unwrap();
        let alpha = text.find("Alpha experience").expect("first page missing");
        let beta = text.find("Beta education").expect("second page missing");
        assert!(alpha < beta, "pages out of order: {text:?}");
    }

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let result = extract_resume_text(b"this is not a pdf at all");
        assert!(matches!(result, Err(ExtractionError::Decode(_))));
    }

    #[test]
    fn test_rejects_pdf_without_text_layer() {
        let pdf = pdf_with_pages(&[""]);
        let result = extract_resume_text(&pdf);
        assert!(matches!(result, Err(ExtractionError::NoText)));
    }

    #[test]
    fn test_spool_file_removed_on_success_and_failure() {
        let pdf = pdf_with_pages(&["Some resume text"]);
        extract_resume_text(&pdf).unwrap();
        extract_resume_text(b"garbage").unwrap_err();
        assert!(
            spool_files().is_empty(),
            "spool files left behind: {:?}",
            spool_files()
        );
    }
}
