//! PDF text extraction via `pdf-extract`.

use std::path::Path;

use screener_shared::{Result, ScreenerError};

/// Linearize the text content of every page.
pub(crate) fn extract_text(path: &Path, bytes: &[u8]) -> Result<String> {
    pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| ScreenerError::read(path, format!("PDF extraction failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::read_document;
    use crate::test_support::temp_path;
    use screener_shared::DocumentFormat;

    /// Single-page PDF with one Helvetica text line and a valid xref table.
    fn minimal_pdf(line: &str) -> Vec<u8> {
        let content = format!("BT /F1 12 Tf 72 720 Td ({line}) Tj ET");
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
             /Resources << /Font << /F1 5 0 R >> >> /Contents 4 0 R >>"
                .to_string(),
            format!("<< /Length {} >>\nstream\n{content}\nendstream", content.len()),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>"
                .to_string(),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::with_capacity(objects.len());
        for (idx, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", idx + 1).as_bytes());
        }

        let xref = pdf.len();
        let mut tail = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
        for offset in offsets {
            tail.push_str(&format!("{offset:010} 00000 n \n"));
        }
        tail.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.extend_from_slice(tail.as_bytes());
        pdf
    }

    #[test]
    fn valid_pdf_text_is_extracted() {
        let path = temp_path("resume.pdf");
        std::fs::write(&path, minimal_pdf("Senior Python developer")).expect("write");

        let doc = read_document(&path).unwrap();
        assert_eq!(doc.format, DocumentFormat::Pdf);
        assert_eq!(doc.filename, path.file_name().unwrap().to_string_lossy());
        assert!(doc.text.contains("Python"), "{:?}", doc.text);
        assert!(doc.text.contains("Senior"), "{:?}", doc.text);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn garbage_bytes_are_read_error() {
        let err = extract_text(Path::new("cv.pdf"), b"definitely not a pdf").unwrap_err();
        assert!(err.to_string().contains("PDF extraction failed"));
    }

    #[test]
    fn truncated_pdf_file_is_read_error() {
        let path = temp_path("truncated.pdf");
        std::fs::write(&path, b"%PDF-1.4\n1 0 obj\n<<").expect("write");
        let err = read_document(&path).unwrap_err();
        assert!(matches!(err, ScreenerError::Read { .. }));
        let _ = std::fs::remove_file(&path);
    }
}
