//! Resume document reading: PDF and DOCX files to plain text.
//!
//! The format is chosen from the file extension. Extraction failures are
//! surfaced as [`ScreenerError::Read`] with the underlying library message;
//! nothing is retried or validated beyond what the decoders do.

mod docx;
mod pdf;

use std::path::Path;

use tracing::{debug, instrument};

use screener_shared::{DocumentFormat, ResumeDocument, Result, ScreenerError};

/// Read a resume, selecting the decoder from the file extension.
pub fn read_document(path: &Path) -> Result<ResumeDocument> {
    let format = DocumentFormat::from_path(path)?;
    read_document_as(path, format)
}

/// Read a resume with an explicit format, ignoring the extension.
#[instrument(skip_all, fields(path = %path.display(), %format))]
pub fn read_document_as(path: &Path, format: DocumentFormat) -> Result<ResumeDocument> {
    let bytes = std::fs::read(path).map_err(|e| ScreenerError::read(path, e.to_string()))?;

    let text = match format {
        DocumentFormat::Pdf => pdf::extract_text(path, &bytes)?,
        DocumentFormat::Docx => docx::extract_text(path, &bytes)?,
    };

    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    debug!(bytes = bytes.len(), chars = text.chars().count(), "document text extracted");

    Ok(ResumeDocument {
        filename,
        path: path.to_path_buf(),
        text,
        format,
    })
}
