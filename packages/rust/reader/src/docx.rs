//! DOCX text extraction via `docx-rs`.
//!
//! Only top-level body paragraphs are read (tables, headers and footers are
//! skipped). A paragraph's text is the concatenation of its runs; paragraphs
//! are joined with `\n`.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use screener_shared::{Result, ScreenerError};

pub(crate) fn extract_text(path: &Path, bytes: &[u8]) -> Result<String> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ScreenerError::read(path, format!("DOCX parsing failed: {e}")))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(&p.children)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

fn paragraph_text(children: &[ParagraphChild]) -> String {
    let mut text = String::new();
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        RunChild::Break(_) => text.push('\n'),
                        _ => {}
                    }
                }
            }
            // Email links in contact lines usually live here.
            ParagraphChild::Hyperlink(link) => text.push_str(&paragraph_text(&link.children)),
            _ => {}
        }
    }
    text
}
