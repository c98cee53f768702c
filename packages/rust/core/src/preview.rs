//! Standalone HTML preview of a screening report.

use screener_matching::{Highlighter, MarkerStyle, escape_html};
use screener_shared::Result;

use crate::pipeline::ScreeningReport;

/// Render the report as a self-contained HTML page with `<mark>` highlights.
///
/// Highlighting is recomputed from the raw resume text so the output is
/// HTML-escaped regardless of the screener's configured marker style.
pub fn html_preview(report: &ScreeningReport) -> Result<String> {
    let body = Highlighter::new(MarkerStyle::Html).highlight_escaped(
        &report.document.text,
        report.result.matched.iter(),
        escape_html,
    )?;

    let result = &report.result;
    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Resume Screening: {filename}</title>
<style>
body {{ font-family: Arial, sans-serif; background-color: #f9fafc; margin: 2rem; }}
h1, h2 {{ color: #1e3a8a; }}
.score {{ font-size: 1.8rem; color: #2563eb; font-weight: bold; }}
.resume {{ background: #ffffff; padding: 1rem; border: 1px solid #e2e8f0; border-radius: 0.5rem; white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>{filename}</h1>
<h2>Contact Info</h2>
<p>Email: {email}<br>Phone: {phone}</p>
<h2>Match Score (%)</h2>
<p class="score">{score:.2}</p>
<p>Skills matched: {matched}/{total}</p>
<h2>Resume Preview</h2>
<div class="resume">{body}</div>
</body>
</html>
"#,
        filename = escape_html(&report.document.filename),
        email = escape_html(report.contact.email_or_sentinel()),
        phone = escape_html(report.contact.phone_or_sentinel()),
        score = result.score,
        matched = result.matched_count(),
        total = result.total,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::tests::{config, temp_dir, write_docx};
    use crate::pipeline::{Screener, ScreeningRequest, SilentProgress};

    #[test]
    fn preview_escapes_text_and_marks_matches() {
        let dir = temp_dir();
        let resume = dir.join("a&b.docx");
        write_docx(&resume, &["R&D lead <Python>", "No email here"]);

        let mut cfg = config(&dir, "ansi");
        cfg.record = false;
        let report = Screener::new(cfg)
            .unwrap()
            .screen(
                &ScreeningRequest {
                    document: Some(resume),
                    job_description: "Python and Go".into(),
                },
                &SilentProgress,
            )
            .unwrap()
            .unwrap();

        let html = html_preview(&report).unwrap();
        assert!(html.contains("<title>Resume Screening: a&amp;b.docx</title>"));
        assert!(html.contains("R&amp;D lead &lt;<mark"));
        assert!(html.contains(">Python</mark>&gt;"));
        assert!(html.contains("Email: Not found"));
        assert!(html.contains("Skills matched: 1/2"));
        assert!(!html.contains('\x1b'));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
