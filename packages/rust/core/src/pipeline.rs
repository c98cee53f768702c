//! End-to-end screening: document → skills → match → contact → highlight → log.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, instrument};

use screener_matching::{Highlighter, MarkerStyle, SkillMatcher, extract_contact};
use screener_records::{RecordLog, ScreeningRecord};
use screener_shared::{
    ContactInfo, MatchResult, ResumeDocument, Result, ScreenerConfig, SkillSet,
};
use screener_skills::{LexiconTagger, SkillExtractor};

/// Inputs for one screening.
#[derive(Debug, Clone, Default)]
pub struct ScreeningRequest {
    /// Resume to screen (PDF or DOCX).
    pub document: Option<PathBuf>,
    /// Free-text job description.
    pub job_description: String,
}

/// Everything produced by one screening.
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    /// The resume as read.
    pub document: ResumeDocument,
    /// Skills extracted from the job description.
    pub skills: SkillSet,
    /// Matched subset and score.
    pub result: MatchResult,
    /// Contact fields found in the resume.
    pub contact: ContactInfo,
    /// Resume text with matched skills wrapped in markers.
    pub highlighted: String,
    /// The flattened log row.
    pub record: ScreeningRecord,
    /// Whether the row was appended to the log.
    pub logged: bool,
    /// Total elapsed time.
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Progress callback for reporting pipeline status.
pub trait ProgressReporter {
    /// Called when entering a new phase.
    fn phase(&self, name: &str);
    /// Called when the pipeline completes.
    fn done(&self, report: &ScreeningReport);
}

/// No-op progress reporter for headless/test usage.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn phase(&self, _name: &str) {}
    fn done(&self, _report: &ScreeningReport) {}
}

/// Long-lived screening service: the tagger, highlighter, and log handle are
/// built once and reused for every request.
pub struct Screener {
    config: ScreenerConfig,
    extractor: SkillExtractor,
    highlighter: Highlighter,
    log: RecordLog,
}

impl Screener {
    /// Build a screener with the built-in lexicon tagger.
    pub fn new(config: ScreenerConfig) -> Result<Self> {
        let tagger = LexiconTagger::new().with_stop_words(&config.stop_words);
        Self::with_extractor(config, SkillExtractor::new(tagger))
    }

    /// Build a screener around a custom skill extractor.
    pub fn with_extractor(config: ScreenerConfig, extractor: SkillExtractor) -> Result<Self> {
        let highlighter = Highlighter::new(MarkerStyle::from_name(&config.highlight_style)?);
        let log = RecordLog::open(&config.log_path);

        debug!(
            annotator = extractor.annotator_name(),
            log = %config.log_path.display(),
            style = %config.highlight_style,
            "screener ready"
        );

        Ok(Self {
            config,
            extractor,
            highlighter,
            log,
        })
    }

    pub fn log(&self) -> &RecordLog {
        &self.log
    }

    /// Extract the skill set for a job description.
    pub fn extract_skills(&self, job_description: &str) -> SkillSet {
        self.extractor.extract(job_description)
    }

    /// Run one screening.
    ///
    /// Returns `Ok(None)` without doing anything when no document was given or
    /// the job description is blank. Read and log failures propagate.
    #[instrument(skip_all, fields(document = ?request.document))]
    pub fn screen(
        &self,
        request: &ScreeningRequest,
        progress: &dyn ProgressReporter,
    ) -> Result<Option<ScreeningReport>> {
        let Some(path) = request.document.as_deref() else {
            debug!("no document supplied, skipping");
            return Ok(None);
        };
        if request.job_description.trim().is_empty() {
            debug!("blank job description, skipping");
            return Ok(None);
        }

        let start = Instant::now();

        // --- Phase 1: Read ---
        progress.phase("Reading resume");
        let document = screener_reader::read_document(path)?;

        // --- Phase 2: Skills ---
        progress.phase("Extracting skills");
        let skills = self.extractor.extract(&request.job_description);

        // --- Phase 3: Match ---
        progress.phase("Matching skills");
        let matcher = SkillMatcher::new(&skills)?;
        if matcher.is_empty() {
            debug!("no skills extracted from job description");
        } else {
            debug!(skills = matcher.len(), "matching skills");
        }
        let result = matcher.match_text(&document.text);
        let contact = extract_contact(&document.text);

        // --- Phase 4: Highlight ---
        progress.phase("Highlighting resume");
        let highlighted = self.highlighter.highlight(&document.text, result.matched.iter())?;

        // --- Phase 5: Log ---
        let record = ScreeningRecord::new(
            document.filename.clone(),
            &contact,
            &result,
            chrono::Local::now(),
        );
        if self.config.record {
            progress.phase("Saving screening");
            self.log.append(&record)?;
        }

        let report = ScreeningReport {
            document,
            skills,
            result,
            contact,
            highlighted,
            record,
            logged: self.config.record,
            elapsed: start.elapsed(),
        };

        info!(
            file = %report.document.filename,
            score = report.result.rounded_score(),
            matched = report.result.matched_count(),
            total = report.result.total,
            logged = report.logged,
            "screening complete"
        );

        progress.done(&report);
        Ok(Some(report))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};
    use std::cell::RefCell;
    use std::path::Path;

    pub(crate) fn temp_dir() -> PathBuf {
        let dir = std::env::temp_dir().join(format!("screener-core-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).expect("create temp dir");
        dir
    }

    pub(crate) fn write_docx(path: &Path, lines: &[&str]) {
        let mut doc = Docx::new();
        for line in lines {
            doc = doc.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let file = std::fs::File::create(path).expect("create docx");
        doc.build().pack(file).expect("pack docx");
    }

    pub(crate) fn config(dir: &Path, style: &str) -> ScreenerConfig {
        ScreenerConfig {
            log_path: dir.join("screening_results.csv"),
            record: true,
            highlight_style: style.into(),
            stop_words: Vec::new(),
        }
    }

    /// Records phase names in order.
    #[derive(Default)]
    struct Phases(RefCell<Vec<String>>);

    impl ProgressReporter for Phases {
        fn phase(&self, name: &str) {
            self.0.borrow_mut().push(name.to_string());
        }
        fn done(&self, _report: &ScreeningReport) {
            self.0.borrow_mut().push("done".into());
        }
    }

    #[test]
    fn screens_docx_end_to_end() {
        let dir = temp_dir();
        let resume = dir.join("jane.docx");
        write_docx(
            &resume,
            &[
                "Jane Doe",
                "Contact: jane@example.com, +1 555-123-4567",
                "Experienced in Python and SQL",
            ],
        );

        let screener = Screener::new(config(&dir, "markdown")).unwrap();
        let progress = Phases::default();
        let report = screener
            .screen(
                &ScreeningRequest {
                    document: Some(resume),
                    job_description: "Python, SQL, project management".into(),
                },
                &progress,
            )
            .unwrap()
            .expect("inputs are present");

        for skill in ["python", "sql", "project management"] {
            assert!(report.skills.contains(skill), "{skill}");
        }
        assert!(report.result.matched.is_subset(&report.skills));
        assert!(report.result.matched.contains("python"));
        assert!(report.result.matched.contains("sql"));
        assert!(!report.result.matched.contains("project management"));

        assert_eq!(report.contact.email.as_deref(), Some("jane@example.com"));
        assert_eq!(report.contact.phone.as_deref(), Some("+1 555-123-4567"));
        assert!(report.highlighted.contains("**Python**"));
        assert!(report.highlighted.contains("**SQL**"));

        assert!(report.logged);
        let records = screener.log().records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filename, "jane.docx");
        assert_eq!(records[0].email, "jane@example.com");
        assert_eq!(records[0].total_skills, report.skills.len());

        let phases = progress.0.borrow();
        assert_eq!(phases.first().map(String::as_str), Some("Reading resume"));
        assert_eq!(phases.last().map(String::as_str), Some("done"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn empty_inputs_are_a_silent_no_op() {
        let dir = temp_dir();
        let resume = dir.join("cv.docx");
        write_docx(&resume, &["Rust"]);
        let screener = Screener::new(config(&dir, "ansi")).unwrap();

        let no_document = ScreeningRequest {
            document: None,
            job_description: "Rust".into(),
        };
        let blank_job = ScreeningRequest {
            document: Some(resume),
            job_description: "  \n ".into(),
        };

        assert!(screener.screen(&no_document, &SilentProgress).unwrap().is_none());
        assert!(screener.screen(&blank_job, &SilentProgress).unwrap().is_none());
        assert!(!screener.log().exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn dry_run_does_not_touch_the_log() {
        let dir = temp_dir();
        let resume = dir.join("cv.docx");
        write_docx(&resume, &["Kubernetes operator"]);

        let mut cfg = config(&dir, "none");
        cfg.record = false;
        let screener = Screener::new(cfg).unwrap();
        let report = screener
            .screen(
                &ScreeningRequest {
                    document: Some(resume),
                    job_description: "Kubernetes".into(),
                },
                &SilentProgress,
            )
            .unwrap()
            .unwrap();

        assert!(!report.logged);
        assert_eq!(report.result.score, 100.0);
        assert_eq!(report.highlighted, "Kubernetes operator");
        assert!(!screener.log().exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_document_propagates() {
        let dir = temp_dir();
        let resume = dir.join("broken.pdf");
        std::fs::write(&resume, b"not a pdf").unwrap();
        let screener = Screener::new(config(&dir, "ansi")).unwrap();

        let err = screener
            .screen(
                &ScreeningRequest {
                    document: Some(resume),
                    job_description: "Rust".into(),
                },
                &SilentProgress,
            )
            .unwrap_err();
        assert!(matches!(err, screener_shared::ScreenerError::Read { .. }));
        assert!(!screener.log().exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unknown_highlight_style_is_rejected() {
        let dir = temp_dir();
        assert!(Screener::new(config(&dir, "sparkles")).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn report_serializes_for_json_output() {
        let dir = temp_dir();
        let resume = dir.join("cv.docx");
        write_docx(&resume, &["SQL"]);
        let screener = Screener::new(config(&dir, "none")).unwrap();
        let report = screener
            .screen(
                &ScreeningRequest {
                    document: Some(resume),
                    job_description: "SQL".into(),
                },
                &SilentProgress,
            )
            .unwrap()
            .unwrap();

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["result"]["score"], serde_json::json!(100.0));
        assert_eq!(json["document"]["format"], serde_json::json!("docx"));
        assert_eq!(json["record"]["Filename"], serde_json::json!("cv.docx"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
