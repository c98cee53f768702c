//! Tabular screening log (CSV).
//!
//! Every append reads the whole log, brings it up to the current column
//! schema, adds one row, and rewrites the file. There is no locking: two
//! processes appending at once lose one of the rows. The rewrite goes through
//! a sibling temp file so a crash never leaves a half-written log.

mod record;
mod table;

use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use screener_shared::{Result, ScreenerError};

pub use record::{BACKFILL_COLUMNS, COLUMNS, ScreeningRecord};
pub use table::Table;

/// Handle to a screening log file. Opening does no I/O.
#[derive(Debug, Clone)]
pub struct RecordLog {
    path: PathBuf,
}

impl RecordLog {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Read the raw table. A missing log reads as an empty table.
    pub fn table(&self) -> Result<Table> {
        if !self.exists() {
            return Ok(Table::default());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.persistence(e))?;

        let headers = reader
            .headers()
            .map_err(|e| self.persistence(e))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows = reader
            .records()
            .map(|row| {
                row.map(|r| r.iter().map(str::to_string).collect())
                    .map_err(|e| self.persistence(e))
            })
            .collect::<Result<Vec<Vec<String>>>>()?;

        let mut table = Table { headers, rows };
        table.normalize_width();
        Ok(table)
    }

    /// Typed rows. Rows that do not parse are skipped with a warning.
    pub fn records(&self) -> Result<Vec<ScreeningRecord>> {
        if !self.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| self.persistence(e))?;

        let mut records = Vec::new();
        for (idx, row) in reader.deserialize::<ScreeningRecord>().enumerate() {
            match row {
                Ok(record) => records.push(record),
                Err(e) => warn!(row = idx + 1, error = %e, "skipping unreadable log row"),
            }
        }
        Ok(records)
    }

    /// Append one record, backfilling missing columns, and rewrite the log.
    #[instrument(skip_all, fields(path = %self.path.display(), file = %record.filename))]
    pub fn append(&self, record: &ScreeningRecord) -> Result<()> {
        let mut table = self.table()?;
        let existing = table.rows.len();

        table.push_record(record);
        self.write(&table)?;

        info!(rows = existing + 1, "screening logged");
        Ok(())
    }

    /// Overwrite the log with `table`.
    fn write(&self, table: &Table) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ScreenerError::io(parent, e))?;
        }

        let mut tmp_name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "screening_results.csv".into());
        tmp_name.push(".tmp");
        let tmp = self.path.with_file_name(tmp_name);

        let mut writer = csv::Writer::from_path(&tmp).map_err(|e| self.persistence(e))?;
        writer
            .write_record(&table.headers)
            .map_err(|e| self.persistence(e))?;
        for row in &table.rows {
            writer.write_record(row).map_err(|e| self.persistence(e))?;
        }
        writer
            .flush()
            .map_err(|e| ScreenerError::io(&tmp, e))?;
        drop(writer);

        std::fs::rename(&tmp, &self.path).map_err(|e| ScreenerError::io(&self.path, e))?;
        debug!(rows = table.rows.len(), columns = table.headers.len(), "log rewritten");
        Ok(())
    }

    fn persistence(&self, err: impl std::fmt::Display) -> ScreenerError {
        ScreenerError::Persistence(format!("{}: {err}", self.path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::tests::sample;

    fn temp_log() -> RecordLog {
        RecordLog::open(
            std::env::temp_dir().join(format!("screener-log-{}.csv", uuid::Uuid::now_v7())),
        )
    }

    #[test]
    fn missing_log_reads_empty() {
        let log = temp_log();
        assert!(!log.exists());
        assert_eq!(log.table().unwrap(), Table::default());
        assert!(log.records().unwrap().is_empty());
    }

    #[test]
    fn two_appends_make_two_rows_in_order() {
        let log = temp_log();
        log.append(&sample("first.pdf", &["sql"], 2)).unwrap();
        log.append(&sample("second.docx", &["python", "sql"], 2)).unwrap();

        let table = log.table().unwrap();
        assert_eq!(table.headers, COLUMNS);
        assert_eq!(table.rows.len(), 2);
        assert!(table.rows.iter().all(|r| r.len() == 8));
        assert_eq!(table.rows[0][1], "first.pdf");
        assert_eq!(table.rows[1][1], "second.docx");

        let records = log.records().unwrap();
        assert_eq!(records[0].match_score, 50.0);
        assert_eq!(records[1].matched_skills, "python, sql");
        assert_eq!(records[1].matched_skills_count, 2);
        let _ = std::fs::remove_file(log.path());
    }

    #[test]
    fn legacy_log_is_backfilled_on_append() {
        let log = temp_log();
        std::fs::write(
            log.path(),
            "Timestamp,Filename,Match_Score(%),Matched_Skills,Total_Skills,Matched_Skills_Count\n\
             2023-01-01 10:00:00,old.pdf,50.0,sql,2,1\n",
        )
        .unwrap();

        log.append(&sample("new.pdf", &["python"], 1)).unwrap();

        let table = log.table().unwrap();
        assert_eq!(table.rows.len(), 2);
        let email = table.column("Email").unwrap();
        let phone = table.column("Contact_Number").unwrap();
        assert_eq!(table.rows[0][email], "");
        assert_eq!(table.rows[0][phone], "");
        assert_eq!(table.rows[1][email], "jane@example.com");

        let records = log.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "old.pdf");
        assert_eq!(records[0].email, "");
        let _ = std::fs::remove_file(log.path());
    }

    #[test]
    fn extra_legacy_cells_survive_append() {
        let log = temp_log();
        std::fs::write(
            log.path(),
            "Timestamp,Filename,Match_Score(%),Matched_Skills\n\
             2023-01-01 10:00:00,old.pdf,50.00,sql,rust,go\n",
        )
        .unwrap();

        log.append(&sample("new.pdf", &["python"], 1)).unwrap();

        let table = log.table().unwrap();
        assert_eq!(table.rows.len(), 2);
        assert_eq!(&table.rows[0][..6], ["2023-01-01 10:00:00", "old.pdf", "50.00", "sql", "rust", "go"]);
        assert_eq!(table.headers[4], "Column_5");
        assert_eq!(table.headers[5], "Column_6");
        assert_eq!(table.rows[1][1], "new.pdf");
        assert_eq!(table.rows[1][4], "");
        let _ = std::fs::remove_file(log.path());
    }

    #[test]
    fn backfilled_numeric_columns_read_as_zero() {
        let log = temp_log();
        std::fs::write(
            log.path(),
            "Timestamp,Filename,Match_Score(%),Matched_Skills\n\
             2023-01-01 10:00:00,old.pdf,50.00,sql\n",
        )
        .unwrap();
        assert_eq!(log.records().unwrap().len(), 1);

        log.append(&sample("new.pdf", &["python"], 1)).unwrap();

        let records = log.records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].filename, "old.pdf");
        assert_eq!(records[0].match_score, 50.0);
        assert_eq!(records[0].total_skills, 0);
        assert_eq!(records[0].matched_skills_count, 0);
        assert_eq!(records[1].total_skills, 1);
        let _ = std::fs::remove_file(log.path());
    }

    #[test]
    fn matched_skills_with_commas_survive_quoting() {
        let log = temp_log();
        log.append(&sample("a.pdf", &["go", "rust", "sql"], 4)).unwrap();

        let records = log.records().unwrap();
        assert_eq!(records[0].matched_skills, "go, rust, sql");
        assert_eq!(records[0].match_score, 75.0);
        let _ = std::fs::remove_file(log.path());
    }

    #[test]
    fn log_in_missing_directory_is_created() {
        let dir = std::env::temp_dir().join(format!("screener-logdir-{}", uuid::Uuid::now_v7()));
        let log = RecordLog::open(dir.join("nested").join("results.csv"));
        log.append(&sample("a.pdf", &[], 0)).unwrap();
        assert!(log.exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unreadable_log_is_persistence_error() {
        let dir = std::env::temp_dir().join(format!("screener-logdir-{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        // A directory where the log file should be.
        let log = RecordLog::open(&dir);
        let err = log.table().unwrap_err();
        assert!(matches!(err, ScreenerError::Persistence(_)));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
