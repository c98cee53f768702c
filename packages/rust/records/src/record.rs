//! The screening record row and its column schema.

use std::str::FromStr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

use screener_shared::{ContactInfo, MatchResult};

/// Log column names, in write order.
pub const COLUMNS: [&str; 8] = [
    "Timestamp",
    "Filename",
    "Email",
    "Contact_Number",
    "Match_Score(%)",
    "Matched_Skills",
    "Total_Skills",
    "Matched_Skills_Count",
];

/// Columns older logs may lack; backfilled with empty strings on append.
pub const BACKFILL_COLUMNS: [&str; 2] = ["Email", "Contact_Number"];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged screening, flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningRecord {
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
    #[serde(rename = "Filename", default)]
    pub filename: String,
    #[serde(rename = "Email", default)]
    pub email: String,
    #[serde(rename = "Contact_Number", default)]
    pub contact_number: String,
    /// Percentage, rounded to two decimals.
    #[serde(rename = "Match_Score(%)", default, deserialize_with = "empty_as_default")]
    pub match_score: f64,
    /// Matched skills joined with `", "`.
    #[serde(rename = "Matched_Skills", default)]
    pub matched_skills: String,
    #[serde(rename = "Total_Skills", default, deserialize_with = "empty_as_default")]
    pub total_skills: usize,
    #[serde(rename = "Matched_Skills_Count", default, deserialize_with = "empty_as_default")]
    pub matched_skills_count: usize,
}

/// Numeric cells backfilled on append are empty; read those as zero.
fn empty_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr + Default,
    T::Err: std::fmt::Display,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(T::default());
    }
    raw.parse().map_err(serde::de::Error::custom)
}

impl ScreeningRecord {
    /// Flatten one screening result. Absent contact fields log as the sentinel.
    pub fn new(
        filename: impl Into<String>,
        contact: &ContactInfo,
        result: &MatchResult,
        at: DateTime<Local>,
    ) -> Self {
        Self {
            timestamp: at.format(TIMESTAMP_FORMAT).to_string(),
            filename: filename.into(),
            email: contact.email_or_sentinel().to_string(),
            contact_number: contact.phone_or_sentinel().to_string(),
            match_score: result.rounded_score(),
            matched_skills: result.matched.join(", "),
            total_skills: result.total,
            matched_skills_count: result.matched_count(),
        }
    }

    /// Value for a log column, or `None` if the column is not part of the schema.
    pub fn value(&self, column: &str) -> Option<String> {
        let value = match column {
            "Timestamp" => self.timestamp.clone(),
            "Filename" => self.filename.clone(),
            "Email" => self.email.clone(),
            "Contact_Number" => self.contact_number.clone(),
            "Match_Score(%)" => format!("{:.2}", self.match_score),
            "Matched_Skills" => self.matched_skills.clone(),
            "Total_Skills" => self.total_skills.to_string(),
            "Matched_Skills_Count" => self.matched_skills_count.to_string(),
            _ => return None,
        };
        Some(value)
    }
}
