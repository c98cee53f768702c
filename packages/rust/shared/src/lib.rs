//! Shared types, error model, and configuration for the resume screener.
//!
//! This crate is the foundation depended on by all other screener crates.
//! It provides:
//! - [`ScreenerError`] — the unified error type
//! - Domain types ([`SkillSet`], [`MatchResult`], [`ContactInfo`], [`ResumeDocument`])
//! - Configuration ([`AppConfig`], [`ScreenerConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, HighlightConfig, LogConfig, ScreenerConfig, SkillsConfig, config_dir,
    config_file_path, init_config, load_config, load_config_from,
};
pub use error::{Result, ScreenerError};
pub use types::{
    ContactInfo, DocumentFormat, MatchResult, NOT_FOUND, ResumeDocument, SkillSet,
};
