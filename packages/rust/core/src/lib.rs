//! Screening pipeline orchestration for the resume screener.
//!
//! This crate ties together document reading, skill extraction, matching,
//! highlighting, contact extraction, and the screening log into one
//! end-to-end workflow ([`pipeline::Screener::screen`]).

pub mod pipeline;
pub mod preview;
