//! Resume screener CLI — score a resume against a job description.
//!
//! Extracts skills from the job description, matches them against the
//! resume, highlights hits, pulls contact details, and logs the result.

mod commands;
mod output;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
