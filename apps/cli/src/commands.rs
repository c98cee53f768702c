//! CLI command definitions, routing, and tracing setup.

use std::io::Read;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use screener_core::pipeline::{ProgressReporter, Screener, ScreeningReport, ScreeningRequest};
use screener_core::preview::html_preview;
use screener_records::RecordLog;
use screener_shared::{AppConfig, ScreenerConfig, init_config, load_config};
use tracing::info;

use crate::output;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Resume screener — match a resume against a job description.
#[derive(Parser)]
#[command(
    name = "screener",
    version,
    about = "Score a resume against a job description, highlight matched skills, and log the result.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub(crate) enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Where the job description comes from. `-` reads stdin.
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub(crate) struct JobArgs {
    /// Job description text.
    #[arg(short, long)]
    pub job: Option<String>,

    /// File containing the job description.
    #[arg(long)]
    pub job_file: Option<PathBuf>,
}

/// Top-level CLI subcommands.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Screen a resume (PDF or DOCX) against a job description.
    Screen {
        /// Resume document.
        resume: PathBuf,

        #[command(flatten)]
        job: JobArgs,

        /// Screening log path (overrides config).
        #[arg(long)]
        log: Option<PathBuf>,

        /// Do not append this screening to the log.
        #[arg(long)]
        no_log: bool,

        /// Preview marker style: ansi, html, markdown, or none (overrides config).
        #[arg(long)]
        highlight: Option<String>,

        /// Also write a standalone HTML preview to this path.
        #[arg(long)]
        preview_out: Option<PathBuf>,

        /// Report format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show the skills extracted from a job description.
    Skills {
        #[command(flatten)]
        job: JobArgs,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List past screenings from the log.
    History {
        /// Screening log path (overrides config).
        #[arg(long)]
        log: Option<PathBuf>,

        /// Show only the most recent N screenings.
        #[arg(short = 'n', long)]
        limit: Option<NonZeroUsize>,

        /// Output format.
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr so reports can be piped.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "screener=info",
        1 => "screener=debug",
        _ => "screener=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Screen {
            resume,
            job,
            log,
            no_log,
            highlight,
            preview_out,
            output,
        } => cmd_screen(ScreenArgs {
            resume,
            job,
            log,
            no_log,
            highlight,
            preview_out,
            output,
        }),
        Command::Skills { job, output } => cmd_skills(&job, output),
        Command::History { log, limit, output } => cmd_history(log.as_deref(), limit, output),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Resolved `screen` arguments.
struct ScreenArgs {
    resume: PathBuf,
    job: JobArgs,
    log: Option<PathBuf>,
    no_log: bool,
    highlight: Option<String>,
    preview_out: Option<PathBuf>,
    output: OutputFormat,
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn cmd_screen(args: ScreenArgs) -> Result<()> {
    let config = load_config()?;
    let mut screener_config = ScreenerConfig::from(&config);
    if let Some(log) = args.log {
        screener_config.log_path = log;
    }
    if let Some(style) = args.highlight {
        screener_config.highlight_style = style;
    }
    screener_config.record = !args.no_log;

    let screener = Screener::new(screener_config)?;
    let request = ScreeningRequest {
        document: Some(args.resume),
        job_description: read_job_description(&args.job)?,
    };

    info!(resume = ?request.document, "screening resume");

    let reporter = CliProgress::new()?;
    let outcome = screener.screen(&request, &reporter);
    reporter.clear();

    let Some(report) = outcome? else {
        return Ok(());
    };

    if let Some(path) = &args.preview_out {
        let html = html_preview(&report)?;
        std::fs::write(path, html)
            .map_err(|e| eyre!("failed to write preview '{}': {e}", path.display()))?;
        info!(path = %path.display(), "HTML preview written");
    }

    match args.output {
        OutputFormat::Text => {
            output::print_report(&report, screener.log().path(), args.preview_out.as_deref())
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}

fn cmd_skills(job: &JobArgs, output: OutputFormat) -> Result<()> {
    let config = load_config()?;
    let mut screener_config = ScreenerConfig::from(&config);
    screener_config.record = false;
    let screener = Screener::new(screener_config)?;

    let skills = screener.extract_skills(&read_job_description(job)?);

    match output {
        OutputFormat::Text => {
            println!();
            println!("  {} skills extracted", skills.len());
            println!();
            for skill in &skills {
                println!("  - {skill}");
            }
            println!();
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&skills)?),
    }
    Ok(())
}

fn cmd_history(log: Option<&Path>, limit: Option<NonZeroUsize>, output: OutputFormat) -> Result<()> {
    let path = match log {
        Some(p) => p.to_path_buf(),
        None => ScreenerConfig::from(&load_config()?).log_path,
    };
    let log = RecordLog::open(path);

    if !log.exists() {
        println!("No screenings logged yet. Run `screener screen` to begin.");
        return Ok(());
    }

    let limit = limit.map(NonZeroUsize::get);
    match output {
        OutputFormat::Text => {
            let mut table = log.table()?;
            if let Some(n) = limit {
                let skip = table.rows.len().saturating_sub(n);
                table.rows.drain(..skip);
            }
            output::print_table(&table);
        }
        OutputFormat::Json => {
            let mut records = log.records()?;
            if let Some(n) = limit {
                let skip = records.len().saturating_sub(n);
                records.drain(..skip);
            }
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
    }
    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}

/// Read the job description from `--job` or `--job-file`; `-` means stdin.
fn read_job_description(job: &JobArgs) -> Result<String> {
    match (&job.job, &job.job_file) {
        (Some(text), _) if text == "-" => read_stdin(),
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) if path.as_os_str() == "-" => read_stdin(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .map_err(|e| eyre!("failed to read job description '{}': {e}", path.display())),
        (None, None) => Err(eyre!("a job description is required (--job or --job-file)")),
    }
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| eyre!("failed to read job description from stdin: {e}"))?;
    Ok(buf)
}

// ---------------------------------------------------------------------------
// CLI progress reporter
// ---------------------------------------------------------------------------

/// CLI progress reporter using an indicatif spinner.
struct CliProgress {
    spinner: ProgressBar,
}

impl CliProgress {
    fn new() -> Result<Self> {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner:.cyan} {msg}")?
                .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(80));
        Ok(Self { spinner })
    }

    fn clear(&self) {
        self.spinner.finish_and_clear();
    }
}

impl ProgressReporter for CliProgress {
    fn phase(&self, name: &str) {
        self.spinner.set_message(name.to_string());
    }

    fn done(&self, _report: &ScreeningReport) {
        self.spinner.finish_and_clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn screen_requires_a_job_source() {
        assert!(Cli::try_parse_from(["screener", "screen", "cv.pdf"]).is_err());
        assert!(
            Cli::try_parse_from(["screener", "screen", "cv.pdf", "--job", "Rust", "--job-file", "jd.txt"])
                .is_err()
        );
    }

    #[test]
    fn screen_flags_parse() {
        let cli = Cli::try_parse_from([
            "screener",
            "-v",
            "screen",
            "cv.docx",
            "--job",
            "Python, SQL",
            "--no-log",
            "--highlight",
            "markdown",
            "--output",
            "json",
        ])
        .expect("parse");
        assert_eq!(cli.verbose, 1);
        match cli.command {
            Command::Screen {
                resume,
                job,
                no_log,
                highlight,
                output,
                ..
            } => {
                assert_eq!(resume, PathBuf::from("cv.docx"));
                assert_eq!(job.job.as_deref(), Some("Python, SQL"));
                assert!(no_log);
                assert_eq!(highlight.as_deref(), Some("markdown"));
                assert!(matches!(output, OutputFormat::Json));
            }
            _ => panic!("expected screen"),
        }
    }

    #[test]
    fn history_limit_must_be_positive() {
        assert!(Cli::try_parse_from(["screener", "history", "--limit", "0"]).is_err());
        let cli = Cli::try_parse_from(["screener", "history", "-n", "3"]).expect("parse");
        match cli.command {
            Command::History { limit, .. } => assert_eq!(limit.map(NonZeroUsize::get), Some(3)),
            _ => panic!("expected history"),
        }
    }

    #[test]
    fn job_file_is_read() {
        let path = std::env::temp_dir().join(format!("screener-jd-{}.txt", std::process::id()));
        std::fs::write(&path, "Rust, Kubernetes").unwrap();
        let job = JobArgs {
            job: None,
            job_file: Some(path.clone()),
        };
        assert_eq!(read_job_description(&job).unwrap(), "Rust, Kubernetes");
        let _ = std::fs::remove_file(&path);
    }
}
