//! jirafmt - render JIRA issue dumps as line-safe reports.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

use jirafmt::config::{self, Settings};
use jirafmt::error::AppError;
use jirafmt::logging;
use jirafmt::report::{parse_issues, Report};

#[derive(Debug, Parser)]
#[command(name = "jirafmt", version, about = "Line-safe reports for JIRA issue data")]
struct Cli {
    /// Log filter directives (e.g. `jirafmt=debug`). Overrides RUST_LOG.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render issues as one delimited row per issue.
    Report {
        /// Issue JSON file (search result, array, or single issue). `-` reads stdin.
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Settings file to use instead of the default location.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Also render a row per comment. Restricted comments are redacted.
        #[arg(long)]
        comments: bool,

        /// Delimiter for list columns (labels, versions).
        #[arg(long)]
        delimiter: Option<String>,

        /// Omit the header row.
        #[arg(long)]
        no_header: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.log_level.as_deref()) {
        eprintln!("warning: logging disabled: {e:#}");
    }

    match cli.command {
        Command::Report {
            input,
            config,
            comments,
            delimiter,
            no_header,
        } => {
            let mut settings = load_settings(config.as_deref()).map_err(explain)?;
            if comments {
                settings.show_comments = true;
            }
            if let Some(delimiter) = delimiter {
                settings.delimiter = delimiter;
            }
            settings
                .validate()
                .map_err(AppError::from)
                .map_err(explain)?;

            run_report(&input, &settings, !no_header)
        }
    }
}

fn load_settings(path: Option<&Path>) -> jirafmt::error::Result<Settings> {
    let settings = match path {
        Some(path) => config::load_from(path)?,
        None => config::load()?,
    };
    Ok(settings)
}

fn run_report(input: &Path, settings: &Settings, header: bool) -> anyhow::Result<()> {
    let raw = read_input(input).with_context(|| format!("reading {}", input.display()))?;
    let mut issues = parse_issues(&raw).map_err(explain)?;
    info!(count = issues.len(), input = %input.display(), "Rendering report");

    let report = Report::new(settings);
    let rows = report.render(&mut issues);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if header {
        writeln!(out, "{}", report.header())?;
    }
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    out.flush()?;
    Ok(())
}

fn read_input(input: &Path) -> io::Result<String> {
    if input == Path::new("-") {
        let mut raw = String::new();
        io::stdin().read_to_string(&mut raw)?;
        Ok(raw)
    } else {
        std::fs::read_to_string(input)
    }
}

fn explain(e: AppError) -> anyhow::Error {
    let message = e.user_message();
    anyhow::Error::new(e).context(message)
}
