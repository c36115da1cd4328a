//! Command-line front end: read a pasted log, extract, export.

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, ValueEnum};
use proofsheet_core::config::Config;
use proofsheet_core::{Extractor, ModeSelection, SegmenterMode};
use proofsheet_export::{dropdown_columns, write_records, ExportFormat};
use std::io::{Read, Write};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "proofsheet",
    about = "Turn pasted proof-review notifications into a proof data sheet"
)]
pub struct Cli {
    /// Pasted log to read. Reads stdin when omitted or `-`.
    pub input: Option<PathBuf>,

    /// Output format: csv, jsonl (or ndjson) or table (or text).
    #[arg(long, short, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Write to this file instead of stdout.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Extra TOML config layered over the defaults and the user config.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Ignore ~/.config/proofsheet/config.toml.
    #[arg(long)]
    pub no_user_config: bool,

    /// How to group lines into records.
    #[arg(long, value_enum, default_value_t = Mode::Auto)]
    pub mode: Mode,

    /// Reference time for weekday timestamps (YYYY-MM-DD[THH:MM[:SS]]).
    /// Defaults to the local time now.
    #[arg(long, value_parser = parse_reference)]
    pub reference: Option<NaiveDateTime>,

    /// Print the dropdown value lists as JSON and exit.
    #[arg(long)]
    pub enumerations: bool,

    /// Write debug logs to /tmp/proofsheet-debug.log (tail -f to inspect).
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    Auto,
    FreeText,
    Coded,
}

impl From<Mode> for ModeSelection {
    fn from(m: Mode) -> Self {
        match m {
            Mode::Auto => ModeSelection::Auto,
            Mode::FreeText => ModeSelection::Forced(SegmenterMode::FreeText),
            Mode::Coded => ModeSelection::Forced(SegmenterMode::Coded),
        }
    }
}

pub fn parse_reference(s: &str) -> Result<NaiveDateTime, String> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| format!("expected YYYY-MM-DD[THH:MM[:SS]], got {s:?}"))
}

impl Cli {
    fn load_config(&self) -> anyhow::Result<Config> {
        match (&self.config, self.no_user_config) {
            (Some(path), true) => Config::from_file(path),
            (None, true) => Ok(Config::defaults()),
            (explicit, false) => Config::load(explicit.as_deref()),
        }
        .context("loading configuration")
    }

    fn read_input(&self, stdin: &mut dyn Read) -> anyhow::Result<String> {
        match &self.input {
            Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display())),
            _ => {
                let mut raw = String::new();
                stdin.read_to_string(&mut raw).context("reading stdin")?;
                Ok(raw)
            }
        }
    }
}

/// Run one invocation. `stdin` / `stdout` are injected so tests can drive it.
pub fn run(cli: &Cli, stdin: &mut dyn Read, stdout: &mut dyn Write) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    let extractor = Extractor::new(&config)
        .context("invalid configuration")?
        .with_mode(cli.mode.into());

    if cli.enumerations {
        let payload = serde_json::json!({
            "enumerations": extractor.enumerations(),
            "dropdowns": dropdown_columns(extractor.enumerations()),
        });
        serde_json::to_writer_pretty(&mut *stdout, &payload)?;
        writeln!(stdout)?;
        return Ok(());
    }

    let raw = cli.read_input(stdin)?;
    let reference = cli
        .reference
        .unwrap_or_else(|| chrono::Local::now().naive_local());
    let extraction = extractor.extract(&raw, reference);
    if extraction.discarded > 0 {
        tracing::warn!(
            discarded = extraction.discarded,
            "some timestamped groups had no usable date and were skipped"
        );
    }
    let records = extraction.into_result()?;

    match &cli.output {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            write_records(&records, cli.format, std::io::BufWriter::new(file))?;
            tracing::info!(path = %path.display(), records = records.len(), "sheet written");
        }
        None => write_records(&records, cli.format, &mut *stdout)?,
    }
    Ok(())
}
