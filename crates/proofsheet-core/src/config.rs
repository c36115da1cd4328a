//! Configuration types for proofsheet.
//!
//! [`Config::load`] reads `~/.config/proofsheet/config.toml`, creating it with
//! the built-in defaults if it does not yet exist, then layers an optional
//! explicit file on top. [`Config::defaults`] returns the same defaults without
//! touching the filesystem (useful in tests).
//!
//! Every heuristic table the pipeline consults lives here as data: noise
//! keywords, stage precedence rules, code lookup tables and dropdown lists.
//! Behaviour can be pinned per deployment by editing the TOML alone.

use crate::stage::StageRule;
use crate::types::{Enumerations, ProofStage};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

pub const DEFAULT_CONFIG: &str = r#"
[extraction]
noise_keywords       = ["unread", "confirm", "reduce", "annotation"]
path_prefix          = "/Volumes"
direct_upload_marker = "D-"
direct_upload_label  = "Direct Upload"
default_reviewer     = "Hariharan"
banner_name          = "walmart"
language             = "All zones"
cutoff_hour          = 16
weekday_direction    = "forward"

[batch]
department_pattern   = '(?i)CORP\s*\[?WK\s*\d+'
preferred_assembler  = "Mohammed Siddik"
alternate_assembler  = "Prasanth As"
fallback_date        = "25/06/2025"

[page]
stage_prefixes = ["AP", "PR", "PP"]

# Ordered: the first rule whose path or name keywords match wins.
[[stage_rules]]
stage    = "PROOF1"
path_any = ["PROOF1", "PROOF 1", "1 PROOF"]

# Deployments that treat PR- pages as pre-press set this stage to "PRE PRESS".
[[stage_rules]]
stage    = "PRINT READY"
path_any = ["PRE PRESS"]
name_any = ["-PR", "PR-", "-PP", "PP-"]

[[stage_rules]]
stage    = "AFTER PRESS"
path_any = ["AFTER PRESS"]
name_any = ["-AP", "AP-"]

[[stage_rules]]
stage    = "CPR"
path_any = ["CPR"]

[[stage_rules]]
stage    = "PRINT READY"
path_any = ["PRINT READY", "PRINTREADY", "PRESS PRINT READY CHANGES"]

[[stage_rules]]
stage    = "PRESS"
path_any = ["PRESS"]
refine   = [
    { stage = "AFTER PRESS", name_any = ["-AP", "AP-"] },
    { stage = "PRE PRESS",   name_any = ["-PR", "PR-"] },
]

[[assembler_codes]]
code = "MU"
name = "Munish"

[[assembler_codes]]
code = "MS"
name = "Mohammed Siddik"

[[assembler_codes]]
code = "SS"
name = "Sakthivel S"

[[assembler_codes]]
code = "PA"
name = "Prasanth As"

[[qc_codes]]
code = "D"
name = "Direct Upload"

[[qc_codes]]
code = "H"
name = "Hariharan"

[enumerations]
languages  = ["All zones", "BIL", "ENG"]
assemblers = ["", "Munish", "Mohammed Siddik", "Sakthivel S", "Prasanth As"]
qc         = ["", "Direct Upload", "Hariharan"]
"#;

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, loaded from `~/.config/proofsheet/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub extraction: ExtractionConfig,
    pub batch: BatchConfig,
    pub page: PageConfig,
    pub stage_rules: Vec<StageRule>,
    pub assembler_codes: Vec<CodeEntry>,
    pub qc_codes: Vec<CodeEntry>,
    pub enumerations: EnumerationConfig,
}

/// `[extraction]` section: literals and knobs shared by every shape.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractionConfig {
    /// Lines containing any of these (case-insensitive) are dropped.
    pub noise_keywords: Vec<String>,
    /// A path line must start with this.
    pub path_prefix: String,
    /// Page lines starting with this (case-insensitive) were uploaded directly.
    pub direct_upload_marker: String,
    pub direct_upload_label: String,
    pub default_reviewer: String,
    pub banner_name: String,
    pub language: String,
    /// Times strictly before this hour are attributed to the previous day.
    pub cutoff_hour: u32,
    /// Year assumed for `Mon DD, H:MM AM` timestamps. Defaults to the year of
    /// the reference timestamp.
    #[serde(default)]
    pub year: Option<i32>,
    pub weekday_direction: WeekdayDirection,
}

/// Which occurrence of a bare weekday a timestamp refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekdayDirection {
    /// Today or the next six days.
    Forward,
    /// Today or the previous six days.
    Backward,
}

/// `[batch]` section: CORP batch placements that carry no timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchConfig {
    pub department_pattern: String,
    /// Chosen when this name appears on the line before the placement.
    pub preferred_assembler: String,
    pub alternate_assembler: String,
    /// Known approximation: batch placements have no timestamp of their own.
    pub fallback_date: String,
}

/// `[page]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// Leading `XX-` tokens moved to a trailing ` -XX` suffix.
    pub stage_prefixes: Vec<String>,
}

/// One row of an ordered code lookup table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CodeEntry {
    pub code: String,
    pub name: String,
}

/// `[enumerations]` section: dropdown values that are not derived from the
/// stage taxonomy.
#[derive(Debug, Clone, Deserialize)]
pub struct EnumerationConfig {
    pub languages: Vec<String>,
    pub assemblers: Vec<String>,
    pub qc: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then `~/.config/proofsheet/config.toml`
    /// (created with defaults if it does not exist), then `explicit` if given.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path.as_path()).required(false));
        if let Some(explicit) = explicit {
            builder = builder.add_source(config::File::from(explicit).required(true));
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        tracing::debug!(
            rules = cfg.stage_rules.len(),
            explicit = ?explicit,
            "configuration loaded"
        );
        Ok(cfg)
    }

    /// Layer a single TOML file over the built-in defaults, skipping the
    /// per-user file.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(true))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }

    /// Dropdown value lists for the exporter.
    pub fn enumerations(&self) -> Enumerations {
        Enumerations {
            proof_stages: ProofStage::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            languages: self.enumerations.languages.clone(),
            assemblers: self.enumerations.assemblers.clone(),
            qc: self.enumerations.qc.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("proofsheet")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
