//! Assembler / QC resolution.
//!
//! Free-text logs name the assembler in front of the timestamp and imply the
//! QC disposition through a direct-upload marker on the page line. Coded logs
//! prefix the page line with `<assembler code>-<qc code>-` instead; both codes
//! are looked up in small ordered tables. Unknown codes resolve to an empty
//! string.

use crate::config::{CodeEntry, ExtractionConfig};
use crate::error::ConfigError;
use regex::Regex;

/// Ordered code → name association list. Lookups ignore case.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    entries: Vec<CodeEntry>,
}

impl CodeTable {
    pub fn new(entries: &[CodeEntry]) -> Self {
        Self {
            entries: entries
                .iter()
                .map(|e| CodeEntry {
                    code: e.code.trim().to_uppercase(),
                    name: e.name.clone(),
                })
                .collect(),
        }
    }

    /// First entry whose code matches, else `""`.
    pub fn lookup(&self, code: &str) -> &str {
        let code = code.trim().to_uppercase();
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map_or("", |e| e.name.as_str())
    }
}

/// Who assembled a page and how it was checked.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Attribution {
    pub assembler: String,
    pub qc: String,
}

/// Result of splitting a coded name line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodedName<'a> {
    pub attribution: Attribution,
    /// Name line with the code prefix removed.
    pub page: &'a str,
}

#[derive(Debug, Clone)]
pub struct AssemblerResolver {
    direct_upload_marker: String,
    direct_upload_label: String,
    default_reviewer: String,
    code_prefix: Regex,
    assemblers: CodeTable,
    qc: CodeTable,
}

impl AssemblerResolver {
    pub fn new(
        cfg: &ExtractionConfig,
        assembler_codes: &[CodeEntry],
        qc_codes: &[CodeEntry],
    ) -> Result<Self, ConfigError> {
        if cfg.direct_upload_marker.trim().is_empty() {
            return Err(ConfigError::Empty("direct_upload_marker"));
        }
        let code_prefix = Regex::new(r"^([A-Za-z]{2})-([A-Za-z]{1,2})-(.*)$").map_err(|source| {
            ConfigError::InvalidPattern {
                name: "code prefix",
                source,
            }
        })?;
        Ok(Self {
            direct_upload_marker: cfg.direct_upload_marker.trim().to_uppercase(),
            direct_upload_label: cfg.direct_upload_label.clone(),
            default_reviewer: cfg.default_reviewer.clone(),
            code_prefix,
            assemblers: CodeTable::new(assembler_codes),
            qc: CodeTable::new(qc_codes),
        })
    }

    /// Split `Name, Tue 3:45 PM` style lines: the assembler is everything
    /// before the first comma.
    pub fn free_text(&self, timestamp_line: &str, page_line: &str) -> Attribution {
        let assembler = timestamp_line
            .split_once(',')
            .map_or(timestamp_line, |(name, _)| name)
            .trim()
            .to_string();
        Attribution {
            assembler,
            qc: self.free_text_qc(page_line).to_string(),
        }
    }

    /// `Direct Upload` for pages carrying the direct-upload marker, the
    /// default reviewer otherwise.
    pub fn free_text_qc(&self, page_line: &str) -> &str {
        if page_line
            .trim()
            .to_uppercase()
            .starts_with(&self.direct_upload_marker)
        {
            &self.direct_upload_label
        } else {
            &self.default_reviewer
        }
    }

    pub fn default_reviewer(&self) -> &str {
        &self.default_reviewer
    }

    /// Decode `MU-D-PAGE2` into assembler, QC and remaining page text.
    ///
    /// `None` when the line has no `XX-Q-` prefix. Unknown codes inside a
    /// prefix still decode, to empty names.
    pub fn coded<'a>(&self, name_line: &'a str) -> Option<CodedName<'a>> {
        let caps = self.code_prefix.captures(name_line.trim())?;
        Some(CodedName {
            attribution: Attribution {
                assembler: self.assemblers.lookup(&caps[1]).to_string(),
                qc: self.qc.lookup(&caps[2]).to_string(),
            },
            page: caps.get(3).map_or("", |m| m.as_str()),
        })
    }
}
