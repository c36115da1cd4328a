//! Segmenter: groups normalised lines into candidate records.
//!
//! The scan is a single forward pass with an explicit cursor. At each
//! position the recognised [`Shape`]s are tried in priority order and the
//! cursor advances by that shape's stride:
//!
//! | Shape              | Lines                               | Stride |
//! |--------------------|-------------------------------------|--------|
//! | `TimestampTriplet` | `Name, <timestamp>` / page / path   | 3      |
//! | `BatchPlacement`   | `CORP [WK nn ...]` / path           | 2      |
//! | `CodedPair`        | `XX-Q-page` / path (coded mode)     | 2      |
//! | `NoMatch`          | any                                 | 1      |
//!
//! A triplet whose timestamp cannot be resolved is still consumed whole; it
//! just produces no record. A coded name line without its `XX-Q-` prefix is
//! a `NoMatch`. Lookahead past the end of the input is a
//! `NoMatch`, never an error.

use crate::assembler::{AssemblerResolver, Attribution};
use crate::config::Config;
use crate::dates::DateResolver;
use crate::error::ConfigError;
use crate::page::PageNormalizer;
use crate::stage::StageClassifier;
use crate::types::{ProofRecord, SegmenterMode};
use chrono::NaiveDateTime;
use regex::Regex;

/// Progress through a timestamp triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    ExpectTimestamp,
    ExpectPage,
    ExpectPath,
    Complete,
}

/// A recognised (or rejected) line shape at one cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    TimestampTriplet,
    BatchPlacement,
    CodedPair,
    NoMatch,
}

impl Shape {
    /// Lines consumed when this shape is matched.
    pub const fn stride(self) -> usize {
        match self {
            Shape::TimestampTriplet => 3,
            Shape::BatchPlacement | Shape::CodedPair => 2,
            Shape::NoMatch => 1,
        }
    }
}

/// The lines of a matched timestamp triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineGroup<'a> {
    pub timestamp: &'a str,
    pub page: &'a str,
    pub path: &'a str,
}

/// Outcome of examining one cursor position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub shape: Shape,
    /// `None` for `NoMatch` and for triplets with an unresolvable timestamp.
    pub record: Option<ProofRecord>,
}

impl Step {
    fn unmatched() -> Self {
        Self {
            shape: Shape::NoMatch,
            record: None,
        }
    }
}

/// Records from one pass plus what was thrown away on the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub records: Vec<ProofRecord>,
    /// Triplets consumed without a record because the date did not resolve.
    pub discarded: usize,
    /// Positions where no shape matched.
    pub skipped_lines: usize,
}

#[derive(Debug, Clone)]
pub struct Segmenter {
    time_of_day: Regex,
    department: Regex,
    path_prefix: String,
    banner_name: String,
    language: String,
    preferred_assembler: String,
    alternate_assembler: String,
    fallback_date: String,
    dates: DateResolver,
    stages: StageClassifier,
    pages: PageNormalizer,
    attribution: AssemblerResolver,
}

impl Segmenter {
    pub fn new(cfg: &Config) -> Result<Self, ConfigError> {
        if cfg.extraction.path_prefix.is_empty() {
            return Err(ConfigError::Empty("path_prefix"));
        }
        Ok(Self {
            time_of_day: compile("time of day", r"\d{1,2}:\d{2}\s*[AaPpMm]+")?,
            department: compile("department", &cfg.batch.department_pattern)?,
            path_prefix: cfg.extraction.path_prefix.clone(),
            banner_name: cfg.extraction.banner_name.clone(),
            language: cfg.extraction.language.clone(),
            preferred_assembler: cfg.batch.preferred_assembler.clone(),
            alternate_assembler: cfg.batch.alternate_assembler.clone(),
            fallback_date: cfg.batch.fallback_date.clone(),
            dates: DateResolver::new(&cfg.extraction)?,
            stages: StageClassifier::new(&cfg.stage_rules),
            pages: PageNormalizer::new(&cfg.page.stage_prefixes)?,
            attribution: AssemblerResolver::new(
                &cfg.extraction,
                &cfg.assembler_codes,
                &cfg.qc_codes,
            )?,
        })
    }

    /// A line with a comma and an `H:MM AM` time of day.
    pub fn is_timestamp_line(&self, line: &str) -> bool {
        line.contains(',') && self.time_of_day.is_match(line)
    }

    pub fn is_path_line(&self, line: &str) -> bool {
        line.starts_with(&self.path_prefix)
    }

    /// Free-text when any line carries a timestamp, coded otherwise.
    pub fn detect_mode<S: AsRef<str>>(&self, lines: &[S]) -> SegmenterMode {
        if lines.iter().any(|l| self.is_timestamp_line(l.as_ref())) {
            SegmenterMode::FreeText
        } else {
            SegmenterMode::Coded
        }
    }

    /// Run the whole scan.
    pub fn scan<S: AsRef<str>>(
        &self,
        lines: &[S],
        mode: SegmenterMode,
        reference: NaiveDateTime,
    ) -> Scan {
        let mut scan = Scan::default();
        let mut cursor = 0;
        while cursor < lines.len() {
            let step = self.step(lines, cursor, mode, reference);
            match (step.shape, step.record) {
                (_, Some(record)) => {
                    tracing::debug!(cursor, shape = ?step.shape, page = %record.page_name, "record emitted");
                    scan.records.push(record);
                }
                (Shape::NoMatch, None) => scan.skipped_lines += 1,
                (shape, None) => {
                    tracing::debug!(cursor, ?shape, "timestamp unresolved, group discarded");
                    scan.discarded += 1;
                }
            }
            cursor += step.shape.stride();
        }
        scan
    }

    /// Examine the lines at `cursor` and decide the shape there.
    pub fn step<S: AsRef<str>>(
        &self,
        lines: &[S],
        cursor: usize,
        mode: SegmenterMode,
        reference: NaiveDateTime,
    ) -> Step {
        match mode {
            SegmenterMode::FreeText => self.free_text_step(lines, cursor, reference),
            SegmenterMode::Coded => self.coded_step(lines, cursor),
        }
    }

    /// Walk the triplet states over the lines starting at `cursor`.
    pub fn match_triplet<'a, S: AsRef<str>>(
        &self,
        lines: &'a [S],
        cursor: usize,
    ) -> Option<LineGroup<'a>> {
        let mut group = LineGroup::default();
        let mut state = ScanState::ExpectTimestamp;
        for line in lines.get(cursor..)?.iter().take(3) {
            let line = line.as_ref();
            state = match state {
                ScanState::ExpectTimestamp if self.is_timestamp_line(line) => {
                    group.timestamp = line;
                    ScanState::ExpectPage
                }
                ScanState::ExpectPage => {
                    group.page = line;
                    ScanState::ExpectPath
                }
                ScanState::ExpectPath if self.is_path_line(line) => {
                    group.path = line;
                    ScanState::Complete
                }
                _ => return None,
            };
        }
        (state == ScanState::Complete).then_some(group)
    }

    fn free_text_step<S: AsRef<str>>(
        &self,
        lines: &[S],
        cursor: usize,
        reference: NaiveDateTime,
    ) -> Step {
        if let Some(group) = self.match_triplet(lines, cursor) {
            return Step {
                shape: Shape::TimestampTriplet,
                record: self.triplet_record(&group, reference),
            };
        }
        if let Some(record) = self.batch_record(lines, cursor) {
            return Step {
                shape: Shape::BatchPlacement,
                record: Some(record),
            };
        }
        Step::unmatched()
    }

    fn coded_step<S: AsRef<str>>(&self, lines: &[S], cursor: usize) -> Step {
        let (Some(name), Some(path)) = (lines.get(cursor), lines.get(cursor + 1)) else {
            return Step::unmatched();
        };
        let Some(decoded) = self.attribution.coded(name.as_ref()) else {
            return Step::unmatched();
        };
        let page_name = self.pages.normalize(decoded.page);
        Step {
            shape: Shape::CodedPair,
            record: Some(self.record(String::new(), page_name, path.as_ref(), decoded.attribution)),
        }
    }

    fn triplet_record(&self, group: &LineGroup<'_>, reference: NaiveDateTime) -> Option<ProofRecord> {
        let date = self.dates.resolve_formatted(group.timestamp, reference)?;
        let page_name = self.pages.normalize(group.page);
        let attribution = self.attribution.free_text(group.timestamp, group.page);
        Some(self.record(date, page_name, group.path, attribution))
    }

    fn batch_record<S: AsRef<str>>(&self, lines: &[S], cursor: usize) -> Option<ProofRecord> {
        let name: &str = lines.get(cursor)?.as_ref();
        let path: &str = lines.get(cursor + 1)?.as_ref();
        if !self.department.is_match(name) || !self.is_path_line(path) {
            return None;
        }

        let previous: Option<&str> = cursor
            .checked_sub(1)
            .and_then(|i| lines.get(i))
            .map(|line| line.as_ref());
        let assembler = if previous.is_some_and(|p| p.contains(self.preferred_assembler.as_str())) {
            &self.preferred_assembler
        } else {
            &self.alternate_assembler
        };
        let attribution = Attribution {
            assembler: assembler.clone(),
            qc: self.attribution.default_reviewer().to_string(),
        };
        Some(self.record(self.fallback_date.clone(), name.to_string(), path, attribution))
    }

    fn record(&self, date: String, page_name: String, path: &str, attribution: Attribution) -> ProofRecord {
        ProofRecord {
            date,
            banner_name: self.banner_name.clone(),
            week: self.pages.week(&page_name),
            proof_stage: self.stages.classify(&page_name, path),
            page_name,
            language: self.language.clone(),
            page_assembler: attribution.assembler,
            qc: attribution.qc,
        }
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern { name, source })
}
