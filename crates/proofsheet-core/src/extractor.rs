//! Extractor: the single entry point of the pipeline.
//!
//! ```text
//! raw text ──► LineNormalizer ──► Segmenter ──► Vec<ProofRecord>
//!                                    │
//!              DateResolver, StageClassifier, PageNormalizer,
//!              AssemblerResolver (per candidate group)
//! ```
//!
//! An [`Extractor`] is built once from a [`Config`] and is immutable
//! afterwards. Every call takes an explicit reference timestamp, so the same
//! input always yields the same records.

use crate::config::Config;
use crate::error::{ConfigError, ExtractError};
use crate::normalizer::LineNormalizer;
use crate::segmenter::Segmenter;
use crate::types::{Enumerations, ModeSelection, ProofRecord, SegmenterMode};
use chrono::NaiveDateTime;

#[derive(Debug, Clone)]
pub struct Extractor {
    normalizer: LineNormalizer,
    segmenter: Segmenter,
    enumerations: Enumerations,
    selection: ModeSelection,
}

/// Everything one extraction produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub mode: SegmenterMode,
    pub records: Vec<ProofRecord>,
    /// Lines left after normalisation.
    pub lines: usize,
    /// Timestamp groups dropped because their date did not resolve.
    pub discarded: usize,
    /// Cursor positions where no shape matched.
    pub skipped_lines: usize,
    blank_input: bool,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The records, or the user-facing reason there are none.
    pub fn into_result(self) -> Result<Vec<ProofRecord>, ExtractError> {
        if self.blank_input {
            Err(ExtractError::EmptyInput)
        } else if self.records.is_empty() {
            Err(ExtractError::NoValidEntries { lines: self.lines })
        } else {
            Ok(self.records)
        }
    }
}

impl Extractor {
    pub fn new(cfg: &Config) -> Result<Self, ConfigError> {
        Ok(Self {
            normalizer: LineNormalizer::new(&cfg.extraction.noise_keywords),
            segmenter: Segmenter::new(cfg)?,
            enumerations: cfg.enumerations(),
            selection: ModeSelection::Auto,
        })
    }

    /// Force a segmenter mode instead of detecting it per input.
    pub fn with_mode(mut self, selection: ModeSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn enumerations(&self) -> &Enumerations {
        &self.enumerations
    }

    /// Normalise `raw`, pick a mode, and scan.
    pub fn extract(&self, raw: &str, reference: NaiveDateTime) -> Extraction {
        let lines = self.normalizer.normalize(raw);
        let mode = match self.selection {
            ModeSelection::Auto => self.segmenter.detect_mode(&lines),
            ModeSelection::Forced(mode) => mode,
        };
        let scan = self.segmenter.scan(&lines, mode, reference);

        tracing::info!(
            %mode,
            lines = lines.len(),
            records = scan.records.len(),
            discarded = scan.discarded,
            skipped = scan.skipped_lines,
            "extraction finished"
        );

        Extraction {
            mode,
            records: scan.records,
            lines: lines.len(),
            discarded: scan.discarded,
            skipped_lines: scan.skipped_lines,
            blank_input: raw.trim().is_empty(),
        }
    }
}
