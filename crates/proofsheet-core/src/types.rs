//! Core types for proofsheet-core.
//!
//! This module defines the record emitted by the extraction pipeline
//! ([`ProofRecord`]), the closed [`ProofStage`] taxonomy, and the
//! [`Enumerations`] an exporter needs to decorate spreadsheet columns.

use serde::{Deserialize, Serialize, Serializer};

/// One extracted proof submission.
///
/// Records are fully populated by the segmenter at construction and never
/// mutated afterwards. Field order matches the spreadsheet column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProofRecord {
    /// `dd/mm/yyyy`, or empty when the group carried no usable timestamp.
    pub date: String,
    /// Retailer literal, constant per deployment.
    pub banner_name: String,
    /// `week-N`, or empty when the page name has no week token.
    pub week: String,
    /// Page identifier after prefix normalisation.
    pub page_name: String,
    #[serde(serialize_with = "serialize_stage")]
    pub proof_stage: Option<ProofStage>,
    /// Zone coverage literal.
    pub language: String,
    pub page_assembler: String,
    pub qc: String,
}

impl ProofRecord {
    /// The eight cell values in column order, with empty strings for unset
    /// fields.
    pub fn cells(&self) -> [&str; 8] {
        [
            &self.date,
            &self.banner_name,
            &self.week,
            &self.page_name,
            self.proof_stage.map_or("", ProofStage::as_str),
            &self.language,
            &self.page_assembler,
            &self.qc,
        ]
    }
}

fn serialize_stage<S: Serializer>(stage: &Option<ProofStage>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(stage.map_or("", ProofStage::as_str))
}

/// Production stage a proof was submitted at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProofStage {
    #[serde(rename = "PRESS")]
    Press,
    #[serde(rename = "CPR")]
    Cpr,
    #[serde(rename = "PRE PRESS")]
    PrePress,
    #[serde(rename = "AFTER PRESS")]
    AfterPress,
    #[serde(rename = "PRINT READY")]
    PrintReady,
    #[serde(rename = "PROOF1")]
    Proof1,
}

impl ProofStage {
    /// Every stage, in dropdown order.
    pub const ALL: [ProofStage; 6] = [
        ProofStage::Press,
        ProofStage::Cpr,
        ProofStage::PrePress,
        ProofStage::AfterPress,
        ProofStage::PrintReady,
        ProofStage::Proof1,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProofStage::Press => "PRESS",
            ProofStage::Cpr => "CPR",
            ProofStage::PrePress => "PRE PRESS",
            ProofStage::AfterPress => "AFTER PRESS",
            ProofStage::PrintReady => "PRINT READY",
            ProofStage::Proof1 => "PROOF1",
        }
    }
}

impl std::fmt::Display for ProofStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which segmentation strategy produced (or will produce) the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmenterMode {
    /// `Name, <timestamp>` / page / path triplets with free-text assemblers.
    FreeText,
    /// Strict name / path pairs with `XX-Q-` code prefixes.
    Coded,
}

impl std::fmt::Display for SegmenterMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmenterMode::FreeText => write!(f, "free-text"),
            SegmenterMode::Coded => write!(f, "coded"),
        }
    }
}

/// How the segmenter mode is chosen for a given input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModeSelection {
    /// Free-text when any line looks like `Name, ... H:MM AM`, coded otherwise.
    #[default]
    Auto,
    Forced(SegmenterMode),
}

/// Fixed value lists for spreadsheet dropdowns.
///
/// Rendering them is the exporter's job; the lists themselves belong to the
/// core because they mirror the classifier and resolver tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enumerations {
    pub proof_stages: Vec<String>,
    pub languages: Vec<String>,
    pub assemblers: Vec<String>,
    pub qc: Vec<String>,
}
