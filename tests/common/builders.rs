//! Test builders: ergonomic constructors for expected [`ProofRecord`]s.
//!
//! These builders are designed for readability in test assertions, not for
//! production use.

use proofsheet::{ProofRecord, ProofStage};

/// Fluent builder for [`ProofRecord`] expectations. Banner and language
/// default to the built-in configuration literals.
///
/// # Example
///
/// ```rust
/// let expected = ProofRecordBuilder::new("WK25 Back -AP")
///     .date("24/06/2025")
///     .week("week-25")
///     .stage(ProofStage::AfterPress)
///     .assembler("Sakthivel S")
///     .qc("Hariharan")
///     .build();
/// ```
pub struct ProofRecordBuilder {
    record: ProofRecord,
}

impl ProofRecordBuilder {
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            record: ProofRecord {
                date: String::new(),
                banner_name: "walmart".to_string(),
                week: String::new(),
                page_name: page_name.into(),
                proof_stage: None,
                language: "All zones".to_string(),
                page_assembler: String::new(),
                qc: String::new(),
            },
        }
    }

    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.record.date = date.into();
        self
    }

    pub fn week(mut self, week: impl Into<String>) -> Self {
        self.record.week = week.into();
        self
    }

    pub fn stage(mut self, stage: ProofStage) -> Self {
        self.record.proof_stage = Some(stage);
        self
    }

    pub fn assembler(mut self, assembler: impl Into<String>) -> Self {
        self.record.page_assembler = assembler.into();
        self
    }

    pub fn qc(mut self, qc: impl Into<String>) -> Self {
        self.record.qc = qc.into();
        self
    }

    pub fn build(self) -> ProofRecord {
        self.record
    }
}

/// Join lines into a pasted blob.
pub fn paste(lines: &[&str]) -> String {
    lines.join("\n")
}
