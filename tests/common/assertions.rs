//! Domain-specific assertions for proofsheet harnesses.
//!
//! These add context-rich failure messages that make it clear *which* record
//! invariant was violated.

use proofsheet::ProofRecord;

/// Assert that a record was classified at the expected stage.
///
/// ```rust
/// assert_stage!(record, Some(ProofStage::Press));
/// ```
#[macro_export]
macro_rules! assert_stage {
    ($record:expr, $stage:expr) => {{
        let record: &proofsheet::ProofRecord = &$record;
        let expected: Option<proofsheet::ProofStage> = $stage;
        if record.proof_stage != expected {
            panic!(
                "assert_stage! failed:\n  expected: {:?}\n  actual:   {:?}\n  page: {:?}",
                expected, record.proof_stage, record.page_name
            );
        }
    }};
}

/// Assert the assembler and QC columns of a record.
///
/// ```rust
/// assert_attribution!(record, "John Doe", "Direct Upload");
/// ```
#[macro_export]
macro_rules! assert_attribution {
    ($record:expr, $assembler:expr, $qc:expr) => {{
        let record: &proofsheet::ProofRecord = &$record;
        let (assembler, qc): (&str, &str) = ($assembler, $qc);
        if record.page_assembler != assembler || record.qc != qc {
            panic!(
                "assert_attribution! failed:\n  expected: ({:?}, {:?})\n  actual:   ({:?}, {:?})\n  page: {:?}",
                assembler, qc, record.page_assembler, record.qc, record.page_name
            );
        }
    }};
}

/// Check the invariants every emitted record must satisfy.
///
/// - `week` is empty or `week-<digits>`
/// - `date` is empty or `dd/mm/yyyy`
/// - banner and language are never empty
pub fn assert_record_invariants(record: &ProofRecord) {
    let week_ok = record.week.is_empty()
        || record
            .week
            .strip_prefix("week-")
            .is_some_and(|n| !n.is_empty() && n.chars().all(|c| c.is_ascii_digit()));
    assert!(week_ok, "malformed week {:?} on {:?}", record.week, record.page_name);

    let date_ok = record.date.is_empty()
        || chrono::NaiveDate::parse_from_str(&record.date, "%d/%m/%Y").is_ok();
    assert!(date_ok, "malformed date {:?} on {:?}", record.date, record.page_name);

    assert!(!record.banner_name.is_empty(), "empty banner on {:?}", record.page_name);
    assert!(!record.language.is_empty(), "empty language on {:?}", record.page_name);
}
