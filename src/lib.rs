//! proofsheet: turn pasted proof-review notifications into a proof data sheet.
//!
//! The extraction pipeline lives in [`proofsheet_core`] and the writers in
//! [`proofsheet_export`]; this crate adds the command-line front end and
//! re-exports both so integration tests can import everything from one place.
//!
//! # Architecture
//!
//! ```text
//! input ──► Extractor ──► Vec<ProofRecord> ──► export (csv / jsonl / table)
//! ```

pub mod cli;

pub use proofsheet_core::*;
pub use proofsheet_export as export;
