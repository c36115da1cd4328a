//! proofsheet-core: proof-record extraction pipeline.
//!
//! Turns a copy-pasted activity log from a file-review tool into ordered
//! [`ProofRecord`]s: who submitted which page, for which week, at which
//! production stage, and on which working day.
//!
//! # Architecture
//!
//! ```text
//! Normalizer ──► Segmenter ──► records ──► (exporter)
//!                   │
//!                   ├──► Dates
//!                   ├──► Stage
//!                   ├──► Page
//!                   └──► Assembler
//! ```
//!
//! Everything is synchronous and driven by [`Extractor::extract`]. Heuristic
//! tables (noise keywords, stage precedence, code lookups) come from
//! [`config::Config`] rather than being hard-coded.

pub mod assembler;
pub mod config;
pub mod dates;
pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod page;
pub mod segmenter;
pub mod stage;
pub mod types;

pub use error::{ConfigError, ExtractError};
pub use extractor::{Extraction, Extractor};
pub use types::{Enumerations, ModeSelection, ProofRecord, ProofStage, SegmenterMode};
