use thiserror::Error;

/// Conditions surfaced to the caller once a scan has finished.
///
/// None of these abort a scan: malformed groups are skipped silently and the
/// caller only learns that nothing usable came out.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("please paste some raw data first")]
    EmptyInput,
    #[error("no valid entries found ({lines} lines scanned); please check the pasted data")]
    NoValidEntries { lines: usize },
}

/// Problems with a configuration that make an extractor impossible to build.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("cutoff hour must be 0-23, got {0}")]
    InvalidCutoff(u32),
    #[error("{0} must not be empty")]
    Empty(&'static str),
}
