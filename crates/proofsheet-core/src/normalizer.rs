//! Normalizer: turns a pasted text blob into the ordered line stream the
//! segmenter scans.
//!
//! Lines are trimmed, blank lines vanish, and any line containing a noise
//! keyword ("unread", "confirm", ...) is dropped whole. Keyword matching is a
//! case-insensitive substring test.

/// Pre-lowercased noise keywords.
#[derive(Debug, Clone)]
pub struct LineNormalizer {
    noise: Vec<String>,
}

impl LineNormalizer {
    pub fn new<S: AsRef<str>>(noise_keywords: &[S]) -> Self {
        Self {
            noise: noise_keywords
                .iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// Split, trim and filter `raw`.
    pub fn normalize(&self, raw: &str) -> Vec<String> {
        raw.lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .filter(|line| {
                let noisy = self.is_noise(line);
                if noisy {
                    tracing::trace!(line, "dropping noise line");
                }
                !noisy
            })
            .map(str::to_string)
            .collect()
    }

    pub fn is_noise(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.noise.iter().any(|k| lower.contains(k.as_str()))
    }
}
