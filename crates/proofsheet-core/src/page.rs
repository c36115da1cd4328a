//! Page names: stage-prefix normalisation and week-token extraction.

use crate::error::ConfigError;
use regex::Regex;

#[derive(Debug, Clone)]
pub struct PageNormalizer {
    /// `^(AP|PR|...)-(.+)`; `None` when no prefixes are configured.
    prefix: Option<Regex>,
    /// `\s-(AP|PR|...)$`, a name that already carries a stage suffix.
    suffix: Option<Regex>,
    week: Regex,
}

impl PageNormalizer {
    pub fn new<S: AsRef<str>>(stage_prefixes: &[S]) -> Result<Self, ConfigError> {
        let alternation = stage_prefixes
            .iter()
            .map(|p| regex::escape(p.as_ref().trim()))
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join("|");
        let (prefix, suffix) = if alternation.is_empty() {
            (None, None)
        } else {
            (
                Some(compile("stage prefix", &format!(r"^({alternation})-(.+)$"))?),
                Some(compile("stage suffix", &format!(r"\s-({alternation})$"))?),
            )
        };
        Ok(Self {
            prefix,
            suffix,
            week: compile("week", r"(?i)\bW[KE\- ]*(\d+)")?,
        })
    }

    /// `AP-PAGE1` becomes `PAGE1 -AP`; anything else is returned trimmed.
    ///
    /// Only one prefix moves: a name already ending in a stage suffix is left
    /// alone, so `PR-AP-PAGE` settles at `AP-PAGE -PR`.
    pub fn normalize(&self, name: &str) -> String {
        let name = name.trim();
        if self.suffix.as_ref().is_some_and(|re| re.is_match(name)) {
            return name.to_string();
        }
        let Some(caps) = self.prefix.as_ref().and_then(|re| re.captures(name)) else {
            return name.to_string();
        };
        let rest = caps[2].trim();
        if rest.is_empty() {
            return name.to_string();
        }
        format!("{rest} -{}", &caps[1])
    }

    /// `WK25_Digital` gives `week-25`; no token gives an empty string.
    pub fn week(&self, name: &str) -> String {
        self.week
            .captures(name)
            .map(|caps| format!("week-{}", &caps[1]))
            .unwrap_or_default()
    }
}

fn compile(name: &'static str, pattern: &str) -> Result<Regex, ConfigError> {
    Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern { name, source })
}
