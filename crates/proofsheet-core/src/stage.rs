//! Proof-stage classifier.
//!
//! Classification is an ordered list of [`StageRule`]s evaluated top to
//! bottom; the first rule with a matching keyword decides the stage. The path
//! is upper-cased with `_`, `-` and `.` turned into spaces before matching,
//! the page name is only upper-cased so that `-AP` / `PR-` style tokens keep
//! their hyphen.

use crate::types::ProofStage;
use serde::Deserialize;

/// One precedence step: `stage` applies when any of `path_any` occurs in the
/// path or any of `name_any` occurs in the page name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StageRule {
    pub stage: ProofStage,
    #[serde(default)]
    pub path_any: Vec<String>,
    #[serde(default)]
    pub name_any: Vec<String>,
    /// Narrower stages chosen by page-name tokens once this rule has matched.
    #[serde(default)]
    pub refine: Vec<Refinement>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Refinement {
    pub stage: ProofStage,
    pub name_any: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct StageClassifier {
    rules: Vec<StageRule>,
}

impl StageClassifier {
    /// Keywords are upper-cased up front; path keywords get the same separator
    /// folding as the path itself.
    pub fn new(rules: &[StageRule]) -> Self {
        let rules = rules
            .iter()
            .map(|r| StageRule {
                stage: r.stage,
                path_any: r.path_any.iter().map(|k| fold_path(k)).collect(),
                name_any: r.name_any.iter().map(|k| k.to_uppercase()).collect(),
                refine: r
                    .refine
                    .iter()
                    .map(|f| Refinement {
                        stage: f.stage,
                        name_any: f.name_any.iter().map(|k| k.to_uppercase()).collect(),
                    })
                    .collect(),
            })
            .collect();
        Self { rules }
    }

    pub fn classify(&self, name: &str, path: &str) -> Option<ProofStage> {
        let name = name.to_uppercase();
        let path = fold_path(path);

        let rule = self.rules.iter().find(|r| {
            contains_any(&path, &r.path_any) || contains_any(&name, &r.name_any)
        })?;

        let stage = rule
            .refine
            .iter()
            .find(|f| contains_any(&name, &f.name_any))
            .map_or(rule.stage, |f| f.stage);
        Some(stage)
    }
}

fn fold_path(path: &str) -> String {
    path.to_uppercase().replace(['_', '-', '.'], " ")
}

fn contains_any(haystack: &str, needles: &[String]) -> bool {
    needles.iter().any(|n| !n.is_empty() && haystack.contains(n.as_str()))
}
