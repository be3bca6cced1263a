// ============================================================
// Layer 2 — CheckUseCase
// ============================================================
// Validates that Dyck text is well balanced.
//
// Two sources of text:
//   - a single string given directly (`text`)
//   - every row of a dataset loaded from `inputs`
//
// The checker itself never fails; only loading can.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::data::loader::DyckLoader;
use crate::domain::balance::is_balanced_with;
use crate::domain::symbols::SymbolMapping;
use crate::domain::traits::DatasetSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    pub inputs:           Vec<PathBuf>,
    /// Checked instead of `inputs` when set
    pub text:             Option<String>,
    pub pairs:            SymbolMapping,
    pub keep_empty_lines: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            inputs:           Vec::new(),
            text:             None,
            pairs:            SymbolMapping::default(),
            keep_empty_lines: false,
        }
    }
}

/// Outcome of checking a batch of texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckReport {
    pub checked:         usize,
    pub balanced:        usize,
    /// Row indices (in load order) of texts that failed
    pub unbalanced_rows: Vec<usize>,
}

impl CheckReport {
    pub fn all_balanced(&self) -> bool {
        self.unbalanced_rows.is_empty()
    }
}

/// Check each text in order against `symbols`.
pub fn check_texts<'a, I>(texts: I, symbols: &SymbolMapping) -> CheckReport
where
    I: IntoIterator<Item = &'a str>,
{
    let mut report = CheckReport::default();

    for (row, text) in texts.into_iter().enumerate() {
        report.checked += 1;
        if is_balanced_with(text, symbols) {
            report.balanced += 1;
        } else {
            tracing::debug!("Row {} is unbalanced: {}", row, text);
            report.unbalanced_rows.push(row);
        }
    }

    report
}

pub struct CheckUseCase {
    config: CheckConfig,
}

impl CheckUseCase {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn execute(&self) -> Result<CheckReport> {
        let cfg = &self.config;
        tracing::info!("Checking balance with symbol pairs '{}'", cfg.pairs);

        if let Some(text) = &cfg.text {
            return Ok(check_texts([text.as_str()], &cfg.pairs));
        }

        let dataset = DyckLoader::new(cfg.inputs.iter().cloned())
            .keep_empty_lines(cfg.keep_empty_lines)
            .load(false)?;

        let report = check_texts(dataset.texts(), &cfg.pairs);
        tracing::info!(
            "Checked {} rows: {} balanced, {} unbalanced",
            report.checked,
            report.balanced,
            report.unbalanced_rows.len()
        );
        Ok(report)
    }
}
