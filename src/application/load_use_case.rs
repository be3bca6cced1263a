// ============================================================
// Layer 2 — LoadUseCase
// ============================================================
// Orchestrates loading a Dyck dataset:
//
//   Step 1: Resolve and read data files   (Layer 4 - data)
//   Step 2: Log a per-table summary
//   Step 3: Export tables + config        (Layer 6 - infra)
//           only when an output directory is configured

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::data::dataset::DyckDataset;
use crate::data::loader::DyckLoader;
use crate::domain::traits::DatasetSource;
use crate::infra::export::DatasetExporter;

// ─── Load Configuration ──────────────────────────────────────────────────────
// Serialisable so an export can record exactly how it was produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    /// Data files and/or directories of data files
    pub inputs:           Vec<PathBuf>,
    /// One table per subset instead of one flat table
    pub use_splits:       bool,
    /// Keep lines that are blank after cleaning
    pub keep_empty_lines: bool,
    /// Where to export JSON Lines; nothing is written when `None`
    pub out_dir:          Option<PathBuf>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            inputs:           vec![PathBuf::from("data")],
            use_splits:       false,
            keep_empty_lines: false,
            out_dir:          None,
        }
    }
}

pub struct LoadUseCase {
    config: LoadConfig,
}

impl LoadUseCase {
    pub fn new(config: LoadConfig) -> Self {
        Self { config }
    }

    /// Load the dataset and, if configured, export it.
    pub fn execute(&self) -> Result<DyckDataset> {
        let cfg = &self.config;

        // ── Step 1: Load ──────────────────────────────────────────────────────
        let loader = DyckLoader::new(cfg.inputs.iter().cloned())
            .keep_empty_lines(cfg.keep_empty_lines);
        let dataset = loader.load(cfg.use_splits)?;

        // ── Step 2: Summarise ─────────────────────────────────────────────────
        for (name, table) in dataset.tables() {
            let ks: BTreeSet<i64> = table.k().iter().copied().collect();
            let ms: BTreeSet<i64> = table.m().iter().copied().collect();
            tracing::info!(
                "Table '{}': {} rows, columns {:?}, k in {:?}, m in {:?}",
                name,
                table.text().len(),
                table.column_names(),
                ks,
                ms
            );
        }

        // ── Step 3: Export ────────────────────────────────────────────────────
        if let Some(out_dir) = &cfg.out_dir {
            let exporter = DatasetExporter::new(out_dir.clone())?;
            let written = exporter.write_dataset(&dataset)?;
            exporter.save_config(cfg)?;
            tracing::info!(
                "Exported {} file(s) to '{}'",
                written.len(),
                exporter.dir().display()
            );
        }

        Ok(dataset)
    }
}
