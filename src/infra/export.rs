// ============================================================
// Layer 6 — Dataset Exporter
// ============================================================
// Writes a loaded dataset to disk so other tools (Python
// notebooks, `jq`, other training code) can consume it.
//
// Output layout:
//   out/
//     dataset.jsonl       ← flat dataset, one row per line
//     train.jsonl         ← or one file per subset
//     test.jsonl
//     load_config.json    ← how the dataset was loaded
//
// JSON Lines example:
//   {"k":2,"m":4,"tr":"10","subset":"train","text":"( [ ] )"}

use anyhow::{Context, Result};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use crate::application::load_use_case::LoadConfig;
use crate::data::dataset::{DyckDataset, DyckTable};

const FLAT_FILE_NAME: &str = "dataset.jsonl";
const CONFIG_FILE_NAME: &str = "load_config.json";

pub struct DatasetExporter {
    dir: PathBuf,
}

impl DatasetExporter {
    /// Create a new DatasetExporter, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write every table of `dataset` as JSON Lines.
    /// Returns the paths written, in table order.
    pub fn write_dataset(&self, dataset: &DyckDataset) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();

        match dataset {
            DyckDataset::Flat(table) => {
                written.push(self.write_table(table, FLAT_FILE_NAME)?);
            }
            DyckDataset::Splits(splits) => {
                for (subset, table) in splits {
                    written.push(self.write_table(table, &format!("{subset}.jsonl"))?);
                }
            }
        }

        Ok(written)
    }

    fn write_table(&self, table: &DyckTable, file_name: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        let file = File::create(&path)
            .with_context(|| format!("Cannot create '{}'", path.display()))?;
        let mut out = BufWriter::new(file);

        let mut count = 0usize;
        for row in table.rows() {
            serde_json::to_writer(&mut out, &row)?;
            out.write_all(b"\n")?;
            count += 1;
        }
        out.flush()
            .with_context(|| format!("Cannot write '{}'", path.display()))?;

        tracing::debug!("Wrote {} rows to '{}'", count, path.display());
        Ok(path)
    }

    /// Save the load configuration next to the exported data.
    pub fn save_config(&self, cfg: &LoadConfig) -> Result<()> {
        let path = self.dir.join(CONFIG_FILE_NAME);
        let json = serde_json::to_string_pretty(cfg)?;

        fs::write(&path, json)
            .with_context(|| format!("Cannot write config to '{}'", path.display()))?;

        tracing::debug!("Saved load config to '{}'", path.display());
        Ok(())
    }

    /// Read back a configuration written by `save_config`.
    pub fn load_config(&self) -> Result<LoadConfig> {
        let path = self.dir.join(CONFIG_FILE_NAME);
        let json = fs::read_to_string(&path)
            .with_context(|| format!("Cannot read config from '{}'", path.display()))?;

        Ok(serde_json::from_str(&json)?)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::builder::TableBuilder;
    use crate::data::dataset::DyckRow;
    use crate::domain::file_name::DyckFileName;
    use std::collections::BTreeMap;
    use tempfile::tempdir;

    fn read_rows(path: &Path) -> Vec<DyckRow> {
        fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn test_write_flat_dataset() {
        let dir = tempdir().unwrap();
        let mut b = TableBuilder::with_subset_column();
        b.append_file(
            &DyckFileName::parse("k2_m4_tr10.train").unwrap(),
            vec!["( )".into(), "[ ]".into()],
        );
        let ds = DyckDataset::Flat(b.finish());

        let exporter = DatasetExporter::new(dir.path().join("out")).unwrap();
        let written = exporter.write_dataset(&ds).unwrap();
        assert_eq!(written, vec![dir.path().join("out").join("dataset.jsonl")]);

        let rows = read_rows(&written[0]);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text, "[ ]");
        assert_eq!(rows[1].subset.as_deref(), Some("train"));
    }

    #[test]
    fn test_write_splits_one_file_per_subset() {
        let dir = tempdir().unwrap();
        let mut splits = BTreeMap::new();
        for subset in ["dev", "train"] {
            let mut b = TableBuilder::without_subset_column();
            b.append_file(
                &DyckFileName::parse(&format!("k2_m4_tr10.{subset}")).unwrap(),
                vec!["{ }".into()],
            );
            splits.insert(subset.to_string(), b.finish());
        }

        let exporter = DatasetExporter::new(dir.path()).unwrap();
        let written = exporter.write_dataset(&DyckDataset::Splits(splits)).unwrap();
        assert_eq!(written.len(), 2);
        assert!(written[0].ends_with("dev.jsonl"));
        assert!(written[1].ends_with("train.jsonl"));

        let rows = read_rows(&written[1]);
        assert_eq!(rows[0].subset, None);
        assert_eq!(rows[0].k, 2);
    }

    #[test]
    fn test_config_round_trip() {
        let dir = tempdir().unwrap();
        let exporter = DatasetExporter::new(dir.path()).unwrap();
        let cfg = LoadConfig {
            inputs: vec!["data".into()],
            use_splits: true,
            ..LoadConfig::default()
        };

        exporter.save_config(&cfg).unwrap();
        let back = exporter.load_config().unwrap();
        assert_eq!(back.inputs, cfg.inputs);
        assert!(back.use_splits);
        assert!(!back.keep_empty_lines);
    }

    #[test]
    fn test_load_config_missing_is_error() {
        let dir = tempdir().unwrap();
        let exporter = DatasetExporter::new(dir.path()).unwrap();
        assert!(exporter.load_config().is_err());
    }
}
