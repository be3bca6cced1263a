// ============================================================
// Layer 4 — Dyck Dataset Loader
// ============================================================
// Reads Dyck data files and assembles them into tables.
//
// Input paths may be:
//   - a directory → every regular file directly inside it
//                   (no recursion), in sorted order; files
//                   whose names don't follow the convention
//                   are skipped with a warning
//   - a file      → must follow the naming convention,
//                   otherwise loading fails
//
// Per file:
//   name  → DyckFileName          (k, m, tr, subset)
//   lines → LineCleaner           (END marker + whitespace off)
//         → TableBuilder          (one aligned row group)
//
// Output is either one flat table with a subset column, or
// one table per subset.

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::{fs, path::{Path, PathBuf}};

use crate::data::builder::TableBuilder;
use crate::data::dataset::DyckDataset;
use crate::data::preprocessor::LineCleaner;
use crate::domain::file_name::DyckFileName;
use crate::domain::traits::DatasetSource;

/// Loads Dyck data files from files and/or directories.
/// Implements the DatasetSource trait from Layer 3.
pub struct DyckLoader {
    inputs: Vec<PathBuf>,
    cleaner: LineCleaner,
    keep_empty_lines: bool,
}

impl DyckLoader {
    /// Create a loader over one or more files or directories
    pub fn new<I, P>(inputs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            cleaner: LineCleaner::new(),
            keep_empty_lines: false,
        }
    }

    /// Keep lines that are blank after cleaning as rows with empty text
    pub fn keep_empty_lines(mut self, keep: bool) -> Self {
        self.keep_empty_lines = keep;
        self
    }

    /// Replace the default line cleaner
    pub fn with_cleaner(mut self, cleaner: LineCleaner) -> Self {
        self.cleaner = cleaner;
        self
    }

    /// Expand the inputs into the list of data files to read,
    /// each paired with its parsed name.
    pub fn resolve_files(&self) -> Result<Vec<(PathBuf, DyckFileName)>> {
        let mut files = Vec::new();

        for input in &self.inputs {
            if input.is_dir() {
                files.extend(scan_directory(input)?);
            } else if input.is_file() {
                let name = DyckFileName::from_path(input)
                    .with_context(|| format!("Cannot load '{}'", input.display()))?;
                files.push((input.clone(), name));
            } else {
                bail!("Input path '{}' does not exist", input.display());
            }
        }

        Ok(files)
    }

    /// Read one file and return its cleaned lines.
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Cannot read '{}'", path.display()))?;

        let mut lines = self.cleaner.clean_lines(&contents);
        if !self.keep_empty_lines {
            lines.retain(|line| !line.is_empty());
        }
        Ok(lines)
    }
}

impl DatasetSource for DyckLoader {
    fn load(&self, use_splits: bool) -> Result<DyckDataset> {
        let files = self.resolve_files()?;
        tracing::info!("Loading {} data files", files.len());

        let mut flat = TableBuilder::with_subset_column();
        let mut splits: BTreeMap<String, TableBuilder> = BTreeMap::new();

        for (path, name) in &files {
            let lines = self.read_lines(path)?;
            tracing::debug!(
                "Loaded: {} ({} rows, k={}, m={}, tr={}, subset={})",
                path.display(),
                lines.len(),
                name.k,
                name.m,
                name.tr,
                name.subset
            );

            let builder = if use_splits {
                splits
                    .entry(name.subset.clone())
                    .or_insert_with(TableBuilder::without_subset_column)
            } else {
                &mut flat
            };
            builder.append_file(name, lines);
        }

        let dataset = if use_splits {
            DyckDataset::Splits(
                splits
                    .into_iter()
                    .map(|(subset, builder)| (subset, builder.finish()))
                    .collect(),
            )
        } else {
            DyckDataset::Flat(flat.finish())
        };

        tracing::info!(
            "Loaded {} rows into {} table(s)",
            dataset.total_rows(),
            dataset.tables().len()
        );
        Ok(dataset)
    }
}

/// List the data files directly inside `dir`, sorted by path.
fn scan_directory(dir: &Path) -> Result<Vec<(PathBuf, DyckFileName)>> {
    let mut paths = Vec::new();

    for entry in fs::read_dir(dir)
        .with_context(|| format!("Cannot read directory '{}'", dir.display()))?
    {
        let path = entry
            .with_context(|| format!("Cannot read an entry of '{}'", dir.display()))?
            .path();
        if path.is_file() {
            paths.push(path);
        }
    }

    // read_dir order is platform-dependent
    paths.sort();

    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        match DyckFileName::from_path(&path) {
            Ok(name) => files.push((path, name)),
            Err(e) => {
                tracing::warn!("Skipping '{}': {}", path.display(), e);
            }
        }
    }

    Ok(files)
}
