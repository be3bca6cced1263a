use burn::data::dataset::Dataset;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Name given to the single table of a flat dataset
pub const FLAT_TABLE_NAME: &str = "all";

/// One dataset row. `subset` is only present in flat datasets;
/// in split datasets the subset is the table's name instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DyckRow {
    pub k:    i64,
    pub m:    i64,
    pub tr:   String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subset: Option<String>,
    pub text: String,
}

/// Column-oriented table. All columns have the same length;
/// `TableBuilder` is the only way to grow one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DyckTable {
    pub(crate) k:      Vec<i64>,
    pub(crate) m:      Vec<i64>,
    pub(crate) tr:     Vec<String>,
    pub(crate) subset: Option<Vec<String>>,
    pub(crate) text:   Vec<String>,
}

impl DyckTable {
    pub fn k(&self) -> &[i64] { &self.k }

    pub fn m(&self) -> &[i64] { &self.m }

    pub fn tr(&self) -> &[String] { &self.tr }

    /// `None` when the table has no subset column
    pub fn subset(&self) -> Option<&[String]> { self.subset.as_deref() }

    pub fn text(&self) -> &[String] { &self.text }

    /// Column names in order, as they appear in exported rows
    pub fn column_names(&self) -> Vec<&'static str> {
        if self.subset.is_some() {
            vec!["k", "m", "tr", "subset", "text"]
        } else {
            vec!["k", "m", "tr", "text"]
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = DyckRow> + '_ {
        (0..self.text.len()).filter_map(move |i| self.get(i))
    }
}

impl Dataset<DyckRow> for DyckTable {
    fn get(&self, index: usize) -> Option<DyckRow> {
        Some(DyckRow {
            k:      *self.k.get(index)?,
            m:      *self.m.get(index)?,
            tr:     self.tr.get(index)?.clone(),
            subset: match &self.subset {
                Some(col) => Some(col.get(index)?.clone()),
                None => None,
            },
            text:   self.text.get(index)?.clone(),
        })
    }

    fn len(&self) -> usize {
        self.text.len()
    }
}

/// The loader's output: one flat table, or one table per subset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DyckDataset {
    Flat(DyckTable),
    Splits(BTreeMap<String, DyckTable>),
}

impl DyckDataset {
    /// (name, table) pairs; the flat table is named "all"
    pub fn tables(&self) -> Vec<(&str, &DyckTable)> {
        match self {
            DyckDataset::Flat(table) => vec![(FLAT_TABLE_NAME, table)],
            DyckDataset::Splits(splits) => splits
                .iter()
                .map(|(name, table)| (name.as_str(), table))
                .collect(),
        }
    }

    pub fn total_rows(&self) -> usize {
        self.tables().iter().map(|(_, t)| t.len()).sum()
    }

    /// Every "text" value across all tables
    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables()
            .into_iter()
            .flat_map(|(_, t)| t.text().iter().map(String::as_str))
    }

    /// Look up one split by subset name (always `None` for flat datasets)
    pub fn split(&self, subset: &str) -> Option<&DyckTable> {
        match self {
            DyckDataset::Flat(_) => None,
            DyckDataset::Splits(splits) => splits.get(subset),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn table(with_subset: bool) -> DyckTable {
        DyckTable {
            k:      vec![2, 2],
            m:      vec![4, 4],
            tr:     vec!["10".into(), "10".into()],
            subset: with_subset.then(|| vec!["train".into(), "train".into()]),
            text:   vec!["( )".into(), "[ ]".into()],
        }
    }

    #[test]
    fn test_get_row() {
        let t = table(true);
        let row = t.get(1).unwrap();
        assert_eq!(row.text, "[ ]");
        assert_eq!(row.subset.as_deref(), Some("train"));
        assert!(t.get(2).is_none());
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn test_row_without_subset_omits_field() {
        let row = table(false).get(0).unwrap();
        let json = serde_json::to_string(&row).unwrap();
        assert!(!json.contains("subset"));
        assert_eq!(json, r#"{"k":2,"m":4,"tr":"10","text":"( )"}"#);
    }

    #[test]
    fn test_column_names() {
        assert_eq!(table(true).column_names(), vec!["k", "m", "tr", "subset", "text"]);
        assert_eq!(table(false).column_names(), vec!["k", "m", "tr", "text"]);
    }

    #[test]
    fn test_dataset_tables_and_texts() {
        let mut splits = BTreeMap::new();
        splits.insert("test".to_string(), table(false));
        splits.insert("train".to_string(), table(false));
        let ds = DyckDataset::Splits(splits);

        assert_eq!(ds.total_rows(), 4);
        let names: Vec<&str> = ds.tables().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["test", "train"]);
        assert_eq!(ds.texts().count(), 4);
        assert!(ds.split("train").is_some());
        assert!(ds.split("dev").is_none());

        let flat = DyckDataset::Flat(table(true));
        assert_eq!(flat.tables()[0].0, FLAT_TABLE_NAME);
        assert!(flat.split("train").is_none());
    }
}
