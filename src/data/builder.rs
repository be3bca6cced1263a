// ============================================================
// Layer 4 — Table Builder
// ============================================================
// Accumulates columns for one output table, one source file
// at a time. Each file contributes an aligned "row group":
//
//   file k2_m4_tr10.train with lines ["( )", "[ ]"]
//
//        k   m   tr    subset   text
//        2   4   10    train    ( )
//        2   4   10    train    [ ]
//
// The file-level fields are replicated once per line, so every
// column always has the same length.

use crate::data::dataset::DyckTable;
use crate::domain::file_name::DyckFileName;

pub struct TableBuilder {
    table: DyckTable,
}

impl TableBuilder {
    /// Builder for a table with a `subset` column (flat datasets)
    pub fn with_subset_column() -> Self {
        Self {
            table: DyckTable { subset: Some(Vec::new()), ..DyckTable::default() },
        }
    }

    /// Builder for a table without a `subset` column (one split)
    pub fn without_subset_column() -> Self {
        Self { table: DyckTable::default() }
    }

    /// Append the row group of one source file.
    pub fn append_file(&mut self, name: &DyckFileName, lines: Vec<String>) {
        let n = lines.len();
        let t = &mut self.table;

        t.k.extend(std::iter::repeat(name.k).take(n));
        t.m.extend(std::iter::repeat(name.m).take(n));
        t.tr.extend(std::iter::repeat(name.tr.clone()).take(n));
        if let Some(subset) = t.subset.as_mut() {
            subset.extend(std::iter::repeat(name.subset.clone()).take(n));
        }
        t.text.extend(lines);

        debug_assert_eq!(t.k.len(), t.text.len());
    }

    /// Rows appended so far
    pub fn row_count(&self) -> usize {
        self.table.text.len()
    }

    pub fn finish(self) -> DyckTable {
        self.table
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn name(k: i64, subset: &str) -> DyckFileName {
        DyckFileName { k, m: 3, tr: "50".into(), subset: subset.into() }
    }

    #[test]
    fn test_row_groups_are_aligned() {
        let mut b = TableBuilder::with_subset_column();
        b.append_file(&name(2, "train"), vec!["( )".into(), "[ ]".into()]);
        b.append_file(&name(4, "test"), vec!["{ }".into()]);
        assert_eq!(b.row_count(), 3);

        let t = b.finish();
        assert_eq!(t.k(), &[2, 2, 4]);
        assert_eq!(t.m(), &[3, 3, 3]);
        assert_eq!(t.tr(), &["50", "50", "50"]);
        assert_eq!(t.subset().unwrap(), &["train", "train", "test"]);
        assert_eq!(t.text(), &["( )", "[ ]", "{ }"]);
    }

    #[test]
    fn test_without_subset_column() {
        let mut b = TableBuilder::without_subset_column();
        b.append_file(&name(2, "dev"), vec!["( )".into()]);
        let t = b.finish();
        assert!(t.subset().is_none());
        assert_eq!(t.k(), &[2]);
    }

    #[test]
    fn test_empty_file_adds_nothing() {
        let mut b = TableBuilder::with_subset_column();
        b.append_file(&name(2, "train"), Vec::new());
        let t = b.finish();
        assert!(t.text().is_empty());
        assert_eq!(t.subset().unwrap().len(), 0);
    }
}
