// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything from Dyck data files on disk to in-memory tables.
//
//   k<int>_m<int>_tr<token>.<subset> files
//       │
//       ▼
//   DyckLoader      → finds files, parses their names
//       │
//       ▼
//   LineCleaner     → strips END markers and whitespace
//       │
//       ▼
//   TableBuilder    → appends one aligned row group per file
//       │
//       ▼
//   DyckDataset     → flat table, or one table per subset
//                     (tables implement Burn's Dataset trait)

/// Finds and reads Dyck data files
pub mod loader;

/// Cleans raw data-file lines into row text
pub mod preprocessor;

/// Column accumulator for one output table
pub mod builder;

/// Row, table and dataset types
pub mod dataset;
