// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The application layer loads datasets through this trait
// instead of a concrete loader, so a different source (an
// in-memory fixture, an archive) can be dropped in without
// touching the use cases.

use anyhow::Result;
use crate::data::dataset::DyckDataset;

// ─── DatasetSource ────────────────────────────────────────────────────────────
/// Any component that can produce a Dyck dataset.
///
/// Implementations:
///   - DyckLoader → reads `k<int>_m<int>_tr<token>.<subset>` files
pub trait DatasetSource {
    /// Load the whole dataset, either flat or split by subset.
    fn load(&self, use_splits: bool) -> Result<DyckDataset>;
}
