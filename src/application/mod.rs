// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Workflow coordination only: no parsing, no file formats,
// no printing. Each use case takes a serialisable config and
// drives the data, domain and infra layers.

/// Load (and optionally export) a Dyck dataset
pub mod load_use_case;

/// Check texts for balanced symbols
pub mod check_use_case;
