// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Cross-cutting persistence that doesn't belong to any one
// business layer:
//
//   export.rs — writes loaded datasets as JSON Lines and
//               saves/loads the LoadConfig used to build them
//               as JSON, so an export can be reproduced.

/// Dataset and config persistence
pub mod export;
