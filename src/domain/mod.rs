// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Pure Rust types and functions, no file I/O:
//
//   symbols   — which characters open and close
//   balance   — the stack-based balance check
//   file_name — the k/m/tr/subset fields encoded in file names
//   traits    — abstractions the application layer depends on

/// Closing → opening symbol mapping
pub mod symbols;

/// Stack-based balanced-symbol checker
pub mod balance;

/// Parsing of `k<int>_m<int>_tr<token>.<subset>` file names
pub mod file_name;

/// Core abstractions (traits) that other layers implement
pub mod traits;
