//! Utilities for Dyck-language ("balanced bracket") datasets:
//! a loader for `k<int>_m<int>_tr<token>.<subset>` data files and a
//! stack-based balanced-symbol checker.
//!
//! ```
//! use dyck_data::is_balanced;
//!
//! assert!(is_balanced("()[]{}"));
//! assert!(!is_balanced("([)]"));
//! ```

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod infra;

pub use domain::balance::{is_balanced, is_balanced_with};
pub use domain::symbols::SymbolMapping;
