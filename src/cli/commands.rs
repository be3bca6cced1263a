// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the two subcommands, `load` and `check`, and their
// flags. Each Args struct converts into the matching
// application-layer config, so Layer 2 never sees clap types.

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::check_use_case::CheckConfig;
use crate::application::load_use_case::LoadConfig;
use crate::domain::symbols::SymbolMapping;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load Dyck data files into a dataset and optionally export it
    Load(LoadArgs),

    /// Check that texts have balanced opening/closing symbols
    Check(CheckArgs),
}

#[derive(Args, Debug)]
pub struct LoadArgs {
    /// Data files or directories of files named k<int>_m<int>_tr<token>.<subset>
    #[arg(long = "input", short = 'i', required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Produce one table per subset instead of a flat table
    #[arg(long)]
    pub use_splits: bool,

    /// Keep lines that are empty after removing the END marker
    #[arg(long = "keep-empty")]
    pub keep_empty_lines: bool,

    /// Directory to export JSON Lines files into
    #[arg(long = "out", short = 'o')]
    pub out_dir: Option<PathBuf>,
}

impl From<LoadArgs> for LoadConfig {
    fn from(a: LoadArgs) -> Self {
        LoadConfig {
            inputs:           a.inputs,
            use_splits:       a.use_splits,
            keep_empty_lines: a.keep_empty_lines,
            out_dir:          a.out_dir,
        }
    }
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Data files or directories whose rows should be checked
    #[arg(
        long = "input",
        short = 'i',
        num_args = 1..,
        required_unless_present = "text",
        conflicts_with = "text"
    )]
    pub inputs: Vec<PathBuf>,

    /// A single text to check instead of data files
    #[arg(long)]
    pub text: Option<String>,

    /// Opening/closing symbol pairs, written as consecutive characters
    #[arg(long, default_value = "()[]{}")]
    pub pairs: SymbolMapping,

    /// Keep lines that are empty after removing the END marker
    #[arg(long = "keep-empty")]
    pub keep_empty_lines: bool,
}

impl From<CheckArgs> for CheckConfig {
    fn from(a: CheckArgs) -> Self {
        CheckConfig {
            inputs:           a.inputs,
            text:             a.text,
            pairs:            a.pairs,
            keep_empty_lines: a.keep_empty_lines,
        }
    }
}
