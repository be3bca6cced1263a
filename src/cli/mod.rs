// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Parses arguments with clap, hands off to Layer 2, prints
// results. No loading or checking logic lives here.
//
//   1. `load`  — load data files, summarise, optionally export
//   2. `check` — validate bracket balance of text or dataset rows

pub mod commands;

use anyhow::{bail, Result};
use clap::Parser;
use commands::{CheckArgs, Commands, LoadArgs};

#[derive(Parser, Debug)]
#[command(
    name = "dyck-data",
    version,
    about = "Load Dyck-language datasets and check bracket balance."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Load(args)  => run_load(args),
            Commands::Check(args) => run_check(args),
        }
    }
}

fn run_load(args: LoadArgs) -> Result<()> {
    use crate::application::load_use_case::LoadUseCase;

    tracing::info!("Loading Dyck data from {:?}", args.inputs);

    let dataset = LoadUseCase::new(args.into()).execute()?;

    for (name, table) in dataset.tables() {
        println!("{name}: {} rows", table.text().len());
    }
    println!("Total: {} rows", dataset.total_rows());
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<()> {
    use crate::application::check_use_case::CheckUseCase;

    let report = CheckUseCase::new(args.into()).execute()?;

    println!(
        "Checked {}: {} balanced, {} unbalanced",
        report.checked,
        report.balanced,
        report.unbalanced_rows.len()
    );

    if !report.all_balanced() {
        bail!("Unbalanced rows: {:?}", report.unbalanced_rows);
    }
    Ok(())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_check_text() {
        let cli = Cli::try_parse_from(["dyck-data", "check", "--text", "([])"]).unwrap();
        let Commands::Check(args) = cli.command else { panic!("expected check") };
        assert_eq!(args.text.as_deref(), Some("([])"));
        assert_eq!(args.pairs.to_string(), "()[]{}");
        assert!(args.inputs.is_empty());
    }

    #[test]
    fn test_check_requires_input_or_text() {
        assert!(Cli::try_parse_from(["dyck-data", "check"]).is_err());
    }

    #[test]
    fn test_check_rejects_odd_pairs() {
        let res = Cli::try_parse_from(["dyck-data", "check", "--text", "x", "--pairs", "(()"]);
        assert!(res.is_err());
    }

    #[test]
    fn test_parse_load() {
        let cli = Cli::try_parse_from([
            "dyck-data", "load", "-i", "a", "b", "--use-splits", "--out", "out",
        ])
        .unwrap();
        let Commands::Load(args) = cli.command else { panic!("expected load") };
        assert_eq!(args.inputs.len(), 2);
        assert!(args.use_splits);
        assert!(!args.keep_empty_lines);
        assert_eq!(args.out_dir.as_deref(), Some(std::path::Path::new("out")));
    }

    #[test]
    fn test_run_check_unbalanced_is_error() {
        let cli = Cli::try_parse_from(["dyck-data", "check", "--text", "([)]"]).unwrap();
        assert!(cli.run().is_err());
    }
}
