// ============================================================
// Layer 3 — Data File Name
// ============================================================
// Every data file carries its generation parameters in its
// name:
//
//   k128_m10_tr2000000.train
//   │    │   │         └── subset   ("train", "dev", "test", ...)
//   │    │   └──────────── tr       (training-set size token)
//   │    └──────────────── m        (maximum nesting depth)
//   └───────────────────── k        (number of bracket types)
//
// `tr` is matched lazily: it ends at the FIRST '.', so a name
// like "k1_m2_tra.b.c" gives tr = "a" and subset = "b.c".
// The k/m/tr prefixes match in any case ("K1_M2_TR3.train").

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// Fields parsed out of a data file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DyckFileName {
    pub k:      i64,
    pub m:      i64,
    pub tr:     String,
    pub subset: String,
}

fn file_name_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^k([-+]?\d+)_m([-+]?\d+)_tr(.+?)\.(.+)$")
            .expect("file name pattern is a valid regex")
    })
}

impl DyckFileName {
    /// Parse a bare file name such as `k128_m10_tr2000000.train`.
    pub fn parse(file_name: &str) -> Result<Self> {
        let caps = file_name_pattern().captures(file_name).ok_or_else(|| {
            anyhow!(
                "'{}' does not match the pattern k<int>_m<int>_tr<token>.<subset>",
                file_name
            )
        })?;

        let k = caps[1]
            .parse::<i64>()
            .with_context(|| format!("Invalid k value in '{}'", file_name))?;
        let m = caps[2]
            .parse::<i64>()
            .with_context(|| format!("Invalid m value in '{}'", file_name))?;

        Ok(Self {
            k,
            m,
            tr:     caps[3].to_string(),
            subset: caps[4].to_string(),
        })
    }

    /// Parse the base name of `path`; directories in the path are ignored.
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow!("'{}' has no UTF-8 file name", path.display()))?;

        Self::parse(name)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_parse_standard_name() {
        let f = DyckFileName::parse("k128_m10_tr2000000.train").unwrap();
        assert_eq!(f.k, 128);
        assert_eq!(f.m, 10);
        assert_eq!(f.tr, "2000000");
        assert_eq!(f.subset, "train");
    }

    #[test]
    fn test_tr_stops_at_first_dot() {
        let f = DyckFileName::parse("k1_m2_tra.b.c").unwrap();
        assert_eq!(f.tr, "a");
        assert_eq!(f.subset, "b.c");
    }

    #[test]
    fn test_prefixes_ignore_case() {
        let f = DyckFileName::parse("K1_M2_TR3.Train").unwrap();
        assert_eq!((f.k, f.m), (1, 2));
        assert_eq!(f.tr, "3");
        assert_eq!(f.subset, "Train");
    }

    #[test]
    fn test_signed_integers() {
        let f = DyckFileName::parse("k-1_m+3_tr5.dev").unwrap();
        assert_eq!(f.k, -1);
        assert_eq!(f.m, 3);
    }

    #[test]
    fn test_from_path_uses_base_name() {
        let p = PathBuf::from("data").join("k2_m4_tr100.test");
        let f = DyckFileName::from_path(&p).unwrap();
        assert_eq!(f.k, 2);
        assert_eq!(f.subset, "test");
    }

    #[test]
    fn test_rejects_bad_names() {
        for name in [
            "README.md",
            "k128_m10_tr2000000",
            "kx_m10_tr1.train",
            "k1_m2_tr.train",
            "k1_m2_tr1.",
            "xk1_m2_tr1.train",
        ] {
            assert!(DyckFileName::parse(name).is_err(), "accepted '{name}'");
        }
    }

    #[test]
    fn test_integer_overflow_is_error() {
        assert!(DyckFileName::parse("k99999999999999999999_m1_tr1.train").is_err());
    }
}
