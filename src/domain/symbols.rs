// ============================================================
// Layer 3 — Symbol Mapping
// ============================================================
// The association between closing and opening symbols that
// the balance checker scans for.
//
// Stored closing → opening, because a closing symbol is the
// point where we have to ask "which opening do I expect?".
// The set of opening symbols is kept alongside so that the
// "is this an opening?" question is a single lookup too.
//
// Default pairs:  ( )   [ ]   { }
//
// The default is built fresh from a const table every time,
// so no caller can ever mutate a shared default.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// (opening, closing) pairs used when no mapping is supplied
pub const DEFAULT_PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Closing symbol → opening symbol.
///
/// Every closing symbol maps to exactly one opening symbol; adding a
/// second pair with the same closing symbol replaces the first.
///
/// A mapping where one character is both an opening and a closing
/// symbol is allowed. See [`crate::domain::balance::is_balanced_with`]
/// for the fixed order in which such a character is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolMapping {
    closing_to_opening: BTreeMap<char, char>,
    openings: BTreeSet<char>,
}

impl SymbolMapping {
    /// Build a mapping from `(open, close)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let closing_to_opening: BTreeMap<char, char> = pairs
            .into_iter()
            .map(|(open, close)| (close, open))
            .collect();

        // Derived after collecting, so a replaced pair leaves no stale opening
        let openings = closing_to_opening.values().copied().collect();

        Self { closing_to_opening, openings }
    }

    /// The opening symbol `close` must match, if `close` is a closing symbol.
    pub fn opening_for(&self, close: char) -> Option<char> {
        self.closing_to_opening.get(&close).copied()
    }

    pub fn is_opening(&self, ch: char) -> bool {
        self.openings.contains(&ch)
    }

    pub fn is_closing(&self, ch: char) -> bool {
        self.closing_to_opening.contains_key(&ch)
    }

    /// Iterate `(open, close)` pairs, ordered by closing symbol.
    pub fn pairs(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.closing_to_opening
            .iter()
            .map(|(&close, &open)| (open, close))
    }

    /// Number of pairs in the mapping
    pub fn len(&self) -> usize {
        self.closing_to_opening.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closing_to_opening.is_empty()
    }
}

impl Default for SymbolMapping {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_PAIRS)
    }
}

/// Parse a string of consecutive open/close characters,
/// e.g. "()[]{}" or "<>".
impl FromStr for SymbolMapping {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let chars: Vec<char> = s.chars().collect();

        if chars.is_empty() {
            bail!("Symbol pairs must not be empty");
        }
        if chars.len() % 2 != 0 {
            bail!(
                "Symbol pairs '{}' have an odd number of characters ({}); \
                 expected open/close pairs such as \"()[]{{}}\"",
                s,
                chars.len()
            );
        }

        Ok(Self::from_pairs(
            chars.chunks_exact(2).map(|pair| (pair[0], pair[1])),
        ))
    }
}

impl fmt::Display for SymbolMapping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (open, close) in self.pairs() {
            write!(f, "{open}{close}")?;
        }
        Ok(())
    }
}

impl TryFrom<String> for SymbolMapping {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<SymbolMapping> for String {
    fn from(mapping: SymbolMapping) -> Self {
        mapping.to_string()
    }
}
