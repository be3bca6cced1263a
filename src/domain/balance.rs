// ============================================================
// Layer 3 — Balance Checker
// ============================================================
// Decides whether every closing symbol in a text matches the
// most recent unmatched opening symbol, and whether nothing is
// left open at the end.
//
// Classic stack scan, one pass, left to right:
//
//   "( { a } ) [ ]"
//     push (      stack: (
//     push {      stack: ( {
//     a           ignored
//     } pops {    stack: (
//     ) pops (    stack: (empty)
//     push [      stack: [
//     ] pops [    stack: (empty)  → balanced
//
// The stack lives only for the duration of one call.

use crate::domain::symbols::SymbolMapping;

/// Check `text` against the default `()[]{}` mapping.
///
/// ```
/// use dyck_data::domain::balance::is_balanced;
///
/// assert!(is_balanced("({abc}) 123 []"));
/// assert!(!is_balanced("({abc}) 123 [] (}"));
/// ```
pub fn is_balanced(text: &str) -> bool {
    is_balanced_with(text, &SymbolMapping::default())
}

/// Check `text` against a caller-supplied mapping.
///
/// Each character is evaluated in a fixed order: first "is it an
/// opening symbol?" (push), then "is it a closing symbol?" (pop and
/// compare). A character that is both goes through both steps, so with
/// the single pair `|`/`|` every `|` is pushed and immediately matched.
///
/// A closing symbol met on an empty stack is a mismatch. Characters that
/// are neither opening nor closing symbols are ignored.
pub fn is_balanced_with(text: &str, symbols: &SymbolMapping) -> bool {
    let mut stack: Vec<char> = Vec::new();

    for ch in text.chars() {
        if symbols.is_opening(ch) {
            stack.push(ch);
        }

        if let Some(expected) = symbols.opening_for(ch) {
            // pop() on an empty stack gives None, which never equals Some(_)
            if stack.pop() != Some(expected) {
                return false;
            }
        }
    }

    stack.is_empty()
}
