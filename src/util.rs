use crate::word::Symbol;

/// Returns `true` if a word should be rejected as input.
///
/// A word is rejected when it has no symbols at all, or when every symbol is blank.
/// Words that merely contain blank symbols are accepted.
pub fn is_blank_word<S: Symbol>(symbols: &[S]) -> bool {
    symbols.iter().all(Symbol::is_blank)
}
