//! Defines traits for turning caller-supplied words into sequences of trie symbols.
use std::borrow::Cow;
use std::hash::Hash;

/// A single symbol of the trie alphabet.
///
/// The alphabet is unrestricted: anything with equality and hashing can be a symbol.
/// `is_blank` decides which symbols count as whitespace when validating input.
pub trait Symbol: Clone + Hash + Eq {
    /// Returns `true` if this symbol is whitespace-like.
    fn is_blank(&self) -> bool {
        false
    }
}

impl Symbol for char {
    fn is_blank(&self) -> bool {
        self.is_whitespace()
    }
}

impl Symbol for u8 {
    fn is_blank(&self) -> bool {
        self.is_ascii_whitespace()
    }
}

/// A trait for values that can present themselves as a sequence of symbols.
pub trait Word {
    /// The symbol type this word is made of.
    type Symbol: Symbol;

    /// Returns the symbols of this word.
    /// `Cow` allows for borrowing if the word already is a symbol slice,
    /// or owning (e.g., via `Vec<char>`) if a conversion is necessary.
    fn symbols(&self) -> Cow<'_, [Self::Symbol]>;
}

impl Word for str {
    type Symbol = char;

    fn symbols(&self) -> Cow<'_, [char]> {
        Cow::Owned(self.chars().collect())
    }
}

impl Word for String {
    type Symbol = char;

    fn symbols(&self) -> Cow<'_, [char]> {
        self.as_str().symbols()
    }
}

impl<S: Symbol> Word for [S] {
    type Symbol = S;

    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self)
    }
}

impl<S: Symbol> Word for Vec<S> {
    type Symbol = S;

    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(self.as_slice())
    }
}

impl<S: Symbol, const N: usize> Word for [S; N] {
    type Symbol = S;

    fn symbols(&self) -> Cow<'_, [S]> {
        Cow::Borrowed(&self[..])
    }
}

impl<W: Word + ?Sized> Word for &W {
    type Symbol = W::Symbol;

    fn symbols(&self) -> Cow<'_, [W::Symbol]> {
        (**self).symbols()
    }
}

/// `None` is the absent word. It has no symbols, so every trie operation rejects it.
impl<W: Word> Word for Option<W> {
    type Symbol = W::Symbol;

    fn symbols(&self) -> Cow<'_, [W::Symbol]> {
        match self {
            Some(word) => word.symbols(),
            None => Cow::Borrowed(&[]),
        }
    }
}
