//! # Word Trie
//!
//! A mutable prefix tree that stores words and counts them by prefix.
//!
//! Each node of the tree tracks how many stored words pass through it, so the number
//! of words starting with a prefix is answered by a single walk down that prefix.
//!
//! ## Features
//!
//! - **Exact bookkeeping**: total word count and per-node through-counts stay
//!   consistent across every insert and remove
//! - **Generic alphabet**: words are sequences of any `Symbol` (`char` and `u8`
//!   out of the box)
//! - **Sentinel API**: absent, empty and whitespace-only words are rejected with
//!   `false`/`0`, never with a panic; `try_*` methods report the reason
//! - **Removal policy**: prune dead branches eagerly or keep them allocated
//!
//! ## Example
//!
//! ```rust
//! use word_trie::PrefixTree;
//!
//! let mut trie = PrefixTree::new();
//! trie.insert("app");
//! trie.insert("apple");
//! trie.insert("application");
//!
//! assert_eq!(trie.count_with_prefix("app"), 3);
//! assert_eq!(trie.count_with_prefix("appl"), 2);
//!
//! assert!(trie.remove("apple"));
//! assert_eq!(trie.word_count(), 2);
//! ```
//!
//! The crate also ships a small arithmetic expression tree in [`expr`].

pub mod expr;
mod node;
mod trie;
mod util;
mod word;

// Re-export public types
pub use crate::expr::{Expr, Operator};
pub use crate::trie::{ByteTrie, CharTrie, PrefixTree, RemovalPolicy};
pub use crate::util::is_blank_word;
pub use crate::word::{Symbol, Word};

/// Errors that can occur in trie and expression operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Word is absent, empty or whitespace-only
    #[error("word is absent, empty or whitespace-only")]
    InvalidWord,
    /// Word is already stored
    #[error("word is already present")]
    AlreadyPresent,
    /// Word is not stored
    #[error("word is not present")]
    NotPresent,
    /// Right operand of a division evaluated to zero
    #[error("division by zero")]
    DivisionByZero,
    /// Operator symbol is not one of `+ - * /`
    #[error("unsupported operator '{0}', expected one of + - * /")]
    UnsupportedOperator(char),
    /// Result does not fit in an `i32`
    #[error("arithmetic overflow")]
    Overflow,
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
