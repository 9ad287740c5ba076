//! The main prefix tree implementation.
//!
//! This module contains the `PrefixTree` type, which provides the primary API for
//! storing words and answering membership and prefix-count queries.

use std::fmt;
use std::iter::FromIterator;

use log::{debug, trace};

use crate::node::TrieNode;
use crate::util::is_blank_word;
use crate::word::{Symbol, Word};
use crate::{Error, Result};

/// What `remove` does with nodes that no longer lead to any stored word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalPolicy {
    /// Unlink dead nodes bottom-up from the removal point. Memory stays bounded
    /// by the words currently stored.
    Prune,
    /// Leave dead nodes allocated. Later inserts along the same path reuse them.
    Retain,
}

impl Default for RemovalPolicy {
    fn default() -> Self {
        RemovalPolicy::Prune
    }
}

/// A mutable prefix tree over words made of `S` symbols.
///
/// Every node knows how many stored words pass through it, so counting the
/// words that start with a prefix costs one walk down that prefix.
///
/// Absent (`None`), empty and whitespace-only words are never stored: `insert`,
/// `contains` and `remove` return `false` for them, and `count_with_prefix`
/// treats them as the empty prefix that matches every word.
///
/// # Examples
///
/// ```
/// use word_trie::PrefixTree;
///
/// let mut trie = PrefixTree::new();
/// assert!(trie.insert("app"));
/// assert!(trie.insert("apple"));
/// assert!(!trie.insert("app"));
///
/// assert!(trie.contains("apple"));
/// assert_eq!(trie.count_with_prefix("ap"), 2);
/// assert_eq!(trie.word_count(), 2);
/// ```
#[derive(Clone)]
pub struct PrefixTree<S: Symbol = char> {
    /// The root node, standing for the empty prefix
    root: TrieNode<S>,

    /// The number of words stored in the tree
    word_count: usize,

    policy: RemovalPolicy,
}

/// A prefix tree over the `char`s of string words.
pub type CharTrie = PrefixTree<char>;

/// A prefix tree over raw bytes.
pub type ByteTrie = PrefixTree<u8>;

impl<S: Symbol> PrefixTree<S> {
    /// Creates a new, empty tree that prunes dead branches on removal.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::CharTrie;
    ///
    /// let trie = CharTrie::new();
    /// assert!(trie.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_policy(RemovalPolicy::default())
    }

    /// Creates a new, empty tree with the given removal policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::{CharTrie, RemovalPolicy};
    ///
    /// let mut trie = CharTrie::with_policy(RemovalPolicy::Retain);
    /// trie.insert("abc");
    /// trie.remove("abc");
    ///
    /// // The dead path stays allocated, but no word is stored
    /// assert_eq!(trie.node_count(), 4);
    /// assert_eq!(trie.count_with_prefix("a"), 0);
    /// ```
    pub fn with_policy(policy: RemovalPolicy) -> Self {
        PrefixTree {
            root: TrieNode::new(),
            word_count: 0,
            policy,
        }
    }

    /// Returns the removal policy this tree was created with.
    pub fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// Returns the number of words stored in the tree.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Returns the number of words stored in the tree.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// Returns `true` if the tree stores no words.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Returns the number of allocated nodes, the root included.
    ///
    /// With `RemovalPolicy::Prune` this is exactly one more than the number of
    /// distinct non-empty prefixes of the stored words.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Removes every word and node. The removal policy is kept.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
        self.word_count = 0;
    }

    /// Adds a word, returning `true` if it was not stored before.
    ///
    /// Returns `false` without touching the tree for a duplicate, or for an
    /// absent, empty or whitespace-only word.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::PrefixTree;
    ///
    /// let mut trie = PrefixTree::new();
    /// assert!(trie.insert("sun"));
    /// assert!(!trie.insert("sun"));
    /// assert!(!trie.insert("   "));
    /// assert!(!trie.insert(&None::<&str>));
    /// assert_eq!(trie.word_count(), 1);
    /// ```
    pub fn insert<W>(&mut self, word: &W) -> bool
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.try_insert(word).is_ok()
    }

    /// Adds a word, reporting why it was not added.
    ///
    /// Fails with `Error::InvalidWord` for an absent, empty or whitespace-only
    /// word and with `Error::AlreadyPresent` for a duplicate.
    pub fn try_insert<W>(&mut self, word: &W) -> Result<()>
    where
        W: Word<Symbol = S> + ?Sized,
    {
        let symbols = word.symbols();
        if is_blank_word(&symbols) {
            debug!("rejected blank word of {} symbols on insert", symbols.len());
            return Err(Error::InvalidWord);
        }

        if self.find_node(&symbols).map_or(false, |node| node.terminal) {
            return Err(Error::AlreadyPresent);
        }

        // The word is new, so every node on its path gains one word.
        let mut current = &mut self.root;
        current.through += 1;
        for symbol in symbols.iter() {
            current = current
                .children
                .entry(symbol.clone())
                .or_insert_with(TrieNode::new);
            current.through += 1;
        }
        current.terminal = true;

        self.word_count += 1;
        trace!("inserted word of {} symbols, {} stored", symbols.len(), self.word_count);
        Ok(())
    }

    /// Returns `true` if the word is stored in the tree.
    ///
    /// A stored word's proper prefix is not itself contained unless it was
    /// inserted too.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::PrefixTree;
    ///
    /// let mut trie = PrefixTree::new();
    /// trie.insert("apple");
    ///
    /// assert!(trie.contains("apple"));
    /// assert!(!trie.contains("app"));
    /// assert!(!trie.contains(""));
    /// ```
    pub fn contains<W>(&self, word: &W) -> bool
    where
        W: Word<Symbol = S> + ?Sized,
    {
        let symbols = word.symbols();
        if is_blank_word(&symbols) {
            return false;
        }

        self.find_node(&symbols).map_or(false, |node| node.terminal)
    }

    /// Removes a word, returning `true` if it was stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::PrefixTree;
    ///
    /// let mut trie = PrefixTree::new();
    /// trie.insert("he");
    /// trie.insert("her");
    ///
    /// assert!(trie.remove("he"));
    /// assert!(!trie.remove("he"));
    /// assert!(trie.contains("her"));
    /// assert_eq!(trie.count_with_prefix("he"), 1);
    /// ```
    pub fn remove<W>(&mut self, word: &W) -> bool
    where
        W: Word<Symbol = S> + ?Sized,
    {
        self.try_remove(word).is_ok()
    }

    /// Removes a word, reporting why nothing was removed.
    ///
    /// Fails with `Error::InvalidWord` for an absent, empty or whitespace-only
    /// word and with `Error::NotPresent` when the word is not stored, including
    /// when it is only a prefix of stored words.
    pub fn try_remove<W>(&mut self, word: &W) -> Result<()>
    where
        W: Word<Symbol = S> + ?Sized,
    {
        let symbols = word.symbols();
        if is_blank_word(&symbols) {
            debug!("rejected blank word of {} symbols on remove", symbols.len());
            return Err(Error::InvalidWord);
        }

        if !self.find_node(&symbols).map_or(false, |node| node.terminal) {
            return Err(Error::NotPresent);
        }

        let pruned = self.unlink_path(&symbols);
        self.word_count -= 1;
        trace!("removed word of {} symbols, {} stored", symbols.len(), self.word_count);
        if pruned > 0 {
            debug!("pruned {} dead nodes", pruned);
        }
        Ok(())
    }

    // Decrements counts along a path that ends at a terminal node. Under `Prune`
    // the first node left with no words is cut from its parent together with the
    // rest of the path. Returns the number of nodes cut.
    fn unlink_path(&mut self, symbols: &[S]) -> usize {
        let prune = self.policy == RemovalPolicy::Prune;
        let mut current = &mut self.root;
        current.through -= 1;

        for symbol in symbols {
            let emptied = match current.children.get_mut(symbol) {
                Some(child) => {
                    child.through -= 1;
                    child.through == 0
                }
                None => return 0,
            };

            if emptied && prune {
                return current
                    .children
                    .remove(symbol)
                    .map_or(0, |cut| cut.node_count());
            }

            current = match current.children.get_mut(symbol) {
                Some(child) => child,
                None => return 0,
            };
        }

        current.terminal = false;
        0
    }

    /// Returns how many stored words start with `prefix`.
    ///
    /// A stored word counts as starting with itself. An absent, empty or
    /// whitespace-only prefix matches every word.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_trie::PrefixTree;
    ///
    /// let trie: PrefixTree = vec!["app", "apple", "application"].into_iter().collect();
    ///
    /// assert_eq!(trie.count_with_prefix("app"), 3);
    /// assert_eq!(trie.count_with_prefix("appl"), 2);
    /// assert_eq!(trie.count_with_prefix("x"), 0);
    /// assert_eq!(trie.count_with_prefix(""), 3);
    /// ```
    pub fn count_with_prefix<W>(&self, prefix: &W) -> usize
    where
        W: Word<Symbol = S> + ?Sized,
    {
        let symbols = prefix.symbols();
        if is_blank_word(&symbols) {
            return self.word_count;
        }

        self.find_node(&symbols).map_or(0, |node| node.through)
    }

    // Walks the path for `symbols`, returning the landing node if every step exists.
    fn find_node(&self, symbols: &[S]) -> Option<&TrieNode<S>> {
        let mut current = &self.root;

        for symbol in symbols {
            current = current.children.get(symbol)?;
        }

        Some(current)
    }
}

impl<S: Symbol> fmt::Debug for PrefixTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixTree")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count())
            .field("policy", &self.policy)
            .finish()
    }
}

impl<S: Symbol> Default for PrefixTree<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, W: Word<Symbol = S>> Extend<W> for PrefixTree<S> {
    fn extend<I: IntoIterator<Item = W>>(&mut self, iter: I) {
        for word in iter {
            self.insert(&word);
        }
    }
}

impl<S: Symbol, W: Word<Symbol = S>> FromIterator<W> for PrefixTree<S> {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        let mut trie = PrefixTree::new();
        trie.extend(iter);
        trie
    }
}
