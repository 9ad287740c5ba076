//! Internal node implementation for the prefix tree.
//!
//! This module contains the internal `TrieNode` structure. Every node is owned
//! exclusively by its parent's child map (or by the tree, for the root).
//!
//! Paths are as deep as the longest stored word, so nothing here recurses:
//! counting, cloning and dropping all walk the subtree with a heap stack.

use std::collections::HashMap;

use crate::word::Symbol;

/// Internal node type for the prefix tree.
///
/// This type is not exposed in the public API. It holds the children keyed by
/// symbol, whether a stored word ends here, and how many stored words pass
/// through this node.
pub(crate) struct TrieNode<S> {
    /// Child nodes indexed by the next symbol of the path
    pub children: HashMap<S, TrieNode<S>>,

    /// Whether a stored word ends exactly at this node
    pub terminal: bool,

    /// Number of stored words whose path includes this node, including words ending here
    pub through: usize,
}

impl<S: Symbol> TrieNode<S> {
    /// Creates a new empty node
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            terminal: false,
            through: 0,
        }
    }

    /// Returns whether this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns whether this node carries no information and can be unlinked
    pub fn is_dead(&self) -> bool {
        self.through == 0 && !self.terminal && self.is_leaf()
    }

    /// Returns the number of terminal nodes in this subtree
    #[cfg(test)]
    pub fn terminal_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            if node.terminal {
                count += 1;
            }
            stack.extend(node.children.values());
        }

        count
    }

    /// Returns the number of nodes in this subtree, this node included
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];

        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.values());
        }

        count
    }

    /// Copies the flags and count of this node, without its children
    fn shallow_clone(&self) -> Self {
        TrieNode {
            children: HashMap::new(),
            terminal: self.terminal,
            through: self.through,
        }
    }
}

impl<S: Symbol> Clone for TrieNode<S> {
    fn clone(&self) -> Self {
        // Copies are laid out in pre-order, so every parent sits before its children.
        let mut copies = vec![self.shallow_clone()];
        let mut links: Vec<(usize, S)> = Vec::new();
        let mut stack = vec![(0, self)];

        while let Some((index, node)) = stack.pop() {
            for (symbol, child) in &node.children {
                let child_index = copies.len();
                copies.push(child.shallow_clone());
                links.push((index, symbol.clone()));
                stack.push((child_index, child));
            }
        }

        // Attach from the back; the last copy is always a finished subtree.
        while let Some((parent, symbol)) = links.pop() {
            if let Some(child) = copies.pop() {
                copies[parent].children.insert(symbol, child);
            }
        }

        copies.swap_remove(0)
    }
}

impl<S> Drop for TrieNode<S> {
    fn drop(&mut self) {
        let mut stack: Vec<TrieNode<S>> = self.children.drain().map(|(_, child)| child).collect();

        while let Some(mut node) = stack.pop() {
            stack.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Builds a single path of `depth` nodes below a fresh root.
    fn chain(depth: usize) -> TrieNode<u8> {
        let mut root = TrieNode::new();
        let mut current = &mut root;
        for _ in 0..depth {
            current.through += 1;
            current = current.children.entry(b'a').or_insert_with(TrieNode::new);
        }
        current.through += 1;
        current.terminal = true;
        root
    }

    #[test]
    fn test_new_node() {
        let node: TrieNode<char> = TrieNode::new();

        assert!(node.children.is_empty());
        assert!(!node.terminal);
        assert_eq!(node.through, 0);
        assert!(node.is_leaf());
        assert!(node.is_dead());
    }

    #[test]
    fn test_terminal_and_node_count() {
        let mut root: TrieNode<char> = TrieNode::new();
        assert_eq!(root.terminal_count(), 0);
        assert_eq!(root.node_count(), 1);

        let mut a = TrieNode::new();
        a.terminal = true;
        a.through = 2;

        let mut b = TrieNode::new();
        b.terminal = true;
        b.through = 1;

        a.children.insert('b', b);
        root.children.insert('a', a);

        assert_eq!(root.terminal_count(), 2);
        assert_eq!(root.node_count(), 3);
        assert!(!root.is_leaf());
    }

    #[test]
    fn test_is_dead() {
        let mut node: TrieNode<u8> = TrieNode::new();
        node.terminal = true;
        assert!(!node.is_dead());

        node.terminal = false;
        node.through = 1;
        assert!(!node.is_dead());

        node.through = 0;
        node.children.insert(b'x', TrieNode::new());
        assert!(!node.is_dead());
    }

    #[test]
    fn test_clone_copies_whole_subtree() {
        let mut root: TrieNode<char> = TrieNode::new();
        let mut a = TrieNode::new();
        a.through = 2;
        let mut b = TrieNode::new();
        b.terminal = true;
        b.through = 1;
        let mut c = TrieNode::new();
        c.terminal = true;
        c.through = 1;
        a.children.insert('b', b);
        a.children.insert('c', c);
        root.children.insert('a', a);
        root.through = 2;

        let copy = root.clone();
        assert_eq!(copy.node_count(), 4);
        assert_eq!(copy.terminal_count(), 2);
        assert_eq!(copy.through, 2);

        let copied_a = &copy.children[&'a'];
        assert_eq!(copied_a.through, 2);
        assert!(copied_a.children[&'b'].terminal);
        assert!(copied_a.children[&'c'].terminal);
    }

    #[test]
    fn test_deep_chain_count_clone_and_drop() {
        let root = chain(200_000);
        assert_eq!(root.node_count(), 200_001);
        assert_eq!(root.terminal_count(), 1);

        let copy = root.clone();
        assert_eq!(copy.node_count(), 200_001);

        drop(root);
        drop(copy);
    }
}
