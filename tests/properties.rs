use std::collections::HashSet;

use quickcheck::{quickcheck, Arbitrary, Gen};
use word_trie::{is_blank_word, ByteTrie, RemovalPolicy};

/// A word over a tiny alphabet, so generated words share prefixes often.
#[derive(Clone, Debug)]
struct SmallWord(Vec<u8>);

impl Arbitrary for SmallWord {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 6;
        let alphabet = [b'a', b'b', b'c', b' '];
        SmallWord((0..len).map(|_| *g.choose(&alphabet).unwrap()).collect())
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(SmallWord))
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(SmallWord),
    Remove(SmallWord),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(SmallWord::arbitrary(g))
        } else {
            Op::Remove(SmallWord::arbitrary(g))
        }
    }
}

fn policy(retain: bool) -> RemovalPolicy {
    if retain {
        RemovalPolicy::Retain
    } else {
        RemovalPolicy::Prune
    }
}

// Replays the operations against a HashSet model and checks every answer.
fn matches_model(ops: Vec<Op>, retain: bool) -> bool {
    let mut trie = ByteTrie::with_policy(policy(retain));
    let mut model: HashSet<Vec<u8>> = HashSet::new();

    for op in &ops {
        let ok = match op {
            Op::Insert(SmallWord(word)) => {
                let expected = !is_blank_word(word) && !model.contains(word);
                if expected {
                    model.insert(word.clone());
                }
                trie.insert(word) == expected
            }
            Op::Remove(SmallWord(word)) => {
                let expected = !is_blank_word(word) && model.remove(word);
                trie.remove(word) == expected
            }
        };
        if !ok || trie.word_count() != model.len() {
            return false;
        }
    }

    for op in &ops {
        let word = match op {
            Op::Insert(SmallWord(word)) | Op::Remove(SmallWord(word)) => word,
        };
        if trie.contains(word) != (!is_blank_word(word) && model.contains(word)) {
            return false;
        }

        let expected = if is_blank_word(word) {
            model.len()
        } else {
            model.iter().filter(|stored| stored.starts_with(word)).count()
        };
        if trie.count_with_prefix(word) != expected {
            return false;
        }
    }

    true
}

quickcheck! {
    fn prop_prune_tree_matches_set_model(ops: Vec<Op>) -> bool {
        matches_model(ops, false)
    }

    fn prop_retain_tree_matches_set_model(ops: Vec<Op>) -> bool {
        matches_model(ops, true)
    }

    fn prop_insert_then_duplicate(word: SmallWord) -> bool {
        let mut trie = ByteTrie::new();
        let first = trie.insert(&word.0);
        let second = trie.insert(&word.0);
        first == !is_blank_word(&word.0) && !second && trie.word_count() == first as usize
    }

    fn prop_removing_everything_prunes_to_root(words: Vec<SmallWord>) -> bool {
        let mut trie = ByteTrie::new();
        for word in &words {
            trie.insert(&word.0);
        }
        for word in &words {
            trie.remove(&word.0);
        }
        trie.is_empty() && trie.node_count() == 1
    }
}
