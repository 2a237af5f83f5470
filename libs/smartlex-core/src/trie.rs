//! Prefix index (trie) for bounded autocomplete.
//!
//! Nodes live in an arena (`Vec`) and address each other by index, with the
//! root at index 0. This keeps ownership flat — no node cycles, and the built
//! index can be traversed concurrently by readers without locking.

use std::collections::BTreeMap;

use crate::types::normalize_word;

/// Maximum number of completions returned for a prefix query.
pub const MAX_COMPLETIONS: usize = 5;

/// Index of the arena root.
const ROOT: usize = 0;

#[derive(Debug, Default)]
struct Node {
    /// Child nodes by next character. Ordered so traversal is deterministic.
    children: BTreeMap<char, usize>,
    /// Whether the path from the root to this node spells a complete word.
    terminal: bool,
}

/// Character-path tree over a set of words, answering prefix-completion
/// queries in time proportional to the prefix length plus result size.
#[derive(Debug)]
pub struct PrefixIndex {
    nodes: Vec<Node>,
}

impl PrefixIndex {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    /// Insert a word, creating one node per character along its path.
    ///
    /// Input is normalized (trimmed, lower-cased) first. Inserting the same
    /// word twice leaves the structure unchanged.
    pub fn insert(&mut self, word: &str) {
        let mut node = ROOT;
        for c in normalize_word(word).chars() {
            node = match self.nodes[node].children.get(&c) {
                Some(&child) => child,
                None => {
                    let child = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[node].children.insert(c, child);
                    child
                }
            };
        }
        self.nodes[node].terminal = true;
    }

    /// Whether the exact (normalized) word was inserted.
    pub fn contains(&self, word: &str) -> bool {
        self.walk(&normalize_word(word))
            .map(|node| self.nodes[node].terminal)
            .unwrap_or(false)
    }

    /// Up to [`MAX_COMPLETIONS`] inserted words starting with `prefix`.
    ///
    /// A prefix with no matching path yields an empty vec — "no match" is a
    /// normal outcome, not an error, and the empty prefix matches everything.
    /// Results come out in lexicographic order because child maps are
    /// ordered; that order is an implementation detail, not an API guarantee.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let prefix = normalize_word(prefix);
        let Some(node) = self.walk(&prefix) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut path = prefix;
        self.collect(node, &mut path, &mut out);
        out
    }

    /// Follow `prefix` character by character; `None` if the path breaks off.
    fn walk(&self, prefix: &str) -> Option<usize> {
        let mut node = ROOT;
        for c in prefix.chars() {
            node = *self.nodes[node].children.get(&c)?;
        }
        Some(node)
    }

    /// Depth-first collection of terminal words under `node`, stopping once
    /// `out` holds [`MAX_COMPLETIONS`] entries.
    fn collect(&self, node: usize, path: &mut String, out: &mut Vec<String>) {
        if out.len() >= MAX_COMPLETIONS {
            return;
        }
        if self.nodes[node].terminal {
            out.push(path.clone());
        }
        for (&c, &child) in &self.nodes[node].children {
            path.push(c);
            self.collect(child, path, out);
            path.pop();
        }
    }
}

impl Default for PrefixIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn index_of(words: &[&str]) -> PrefixIndex {
        let mut index = PrefixIndex::new();
        for w in words {
            index.insert(w);
        }
        index
    }

    #[test]
    fn completions_match_prefix() {
        let index = index_of(&["apple", "applet", "banana"]);
        assert_eq!(index.completions("app"), vec!["apple", "applet"]);
    }

    #[test]
    fn unknown_prefix_is_empty_not_error() {
        let index = index_of(&["apple"]);
        assert!(index.completions("zeb").is_empty());
        assert!(index.completions("apples").is_empty());
    }

    #[test]
    fn empty_prefix_matches_from_root() {
        let index = index_of(&["cat", "dog"]);
        assert_eq!(index.completions(""), vec!["cat", "dog"]);
    }

    #[test]
    fn results_capped_at_five() {
        let index = index_of(&["aa", "ab", "ac", "ad", "ae", "af", "ag"]);
        let out = index.completions("a");
        assert_eq!(out.len(), MAX_COMPLETIONS);
        assert_eq!(out, vec!["aa", "ab", "ac", "ad", "ae"]);
    }

    #[test]
    fn prefix_itself_is_a_completion() {
        let index = index_of(&["app", "apple"]);
        assert_eq!(index.completions("app"), vec!["app", "apple"]);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut index = index_of(&["apple", "apricot"]);
        let before = index.completions("ap");
        index.insert("apple");
        index.insert("apple");
        assert_eq!(index.completions("ap"), before);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let index = index_of(&["Apple"]);
        assert!(index.contains("APPLE"));
        assert_eq!(index.completions("aP"), vec!["apple"]);
    }

    #[test]
    fn contains_requires_full_word() {
        let index = index_of(&["apple"]);
        assert!(index.contains("apple"));
        assert!(!index.contains("app"));
        assert!(!index.contains("apples"));
    }
}
