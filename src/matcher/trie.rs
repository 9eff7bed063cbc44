use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use super::char_trie::CharTrie;
use crate::cache::ParseCache;
use crate::error::Result;
use crate::parser::parse_url;
use crate::types::{Label, ParsedDomain};

/// One level of the label trie.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Exact transitions to the next, more specific label.
    children: HashMap<Label, TrieNode>,
    /// Smallest key length in `children`; 0 while empty. A candidate label
    /// shorter than this can neither exact-match a child nor complete the
    /// usual suffix walk, so it is rejected before either is tried.
    min_child_len: usize,
    /// Suffix index over the labels that terminated a pattern here.
    char_suffix: Option<CharTrie>,
}

impl TrieNode {
    /// Insert one parsed pattern, TLD-first.
    ///
    /// A node without children is terminal: its domain and every subdomain
    /// match. Two guards keep that reading stable when the builder's
    /// adjacent-pair dedup lets a redundant pattern through: descending
    /// into an existing terminal stops early (the longer pattern is already
    /// covered), and terminating on a node that has children drops its
    /// subtree (the shorter pattern covers everything below it).
    pub(crate) fn insert(&mut self, labels: &[Label]) {
        let Some((label, rest)) = labels.split_first() else {
            return;
        };

        self.min_child_len = match self.min_child_len {
            0 => label.len(),
            current => current.min(label.len()),
        };

        if rest.is_empty() {
            let child = self.children.entry(label.clone()).or_default();
            child.children.clear();
            child.min_child_len = 0;
            child.char_suffix = None;
            self.char_suffix
                .get_or_insert_with(CharTrie::default)
                .insert(label.as_str());
        } else {
            match self.children.entry(label.clone()) {
                Entry::Occupied(entry) => {
                    let child = entry.into_mut();
                    if child.children.is_empty() {
                        return;
                    }
                    child.insert(rest);
                }
                Entry::Vacant(entry) => {
                    entry.insert(TrieNode::default()).insert(rest);
                }
            }
        }
    }

    /// Iterative walk consuming labels from the TLD end.
    pub(crate) fn matches(&self, domain: &ParsedDomain) -> bool {
        let labels = domain.labels();
        let mut node = self;
        let mut consumed = 0;
        loop {
            if node.children.is_empty() {
                // Terminal: whatever labels remain are a subdomain prefix.
                return consumed > 0;
            }
            let label = &labels[consumed];
            match node.children.get(label) {
                None => {
                    if label.len() < node.min_child_len {
                        return false;
                    }
                    return match &node.char_suffix {
                        Some(suffixes) => suffixes.matches(label.as_str()),
                        None => false,
                    };
                }
                Some(child) => {
                    consumed += 1;
                    if consumed == labels.len() {
                        // The URL ran out of labels; it matches only if the
                        // pattern path ends here too.
                        return child.children.is_empty();
                    }
                    node = child;
                }
            }
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Compiled, immutable domain pattern set.
///
/// Built once by [`compile`](crate::compile::compile) and read-only from
/// then on; lookups never mutate the trie, so a matcher can be shared
/// across threads freely. The optional [`ParseCache`] is the only state
/// touched at lookup time.
pub struct DomainMatcher {
    root: TrieNode,
    cache: Option<Arc<dyn ParseCache>>,
}

impl DomainMatcher {
    /// Compile `patterns` into a matcher without a parse cache.
    ///
    /// Fails if any pattern is malformed; an empty collection yields a
    /// matcher that matches nothing.
    pub fn new<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::compile::compile(patterns, None)
    }

    /// Compile `patterns` into a matcher that memoizes URL parses in
    /// `cache`.
    pub fn with_cache<I, S>(patterns: I, cache: Arc<dyn ParseCache>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        crate::compile::compile(patterns, Some(cache))
    }

    pub(crate) fn from_parts(root: TrieNode, cache: Option<Arc<dyn ParseCache>>) -> Self {
        Self { root, cache }
    }

    /// Whether `url`'s domain equals, is a subdomain of, or ends with a
    /// recorded character suffix of, any compiled pattern.
    ///
    /// Fails fast on a malformed `url`: "doesn't match" and "not even a
    /// domain" are different answers. The matcher itself stays valid after
    /// an error; only this lookup is aborted.
    pub fn matches(&self, url: &str) -> Result<bool> {
        let parsed = match &self.cache {
            None => parse_url(url)?,
            Some(cache) => match cache.get(url) {
                Some(hit) => hit,
                None => {
                    let parsed = parse_url(url)?;
                    cache.set(url, parsed.clone());
                    parsed
                }
            },
        };
        Ok(self.root.matches(&parsed))
    }

    /// True if no pattern was compiled in.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}
