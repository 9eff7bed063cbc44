//! Trie-based domain matching.
//!
//! Two structures cooperate per trie level:
//! - the label trie maps exact labels to child nodes, consuming a URL's
//!   labels from the TLD end; a node with no children is terminal and
//!   accepts the domain plus all of its subdomains;
//! - a character-suffix trie records, per level, the reversed character
//!   chains of labels that ended a pattern there, catching labels that
//!   merely *end with* a recorded label (`supercar` vs `car`).
//!
//! Both are built once by [`compile`](crate::compile::compile) and never
//! mutated afterwards.

mod char_trie;
mod trie;

pub(crate) use trie::TrieNode;

pub use trie::DomainMatcher;
