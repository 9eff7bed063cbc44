//! Pattern set compilation.
//!
//! Raw patterns arrive as whatever a blocklist file or config hands over:
//! mixed case, schemes, `www.` prefixes, paths, stray punctuation. The
//! builder normalizes them, sorts and dedups, skips patterns subsumed by an
//! adjacent shorter suffix, and inserts the survivors into the label trie.

use std::collections::BTreeSet;
use std::sync::Arc;

use log::debug;

use crate::cache::ParseCache;
use crate::error::Result;
use crate::matcher::{DomainMatcher, TrieNode};
use crate::parser::{clear_pattern, parse_url};

/// Compile raw patterns into an immutable [`DomainMatcher`].
///
/// Any malformed pattern aborts the whole build; an empty collection
/// produces a matcher that matches nothing (but still validates lookup
/// URLs). The optional `cache` is stored on the returned matcher and
/// consulted by every lookup made through it.
pub fn compile<I, S>(patterns: I, cache: Option<Arc<dyn ParseCache>>) -> Result<DomainMatcher>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    // Normalized patterns, lexicographically sorted with set dedup. The
    // patterns are lowercased by clear_pattern, so plain byte order is the
    // case-insensitive order the skip heuristic below relies on.
    let mut normalized = BTreeSet::new();
    for pattern in patterns {
        normalized.insert(clear_pattern(pattern.as_ref())?);
    }

    let mut root = TrieNode::default();
    let mut prev: Option<&str> = None;
    for pattern in &normalized {
        // In sorted order a pattern ending with its predecessor is a longer
        // variant of a suffix already present ("sub.google.com" right after
        // "google.com") and the terminal node covers it. This adjacent-pair
        // check is a heuristic: sorting does not make every such pair
        // adjacent, so the trie insertion guards handle the rest.
        match prev {
            Some(p) if pattern.ends_with(p) => {
                debug!("skipping pattern {pattern:?} subsumed by {p:?}");
            }
            _ => {
                let parsed = parse_url(pattern)?;
                root.insert(parsed.labels());
            }
        }
        prev = Some(pattern);
    }

    Ok(DomainMatcher::from_parts(root, cache))
}
