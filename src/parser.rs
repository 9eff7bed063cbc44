//! URL and pattern normalization.
//!
//! Both pattern-compile time and lookup time funnel through [`parse_url`],
//! which guarantees that a pattern and a URL naming the same domain always
//! decompose into the same TLD-first label sequence.

use crate::error::{DomainError, Result};
use crate::types::{Label, ParsedDomain};

/// Offset of the first character after the scheme, if any.
///
/// Only `http://` and `https://` are recognized, case-insensitively.
/// Anything else that begins with `http` is rejected outright rather than
/// treated as a domain, so a forgotten slash ("http:/host") surfaces as an
/// error instead of a silent non-match.
fn scheme_end(raw: &str) -> Result<usize> {
    let bytes = raw.as_bytes();
    if bytes.len() < 4 || !bytes[..4].eq_ignore_ascii_case(b"http") {
        return Ok(0);
    }
    if bytes[4..].starts_with(b"://") {
        return Ok(7);
    }
    if bytes.len() > 4 && bytes[4].eq_ignore_ascii_case(&b's') && bytes[5..].starts_with(b"://") {
        return Ok(8);
    }
    Err(DomainError::InvalidScheme(raw.to_string()))
}

/// Length of a leading `www.` prefix: 4 if present, else 0.
fn www_prefix_len(rest: &[u8]) -> usize {
    if rest.len() >= 4 && rest[..3].eq_ignore_ascii_case(b"www") && rest[3] == b'.' {
        4
    } else {
        0
    }
}

fn is_label_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'-'
}

/// Parse a raw URL or bare domain into a TLD-first label sequence.
///
/// Strips `http://`/`https://` and a leading `www.`, splits the domain
/// portion on `.`, ignores everything from the first `/`, and lowercases.
/// Fails on the first rule violation; no partial result is returned.
pub fn parse_url(raw: &str) -> Result<ParsedDomain> {
    let bytes = raw.as_bytes();
    let mut start = scheme_end(raw)?;
    start += www_prefix_len(&bytes[start..]);

    match bytes.get(start) {
        Some(&byte) if is_label_byte(byte) => {}
        _ => return Err(DomainError::InvalidStart(raw.to_string())),
    }

    let mut labels = Vec::new();
    let mut label_start = start;
    let mut pos = start;
    while pos < bytes.len() && bytes[pos] != b'/' {
        if bytes[pos] == b'.' {
            labels.push(close_label(raw, label_start, pos)?);
            label_start = pos + 1;
        }
        pos += 1;
    }
    labels.push(close_label(raw, label_start, pos)?);

    // Most specific label was pushed last; flip to TLD-first.
    labels.reverse();
    Ok(ParsedDomain::new(labels))
}

fn close_label(raw: &str, start: usize, end: usize) -> Result<Label> {
    if start == end {
        return Err(DomainError::EmptyLabel(raw.to_string()));
    }
    let segment = &raw[start..end];
    if segment.bytes().all(is_label_byte) {
        Ok(Label::new(segment))
    } else {
        Err(DomainError::InvalidCharacter(raw.to_string()))
    }
}

/// Normalize a raw pattern string before it enters the build.
///
/// Applies the same scheme/`www.` stripping as [`parse_url`], then forgives
/// the garbage that hand-maintained lists accumulate: trailing punctuation
/// is dropped and everything from the first `/` (path, query) is cut. The
/// remainder must be non-empty and contain only `[a-zA-Z0-9.-]`.
///
/// Lookup URLs never go through here; a URL with a stray trailing dot is an
/// error, a pattern with one is a typo.
pub(crate) fn clear_pattern(raw: &str) -> Result<String> {
    let mut start = scheme_end(raw)?;
    start += www_prefix_len(&raw.as_bytes()[start..]);

    let rest = &raw[start..];
    let trimmed = rest.trim_end_matches(|c: char| !c.is_ascii_alphanumeric());
    let domain = match trimmed.find('/') {
        Some(slash) => &trimmed[..slash],
        None => trimmed,
    };

    if domain.is_empty() {
        return Err(DomainError::InvalidStart(raw.to_string()));
    }
    if domain.bytes().any(|byte| !(is_label_byte(byte) || byte == b'.')) {
        return Err(DomainError::InvalidCharacter(raw.to_string()));
    }
    Ok(domain.to_ascii_lowercase())
}
