use std::fmt;

/// One dot-delimited segment of a domain name, stored lowercased.
///
/// Only the parser constructs labels, after validating that every character
/// is an ASCII letter, digit, or hyphen. Comparisons are therefore plain
/// byte comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Label(String);

impl Label {
    /// Lowercase and wrap a validated raw segment.
    pub(crate) fn new(raw: &str) -> Self {
        Self(raw.to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Label {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// TLD-first sequence of labels parsed from a URL or pattern.
///
/// `calendar.google.com` parses to `["com", "google", "calendar"]`. Both
/// pattern-compile time and lookup time go through the same parsing rule, so
/// parsed domains are always structurally comparable. Invariant: never
/// empty; the parser rejects input that would produce zero labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDomain {
    labels: Vec<Label>,
}

impl ParsedDomain {
    pub(crate) fn new(labels: Vec<Label>) -> Self {
        debug_assert!(!labels.is_empty());
        Self { labels }
    }

    /// Labels in TLD-first order.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
