//! Domain Matcher - fast allow/block-list domain matching for Rust
//!
//! This library decides whether a URL belongs to a precompiled set of
//! domain patterns: same domain, any subdomain, or a label that merely
//! ends with a recorded pattern label. It is the matching core of a
//! filter/proxy/content gateway - no network layer, no persistence, no CLI.
//!
//! # Example
//!
//! ```rust
//! use domain_matcher_r::DomainMatcher;
//!
//! let matcher = DomainMatcher::new([
//!     "car.google.com",
//!     "https://www.Mail.RU/inbox?folder=0",
//! ])
//! .unwrap();
//!
//! // Exact domain and any subdomain
//! assert!(matcher.matches("car.google.com").unwrap());
//! assert!(matcher.matches("auto.car.google.com").unwrap());
//!
//! // Label ending with a recorded terminal label
//! assert!(matcher.matches("supercar.google.com").unwrap());
//!
//! // Scheme, www. and path are stripped at lookup time too
//! assert!(matcher.matches("https://www.mail.ru/settings").unwrap());
//!
//! // Not matching is not an error...
//! assert!(!matcher.matches("google.com").unwrap());
//!
//! // ...but a malformed URL is
//! assert!(matcher.matches(".google.com").is_err());
//! ```
//!
//! # Matching semantics
//!
//! | Pattern | URL | Matches |
//! |---------|-----|---------|
//! | `car.google.com` | `car.google.com` | yes (exact) |
//! | `car.google.com` | `auto.car.google.com` | yes (subdomain) |
//! | `car.google.com` | `supercar.google.com` | yes (label suffix) |
//! | `car.google.com` | `google.com` | no (too few labels) |
//! | `blabla.com` | `bla-bla.com` | no (hyphen is significant) |
//!
//! Patterns and URLs are compared ASCII case-insensitively; `http://`,
//! `https://`, a leading `www.`, and anything from the first `/` are
//! ignored on both sides. Labels may contain ASCII letters, digits, and
//! hyphens only.
//!
//! # Caching
//!
//! Parsing a URL into labels can be memoized through the [`ParseCache`]
//! capability; [`LruParseCache`] is the shipped implementation. The
//! compiled trie itself is immutable and freely shareable across threads.

pub mod cache;
pub mod compile;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod types;

// Re-export commonly used items
pub use cache::{LruParseCache, ParseCache, DEFAULT_CACHE_SIZE};
pub use compile::compile;
pub use error::{DomainError, Result};
pub use matcher::DomainMatcher;
pub use parser::parse_url;
pub use types::{Label, ParsedDomain};
