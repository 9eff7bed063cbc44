use thiserror::Error;

/// Domain matcher error types.
///
/// Every variant is an input-validation failure carrying the offending raw
/// string; malformed input is a caller bug, not a transient condition, so
/// there are no retryable errors here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Input begins with `http`/`https` but is not followed by `://`.
    #[error("invalid scheme in url: {0}")]
    InvalidScheme(String),

    /// First character after scheme/`www.` stripping is not a letter,
    /// digit, or hyphen (e.g. a leading `.` or `/`).
    #[error("invalid start of domain in url: {0}")]
    InvalidStart(String),

    /// A label contains a character outside `[a-zA-Z0-9-]`.
    #[error("invalid character in url: {0}")]
    InvalidCharacter(String),

    /// Two consecutive separators produced a zero-length label.
    #[error("empty label in url: {0}")]
    EmptyLabel(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
