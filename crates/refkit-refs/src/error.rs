//! Error types for reference name operations.

use refkit_types::TypeError;
use thiserror::Error;

/// A reference name broke one formatting rule.
///
/// There is exactly one variant per rule in
/// [`RULES`](crate::rules::RULES). A check reports at most one of these: the
/// first rule, in table order, that rejected the name.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RefNameError {
    #[error("ref name cannot begin with a dot")]
    LeadingDot,

    #[error("ref name cannot end with .lock")]
    TrailingLock,

    #[error("ref name must contain at least one forward slash unless one-level names are allowed")]
    AtLeastOneForwardSlash,

    #[error("ref name cannot include two consecutive dots")]
    DoubleDots,

    #[error("ref name cannot include control characters, space, '~', '^', ':', '?', '*' or '['")]
    ExcludedCharacters,

    #[error("ref name cannot start with a forward slash")]
    LeadingForwardSlash,

    #[error("ref name cannot end with a forward slash")]
    TrailingForwardSlash,

    #[error("ref name cannot have consecutive forward slashes")]
    ConsecutiveForwardSlashes,

    #[error("ref name cannot end with a dot")]
    TrailingDot,

    #[error("ref name cannot include '@{{'")]
    AtOpenBrace,
}

/// Errors that can occur while building references or loading checker
/// configuration.
///
/// Name checking itself reports [`RefNameError`] directly.
#[derive(Debug, Error)]
pub enum RefError {
    /// A hash reference target could not be parsed.
    #[error("invalid ref target: {0}")]
    InvalidTarget(#[from] TypeError),

    /// A reference could not be built from its textual form.
    #[error("invalid reference {name}: {reason}")]
    InvalidReference { name: String, reason: String },

    /// A checker configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for ref operations.
pub type Result<T> = std::result::Result<T, RefError>;
