//! Error types for markup formatting.

/// Errors raised while resolving styles or parsing markup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MarkupError {
    /// A color, option, or inline clause name was not recognized.
    ///
    /// The formatter recovers from this locally: the offending tag is
    /// emitted as literal text and formatting continues.
    #[error("Invalid style definition: {0}")]
    InvalidStyle(String),

    /// A named style was requested but never registered.
    #[error("Undefined style: {0}")]
    UnknownStyle(String),

    /// A closing tag did not match any open style on the stack.
    #[error("Incorrectly nested style tag found: {0}")]
    UnbalancedTag(String),
}

impl MarkupError {
    /// Create an invalid-style error.
    pub fn invalid_style(msg: impl Into<String>) -> Self {
        Self::InvalidStyle(msg.into())
    }
}
