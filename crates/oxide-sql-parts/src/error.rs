//! Error types for fragment construction.

/// Errors that can occur while building a fragment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The value has no inline SQL literal form.
    #[error("Unsupported literal type: {kind}")]
    UnsupportedLiteral {
        /// Kind of the rejected value.
        kind: &'static str,
    },
}

/// Result type for fragment construction.
pub type Result<T> = std::result::Result<T, BuildError>;
