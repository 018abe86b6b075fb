use thiserror::Error;

/// Failure to turn a [`crate::Dictionary`] into matching patterns.
///
/// Dictionary keys are compiled as regular expressions (after wildcard expansion), so a key like
/// `"(oops"` is rejected rather than silently dropped.
#[derive(Debug, Error)]
pub enum Error {
    /// A single key, after case folding and wildcard expansion, is not a valid pattern.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        /// The normalized, wildcard-expanded key.
        pattern: String,
        source: regex::Error,
    },
    /// Every key compiled alone, but their combination did not (usually the size limit).
    #[error("combined pattern failed to compile: {0}")]
    CombinedPattern(#[source] regex::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
