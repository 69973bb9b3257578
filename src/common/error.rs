//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The engine itself only ever fails before the first reference is
/// processed. Once a run is validated it cannot fail part-way through.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Non-positive frame count or empty reference sequence.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Policy selector text did not name a known policy.
    #[error("unknown policy: {0:?} (expected one of: fifo, lru)")]
    UnknownPolicy(String),

    /// A token in a textual reference string is not a page id.
    #[error("invalid page reference: {0:?}")]
    InvalidReference(String),
}

impl Error {
    /// Shorthand for building an [`Error::InvalidConfiguration`].
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Error::InvalidConfiguration(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_config("num_frames must be > 0");
        assert_eq!(
            format!("{}", err),
            "invalid configuration: num_frames must be > 0"
        );

        let err = Error::UnknownPolicy("clock".into());
        assert_eq!(
            format!("{}", err),
            "unknown policy: \"clock\" (expected one of: fifo, lru)"
        );
    }

    #[test]
    fn test_invalid_reference_display() {
        let err = Error::InvalidReference("x7".into());
        assert_eq!(format!("{}", err), "invalid page reference: \"x7\"");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
