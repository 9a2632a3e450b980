use thiserror::Error;

/// Convenience result type used by every constructor in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing a dynamic programming context.
///
/// Run methods never fail: once a context has been built and populated,
/// every recurrence in this crate completes unconditionally.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A parameter violates an algorithm precondition (e.g. fewer than
    /// two nodes, an even series length, an empty item list).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A table was requested with a zero extent in either dimension.
    #[error("Invalid table dimensions: {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

impl Error {
    /// Creates an `InvalidInput` error with the given message.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Error::InvalidInput(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_display() {
        let err = Error::invalid_input("node count must be at least 2");
        assert_eq!(
            err.to_string(),
            "Invalid input: node count must be at least 2"
        );
    }

    #[test]
    fn test_invalid_dimensions_display() {
        let err = Error::InvalidDimensions { rows: 0, cols: 3 };
        assert_eq!(err.to_string(), "Invalid table dimensions: 0x3");
    }
}
