//! Structured error types for the Cyanea ecosystem.

use thiserror::Error;

/// Unified error type for all Cyanea operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CyaneaError {
    /// Invalid input (bad arguments, malformed structures)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An atom, bond or vertex index outside the structure it was looked up in
    #[error("{kind} index {index} out of range (size {len})")]
    OutOfRange {
        kind: &'static str,
        index: usize,
        len: usize,
    },
}

impl CyaneaError {
    /// Shorthand for [`CyaneaError::OutOfRange`].
    pub fn out_of_range(kind: &'static str, index: usize, len: usize) -> Self {
        CyaneaError::OutOfRange { kind, index, len }
    }
}

/// Convenience alias used throughout the Cyanea ecosystem.
pub type Result<T> = std::result::Result<T, CyaneaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message() {
        let err = CyaneaError::out_of_range("atom", 7, 5);
        assert_eq!(err.to_string(), "atom index 7 out of range (size 5)");
    }

    #[test]
    fn invalid_input_message() {
        let err = CyaneaError::InvalidInput("ring needs at least 3 atoms".into());
        assert!(err.to_string().starts_with("invalid input:"));
    }
}
