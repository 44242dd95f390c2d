//! Error types for the SEAM engine

use thiserror::Error;

/// Core SEAM errors
#[derive(Error, Debug)]
pub enum SeamError {
    // Window errors
    #[error("Invalid window arity: {0} (must be at least 1)")]
    InvalidArity(usize),
}

/// Result type for SEAM operations
pub type SeamResult<T> = Result<T, SeamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arity_message() {
        let err = SeamError::InvalidArity(0);
        assert_eq!(
            err.to_string(),
            "Invalid window arity: 0 (must be at least 1)"
        );
    }
}
