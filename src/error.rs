use thiserror::Error;

#[derive(Error, Debug)]
pub enum SquaresError {
    #[error("Sum of squares overflows u64 for upper bound {upper_bound}")]
    Overflow { upper_bound: u64 },

    #[error("Expected {expected}, got {actual}")]
    Mismatch { expected: u64, actual: u64 },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SquaresError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mismatch_message_names_both_values() {
        let err = SquaresError::Mismatch {
            expected: 385,
            actual: 384,
        };
        assert_eq!(err.to_string(), "Expected 385, got 384");
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: SquaresError = io.into();
        assert!(matches!(err, SquaresError::Io(_)));
        assert!(err.to_string().starts_with("IO error:"));
    }
}
