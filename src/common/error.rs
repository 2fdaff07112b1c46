//! Error types for escape_planner

use thiserror::Error;

/// Main error type for the escape behavior
#[derive(Debug, Error)]
pub enum EscapeError {
    /// A planner slot that must be supplied externally was left unset
    #[error("Dependency not configured: {0}")]
    UnconfiguredDependency(&'static str),
    /// A dynamically sized buffer did not match the fixed state/effort shape
    #[error("Dimension mismatch for {what}: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    /// Invalid parameter
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    /// Numerical computation failed (matrix inversion, etc.)
    #[error("Numerical error: {0}")]
    NumericalError(String),
    /// Parameter file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Visualization error
    #[error("Visualization error: {0}")]
    VisualizationError(String),
}

/// Result type alias for escape planner operations
pub type EscapeResult<T> = Result<T, EscapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EscapeError::UnconfiguredDependency("is_feasible");
        assert_eq!(format!("{}", err), "Dependency not configured: is_feasible");

        let err = EscapeError::DimensionMismatch {
            what: "state",
            expected: 6,
            actual: 5,
        };
        assert_eq!(format!("{}", err), "Dimension mismatch for state: expected 6, got 5");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: EscapeError = io_err.into();
        assert!(matches!(err, EscapeError::Io(_)));
    }
}
