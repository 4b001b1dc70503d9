//! Error types for the actor network.

use thiserror::Error;

/// Result type alias for network operations.
pub type Result<T> = std::result::Result<T, NetworkError>;

/// Errors raised by the registry, the graph engine and the ingestion helpers.
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Actor name was never registered.
    #[error("Actor not found: {name}")]
    NotFound { name: String },

    /// Node id outside `[0, size)`.
    #[error("Invalid id {id}: graph has {size} nodes")]
    IdOutOfRange { id: usize, size: usize },

    /// Histogram bucket width must be positive.
    #[error("Invalid bucket interval: {interval}")]
    InvalidInterval { interval: usize },

    /// Statistic has no defined value for this graph (empty graph, zero deviation).
    #[error("Undefined statistic: {statistic}")]
    UndefinedStatistic { statistic: &'static str },

    /// Credits file lacks a required header column.
    #[error("Missing column: {column}")]
    MissingColumn { column: &'static str },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NetworkError {
    /// True for caller errors about out-of-range ids or bad arguments.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            NetworkError::IdOutOfRange { .. } | NetworkError::InvalidInterval { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NetworkError::NotFound {
            name: "Kevin Bacon".to_string(),
        };
        assert!(err.to_string().contains("Kevin Bacon"));

        let err = NetworkError::IdOutOfRange { id: 7, size: 3 };
        assert!(err.to_string().contains('7'));
        assert!(err.to_string().contains('3'));

        let err = NetworkError::MissingColumn { column: "actor" };
        assert!(err.to_string().contains("actor"));
    }

    #[test]
    fn test_invalid_argument_class() {
        assert!(NetworkError::IdOutOfRange { id: 1, size: 0 }.is_invalid_argument());
        assert!(NetworkError::InvalidInterval { interval: 0 }.is_invalid_argument());
        assert!(!NetworkError::UndefinedStatistic { statistic: "mean" }.is_invalid_argument());
    }
}
