//! Error taxonomy.
//!
//! Every error is raised while building a model or an engine. Once an
//! engine has been constructed, `run()` cannot fail.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Construction-time failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TspError {
    /// Distance input is not a square, finite, non-negative, symmetric
    /// matrix with a zero diagonal.
    #[error("invalid distance matrix: {0}")]
    InvalidMatrix(String),

    /// The instance has fewer than two non-depot locations, so there is
    /// no pair of distinct interior positions to work with.
    #[error("degenerate instance: {locations} location(s), at least 3 are required")]
    DegenerateInstance {
        /// Number of locations in the model (depot included).
        locations: usize,
    },

    /// An algorithm parameter is outside its admissible range.
    #[error("parameter `{name}` out of range: {reason}")]
    ParameterOutOfRange {
        /// Config field name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// A caller-supplied tour is not a depot-anchored permutation.
    #[error("invalid tour: {0}")]
    InvalidTour(String),
}

impl TspError {
    pub(crate) fn parameter(name: &'static str, reason: impl Into<String>) -> Self {
        TspError::ParameterOutOfRange {
            name,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = TspError::DegenerateInstance { locations: 2 };
        assert_eq!(
            err.to_string(),
            "degenerate instance: 2 location(s), at least 3 are required"
        );

        let err = TspError::parameter("iterations", "must be positive");
        assert_eq!(
            err.to_string(),
            "parameter `iterations` out of range: must be positive"
        );
    }
}
