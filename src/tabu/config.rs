//! Tabu Search configuration.

use super::memory::DEFAULT_TENURE_INCREMENT;
use crate::error::{Result, TspError};

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_iterations(1000)
///     .with_tenure_increment(7)
///     .with_seed(42);
/// assert_eq!(config.iterations, 1000);
/// assert_eq!(config.tenure_increment, 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Number of neighborhood sweeps.
    pub iterations: usize,
    /// Tenure added to a position pair when its move is accepted.
    pub tenure_increment: u32,
    /// Random seed for the initial tour (None for a fresh seed).
    pub seed: Option<u64>,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            iterations: 20_000,
            tenure_increment: DEFAULT_TENURE_INCREMENT,
            seed: None,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the tenure increment.
    pub fn with_tenure_increment(mut self, tenure: u32) -> Self {
        self.tenure_increment = tenure;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(TspError::parameter("iterations", "must be positive"));
        }
        if self.tenure_increment == 0 {
            return Err(TspError::parameter("tenure_increment", "must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TabuConfig::default();
        assert_eq!(config.iterations, 20_000);
        assert_eq!(config.tenure_increment, 5);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let err = TabuConfig::default().with_iterations(0).validate().unwrap_err();
        assert!(matches!(
            err,
            TspError::ParameterOutOfRange {
                name: "iterations",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_zero_tenure() {
        assert!(TabuConfig::default()
            .with_tenure_increment(0)
            .validate()
            .is_err());
    }
}
