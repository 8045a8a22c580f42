//! Variable Neighborhood Descent configuration.

use super::neighborhood::Neighborhood;
use crate::error::{Result, TspError};

/// Configuration parameters for Variable Neighborhood Descent.
///
/// The descent itself is deterministic; the seed only draws the initial
/// tour for [`run`](super::VariableNeighborhoodDescent::run).
///
/// # Examples
///
/// ```
/// use u_tsp::vnd::{Neighborhood, VndConfig};
///
/// let config = VndConfig::default()
///     .with_neighborhoods(vec![Neighborhood::Swap, Neighborhood::Inverse])
///     .with_seed(42);
/// assert_eq!(config.neighborhoods.len(), 2);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VndConfig {
    /// Operators in escalation order.
    pub neighborhoods: Vec<Neighborhood>,
    /// Random seed (None for a fresh seed).
    pub seed: Option<u64>,
}

impl Default for VndConfig {
    fn default() -> Self {
        Self {
            neighborhoods: Neighborhood::ALL.to_vec(),
            seed: None,
        }
    }
}

impl VndConfig {
    /// Sets the operator list.
    pub fn with_neighborhoods(mut self, neighborhoods: Vec<Neighborhood>) -> Self {
        self.neighborhoods = neighborhoods;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.neighborhoods.is_empty() {
            return Err(TspError::parameter(
                "neighborhoods",
                "at least one operator is required",
            ));
        }
        Ok(())
    }
}
