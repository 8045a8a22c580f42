//! SA configuration.

use crate::error::{Result, TspError};

/// Upper bound on the cooling schedule length of a run without a hard
/// iteration budget.
pub const MAX_COOLING_STEPS: f64 = 1e8;

/// Configuration for the Simulated Annealing engine.
///
/// Cooling is geometric: after every iteration
/// `T_{k+1} = (1 - cooling_rate) * T_k`. The run stops once the
/// temperature is no longer above `min_temperature`, or when the optional
/// hard iteration budget is spent.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(10_000.0)
///     .with_cooling_rate(0.01)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// assert!(SaConfig::default().with_cooling_rate(1.0).validate().is_err());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Initial temperature. Higher values accept worse tours more freely.
    pub initial_temperature: f64,

    /// Per-iteration multiplicative decay, `1 - alpha`. Must lie in `[0, 1)`.
    pub cooling_rate: f64,

    /// The run stops when `T <= min_temperature`.
    pub min_temperature: f64,

    /// Maximum total iterations (hard budget). 0 = no limit.
    pub max_iterations: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            initial_temperature: 300_000.0,
            cooling_rate: 0.03,
            min_temperature: 1.0,
            max_iterations: 0,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_min_temperature(mut self, t: f64) -> Self {
        self.min_temperature = t;
        self
    }

    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if !(self.initial_temperature.is_finite() && self.initial_temperature > 0.0) {
            return Err(TspError::parameter(
                "initial_temperature",
                format!("must be positive and finite, got {}", self.initial_temperature),
            ));
        }
        if !(self.min_temperature.is_finite() && self.min_temperature > 0.0) {
            return Err(TspError::parameter(
                "min_temperature",
                format!("must be positive and finite, got {}", self.min_temperature),
            ));
        }
        if !(0.0..1.0).contains(&self.cooling_rate) {
            return Err(TspError::parameter(
                "cooling_rate",
                format!("must lie in [0, 1), got {}", self.cooling_rate),
            ));
        }
        if self.max_iterations == 0 && self.initial_temperature > self.min_temperature {
            // Rates below f64 resolution leave `1 - rate` at exactly 1.
            let factor = 1.0 - self.cooling_rate;
            if factor >= 1.0 {
                return Err(TspError::parameter(
                    "cooling_rate",
                    format!(
                        "rate {} never lowers the temperature; set max_iterations to bound the run",
                        self.cooling_rate
                    ),
                ));
            }
            let steps = self.cooling_steps();
            if steps > MAX_COOLING_STEPS {
                return Err(TspError::parameter(
                    "cooling_rate",
                    format!(
                        "rate {} needs about {steps:.0} iterations to cool, limit is {MAX_COOLING_STEPS:.0}; set max_iterations",
                        self.cooling_rate
                    ),
                ));
            }
        }
        Ok(())
    }

    /// Iterations geometric cooling needs to bring `initial_temperature`
    /// down to `min_temperature`, ignoring `max_iterations`.
    ///
    /// Infinite when the rate does not lower the temperature.
    pub fn cooling_steps(&self) -> f64 {
        if self.initial_temperature <= self.min_temperature {
            return 0.0;
        }
        let factor = 1.0 - self.cooling_rate;
        if factor >= 1.0 {
            return f64::INFINITY;
        }
        (self.initial_temperature / self.min_temperature).ln() / -factor.ln()
    }
}
