//! PSO configuration.

use crate::error::{Result, TspError};

/// Configuration parameters for the discrete Particle Swarm Optimization.
///
/// # Examples
///
/// ```
/// use u_tsp::pso::PsoConfig;
///
/// let config = PsoConfig::default()
///     .with_iterations(100)
///     .with_particles(40)
///     .with_seed(7);
/// assert_eq!(config.particles, 40);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Number of swarm iterations.
    pub iterations: usize,

    /// Swarm population size.
    pub particles: usize,

    /// Random 2-swap probes per particle during local refinement.
    pub neighbor_probes: usize,

    /// Cognitive acceleration coefficient (pull toward the personal best).
    pub cognitive: f64,

    /// Social acceleration coefficient (pull toward the global best).
    pub social: f64,

    /// Inertia weight at the first iteration.
    pub inertia_start: f64,

    /// Inertia weight at the last iteration. The weight decreases linearly
    /// in between, shifting the swarm from exploration to local search.
    pub inertia_end: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for PsoConfig {
    fn default() -> Self {
        Self {
            iterations: 50,
            particles: 25,
            neighbor_probes: 120,
            cognitive: 2.0,
            social: 2.0,
            inertia_start: 0.4,
            inertia_end: 0.2,
            seed: None,
        }
    }
}

impl PsoConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_particles(mut self, n: usize) -> Self {
        self.particles = n;
        self
    }

    pub fn with_neighbor_probes(mut self, n: usize) -> Self {
        self.neighbor_probes = n;
        self
    }

    /// Sets the cognitive and social coefficients.
    pub fn with_coefficients(mut self, cognitive: f64, social: f64) -> Self {
        self.cognitive = cognitive;
        self.social = social;
        self
    }

    /// Sets the inertia schedule endpoints.
    pub fn with_inertia(mut self, start: f64, end: f64) -> Self {
        self.inertia_start = start;
        self.inertia_end = end;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Inertia weight at iteration `iter` (1-based):
    /// `start - (start - end) * iter / iterations`.
    pub fn inertia(&self, iter: usize) -> f64 {
        self.inertia_start
            - (self.inertia_start - self.inertia_end) * (iter as f64 / self.iterations as f64)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(TspError::parameter("iterations", "must be positive"));
        }
        if self.particles == 0 {
            return Err(TspError::parameter("particles", "must be positive"));
        }
        if self.neighbor_probes == 0 {
            return Err(TspError::parameter("neighbor_probes", "must be positive"));
        }
        for (name, value) in [
            ("cognitive", self.cognitive),
            ("social", self.social),
            ("inertia_start", self.inertia_start),
            ("inertia_end", self.inertia_end),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(TspError::parameter(
                    name,
                    format!("must be finite and non-negative, got {value}"),
                ));
            }
        }
        Ok(())
    }
}
