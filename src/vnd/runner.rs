//! Variable Neighborhood Descent execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random tour, set `k = 0`
//! 2. Hill-climb the tour with operator `N_k` to a local optimum
//! 3. If the tour is strictly cheaper than the best known, adopt it and set
//!    `k = 0`; otherwise `k = k + 1`
//! 4. Stop once `k` passes the last operator: the tour is a local optimum
//!    of every neighborhood
//!
//! # Reference
//!
//! Hansen, P. & Mladenović, N. (2001). "Variable neighborhood search:
//! Principles and applications", *European Journal of Operational Research* 130(3), 449-467.

use tracing::{debug, info};

use super::config::VndConfig;
use super::neighborhood::Neighborhood;
use crate::distance::DistanceModel;
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use crate::tour::Tour;

/// Result of a VND run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VndResult {
    /// Best tour found (a local optimum of every configured neighborhood).
    pub tour: Tour,
    /// Cost of the best tour.
    pub cost: f64,
    /// Operator of every hill-climb, in order.
    pub visits: Vec<Neighborhood>,
    /// Operator of every hill-climb that improved the best cost.
    pub improved_by: Vec<Neighborhood>,
    /// Best cost after each hill-climb.
    pub cost_history: Vec<f64>,
}

/// Variable Neighborhood Descent with reset-on-improvement escalation.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceModel;
/// use u_tsp::vnd::{VariableNeighborhoodDescent, VndConfig};
///
/// let model = DistanceModel::random_seeded(9, 10..99, 4).unwrap();
/// let vnd = VariableNeighborhoodDescent::new(&model, VndConfig::default().with_seed(1)).unwrap();
/// let result = vnd.run();
/// assert!(result.tour.is_valid(9));
/// ```
#[derive(Debug, Clone)]
pub struct VariableNeighborhoodDescent<'a> {
    model: &'a DistanceModel,
    config: VndConfig,
}

impl<'a> VariableNeighborhoodDescent<'a> {
    /// Validates the configuration and the instance.
    pub fn new(model: &'a DistanceModel, config: VndConfig) -> Result<Self> {
        config.validate()?;
        model.require_searchable()?;
        Ok(Self { model, config })
    }

    pub fn config(&self) -> &VndConfig {
        &self.config
    }

    /// Runs from a random initial tour.
    pub fn run(&self) -> VndResult {
        let seed = resolve_seed(self.config.seed);
        debug!(seed, "variable neighborhood descent seed");
        let mut rng = create_rng(seed);
        self.descend(Tour::random(self.model.size(), &mut rng))
    }

    /// Runs from a caller-supplied initial tour.
    pub fn run_from(&self, initial: Tour) -> Result<VndResult> {
        self.model.check_tour(&initial)?;
        Ok(self.descend(initial))
    }

    #[tracing::instrument(
        level = "debug",
        name = "variable_neighborhood_descent",
        skip_all,
        fields(locations = self.model.size())
    )]
    fn descend(&self, initial: Tour) -> VndResult {
        let model = self.model;
        let neighborhoods = &self.config.neighborhoods;

        let mut current = initial;
        let mut best = current.clone();
        let mut best_cost = model.tour_cost(&best);

        let mut visits = Vec::new();
        let mut improved_by = Vec::new();
        let mut cost_history = Vec::new();

        info!(initial_cost = best_cost, "variable neighborhood descent started");

        let mut k = 0;
        while k < neighborhoods.len() {
            let neighborhood = neighborhoods[k];
            visits.push(neighborhood);

            let moves = neighborhood.hill_climb(model, &mut current);
            let cost = model.tour_cost(&current);

            if cost < best_cost {
                best.clone_from(&current);
                best_cost = cost;
                improved_by.push(neighborhood);
                debug!(%neighborhood, moves, cost, "improved, back to first neighborhood");
                k = 0;
            } else {
                k += 1;
            }

            cost_history.push(best_cost);
        }

        info!(
            cost = best_cost,
            hill_climbs = visits.len(),
            "variable neighborhood descent finished"
        );

        VndResult {
            tour: best,
            cost: best_cost,
            visits,
            improved_by,
            cost_history,
        }
    }
}
