//! Tabu Search execution engine.
//!
//! # Algorithm
//!
//! 1. Start from a random depot-anchored tour
//! 2. At each iteration, sweep every ordered pair of distinct interior
//!    positions `(j, k)`:
//!    a. Exchange positions `j` and `k` of the working tour in place
//!    (exchanges accumulate over the sweep)
//!    b. Record the tour as the new best if its cost is strictly below the
//!    best known cost and `(j, k)` is not tabu
//! 3. If the sweep recorded a best, decay all tenures and mark the last
//!    accepted pair; otherwise leave the memory untouched (no aspiration)
//! 4. Stop after the iteration budget
//!
//! # Reference
//!
//! Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.

use tracing::{debug, info, trace};

use super::config::TabuConfig;
use super::memory::TabuMemory;
use crate::distance::DistanceModel;
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use crate::tour::Tour;

/// Result of a Tabu Search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuResult {
    /// Best tour found.
    pub tour: Tour,
    /// Cost of the best tour.
    pub cost: f64,
    /// Total iterations executed.
    pub iterations: usize,
    /// Iteration at which the best tour was found.
    pub best_iteration: usize,
    /// Number of sweeps that accepted a move.
    pub accepted_moves: usize,
    /// Best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Tabu Search over position exchanges.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceModel;
/// use u_tsp::tabu::{TabuConfig, TabuSearch};
///
/// let model = DistanceModel::random_seeded(8, 10..99, 7).unwrap();
/// let config = TabuConfig::default().with_iterations(200).with_seed(42);
/// let result = TabuSearch::new(&model, config).unwrap().run();
/// assert!(result.tour.is_valid(8));
/// assert_eq!(result.cost, model.tour_cost(&result.tour));
/// ```
#[derive(Debug, Clone)]
pub struct TabuSearch<'a> {
    model: &'a DistanceModel,
    config: TabuConfig,
}

impl<'a> TabuSearch<'a> {
    /// Validates the configuration and the instance.
    pub fn new(model: &'a DistanceModel, config: TabuConfig) -> Result<Self> {
        config.validate()?;
        model.require_searchable()?;
        Ok(Self { model, config })
    }

    pub fn config(&self) -> &TabuConfig {
        &self.config
    }

    /// Runs from a random initial tour drawn with the configured seed.
    pub fn run(&self) -> TabuResult {
        let seed = resolve_seed(self.config.seed);
        let mut rng = create_rng(seed);
        debug!(seed, "tabu search initial tour");
        let initial = Tour::random(self.model.size(), &mut rng);
        self.search(initial)
    }

    /// Runs from a caller-supplied initial tour.
    pub fn run_from(&self, initial: Tour) -> Result<TabuResult> {
        self.model.check_tour(&initial)?;
        Ok(self.search(initial))
    }

    #[tracing::instrument(
        level = "debug",
        name = "tabu_search",
        skip_all,
        fields(locations = self.model.size(), iterations = self.config.iterations)
    )]
    fn search(&self, initial: Tour) -> TabuResult {
        let model = self.model;
        let mut current = initial;
        let mut best = current.clone();
        let mut best_cost = model.tour_cost(&best);
        let mut best_iteration = 0;
        let mut accepted_moves = 0;

        // Indexed by tour position, so the closing depot has a row too.
        let mut memory = TabuMemory::new(current.len(), self.config.tenure_increment);

        info!(initial_cost = best_cost, "tabu search started");

        let mut cost_history = Vec::with_capacity(self.config.iterations);

        for iteration in 0..self.config.iterations {
            let accepted = sweep(model, &mut current, &mut best, &mut best_cost, &memory);
            record(&mut memory, accepted);

            if let Some((j, k)) = accepted {
                accepted_moves += 1;
                best_iteration = iteration;
                debug!(iteration, cost = best_cost, j, k, "tabu move accepted");
            }

            cost_history.push(best_cost);
        }

        info!(
            cost = best_cost,
            best_iteration, accepted_moves, "tabu search finished"
        );

        TabuResult {
            tour: best,
            cost: best_cost,
            iterations: cost_history.len(),
            best_iteration,
            accepted_moves,
            cost_history,
        }
    }
}

/// One sweep over every ordered pair of distinct interior positions.
///
/// Exchanges accumulate on `current`. A non-tabu exchange that beats
/// `best_cost` replaces `best`; the last such pair is returned.
pub(crate) fn sweep(
    model: &DistanceModel,
    current: &mut Tour,
    best: &mut Tour,
    best_cost: &mut f64,
    memory: &TabuMemory,
) -> Option<(usize, usize)> {
    let interior = current.interior();
    let mut accepted = None;

    for j in interior.clone() {
        for k in interior.clone() {
            if j == k {
                continue;
            }
            current.swap(j, k);
            let cost = model.tour_cost(current);
            trace!(j, k, cost, "exchange evaluated");

            if cost < *best_cost && !memory.is_tabu(j, k) {
                best.clone_from(current);
                *best_cost = cost;
                accepted = Some((j, k));
            }
        }
    }
    accepted
}

/// Decays every tenure and marks the accepted pair. Sweeps that accepted
/// nothing leave the memory untouched.
pub(crate) fn record(memory: &mut TabuMemory, accepted: Option<(usize, usize)>) {
    if let Some((j, k)) = accepted {
        memory.decay();
        memory.mark(j, k);
    }
}
