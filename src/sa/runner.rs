//! SA execution loop.

use tracing::{debug, info, trace};

use super::config::SaConfig;
use crate::distance::DistanceModel;
use crate::error::Result;
use crate::random::{create_rng, distinct_pair, resolve_seed, uniform_unit};
use crate::tour::Tour;

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// The recorded tour when the run stopped.
    pub tour: Tour,

    /// Cost of the recorded tour.
    pub cost: f64,

    /// Total number of iterations (swap evaluations).
    pub iterations: usize,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted swaps (including improvements).
    pub accepted_moves: usize,

    /// Number of strictly improving swaps.
    pub improving_moves: usize,

    /// Lowest cost the recorded tour ever had. Can be below `cost` because
    /// worse swaps are accepted on purpose.
    pub lowest_cost_seen: f64,
}

/// Probability of adopting a tour of cost `new_cost` over the recorded
/// tour of cost `best_cost` at `temperature`.
///
/// Returns 1 for a strict improvement and `exp((best - new) / T)`
/// otherwise, which lies strictly inside `(0, 1)` when `new > best` and
/// `T > 0`.
///
/// # Examples
///
/// ```
/// use u_tsp::sa::acceptance_probability;
///
/// assert_eq!(acceptance_probability(100.0, 90.0, 50.0), 1.0);
/// let p = acceptance_probability(100.0, 110.0, 50.0);
/// assert!((p - (-0.2f64).exp()).abs() < 1e-12);
/// ```
pub fn acceptance_probability(best_cost: f64, new_cost: f64, temperature: f64) -> f64 {
    if new_cost < best_cost {
        1.0
    } else {
        ((best_cost - new_cost) / temperature).exp()
    }
}

/// Simulated Annealing over random interior swaps.
///
/// Each iteration swaps two distinct interior positions and applies the
/// acceptance test against the recorded tour. An accepted swap replaces
/// the recorded tour and cost, even when it is worse; a rejected swap is
/// undone. The temperature then cools geometrically. There is no
/// re-heating.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceModel;
/// use u_tsp::sa::{SaConfig, SimulatedAnnealing};
///
/// let model = DistanceModel::random_seeded(10, 10..99, 1).unwrap();
/// let result = SimulatedAnnealing::new(&model, SaConfig::default().with_seed(42))
///     .unwrap()
///     .run();
/// assert!(result.tour.is_valid(10));
/// assert!(result.final_temperature <= 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing<'a> {
    model: &'a DistanceModel,
    config: SaConfig,
}

impl<'a> SimulatedAnnealing<'a> {
    /// Validates the configuration and the instance.
    pub fn new(model: &'a DistanceModel, config: SaConfig) -> Result<Self> {
        config.validate()?;
        model.require_searchable()?;
        Ok(Self { model, config })
    }

    pub fn config(&self) -> &SaConfig {
        &self.config
    }

    /// Runs from a random initial tour.
    pub fn run(&self) -> SaResult {
        let seed = resolve_seed(self.config.seed);
        debug!(seed, "simulated annealing seed");
        let mut rng = create_rng(seed);
        let initial = Tour::random(self.model.size(), &mut rng);
        self.anneal(initial, seed)
    }

    /// Runs from a caller-supplied initial tour; the configured seed still
    /// drives the swap and acceptance draws.
    pub fn run_from(&self, initial: Tour) -> Result<SaResult> {
        self.model.check_tour(&initial)?;
        Ok(self.anneal(initial, resolve_seed(self.config.seed)))
    }

    #[tracing::instrument(
        level = "debug",
        name = "simulated_annealing",
        skip_all,
        fields(locations = self.model.size(), seed = seed)
    )]
    fn anneal(&self, initial: Tour, seed: u64) -> SaResult {
        let model = self.model;
        let config = &self.config;
        // Separate stream from the one that drew the initial tour.
        let mut rng = create_rng(seed.wrapping_add(1));

        let mut current = initial;
        let mut cost = model.tour_cost(&current);
        let mut lowest_cost_seen = cost;
        let interior = current.interior();

        let mut temperature = config.initial_temperature;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        info!(
            initial_cost = cost,
            temperature,
            cooling_rate = config.cooling_rate,
            "simulated annealing started"
        );

        while temperature > config.min_temperature {
            if config.max_iterations > 0 && iterations >= config.max_iterations {
                break;
            }

            let (a, b) = distinct_pair(&mut rng, interior.start, interior.end);
            current.swap(a, b);
            let new_cost = model.tour_cost(&current);

            let probability = acceptance_probability(cost, new_cost, temperature);
            if uniform_unit(&mut rng) < probability {
                if new_cost < cost {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                cost = new_cost;
                if cost < lowest_cost_seen {
                    lowest_cost_seen = cost;
                    debug!(iterations, cost, temperature, "new lowest cost");
                }
            } else {
                current.swap(a, b);
            }

            trace!(iterations, temperature, cost, "annealing step");
            iterations += 1;
            temperature *= 1.0 - config.cooling_rate;
        }

        info!(
            cost,
            lowest_cost_seen, iterations, accepted_moves, "simulated annealing finished"
        );

        SaResult {
            tour: current,
            cost,
            iterations,
            final_temperature: temperature,
            accepted_moves,
            improving_moves,
            lowest_cost_seen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;

    #[test]
    fn test_acceptance_improvement_is_certain() {
        assert_eq!(acceptance_probability(50.0, 49.0, 1e-6), 1.0);
        assert_eq!(acceptance_probability(50.0, 0.0, 1e6), 1.0);
    }

    #[test]
    fn test_acceptance_worse_is_strictly_between_zero_and_one() {
        for &(best, new, t) in &[(10.0, 11.0, 1.0), (10.0, 30.0, 100.0), (5.0, 6.0, 1e4)] {
            let p = acceptance_probability(best, new, t);
            assert!(p > 0.0 && p < 1.0, "p = {p}");
            assert!((p - ((best - new) / t).exp()).abs() < 1e-15);
        }
    }

    #[test]
    fn test_acceptance_decreases_as_temperature_cools() {
        let hot = acceptance_probability(10.0, 20.0, 100.0);
        let cold = acceptance_probability(10.0, 20.0, 5.0);
        assert!(hot > cold);
    }

    #[test]
    fn test_sa_iteration_count_follows_geometric_cooling() {
        let model = DistanceModel::random_seeded(8, 10..99, 4).expect("valid");
        let config = SaConfig::default()
            .with_initial_temperature(1000.0)
            .with_cooling_rate(0.1)
            .with_seed(42);
        let result = SimulatedAnnealing::new(&model, config).expect("valid").run();

        // 1000 * 0.9^k <= 1  <=>  k >= ln(1000) / -ln(0.9) = 65.56...
        assert_eq!(result.iterations, 66);
        assert!(result.final_temperature <= 1.0);
        assert!(result.tour.is_valid(8));
        assert!((result.cost - model.tour_cost(&result.tour)).abs() < 1e-9);
    }

    #[test]
    fn test_sa_low_initial_temperature_keeps_initial_tour() {
        let model = DistanceModel::random_seeded(6, 10..99, 2).expect("valid");
        let config = SaConfig::default().with_initial_temperature(1.0).with_seed(3);
        let start = Tour::identity(6);
        let result = SimulatedAnnealing::new(&model, config)
            .expect("valid")
            .run_from(start.clone())
            .expect("matching tour");
        assert_eq!(result.iterations, 0);
        assert_eq!(result.tour, start);
    }

    #[test]
    fn test_sa_max_iterations_limit() {
        let model = DistanceModel::random_seeded(8, 10..99, 4).expect("valid");
        let config = SaConfig::default()
            .with_initial_temperature(1e10)
            .with_cooling_rate(0.0)
            .with_max_iterations(100)
            .with_seed(42);
        let result = SimulatedAnnealing::new(&model, config).expect("valid").run();
        assert_eq!(result.iterations, 100);
    }

    #[test]
    fn test_sa_accepts_uphill_at_high_temperature() {
        let model = DistanceModel::random_seeded(12, 10..99, 9).expect("valid");
        let config = SaConfig::default()
            .with_initial_temperature(1e9)
            .with_cooling_rate(0.001)
            .with_min_temperature(1e8)
            .with_seed(42);
        let result = SimulatedAnnealing::new(&model, config).expect("valid").run();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.9,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
        assert!(result.accepted_moves > result.improving_moves);
        assert!(result.lowest_cost_seen <= result.cost);
    }

    #[test]
    fn test_sa_deterministic_with_seed() {
        let model = DistanceModel::random_seeded(10, 10..99, 5).expect("valid");
        let config = SaConfig::default().with_seed(17);
        let a = SimulatedAnnealing::new(&model, config.clone()).expect("valid").run();
        let b = SimulatedAnnealing::new(&model, config).expect("valid").run();
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.accepted_moves, b.accepted_moves);
    }

    #[test]
    fn test_sa_rejects_bad_parameters() {
        let model = DistanceModel::random_seeded(5, 10..99, 5).expect("valid");
        let err = SimulatedAnnealing::new(&model, SaConfig::default().with_cooling_rate(1.5))
            .unwrap_err();
        assert!(matches!(
            err,
            TspError::ParameterOutOfRange {
                name: "cooling_rate",
                ..
            }
        ));
        assert!(
            SimulatedAnnealing::new(&model, SaConfig::default().with_initial_temperature(0.0))
                .is_err()
        );
    }

    #[test]
    fn test_sa_non_cooling_rate_needs_budget() {
        let model = DistanceModel::random_seeded(6, 10..99, 6).expect("valid");
        let stalled = SaConfig::default().with_cooling_rate(1e-17).with_seed(1);
        assert!(SimulatedAnnealing::new(&model, stalled.clone()).is_err());

        let result = SimulatedAnnealing::new(&model, stalled.with_max_iterations(200))
            .expect("valid")
            .run();
        assert_eq!(result.iterations, 200);
        assert!(result.tour.is_valid(6));
    }
}
