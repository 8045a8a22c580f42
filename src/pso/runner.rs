//! Swarm execution loop.
//!
//! # Algorithm
//!
//! Each iteration `iter = 1..=iterations`:
//!
//! 1. **Local refinement**: every particle except the last runs a random
//!    2-swap neighbor search on its tour
//! 2. **Ranking**: particles are sorted ascending by tour cost
//! 3. **Global best**: the top particle replaces the global best tour and
//!    position if it is strictly cheaper; every particle refreshes its
//!    personal-best anchor
//! 4. **Flight**: every particle except the last-ranked updates velocity and
//!    position with inertia `w = 0.4 - 0.2 * iter / iterations`
//! 5. **Discretization**: each dimension's movement, truncated to an
//!    integer, is applied to the tour as that many random swaps
//!
//! # Reference
//!
//! Kennedy, J. & Eberhart, R. (1995). "Particle swarm optimization",
//! *Proceedings of ICNN'95* 4, 1942-1948.

use tracing::{debug, info};

use super::config::PsoConfig;
use super::particle::Particle;
use crate::distance::DistanceModel;
use crate::error::Result;
use crate::random::{create_rng, resolve_seed};
use crate::tour::Tour;

/// Result of a PSO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoResult {
    /// Global best tour.
    pub tour: Tour,
    /// Cost of the global best tour.
    pub cost: f64,
    /// Iterations executed.
    pub iterations: usize,
    /// Number of times the global best improved.
    pub improvements: usize,
    /// Global best cost after each iteration.
    pub cost_history: Vec<f64>,
}

/// Discrete Particle Swarm Optimization over permutation tours.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceModel;
/// use u_tsp::pso::{ParticleSwarm, PsoConfig};
///
/// let model = DistanceModel::random_seeded(10, 10..99, 3).unwrap();
/// let config = PsoConfig::default().with_iterations(10).with_seed(42);
/// let result = ParticleSwarm::new(&model, config).unwrap().run();
/// assert!(result.tour.is_valid(10));
/// ```
#[derive(Debug, Clone)]
pub struct ParticleSwarm<'a> {
    model: &'a DistanceModel,
    config: PsoConfig,
}

impl<'a> ParticleSwarm<'a> {
    /// Validates the configuration and the instance.
    pub fn new(model: &'a DistanceModel, config: PsoConfig) -> Result<Self> {
        config.validate()?;
        model.require_searchable()?;
        Ok(Self { model, config })
    }

    pub fn config(&self) -> &PsoConfig {
        &self.config
    }

    /// Runs the swarm to completion.
    #[tracing::instrument(
        level = "debug",
        name = "particle_swarm",
        skip_all,
        fields(locations = self.model.size(), particles = self.config.particles)
    )]
    pub fn run(&self) -> PsoResult {
        let model = self.model;
        let config = &self.config;
        let seed = resolve_seed(config.seed);
        let mut rng = create_rng(seed);

        let mut swarm: Vec<Particle> = (0..config.particles)
            .map(|_| Particle::new(model, &mut rng))
            .collect();

        let dimensions = model.size() - 1;
        let mut global_position: Vec<f64> = (0..dimensions).map(|d| d as f64).collect();
        let mut best = swarm[0].tour().clone();
        let mut best_cost = f64::INFINITY;
        let mut improvements = 0usize;
        let mut cost_history = Vec::with_capacity(config.iterations);

        info!(
            seed,
            iterations = config.iterations,
            "particle swarm started"
        );

        // The last particle in the current ranking neither refines nor flies.
        let active = swarm.len() - 1;

        for iter in 1..=config.iterations {
            for particle in swarm[..active].iter_mut() {
                particle.refine(model, config.neighbor_probes, &mut rng);
            }

            swarm.sort_by(|a, b| a.cost().total_cmp(&b.cost()));
            for particle in swarm.iter_mut() {
                particle.remember_best();
            }

            let leader = &swarm[0];
            if leader.cost() < best_cost {
                best.clone_from(leader.tour());
                best_cost = leader.cost();
                global_position.copy_from_slice(leader.position());
                improvements += 1;
                debug!(iter, cost = best_cost, "global best improved");
            }

            let inertia = config.inertia(iter);
            for particle in swarm[..active].iter_mut() {
                particle.fly(
                    model,
                    &global_position,
                    inertia,
                    config.cognitive,
                    config.social,
                    &mut rng,
                );
            }

            cost_history.push(best_cost);
        }

        info!(cost = best_cost, improvements, "particle swarm finished");

        PsoResult {
            tour: best,
            cost: best_cost,
            iterations: cost_history.len(),
            improvements,
            cost_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TspError;

    #[test]
    fn test_pso_returns_valid_tour_with_matching_cost() {
        let model = DistanceModel::random_seeded(12, 10..99, 10).expect("valid");
        let config = PsoConfig::default().with_seed(42);
        let result = ParticleSwarm::new(&model, config).expect("valid").run();

        assert!(result.tour.is_valid(12));
        assert_eq!(result.iterations, 50);
        assert!((result.cost - model.tour_cost(&result.tour)).abs() < 1e-9);
        assert!(result.improvements >= 1);
    }

    #[test]
    fn test_pso_global_best_never_regresses() {
        let model = DistanceModel::random_seeded(9, 10..99, 11).expect("valid");
        let config = PsoConfig::default().with_iterations(30).with_seed(7);
        let result = ParticleSwarm::new(&model, config).expect("valid").run();

        for window in result.cost_history.windows(2) {
            assert!(window[1] <= window[0]);
        }
    }

    #[test]
    fn test_pso_improves_on_random_tours() {
        let model = DistanceModel::random_seeded(10, 10..99, 12).expect("valid");
        let mut rng = create_rng(99);
        let random_mean: f64 = (0..50)
            .map(|_| model.tour_cost(&Tour::random(10, &mut rng)))
            .sum::<f64>()
            / 50.0;

        let config = PsoConfig::default().with_seed(5);
        let result = ParticleSwarm::new(&model, config).expect("valid").run();
        assert!(
            result.cost < random_mean,
            "swarm best {} should beat random mean {random_mean}",
            result.cost
        );
    }

    #[test]
    fn test_pso_single_particle_keeps_its_tour() {
        let model = DistanceModel::random_seeded(6, 10..99, 13).expect("valid");
        let config = PsoConfig::default()
            .with_particles(1)
            .with_iterations(5)
            .with_seed(1);
        let result = ParticleSwarm::new(&model, config).expect("valid").run();
        assert_eq!(result.improvements, 1);
        assert!(result.tour.is_valid(6));
    }

    #[test]
    fn test_pso_three_locations() {
        let model = DistanceModel::random_seeded(3, 10..99, 14).expect("valid");
        let config = PsoConfig::default().with_iterations(5).with_seed(1);
        let result = ParticleSwarm::new(&model, config).expect("valid").run();
        assert!(result.tour.is_valid(3));
    }

    #[test]
    fn test_pso_deterministic_with_seed() {
        let model = DistanceModel::random_seeded(8, 10..99, 15).expect("valid");
        let config = PsoConfig::default().with_iterations(10).with_seed(3);
        let a = ParticleSwarm::new(&model, config.clone()).expect("valid").run();
        let b = ParticleSwarm::new(&model, config).expect("valid").run();
        assert_eq!(a.tour, b.tour);
        assert_eq!(a.cost_history, b.cost_history);
    }

    #[test]
    fn test_pso_rejects_degenerate_instance() {
        let model = DistanceModel::from_rows(vec![vec![0.0]]).expect("valid");
        assert_eq!(
            ParticleSwarm::new(&model, PsoConfig::default()).unwrap_err(),
            TspError::DegenerateInstance { locations: 1 }
        );
    }
}
