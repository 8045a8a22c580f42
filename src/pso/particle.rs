//! A single swarm member.

use rand::Rng;

use crate::distance::DistanceModel;
use crate::random::{distinct_pair, uniform_signed_unit, uniform_unit};
use crate::tour::Tour;

/// A particle: a permutation tour plus the continuous PSO state that
/// decides how strongly the tour is perturbed.
///
/// Position, velocity and personal-best position all have one dimension
/// per non-depot location.
#[derive(Debug, Clone)]
pub struct Particle {
    tour: Tour,
    cost: f64,
    position: Vec<f64>,
    velocity: Vec<f64>,
    best_position: Vec<f64>,
    best_cost: f64,
}

impl Particle {
    /// Random tour, position `0, 1, ..., n-2`, velocity `~ U(-1, 1)`.
    pub(crate) fn new<R: Rng>(model: &DistanceModel, rng: &mut R) -> Self {
        let tour = Tour::random(model.size(), rng);
        let cost = model.tour_cost(&tour);
        let dimensions = model.size() - 1;
        let position: Vec<f64> = (0..dimensions).map(|d| d as f64).collect();
        let velocity = (0..dimensions).map(|_| uniform_signed_unit(rng)).collect();

        Self {
            tour,
            cost,
            best_position: position.clone(),
            position,
            velocity,
            best_cost: cost,
        }
    }

    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Cost of the particle's current tour.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn position(&self) -> &[f64] {
        &self.position
    }

    pub fn velocity(&self) -> &[f64] {
        &self.velocity
    }

    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Lowest tour cost this particle has held at a ranking step.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Neighbor search: `probes` random interior swaps, each kept only if
    /// it strictly lowers the tour cost. Returns `true` if anything was kept.
    pub(crate) fn refine<R: Rng>(
        &mut self,
        model: &DistanceModel,
        probes: usize,
        rng: &mut R,
    ) -> bool {
        let interior = self.tour.interior();
        let mut improved = false;

        for _ in 0..probes {
            let (a, b) = distinct_pair(rng, interior.start, interior.end);
            self.tour.swap(a, b);
            let cost = model.tour_cost(&self.tour);
            if cost < self.cost {
                self.cost = cost;
                improved = true;
            } else {
                self.tour.swap(a, b);
            }
        }
        improved
    }

    /// Moves the personal-best anchor here if the current tour beats it.
    pub(crate) fn remember_best(&mut self) {
        if self.cost < self.best_cost {
            self.best_cost = self.cost;
            self.best_position.clone_from(&self.position);
        }
    }

    /// Standard PSO velocity and position update, followed by the discrete
    /// perturbation: each dimension applies `trunc(|x' - x|)` random swaps
    /// to the tour, capped at the number of interior positions.
    pub(crate) fn fly<R: Rng>(
        &mut self,
        model: &DistanceModel,
        global_best: &[f64],
        inertia: f64,
        cognitive: f64,
        social: f64,
        rng: &mut R,
    ) {
        let max_swaps = self.tour.interior().len();

        for d in 0..self.position.len() {
            let r1 = uniform_unit(rng);
            let r2 = uniform_unit(rng);
            let x = self.position[d];

            let v = inertia * self.velocity[d]
                + cognitive * r1 * (self.best_position[d] - x)
                + social * r2 * (global_best[d] - x);
            let next = x + v;

            self.velocity[d] = v;
            self.position[d] = next;

            // `as` saturates: NaN -> 0, +inf -> usize::MAX.
            let swaps = ((next - x).abs() as usize).min(max_swaps);
            self.scramble(swaps, rng);
        }

        self.cost = model.tour_cost(&self.tour);
    }

    fn scramble<R: Rng>(&mut self, swaps: usize, rng: &mut R) {
        let interior = self.tour.interior();
        for _ in 0..swaps {
            let (a, b) = distinct_pair(rng, interior.start, interior.end);
            self.tour.swap(a, b);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn model() -> DistanceModel {
        DistanceModel::random_seeded(7, 10..99, 21).expect("valid")
    }

    #[test]
    fn test_new_particle_state() {
        let model = model();
        let mut rng = create_rng(1);
        let p = Particle::new(&model, &mut rng);

        assert!(p.tour().is_valid(7));
        assert_eq!(p.position(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(p.best_position(), p.position());
        assert_eq!(p.velocity().len(), 6);
        assert!(p.velocity().iter().all(|v| (-1.0..1.0).contains(v)));
        assert_eq!(p.cost(), model.tour_cost(p.tour()));
    }

    #[test]
    fn test_refine_never_worsens() {
        let model = model();
        let mut rng = create_rng(2);
        let mut p = Particle::new(&model, &mut rng);
        let before = p.cost();
        p.refine(&model, 120, &mut rng);
        assert!(p.cost() <= before);
        assert_eq!(p.cost(), model.tour_cost(p.tour()));
        assert!(p.tour().is_valid(7));
    }

    #[test]
    fn test_fly_with_resting_state_keeps_tour() {
        let model = model();
        let mut rng = create_rng(3);
        let mut p = Particle::new(&model, &mut rng);
        let tour = p.tour().clone();
        let anchor = p.position().to_vec();

        // No inertia and no pull: v' = 0 everywhere, so no swaps happen.
        p.fly(&model, &anchor, 0.0, 0.0, 0.0, &mut rng);
        assert_eq!(p.tour(), &tour);
        assert!(p.velocity().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_fly_moves_position_by_velocity() {
        let model = model();
        let mut rng = create_rng(4);
        let mut p = Particle::new(&model, &mut rng);
        let before = p.position().to_vec();
        let anchor = p.position().to_vec();

        p.fly(&model, &anchor, 0.4, 2.0, 2.0, &mut rng);
        for d in 0..before.len() {
            assert!((p.position()[d] - (before[d] + p.velocity()[d])).abs() < 1e-12);
        }
        assert!(p.tour().is_valid(7));
        assert_eq!(p.cost(), model.tour_cost(p.tour()));
    }

    #[test]
    fn test_remember_best_tracks_improvement() {
        let model = model();
        let mut rng = create_rng(5);
        let mut p = Particle::new(&model, &mut rng);
        p.best_cost = f64::INFINITY;
        p.position[0] = 42.0;
        p.remember_best();
        assert_eq!(p.best_cost(), p.cost());
        assert_eq!(p.best_position()[0], 42.0);
    }
}
