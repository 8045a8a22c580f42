//! Discrete Particle Swarm Optimization (PSO).
//!
//! Classic PSO moves particles through a continuous space. Here each
//! particle also carries a permutation tour, and the magnitude of its
//! continuous movement decides how many random swaps are applied to that
//! tour. A short random neighbor search per particle and iteration pulls
//! the tours toward local optima in between.
//!
//! # References
//!
//! - Kennedy, J. & Eberhart, R. (1995). "Particle swarm optimization"
//! - Shi, Y. & Eberhart, R. (1998). "A modified particle swarm optimizer"
//!   (linearly decreasing inertia weight)

mod config;
mod particle;
mod runner;

pub use config::PsoConfig;
pub use particle::Particle;
pub use runner::{ParticleSwarm, PsoResult};
