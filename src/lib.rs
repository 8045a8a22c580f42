//! Metaheuristic engines for the symmetric Travelling Salesman Problem.
//!
//! Every engine searches depot-anchored tours over a shared
//! [`DistanceModel`](distance::DistanceModel):
//!
//! - **Tabu Search (TS)**: deterministic sweeps over position exchanges,
//!   with a decaying tenure matrix that forbids recently used exchanges.
//! - **Simulated Annealing (SA)**: random swaps accepted by the Metropolis
//!   criterion under a geometric cooling schedule.
//! - **Particle Swarm Optimization (PSO)**: a discrete swarm where the
//!   magnitude of each particle's continuous flight decides how many
//!   random swaps its tour receives.
//! - **Variable Neighborhood Descent (VND)**: first-improvement descent
//!   over the inverse, insert and swap neighborhoods, restarting from the
//!   first neighborhood after every improvement.
//!
//! The [`suite`] module runs any subset of the engines on one instance
//! and reports their tours side by side.
//!
//! # Architecture
//!
//! Engines are constructed from a borrowed model plus a config; construction
//! validates both and is the only fallible step. `run()` is synchronous and
//! returns a result value. Each engine draws from its own seeded generator,
//! so a fixed seed reproduces a run exactly. The crate emits `tracing`
//! events and never installs a subscriber.

pub mod distance;
pub mod error;
pub mod pso;
pub mod random;
pub mod sa;
pub mod suite;
pub mod tabu;
pub mod tour;
pub mod vnd;

pub use error::{Result, TspError};
