//! Simulated Annealing (SA).
//!
//! A single-trajectory metaheuristic inspired by the physical annealing
//! process. Worse tours are accepted with a probability that shrinks as
//! the temperature cools, which lets the search leave local optima early
//! on and settle later.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Cerny (1985), "Thermodynamical Approach to the Travelling Salesman Problem"

mod config;
mod runner;

pub use config::{SaConfig, MAX_COOLING_STEPS};
pub use runner::{acceptance_probability, SaResult, SimulatedAnnealing};
