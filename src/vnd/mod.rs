//! Variable Neighborhood Descent (VND).
//!
//! Deterministic descent over an ordered list of neighborhood operators.
//! Each operator hill-climbs the tour to its own local optimum; any
//! improvement sends the search back to the first operator, so the result
//! is a local optimum with respect to every operator in the list.
//!
//! # References
//!
//! - Mladenović, N. & Hansen, P. (1997). "Variable neighborhood search",
//!   *Computers & Operations Research* 24(11), 1097-1100.
//! - Croes, G. A. (1958). "A method for solving traveling-salesman problems",
//!   *Operations Research* 6(6), 791-812.

mod config;
mod neighborhood;
mod runner;

pub use config::VndConfig;
pub use neighborhood::{
    insert_delta, inverse_delta, swap_delta, Move, Neighborhood, IMPROVEMENT_EPSILON,
};
pub use runner::{VariableNeighborhoodDescent, VndResult};
