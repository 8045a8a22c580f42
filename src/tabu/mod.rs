//! Tabu Search (TS).
//!
//! A single-trajectory search over position exchanges. Accepted moves are
//! remembered in a decaying [`TabuMemory`] so the same exchange cannot be
//! accepted again until its tenure has run out.
//!
//! # References
//!
//! - Glover, F. (1989). "Tabu Search—Part I", *ORSA Journal on Computing* 1(3), 190-206.
//! - Glover, F. (1990). "Tabu Search—Part II", *ORSA Journal on Computing* 2(1), 4-32.

mod config;
mod memory;
mod runner;

pub use config::TabuConfig;
pub use memory::{TabuMemory, DEFAULT_TENURE_INCREMENT};
pub use runner::{TabuResult, TabuSearch};
