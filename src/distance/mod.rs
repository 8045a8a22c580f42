//! Distance model shared by every engine.
//!
//! A [`DistanceModel`] is built once per instance, either by sampling
//! integer costs uniformly or from a caller-supplied matrix, and is then
//! read-only. Engines borrow it, so one model can serve several runs.

mod model;

pub use model::{DistanceModel, DEFAULT_RANGE};
