//! Neighborhood operators with delta-cost evaluation.
//!
//! All deltas assume a symmetric distance model. Positions refer to the
//! tour sequence: `0` and `n` hold the depot, `1..n` are interior.

use std::fmt;

use crate::distance::DistanceModel;
use crate::tour::Tour;

/// A move must lower the cost by more than this to count as improving.
pub const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Neighborhood operator types, in the default escalation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Neighborhood {
    /// Reverse a segment (2-opt). The depot's outgoing edge is kept.
    Inverse,
    /// Remove one location and reinsert it between two others.
    Insert,
    /// Exchange two locations.
    Swap,
}

impl Neighborhood {
    /// `Inverse`, `Insert`, `Swap`.
    pub const ALL: [Neighborhood; 3] = [
        Neighborhood::Inverse,
        Neighborhood::Insert,
        Neighborhood::Swap,
    ];

    /// Scans positions in order and returns the first move whose delta is
    /// below `-IMPROVEMENT_EPSILON`.
    pub fn first_improving(self, model: &DistanceModel, tour: &Tour) -> Option<Move> {
        let n = tour.locations();
        match self {
            Neighborhood::Inverse => {
                for i in 1..n.saturating_sub(2) {
                    for j in (i + 2)..n {
                        let delta = inverse_delta(model, tour, i, j);
                        if delta < -IMPROVEMENT_EPSILON {
                            return Some(Move::new(self, i, j, delta));
                        }
                    }
                }
            }
            Neighborhood::Insert => {
                for i in 1..n {
                    for j in 0..n {
                        if j == i || j + 1 == i {
                            continue;
                        }
                        let delta = insert_delta(model, tour, i, j);
                        if delta < -IMPROVEMENT_EPSILON {
                            return Some(Move::new(self, i, j, delta));
                        }
                    }
                }
            }
            Neighborhood::Swap => {
                for i in 1..n {
                    for j in (i + 1)..n {
                        let delta = swap_delta(model, tour, i, j);
                        if delta < -IMPROVEMENT_EPSILON {
                            return Some(Move::new(self, i, j, delta));
                        }
                    }
                }
            }
        }
        None
    }

    /// First-improvement hill climbing to a local optimum of this
    /// neighborhood. Returns the number of moves applied.
    pub fn hill_climb(self, model: &DistanceModel, tour: &mut Tour) -> usize {
        let mut moves = 0;
        while let Some(mv) = self.first_improving(model, tour) {
            mv.apply(tour);
            moves += 1;
        }
        moves
    }
}

impl fmt::Display for Neighborhood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Neighborhood::Inverse => "inverse",
            Neighborhood::Insert => "insert",
            Neighborhood::Swap => "swap",
        };
        f.write_str(name)
    }
}

/// A concrete move in one of the neighborhoods.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Move {
    pub kind: Neighborhood,
    pub i: usize,
    pub j: usize,
    /// Cost change the move causes.
    pub delta: f64,
}

impl Move {
    fn new(kind: Neighborhood, i: usize, j: usize, delta: f64) -> Self {
        Self { kind, i, j, delta }
    }

    /// Applies the move to `tour`.
    pub fn apply(&self, tour: &mut Tour) {
        match self.kind {
            Neighborhood::Inverse => tour.reverse(self.i + 1, self.j),
            Neighborhood::Insert => {
                // After removal every position past `i` shifts left by one.
                let to = if self.j > self.i { self.j } else { self.j + 1 };
                tour.relocate(self.i, to);
            }
            Neighborhood::Swap => tour.swap(self.i, self.j),
        }
    }
}

/// Cost change of reversing `t[i+1..=j]`, which replaces edges
/// `(t[i], t[i+1])` and `(t[j], t[j+1])` with `(t[i], t[j])` and
/// `(t[i+1], t[j+1])`.
///
/// Requires `1 <= i` and `i + 2 <= j <= n - 1`.
pub fn inverse_delta(model: &DistanceModel, tour: &Tour, i: usize, j: usize) -> f64 {
    let (a, na) = (tour[i], tour[i + 1]);
    let (b, nb) = (tour[j], tour[j + 1]);
    model.cost(a, b) + model.cost(na, nb) - model.cost(a, na) - model.cost(b, nb)
}

/// Cost change of moving the location at interior position `i` so that
/// it sits between `t[j]` and `t[j+1]`.
///
/// Requires `1 <= i <= n - 1`, `0 <= j <= n - 1` and `j ∉ {i - 1, i}`.
pub fn insert_delta(model: &DistanceModel, tour: &Tour, i: usize, j: usize) -> f64 {
    let c = tour[i];
    let (prev, next) = (tour[i - 1], tour[i + 1]);
    let (left, right) = (tour[j], tour[j + 1]);

    let removal = model.cost(prev, next) - model.cost(prev, c) - model.cost(c, next);
    let insertion = model.cost(left, c) + model.cost(c, right) - model.cost(left, right);
    removal + insertion
}

/// Cost change of exchanging the locations at interior positions `i < j`.
pub fn swap_delta(model: &DistanceModel, tour: &Tour, i: usize, j: usize) -> f64 {
    let (a, b) = (tour[i], tour[j]);
    let (prev_a, next_b) = (tour[i - 1], tour[j + 1]);

    if j == i + 1 {
        return model.cost(prev_a, b) + model.cost(a, next_b)
            - model.cost(prev_a, a)
            - model.cost(b, next_b);
    }

    let (next_a, prev_b) = (tour[i + 1], tour[j - 1]);
    let removed = model.cost(prev_a, a)
        + model.cost(a, next_a)
        + model.cost(prev_b, b)
        + model.cost(b, next_b);
    let added = model.cost(prev_a, b)
        + model.cost(b, next_a)
        + model.cost(prev_b, a)
        + model.cost(a, next_b);
    added - removed
}
