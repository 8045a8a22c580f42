//! Dense symmetric distance matrix.

use std::fmt;
use std::ops::Range;

use rand::Rng;

use crate::error::{Result, TspError};
use crate::random::create_rng;
use crate::tour::Tour;

/// Default sampling range for random instances, `[10, 99)`.
pub const DEFAULT_RANGE: Range<u32> = 10..99;

const SYMMETRY_TOLERANCE: f64 = 1e-9;

/// An `n × n` symmetric distance matrix stored in row-major order.
///
/// Invariants checked at construction: square, finite, non-negative,
/// zero diagonal, symmetric. Because the matrix is symmetric, a tour and
/// its reversal always have the same cost.
///
/// # Examples
///
/// ```
/// use u_tsp::distance::DistanceModel;
/// use u_tsp::tour::Tour;
///
/// let model = DistanceModel::from_rows(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 4.0],
///     vec![9.0, 4.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(model.size(), 3);
/// assert_eq!(model.tour_cost(&Tour::identity(3)), 2.0 + 4.0 + 9.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawDistanceModel", into = "RawDistanceModel")
)]
pub struct DistanceModel {
    data: Vec<f64>,
    size: usize,
}

/// Serialized form of [`DistanceModel`]; re-validated on the way in.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawDistanceModel {
    size: usize,
    data: Vec<f64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDistanceModel> for DistanceModel {
    type Error = TspError;

    fn try_from(raw: RawDistanceModel) -> Result<Self> {
        DistanceModel::from_flat(raw.size, raw.data)
    }
}

#[cfg(feature = "serde")]
impl From<DistanceModel> for RawDistanceModel {
    fn from(model: DistanceModel) -> Self {
        RawDistanceModel {
            size: model.size,
            data: model.data,
        }
    }
}

impl DistanceModel {
    /// Samples an integer cost uniformly from `range` for every unordered
    /// pair and mirrors it onto both triangle halves.
    pub fn random<R: Rng>(size: usize, range: Range<u32>, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(TspError::InvalidMatrix("size must be at least 1".into()));
        }
        if range.is_empty() {
            return Err(TspError::InvalidMatrix(format!(
                "empty sampling range {}..{}",
                range.start, range.end
            )));
        }

        let mut data = vec![0.0; size * size];
        for i in 0..size {
            for j in (i + 1)..size {
                let d = f64::from(rng.random_range(range.clone()));
                data[i * size + j] = d;
                data[j * size + i] = d;
            }
        }
        Ok(Self { data, size })
    }

    /// [`DistanceModel::random`] with a generator created from `seed`.
    pub fn random_seeded(size: usize, range: Range<u32>, seed: u64) -> Result<Self> {
        let mut rng = create_rng(seed);
        Self::random(size, range, &mut rng)
    }

    /// Builds a model from explicit rows, e.g. a matrix fetched by the caller
    /// from an external store.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != size) {
            return Err(TspError::InvalidMatrix(format!(
                "matrix is not square: row {r} has {} entries, expected {size}",
                row.len()
            )));
        }
        let data: Vec<f64> = rows.into_iter().flatten().collect();
        Self::from_flat(size, data)
    }

    /// Builds a model from a row-major buffer of `size * size` entries.
    pub fn from_flat(size: usize, data: Vec<f64>) -> Result<Self> {
        if size == 0 {
            return Err(TspError::InvalidMatrix("matrix is empty".into()));
        }
        if data.len() != size * size {
            return Err(TspError::InvalidMatrix(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }

        let model = Self { data, size };
        model.validate()?;
        Ok(model)
    }

    fn validate(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.cost(i, j);
                if !d.is_finite() {
                    return Err(TspError::InvalidMatrix(format!(
                        "entry ({i}, {j}) is not finite"
                    )));
                }
                if d < 0.0 {
                    return Err(TspError::InvalidMatrix(format!(
                        "entry ({i}, {j}) is negative: {d}"
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(TspError::InvalidMatrix(format!(
                        "diagonal entry ({i}, {i}) is {d}, expected 0"
                    )));
                }
                if j > i && (d - self.cost(j, i)).abs() > SYMMETRY_TOLERANCE {
                    return Err(TspError::InvalidMatrix(format!(
                        "entries ({i}, {j}) = {d} and ({j}, {i}) = {} differ",
                        self.cost(j, i)
                    )));
                }
            }
        }
        Ok(())
    }

    /// Distance between locations `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn cost(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Number of distinct locations (depot included).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Sum of consecutive edge costs along a location sequence.
    pub fn path_cost(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.cost(w[0], w[1])).sum()
    }

    /// Total cost of a closed tour.
    ///
    /// The closing depot is the last element of the tour, so the return
    /// edge is counted exactly once.
    pub fn tour_cost(&self, tour: &Tour) -> f64 {
        self.path_cost(tour.as_slice())
    }

    /// Returns `true` if the matrix is symmetric within `tol`.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.cost(i, j) - self.cost(j, i)).abs() <= tol)
        })
    }

    /// Fails with [`TspError::DegenerateInstance`] unless there are at least
    /// two non-depot locations, the minimum for any swap-based move.
    pub fn require_searchable(&self) -> Result<()> {
        if self.size < 3 {
            return Err(TspError::DegenerateInstance {
                locations: self.size,
            });
        }
        Ok(())
    }

    /// Fails with [`TspError::InvalidTour`] unless `tour` is a
    /// depot-anchored permutation of exactly this model's locations.
    pub fn check_tour(&self, tour: &Tour) -> Result<()> {
        if tour.locations() != self.size {
            return Err(TspError::InvalidTour(format!(
                "tour covers {} locations, model has {}",
                tour.locations(),
                self.size
            )));
        }
        Tour::from_path(tour.as_slice().to_vec(), self.size).map(|_| ())
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.size..(i + 1) * self.size]
    }
}

impl fmt::Display for DistanceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.size {
            let row: Vec<String> = self.row(i).iter().map(|d| format!("{d:>6}")).collect();
            writeln!(f, "{}", row.join(" "))?;
        }
        Ok(())
    }
}
