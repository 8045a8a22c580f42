//! Depot-anchored tour representation.

use std::fmt;
use std::ops::Index;

use rand::Rng;

use crate::error::{Result, TspError};
use crate::random::shuffle;

/// Location index of the depot.
pub const DEPOT: usize = 0;

/// A closed tour over `n` locations, stored as `n + 1` location indices.
///
/// Position 0 and position `n` always hold the depot; positions `1..n`
/// hold a permutation of `1..n`. Every mutator works on interior
/// positions only, so the invariant holds for the whole life of the
/// value.
///
/// # Examples
///
/// ```
/// use u_tsp::tour::Tour;
///
/// let mut tour = Tour::identity(4);
/// assert_eq!(tour.as_slice(), &[0, 1, 2, 3, 0]);
/// tour.swap(1, 3);
/// assert_eq!(tour.as_slice(), &[0, 3, 2, 1, 0]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<usize>", into = "Vec<usize>")
)]
pub struct Tour(Vec<usize>);

impl Tour {
    /// The tour `0, 1, 2, ..., n-1, 0`.
    ///
    /// # Panics
    ///
    /// Panics if `locations` is 0; every tour holds at least the depot.
    pub fn identity(locations: usize) -> Self {
        assert!(locations >= 1, "a tour needs at least the depot");
        let mut path = Vec::with_capacity(locations + 1);
        path.extend(0..locations);
        path.push(DEPOT);
        Tour(path)
    }

    /// A uniformly random tour: interior locations shuffled, depot at both ends.
    ///
    /// # Panics
    ///
    /// Panics if `locations` is 0.
    pub fn random<R: Rng>(locations: usize, rng: &mut R) -> Self {
        assert!(locations >= 1, "a tour needs at least the depot");
        let mut interior: Vec<usize> = (1..locations).collect();
        shuffle(&mut interior, rng);

        let mut path = Vec::with_capacity(locations + 1);
        path.push(DEPOT);
        path.extend(interior);
        path.push(DEPOT);
        Tour(path)
    }

    /// Wraps an explicit sequence after checking that it is a valid tour
    /// over `locations` locations.
    pub fn from_path(path: Vec<usize>, locations: usize) -> Result<Self> {
        if locations == 0 {
            return Err(TspError::InvalidTour(
                "a tour needs at least the depot".into(),
            ));
        }
        if path.len() != locations + 1 {
            return Err(TspError::InvalidTour(format!(
                "expected {} entries for {} locations, got {}",
                locations + 1,
                locations,
                path.len()
            )));
        }
        if path[0] != DEPOT || path[locations] != DEPOT {
            return Err(TspError::InvalidTour(
                "tour must start and end at the depot".into(),
            ));
        }

        let mut seen = vec![false; locations];
        for &loc in &path[1..locations] {
            if loc == DEPOT || loc >= locations {
                return Err(TspError::InvalidTour(format!(
                    "location {loc} is not an interior location"
                )));
            }
            if seen[loc] {
                return Err(TspError::InvalidTour(format!(
                    "location {loc} appears more than once"
                )));
            }
            seen[loc] = true;
        }
        Ok(Tour(path))
    }

    /// Number of distinct locations (depot included).
    pub fn locations(&self) -> usize {
        self.0.len() - 1
    }

    /// Length of the underlying sequence (`locations + 1`).
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`: a tour holds at least the depot twice.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Positions that may be moved: `1..locations`.
    pub fn interior(&self) -> std::ops::Range<usize> {
        1..self.locations()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// Exchanges the locations at two interior positions.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.check_interior(i);
        self.check_interior(j);
        self.0.swap(i, j);
    }

    /// Reverses the interior segment `from..=to`.
    pub fn reverse(&mut self, from: usize, to: usize) {
        self.check_interior(from);
        self.check_interior(to);
        self.0[from..=to].reverse();
    }

    /// Removes the location at interior position `from` and reinserts it
    /// so that it ends up at interior position `to`.
    pub fn relocate(&mut self, from: usize, to: usize) {
        self.check_interior(from);
        self.check_interior(to);
        let loc = self.0.remove(from);
        self.0.insert(to, loc);
    }

    /// Returns `true` if this is a valid tour over `locations` locations.
    pub fn is_valid(&self, locations: usize) -> bool {
        Tour::from_path(self.0.clone(), locations).is_ok()
    }

    fn check_interior(&self, pos: usize) {
        assert!(
            pos >= 1 && pos < self.locations(),
            "position {pos} is not interior for a tour over {} locations",
            self.locations()
        );
    }
}

impl TryFrom<Vec<usize>> for Tour {
    type Error = TspError;

    /// Validates `path` as a tour over `path.len() - 1` locations.
    fn try_from(path: Vec<usize>) -> Result<Self> {
        let locations = path.len().saturating_sub(1);
        Tour::from_path(path, locations)
    }
}

impl From<Tour> for Vec<usize> {
    fn from(tour: Tour) -> Self {
        tour.0
    }
}

impl Index<usize> for Tour {
    type Output = usize;

    fn index(&self, pos: usize) -> &usize {
        &self.0[pos]
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, loc) in self.0.iter().enumerate() {
            if k > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{loc}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[test]
    fn test_identity() {
        assert_eq!(Tour::identity(5).as_slice(), &[0, 1, 2, 3, 4, 0]);
        assert_eq!(Tour::identity(5).locations(), 5);
        assert_eq!(Tour::identity(5).interior(), 1..5);
    }

    #[test]
    fn test_random_is_valid() {
        let mut rng = create_rng(42);
        for n in 1..12 {
            let tour = Tour::random(n, &mut rng);
            assert!(tour.is_valid(n), "invalid random tour {tour}");
        }
    }

    #[test]
    fn test_from_path_rejects_bad_sequences() {
        assert!(Tour::from_path(vec![0, 1, 2, 0], 3).is_ok());
        assert!(Tour::from_path(vec![0, 1, 1, 0], 3).is_err());
        assert!(Tour::from_path(vec![1, 0, 2, 1], 3).is_err());
        assert!(Tour::from_path(vec![0, 1, 3, 0], 3).is_err());
        assert!(Tour::from_path(vec![0, 1, 2], 3).is_err());
        assert!(Tour::from_path(vec![0, 2, 0, 0], 3).is_err());
    }

    #[test]
    fn test_reverse_segment() {
        let mut tour = Tour::identity(6);
        tour.reverse(2, 4);
        assert_eq!(tour.as_slice(), &[0, 1, 4, 3, 2, 5, 0]);
    }

    #[test]
    fn test_relocate_forward_and_backward() {
        let mut tour = Tour::identity(6);
        tour.relocate(1, 4);
        assert_eq!(tour.as_slice(), &[0, 2, 3, 4, 1, 5, 0]);

        let mut tour = Tour::identity(6);
        tour.relocate(5, 2);
        assert_eq!(tour.as_slice(), &[0, 1, 5, 2, 3, 4, 0]);
    }

    #[test]
    #[should_panic(expected = "not interior")]
    fn test_swap_refuses_depot_position() {
        let mut tour = Tour::identity(4);
        tour.swap(0, 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tour::identity(3).to_string(), "0 -> 1 -> 2 -> 0");
    }

    #[test]
    #[should_panic(expected = "at least the depot")]
    fn test_identity_needs_a_location() {
        Tour::identity(0);
    }

    #[test]
    fn test_zero_locations_rejected() {
        assert!(Tour::from_path(vec![0], 0).is_err());
        assert!(!Tour::identity(1).is_valid(0));
        assert!(!Tour::identity(1).is_empty());
    }

    #[test]
    fn test_try_from_vec_validates() {
        let tour = Tour::try_from(vec![0, 2, 1, 0]).expect("valid");
        assert_eq!(tour.locations(), 3);
        assert!(matches!(
            Tour::try_from(vec![0, 1, 1, 0]),
            Err(TspError::InvalidTour(_))
        ));
        assert!(Tour::try_from(Vec::<usize>::new()).is_err());
        assert_eq!(Vec::from(tour), vec![0, 2, 1, 0]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_and_rejection() {
        let tour = Tour::from_path(vec![0, 3, 1, 2, 0], 4).expect("valid");
        let json = serde_json::to_string(&tour).expect("serialize");
        assert_eq!(json, "[0,3,1,2,0]");
        let back: Tour = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, tour);

        assert!(serde_json::from_str::<Tour>("[0,1,1,0]").is_err());
        assert!(serde_json::from_str::<Tour>("[1,0,2,1]").is_err());
    }
}
