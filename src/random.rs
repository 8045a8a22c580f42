//! Random sampling helpers shared by all engines.
//!
//! There is no process-wide generator. Each engine run owns an [`StdRng`]
//! created from its config seed, which keeps runs reproducible and lets
//! independent engines execute on different threads without sharing
//! state.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns `seed` or, when absent, a fresh seed from the thread-local OS-seeded generator.
///
/// Engines log the resolved value so that unseeded runs can be replayed.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(rand::random)
}

/// Shuffles a slice in place (Fisher-Yates).
pub fn shuffle<T, R: Rng>(items: &mut [T], rng: &mut R) {
    items.shuffle(rng);
}

/// Uniform integer in `[low, high)`.
///
/// # Panics
///
/// Panics if the range is empty.
pub fn uniform_index<R: Rng>(rng: &mut R, low: usize, high: usize) -> usize {
    rng.random_range(low..high)
}

/// Uniform real in `[0, 1)`.
pub fn uniform_unit<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0.0..1.0)
}

/// Uniform real in `[-1, 1)`.
pub fn uniform_signed_unit<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(-1.0..1.0)
}

/// Draws two different indices from `[low, high)`.
///
/// The second index is drawn from the `high - low - 1` values left after
/// the first, so the call always finishes in two draws.
///
/// # Panics
///
/// Panics if fewer than two values are available. Engines check the
/// instance size at construction so this never triggers from a run.
pub fn distinct_pair<R: Rng>(rng: &mut R, low: usize, high: usize) -> (usize, usize) {
    assert!(
        high >= low + 2,
        "distinct_pair needs at least two candidates, got [{low}, {high})"
    );
    let a = rng.random_range(low..high);
    let mut b = rng.random_range(low..high - 1);
    if b >= a {
        b += 1;
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        for _ in 0..32 {
            assert_eq!(uniform_index(&mut a, 0, 1000), uniform_index(&mut b, 0, 1000));
        }
    }

    #[test]
    fn test_resolve_seed_keeps_explicit() {
        assert_eq!(resolve_seed(Some(99)), 99);
    }

    #[test]
    fn test_distinct_pair_always_distinct_and_in_range() {
        let mut rng = create_rng(42);
        for _ in 0..10_000 {
            let (a, b) = distinct_pair(&mut rng, 1, 3);
            assert_ne!(a, b);
            assert!((1..3).contains(&a));
            assert!((1..3).contains(&b));
        }
    }

    #[test]
    fn test_distinct_pair_covers_all_values() {
        let mut rng = create_rng(3);
        let mut seen = [false; 6];
        for _ in 0..2_000 {
            let (a, b) = distinct_pair(&mut rng, 1, 6);
            seen[a] = true;
            seen[b] = true;
        }
        assert!(seen[1..6].iter().all(|&s| s));
        assert!(!seen[0]);
    }

    #[test]
    #[should_panic(expected = "at least two candidates")]
    fn test_distinct_pair_rejects_single_candidate() {
        let mut rng = create_rng(1);
        distinct_pair(&mut rng, 1, 2);
    }

    #[test]
    fn test_unit_ranges() {
        let mut rng = create_rng(11);
        for _ in 0..1_000 {
            let u = uniform_unit(&mut rng);
            assert!((0.0..1.0).contains(&u));
            let s = uniform_signed_unit(&mut rng);
            assert!((-1.0..1.0).contains(&s));
        }
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = create_rng(5);
        let mut items: Vec<usize> = (0..20).collect();
        shuffle(&mut items, &mut rng);
        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }
}
