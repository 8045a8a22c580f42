//! Decaying tabu tenure matrix.

/// Default tenure added when a pair is marked.
pub const DEFAULT_TENURE_INCREMENT: u32 = 5;

/// Short-term memory over unordered position pairs.
///
/// A pair is tabu while its tenure is positive. Marking adds the
/// increment to the current tenure (repeated marks accumulate); a decay
/// step lowers every positive tenure by one.
///
/// # Examples
///
/// ```
/// use u_tsp::tabu::TabuMemory;
///
/// let mut memory = TabuMemory::new(5, 2);
/// memory.mark(1, 3);
/// assert!(memory.is_tabu(3, 1));
/// memory.decay();
/// memory.decay();
/// assert!(!memory.is_tabu(1, 3));
/// ```
#[derive(Debug, Clone)]
pub struct TabuMemory {
    tenures: Vec<u32>,
    size: usize,
    increment: u32,
}

impl TabuMemory {
    /// Creates an all-zero memory for indices `0..size`.
    pub fn new(size: usize, increment: u32) -> Self {
        Self {
            tenures: vec![0; size * size],
            size,
            increment,
        }
    }

    /// Remaining tenure of the pair `(a, b)`.
    pub fn tenure(&self, a: usize, b: usize) -> u32 {
        self.tenures[a * self.size + b]
    }

    pub fn is_tabu(&self, a: usize, b: usize) -> bool {
        self.tenure(a, b) > 0
    }

    /// Adds the tenure increment to `(a, b)` and `(b, a)`.
    pub fn mark(&mut self, a: usize, b: usize) {
        let size = self.size;
        self.tenures[a * size + b] += self.increment;
        if a != b {
            self.tenures[b * size + a] += self.increment;
        }
    }

    /// Lowers every positive tenure by one.
    pub fn decay(&mut self) {
        for t in self.tenures.iter_mut() {
            *t = t.saturating_sub(1);
        }
    }

    /// Number of ordered entries currently tabu.
    pub fn active(&self) -> usize {
        self.tenures.iter().filter(|&&t| t > 0).count()
    }

    pub fn clear(&mut self) {
        self.tenures.fill(0);
    }
}
