//! Flat square matrix indexed by team pairs.

/// A `size × size` table stored row-major in one vector.
///
/// Used for the played-pair table and the matchup history, both of which
/// are read on every away-candidate check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> PairMatrix<T> {
    /// Creates a matrix with every cell set to `value`.
    pub fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Writes `value` at both `(a, b)` and `(b, a)`.
    pub fn set_symmetric(&mut self, a: usize, b: usize, value: T) {
        self.set(b, a, value.clone());
        self.set(a, b, value);
    }
}

impl<T> PairMatrix<T> {
    /// Creates a matrix from a cell initializer.
    pub fn from_fn(size: usize, mut init: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(size * size);
        for a in 0..size {
            for b in 0..size {
                cells.push(init(a, b));
            }
        }
        Self { size, cells }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell `(a, b)`.
    #[inline]
    pub fn get(&self, a: usize, b: usize) -> &T {
        &self.cells[a * self.size + b]
    }

    /// Overwrites cell `(a, b)`.
    #[inline]
    pub fn set(&mut self, a: usize, b: usize, value: T) {
        self.cells[a * self.size + b] = value;
    }
}
