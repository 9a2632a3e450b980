//! A fixed-size 2-D grid used as the backing store for every DP matrix
//! in this crate, together with the shared "positive infinity" sentinel.

use num_traits::Float;

use crate::error::{Error, Result};

/// Sentinel standing in for "infinite distance / unreachable / no cost yet".
///
/// This is deliberately the largest *finite* `f64`, not IEEE infinity:
/// adding a finite value to the sentinel stays ordered above every
/// legitimate result instead of collapsing to `inf`/`NaN`, and algorithms
/// can test cells against the sentinel with exact equality.
pub const INFINITY: f64 = f64::MAX;

/// Epsilon used for approximate float equality across the crate.
pub const EPSILON: f64 = 1e-5;

/// Returns true when `a` and `b` differ by less than `eps`.
///
/// # Examples
///
/// ```
/// use dynprog::table::nearly_equal;
///
/// assert!(nearly_equal(0.1_f64 + 0.2, 0.3, 1e-9));
/// assert!(!nearly_equal(1.0_f64, 1.1, 1e-3));
/// ```
pub fn nearly_equal<T: Float>(a: T, b: T, eps: T) -> bool {
    (a - b).abs() < eps
}

/// A rows x columns grid over a flat row-major `Vec`.
///
/// Dimensions are fixed at creation; there is no resizing. Element access
/// is by zero-based `(row, column)` index. Bounds are checked with
/// `debug_assert!` only — callers are expected to stay in range.
#[derive(Debug, Clone, PartialEq)]
pub struct Table<T: Copy> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy> Table<T> {
    /// Creates a `rows` x `cols` table with every cell set to `fill`.
    ///
    /// Returns `Error::InvalidDimensions` if either dimension is zero.
    pub fn new(rows: usize, cols: usize, fill: T) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            data: vec![fill; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns the value at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> T {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col]
    }

    /// Writes `value` at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        debug_assert!(row < self.rows && col < self.cols);
        self.data[row * self.cols + col] = value;
    }

    /// Resets every cell to `value`.
    pub fn fill(&mut self, value: T) {
        for cell in &mut self.data {
            *cell = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_dimensions() {
        assert_eq!(
            Table::<f64>::new(0, 3, 0.0),
            Err(Error::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            Table::<f64>::new(3, 0, 0.0),
            Err(Error::InvalidDimensions { rows: 3, cols: 0 })
        );
    }

    #[test]
    fn test_get_set_fill() {
        let mut t = Table::new(2, 3, 0.0).unwrap();
        assert_eq!(t.rows(), 2);
        assert_eq!(t.cols(), 3);

        t.set(1, 2, 42.0);
        assert_eq!(t.get(1, 2), 42.0);
        assert_eq!(t.get(0, 0), 0.0);

        t.fill(7.0);
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(t.get(r, c), 7.0);
            }
        }
    }

    #[test]
    fn test_sentinel_is_finite_and_ordered() {
        // The sentinel must stay comparable: adding a finite weight to it
        // cannot produce NaN, and it must still dominate real distances.
        assert!(INFINITY.is_finite());
        let bumped = INFINITY + 5.0;
        assert!(!bumped.is_nan());
        assert!(bumped >= INFINITY);
        assert!(INFINITY > 1e300);
    }

    #[test]
    fn test_sentinel_exact_equality_survives_copies() {
        let mut t = Table::new(2, 2, INFINITY).unwrap();
        t.set(0, 1, 3.0);
        assert_eq!(t.get(1, 0), INFINITY);
        assert_ne!(t.get(0, 1), INFINITY);
    }

    #[test]
    fn test_nearly_equal() {
        assert!(nearly_equal(1.0_f64, 1.0 + EPSILON / 2.0, EPSILON));
        assert!(!nearly_equal(1.0_f64, 1.0 + EPSILON * 2.0, EPSILON));
    }
}
