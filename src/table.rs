//! Dense DP table and cell taxonomy used by the engine.
//!
//! The table is a flat row-major n×k buffer of `f64`, zero-initialized.
//! Cell `(i, j)` means: best cumulative area of a size-`j+1` combination
//! whose rightmost member (in sweep order) is point `i`. Cells outside the
//! diagonal band are never written and hold 0.0 by construction, so a pruned
//! entry can never masquerade as a valid partial maximum when summed.

/// Flat n×k matrix of best cumulative areas.
#[derive(Debug, Clone)]
pub struct AreaTable {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl AreaTable {
    /// Allocate an n×k table filled with 0.0.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            values: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        debug_assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        debug_assert!(row < self.rows && col < self.cols);
        self.values[row * self.cols + col] = value;
    }
}

/// Classification of a table cell for an n-point, size-k instance.
///
/// Variants are checked in the original priority order; `n >= k >= 1` is a
/// precondition (enforced by the engine constructor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// First column, early enough to still reach a full k-combination:
    /// holds the point's own static area.
    Base,
    /// `i - j >= n - k + 1`: the combination cannot be extended to column
    /// k-1 within the remaining rows.
    LowerPruned,
    /// `i < j`: not enough preceding rows to supply j earlier members.
    UpperPruned,
    /// Computed from column j-1 of rows 0..i.
    Interior,
}

impl Region {
    pub fn classify(i: usize, j: usize, n: usize, k: usize) -> Region {
        let cutoff = n - k + 1;
        if j == 0 && i < cutoff {
            Region::Base
        } else if i >= j && i - j >= cutoff {
            Region::LowerPruned
        } else if i < j {
            Region::UpperPruned
        } else {
            Region::Interior
        }
    }
}
