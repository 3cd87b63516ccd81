//! Bottom-up combination-value engine.
//!
//! Fills the n×k table strictly row-major (outer row i, inner column j), so
//! every lookup during row i only touches column j-1 of rows 0..i. The
//! running maximum is folded in from base cells and from completed
//! combinations (column k-1) only; intermediate columns are incomplete and
//! never eligible as a final answer.
//!
//! Interior cells scan every earlier row p in ascending order while keeping
//! a monotonically shrinking local `(width, height)` pair, initialized to
//! the point's static coordinates:
//! - if point i lies strictly right of point p and the x-gap is smaller than
//!   the tracked width, the width shrinks to that gap;
//! - otherwise, if point i lies strictly above point p and the y-gap is
//!   smaller than the tracked height, the height shrinks to it.
//! At most one branch fires per p (x takes priority) and neither side ever
//! grows. The scan maximum is seeded from `table[0][j-1]` before any
//! clipping; the p = 0 iteration then also produces a clipped candidate.
//! That double use of p = 0 matches the observed behavior of the recurrence
//! and is kept as-is.

use std::error::Error;
use std::fmt;

use crate::order::{in_sweep_order, sort_points};
use crate::point::Point;
use crate::table::{AreaTable, Region};

/// Rejected instance configurations.
///
/// The table dimensions and the pruning cutoff `n - k + 1` assume
/// `n > 0` and `1 <= k <= n`; anything else is refused up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidInput {
    EmptyPointSet,
    ComboSizeOutOfRange { n: usize, k: usize },
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::EmptyPointSet => write!(f, "point set must be non-empty"),
            InvalidInput::ComboSizeOutOfRange { n, k } => {
                write!(f, "combination size k={k} must be in 1..={n}")
            }
        }
    }
}

impl Error for InvalidInput {}

/// Combination-value engine for one point set and target count k.
///
/// Construction validates the instance and runs the ordering stage; the
/// stored collection is in sweep order from then on and is never
/// value-mutated afterwards.
#[derive(Debug)]
pub struct CoverEngine {
    points: Vec<Point>,
    k: usize,
}

impl CoverEngine {
    /// Validate `1 <= k <= n` and sort the points into sweep order.
    pub fn new(mut points: Vec<Point>, k: usize) -> Result<Self, InvalidInput> {
        if points.is_empty() {
            return Err(InvalidInput::EmptyPointSet);
        }
        if k == 0 || k > points.len() {
            return Err(InvalidInput::ComboSizeOutOfRange {
                n: points.len(),
                k,
            });
        }
        sort_points(&mut points);
        Ok(Self { points, k })
    }

    /// The point collection in sweep order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Target combination size.
    pub fn k(&self) -> usize {
        self.k
    }

    /// Run the bottom-up fill and return the best complete-combination value.
    ///
    /// Returns 0.0 if no cell ever raises the running maximum (degenerate
    /// all-zero input); that is defined output, not an error.
    pub fn run(&self) -> f64 {
        let n = self.points.len();
        let k = self.k;
        debug_assert!(in_sweep_order(&self.points));

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("cover_run", n, k);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let mut table = AreaTable::new(n, k);
        let mut best = 0.0f64;

        for i in 0..n {
            #[cfg(feature = "tracing")]
            let row_span = tracing::trace_span!("fill_row", row = i);
            #[cfg(feature = "tracing")]
            let _row_enter = row_span.enter();

            for j in 0..k {
                match Region::classify(i, j, n, k) {
                    Region::Base => {
                        let area = self.points[i].area();
                        table.set(i, j, area);
                        if area > best {
                            best = area;
                        }
                    }
                    // Pruned cells stay at the zero the table was built with.
                    Region::LowerPruned | Region::UpperPruned => {}
                    Region::Interior => {
                        let value = self.interior_cell(&table, i, j);
                        table.set(i, j, value);
                        if j == k - 1 && value > best {
                            best = value;
                        }
                    }
                }
            }
        }

        best
    }

    /// Scan rows 0..i for the best extension of a size-j combination by
    /// point i, clipping the point's rectangle against each candidate.
    fn interior_cell(&self, table: &AreaTable, i: usize, j: usize) -> f64 {
        let here = self.points[i];
        let mut width = here.x;
        let mut height = here.y;
        // Seed with the unclipped column j-1 entry of row 0; p = 0 is then
        // re-derived below under clipped coordinates.
        let mut best = table.get(0, j - 1);

        for p in 0..i {
            let prior = self.points[p];
            if here.x > prior.x {
                let gap = here.x - prior.x;
                if gap < width {
                    width = gap;
                }
            } else if here.y > prior.y {
                let gap = here.y - prior.y;
                if gap < height {
                    height = gap;
                }
            }

            let candidate = table.get(p, j - 1) + width * height;
            if candidate > best {
                best = candidate;
            }
        }

        best
    }
}
