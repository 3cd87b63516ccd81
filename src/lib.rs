//! Maximum combined rectangle cover over planar point sets.
//!
//! Given `n` points with non-negative coordinates and a target count `k`,
//! this crate computes the best achievable sum of rectangle areas over
//! combinations of exactly `k` points, where each newly selected point's
//! rectangle is clipped against the points already considered (areas shrink
//! as points interact).
//!
//! ## Core idea
//! 1. Order the points by ascending x, breaking ties by descending y
//!    ([`order::sort_points`]). The engine consumes points strictly in this
//!    sweep order.
//! 2. Fill an n×k table bottom-up ([`CoverEngine`]): cell `(i, j)` holds the
//!    best cumulative area of a size-`j+1` combination whose rightmost member
//!    is point `i`, built from column `j-1` of earlier rows.
//! 3. Cells outside a diagonal band are never computed and stay zero, so the
//!    table only carries entries that can still extend to a full size-`k`
//!    combination.
//!
//! The recurrence is a specific heuristic, not an exhaustive enumeration:
//! the reported value is the best reachable under its clipping rule.
//!
//! ## Quick start
//! ```
//! use formrect::{CoverEngine, Point};
//!
//! let points = vec![
//!     Point::new(1.0, 5.0),
//!     Point::new(2.0, 3.0),
//!     Point::new(3.0, 1.0),
//! ];
//! let engine = CoverEngine::new(points, 2).unwrap();
//! assert_eq!(engine.run(), 8.0);
//! ```

pub mod engine;
pub mod io;
pub mod order;
pub mod point;
pub mod table;
pub mod utils;

pub use crate::engine::{CoverEngine, InvalidInput};
pub use crate::point::Point;
