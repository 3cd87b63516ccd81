//! Sweep ordering of the point collection.
//!
//! The engine requires points ordered by ascending x, with ties broken by
//! descending y: traversing the array is then equivalent to sweeping the
//! plane left to right, and for equal x the next point is the smaller one.
//! The sort is an in-place partition-exchange (Lomuto, last-element pivot)
//! with that comparison baked into the partition predicate. No stability
//! guarantee; duplicate points are retained.
//!
//! Worst case O(n²) on already-ordered input, O(n log n) on average.

use crate::point::Point;

/// True if `a` must appear before the pivot `b` in sweep order.
#[inline]
pub fn sweeps_before(a: &Point, b: &Point) -> bool {
    a.x < b.x || (a.x == b.x && a.y > b.y)
}

/// Sort the points in place into sweep order.
pub fn sort_points(points: &mut [Point]) {
    if points.len() <= 1 {
        return;
    }
    let pivot = partition(points);
    let (left, right) = points.split_at_mut(pivot);
    sort_points(left);
    sort_points(&mut right[1..]);
}

/// Lomuto partition around the last element; returns the pivot's final index.
fn partition(points: &mut [Point]) -> usize {
    let high = points.len() - 1;
    let pivot = points[high];
    let mut boundary = 0;
    for j in 0..high {
        if sweeps_before(&points[j], &pivot) {
            points.swap(boundary, j);
            boundary += 1;
        }
    }
    points.swap(boundary, high);
    boundary
}

/// True if every adjacent pair satisfies the sweep order contract.
pub fn in_sweep_order(points: &[Point]) -> bool {
    points
        .windows(2)
        .all(|w| w[0].x < w[1].x || (w[0].x == w[1].x && w[0].y >= w[1].y))
}
