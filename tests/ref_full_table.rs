//! Checks the engine against a full-table baseline that keeps the clipped
//! width/height as in-place mutable point fields and restores them after
//! every interior cell. The engine replaces that shared-state accumulator
//! with locals; both must produce bit-identical results.

use formrect::{CoverEngine, Point};
use proptest::prelude::*;

#[derive(Clone, Copy)]
struct WorkNode {
    x: f64,
    y: f64,
    x_f: f64,
    y_f: f64,
}

/// Full-table recurrence with in-place clipping and explicit restoration.
/// Expects points already in sweep order.
fn full_table_best_area(points: &[Point], k: usize) -> f64 {
    let n = points.len();
    let cutoff = n - k + 1;
    let mut nodes: Vec<WorkNode> = points
        .iter()
        .map(|p| WorkNode {
            x: p.x,
            y: p.y,
            x_f: p.x,
            y_f: p.y,
        })
        .collect();
    let mut table = vec![vec![0.0f64; k]; n];
    let mut best = 0.0f64;

    for i in 0..n {
        for j in 0..k {
            if j == 0 && i < cutoff {
                table[i][j] = nodes[i].x * nodes[i].y;
                if table[i][j] > best {
                    best = table[i][j];
                }
            } else if i >= j && i - j >= cutoff {
                table[i][j] = 0.0;
            } else if i < j {
                table[i][j] = 0.0;
            } else {
                let mut max_cover = 0.0f64;
                for p in 0..i {
                    if p == 0 {
                        max_cover = table[p][j - 1];
                    }
                    if nodes[i].x_f > nodes[p].x_f {
                        if nodes[i].x_f - nodes[p].x_f < nodes[i].x {
                            nodes[i].x = nodes[i].x_f - nodes[p].x_f;
                        }
                    } else if nodes[i].y_f > nodes[p].y_f
                        && nodes[i].y_f - nodes[p].y_f < nodes[i].y
                    {
                        nodes[i].y = nodes[i].y_f - nodes[p].y_f;
                    }
                    let candidate = table[p][j - 1] + nodes[i].x * nodes[i].y;
                    if candidate > max_cover {
                        max_cover = candidate;
                    }
                }
                if max_cover > best && j == k - 1 {
                    best = max_cover;
                }
                table[i][j] = max_cover;
                nodes[i].x = nodes[i].x_f;
                nodes[i].y = nodes[i].y_f;
            }
        }
    }

    best
}

fn max_static_area(points: &[Point]) -> f64 {
    points.iter().map(Point::area).fold(0.0, f64::max)
}

proptest! {
    #[test]
    fn engine_matches_full_table(
        coords in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..14),
        k_seed in 0usize..64,
    ) {
        let points: Vec<Point> = coords.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        let k = k_seed % points.len() + 1;
        let engine = CoverEngine::new(points, k).unwrap();
        let expected = full_table_best_area(engine.points(), k);
        prop_assert_eq!(engine.run(), expected);
    }

    #[test]
    fn engine_matches_full_table_with_x_collisions(
        coords in proptest::collection::vec((0u8..4, 0.0f64..50.0), 1..12),
        k_seed in 0usize..32,
    ) {
        // Integer-grid x coordinates force equal-x groups through the
        // descending-y tie-break.
        let points: Vec<Point> = coords
            .into_iter()
            .map(|(x, y)| Point::new(f64::from(x), y))
            .collect();
        let k = k_seed % points.len() + 1;
        let engine = CoverEngine::new(points, k).unwrap();
        let expected = full_table_best_area(engine.points(), k);
        prop_assert_eq!(engine.run(), expected);
    }

    #[test]
    fn k_one_is_the_best_single_area(
        coords in proptest::collection::vec((0.0f64..100.0, 0.0f64..100.0), 1..20),
    ) {
        let points: Vec<Point> = coords.into_iter().map(|(x, y)| Point::new(x, y)).collect();
        let engine = CoverEngine::new(points, 1).unwrap();
        prop_assert_eq!(engine.run(), max_static_area(engine.points()));
    }
}

#[test]
fn matches_full_table_for_every_k() {
    let points = vec![
        Point::new(1.0, 9.0),
        Point::new(2.0, 7.0),
        Point::new(3.5, 5.0),
        Point::new(4.0, 4.5),
        Point::new(6.0, 2.0),
        Point::new(7.0, 1.5),
    ];
    for k in 1..=points.len() {
        let engine = CoverEngine::new(points.clone(), k).unwrap();
        let expected = full_table_best_area(engine.points(), k);
        assert_eq!(engine.run(), expected, "k={k}");
    }
}
