//! Polyline simplification on planar coordinates

use geo::{Coord, coord};
use trackbox::geometry::simplify::*;

fn noisy_line() -> Vec<Coord<f64>> {
    (0..200)
        .map(|i| {
            let jitter = ((i * 7919) % 13) as f64 * 1e-6;
            coord! { x: 47.0 + i as f64 * 0.00005, y: 8.0 + jitter }
        })
        .collect()
}

#[test]
fn test_zero_tolerance_keeps_everything() {
    let line = noisy_line();
    assert_eq!(simplify(&line, 0.0), line);
    assert_eq!(simplify(&line, -1.0), line);
}

#[test]
fn test_endpoints_always_survive() {
    let line = noisy_line();
    for tolerance in [1e-6, 1e-4, 1e-2, 10.0] {
        let result = simplify(&line, tolerance);
        assert_eq!(result.first(), line.first());
        assert_eq!(result.last(), line.last());
        assert!(result.len() <= line.len());
    }
}

#[test]
fn test_large_tolerance_collapses_to_endpoints() {
    let line = noisy_line();
    assert_eq!(simplify(&line, 1.0), vec![line[0], line[199]]);
}

#[test]
fn test_result_preserves_order() {
    let line = noisy_line();
    let result = simplify(&line, 0.0001);
    assert!(result.windows(2).all(|w| w[0].x < w[1].x));
}

#[test]
fn test_result_within_tolerance_of_input() {
    // every dropped point stays close to the simplified polyline
    let line: Vec<Coord<f64>> = (0..50)
        .map(|i| {
            let t = i as f64 * 0.1;
            coord! { x: t, y: t.sin() }
        })
        .collect();
    let tolerance = 0.05;
    let result = simplify(&line, tolerance);

    for p in &line {
        let nearest = result
            .windows(2)
            .map(|w| point_to_segment_distance(*p, w[0], w[1]))
            .fold(f64::MAX, f64::min);
        assert!(nearest <= tolerance * 2.0, "{:?} is {} away", p, nearest);
    }
}

#[test]
fn test_empty_and_single() {
    assert!(simplify(&[], 0.0001).is_empty());
    let single = vec![coord! { x: 1.0, y: 2.0 }];
    assert_eq!(simplify(&single, 0.0001), single);
}
