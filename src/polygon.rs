//! Polygon input helpers: duplicate/collinear-vertex removal, and random
//! polygon generators used by tests and available to callers who want quick
//! fixtures.
//!
//! The source generates these with Perlin noise (`ofNoise`, from
//! openFrameworks); this crate has no such dependency, so uniform jitter via
//! `rand` stands in for it. The shapes this produces (a simple star-shaped
//! polygon and a simple two-chain monotone polygon) satisfy the same
//! structural guarantees the source relies on in its own tests.

use rand::Rng;

use crate::math_utils::point;
use crate::math_utils::Point;

/// Removes duplicate-within-`epsilon` and collinear-within-`epsilon`
/// vertices, repeatedly, until none remain or only a triangle is left.
pub fn remove_duplicates_and_collinear(points: &mut Vec<Point>, epsilon: f32) {
    loop {
        if points.len() <= 3 {
            break;
        }

        let count = points.len();
        let mut remove_index = None;

        for i in 0..count {
            let current = points[i];
            let next = points[(i + 1) % count];

            if (current.x - next.x).abs() < epsilon && (current.y - next.y).abs() < epsilon {
                remove_index = Some(i);
                break;
            }

            let prev = points[(i + count - 1) % count];
            let from_prev = (current - prev).normalize();
            let to_next = (next - current).normalize();
            let angle = from_prev.dot(to_next).clamp(-1.0, 1.0).acos();
            if angle < epsilon {
                remove_index = Some(i);
                break;
            }
        }

        match remove_index {
            Some(i) => {
                points.remove(i);
            }
            None => break,
        }
    }
}

/// A simple, non-self-intersecting polygon with `num_points` vertices,
/// built by placing each vertex in its own angular sector around the
/// origin at a random radius. CCW by construction.
pub fn random_polygon(num_points: usize) -> Vec<Point> {
    let mut rng = rand::rng();
    let d_angle = 2.0 * std::f32::consts::PI / num_points as f32;

    (0..num_points)
        .map(|i| {
            let angle = rng.random_range(d_angle * i as f32..d_angle * (i as f32 + 1.0));
            let radius = rng.random_range(0.2f32..1.0f32);
            point(radius * angle.cos(), radius * angle.sin())
        })
        .collect()
}

/// A simple y-monotone polygon with `num_points` vertices: a left chain
/// descending from `(0, 1)` to `(0, -1)` with x in `[-1, -0.1]`, then a right
/// chain climbing back up with x in `[0.1, 1]`. CCW by construction.
pub fn random_monotone_polygon(num_points: usize) -> Vec<Point> {
    let mut rng = rand::rng();
    let epsilon = 1e-6f32;
    let mid = num_points / 2;

    let mut points = vec![Point::default(); num_points];
    points[0] = point(0.0, 1.0);

    let mut d_y = 2.0 / (mid as f32 - 1.0);
    let mut y_acc = 1.0f32;
    for p in points.iter_mut().take(mid).skip(1) {
        let x = rng.random_range(-1.0f32..-0.1f32);
        let y = rng.random_range(y_acc - d_y + epsilon..y_acc - epsilon);
        *p = point(x, y);
        y_acc -= d_y;
    }

    points[mid] = point(0.0, -1.0);

    d_y = 2.0 / (num_points - mid - 1) as f32;
    y_acc = -1.0;
    for p in points.iter_mut().take(num_points).skip(mid + 1) {
        let x = rng.random_range(0.1f32..1.0f32);
        let y = rng.random_range(y_acc + epsilon..y_acc + d_y - epsilon);
        *p = point(x, y);
        y_acc += d_y;
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math_utils::{winding_of, Winding};

    #[test]
    fn removes_collinear_point_from_pentagon() {
        let mut points = vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 0.5), point(1.0, 1.0), point(0.0, 1.0)];
        remove_duplicates_and_collinear(&mut points, 1e-3);
        assert_eq!(points, vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)]);
    }

    #[test]
    fn removes_duplicate_point() {
        let mut points = vec![point(0.0, 0.0), point(1.0, 0.0), point(1.0, 0.0001), point(1.0, 1.0), point(0.0, 1.0)];
        remove_duplicates_and_collinear(&mut points, 1e-3);
        assert_eq!(points.len(), 4);
    }

    #[test]
    fn stops_at_a_triangle() {
        let mut points = vec![point(0.0, 0.0), point(2.0, 0.0), point(1.0, 0.0001), point(1.0, 2.0)];
        remove_duplicates_and_collinear(&mut points, 1e-2);
        assert!(points.len() >= 3);
    }

    #[test]
    fn random_polygon_is_ccw() {
        for n in [12usize, 25, 40, 63] {
            let polygon = random_polygon(n);
            assert_eq!(polygon.len(), n);
            assert_eq!(winding_of(&polygon), Winding::CounterClockwise);
        }
    }

    #[test]
    fn random_monotone_polygon_is_ccw_and_monotone() {
        for n in [12usize, 25, 40, 63] {
            let polygon = random_monotone_polygon(n);
            assert_eq!(polygon.len(), n);
            assert_eq!(winding_of(&polygon), Winding::CounterClockwise);

            let mid = n / 2;
            for w in polygon[..=mid].windows(2) {
                assert!(w[1].y < w[0].y);
            }
            for w in polygon[mid..].windows(2) {
                assert!(w[1].y > w[0].y);
            }
            assert!(polygon[n - 1].y < polygon[0].y);
        }
    }
}
