// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Where do a curve's handles point?
//!
//! Each handle defines a line through its anchor. When the two lines are
//! not parallel they cross at the convergence point, and sliding the
//! handles toward or away from that point squares or rounds the curve.

use super::vector::{cross, normalize, subtract};
use crate::error::FitError;
use crate::settings;
use kurbo::{CubicBez, Point, Vec2};

/// Handle directions of a curve: anchor to its own control point
pub fn handle_vectors(curve: &CubicBez) -> (Vec2, Vec2) {
    (
        subtract(curve.p1, curve.p0),
        subtract(curve.p2, curve.p3),
    )
}

/// Whether two directions are parallel (or anti-parallel).
///
/// Fails with `DivideByZero` when either vector has zero length.
pub fn parallel(v1: Vec2, v2: Vec2) -> Result<bool, FitError> {
    let v1 = normalize(v1)?;
    let v2 = normalize(v2)?;
    Ok(cross(v1, v2).abs() < settings::fit::PARALLEL_TOLERANCE)
}

/// Whether the handle lines of a curve meet somewhere.
///
/// A retracted (zero length) handle has no direction, so it never
/// converges.
pub fn converges(curve: &CubicBez) -> bool {
    let (v1, v2) = handle_vectors(curve);
    matches!(parallel(v1, v2), Ok(false))
}

/// Intersection of the line through `p1` along `v1` with the line through
/// `p2` along `v2`.
///
/// The directions must not be parallel; check with [`converges`] first.
/// Axis-aligned directions are solved separately so no slope is ever
/// divided by a zero component.
pub fn intersect(p1: Point, p2: Point, v1: Vec2, v2: Vec2) -> Point {
    if v1.x == 0.0 {
        if v2.y == 0.0 {
            return Point::new(p1.x, p2.y);
        }
        let m = v2.x / v2.y;
        return Point::new(p1.x, p2.y + (p1.x - p2.x) / m);
    }
    if v1.y == 0.0 {
        if v2.x == 0.0 {
            return Point::new(p2.x, p1.y);
        }
        let m = v2.x / v2.y;
        return Point::new(p2.x + (p1.y - p2.y) * m, p1.y);
    }
    if v2.x == 0.0 || v2.y == 0.0 {
        return intersect(p2, p1, v2, v1);
    }

    // inverse slopes, dx/dy
    let m1 = v1.x / v1.y;
    let m2 = v2.x / v2.y;
    debug_assert!(m1 != m2, "intersect called with parallel directions");
    let y = (p2.x - p1.x + p1.y * m1 - p2.y * m2) / (m1 - m2);
    let x = (y - p1.y) * m1 + p1.x;
    Point::new(x, y)
}

/// The point where a curve's two handle lines cross
pub fn convergence_point(curve: &CubicBez) -> Point {
    let (v1, v2) = handle_vectors(curve);
    intersect(curve.p0, curve.p3, v1, v2)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64), p3: (f64, f64)) -> CubicBez {
        CubicBez::new(p0, p1, p2, p3)
    }

    fn assert_near(a: Point, b: Point) {
        assert!(
            (a - b).hypot() < 1e-9,
            "expected {:?}, got {:?}",
            b,
            a
        );
    }

    #[test]
    fn handle_vectors_point_from_anchor_to_handle() {
        let c = curve((0.0, 0.0), (1.0, 2.0), (9.0, 3.0), (10.0, 0.0));
        let (v1, v2) = handle_vectors(&c);
        assert_eq!(v1, Vec2::new(1.0, 2.0));
        assert_eq!(v2, Vec2::new(-1.0, 3.0));
    }

    #[test]
    fn parallel_detection() {
        assert_eq!(parallel(Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)), Ok(true));
        assert_eq!(parallel(Vec2::new(1.0, 1.0), Vec2::new(-3.0, -3.0)), Ok(true));
        assert_eq!(parallel(Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)), Ok(false));
        assert_eq!(
            parallel(Vec2::ZERO, Vec2::new(0.0, 1.0)),
            Err(FitError::DivideByZero)
        );
    }

    #[test]
    fn vertical_handles_do_not_converge() {
        let c = curve((0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
        assert!(!converges(&c));
    }

    #[test]
    fn zero_length_handle_does_not_converge() {
        let c = curve((0.0, 0.0), (0.0, 0.0), (10.0, 10.0), (10.0, 0.0));
        assert!(!converges(&c));
        let c = curve((0.0, 0.0), (0.0, 5.0), (10.0, 0.0), (10.0, 0.0));
        assert!(!converges(&c));
    }

    #[test]
    fn general_intersection() {
        let c = curve((0.0, 0.0), (1.0, 2.0), (9.0, 3.0), (10.0, 0.0));
        assert!(converges(&c));
        assert_near(convergence_point(&c), Point::new(6.0, 12.0));
    }

    #[test]
    fn vertical_meets_horizontal() {
        let p = intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Vec2::new(0.0, 5.0),
            Vec2::new(5.0, 0.0),
        );
        assert_eq!(p, Point::new(0.0, 0.0));
    }

    #[test]
    fn vertical_meets_diagonal() {
        let p = intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(-1.0, 1.0),
        );
        assert_near(p, Point::new(0.0, 10.0));
    }

    #[test]
    fn horizontal_meets_vertical() {
        let p = intersect(
            Point::new(0.0, 3.0),
            Point::new(7.0, -4.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, 2.0),
        );
        assert_eq!(p, Point::new(7.0, 3.0));
    }

    #[test]
    fn horizontal_meets_diagonal() {
        let p = intersect(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 2.0),
        );
        assert_near(p, Point::new(5.0, 0.0));
    }

    #[test]
    fn axis_aligned_second_direction_is_swapped() {
        let p = intersect(
            Point::new(0.0, 0.0),
            Point::new(4.0, 0.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(0.0, 1.0),
        );
        assert_near(p, Point::new(4.0, 4.0));

        let q = intersect(
            Point::new(0.0, 0.0),
            Point::new(4.0, 2.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(-1.0, 0.0),
        );
        assert_near(q, Point::new(2.0, 2.0));
    }

    #[test]
    fn intersection_is_symmetric() {
        let (p1, p2) = (Point::new(-3.0, 1.0), Point::new(8.0, 2.5));
        let (v1, v2) = (Vec2::new(2.0, 3.0), Vec2::new(-1.0, 4.0));
        assert_near(intersect(p1, p2, v1, v2), intersect(p2, p1, v2, v1));
    }

    #[test]
    fn slope_equal_directions_are_rejected_by_converges() {
        let c = curve((0.0, 0.0), (2.0, 1.0), (14.0, 7.0), (10.0, 5.0));
        let (v1, v2) = handle_vectors(&c);
        assert_eq!(v1.x / v1.y, v2.x / v2.y);
        assert!(!converges(&c));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "parallel directions")]
    fn intersect_on_parallel_directions_is_a_precondition_violation() {
        intersect(
            Point::new(0.0, 0.0),
            Point::new(0.0, 5.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(4.0, 2.0),
        );
    }
}
