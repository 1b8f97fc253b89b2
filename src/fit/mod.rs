// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Fit curve: square or round a cubic segment by sliding its handles.
//!
//! Both control points move along their own handle line toward the
//! convergence point by the blend factor `t`:
//!
//! - `t = 0` retracts the handles onto their anchors (the curve becomes a
//!   straight line, but stays a curve segment)
//! - `t = 1` makes both handles meet at the convergence point
//! - `t > 1` overshoots, crossing the handles and making the curve concave
//! - `t < 0` is permitted and extrapolates away from the convergence point;
//!   it is not validated
//!
//! Lines and curves whose handles are parallel or retracted are skipped.

pub mod convergence;
pub mod vector;

pub use convergence::{convergence_point, converges, handle_vectors, intersect, parallel};

use crate::path::{CubicPath, Segment};
use vector::{add, scale, subtract};

/// What happened to a segment during a fit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitOutcome {
    /// Control points were moved
    Fitted,
    /// The segment is a line; nothing to move
    Line,
    /// The handle lines never meet (parallel or zero length)
    NotConvergent,
}

/// Reposition the control points of `segment` for blend factor `t`.
///
/// Only the two control points of the segment are written; its end points,
/// which neighbouring segments share, never move.
pub fn fit_segment(path: &mut CubicPath, segment: &Segment, t: f64) -> FitOutcome {
    let Some(curve) = path.cubic(segment) else {
        return FitOutcome::Line;
    };
    if !converges(&curve) {
        tracing::debug!("Skipping segment {:?}: handles do not converge", segment);
        return FitOutcome::NotConvergent;
    }

    let (start, end) = (curve.p0, curve.p3);
    if t == 0.0 {
        path.set_handles(segment, start, end);
    } else {
        let c = convergence_point(&curve);
        let cp1 = add(start, scale(subtract(c, start), t));
        let cp2 = add(end, scale(subtract(c, end), t));
        path.set_handles(segment, cp1, cp2);
    }

    tracing::debug!("Fitted segment {:?} with t = {}", segment, t);
    FitOutcome::Fitted
}

#[cfg(test)]
mod tests {
    use super::vector::cross;
    use super::*;
    use crate::path::PathPoint;
    use kurbo::Point;

    const EPS: f64 = 1e-9;

    fn single_curve(start: (f64, f64), cp1: (f64, f64), cp2: (f64, f64), end: (f64, f64)) -> CubicPath {
        CubicPath::new(
            vec![
                PathPoint::on_curve(start.into()),
                PathPoint::off_curve(cp1.into()),
                PathPoint::off_curve(cp2.into()),
                PathPoint::on_curve(end.into()),
            ],
            false,
        )
    }

    fn first_segment(path: &CubicPath) -> Segment {
        path.segments().next().unwrap()
    }

    fn handles(path: &CubicPath) -> (Point, Point) {
        (path.points[1].point, path.points[2].point)
    }

    fn assert_near(a: Point, b: Point) {
        assert!((a - b).hypot() < EPS, "expected {:?}, got {:?}", b, a);
    }

    /// A handful of curves with converging handles, covering the general
    /// and the axis-aligned intersection cases
    fn converging_curves() -> Vec<CubicPath> {
        vec![
            single_curve((0.0, 0.0), (1.0, 2.0), (9.0, 3.0), (10.0, 0.0)),
            single_curve((0.0, 0.0), (0.0, 5.0), (15.0, 0.0), (10.0, 0.0)),
            single_curve((0.0, 0.0), (0.0, 40.0), (60.0, 100.0), (100.0, 100.0)),
            single_curve((100.0, 0.0), (70.0, 20.0), (20.0, 70.0), (0.0, 100.0)),
            single_curve((-50.0, 10.0), (-30.0, 15.0), (35.0, 90.0), (40.0, 60.0)),
        ]
    }

    #[test]
    fn zero_retracts_handles_onto_anchors() {
        for mut path in converging_curves() {
            let segment = first_segment(&path);
            assert_eq!(fit_segment(&mut path, &segment, 0.0), FitOutcome::Fitted);
            let (cp1, cp2) = handles(&path);
            assert_eq!(cp1, path.points[0].point);
            assert_eq!(cp2, path.points[3].point);
        }
    }

    #[test]
    fn one_meets_at_convergence_point() {
        for mut path in converging_curves() {
            let segment = first_segment(&path);
            let c = convergence_point(&path.cubic(&segment).unwrap());
            fit_segment(&mut path, &segment, 1.0);
            let (cp1, cp2) = handles(&path);
            assert_near(cp1, c);
            assert_near(cp2, c);
        }
    }

    #[test]
    fn handles_stay_on_their_lines_for_any_t() {
        for t in [-0.75, 0.25, 0.5, 0.8, 1.0, 1.5, 3.0] {
            for mut path in converging_curves() {
                let segment = first_segment(&path);
                let c = convergence_point(&path.cubic(&segment).unwrap());
                fit_segment(&mut path, &segment, t);

                let (start, end) = (path.points[0].point, path.points[3].point);
                let (cp1, cp2) = handles(&path);
                assert!(cross(cp1 - start, c - start).abs() < 1e-6);
                assert!(cross(cp2 - end, c - end).abs() < 1e-6);
                assert_near(cp1, start + (c - start) * t);
                assert_near(cp2, end + (c - end) * t);
            }
        }
    }

    #[test]
    fn fitting_twice_with_same_t_changes_nothing() {
        for t in [0.0, 0.55, 1.0, 1.25, -0.5] {
            for mut path in converging_curves() {
                let segment = first_segment(&path);
                fit_segment(&mut path, &segment, t);
                let once = handles(&path);
                fit_segment(&mut path, &segment, t);
                let twice = handles(&path);
                assert_near(twice.0, once.0);
                assert_near(twice.1, once.1);
            }
        }
    }

    #[test]
    fn anchors_never_move() {
        for mut path in converging_curves() {
            let segment = first_segment(&path);
            let (start, end) = (path.points[0].point, path.points[3].point);
            fit_segment(&mut path, &segment, 1.7);
            assert_eq!(path.points[0].point, start);
            assert_eq!(path.points[3].point, end);
        }
    }

    #[test]
    fn lines_are_left_alone() {
        let mut path = CubicPath::new(
            vec![
                PathPoint::on_curve(Point::new(0.0, 0.0)),
                PathPoint::on_curve(Point::new(10.0, 5.0)),
            ],
            false,
        );
        let before = path.points.clone();
        let segment = first_segment(&path);
        assert_eq!(fit_segment(&mut path, &segment, 0.5), FitOutcome::Line);
        assert_eq!(path.points, before);
    }

    #[test]
    fn parallel_handles_are_left_alone() {
        let mut path = single_curve((0.0, 0.0), (1.0, 0.0), (12.0, 0.0), (10.0, 0.0));
        let before = path.points.clone();
        let segment = first_segment(&path);
        assert_eq!(
            fit_segment(&mut path, &segment, 0.5),
            FitOutcome::NotConvergent
        );
        assert_eq!(path.points, before);
    }

    #[test]
    fn vertical_handles_never_converge() {
        for t in [0.0, 0.5, 1.0, 2.0] {
            let mut path = single_curve((0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
            let before = path.points.clone();
            let segment = first_segment(&path);
            assert_eq!(fit_segment(&mut path, &segment, t), FitOutcome::NotConvergent);
            assert_eq!(path.points, before);
        }
    }

    #[test]
    fn closed_contour_with_vertical_handles_is_untouched() {
        for t in [0.0, 0.5, 1.0, 2.0] {
            let mut path = single_curve((0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0));
            path.closed = true;
            let before = path.points.clone();

            let segments: Vec<Segment> = path.segments().collect();
            assert_eq!(
                segments,
                vec![
                    Segment::Curve {
                        start: 0,
                        cp1: 1,
                        cp2: 2,
                        end: 3
                    },
                    Segment::Line { start: 3, end: 0 },
                ]
            );

            let outcomes: Vec<FitOutcome> = segments
                .iter()
                .map(|segment| fit_segment(&mut path, segment, t))
                .collect();
            assert_eq!(outcomes, vec![FitOutcome::NotConvergent, FitOutcome::Line]);
            assert_eq!(path.points, before);
        }
    }

    #[test]
    fn retracted_handles_are_left_alone() {
        let mut path = single_curve((0.0, 0.0), (0.0, 0.0), (10.0, 0.0), (10.0, 0.0));
        let segment = first_segment(&path);
        assert_eq!(
            fit_segment(&mut path, &segment, 1.0),
            FitOutcome::NotConvergent
        );
    }

    #[test]
    fn vertical_and_horizontal_handles_at_half() {
        let mut path = single_curve((0.0, 0.0), (0.0, 5.0), (15.0, 0.0), (10.0, 0.0));
        let segment = first_segment(&path);
        let c = convergence_point(&path.cubic(&segment).unwrap());
        assert_eq!(c, Point::new(0.0, 0.0));

        fit_segment(&mut path, &segment, 0.5);
        let (cp1, cp2) = handles(&path);
        assert_eq!(cp1, Point::new(0.0, 0.0));
        assert_eq!(cp2, Point::new(5.0, 0.0));
    }

    #[test]
    fn quarter_circle_squares_up() {
        let mut path = single_curve((0.0, 0.0), (0.0, 55.0), (45.0, 100.0), (100.0, 100.0));
        let segment = first_segment(&path);
        fit_segment(&mut path, &segment, 1.0);
        let (cp1, cp2) = handles(&path);
        assert_near(cp1, Point::new(0.0, 100.0));
        assert_near(cp2, Point::new(0.0, 100.0));
    }
}
