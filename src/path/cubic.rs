// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Cubic bezier contour, the point store that segments index into.

use super::point::{PathPoint, PointType};
use super::segment::{Segment, Segments};
use crate::model::workspace;
use kurbo::{CubicBez, Point};

/// A single contour made of lines and cubic curves
#[derive(Debug, Clone)]
pub struct CubicPath {
    /// Points in walking order; a closed path always starts on-curve
    pub points: Vec<PathPoint>,

    /// Whether the last point connects back to the first
    pub closed: bool,

    /// How far the UFO point order was rotated to start on-curve
    rotation: usize,
}

impl CubicPath {
    /// Create a path from points already in walking order
    pub fn new(points: Vec<PathPoint>, closed: bool) -> Self {
        Self {
            points,
            closed,
            rotation: 0,
        }
    }

    /// Build from a workspace contour.
    ///
    /// Closed UFO contours may begin with control points. The points are
    /// rotated so the walk starts at the first on-curve point; `to_contour`
    /// undoes the rotation.
    pub fn from_contour(contour: &workspace::Contour) -> Self {
        let closed = contour.is_closed();

        let mut points: Vec<PathPoint> = contour
            .points
            .iter()
            .map(|pt| PathPoint {
                id: crate::model::EntityId::next(),
                point: Point::new(pt.x, pt.y),
                typ: if pt.point_type.is_on_curve() {
                    PointType::OnCurve
                } else {
                    PointType::OffCurve
                },
            })
            .collect();

        let rotation = if closed {
            points.iter().position(PathPoint::is_on_curve).unwrap_or(0)
        } else {
            0
        };
        points.rotate_left(rotation);

        Self {
            points,
            closed,
            rotation,
        }
    }

    /// Write positions back onto a copy of the contour this path was
    /// built from, restoring the original point order.
    pub fn to_contour(&self, original: &workspace::Contour) -> workspace::Contour {
        let mut contour = original.clone();
        for (index, pt) in self.points.iter().enumerate() {
            if let Some(target) = contour.points.get_mut(self.source_index(index)) {
                target.x = pt.point.x;
                target.y = pt.point.y;
            }
        }
        contour
    }

    /// Get the number of points in this path
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if this path has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Map a UFO point index to the index used by `points`
    pub fn path_index(&self, source_index: usize) -> Option<usize> {
        let len = self.points.len();
        (source_index < len).then(|| (source_index + len - self.rotation) % len)
    }

    fn source_index(&self, path_index: usize) -> usize {
        (path_index + self.rotation) % self.points.len()
    }

    /// Iterate over the segments of this path.
    ///
    /// The walk is recomputed from the current points on every call.
    pub fn segments(&self) -> Segments<'_> {
        Segments::new(&self.points, self.closed)
    }

    /// Current geometry of a curve segment
    pub fn cubic(&self, segment: &Segment) -> Option<CubicBez> {
        match *segment {
            Segment::Curve {
                start,
                cp1,
                cp2,
                end,
            } => Some(CubicBez::new(
                self.points[start].point,
                self.points[cp1].point,
                self.points[cp2].point,
                self.points[end].point,
            )),
            Segment::Line { .. } => None,
        }
    }

    /// Move the two control points of a curve segment.
    ///
    /// Lines have no control points and are left alone.
    pub fn set_handles(&mut self, segment: &Segment, p1: Point, p2: Point) {
        if let Segment::Curve { cp1, cp2, .. } = *segment {
            self.points[cp1].point = p1;
            self.points[cp2].point = p2;
        }
    }
}
