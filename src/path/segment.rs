// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Segments of a cubic path.
//!
//! A `Segment` does not own any points. It names positions in the point
//! list of the `CubicPath` it came from, so writing to a control point
//! through a segment writes to the path itself. Segments are cheap to
//! recompute and should not be kept across edits that add or remove points.

use super::point::PathPoint;
use crate::editing::Selection;

/// A line or cubic curve between two on-curve points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Line {
        start: usize,
        end: usize,
    },
    Curve {
        start: usize,
        cp1: usize,
        cp2: usize,
        end: usize,
    },
}

impl Segment {
    /// Index of the on-curve point the segment starts at
    pub fn start(&self) -> usize {
        match *self {
            Segment::Line { start, .. } | Segment::Curve { start, .. } => start,
        }
    }

    /// Index of the on-curve point the segment ends at
    pub fn end(&self) -> usize {
        match *self {
            Segment::Line { end, .. } | Segment::Curve { end, .. } => end,
        }
    }

    /// Check if this is a line segment
    pub fn is_line(&self) -> bool {
        matches!(self, Segment::Line { .. })
    }

    /// Check if this is a cubic curve segment
    pub fn is_curve(&self) -> bool {
        matches!(self, Segment::Curve { .. })
    }

    /// A segment is selected when both of its end points are.
    ///
    /// Control point selection does not count.
    pub fn is_selected(&self, points: &[PathPoint], selection: &Selection) -> bool {
        selection.contains(&points[self.start()].id) && selection.contains(&points[self.end()].id)
    }
}

/// Lazy walk over the segments of a point list.
///
/// After an on-curve point, an on-curve successor makes a line and an
/// off-curve successor starts a curve made of the next three points. A
/// closed path behaves as if its first point were repeated at the end, so
/// the closing segment is produced too.
pub struct Segments<'a> {
    points: &'a [PathPoint],
    closed: bool,
    cursor: usize,
}

impl<'a> Segments<'a> {
    pub(crate) fn new(points: &'a [PathPoint], closed: bool) -> Self {
        Self {
            points,
            closed,
            cursor: 0,
        }
    }

    /// Number of positions to walk, counting the repeated first point
    fn span(&self) -> usize {
        if self.closed && !self.points.is_empty() {
            self.points.len() + 1
        } else {
            self.points.len()
        }
    }

    fn at(&self, position: usize) -> usize {
        position % self.points.len()
    }

    fn stop(&mut self, reason: &str) -> Option<Segment> {
        tracing::warn!(
            "Malformed cubic contour at point {}: {}; ignoring the rest",
            self.cursor,
            reason
        );
        self.cursor = self.span();
        None
    }
}

impl Iterator for Segments<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let span = self.span();
        if self.cursor + 1 >= span {
            return None;
        }

        let start = self.at(self.cursor);
        if self.points[start].is_off_curve() {
            return self.stop("segment starts at a control point");
        }

        let next = self.at(self.cursor + 1);
        if self.points[next].is_on_curve() {
            self.cursor += 1;
            return Some(Segment::Line { start, end: next });
        }

        if self.cursor + 3 >= span {
            return self.stop("curve is missing points");
        }
        let cp2 = self.at(self.cursor + 2);
        let end = self.at(self.cursor + 3);
        if self.points[cp2].is_on_curve() {
            return self.stop("curve has a single control point");
        }
        if self.points[end].is_off_curve() {
            return self.stop("curve has more than two control points");
        }

        self.cursor += 3;
        Some(Segment::Curve {
            start,
            cp1: next,
            cp2,
            end,
        })
    }
}
