// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Points of an editable path.

use crate::model::EntityId;
use kurbo::Point;

/// Whether a point lies on the outline or steers it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    /// A path vertex the curve passes through
    OnCurve,
    /// A bezier control point (handle)
    OffCurve,
}

/// A point in a path, owned by its `CubicPath`
#[derive(Debug, Clone, PartialEq)]
pub struct PathPoint {
    pub id: EntityId,
    pub point: Point,
    pub typ: PointType,
}

impl PathPoint {
    /// Create an on-curve point with a fresh id
    pub fn on_curve(point: Point) -> Self {
        Self {
            id: EntityId::next(),
            point,
            typ: PointType::OnCurve,
        }
    }

    /// Create a control point with a fresh id
    pub fn off_curve(point: Point) -> Self {
        Self {
            id: EntityId::next(),
            point,
            typ: PointType::OffCurve,
        }
    }

    /// Check if this point is on the outline
    pub fn is_on_curve(&self) -> bool {
        matches!(self.typ, PointType::OnCurve)
    }

    /// Check if this point is a control point
    pub fn is_off_curve(&self) -> bool {
        matches!(self.typ, PointType::OffCurve)
    }
}
