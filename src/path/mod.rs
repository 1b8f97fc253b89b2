// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Path abstraction for glyph outlines, the editable representation.
//!
//! Cubic contours become `CubicPath`s whose segments can be fitted.
//! Quadratic (TrueType-style) contours are carried through untouched so
//! contour indices stay aligned with the UFO.

pub mod cubic;
pub mod point;
pub mod segment;

pub use cubic::CubicPath;
pub use point::{PathPoint, PointType};
pub use segment::{Segment, Segments};

use crate::model::workspace;

/// A contour in a glyph outline
#[derive(Debug, Clone)]
pub enum Path {
    /// A cubic bezier path
    Cubic(CubicPath),
    /// A quadratic contour, kept as loaded
    Quadratic(workspace::Contour),
}

impl Path {
    /// Convert from a workspace contour, detecting quadratic contours by
    /// their `qcurve` points
    pub fn from_contour(contour: &workspace::Contour) -> Self {
        if contour.is_quadratic() {
            Path::Quadratic(contour.clone())
        } else {
            Path::Cubic(CubicPath::from_contour(contour))
        }
    }

    /// Convert back to a workspace contour, given the contour it was
    /// built from
    pub fn to_contour(&self, original: &workspace::Contour) -> workspace::Contour {
        match self {
            Path::Cubic(cubic) => cubic.to_contour(original),
            Path::Quadratic(contour) => contour.clone(),
        }
    }

    pub fn as_cubic_mut(&mut self) -> Option<&mut CubicPath> {
        match self {
            Path::Cubic(cubic) => Some(cubic),
            Path::Quadratic(_) => None,
        }
    }
}
