// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! 2D vector helpers on top of `kurbo`.
//!
//! The arithmetic is `kurbo`'s; these wrappers name the operations the
//! fitter uses and make normalization of a zero vector an error instead
//! of a NaN.

use crate::error::FitError;
use kurbo::{Point, Vec2};

/// Vector from `b` to `a`
#[inline]
pub fn subtract(a: Point, b: Point) -> Vec2 {
    a - b
}

/// Point `p` moved by `v`
#[inline]
pub fn add(p: Point, v: Vec2) -> Point {
    p + v
}

/// `v` scaled by `k`
#[inline]
pub fn scale(v: Vec2, k: f64) -> Vec2 {
    v * k
}

/// Dot product
#[inline]
pub fn dot(a: Vec2, b: Vec2) -> f64 {
    a.dot(b)
}

/// 2D cross product (z component of the 3D one)
#[inline]
pub fn cross(a: Vec2, b: Vec2) -> f64 {
    a.cross(b)
}

/// Euclidean length
#[inline]
pub fn length(v: Vec2) -> f64 {
    v.hypot()
}

/// Unit vector in the direction of `v`
pub fn normalize(v: Vec2) -> Result<Vec2, FitError> {
    let len = length(v);
    if len == 0.0 {
        return Err(FitError::DivideByZero);
    }
    Ok(Vec2::new(v.x / len, v.y / len))
}
