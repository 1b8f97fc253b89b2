// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the geometry core and the editing layer.

use thiserror::Error;

/// Errors that can occur while fitting curve handles.
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum FitError {
    /// The blend factor typed by the user is not a number
    #[error("input was not a number: {0:?}")]
    InvalidInput(String),

    /// A zero-length vector cannot be normalized
    #[error("cannot normalize a zero-length vector")]
    DivideByZero,

    #[error("glyph not found: {0}")]
    GlyphNotFound(String),

    #[error("layer not found: {0}")]
    LayerNotFound(String),

    /// A selected point does not exist in the glyph
    #[error("no point {index} in contour {contour}")]
    PointOutOfRange { contour: usize, index: usize },
}
