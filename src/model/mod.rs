// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Font data model

pub mod entity_id;
pub mod workspace;

pub use entity_id::EntityId;
pub use workspace::{Contour, ContourPoint, Glyph, PointType, Workspace};
