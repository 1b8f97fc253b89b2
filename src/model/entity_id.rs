// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Identity for path points.
//!
//! Every `PathPoint` gets an `EntityId` when a contour is opened for
//! editing. The host marks points selected by id, so selection survives
//! point positions changing under a fit.

use std::sync::atomic::{AtomicU64, Ordering};

/// A unique identifier for a point in an edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(u64);

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

impl EntityId {
    /// Allocate a fresh id; ids are never handed out twice
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}
