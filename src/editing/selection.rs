// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Set of selected points.
//!
//! The host decides what is selected; fitting only reads the set. A
//! `BTreeSet` keeps iteration order deterministic for logging.

use crate::model::EntityId;
use std::collections::BTreeSet;

/// Ids of the points the user has selected
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    inner: BTreeSet<EntityId>,
}

impl Selection {
    /// Create a new empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the selection is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Get the number of selected points
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if a point is selected
    pub fn contains(&self, id: &EntityId) -> bool {
        self.inner.contains(id)
    }

    /// Add a point to the selection
    pub fn insert(&mut self, id: EntityId) {
        self.inner.insert(id);
    }

    /// Iterate over selected points in id order
    pub fn iter(&self) -> impl Iterator<Item = &EntityId> {
        self.inner.iter()
    }
}

impl Extend<EntityId> for Selection {
    fn extend<I: IntoIterator<Item = EntityId>>(&mut self, iter: I) {
        self.inner.extend(iter);
    }
}
