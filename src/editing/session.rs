// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing session for one glyph layer.
//!
//! `EditSession` turns a glyph's contours into editable paths, holds the
//! point selection, and runs fit curve over every selected curve segment.
//! Converting back with `to_glyph` yields the same contours with updated
//! control point positions; no point is ever added or removed.

use super::selection::Selection;
use crate::error::FitError;
use crate::fit::{self, FitOutcome};
use crate::model::workspace::Glyph;
use crate::path::{Path, Segment};
use std::fmt;

/// Counts of what a batch fit did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitReport {
    /// Curves whose handles were moved
    pub fitted: usize,
    /// Selected curves whose handles do not converge
    pub not_convergent: usize,
    /// Selected line segments
    pub lines: usize,
}

impl FitReport {
    fn record(&mut self, outcome: FitOutcome) {
        match outcome {
            FitOutcome::Fitted => self.fitted += 1,
            FitOutcome::NotConvergent => self.not_convergent += 1,
            FitOutcome::Line => self.lines += 1,
        }
    }

    /// Combine the counts of two batches
    pub fn merge(&mut self, other: FitReport) {
        self.fitted += other.fitted;
        self.not_convergent += other.not_convergent;
        self.lines += other.lines;
    }
}

impl fmt::Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} fitted, {} skipped (handles do not converge), {} lines",
            self.fitted, self.not_convergent, self.lines
        )
    }
}

/// Paths and selection of the glyph being edited
#[derive(Debug, Clone)]
pub struct EditSession {
    pub glyph_name: String,

    /// One path per contour, in UFO order
    pub paths: Vec<Path>,

    pub selection: Selection,

    /// The glyph as loaded, used to restore point order on the way out
    original: Glyph,
}

impl EditSession {
    pub fn new(glyph: Glyph) -> Self {
        let paths = glyph.contours.iter().map(Path::from_contour).collect();
        Self {
            glyph_name: glyph.name.clone(),
            paths,
            selection: Selection::new(),
            original: glyph,
        }
    }

    /// Select every point of every cubic path
    pub fn select_all(&mut self) {
        for path in &self.paths {
            if let Path::Cubic(cubic) = path {
                self.selection.extend(cubic.points.iter().map(|pt| pt.id));
            }
        }
    }

    /// Select a point by its contour and its index in the UFO point list
    pub fn select_point(&mut self, contour: usize, index: usize) -> Result<(), FitError> {
        let out_of_range = FitError::PointOutOfRange { contour, index };
        match self.paths.get(contour) {
            Some(Path::Cubic(cubic)) => {
                let path_index = cubic.path_index(index).ok_or(out_of_range)?;
                self.selection.insert(cubic.points[path_index].id);
            }
            Some(Path::Quadratic(quad)) => {
                if index >= quad.points.len() {
                    return Err(out_of_range);
                }
                tracing::warn!(
                    "Contour {} of '{}' is quadratic; its points cannot be fitted",
                    contour,
                    self.glyph_name
                );
            }
            None => return Err(out_of_range),
        }
        Ok(())
    }

    /// Fit every selected curve segment in every contour with the same `t`.
    ///
    /// A segment is selected when both of its end points are. Segments that
    /// cannot be fitted are counted and skipped; they never abort the batch.
    pub fn fit_selection(&mut self, t: f64) -> FitReport {
        let mut report = FitReport::default();

        for (index, path) in self.paths.iter_mut().enumerate() {
            let Some(cubic) = path.as_cubic_mut() else {
                continue;
            };

            let selected: Vec<Segment> = cubic
                .segments()
                .filter(|segment| segment.is_selected(&cubic.points, &self.selection))
                .collect();

            for segment in &selected {
                report.record(fit::fit_segment(cubic, segment, t));
            }

            if !selected.is_empty() {
                tracing::debug!(
                    "Contour {} of '{}': {} selected segments",
                    index,
                    self.glyph_name,
                    selected.len()
                );
            }
        }

        tracing::info!("Fit '{}' with t = {}: {}", self.glyph_name, t, report);
        report
    }

    /// The edited glyph, with contours in their original point order
    pub fn to_glyph(&self) -> Glyph {
        let contours = self
            .paths
            .iter()
            .zip(&self.original.contours)
            .map(|(path, original)| path.to_contour(original))
            .collect();

        Glyph {
            name: self.glyph_name.clone(),
            contours,
        }
    }
}
