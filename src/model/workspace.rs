// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! UFO access through `norad`.
//!
//! `Workspace` keeps the loaded `norad::Font` and hands out owned copies of
//! glyph outlines (`Glyph` / `Contour` / `ContourPoint`). After editing, the
//! new positions are written back into the font's own points by index, so
//! everything a fit does not touch (point names, identifiers, lib data,
//! smooth flags) is saved exactly as it was loaded.

use anyhow::{Context, Result, bail};
use norad::{Font, Glyph as NoradGlyph, Layer};
use std::path::{Path, PathBuf};

use crate::error::FitError;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Outline of one glyph in one layer (owned data)
#[derive(Debug, Clone)]
pub struct Glyph {
    pub name: String,
    pub contours: Vec<Contour>,
}

/// A contour in UFO point order
#[derive(Debug, Clone)]
pub struct Contour {
    pub points: Vec<ContourPoint>,
}

/// A point in a contour
#[derive(Debug, Clone)]
pub struct ContourPoint {
    pub x: f64,
    pub y: f64,
    pub point_type: PointType,
}

/// Point type classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointType {
    Move,
    Line,
    OffCurve,
    Curve,
    QCurve,
}

impl PointType {
    /// Check if this type marks a point on the outline
    pub fn is_on_curve(self) -> bool {
        !matches!(self, PointType::OffCurve)
    }
}

impl Contour {
    /// UFO contours are open exactly when they start with a `move` point
    pub fn is_closed(&self) -> bool {
        self.points
            .first()
            .map(|pt| pt.point_type != PointType::Move)
            .unwrap_or(false)
    }

    /// Whether this contour uses TrueType-style quadratic curves
    pub fn is_quadratic(&self) -> bool {
        self.points
            .iter()
            .any(|pt| pt.point_type == PointType::QCurve)
    }
}

// ============================================================================
// WORKSPACE
// ============================================================================

/// A loaded UFO font
#[derive(Debug, Clone)]
pub struct Workspace {
    /// Path to the UFO directory
    pub path: PathBuf,
    font: Font,
}

impl Workspace {
    /// Load a UFO from a directory path
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let font =
            Font::load(path).with_context(|| format!("Failed to load UFO from {:?}", path))?;

        tracing::info!(
            "Loaded {:?} ({} glyphs in default layer)",
            path,
            font.default_layer().len()
        );

        Ok(Self {
            path: path.to_path_buf(),
            font,
        })
    }

    /// Get the outline of a glyph, from the named layer or the default one
    pub fn glyph(&self, layer: Option<&str>, name: &str) -> Result<Glyph, FitError> {
        let norad_glyph = self
            .layer(layer)?
            .get_glyph(name)
            .ok_or_else(|| FitError::GlyphNotFound(name.to_string()))?;
        Ok(Self::convert_glyph(norad_glyph))
    }

    /// Write edited point positions back into the font
    ///
    /// The glyph must have the same contour and point structure as when
    /// it was read; only coordinates are copied.
    pub fn update_glyph(&mut self, layer: Option<&str>, glyph: &Glyph) -> Result<()> {
        let norad_glyph = self
            .layer_mut(layer)?
            .get_glyph_mut(&glyph.name)
            .ok_or_else(|| FitError::GlyphNotFound(glyph.name.clone()))?;

        if norad_glyph.contours.len() != glyph.contours.len() {
            bail!(
                "Glyph '{}' has {} contours, edited copy has {}",
                glyph.name,
                norad_glyph.contours.len(),
                glyph.contours.len()
            );
        }

        for (index, (target, source)) in norad_glyph
            .contours
            .iter_mut()
            .zip(&glyph.contours)
            .enumerate()
        {
            if target.points.len() != source.points.len() {
                bail!(
                    "Contour {} of glyph '{}' changed point count ({} -> {})",
                    index,
                    glyph.name,
                    target.points.len(),
                    source.points.len()
                );
            }
            for (pt, edited) in target.points.iter_mut().zip(&source.points) {
                pt.x = edited.x;
                pt.y = edited.y;
            }
        }

        Ok(())
    }

    /// Save the UFO back to where it was loaded from
    pub fn save(&self) -> Result<()> {
        self.save_as(&self.path)
    }

    /// Save the UFO to a different directory
    pub fn save_as<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.font
            .save(path)
            .with_context(|| format!("Failed to save UFO to {:?}", path))?;
        tracing::info!("Saved {:?}", path);
        Ok(())
    }

    fn layer(&self, name: Option<&str>) -> Result<&Layer, FitError> {
        match name {
            None => Ok(self.font.default_layer()),
            Some(name) => self
                .font
                .layers
                .get(name)
                .ok_or_else(|| FitError::LayerNotFound(name.to_string())),
        }
    }

    fn layer_mut(&mut self, name: Option<&str>) -> Result<&mut Layer, FitError> {
        match name {
            None => Ok(self.font.default_layer_mut()),
            Some(name) => self
                .font
                .layers
                .get_mut(name)
                .ok_or_else(|| FitError::LayerNotFound(name.to_string())),
        }
    }

    /// Convert a norad Glyph to our internal Glyph
    fn convert_glyph(norad_glyph: &NoradGlyph) -> Glyph {
        let contours = norad_glyph
            .contours
            .iter()
            .map(Self::convert_contour)
            .collect();

        Glyph {
            name: norad_glyph.name().to_string(),
            contours,
        }
    }

    /// Convert a norad contour to our internal Contour
    fn convert_contour(norad_contour: &norad::Contour) -> Contour {
        let points = norad_contour
            .points
            .iter()
            .map(|pt| ContourPoint {
                x: pt.x,
                y: pt.y,
                point_type: Self::convert_point_type(&pt.typ),
            })
            .collect();
        Contour { points }
    }

    /// Convert a norad PointType to our internal PointType
    fn convert_point_type(typ: &norad::PointType) -> PointType {
        match typ {
            norad::PointType::Move => PointType::Move,
            norad::PointType::Line => PointType::Line,
            norad::PointType::OffCurve => PointType::OffCurve,
            norad::PointType::Curve => PointType::Curve,
            norad::PointType::QCurve => PointType::QCurve,
        }
    }
}
