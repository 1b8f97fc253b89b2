// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Command line interface: the "Fit curve" command.
//!
//! Examples:
//!   fitcurve MyFont.ufo -g O --all -p 100          # square up every curve
//!   fitcurve MyFont.ufo -g O --point 0:3 --point 0:6
//!   fitcurve MyFont.ufo -g a -g b --all            # prompts for the percentage
//!   fitcurve MyFont.ufo -g O --all -p 80 --dry-run

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::collections::HashSet;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

use crate::editing::{EditSession, FitReport, parse_percent, prompt_blend_factor};
use crate::model::Workspace;

/// A point picked by contour number and index in the UFO point list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointRef {
    pub contour: usize,
    pub index: usize,
}

impl FromStr for PointRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (contour, index) = s
            .split_once(':')
            .ok_or_else(|| format!("expected CONTOUR:INDEX, got {s:?}"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|_| format!("{part:?} is not a point or contour number"))
        };
        Ok(Self {
            contour: parse(contour)?,
            index: parse(index)?,
        })
    }
}

/// fitcurve CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fitcurve",
    version,
    about = "Make cubic curves in a UFO squarer or rounder",
    long_about = "Moves the control points of selected curve segments along their handles, toward the point where the handles converge. 0 retracts the handles (the curve becomes a line), 100 makes the handles meet, larger values cross them. Curves whose handles are parallel, and line segments, are left alone."
)]
pub struct CliArgs {
    /// UFO font directory
    pub ufo: PathBuf,

    /// Glyph to edit (repeat for several glyphs)
    #[arg(short, long = "glyph", required = true)]
    pub glyphs: Vec<String>,

    /// Layer to edit (default layer if omitted)
    #[arg(short, long)]
    pub layer: Option<String>,

    /// Blend percentage; prompts on stdin when omitted
    #[arg(short, long, allow_hyphen_values = true)]
    pub percent: Option<String>,

    /// Select every point of the glyph
    #[arg(short, long, conflicts_with = "points")]
    pub all: bool,

    /// Select a point by contour and index, e.g. 0:3 (repeatable)
    #[arg(long = "point", value_name = "CONTOUR:INDEX")]
    pub points: Vec<PointRef>,

    /// Write the result to another UFO instead of in place
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Fit and report, but do not write anything
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Glyph names in command line order, each named once
    pub fn glyph_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.glyphs
            .iter()
            .map(String::as_str)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Check the arguments before any font is loaded
    pub fn validate(&self) -> Result<()> {
        if !self.ufo.is_dir() {
            bail!(
                "UFO does not exist: {}\nMake sure the path is correct and points to a .ufo directory.",
                self.ufo.display()
            );
        }
        if !self.all && self.points.is_empty() {
            bail!("Nothing selected: pass --all or at least one --point CONTOUR:INDEX");
        }
        Ok(())
    }
}

/// Run the fit described by `args`.
///
/// Selection is resolved and the blend factor is read before any point
/// moves. Returns `Ok(None)` when the user cancels the prompt; in that case
/// nothing is written.
pub fn execute<R: BufRead, W: Write>(
    args: &CliArgs,
    input: R,
    mut output: W,
) -> Result<Option<FitReport>> {
    args.validate()?;

    let mut workspace = Workspace::load(&args.ufo)?;
    let layer = args.layer.as_deref();

    let names = args.glyph_names();
    let mut sessions = Vec::with_capacity(names.len());
    for name in names {
        let mut session = EditSession::new(workspace.glyph(layer, name)?);
        if args.all {
            session.select_all();
        } else {
            for point in &args.points {
                session
                    .select_point(point.contour, point.index)
                    .with_context(|| format!("Bad selection in glyph '{}'", name))?;
            }
        }
        sessions.push(session);
    }

    let t = match &args.percent {
        Some(text) => parse_percent(text)?,
        None => match prompt_blend_factor(input, &mut output)? {
            Some(parsed) => parsed?,
            None => {
                tracing::info!("Fit cancelled, nothing changed");
                return Ok(None);
            }
        },
    };

    let mut total = FitReport::default();
    for session in &mut sessions {
        total.merge(session.fit_selection(t));
        workspace.update_glyph(layer, &session.to_glyph())?;
    }

    if args.dry_run {
        tracing::info!("Dry run, not saving");
    } else if let Some(path) = &args.output {
        workspace.save_as(path)?;
    } else {
        workspace.save()?;
    }

    writeln!(output, "{}", total)?;
    Ok(Some(total))
}
