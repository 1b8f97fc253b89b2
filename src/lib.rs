// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Fit curve: adjust how round or square cubic bezier segments are.
//!
//! The geometry lives in [`fit`]; [`path`] decomposes contours into
//! segments that index into their points; [`editing`] applies one blend
//! factor to every selected segment of a glyph; [`model`] reads and
//! writes UFO fonts.

use clap::Parser;

pub mod cli;
pub mod editing;
pub mod error;
pub mod fit;
pub mod model;
pub mod path;
pub mod settings;

pub use editing::{EditSession, FitReport, Selection};
pub use error::FitError;
pub use fit::{FitOutcome, fit_segment};
pub use path::{CubicPath, PathPoint, Segment};

/// Entry point for the fitcurve command
pub fn run() -> anyhow::Result<()> {
    // Logs go to stderr so stdout only carries the prompt and the report.
    // Verbosity can be raised via the RUST_LOG env var.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(settings::logging::DEFAULT_DIRECTIVE.parse()?),
        )
        .init();

    let args = cli::CliArgs::parse();
    let stdin = std::io::stdin();
    cli::execute(&args, stdin.lock(), std::io::stdout())?;
    Ok(())
}
