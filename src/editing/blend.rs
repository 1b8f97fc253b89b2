// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Reading the blend factor from the user.
//!
//! The user types a percentage (`0` flattens, `100` meets at the
//! convergence point). Parsing happens once, before any geometry runs, so
//! a bad value aborts the whole batch without touching a single point.

use crate::error::FitError;
use crate::settings;
use std::io::{self, BufRead, Write};

/// Turn a typed percentage into a blend factor.
///
/// Any finite number is accepted, including negative values and values
/// above 100.
pub fn parse_percent(input: &str) -> Result<f64, FitError> {
    let trimmed = input.trim().trim_end_matches('%').trim_end();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value / settings::fit::PERCENT_SCALE),
        _ => Err(FitError::InvalidInput(input.trim().to_string())),
    }
}

/// Ask for a percentage on `output` and read one line from `input`.
///
/// Returns `Ok(None)` when the user cancels (empty line or end of input).
pub fn prompt_blend_factor<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> io::Result<Option<Result<f64, FitError>>> {
    write!(
        output,
        "{}\n{}\n> ",
        settings::prompt::TITLE,
        settings::prompt::TEXT
    )?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 || line.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_percent(&line)))
}
