// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Fit settings and configuration constants.
//!
//! These are fixed for the lifetime of the program. Everything that
//! changes per invocation (font, glyphs, selection, blend factor) comes
//! from the command line.

// ============================================================================
// FIT SETTINGS
// ============================================================================
/// Two normalized handle directions whose cross product is below this
/// are treated as parallel (no convergence point)
const PARALLEL_TOLERANCE: f64 = 1e-4;

/// The user types a percentage; the blend factor is `value / PERCENT_SCALE`
const PERCENT_SCALE: f64 = 100.0;

// ============================================================================
// PROMPT SETTINGS
// ============================================================================
const PROMPT_TITLE: &str = "Fit Curve";

const PROMPT_TEXT: &str =
    "Enter a number (0 = curve becomes a line, 100 = control points converge)";

// ============================================================================
// LOGGING SETTINGS
// ============================================================================
/// Directive added to `RUST_LOG` when the binary starts
const DEFAULT_LOG_DIRECTIVE: &str = "fitcurve=info";

// ============================================================================
// PUBLIC API - Don't edit below this line unless you know what you're doing
// ============================================================================

/// Geometry settings for handle fitting
pub mod fit {
    /// Cross-product tolerance for parallel handle detection
    pub const PARALLEL_TOLERANCE: f64 = super::PARALLEL_TOLERANCE;

    /// Divisor turning the typed percentage into a blend factor
    pub const PERCENT_SCALE: f64 = super::PERCENT_SCALE;
}

/// Blend factor prompt shown when no percentage is given on the
/// command line
pub mod prompt {
    pub const TITLE: &str = super::PROMPT_TITLE;
    pub const TEXT: &str = super::PROMPT_TEXT;
}

/// Tracing subscriber defaults
pub mod logging {
    pub const DEFAULT_DIRECTIVE: &str = super::DEFAULT_LOG_DIRECTIVE;
}
