// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Editing model: selection, blend factor input, and the fit session

pub mod blend;
pub mod selection;
pub mod session;

pub use blend::{parse_percent, prompt_blend_factor};
pub use selection::Selection;
pub use session::{EditSession, FitReport};
