// Copyright 2025 the Runebender Xilem Authors
// SPDX-License-Identifier: Apache-2.0

//! Fit curve command line entry point

fn main() -> anyhow::Result<()> {
    fitcurve::run()
}
