// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use cli::InitError;
use std::io;
use thiserror::Error;

mod cli;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to initialize the CLI tool: {0}")]
    Init(#[from] InitError),

    #[error("Failed to indent: {0}")]
    Relay(#[from] describable::error::Error),
}

fn main() -> Result<(), CliError> {
    let (options, sources) = cli::init()?;

    let stdout = io::stdout().lock();
    describable::relay::run(&options, &sources, stdout)?;
    Ok(())
}
