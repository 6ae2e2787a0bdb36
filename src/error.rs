// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("The input file {0} does not seem to exist")]
    InputFileDoesNotExist(PathBuf),

    #[error("Error while reading {0}: {1}")]
    FailedToReadInput(PathBuf, #[source] io::Error),

    #[error("Error while reading the input stream: {0}")]
    FailedToReadStream(#[source] io::Error),

    /// Represents all cases of `std::io::Error` on the output side.
    #[error("Failed to write the indented output: {0}")]
    FailedToWriteOutput(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
