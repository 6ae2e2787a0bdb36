// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::indent;
use crate::options::RelayOptions;

/// Where to read the text to indent from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    /// Interprets a command line argument,
    /// where `-` stands for stdin.
    #[must_use]
    pub fn from_arg(arg: PathBuf) -> Self {
        if arg.as_os_str() == "-" {
            Self::Stdin
        } else {
            Self::File(arg)
        }
    }

    fn open(&self) -> Result<Box<dyn BufRead>> {
        match self {
            Self::Stdin => Ok(Box::new(io::stdin().lock())),
            Self::File(path) => {
                let file = File::open(path).map_err(|err| {
                    if err.kind() == io::ErrorKind::NotFound {
                        Error::InputFileDoesNotExist(path.clone())
                    } else {
                        Error::FailedToReadInput(path.clone(), err)
                    }
                })?;
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    fn read_error(&self, err: io::Error) -> Error {
        match self {
            Self::Stdin => Error::FailedToReadStream(err),
            Self::File(path) => Error::FailedToReadInput(path.clone(), err),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("-"),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Copies everything from `input` to `output`,
/// and returns the number of input bytes copied.
///
/// Read failures are turned into [`Error`]s by `read_error`.
fn copy_through<R, W, F>(input: &mut R, output: &mut W, read_error: F) -> Result<u64>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
    F: Fn(io::Error) -> Error,
{
    let mut copied: u64 = 0;
    loop {
        let chunk = match input.fill_buf() {
            Ok([]) => break,
            Ok(chunk) => chunk,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(read_error(err)),
        };
        output.write_all(chunk)?;
        let len = chunk.len();
        input.consume(len);
        copied += len as u64;
    }
    Ok(copied)
}

/// Streams `input` into `output`,
/// indented by `options.levels` nested [`indent::IndentWriter`]s.
///
/// # Errors
///
/// If reading from `input` or writing to `output` fails.
pub fn relay<R: BufRead, W: Write>(mut input: R, output: W, options: &RelayOptions) -> Result<u64> {
    let mut indented = indent::nested(output, options.levels, &options.indent);
    let copied = copy_through(&mut input, &mut indented, Error::FailedToReadStream)?;
    indented.flush()?;
    Ok(copied)
}

/// Streams all `sources` one after the other into `output`,
/// indented by `options.levels` nested [`indent::IndentWriter`]s.
///
/// The line state carries over from one source to the next,
/// exactly as if they were a single, concatenated input.
///
/// # Errors
///
/// If any of the sources can not be read,
/// or writing to `output` fails.
pub fn run<W: Write>(options: &RelayOptions, sources: &[Source], output: W) -> Result<()> {
    let mut indented = indent::nested(output, options.levels, &options.indent);
    for source in sources {
        tracing::debug!(
            "Relaying {source} through {} level(s) of indentation ...",
            options.levels
        );
        let mut input = source.open()?;
        let copied = copy_through(&mut input, &mut indented, |err| source.read_error(err))?;
        tracing::trace!("Relayed {copied} bytes from {source}");
    }
    indented.flush()?;
    Ok(())
}
