// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;
use std::io;

use crate::constants::{LINE_BREAK, LINE_BREAK_BYTE};
use crate::options::{IndentOptions, LineStart};

/// Wraps an output sink,
/// and prefixes every line written through it with a fixed indentation.
///
/// The indentation is inserted lazily,
/// right before the first unit of a line that is not itself a line break.
/// Empty lines thus stay empty,
/// and a last line without a trailing line break still gets indented.
///
/// Works on top of both [`io::Write`] (unit = byte)
/// and [`fmt::Write`] (unit = char) sinks,
/// and implements the same trait as the sink it wraps,
/// so writers can wrap writers;
/// the indentation then adds up per level.
///
/// To not take ownership of the destination,
/// pass it in as `&mut dest`.
///
/// # Examples
///
/// ```
/// use std::fmt::Write;
/// use describable::IndentWriter;
///
/// let mut out = String::new();
/// let mut w = IndentWriter::new(&mut out, 2);
/// write!(w, "begin\nhello\n\nend\n")?;
/// assert_eq!(out, "begin\n  hello\n\n  end\n");
/// # Ok::<_, std::fmt::Error>(())
/// ```
#[derive(Debug)]
pub struct IndentWriter<W> {
    dest: W,
    indent: String,
    at_line_start: bool,
}

impl<W> IndentWriter<W> {
    /// Indents all but the first line by `width` spaces.
    pub fn new(dest: W, width: usize) -> Self {
        Self::with_options(dest, &IndentOptions::new(width))
    }

    /// Indents every line by `width` spaces, including the first one.
    pub fn fresh(dest: W, width: usize) -> Self {
        Self::with_options(
            dest,
            &IndentOptions::new(width).with_line_start(LineStart::Fresh),
        )
    }

    pub fn with_options(dest: W, options: &IndentOptions) -> Self {
        Self {
            dest,
            indent: options.indent_unit(),
            at_line_start: options.line_start.is_fresh(),
        }
    }

    /// The string inserted in front of each non-empty line.
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Whether the next unit written starts a new line.
    pub const fn is_at_line_start(&self) -> bool {
        self.at_line_start
    }

    pub const fn get_ref(&self) -> &W {
        &self.dest
    }

    /// Writing to the destination directly bypasses the line tracking.
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.dest
    }

    pub fn into_inner(self) -> W {
        self.dest
    }

    /// Whether the next write has to be preceded by the indentation.
    const fn indent_due(&self, first_is_line_break: bool) -> bool {
        self.at_line_start && !first_is_line_break
    }
}

/// Returns the length of the leading part of `buf`
/// up to and including the first line break,
/// or all of `buf` if there is none.
fn first_line_len(buf: &[u8]) -> usize {
    buf.iter()
        .position(|&byte| byte == LINE_BREAK_BYTE)
        .map_or(buf.len(), |pos| pos + 1)
}

impl<W: io::Write> io::Write for IndentWriter<W> {
    /// Handles at most one line per call,
    /// and reports how many bytes the destination accepted of it.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let Some(&first) = buf.first() else {
            return Ok(0);
        };
        let line = buf.get(..first_line_len(buf)).unwrap_or(buf);

        if self.indent_due(first == LINE_BREAK_BYTE) {
            self.dest.write_all(self.indent.as_bytes())?;
            self.at_line_start = false;
        }

        let written = self.dest.write(line)?;
        if written > 0 {
            self.at_line_start = line.get(written - 1) == Some(&LINE_BREAK_BYTE);
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.dest.flush()
    }
}

impl<W: fmt::Write> fmt::Write for IndentWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for line in s.split_inclusive(LINE_BREAK) {
            if self.indent_due(line.starts_with(LINE_BREAK)) {
                self.dest.write_str(&self.indent)?;
            }
            self.at_line_start = line.ends_with(LINE_BREAK);
            self.dest.write_str(line)?;
        }
        Ok(())
    }

    fn write_char(&mut self, c: char) -> fmt::Result {
        if self.indent_due(c == LINE_BREAK) {
            self.dest.write_str(&self.indent)?;
        }
        self.at_line_start = c == LINE_BREAK;
        self.dest.write_char(c)
    }
}

/// Wraps `dest` into `levels` nested [`IndentWriter`]s,
/// each configured with `options`,
/// and returns the innermost one, which is the one to write to.
///
/// With `levels == 0`, `dest` itself is returned (boxed).
pub fn nested<'a, W>(dest: W, levels: usize, options: &IndentOptions) -> Box<dyn io::Write + 'a>
where
    W: io::Write + 'a,
{
    let mut writer: Box<dyn io::Write + 'a> = Box::new(dest);
    for _ in 0..levels {
        writer = Box::new(IndentWriter::with_options(writer, options));
    }
    writer
}
