// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use crate::constants::{DEFAULT_FILL, DEFAULT_INDENT_WIDTH};

/// Options handed to every [`crate::Describe::describe`] call.
///
/// Neither flag is interpreted by this crate;
/// what they mean is entirely up to the described object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DescribeOptions {
    /// Whether the description should include extended detail.
    pub verbose: bool,
    /// Whether the description should be rendered
    /// in a markup-capable format (e.g. HTML),
    /// instead of plain text.
    pub use_markup: bool,
}

impl DescribeOptions {
    /// Short, plain-text descriptions.
    ///
    /// This is what [`crate::Described`] uses
    /// when rendering through [`std::fmt::Display`].
    #[must_use]
    pub const fn compact() -> Self {
        Self {
            verbose: false,
            use_markup: false,
        }
    }
}

impl Default for DescribeOptions {
    fn default() -> Self {
        Self {
            verbose: true,
            use_markup: false,
        }
    }
}

/// Where an [`crate::IndentWriter`] considers itself to be
/// right after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineStart {
    /// The writer got attached to a line already in progress,
    /// so the first line written through it is left as is.
    #[default]
    Continue,
    /// Output begins on a fresh line,
    /// so the very first line gets indented too.
    Fresh,
}

impl LineStart {
    #[must_use]
    pub const fn is_fresh(self) -> bool {
        matches!(self, Self::Fresh)
    }
}

/// Construction-time configuration of an [`crate::IndentWriter`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IndentOptions {
    /// Number of fill characters inserted at the start of each line.
    pub width: usize,
    /// The character the indentation is made of.
    pub fill: char,
    /// Whether the first line gets indented as well.
    pub line_start: LineStart,
}

impl IndentOptions {
    #[must_use]
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_fill(mut self, fill: char) -> Self {
        self.fill = fill;
        self
    }

    #[must_use]
    pub const fn with_line_start(mut self, line_start: LineStart) -> Self {
        self.line_start = line_start;
        self
    }

    /// The string inserted in front of every non-empty line.
    #[must_use]
    pub fn indent_unit(&self) -> String {
        std::iter::repeat_n(self.fill, self.width).collect()
    }
}

impl Default for IndentOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_INDENT_WIDTH,
            fill: DEFAULT_FILL,
            line_start: LineStart::default(),
        }
    }
}

/// Configuration of [`crate::relay::run`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct RelayOptions {
    /// How many indenting writers to nest around the output.
    pub levels: usize,
    /// Configuration of each of the nested writers.
    pub indent: IndentOptions,
}
