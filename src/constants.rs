// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

/// The unit that terminates a line.
///
/// Only this exact unit counts;
/// a preceding `'\r'` is treated as regular line content.
pub const LINE_BREAK: char = '\n';

/// [`LINE_BREAK`] as it appears in a byte stream.
#[allow(clippy::cast_possible_truncation)]
pub const LINE_BREAK_BYTE: u8 = LINE_BREAK as u8;

/// Number of fill characters inserted per level,
/// if nothing else is specified.
pub const DEFAULT_INDENT_WIDTH: usize = 2;

/// The character an indentation unit is made of,
/// if nothing else is specified.
pub const DEFAULT_FILL: char = ' ';
