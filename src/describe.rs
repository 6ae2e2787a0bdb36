// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

use std::any::type_name;
use std::fmt::{self, Display, Write};

use crate::options::DescribeOptions;

/// Something that can write a human-readable description of itself.
///
/// Implementations that do not override [`Describe::describe`]
/// describe themselves by their (short) type name.
///
/// Nested parts are best described through an [`crate::IndentWriter`]
/// wrapped around `sink`:
///
/// ```
/// use std::fmt::{self, Write};
/// use describable::{Describe, DescribeExt, DescribeOptions, IndentWriter};
///
/// struct Leaf;
/// impl Describe for Leaf {}
///
/// struct Node(Vec<Leaf>);
/// impl Describe for Node {
///     fn describe(&self, sink: &mut dyn Write, options: &DescribeOptions) -> fmt::Result {
///         write!(sink, "Node")?;
///         let mut children = IndentWriter::new(&mut *sink, 2);
///         for child in &self.0 {
///             writeln!(children)?;
///             child.describe(&mut children, options)?;
///         }
///         Ok(())
///     }
/// }
///
/// assert_eq!(Node(vec![Leaf, Leaf]).described().to_string(), "Node\n  Leaf\n  Leaf");
/// ```
pub trait Describe {
    /// Writes a description of `self` into `sink`.
    ///
    /// # Errors
    ///
    /// Only if writing to `sink` fails.
    fn describe(&self, sink: &mut dyn Write, _options: &DescribeOptions) -> fmt::Result {
        sink.write_str(&short_type_name::<Self>())
    }
}

/// Like [`Describe`],
/// for objects that need mutable access to themselves
/// to produce a description.
///
/// Every [`Describe`] type is [`DescribeMut`] as well.
pub trait DescribeMut {
    /// Writes a description of `self` into `sink`.
    ///
    /// # Errors
    ///
    /// Only if writing to `sink` fails.
    fn describe_mut(&mut self, sink: &mut dyn Write, _options: &DescribeOptions) -> fmt::Result {
        sink.write_str(&short_type_name::<Self>())
    }
}

impl<T: Describe + ?Sized> DescribeMut for T {
    fn describe_mut(&mut self, sink: &mut dyn Write, options: &DescribeOptions) -> fmt::Result {
        self.describe(sink, options)
    }
}

impl<T: Describe + ?Sized> Describe for &T {
    fn describe(&self, sink: &mut dyn Write, options: &DescribeOptions) -> fmt::Result {
        (**self).describe(sink, options)
    }
}

impl<T: Describe + ?Sized> Describe for Box<T> {
    fn describe(&self, sink: &mut dyn Write, options: &DescribeOptions) -> fmt::Result {
        (**self).describe(sink, options)
    }
}

/// [`std::any::type_name`] of `T`,
/// with all module paths removed,
/// also those of generic arguments.
///
/// ```
/// use describable::describe::short_type_name;
///
/// assert_eq!(short_type_name::<Vec<Option<String>>>(), "Vec<Option<String>>");
/// ```
#[must_use]
pub fn short_type_name<T: ?Sized>() -> String {
    shorten_type_path(type_name::<T>())
}

fn shorten_type_path(full: &str) -> String {
    let mut short = String::with_capacity(full.len());
    let mut segment_start = 0;
    for (idx, c) in full.char_indices() {
        if !(c.is_alphanumeric() || c == '_' || c == ':') {
            push_last_segment(&mut short, full.get(segment_start..idx).unwrap_or_default());
            short.push(c);
            segment_start = idx + c.len_utf8();
        }
    }
    push_last_segment(&mut short, full.get(segment_start..).unwrap_or_default());
    short
}

/// Pushes the last name of `path`.
///
/// A `path` starting with `::` continues a qualified path like `<T as Trait>::Assoc`,
/// and one ending in `::` continues into something like `{{closure}}`;
/// both keep their separators.
fn push_last_segment(short: &mut String, path: &str) {
    if let Some(rest) = path.strip_prefix("::") {
        short.push_str("::");
        push_last_segment(short, rest);
    } else if let Some(parent) = path.strip_suffix("::") {
        push_last_segment(short, parent);
        short.push_str("::");
    } else {
        short.push_str(path.rsplit("::").next().unwrap_or(path));
    }
}

/// Renders a [`Describe`] object through [`Display`],
/// by default with [`DescribeOptions::compact`].
#[derive(Debug, Clone, Copy)]
pub struct Described<'a, T: ?Sized> {
    object: &'a T,
    options: DescribeOptions,
}

impl<'a, T: Describe + ?Sized> Described<'a, T> {
    #[must_use]
    pub const fn new(object: &'a T) -> Self {
        Self {
            object,
            options: DescribeOptions::compact(),
        }
    }

    #[must_use]
    pub const fn with_options(mut self, options: DescribeOptions) -> Self {
        self.options = options;
        self
    }
}

impl<T: Describe + ?Sized> Display for Described<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.object.describe(f, &self.options)
    }
}

pub trait DescribeExt: Describe {
    /// Makes `self` printable with `{}`,
    /// using the compact description.
    fn described(&self) -> Described<'_, Self> {
        Described::new(self)
    }
}

impl<T: Describe + ?Sized> DescribeExt for T {}

/// Renders the compact description of a [`DescribeMut`] object.
///
/// # Errors
///
/// Only if the object's own description logic fails.
pub fn describe_mut_to_string<T: DescribeMut + ?Sized>(object: &mut T) -> Result<String, fmt::Error> {
    let mut out = String::new();
    object.describe_mut(&mut out, &DescribeOptions::compact())?;
    Ok(out)
}
