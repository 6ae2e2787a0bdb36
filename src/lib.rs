// SPDX-FileCopyrightText: 2025 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: Apache-2.0

pub mod constants;
pub mod describe;
pub mod error;
pub mod indent;
pub mod options;
pub mod relay;

use git_version::git_version;

pub use describe::{Describe, DescribeExt, DescribeMut, Described};
pub use indent::IndentWriter;
pub use options::{DescribeOptions, IndentOptions, LineStart};

pub const VERSION: &str = git_version!(
    args = ["--tags", "--always", "--dirty=-modified"],
    fallback = "unknown"
);
