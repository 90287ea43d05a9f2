// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Output flags shared by every command.

use clap::{Args, ValueEnum};

/// How command results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Two-column table for humans.
    #[default]
    Table,
    /// Pretty-printed JSON object.
    Json,
}

/// Output format and table precision.
#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
    /// Digits after the decimal point in table output
    #[arg(
        long,
        global = true,
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(0..=17)
    )]
    pub precision: u8,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            precision: 6,
        }
    }
}
