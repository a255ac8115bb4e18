//! CLI argument definitions for the study library.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "prep",
    version,
    about = "Certification study library - query and summarize study units",
    long_about = "Query the aggregated certification study library.\n\n\
                  Content from every supported track (CPA, CIA, EA, CFP) is \
                  normalized to one canonical shape and queryable by section, \
                  content type, difficulty, or blueprint area."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Summarize the library: totals by section, type, and difficulty.
    Stats(StatsArgs),

    /// List study units, optionally filtered.
    List(ListArgs),

    /// List the registered exam sections.
    Sections,

    /// Verify collection invariants (duplicate ids are an authoring defect).
    Check,
}

#[derive(Parser)]
pub struct StatsArgs {
    /// Emit the summary as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct ListArgs {
    /// Filter by section code (e.g. FAR, CIA1, SEE2, CFP).
    #[arg(long = "section", value_name = "SECTION")]
    pub section: Option<String>,

    /// Filter by content type (definition, formula, mnemonic,
    /// comparison, concept, rule).
    #[arg(long = "kind", value_name = "KIND")]
    pub kind: Option<String>,

    /// Filter by difficulty (easy, medium, hard).
    #[arg(long = "difficulty", value_name = "DIFFICULTY")]
    pub difficulty: Option<String>,

    /// Filter by blueprint area (e.g. FAR-III, SEE1-1, CFP-RET).
    #[arg(long = "area", value_name = "AREA")]
    pub area: Option<String>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
