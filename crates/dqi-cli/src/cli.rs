//! CLI argument definitions for the diet-quality index scorer.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "dqi",
    version,
    about = "Diet-quality index scoring for nutrient intake tables",
    long_about = "Score diet-quality indices (DII, HEI, MIND, DASH, AHEI, PHDI, MEDI, \
                  ACS2020 and variants) from a CSV of per-person nutrient intakes.\n\n\
                  Scored columns are appended to the input table; each index also \
                  reports summary statistics."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score one or more indices over a CSV of nutrient intakes.
    Score(ScoreArgs),

    /// List all registered indices and their required columns.
    Indices,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Path to the input CSV (one row per person, named nutrient columns).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Indices to score, by name (default: every index whose required
    /// columns are present is attempted).
    #[arg(long = "index", value_name = "NAME", value_delimiter = ',')]
    pub indices: Vec<String>,

    /// Write the input table with scored columns appended to this path.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Apply a source-system column mapping before scoring.
    #[arg(long = "apply-map", value_enum, value_delimiter = ',')]
    pub apply_map: Vec<MappingArg>,

    /// Infer units from column suffixes and convert to canonical units.
    #[arg(long = "normalize-units")]
    pub normalize_units: bool,

    /// Identifier column exempt from numeric coercion.
    #[arg(long = "id-column", value_name = "NAME", default_value = "id")]
    pub id_column: String,

    /// Treat unparsable values as missing instead of failing validation.
    #[arg(long = "permissive")]
    pub permissive: bool,
}

/// Named source-system mapping tables.
#[derive(Clone, Copy, ValueEnum)]
pub enum MappingArg {
    UsdaHei,
    UsdaDash,
    UsdaDii,
    DiiCase,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
