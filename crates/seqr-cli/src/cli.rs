//! CLI argument definitions for the template validator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use seqr_standards::TemplateKind;

#[derive(Parser)]
#[command(
    name = "seqr-templates",
    version,
    about = "Validate seqr family, individual and pedigree template files",
    long_about = "Validate seqr upload templates before they are loaded.\n\n\
                  Accepts CSV or TSV files and reports header problems and\n\
                  every invalid cell, row by row."
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
    /// Validate a template file and list invalid rows.
    Validate(ValidateArgs),

    /// List the columns of a template.
    Columns(ColumnsArgs),
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// Template the file is expected to follow.
    #[arg(long = "template", short = 't', value_enum)]
    pub template: TemplateArg,

    /// CSV or TSV file to validate.
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Print the full result as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,

    /// Reject files larger than this many bytes
    /// (default: $SEQR_TEMPLATE_MAX_BYTES or 500 MiB).
    #[arg(long = "max-bytes", value_name = "BYTES")]
    pub max_bytes: Option<u64>,

    /// Skip the duplicate check on identifier columns.
    #[arg(long = "allow-duplicates")]
    pub allow_duplicates: bool,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    /// Template to describe.
    #[arg(long = "template", short = 't', value_enum)]
    pub template: TemplateArg,
}

/// CLI template choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum TemplateArg {
    Family,
    #[value(alias = "individual-metadata")]
    Individual,
    #[value(alias = "ped")]
    Pedigree,
}

impl From<TemplateArg> for TemplateKind {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Family => TemplateKind::Family,
            TemplateArg::Individual => TemplateKind::IndividualMetadata,
            TemplateArg::Pedigree => TemplateKind::Pedigree,
        }
    }
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
