//! seqr template validator CLI.

use clap::{ColorChoice, Parser};
use seqr_cli::commands::{parser_options, render_json, run_validate};
use seqr_cli::logging::{LogConfig, LogFormat, init_logging};
use seqr_cli::summary::{print_columns, print_result};
use seqr_standards::TemplateKind;
use std::io::{self, IsTerminal};
use tracing::level_filters::LevelFilter;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg, LogLevelArg, ValidateArgs};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match &cli.command {
        Command::Validate(args) => validate(args),
        Command::Columns(args) => {
            print_columns(args.template.into());
            0
        }
    };
    std::process::exit(exit_code);
}

fn validate(args: &ValidateArgs) -> i32 {
    let kind = TemplateKind::from(args.template);
    let options = parser_options(args.max_bytes, args.allow_duplicates);
    let result = match run_validate(kind, &args.file, options) {
        Ok(result) => result,
        Err(error) => {
            eprintln!("error: {error:#}");
            return 1;
        }
    };
    if args.json {
        match render_json(&result) {
            Ok(json) => println!("{json}"),
            Err(error) => {
                eprintln!("error: {error:#}");
                return 1;
            }
        }
    } else {
        print_result(&args.file, kind, &result);
    }
    if result.valid { 0 } else { 1 }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        ..LogConfig::default()
    };
    config.use_env_filter = !(cli.verbosity.is_present() || cli.log_level.is_some());
    if let Some(level) = cli.log_level {
        config.level_filter = match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        };
    }
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
