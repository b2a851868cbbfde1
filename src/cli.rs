use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use crate::solver::Solver;
use crate::utils::parse_number_list;

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Countdown - find an expression as close as possible to an objective number
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(
    about = "Search for an arithmetic expression over the available numbers whose value is closest to the objective"
)]
#[command(version)]
pub struct CliArgs {
    /// Comma-separated list of available numbers
    #[arg(long = "nums", value_name = "N,N,...")]
    pub nums: String,

    /// Objective number to reach
    #[arg(long = "obj", value_name = "N", allow_hyphen_values = true)]
    pub obj: i64,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub available_numbers: Vec<i64>,
    pub objective: i64,
    pub log_level: LogLevel,
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();

    let available_numbers = parse_number_list(&args.nums).context("Invalid number list")?;

    Ok(CliConfig {
        available_numbers,
        objective: args.obj,
        log_level: args.log_level,
    })
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    init_logging(&config.log_level)?;

    info!(
        "Searching for an expression over {:?} closest to {}",
        config.available_numbers, config.objective
    );

    let mut solver = Solver::new(config.available_numbers, config.objective);
    println!("{}", solver.solve());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_arguments() {
        let args = CliArgs::try_parse_from(["countdown", "--nums", "1,2,3,4,5", "--obj", "15"]);
        assert!(args.is_ok());
        if let Ok(args) = args {
            assert_eq!(args.nums, "1,2,3,4,5");
            assert_eq!(args.obj, 15);
            assert!(matches!(args.log_level, LogLevel::Warn));
        }
    }

    #[test]
    fn test_both_arguments_are_required() {
        let args = CliArgs::try_parse_from(["countdown", "--nums", "1,2,3"]);
        assert!(args.is_err());

        let args = CliArgs::try_parse_from(["countdown", "--obj", "15"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_objective_must_be_an_integer() {
        let args = CliArgs::try_parse_from(["countdown", "--nums", "1,2", "--obj", "x"]);
        assert!(args.is_err());
    }

    #[test]
    fn test_number_list_parsing() {
        let result = parse_number_list("3,25,9,8,6,7");
        assert_eq!(result, Ok(vec![3, 25, 9, 8, 6, 7]));

        let result = parse_number_list("3,x");
        assert!(result.is_err());
    }

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            LogLevel::Error.to_log_level_filter(),
            log::LevelFilter::Error
        );
        assert_eq!(LogLevel::Warn.to_log_level_filter(), log::LevelFilter::Warn);
        assert_eq!(LogLevel::Info.to_log_level_filter(), log::LevelFilter::Info);
        assert_eq!(
            LogLevel::Debug.to_log_level_filter(),
            log::LevelFilter::Debug
        );
        assert_eq!(
            LogLevel::Trace.to_log_level_filter(),
            log::LevelFilter::Trace
        );
    }
}
