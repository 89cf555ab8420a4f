//! Command-line argument parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Settings given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--endpoint URL`
    pub endpoint: Option<String>,
    /// `--log-file PATH`
    pub log_file: Option<PathBuf>,
}

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the terminal client (default)
    Run(CliOverrides),
}

/// Invalid command line.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("missing value for {0}")]
    MissingValue(String),
    #[error("unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Parse command-line arguments and return the appropriate command.
///
/// `--version` and `--help` win over everything else. Flags with values
/// accept both `--flag value` and `--flag=value`.
///
/// # Examples
///
/// ```
/// use askdata::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["askdata".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    let mut overrides = CliOverrides::default();
    let mut args = args.skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline_value) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--endpoint" | "-e" => {
                overrides.endpoint = Some(flag_value(&flag, inline_value, &mut args)?);
            }
            "--log-file" => {
                overrides.log_file = Some(PathBuf::from(flag_value(&flag, inline_value, &mut args)?));
            }
            _ => return Err(ArgsError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::Run(overrides))
}

fn flag_value<I>(flag: &str, inline: Option<String>, rest: &mut I) -> Result<String, ArgsError>
where
    I: Iterator<Item = String>,
{
    inline
        .or_else(|| rest.next())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| ArgsError::MissingValue(flag.to_string()))
}
