//! Command-line argument parsing and validation.
//!
//! This module defines the command-line interface structure of the `clp`
//! binary using the `clap` crate. The arguments of the declared parameters
//! themselves are passed through untouched and tokenized separately.

use clap::Parser;
use cmdline_params_core::config::DEFAULT_LIST_DELIMITER;
use cmdline_params_core::error::{Error, Result};

/// Command-line arguments for the `clp` tool.
///
/// # Examples
///
/// ```rust
/// use clap::Parser;
/// use cmdline_params_cli::cli_args::Args;
///
/// let args = Args::parse_from(["clp", "-c", "parameters.yml", "--", "--count", "3"]);
/// assert_eq!(args.arguments, vec!["--count", "3"]);
/// ```
#[derive(Parser, Debug)] // requires `derive` feature
#[command(term_width = 0)] // Just to make testing across clap features easier
#[allow(clippy::struct_excessive_bools)] // silence clippy's warning on this struct
pub struct Args {
    /// Path to the parameter definitions YAML file.
    ///
    /// If not provided, defaults to `~/.cmdline-params/parameters.yml`.
    #[arg(long, short = 'c')]
    pub definitions_path: Option<String>,

    /// Path to the file that stores the last resolved argument list.
    ///
    /// If not provided, defaults to `~/.cmdline-params/last_arguments.yml`.
    #[arg(long, short = 'l')]
    pub last_arguments_path: Option<String>,

    /// Delimiter between list elements in environment variable values.
    #[arg(long, short = 'd', default_value_t = DEFAULT_LIST_DELIMITER)]
    pub list_delimiter: char,

    /// Print the declared parameters and their help notes, then exit.
    #[arg(long, action)]
    pub describe: bool,

    /// Resolve the last saved argument list again instead of new arguments.
    #[arg(long, short = 'r', action)]
    pub rerun_last_arguments: bool,

    /// Skip saving the resolved argument list for a later rerun.
    #[arg(long, short = 's', action)]
    pub skip_arguments_save: bool,

    /// Arguments for the declared parameters, given after `--`.
    ///
    /// # Examples
    /// ```bash
    /// clp -c parameters.yml -- --count 3 --tag a --tag b
    /// ```
    #[arg(last = true)]
    pub arguments: Vec<String>,
}

impl Args {
    /// Validates that a rerun is not combined with new arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RerunWithArguments`] if both are given.
    pub fn get_rerun_request_is_valid(&self) -> Result<bool> {
        if !self.rerun_last_arguments {
            return Ok(false);
        }

        if !self.arguments.is_empty() {
            // Can't rerun and take new arguments at the same time
            return Err(Error::RerunWithArguments);
        }

        Ok(true)
    }
}
