//! Command-line Params CLI Library
//!
//! This crate provides the `clp` command-line front end for
//! `cmdline-params-core`. It loads parameter declarations from YAML, tokenizes
//! the arguments given after `--`, resolves every parameter against the process
//! environment and prints the result.
//!
//! # Key Features
//!
//! - **Declarations from YAML**: Parameters are declared in a definitions file
//! - **Tokenizing**: Long and short options, inline values and repeated list options
//! - **Help Notes**: `--describe` lists parameters with environment and default notes
//! - **Rerun**: The resolved argument list is saved and can be resolved again
//!
//! # Architecture
//!
//! - [`cli_args`]: Command-line argument parsing and validation
//! - [`arguments`]: Tokenizing of the parameters' own arguments into raw values
//! - [`report`]: Plain-text output of declarations and resolved values
//!
//! # Examples
//!
//! ```bash
//! # Show the declared parameters
//! clp -c parameters.yml --describe
//!
//! # Resolve values, with environment fallbacks
//! APP_COUNT=7 clp -c parameters.yml -- --verbose --tag a --tag b
//!
//! # Resolve the last saved argument list again
//! clp -c parameters.yml --rerun-last-arguments
//! ```

pub mod arguments;
pub mod cli_args;
pub mod report;
