//! Tokenizing of command-line arguments for declared parameters.
//!
//! This module turns the trailing arguments of the CLI into the raw data bag the
//! parameter registry resolves from:
//! - **Token shapes**: `--long`, `--long=value`, `-s`, values and `--`
//! - **Conversion**: integers are parsed and choices checked while tokenizing
//! - **Flags**: omitted flags are recorded as `false`
//!
//! It is deliberately not a full grammar; sub-commands and positional
//! arguments are rejected.

// Export public items from submodules
pub mod processing;
pub mod token;

// Re-exports for convenience
pub use processing::process_command_line;
pub use token::{classify, Token};
