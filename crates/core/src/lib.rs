//! Command-line Params Core Library
//!
//! This crate declares typed command-line parameters and resolves their final
//! values once a token parser has split `argv` into raw values.
//!
//! # Key Features
//!
//! - **Parameter Definitions**: Flags, integers, strings, choices and their list variants,
//!   with long/short names, environment-variable binding, defaults and required-ness
//! - **Value Resolution**: Parsed raw data wins over the environment, which wins over the default
//! - **Strict Environment Parsing**: Malformed environment values are reported, never ignored
//! - **Registry**: Declaration order, duplicate detection and the required-parameter check
//! - **Re-invocation**: Resolved values serialize back into command-line tokens
//!
//! # Examples
//!
//! ```
//! use cmdline_params_core::config::Settings;
//! use cmdline_params_core::definitions::ParameterDefinition;
//! use cmdline_params_core::environment::Environment;
//! use cmdline_params_core::raw_value::{RawDataBag, RawValue};
//! use cmdline_params_core::registry::ParameterRegistry;
//!
//! let mut registry = ParameterRegistry::from_definitions([
//!     ParameterDefinition::flag("--verbose").with_environment_variable("VERBOSE"),
//!     ParameterDefinition::integer("--count", Some(10)),
//! ])?;
//!
//! let mut raw_data = RawDataBag::new();
//! raw_data.insert("--count".to_string(), RawValue::Integer(42));
//! let environment = Environment::new().with("VERBOSE", "1");
//!
//! registry.resolve_all(&raw_data, &environment, &Settings::default())?;
//! registry.validate_required()?;
//!
//! assert_eq!(registry.to_arg_list(), vec!["--verbose", "--count", "42"]);
//! # Ok::<(), cmdline_params_core::error::Error>(())
//! ```

pub mod config;
pub mod definitions;
pub mod environment;
pub mod error;
pub mod file_handling;
pub mod parameter;
pub mod raw_value;
pub mod registry;
pub mod resolution;
pub mod resolved_value;
