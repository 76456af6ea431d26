//! File handling for parameter definitions and saved argument lists.
//!
//! This module reads parameter declarations from YAML, and reads and writes the
//! argument list a resolved registry serializes to, so a later run can re-invoke
//! with the same values.

use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

use log::debug;

use crate::definitions::ParameterDefinition;
use crate::error::Error::DuplicateParameter;
use crate::error::{Error, Result};

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    File::open(path).map_err(|e| Error::io_error(file_description.to_string(), path.to_string(), e))
}

fn validate_definitions(definitions: &[ParameterDefinition]) -> Result<()> {
    let mut names = HashSet::new();

    for definition in definitions {
        definition.validate()?;

        let short_name = definition.short_name.iter();
        for name in std::iter::once(&definition.long_name).chain(short_name) {
            if !names.insert(name.as_str()) {
                // Found a duplicate name
                return Err(DuplicateParameter(name.clone()));
            }
        }
    }

    Ok(())
}

/// Loads and validates parameter definitions from a YAML file.
///
/// The file holds a sequence of declarations, for example:
///
/// ```yaml
/// - long_name: --count
///   short_name: -c
///   kind: integer
///   default: 10
///   environment_variable: COUNT
/// - long_name: --color
///   kind: choice
///   alternatives: [red, green]
/// ```
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The YAML is malformed or doesn't match the expected structure
/// - The file declares no parameters
/// - A declaration is invalid or reuses a long or short name
///
/// # Examples
///
/// ```no_run
/// use cmdline_params_core::file_handling::get_parameter_definitions;
///
/// let definitions = get_parameter_definitions("parameters.yml")?;
/// println!("Loaded {} parameters", definitions.len());
/// # Ok::<(), cmdline_params_core::error::Error>(())
/// ```
pub fn get_parameter_definitions(definitions_path: &str) -> Result<Vec<ParameterDefinition>> {
    let reader = get_reader("parameter definitions", definitions_path)?;

    let definitions: Vec<ParameterDefinition> = serde_yaml::from_reader(reader).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "parameter definitions".to_string(),
            definitions_path.to_string(),
            e,
        )
    })?;

    if definitions.is_empty() {
        return Err(Error::empty_definitions(definitions_path.to_string()));
    }

    validate_definitions(&definitions)?;
    debug!(
        "Loaded {} parameter definitions from `{}`",
        definitions.len(),
        definitions_path
    );

    Ok(definitions)
}

/// Reads a previously saved argument list.
///
/// Returns `None` if the file doesn't exist.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn get_saved_arguments(path: &str) -> Result<Option<Vec<String>>> {
    if !Path::new(path).exists() {
        return Ok(None);
    }

    let reader = get_reader("saved arguments", path)?;
    serde_yaml::from_reader(reader).map(Some).map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "saved arguments".to_string(),
            path.to_string(),
            e,
        )
    })
}

/// Saves an argument list so it can be replayed later.
///
/// # Errors
///
/// Returns an error if the file cannot be created or the YAML cannot be written.
pub fn write_saved_arguments(path: &str, arguments: &[String]) -> Result<()> {
    let writer = File::create(path)
        .map_err(|e| Error::io_error("saved arguments".to_string(), path.to_string(), e))?;

    serde_yaml::to_writer(writer, arguments).map_err(|e| {
        Error::yaml_error(
            "writing".to_string(),
            "saved arguments".to_string(),
            path.to_string(),
            e,
        )
    })
}
