//! Resolution settings and configuration path utilities.
//!
//! This module provides the settings that tune environment-variable parsing and
//! resolves the paths of the parameter definitions and saved arguments files,
//! expanding `~`.

/// Default path for the parameter definitions file
const DEFAULT_DEFINITIONS_PATH: &str = "~/.cmdline-params/parameters.yml";

/// Default path for storing the last resolved argument list
const DEFAULT_LAST_ARGUMENTS_PATH: &str = "~/.cmdline-params/last_arguments.yml";

/// Default delimiter between list elements in an environment variable
pub const DEFAULT_LIST_DELIMITER: char = ',';

/// Settings shared by every resolution call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    /// Separates elements when a list parameter is read from an environment variable.
    ///
    /// A value without the delimiter is read as a one-element list.
    pub list_delimiter: char,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            list_delimiter: DEFAULT_LIST_DELIMITER,
        }
    }
}

impl Settings {
    #[must_use]
    pub fn with_list_delimiter(list_delimiter: char) -> Self {
        Self { list_delimiter }
    }
}

/// Resolves the parameter definitions file path.
///
/// If a custom path is provided, uses that path. Otherwise, uses the default
/// definitions path. Shell expansions like `~` are resolved.
///
/// # Arguments
///
/// * `definitions_path_arg` - Optional custom definitions file path
///
/// # Examples
///
/// ```
/// use cmdline_params_core::config::get_definitions_path;
///
/// // Use default path
/// let default_path = get_definitions_path(None);
///
/// // Use custom path
/// let custom_path = get_definitions_path(Some("/path/to/parameters.yml"));
/// assert_eq!(custom_path, "/path/to/parameters.yml");
/// ```
pub fn get_definitions_path(definitions_path_arg: Option<&str>) -> String {
    let definitions_path = definitions_path_arg.unwrap_or(DEFAULT_DEFINITIONS_PATH);

    shellexpand::tilde(definitions_path).to_string()
}

/// Resolves the path of the file that stores the last resolved argument list.
///
/// Shell expansions like `~` are resolved.
pub fn get_last_arguments_path(last_arguments_path_arg: Option<&str>) -> String {
    let last_arguments_path = last_arguments_path_arg.unwrap_or(DEFAULT_LAST_ARGUMENTS_PATH);

    shellexpand::tilde(last_arguments_path).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_definitions_path_with_custom_path() {
        let result = get_definitions_path(Some("/custom/path/parameters.yml"));
        assert_eq!(result, "/custom/path/parameters.yml");
    }

    #[test]
    fn test_get_definitions_path_with_none() {
        let result = get_definitions_path(None);
        // Should expand the tilde in the default path
        assert!(result.ends_with("parameters.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_get_definitions_path_with_tilde() {
        let result = get_definitions_path(Some("~/my-parameters.yml"));
        assert!(!result.starts_with('~'));
        assert!(result.ends_with("my-parameters.yml"));
    }

    #[test]
    fn test_get_last_arguments_path() {
        assert_eq!(get_last_arguments_path(Some("/custom/last.yml")), "/custom/last.yml");

        let result = get_last_arguments_path(None);
        assert!(result.ends_with("last_arguments.yml"));
        assert!(!result.starts_with('~'));
    }

    #[test]
    fn test_default_settings() {
        assert_eq!(Settings::default().list_delimiter, ',');
        assert_eq!(Settings::with_list_delimiter(':').list_delimiter, ':');
    }
}
