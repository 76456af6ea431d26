use thiserror::Error;

use crate::raw_value::RawValue;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unexpected data object for parameter \"{}\": {}", .parameter, .data)]
    InvalidData { parameter: String, data: RawValue },

    #[error(
        "Invalid value \"{}\" for the environment variable {}.  {}",
        .value,
        .variable,
        .expected
    )]
    InvalidEnvironmentValue {
        value: String,
        variable: String,
        expected: String,
    },

    #[error("Invalid name: \"{}\". The parameter long name must be lower-case and use dash delimiters (e.g. \"--do-a-thing\")", .0)]
    InvalidLongName(String),

    #[error("Invalid name: \"{}\". The parameter short name must be a dash followed by a single letter (e.g. \"-d\")", .0)]
    InvalidShortName(String),

    #[error("Invalid environment variable name: \"{}\". The name must consist only of upper-case letters, numbers, and underscores. It may not start with a number.", .0)]
    InvalidEnvironmentVariableName(String),

    #[error("A default value cannot be specified for \"{}\" because it is a \"required\" parameter", .0)]
    DefaultForRequired(String),

    #[error("Invalid default value \"{}\" for parameter \"{}\". Valid choices are: {}", .value, .parameter, .choices)]
    DefaultNotAChoice {
        parameter: String,
        value: String,
        choices: String,
    },

    #[error("The choice parameter \"{}\" must declare at least one alternative", .0)]
    EmptyChoices(String),

    #[error("The choice parameter \"{}\" declares the alternative \"{}\" more than once", .0, .1)]
    DuplicateChoice(String, String),

    #[error("A parameter named \"{}\" was already defined", .0)]
    DuplicateParameter(String),

    #[error("No parameter named \"{}\" was defined", .0)]
    UnknownParameter(String),

    #[error("Missing required parameter(s): {}", .0.join(", "))]
    MissingRequired(Vec<String>),

    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Unknown option: \"{}\"", .0)]
    UnknownOption(String),

    #[error("The option \"{}\" expects a value", .0)]
    MissingOptionValue(String),

    #[error("Invalid value \"{}\" for the option \"{}\": {}", .value, .option, .reason)]
    InvalidOptionValue {
        option: String,
        value: String,
        reason: String,
    },

    #[error("Unexpected positional argument: \"{}\"", .0)]
    UnexpectedArgument(String),

    #[error("Rerun flag specified together with arguments is invalid.")]
    RerunWithArguments,

    #[error("No parameters were found in the parameter definition YAML. Is `{}` empty?", .path)]
    EmptyDefinitions { path: String },
}

impl Error {
    pub fn invalid_data(parameter: &str, data: &RawValue) -> Self {
        Self::InvalidData {
            parameter: parameter.to_string(),
            data: data.clone(),
        }
    }

    pub fn invalid_environment_value(value: &str, variable: &str, expected: String) -> Self {
        Self::InvalidEnvironmentValue {
            value: value.to_string(),
            variable: variable.to_string(),
            expected,
        }
    }

    pub fn invalid_option_value(option: &str, value: &str, reason: impl Into<String>) -> Self {
        Self::InvalidOptionValue {
            option: option.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn empty_definitions(path: String) -> Self {
        Self::EmptyDefinitions { path }
    }

    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
