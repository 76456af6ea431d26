use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::error::Error::{
    DefaultForRequired, DefaultNotAChoice, DuplicateChoice, EmptyChoices,
    InvalidEnvironmentVariableName, InvalidLongName, InvalidShortName,
};
use crate::error::Result;

/// The closed set of parameter shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    Flag,
    Integer,
    String,
    Choice,
    StringList,
    IntegerList,
    ChoiceList,
}

impl ParameterKind {
    pub fn is_list(self) -> bool {
        matches!(self, Self::StringList | Self::IntegerList | Self::ChoiceList)
    }
}

impl Display for ParameterKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Flag => "flag",
            Self::Integer => "integer",
            Self::String => "string",
            Self::Choice => "choice",
            Self::StringList => "string list",
            Self::IntegerList => "integer list",
            Self::ChoiceList => "choice list",
        };
        formatter.write_str(name)
    }
}

/// Kind-specific part of a declaration.
///
/// In YAML the variant is selected by the `kind` key, next to the common fields.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KindDefinition {
    Flag,
    Integer {
        #[serde(default)]
        default: Option<i64>,
    },
    String {
        #[serde(default)]
        default: Option<String>,
    },
    Choice {
        alternatives: Vec<String>,
        #[serde(default)]
        default: Option<String>,
    },
    StringList {
        #[serde(default)]
        default: Option<Vec<String>>,
    },
    IntegerList {
        #[serde(default)]
        default: Option<Vec<i64>>,
    },
    ChoiceList {
        alternatives: Vec<String>,
        #[serde(default)]
        default: Option<Vec<String>>,
    },
}

impl KindDefinition {
    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Flag => ParameterKind::Flag,
            Self::Integer { .. } => ParameterKind::Integer,
            Self::String { .. } => ParameterKind::String,
            Self::Choice { .. } => ParameterKind::Choice,
            Self::StringList { .. } => ParameterKind::StringList,
            Self::IntegerList { .. } => ParameterKind::IntegerList,
            Self::ChoiceList { .. } => ParameterKind::ChoiceList,
        }
    }

    pub fn has_default(&self) -> bool {
        match self {
            Self::Flag => false,
            Self::Integer { default } => default.is_some(),
            Self::String { default } | Self::Choice { default, .. } => default.is_some(),
            Self::StringList { default } | Self::ChoiceList { default, .. } => default.is_some(),
            Self::IntegerList { default } => default.is_some(),
        }
    }

    /// The allowed values of the choice kinds, `None` for every other kind.
    pub fn alternatives(&self) -> Option<&[String]> {
        match self {
            Self::Choice { alternatives, .. } | Self::ChoiceList { alternatives, .. } => {
                Some(alternatives)
            }
            _ => None,
        }
    }
}

/// Immutable declaration of one command-line parameter.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ParameterDefinition {
    pub long_name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub environment_variable: Option<String>,
    #[serde(default)]
    pub required: bool,
    #[serde(flatten)]
    pub kind: KindDefinition,
}

impl ParameterDefinition {
    pub fn new(long_name: impl Into<String>, kind: KindDefinition) -> Self {
        Self {
            long_name: long_name.into(),
            short_name: None,
            description: None,
            environment_variable: None,
            required: false,
            kind,
        }
    }

    pub fn flag(long_name: impl Into<String>) -> Self {
        Self::new(long_name, KindDefinition::Flag)
    }

    pub fn integer(long_name: impl Into<String>, default: Option<i64>) -> Self {
        Self::new(long_name, KindDefinition::Integer { default })
    }

    pub fn string(long_name: impl Into<String>, default: Option<String>) -> Self {
        Self::new(long_name, KindDefinition::String { default })
    }

    pub fn choice<S: Into<String>>(
        long_name: impl Into<String>,
        alternatives: impl IntoIterator<Item = S>,
        default: Option<String>,
    ) -> Self {
        let alternatives = alternatives.into_iter().map(Into::into).collect();
        Self::new(long_name, KindDefinition::Choice { alternatives, default })
    }

    pub fn string_list(long_name: impl Into<String>) -> Self {
        Self::new(long_name, KindDefinition::StringList { default: None })
    }

    pub fn integer_list(long_name: impl Into<String>) -> Self {
        Self::new(long_name, KindDefinition::IntegerList { default: None })
    }

    pub fn choice_list<S: Into<String>>(
        long_name: impl Into<String>,
        alternatives: impl IntoIterator<Item = S>,
    ) -> Self {
        let alternatives = alternatives.into_iter().map(Into::into).collect();
        Self::new(
            long_name,
            KindDefinition::ChoiceList {
                alternatives,
                default: None,
            },
        )
    }

    #[must_use]
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_environment_variable(mut self, variable: impl Into<String>) -> Self {
        self.environment_variable = Some(variable.into());
        self
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn kind(&self) -> ParameterKind {
        self.kind.kind()
    }

    /// Checks the declaration itself, before any command line is seen.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is malformed, if a required parameter declares
    /// a default, or if the alternatives of a choice kind are empty, repeated, or
    /// do not contain the declared default.
    pub fn validate(&self) -> Result<()> {
        validate_long_name(&self.long_name)?;

        if let Some(short_name) = &self.short_name {
            validate_short_name(short_name)?;
        }

        if let Some(variable) = &self.environment_variable {
            validate_environment_variable_name(variable)?;
        }

        self.validate_default_value()?;
        self.validate_alternatives()
    }

    fn validate_default_value(&self) -> Result<()> {
        if self.required && self.kind.has_default() {
            return Err(DefaultForRequired(self.long_name.clone()));
        }

        Ok(())
    }

    fn validate_alternatives(&self) -> Result<()> {
        let Some(alternatives) = self.kind.alternatives() else {
            return Ok(());
        };

        if alternatives.is_empty() {
            return Err(EmptyChoices(self.long_name.clone()));
        }

        if let Some(duplicate) = alternatives.iter().duplicates().next() {
            return Err(DuplicateChoice(self.long_name.clone(), duplicate.clone()));
        }

        let defaults: Vec<&String> = match &self.kind {
            KindDefinition::Choice { default, .. } => default.iter().collect(),
            KindDefinition::ChoiceList { default, .. } => default.iter().flatten().collect(),
            _ => Vec::new(),
        };

        for value in defaults {
            if !alternatives.contains(value) {
                return Err(DefaultNotAChoice {
                    parameter: self.long_name.clone(),
                    value: value.clone(),
                    choices: format_choices(alternatives),
                });
            }
        }

        Ok(())
    }
}

impl Display for ParameterDefinition {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(&self.long_name)?;

        if let Some(short_name) = &self.short_name {
            write!(formatter, ", {short_name}")?;
        }

        write!(formatter, " <{}>", self.kind())?;

        if let Some(description) = &self.description {
            write!(formatter, " ({description})")?;
        }

        Ok(())
    }
}

/// Renders alternatives the way error messages list them: `"a", "b"`.
pub fn format_choices(alternatives: &[String]) -> String {
    alternatives.iter().map(|choice| format!("\"{choice}\"")).join(", ")
}

// --word(-word)*, lower-case letters and digits only
fn validate_long_name(long_name: &str) -> Result<()> {
    let Some(body) = long_name.strip_prefix("--") else {
        return Err(InvalidLongName(long_name.to_string()));
    };

    let well_formed = body.split('-').all(|word| {
        !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
    });

    if well_formed {
        Ok(())
    } else {
        Err(InvalidLongName(long_name.to_string()))
    }
}

fn validate_short_name(short_name: &str) -> Result<()> {
    let mut chars = short_name.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('-'), Some(letter), None) if letter.is_ascii_alphabetic() => Ok(()),
        _ => Err(InvalidShortName(short_name.to_string())),
    }
}

fn validate_environment_variable_name(variable: &str) -> Result<()> {
    let starts_well = variable
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_uppercase() || c == '_');
    let rest_well = variable
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_');

    if starts_well && rest_well {
        Ok(())
    } else {
        Err(InvalidEnvironmentVariableName(variable.to_string()))
    }
}
