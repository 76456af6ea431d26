use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::config::Settings;
use crate::definitions::{KindDefinition, ParameterDefinition, ParameterKind};
use crate::environment::Environment;
use crate::error::Result;
use crate::raw_value::RawValue;
use crate::resolution;
use crate::resolved_value::ResolvedValue;

/// A declared parameter together with its resolved value.
///
/// Created once per declaration before parsing. [`Parameter::set_value`] is
/// meant to be called once per parse cycle; calling it again simply replaces
/// the value.
#[derive(Debug, Clone)]
pub struct Parameter {
    definition: ParameterDefinition,
    value: ResolvedValue,
}

impl Parameter {
    /// Creates a parameter from its declaration.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration is invalid, see
    /// [`ParameterDefinition::validate`].
    pub fn new(definition: ParameterDefinition) -> Result<Self> {
        definition.validate()?;

        Ok(Self {
            value: ResolvedValue::unresolved(definition.kind()),
            definition,
        })
    }

    pub fn definition(&self) -> &ParameterDefinition {
        &self.definition
    }

    pub fn long_name(&self) -> &str {
        &self.definition.long_name
    }

    pub fn kind(&self) -> ParameterKind {
        self.definition.kind()
    }

    /// Ingests the token parser's raw value for this parameter and resolves
    /// the final value.
    ///
    /// # Errors
    ///
    /// Returns an error if the raw value has the wrong shape for this kind, or
    /// if the bound environment variable holds a value this kind rejects. The
    /// previous value is kept in that case.
    pub fn set_value(
        &mut self,
        raw: Option<&RawValue>,
        environment: &Environment,
        settings: &Settings,
    ) -> Result<()> {
        self.value = resolution::resolve(&self.definition, raw, environment, settings)?;
        Ok(())
    }

    /// The value supplied by the bound environment variable, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the variable is set to a value this kind rejects.
    pub fn value_from_environment(
        &self,
        environment: &Environment,
        settings: &Settings,
    ) -> Result<Option<ResolvedValue>> {
        resolution::value_from_environment(&self.definition, environment, settings)
    }

    pub fn value(&self) -> &ResolvedValue {
        &self.value
    }

    /// Whether the command line was parsed and this flag ended up set.
    ///
    /// Returns `None` if this is not a flag.
    pub fn flag(&self) -> Option<bool> {
        self.value.as_flag()
    }

    pub fn integer(&self) -> Option<i64> {
        self.value.as_integer()
    }

    pub fn string(&self) -> Option<&str> {
        match self.value {
            ResolvedValue::String(_) => self.value.as_str(),
            _ => None,
        }
    }

    pub fn choice(&self) -> Option<&str> {
        match self.value {
            ResolvedValue::Choice(_) => self.value.as_str(),
            _ => None,
        }
    }

    pub fn string_list(&self) -> Option<&[String]> {
        match self.value {
            ResolvedValue::StringList(_) => self.value.as_strings(),
            _ => None,
        }
    }

    pub fn integer_list(&self) -> Option<&[i64]> {
        self.value.as_integers()
    }

    pub fn choice_list(&self) -> Option<&[String]> {
        match self.value {
            ResolvedValue::ChoiceList(_) => self.value.as_strings(),
            _ => None,
        }
    }

    /// A required parameter whose value ended up unset or empty.
    pub fn is_missing(&self) -> bool {
        self.definition.required && !self.value.is_present()
    }

    /// Extra lines for help text describing where else a value can come from.
    pub fn supplementary_notes(&self) -> Vec<String> {
        let mut notes = Vec::new();

        if let Some(variable) = &self.definition.environment_variable {
            notes.push(format!(
                "This parameter may alternatively be specified via the {variable} environment variable."
            ));
        }

        if let Some(default) = self.describe_default() {
            notes.push(format!("The default value is {default}."));
        }

        notes
    }

    fn describe_default(&self) -> Option<String> {
        match &self.definition.kind {
            KindDefinition::Flag => None,
            KindDefinition::Integer { default } => default.map(|value| value.to_string()),
            KindDefinition::String { default } | KindDefinition::Choice { default, .. } => {
                default.as_ref().map(|value| format!("\"{value}\""))
            }
            KindDefinition::StringList { default } | KindDefinition::ChoiceList { default, .. } => {
                default
                    .as_ref()
                    .map(|values| values.iter().map(|value| format!("\"{value}\"")).join(", "))
            }
            KindDefinition::IntegerList { default } => {
                default.as_ref().map(|values| values.iter().join(", "))
            }
        }
    }

    /// Writes the resolved value back as command-line tokens, for re-invoking
    /// a process with the same settings.
    ///
    /// Text values starting with `-` are written inline as `--name=value`, so a
    /// tokenizer cannot mistake them for an option.
    pub fn append_to_arg_list(&self, arg_list: &mut Vec<String>) {
        let long_name = &self.definition.long_name;

        match &self.value {
            ResolvedValue::Flag(true) => arg_list.push(long_name.clone()),
            ResolvedValue::Flag(false) => {}
            ResolvedValue::Integer(_) | ResolvedValue::IntegerList(_) => {
                for token in self.value.to_argument_values() {
                    arg_list.push(long_name.clone());
                    arg_list.push(token);
                }
            }
            value => {
                for token in value.to_argument_values() {
                    if token.starts_with('-') {
                        arg_list.push(format!("{long_name}={token}"));
                    } else {
                        arg_list.push(long_name.clone());
                        arg_list.push(token);
                    }
                }
            }
        }
    }
}

impl Display for Parameter {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "{} = {}", self.definition.long_name, self.value)
    }
}
