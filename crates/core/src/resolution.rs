//! Three-stage value resolution shared by every parameter kind.
//!
//! A parameter's value comes from the first stage that yields one:
//!
//! 1. the raw value the token parser produced for it,
//! 2. the bound environment variable, when set to a non-empty value,
//! 3. the declared default, or the kind's empty value.
//!
//! Each kind plugs into this chain through a strategy record: how to accept a raw
//! value, how to parse an environment string, and what to fall back to.

use log::debug;

use crate::config::Settings;
use crate::definitions::{format_choices, KindDefinition, ParameterDefinition};
use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::raw_value::RawValue;
use crate::resolved_value::ResolvedValue;

const FLAG_FORMAT: &str = "Valid choices are 0 or 1.";
const INTEGER_FORMAT: &str = "It must be an integer value.";
const UNICODE_FORMAT: &str = "It must be valid unicode.";

/// What a raw value means for a given kind.
enum RawOutcome {
    Value(ResolvedValue),
    /// Treated as if the parser produced nothing.
    Absent,
    Mismatch,
}

struct Strategy<'a> {
    accept_raw: Box<dyn Fn(&RawValue) -> RawOutcome + 'a>,
    parse_environment: Box<dyn Fn(&str) -> Option<ResolvedValue> + 'a>,
    accepted_format: String,
    fallback: ResolvedValue,
}

impl<'a> Strategy<'a> {
    fn for_kind(kind: &'a KindDefinition, settings: &Settings) -> Self {
        let delimiter = settings.list_delimiter;

        match kind {
            KindDefinition::Flag => Strategy {
                accept_raw: Box::new(|raw: &RawValue| match raw {
                    RawValue::Bool(true) => RawOutcome::Value(ResolvedValue::Flag(true)),
                    // The parser reports an omitted flag as `false`, so `false` cannot
                    // be told apart from omission. An explicit `--flag=false` is not
                    // supported until the parser can report it distinctly.
                    RawValue::Bool(false) => RawOutcome::Absent,
                    _ => RawOutcome::Mismatch,
                }),
                parse_environment: Box::new(|value: &str| match value {
                    "1" => Some(ResolvedValue::Flag(true)),
                    "0" => Some(ResolvedValue::Flag(false)),
                    _ => None,
                }),
                accepted_format: FLAG_FORMAT.to_string(),
                fallback: ResolvedValue::Flag(false),
            },

            KindDefinition::Integer { default } => Strategy {
                accept_raw: Box::new(|raw: &RawValue| match raw {
                    RawValue::Integer(value) => {
                        RawOutcome::Value(ResolvedValue::Integer(Some(*value)))
                    }
                    _ => RawOutcome::Mismatch,
                }),
                parse_environment: Box::new(|value: &str| {
                    parse_integer(value).map(|value| ResolvedValue::Integer(Some(value)))
                }),
                accepted_format: INTEGER_FORMAT.to_string(),
                fallback: ResolvedValue::Integer(*default),
            },

            KindDefinition::String { default } => Strategy {
                accept_raw: Box::new(|raw: &RawValue| match raw {
                    RawValue::String(value) => {
                        RawOutcome::Value(ResolvedValue::String(Some(value.clone())))
                    }
                    _ => RawOutcome::Mismatch,
                }),
                parse_environment: Box::new(|value: &str| {
                    Some(ResolvedValue::String(Some(value.to_string())))
                }),
                accepted_format: String::new(),
                fallback: ResolvedValue::String(default.clone()),
            },

            KindDefinition::Choice {
                alternatives,
                default,
            } => Strategy {
                accept_raw: Box::new(move |raw: &RawValue| match raw {
                    RawValue::String(value) if alternatives.contains(value) => {
                        RawOutcome::Value(ResolvedValue::Choice(Some(value.clone())))
                    }
                    _ => RawOutcome::Mismatch,
                }),
                parse_environment: Box::new(move |value: &str| {
                    is_choice(alternatives, value)
                        .then(|| ResolvedValue::Choice(Some(value.to_string())))
                }),
                accepted_format: format!("Valid choices are: {}", format_choices(alternatives)),
                fallback: ResolvedValue::Choice(default.clone()),
            },

            KindDefinition::StringList { default } => Strategy {
                accept_raw: Box::new(|raw: &RawValue| {
                    accept_list(raw, |item| match item {
                        RawValue::String(value) => Some(value.clone()),
                        _ => None,
                    })
                    .map_or(RawOutcome::Mismatch, |values| {
                        RawOutcome::Value(ResolvedValue::StringList(values))
                    })
                }),
                parse_environment: Box::new(move |value: &str| {
                    let values = split_list(value, delimiter).map(str::to_string).collect();
                    Some(ResolvedValue::StringList(values))
                }),
                accepted_format: String::new(),
                fallback: ResolvedValue::StringList(default.clone().unwrap_or_default()),
            },

            KindDefinition::IntegerList { default } => Strategy {
                accept_raw: Box::new(|raw: &RawValue| {
                    accept_list(raw, |item| match item {
                        RawValue::Integer(value) => Some(*value),
                        _ => None,
                    })
                    .map_or(RawOutcome::Mismatch, |values| {
                        RawOutcome::Value(ResolvedValue::IntegerList(values))
                    })
                }),
                parse_environment: Box::new(move |value: &str| {
                    split_list(value, delimiter)
                        .map(parse_integer)
                        .collect::<Option<Vec<i64>>>()
                        .map(ResolvedValue::IntegerList)
                }),
                accepted_format: format!(
                    "It must be a list of integer values separated by \"{delimiter}\"."
                ),
                fallback: ResolvedValue::IntegerList(default.clone().unwrap_or_default()),
            },

            KindDefinition::ChoiceList {
                alternatives,
                default,
            } => Strategy {
                accept_raw: Box::new(move |raw: &RawValue| {
                    accept_list(raw, |item| match item {
                        RawValue::String(value) if alternatives.contains(value) => {
                            Some(value.clone())
                        }
                        _ => None,
                    })
                    .map_or(RawOutcome::Mismatch, |values| {
                        RawOutcome::Value(ResolvedValue::ChoiceList(values))
                    })
                }),
                parse_environment: Box::new(move |value: &str| {
                    split_list(value, delimiter)
                        .map(|item| is_choice(alternatives, item).then(|| item.to_string()))
                        .collect::<Option<Vec<String>>>()
                        .map(ResolvedValue::ChoiceList)
                }),
                accepted_format: format!(
                    "Valid choices are: {}, separated by \"{delimiter}\"",
                    format_choices(alternatives)
                ),
                fallback: ResolvedValue::ChoiceList(default.clone().unwrap_or_default()),
            },
        }
    }

    fn from_raw(
        &self,
        definition: &ParameterDefinition,
        raw: Option<&RawValue>,
    ) -> Result<Option<ResolvedValue>> {
        let Some(raw) = raw.filter(|raw| !raw.is_null()) else {
            return Ok(None);
        };

        match (self.accept_raw)(raw) {
            RawOutcome::Value(value) => Ok(Some(value)),
            RawOutcome::Absent => Ok(None),
            RawOutcome::Mismatch => Err(Error::invalid_data(&definition.long_name, raw)),
        }
    }

    fn from_environment(
        &self,
        definition: &ParameterDefinition,
        environment: &Environment,
    ) -> Result<Option<ResolvedValue>> {
        let Some(variable) = definition.environment_variable.as_deref() else {
            return Ok(None);
        };

        if let Some(value) = environment.non_unicode(variable) {
            return Err(Error::invalid_environment_value(
                value,
                variable,
                UNICODE_FORMAT.to_string(),
            ));
        }

        let Some(value) = environment.get(variable) else {
            return Ok(None);
        };

        match (self.parse_environment)(value) {
            Some(resolved) => Ok(Some(resolved)),
            None => Err(Error::invalid_environment_value(
                value,
                variable,
                self.accepted_format.clone(),
            )),
        }
    }
}

/// Resolves the final value of one parameter.
///
/// `raw` is what the token parser produced under the parameter's long name,
/// `None` when the parameter was omitted.
///
/// # Errors
///
/// Returns [`Error::InvalidData`] if the raw value does not have the shape the
/// kind expects, and [`Error::InvalidEnvironmentValue`] if the bound environment
/// variable is set to a value the kind does not accept.
pub fn resolve(
    definition: &ParameterDefinition,
    raw: Option<&RawValue>,
    environment: &Environment,
    settings: &Settings,
) -> Result<ResolvedValue> {
    let strategy = Strategy::for_kind(&definition.kind, settings);

    if let Some(value) = strategy.from_raw(definition, raw)? {
        debug!("`{}` resolved from the command line", definition.long_name);
        return Ok(value);
    }

    if let Some(value) = strategy.from_environment(definition, environment)? {
        debug!(
            "`{}` resolved from the environment variable {}",
            definition.long_name,
            definition.environment_variable.as_deref().unwrap_or_default()
        );
        return Ok(value);
    }

    debug!("`{}` resolved to its default", definition.long_name);
    Ok(strategy.fallback)
}

/// Reads only the environment stage for one parameter.
///
/// Returns `None` when no variable is bound, or when it is unset or empty.
///
/// # Errors
///
/// Returns [`Error::InvalidEnvironmentValue`] if the variable is set to a value
/// the kind does not accept.
pub fn value_from_environment(
    definition: &ParameterDefinition,
    environment: &Environment,
    settings: &Settings,
) -> Result<Option<ResolvedValue>> {
    Strategy::for_kind(&definition.kind, settings).from_environment(definition, environment)
}

// Base 10, optional sign, nothing else. A lenient prefix parse would read
// "7abc" and " 7" as 7; both are rejected here, along with "7.5".
fn parse_integer(value: &str) -> Option<i64> {
    if value.contains('.') {
        return None;
    }

    value.parse::<i64>().ok()
}

fn is_choice(alternatives: &[String], value: &str) -> bool {
    alternatives.iter().any(|choice| choice == value)
}

fn split_list(value: &str, delimiter: char) -> impl Iterator<Item = &str> {
    value.split(delimiter).map(str::trim)
}

fn accept_list<T>(raw: &RawValue, accept_item: impl Fn(&RawValue) -> Option<T>) -> Option<Vec<T>> {
    match raw {
        RawValue::List(items) => items.iter().map(accept_item).collect(),
        _ => None,
    }
}
