use cmdline_params_core::definitions::{format_choices, ParameterKind};
use cmdline_params_core::error::Error::{MissingOptionValue, UnexpectedArgument, UnknownOption};
use cmdline_params_core::error::{Error, Result};
use cmdline_params_core::parameter::Parameter;
use cmdline_params_core::raw_value::{RawDataBag, RawValue};
use cmdline_params_core::registry::ParameterRegistry;
use log::debug;

use crate::arguments::token::{classify, Token};

/// Splits command-line tokens into the raw data bag the registry resolves from.
///
/// Options are `--long`, `--long=value` or `-s`; options that take a value read
/// it from the next token when it is not given inline. Repeated list options
/// accumulate, repeated scalar options keep the last value. Flags that do not
/// appear are recorded as `false`.
///
/// # Errors
///
/// Returns an error if:
/// - An option is not declared
/// - An option that takes a value has none
/// - A value cannot be converted to the parameter's kind
/// - A positional argument is given
pub fn process_command_line(registry: &ParameterRegistry, tokens: &[String]) -> Result<RawDataBag> {
    let mut raw_data = RawDataBag::new();
    let mut tokens = tokens.iter().peekable();

    while let Some(token) = tokens.next() {
        let (parameter, inline_value) = match classify(token) {
            Token::Long { name, value } => (
                registry
                    .get(name)
                    .ok_or_else(|| UnknownOption(name.to_string()))?,
                value,
            ),
            Token::Short(name) => (
                registry
                    .find_by_short_name(name)
                    .ok_or_else(|| UnknownOption(name.to_string()))?,
                None,
            ),
            Token::EndOfOptions => {
                if let Some(extra) = tokens.next() {
                    return Err(UnexpectedArgument(extra.clone()));
                }
                break;
            }
            Token::Value(value) => return Err(UnexpectedArgument(value.to_string())),
        };

        let long_name = parameter.long_name();

        if parameter.kind() == ParameterKind::Flag {
            if let Some(value) = inline_value {
                return Err(Error::invalid_option_value(
                    long_name,
                    value,
                    "a flag does not take a value",
                ));
            }
            raw_data.insert(long_name.to_string(), RawValue::Bool(true));
            continue;
        }

        let value = match inline_value {
            Some(value) => value,
            None => match tokens.next_if(|next| !classify(next).is_option()) {
                Some(next) => next.as_str(),
                None => return Err(MissingOptionValue(long_name.to_string())),
            },
        };

        let raw_value = convert_value(parameter, value)?;
        debug!("Parsed `{long_name}` as {raw_value}");
        store_value(&mut raw_data, parameter, raw_value);
    }

    // Omitted flags are reported as `false` rather than left out
    for parameter in registry.parameters() {
        if parameter.kind() == ParameterKind::Flag {
            raw_data
                .entry(parameter.long_name().to_string())
                .or_insert(RawValue::Bool(false));
        }
    }

    Ok(raw_data)
}

/// Converts one option value to the raw shape of the parameter's element kind
fn convert_value(parameter: &Parameter, value: &str) -> Result<RawValue> {
    let long_name = parameter.long_name();

    match parameter.kind() {
        ParameterKind::Integer | ParameterKind::IntegerList => value
            .parse::<i64>()
            .map(RawValue::Integer)
            .map_err(|_| Error::invalid_option_value(long_name, value, "it must be an integer")),
        ParameterKind::Choice | ParameterKind::ChoiceList => {
            let alternatives = parameter.definition().kind.alternatives().unwrap_or_default();
            if alternatives.iter().any(|choice| choice == value) {
                Ok(RawValue::from(value))
            } else {
                Err(Error::invalid_option_value(
                    long_name,
                    value,
                    format!("valid choices are {}", format_choices(alternatives)),
                ))
            }
        }
        ParameterKind::String | ParameterKind::StringList | ParameterKind::Flag => {
            Ok(RawValue::from(value))
        }
    }
}

fn store_value(raw_data: &mut RawDataBag, parameter: &Parameter, value: RawValue) {
    let long_name = parameter.long_name().to_string();

    if !parameter.kind().is_list() {
        raw_data.insert(long_name, value);
        return;
    }

    match raw_data
        .entry(long_name)
        .or_insert_with(|| RawValue::List(Vec::new()))
    {
        RawValue::List(values) => values.push(value),
        other => *other = RawValue::List(vec![value]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmdline_params_core::definitions::ParameterDefinition;

    fn registry() -> ParameterRegistry {
        ParameterRegistry::from_definitions([
            ParameterDefinition::flag("--verbose").with_short_name("-v"),
            ParameterDefinition::flag("--quiet"),
            ParameterDefinition::integer("--count", None).with_short_name("-c"),
            ParameterDefinition::string("--name", None),
            ParameterDefinition::choice("--color", ["red", "green"], None),
            ParameterDefinition::string_list("--tag"),
            ParameterDefinition::integer_list("--port"),
        ])
        .unwrap()
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_command_line() {
        let raw_data = process_command_line(&registry(), &[]).unwrap();
        assert_eq!(raw_data.len(), 2);
        assert_eq!(raw_data.get("--verbose"), Some(&RawValue::Bool(false)));
        assert_eq!(raw_data.get("--quiet"), Some(&RawValue::Bool(false)));
        assert_eq!(raw_data.get("--count"), None);
    }

    #[test]
    fn test_options_and_values() {
        let raw_data = process_command_line(
            &registry(),
            &tokens(&[
                "-v", "-c", "-3", "--name=svc", "--color", "green", "--tag", "a", "--tag=b",
                "--port", "80",
            ]),
        )
        .unwrap();

        assert_eq!(raw_data.get("--verbose"), Some(&RawValue::Bool(true)));
        assert_eq!(raw_data.get("--count"), Some(&RawValue::Integer(-3)));
        assert_eq!(raw_data.get("--name"), Some(&RawValue::from("svc")));
        assert_eq!(raw_data.get("--color"), Some(&RawValue::from("green")));
        assert_eq!(raw_data.get("--tag"), Some(&RawValue::from(vec!["a", "b"])));
        assert_eq!(raw_data.get("--port"), Some(&RawValue::from(vec![80_i64])));
    }

    #[test]
    fn test_last_scalar_wins() {
        let raw_data =
            process_command_line(&registry(), &tokens(&["--count", "1", "--count", "2"]))
                .unwrap();
        assert_eq!(raw_data.get("--count"), Some(&RawValue::Integer(2)));
    }

    #[test]
    fn test_errors() {
        let registry = registry();

        assert!(matches!(
            process_command_line(&registry, &tokens(&["--unknown"])),
            Err(Error::UnknownOption(name)) if name == "--unknown"
        ));
        assert!(matches!(
            process_command_line(&registry, &tokens(&["--count"])),
            Err(Error::MissingOptionValue(_))
        ));
        assert!(matches!(
            process_command_line(&registry, &tokens(&["--name", "--verbose"])),
            Err(Error::MissingOptionValue(_))
        ));
        assert!(matches!(
            process_command_line(&registry, &tokens(&["--count", "ten"])),
            Err(Error::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            process_command_line(&registry, &tokens(&["--color", "blue"])),
            Err(Error::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            process_command_line(&registry, &tokens(&["--verbose=false"])),
            Err(Error::InvalidOptionValue { .. })
        ));
        assert!(matches!(
            process_command_line(&registry, &tokens(&["positional"])),
            Err(Error::UnexpectedArgument(_))
        ));
        assert!(matches!(
            process_command_line(&registry, &tokens(&["--", "extra"])),
            Err(Error::UnexpectedArgument(_))
        ));
    }
}
