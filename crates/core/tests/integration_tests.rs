//! Integration tests for cmdline-params-core
//!
//! These tests verify that declaration, resolution and re-serialization work
//! together correctly by testing complete workflows end-to-end.

use cmdline_params_core::{
    config::Settings,
    environment::Environment,
    error::Error,
    file_handling::{get_parameter_definitions, get_saved_arguments, write_saved_arguments},
    raw_value::{RawDataBag, RawValue},
    registry::ParameterRegistry,
    resolved_value::ResolvedValue,
};
use std::io::Write;
use tempfile::NamedTempFile;

const DEFINITIONS_YAML: &str = r#"
- long_name: --verbose
  short_name: -v
  kind: flag
  environment_variable: APP_VERBOSE
  description: "Print more output"

- long_name: --count
  short_name: -c
  kind: integer
  default: 10
  environment_variable: APP_COUNT

- long_name: --name
  kind: string
  required: true

- long_name: --color
  kind: choice
  alternatives: [red, green, blue]
  default: red
  environment_variable: APP_COLOR

- long_name: --tag
  kind: string_list
  environment_variable: APP_TAGS

- long_name: --port
  kind: integer_list
  default: [80, 443]
"#;

fn load_registry() -> ParameterRegistry {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{DEFINITIONS_YAML}").unwrap();
    let definitions = get_parameter_definitions(temp_file.path().to_str().unwrap()).unwrap();
    ParameterRegistry::from_definitions(definitions).unwrap()
}

fn raw_bag(entries: Vec<(&str, RawValue)>) -> RawDataBag {
    entries
        .into_iter()
        .map(|(name, value)| (name.to_string(), value))
        .collect()
}

/// Test that nothing but defaults and kind-specific empty values apply
#[test]
fn test_defaults_workflow() {
    let mut registry = load_registry();
    let raw_data = raw_bag(vec![
        ("--verbose", RawValue::Bool(false)),
        ("--name", RawValue::from("svc")),
    ]);

    registry
        .resolve_all(&raw_data, &Environment::new(), &Settings::default())
        .unwrap();

    assert_eq!(registry.get("--verbose").unwrap().flag(), Some(false));
    assert_eq!(registry.get("--count").unwrap().integer(), Some(10));
    assert_eq!(registry.get("--color").unwrap().choice(), Some("red"));
    assert_eq!(
        registry.get("--tag").unwrap().string_list().map(<[String]>::len),
        Some(0)
    );
    assert_eq!(
        registry.get("--port").unwrap().integer_list(),
        Some(&[80, 443][..])
    );
    assert!(registry.validate_required().is_ok());
}

/// Test that parsed data beats the environment, which beats the default
#[test]
fn test_precedence_workflow() {
    let mut registry = load_registry();
    let raw_data = raw_bag(vec![
        ("--count", RawValue::Integer(42)),
        ("--name", RawValue::from("svc")),
        ("--tag", RawValue::from(vec!["cli"])),
    ]);
    let environment: Environment = [
        ("APP_VERBOSE", "1"),
        ("APP_COUNT", "7"),
        ("APP_COLOR", "blue"),
        ("APP_TAGS", "env-a,env-b"),
    ]
    .into_iter()
    .collect();

    registry
        .resolve_all(&raw_data, &environment, &Settings::default())
        .unwrap();

    assert_eq!(registry.get("--verbose").unwrap().flag(), Some(true));
    assert_eq!(registry.get("--count").unwrap().integer(), Some(42));
    assert_eq!(registry.get("--color").unwrap().choice(), Some("blue"));
    assert_eq!(
        registry.get("--tag").unwrap().value(),
        &ResolvedValue::StringList(vec!["cli".to_string()])
    );

    assert_eq!(
        registry.to_arg_list(),
        vec![
            "--verbose", "--count", "42", "--name", "svc", "--color", "blue", "--tag", "cli",
            "--port", "80", "--port", "443",
        ]
    );
}

/// Test that a required parameter left unset is reported after resolution
#[test]
fn test_missing_required_workflow() {
    let mut registry = load_registry();

    registry
        .resolve_all(&RawDataBag::new(), &Environment::new(), &Settings::default())
        .unwrap();

    assert_eq!(registry.missing_required(), vec!["--name"]);
    assert!(matches!(
        registry.validate_required(),
        Err(Error::MissingRequired(names)) if names == vec!["--name".to_string()]
    ));
}

/// Test that a misconfigured environment fails the whole resolution
#[test]
fn test_invalid_environment_workflow() {
    let mut registry = load_registry();
    let environment = Environment::new().with("APP_VERBOSE", "yes");

    let error = registry
        .resolve_all(&RawDataBag::new(), &environment, &Settings::default())
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Invalid value \"yes\" for the environment variable APP_VERBOSE.  Valid choices are 0 or 1."
    );
}

/// Test that a parser producing the wrong shape is reported as invalid data
#[test]
fn test_invalid_data_workflow() {
    let mut registry = load_registry();
    let raw_data = raw_bag(vec![("--count", RawValue::from("not a number"))]);

    let error = registry
        .resolve_all(&raw_data, &Environment::new(), &Settings::default())
        .unwrap_err();

    assert_eq!(
        error.to_string(),
        "Unexpected data object for parameter \"--count\": \"not a number\""
    );
}

/// Test saving a resolved argument list and replaying it later
#[test]
fn test_saved_arguments_workflow() {
    let mut registry = load_registry();
    let raw_data = raw_bag(vec![
        ("--verbose", RawValue::Bool(true)),
        ("--name", RawValue::from("svc")),
    ]);
    registry
        .resolve_all(&raw_data, &Environment::new(), &Settings::default())
        .unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("last_arguments.yml");
    let path = path.to_str().unwrap();

    let arguments = registry.to_arg_list();
    write_saved_arguments(path, &arguments).unwrap();

    let saved = get_saved_arguments(path).unwrap().unwrap();
    assert_eq!(saved, arguments);
    assert_eq!(&saved[..3], &["--verbose", "--count", "10"]);
}
