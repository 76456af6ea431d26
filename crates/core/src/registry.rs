//! Ownership of the full parameter set.
//!
//! The registry declares parameters, hands each one its raw value after the
//! token parser has run, and performs the checks that need every parameter at
//! once, such as required parameters that ended up without a value.

use indexmap::IndexMap;
use log::debug;

use crate::config::Settings;
use crate::definitions::ParameterDefinition;
use crate::environment::Environment;
use crate::error::Error::{DuplicateParameter, MissingRequired, UnknownParameter};
use crate::error::Result;
use crate::parameter::Parameter;
use crate::raw_value::RawDataBag;

/// Parameters in declaration order, keyed by long name.
#[derive(Debug, Clone, Default)]
pub struct ParameterRegistry {
    parameters: IndexMap<String, Parameter>,
}

impl ParameterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a list of declarations.
    ///
    /// # Errors
    ///
    /// Returns the first error [`ParameterRegistry::define`] reports.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = ParameterDefinition>,
    ) -> Result<Self> {
        let mut registry = Self::new();
        for definition in definitions {
            registry.define(definition)?;
        }
        Ok(registry)
    }

    /// Declares a new parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if the declaration is invalid, or if its long or short
    /// name is already taken.
    pub fn define(&mut self, definition: ParameterDefinition) -> Result<&Parameter> {
        if self.parameters.contains_key(&definition.long_name) {
            return Err(DuplicateParameter(definition.long_name));
        }

        if let Some(short_name) = &definition.short_name {
            if self.find_by_short_name(short_name).is_some() {
                return Err(DuplicateParameter(short_name.clone()));
            }
        }

        let parameter = Parameter::new(definition)?;
        let long_name = parameter.long_name().to_string();
        debug!("Defined parameter {}", parameter.definition());

        Ok(self.parameters.entry(long_name).or_insert(parameter))
    }

    pub fn get(&self, long_name: &str) -> Option<&Parameter> {
        self.parameters.get(long_name)
    }

    /// Like [`ParameterRegistry::get`], but a missing parameter is an error.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownParameter`] if nothing was declared under `long_name`.
    pub fn require(&self, long_name: &str) -> Result<&Parameter> {
        self.get(long_name)
            .ok_or_else(|| UnknownParameter(long_name.to_string()))
    }

    pub fn find_by_short_name(&self, short_name: &str) -> Option<&Parameter> {
        self.parameters
            .values()
            .find(|parameter| parameter.definition().short_name.as_deref() == Some(short_name))
    }

    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.values()
    }

    pub fn len(&self) -> usize {
        self.parameters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parameters.is_empty()
    }

    /// Resolves every parameter from the parser's raw data bag.
    ///
    /// Each parameter receives the entry stored under its long name, or nothing
    /// if there is none. Entries for undeclared names are ignored.
    ///
    /// # Errors
    ///
    /// Stops at the first parameter that fails to resolve and returns its error.
    pub fn resolve_all(
        &mut self,
        raw_data: &RawDataBag,
        environment: &Environment,
        settings: &Settings,
    ) -> Result<()> {
        for (long_name, parameter) in &mut self.parameters {
            parameter.set_value(raw_data.get(long_name), environment, settings)?;
        }
        Ok(())
    }

    /// Long names of required parameters that resolved to nothing.
    pub fn missing_required(&self) -> Vec<&str> {
        self.parameters
            .values()
            .filter(|parameter| parameter.is_missing())
            .map(Parameter::long_name)
            .collect()
    }

    /// # Errors
    ///
    /// Returns [`MissingRequired`] naming every required parameter without a value.
    pub fn validate_required(&self) -> Result<()> {
        let missing = self.missing_required();
        if missing.is_empty() {
            return Ok(());
        }

        Err(MissingRequired(
            missing.into_iter().map(ToString::to_string).collect(),
        ))
    }

    /// Serializes every resolved value back into command-line tokens.
    pub fn to_arg_list(&self) -> Vec<String> {
        let mut arg_list = Vec::new();
        for parameter in self.parameters.values() {
            parameter.append_to_arg_list(&mut arg_list);
        }
        arg_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::raw_value::RawValue;

    fn sample_registry() -> ParameterRegistry {
        ParameterRegistry::from_definitions([
            ParameterDefinition::flag("--verbose")
                .with_short_name("-v")
                .with_environment_variable("VERBOSE"),
            ParameterDefinition::integer("--count", Some(10)).with_environment_variable("COUNT"),
            ParameterDefinition::string("--name", None).required(),
        ])
        .unwrap()
    }

    #[test]
    fn test_define_rejects_duplicates() {
        let mut registry = sample_registry();

        let result = registry.define(ParameterDefinition::flag("--verbose"));
        assert!(matches!(result, Err(Error::DuplicateParameter(name)) if name == "--verbose"));

        let result = registry.define(ParameterDefinition::flag("--very").with_short_name("-v"));
        assert!(matches!(result, Err(Error::DuplicateParameter(name)) if name == "-v"));

        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_lookup() {
        let registry = sample_registry();
        assert_eq!(
            registry.find_by_short_name("-v").map(Parameter::long_name),
            Some("--verbose")
        );
        assert!(registry.get("--count").is_some());
        assert!(matches!(
            registry.require("--missing"),
            Err(Error::UnknownParameter(_))
        ));
        let names: Vec<&str> = registry.parameters().map(Parameter::long_name).collect();
        assert_eq!(names, vec!["--verbose", "--count", "--name"]);
    }

    #[test]
    fn test_resolve_all() {
        let mut registry = sample_registry();
        let raw_data: RawDataBag = [
            ("--verbose".to_string(), RawValue::Bool(false)),
            ("--name".to_string(), RawValue::from("x")),
        ]
        .into_iter()
        .collect();
        let environment = Environment::new().with("VERBOSE", "1").with("COUNT", "3");

        registry
            .resolve_all(&raw_data, &environment, &Settings::default())
            .unwrap();

        assert_eq!(registry.get("--verbose").unwrap().flag(), Some(true));
        assert_eq!(registry.get("--count").unwrap().integer(), Some(3));
        assert_eq!(registry.get("--name").unwrap().string(), Some("x"));
        assert!(registry.validate_required().is_ok());
        assert_eq!(
            registry.to_arg_list(),
            vec!["--verbose", "--count", "3", "--name", "x"]
        );
    }

    #[test]
    fn test_missing_required() {
        let mut registry = sample_registry();
        registry
            .resolve_all(&RawDataBag::new(), &Environment::new(), &Settings::default())
            .unwrap();

        assert_eq!(registry.missing_required(), vec!["--name"]);
        let error = registry.validate_required().unwrap_err();
        assert_eq!(error.to_string(), "Missing required parameter(s): --name");
    }

    #[test]
    fn test_resolve_all_stops_on_error() {
        let mut registry = sample_registry();
        let environment = Environment::new().with("COUNT", "ten");

        let error = registry
            .resolve_all(&RawDataBag::new(), &environment, &Settings::default())
            .unwrap_err();
        assert!(matches!(error, Error::InvalidEnvironmentValue { ref variable, .. } if variable == "COUNT"));
    }
}
