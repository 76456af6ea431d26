//! Snapshot of environment variables used during resolution.
//!
//! Resolution never reads the process environment directly. The caller takes a
//! snapshot (usually [`Environment::from_process`]) and passes it in, so the
//! resolved value is a function of the raw data, the snapshot and the definition.

use std::collections::HashMap;
use std::ffi::OsString;

use log::{debug, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    variables: HashMap<String, String>,
    /// Variables whose value is not valid unicode, kept as lossy text for messages.
    non_unicode: HashMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current process environment.
    pub fn from_process() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    /// Builds a snapshot from raw OS strings.
    ///
    /// A value that is not valid unicode is remembered, so that a parameter bound
    /// to it reports an invalid value instead of silently seeing it as unset.
    /// Names that are not valid unicode can never be bound and are skipped.
    pub fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        let mut environment = Self::new();

        for (name, value) in vars {
            let name = match name.into_string() {
                Ok(name) => name,
                Err(name) => {
                    debug!("Skipping environment variable {:?}: name is not valid unicode", name);
                    continue;
                }
            };

            match value.into_string() {
                Ok(value) => {
                    environment.variables.insert(name, value);
                }
                Err(value) => {
                    warn!("The environment variable {} is not valid unicode", name);
                    environment
                        .non_unicode
                        .insert(name, value.to_string_lossy().into_owned());
                }
            }
        }

        environment
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        self.non_unicode.remove(&name);
        self.variables.insert(name, value.into());
        self
    }

    /// Returns the value of `name`, treating an empty value as unset.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.variables
            .get(name)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Returns a lossy rendering of `name`'s value if it was set but not valid unicode.
    pub fn non_unicode(&self, name: &str) -> Option<&str> {
        self.non_unicode.get(name).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
            non_unicode: HashMap::new(),
        }
    }
}
