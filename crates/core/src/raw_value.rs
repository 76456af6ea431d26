//! Raw values handed over by the token parser.
//!
//! The token parser splits `argv` and stores one raw value per parameter,
//! keyed by long name. An omitted parameter has no entry at all, which is
//! why resolution takes an `Option<&RawValue>`.

use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// The raw data bag produced by the token parser, keyed by long name.
pub type RawDataBag = HashMap<String, RawValue>;

/// One untyped value as the token parser produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    /// An explicit null, treated the same as an omitted value.
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
    List(Vec<RawValue>),
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

// Rendered JSON-like so error messages show exactly what the parser delivered.
impl Display for RawValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => formatter.write_str("null"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::String(value) => write!(formatter, "{value:?}"),
            Self::List(values) => {
                formatter.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        formatter.write_str(",")?;
                    }
                    write!(formatter, "{value}")?;
                }
                formatter.write_str("]")
            }
        }
    }
}
