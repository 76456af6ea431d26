use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::definitions::ParameterKind;

/// Final typed value of a parameter, one variant per kind.
///
/// Scalar kinds hold `None` when nothing supplied a value and no default was
/// declared. List kinds hold an empty list instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    Flag(bool),
    Integer(Option<i64>),
    String(Option<String>),
    Choice(Option<String>),
    StringList(Vec<String>),
    IntegerList(Vec<i64>),
    ChoiceList(Vec<String>),
}

impl ResolvedValue {
    /// The state of a parameter before the command line has been parsed.
    pub fn unresolved(kind: ParameterKind) -> Self {
        match kind {
            ParameterKind::Flag => Self::Flag(false),
            ParameterKind::Integer => Self::Integer(None),
            ParameterKind::String => Self::String(None),
            ParameterKind::Choice => Self::Choice(None),
            ParameterKind::StringList => Self::StringList(Vec::new()),
            ParameterKind::IntegerList => Self::IntegerList(Vec::new()),
            ParameterKind::ChoiceList => Self::ChoiceList(Vec::new()),
        }
    }

    pub fn kind(&self) -> ParameterKind {
        match self {
            Self::Flag(_) => ParameterKind::Flag,
            Self::Integer(_) => ParameterKind::Integer,
            Self::String(_) => ParameterKind::String,
            Self::Choice(_) => ParameterKind::Choice,
            Self::StringList(_) => ParameterKind::StringList,
            Self::IntegerList(_) => ParameterKind::IntegerList,
            Self::ChoiceList(_) => ParameterKind::ChoiceList,
        }
    }

    /// Whether a required parameter would be satisfied by this value.
    ///
    /// A flag always has a value.
    pub fn is_present(&self) -> bool {
        match self {
            Self::Flag(_) => true,
            Self::Integer(value) => value.is_some(),
            Self::String(value) | Self::Choice(value) => value.is_some(),
            Self::StringList(values) | Self::ChoiceList(values) => !values.is_empty(),
            Self::IntegerList(values) => !values.is_empty(),
        }
    }

    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => *value,
            _ => None,
        }
    }

    /// The value of a string or choice parameter.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) | Self::Choice(value) => value.as_deref(),
            _ => None,
        }
    }

    /// The values of a string list or choice list parameter.
    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Self::StringList(values) | Self::ChoiceList(values) => Some(values),
            _ => None,
        }
    }

    pub fn as_integers(&self) -> Option<&[i64]> {
        match self {
            Self::IntegerList(values) => Some(values),
            _ => None,
        }
    }

    /// Renders the value the way it is written back onto a command line,
    /// one token per element. Unset scalars and `false` produce no tokens.
    pub fn to_argument_values(&self) -> Vec<String> {
        match self {
            Self::Flag(_) => Vec::new(),
            Self::Integer(value) => value.iter().map(ToString::to_string).collect(),
            Self::String(value) | Self::Choice(value) => value.iter().cloned().collect(),
            Self::StringList(values) | Self::ChoiceList(values) => values.clone(),
            Self::IntegerList(values) => values.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Display for ResolvedValue {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Flag(value) => write!(formatter, "{value}"),
            Self::Integer(Some(value)) => write!(formatter, "{value}"),
            Self::String(Some(value)) | Self::Choice(Some(value)) => {
                write!(formatter, "\"{value}\"")
            }
            Self::Integer(None) | Self::String(None) | Self::Choice(None) => {
                formatter.write_str("(not set)")
            }
            Self::StringList(values) | Self::ChoiceList(values) => write!(
                formatter,
                "[{}]",
                values.iter().map(|value| format!("\"{value}\"")).join(", ")
            ),
            Self::IntegerList(values) => write!(formatter, "[{}]", values.iter().join(", ")),
        }
    }
}
