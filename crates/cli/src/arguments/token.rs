//! Classification of single command-line tokens.
//!
//! This module only looks at the shape of a token. Whether an option exists,
//! and whether it takes a value, is decided by the caller.

/// The shape of one command-line token.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Token<'a> {
    /// `--name` or `--name=value`
    Long {
        name: &'a str,
        value: Option<&'a str>,
    },
    /// `-n`
    Short(&'a str),
    /// `--` on its own, ending option processing
    EndOfOptions,
    /// Anything else, including negative numbers such as `-5`
    Value(&'a str),
}

impl Token<'_> {
    pub fn is_option(&self) -> bool {
        matches!(self, Token::Long { .. } | Token::Short(_))
    }
}

/// Determines the shape of a token.
///
/// # Examples
///
/// ```rust
/// use cmdline_params_cli::arguments::token::{classify, Token};
///
/// assert_eq!(classify("--count=3"), Token::Long { name: "--count", value: Some("3") });
/// assert_eq!(classify("-c"), Token::Short("-c"));
/// assert_eq!(classify("-3"), Token::Value("-3"));
/// ```
pub fn classify(token: &str) -> Token<'_> {
    if token == "--" {
        return Token::EndOfOptions;
    }

    if token.starts_with("--") {
        return match token.split_once('=') {
            Some((name, value)) => Token::Long {
                name,
                value: Some(value),
            },
            None => Token::Long {
                name: token,
                value: None,
            },
        };
    }

    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some('-'), Some(second)) if !second.is_ascii_digit() => Token::Short(token),
        _ => Token::Value(token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_long() {
        assert_eq!(
            classify("--verbose"),
            Token::Long {
                name: "--verbose",
                value: None
            }
        );
        assert_eq!(
            classify("--name=a=b"),
            Token::Long {
                name: "--name",
                value: Some("a=b")
            }
        );
        assert_eq!(
            classify("--name="),
            Token::Long {
                name: "--name",
                value: Some("")
            }
        );
    }

    #[test]
    fn test_classify_short_and_values() {
        assert_eq!(classify("-v"), Token::Short("-v"));
        assert_eq!(classify("-42"), Token::Value("-42"));
        assert_eq!(classify("-"), Token::Value("-"));
        assert_eq!(classify("plain"), Token::Value("plain"));
        assert_eq!(classify("--"), Token::EndOfOptions);
    }

    #[test]
    fn test_is_option() {
        assert!(classify("-v").is_option());
        assert!(classify("--v").is_option());
        assert!(!classify("v").is_option());
        assert!(!classify("--").is_option());
    }
}
