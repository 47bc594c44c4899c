use std::any::type_name;

use thiserror::Error;

use crate::Scalar;

/// Malformed text input.
///
/// Parsing always builds a fresh value, so a failed parse leaves any existing value untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, but the input ended")]
    MissingField { expected: &'static str },
    #[error("could not read {token:?} as {type_name}")]
    InvalidNumber {
        token: String,
        type_name: &'static str,
    },
    #[error("unknown shape kind {0:?}")]
    UnknownKind(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

/// Reads a value from a stream of whitespace separated tokens, consuming only the tokens it needs.
pub trait FromTokens: Sized {
    fn from_tokens<'a, I>(tokens: &mut I) -> Result<Self, ParseError>
    where
        I: Iterator<Item = &'a str>;
}

pub fn next_token<'a, I>(tokens: &mut I, expected: &'static str) -> Result<&'a str, ParseError>
where
    I: Iterator<Item = &'a str>,
{
    tokens.next().ok_or(ParseError::MissingField { expected })
}

pub fn next_scalar<'a, T, I>(tokens: &mut I, expected: &'static str) -> Result<T, ParseError>
where
    T: Scalar,
    I: Iterator<Item = &'a str>,
{
    let token = next_token(tokens, expected)?;
    token.parse::<T>().map_err(|_| ParseError::InvalidNumber {
        token: token.to_string(),
        type_name: type_name::<T>(),
    })
}

/// Parses a whole string as exactly one value.
pub fn parse_complete<T: FromTokens>(text: &str) -> Result<T, ParseError> {
    let mut tokens = text.split_whitespace();
    let value = T::from_tokens(&mut tokens)?;
    match tokens.next() {
        Some(extra) => Err(ParseError::TrailingInput(extra.to_string())),
        None => Ok(value),
    }
}

/// Reads values back to back until the text runs out.
pub fn parse_many<T: FromTokens>(text: &str) -> Result<Vec<T>, ParseError> {
    let mut tokens = text.split_whitespace().peekable();
    let mut values = vec![];
    while tokens.peek().is_some() {
        values.push(T::from_tokens(&mut tokens)?);
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_next_scalar_reads_in_order() {
        let mut tokens = "3 -4 2.5".split_whitespace();
        assert_eq!(next_scalar::<i32, _>(&mut tokens, "a"), Ok(3));
        assert_eq!(next_scalar::<i32, _>(&mut tokens, "b"), Ok(-4));
        assert_eq!(next_scalar::<f64, _>(&mut tokens, "c"), Ok(2.5));
        assert_eq!(
            next_scalar::<f64, _>(&mut tokens, "d"),
            Err(ParseError::MissingField { expected: "d" })
        );
    }
    #[test]
    fn test_non_numeric_token() {
        let mut tokens = "abc".split_whitespace();
        assert_eq!(
            next_scalar::<i32, _>(&mut tokens, "x coordinate"),
            Err(ParseError::InvalidNumber {
                token: "abc".to_string(),
                type_name: "i32"
            })
        );
    }
    #[test]
    fn test_float_token_is_not_an_integer() {
        let mut tokens = "1.5".split_whitespace();
        assert!(matches!(
            next_scalar::<u8, _>(&mut tokens, "x coordinate"),
            Err(ParseError::InvalidNumber { .. })
        ));
    }
}
