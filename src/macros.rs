//! Utility macros for the validator.
//!
//! This module defines helper macros used throughout the crate:
//!
//! - `MK_TOKEN!` - Creates a condition Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for operator tokens
//! - `MK_ERROR!` - Creates an Error at a position
//!
//! These macros reduce boilerplate in the lexer and the checkers.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$column` - Offset of the token inside the condition
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Atom, "flag".to_string(), 0);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $column:expr) => {
        Token {
            kind: $kind,
            value: $value,
            column: $column,
        }
    };
}

/// Creates a default lexer handler for fixed operator patterns.
///
/// Generates a handler function that pushes a token with the given kind
/// and advances the lexer position by the operator's length.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: Regex::new("^&&").unwrap(),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::And, "&&"),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr, $value:literal) => {
        |lexer: &mut ConditionLexer, _regex: &Regex| {
            let column = lexer.pos;
            lexer.push(MK_TOKEN!($kind, String::from($value), column));
            lexer.advance_n($value.len());
        }
    };
}

/// Creates an `Error` from an `ErrorImpl` variant and a `&Position`.
///
/// # Example
///
/// ```ignore
/// return Err(MK_ERROR!(ErrorImpl::InvalidScopeExit, position));
/// ```
#[macro_export]
macro_rules! MK_ERROR {
    ($impl:expr, $position:expr) => {
        $crate::errors::errors::Error::new($impl, ($position).clone())
    };
}
