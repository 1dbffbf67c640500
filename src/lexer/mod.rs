//! Lexical analysis module for the validator.
//!
//! The subject language is line oriented, so there is no token stream for a
//! whole file. Instead this module provides:
//!
//! - The grammar rules (identifier, literal and line-shape regexes)
//! - Reserved word lookup
//! - Classification of a line into a `LineKind` by its leading token
//! - A small regex tokenizer for `if`/`while` conditions

pub mod lexer;
pub mod patterns;
pub mod tokens;
