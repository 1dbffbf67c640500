//! Variable types of the subject language.
//!
//! This module defines:
//!
//! - The five primitive types and their source keywords
//! - The widening table used by every checker
//! - The literal grammar of each type and the natural type of a literal

use std::fmt::Display;

use crate::lexer::{
    patterns::{BOOLEAN_REGEX, CHAR_REGEX, DOUBLE_REGEX, INT_REGEX, STRING_REGEX},
    tokens::{Keyword, RESERVED_LOOKUP},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarType {
    Int,
    Double,
    String,
    Boolean,
    Char,
}

impl VarType {
    /// Resolves a type keyword (`int`, `double`, `String`, `boolean`, `char`).
    pub fn from_keyword(word: &str) -> Option<Self> {
        match RESERVED_LOOKUP.get(word)? {
            Keyword::Int => Some(VarType::Int),
            Keyword::Double => Some(VarType::Double),
            Keyword::String => Some(VarType::String),
            Keyword::Boolean => Some(VarType::Boolean),
            Keyword::Char => Some(VarType::Char),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Double => "double",
            VarType::String => "String",
            VarType::Boolean => "boolean",
            VarType::Char => "char",
        }
    }

    /// Whether a value of type `value` may be stored in a slot of this type.
    ///
    /// Besides identity, only `int -> double` and `int | double -> boolean` widen.
    pub fn accepts(&self, value: VarType) -> bool {
        match (self, value) {
            (target, value) if *target == value => true,
            (VarType::Double, VarType::Int) => true,
            (VarType::Boolean, VarType::Int | VarType::Double) => true,
            _ => false,
        }
    }

    /// Whether `literal` is in this type's literal grammar.
    pub fn matches_literal(&self, literal: &str) -> bool {
        match self {
            VarType::Int => INT_REGEX.is_match(literal),
            VarType::Double => DOUBLE_REGEX.is_match(literal),
            VarType::Boolean => BOOLEAN_REGEX.is_match(literal),
            VarType::Char => CHAR_REGEX.is_match(literal),
            VarType::String => STRING_REGEX.is_match(literal),
        }
    }

    /// Types allowed as an `if`/`while` condition atom.
    pub fn is_condition_type(&self) -> bool {
        matches!(self, VarType::Int | VarType::Double | VarType::Boolean)
    }
}

impl Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// The narrowest type whose grammar `literal` belongs to.
pub fn literal_type(literal: &str) -> Option<VarType> {
    [
        VarType::Int,
        VarType::Double,
        VarType::Boolean,
        VarType::Char,
        VarType::String,
    ]
    .into_iter()
    .find(|ty| ty.matches_literal(literal))
}
