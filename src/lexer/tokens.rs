use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, Keyword> = {
        let mut map = HashMap::new();
        map.insert("void", Keyword::Void);
        map.insert("final", Keyword::Final);
        map.insert("if", Keyword::If);
        map.insert("while", Keyword::While);
        map.insert("return", Keyword::Return);
        map.insert("true", Keyword::True);
        map.insert("false", Keyword::False);
        map.insert("int", Keyword::Int);
        map.insert("double", Keyword::Double);
        map.insert("String", Keyword::String);
        map.insert("boolean", Keyword::Boolean);
        map.insert("char", Keyword::Char);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Void,
    Final,
    If,
    While,
    Return,
    True,
    False,

    // Types
    Int,
    Double,
    String,
    Boolean,
    Char,
}

impl Keyword {
    pub fn is_type(&self) -> bool {
        matches!(
            self,
            Keyword::Int | Keyword::Double | Keyword::String | Keyword::Boolean | Keyword::Char
        )
    }
}

pub fn is_reserved(word: &str) -> bool {
    RESERVED_LOOKUP.contains_key(word)
}

/// The shape of one line, decided from its leading token.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LineKind {
    MethodDeclaration,
    MethodCall,
    If,
    While,
    Declaration,
    Return,
    Assignment,
    CloseScope,
}

impl Display for LineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Atom,

    Or,
    And,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// A token of an `if`/`while` condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub column: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}
