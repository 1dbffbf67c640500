//! Grammar rules of the subject language.
//!
//! Every regex is anchored on both ends and compiled once.

use lazy_static::lazy_static;
use regex::Regex;

pub const IDENTIFIER: &str = r"(?:[a-zA-Z]|_[a-zA-Z0-9])[a-zA-Z0-9_]*";
pub const INT_VALUE: &str = r"[-+]?\d+";
pub const DOUBLE_VALUE: &str = r"[-+]?(?:\d*\.\d+|\d+\.\d*|\d+)";
pub const CHAR_VALUE: &str = r#"'[^"\\',]'"#;
pub const STRING_VALUE: &str = r#""[^"\\',]*""#;

lazy_static! {
    pub static ref IDENTIFIER_REGEX: Regex = Regex::new(&format!("^{}$", IDENTIFIER)).unwrap();
    pub static ref INT_REGEX: Regex = Regex::new(&format!("^{}$", INT_VALUE)).unwrap();
    pub static ref DOUBLE_REGEX: Regex = Regex::new(&format!("^{}$", DOUBLE_VALUE)).unwrap();
    pub static ref BOOLEAN_REGEX: Regex =
        Regex::new(&format!("^(?:true|false|{})$", DOUBLE_VALUE)).unwrap();
    pub static ref CHAR_REGEX: Regex = Regex::new(&format!("^{}$", CHAR_VALUE)).unwrap();
    pub static ref STRING_REGEX: Regex = Regex::new(&format!("^{}$", STRING_VALUE)).unwrap();

    /// Leading word of a line, or a leading `}`.
    pub static ref LEADING_TOKEN_REGEX: Regex =
        Regex::new(r"^\s*([a-zA-Z_][a-zA-Z0-9_]*|\})").unwrap();
    pub static ref LINE_END_REGEX: Regex = Regex::new(r"[;{}]$").unwrap();

    /// `[final] <type> <rest>;`
    pub static ref DECLARATION_LINE_REGEX: Regex =
        Regex::new(r"^(final\s+)?(\S+)\s+(.*?)\s*;$").unwrap();
    /// `<rest>;`
    pub static ref ASSIGNMENT_LINE_REGEX: Regex = Regex::new(r"^(.*?)\s*;$").unwrap();
    /// `(if|while) ( <condition> ) {`
    pub static ref CONDITION_LINE_REGEX: Regex =
        Regex::new(r"^(if|while)\s*\((.*)\)\s*\{$").unwrap();
    /// `void <name> ( <params> ) {`
    pub static ref METHOD_DECLARATION_REGEX: Regex =
        Regex::new(r"^void\s+(\S+?)\s*\((.*)\)\s*\{$").unwrap();
    /// `<name> ( <args> ) ;`
    pub static ref METHOD_CALL_REGEX: Regex =
        Regex::new(r"^([a-zA-Z_][a-zA-Z0-9_]*)\s*\((.*)\)\s*;$").unwrap();
    /// `[final] <type> <name>`
    pub static ref PARAMETER_REGEX: Regex = Regex::new(r"^(final\s+)?(\S+)\s+(\S+)$").unwrap();
    pub static ref RETURN_REGEX: Regex = Regex::new(r"^return\s*;$").unwrap();
}
