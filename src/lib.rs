#![allow(clippy::module_inception)]

use std::{fmt::Write, fs, io, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod symbols;
pub mod validator;

extern crate regex;

pub use validator::validator::validate;

/// A 1-based line number in a named file.
#[derive(Debug, Clone, PartialEq)]
pub struct Position(pub u32, pub Rc<String>);

/// A meaningful line of a source file, with its original number.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceLine {
    pub number: u32,
    pub text: String,
}

/// Drops blank lines and `//` comment lines, keeping the numbering of the rest.
pub fn preprocess(text: &str) -> Vec<SourceLine> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty() && !line.starts_with("//"))
        .map(|(index, line)| SourceLine {
            number: index as u32 + 1,
            text: line.to_string(),
        })
        .collect()
}

pub fn read_lines(path: &Path) -> io::Result<Vec<SourceLine>> {
    let content = fs::read_to_string(path)?;
    Ok(preprocess(&content))
}

pub fn validate_source(text: &str, file: Rc<String>) -> Result<(), Error> {
    validate(&preprocess(text), file)
}

/// Renders an error with the offending line.
///
/// ```text
/// Error: VariableNotDeclared (Variable `b` not declared)
/// -> Main.sjava
///    |
/// 12 | a = b;
///    | ^^^^^^
/// ```
pub fn display_error(error: &Error, lines: &[SourceLine]) -> String {
    let position = error.get_position();
    let line_string = position.0.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.1);
    let _ = writeln!(out, "{:>padding$}", "|");

    match lines.iter().find(|line| line.number == position.0) {
        Some(line) => {
            let (line_text, _) = remove_starting_whitespace(&line.text);
            let line_text = line_text.trim_end();
            let _ = writeln!(out, "{} | {}", line_string, line_text);

            let carets = line_text.chars().count().max(1);
            let _ = writeln!(out, "{:>padding$} {}", "|", "^".repeat(carets));
        }
        None => {
            let _ = writeln!(out, "{} | <end of file>", line_string);
        }
    }

    let _ = write!(out, "{}", error.get_internal_error());
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let start: usize = string
        .chars()
        .take_while(|c| c.is_whitespace())
        .map(char::len_utf8)
        .sum();

    (String::from(&string[start..]), start)
}
