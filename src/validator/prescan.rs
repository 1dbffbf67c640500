//! The first walk over a file.
//!
//! Registers every method signature and checks the shape of each method body,
//! so that calls may refer to methods declared further down. Global-scope
//! declarations and assignments are run through their checkers in seeding mode.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::classify, patterns::RETURN_REGEX, tokens::LineKind},
    SourceLine, MK_ERROR,
};

use super::{
    assignment::check_assignment,
    declaration::check_declaration,
    method::parse_method_header,
    validator::{Pass, Validator},
};

fn opens_block(line: &str) -> bool {
    line.trim().ends_with('{')
}

fn closes_block(line: &str) -> bool {
    line.trim().starts_with('}')
}

/// Index of the `}` closing the block opened at `start`.
pub fn find_method_end(lines: &[SourceLine], start: usize) -> Option<usize> {
    let mut depth = 0usize;

    for (index, line) in lines.iter().enumerate().skip(start) {
        if closes_block(&line.text) {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return Some(index);
            }
        }

        if opens_block(&line.text) {
            depth += 1;
        }
    }

    None
}

pub fn prescan(validator: &mut Validator, lines: &[SourceLine]) -> Result<(), Error> {
    validator.pass = Pass::PreScan;

    // Blocks opened at global scope outside any method. Their bodies belong to
    // the main pass, which rejects them.
    let mut depth = 0usize;
    let mut index = 0;

    while index < lines.len() {
        let line = &lines[index];
        validator.at_line(line);

        let trimmed = line.text.trim();
        let kind = classify(trimmed, &validator.position).ok();

        match kind {
            Some(LineKind::MethodDeclaration) if depth == 0 => {
                let position = validator.position.clone();
                let header = parse_method_header(trimmed, &position)?;
                validator.registry.register(header.signature(), &position)?;

                let Some(closing) = find_method_end(lines, index) else {
                    return Err(MK_ERROR!(
                        ErrorImpl::UnclosedMethod {
                            method: header.name
                        },
                        position
                    ));
                };

                validator.at_line(&lines[closing]);
                if !RETURN_REGEX.is_match(lines[closing - 1].text.trim()) {
                    return Err(MK_ERROR!(
                        ErrorImpl::MissingReturn {
                            method: header.name
                        },
                        validator.position
                    ));
                }

                index = closing + 1;
                continue;
            }
            Some(LineKind::Declaration) if depth == 0 => check_declaration(validator, trimmed)?,
            Some(LineKind::Assignment) if depth == 0 => check_assignment(validator, trimmed)?,
            _ => {
                if closes_block(trimmed) {
                    depth = depth.saturating_sub(1);
                }
                if opens_block(trimmed) {
                    depth += 1;
                }
            }
        }

        index += 1;
    }

    log::debug!(
        "pre-scan registered {} method(s)",
        validator.registry.len()
    );
    Ok(())
}
