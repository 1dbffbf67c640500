use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::is_identifier, patterns::ASSIGNMENT_LINE_REGEX},
    MK_ERROR,
};

use super::validator::{resolve_value, Validator};

/// Checks comma-separated `name = value` pairs ending in `;`.
///
/// A final target is rejected before its right-hand side is looked at.
pub fn check_assignment(validator: &mut Validator, line: &str) -> Result<(), Error> {
    let position = validator.position.clone();

    let invalid = || {
        MK_ERROR!(
            ErrorImpl::InvalidSyntax {
                construct: String::from("assignment"),
                line: line.to_string()
            },
            position
        )
    };

    let Some(captures) = ASSIGNMENT_LINE_REGEX.captures(line) else {
        return Err(invalid());
    };

    for item in captures[1].split(',') {
        let Some((target, value)) = item.split_once('=') else {
            return Err(invalid());
        };
        let (target, value) = (target.trim(), value.trim());

        if !is_identifier(target) {
            return Err(MK_ERROR!(
                ErrorImpl::InvalidIdentifier {
                    name: target.to_string()
                },
                position
            ));
        }

        if value.is_empty() {
            return Err(invalid());
        }

        match validator.symbol_table.lookup(target) {
            None => {
                return Err(MK_ERROR!(
                    ErrorImpl::VariableNotDeclared {
                        variable: target.to_string()
                    },
                    position
                ))
            }
            Some(variable) if variable.is_final => {
                return Err(MK_ERROR!(
                    ErrorImpl::FinalReassignment {
                        variable: target.to_string()
                    },
                    position
                ))
            }
            Some(_) => {}
        }

        let received = resolve_value(validator, value)?;
        validator.symbol_table.assign(target, received, &position)?;
    }

    Ok(())
}
