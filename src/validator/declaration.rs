use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{lexer::is_identifier, patterns::DECLARATION_LINE_REGEX},
    symbols::types::VarType,
    MK_ERROR,
};

use super::validator::{resolve_value, Pass, Validator};

/// Checks `[final] <type> <name> [= <value>] (, <name> [= <value>])* ;`.
///
/// Items bind left to right, so a later initializer may read an earlier item.
pub fn check_declaration(validator: &mut Validator, line: &str) -> Result<(), Error> {
    let position = validator.position.clone();

    let Some(captures) = DECLARATION_LINE_REGEX.captures(line) else {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidSyntax {
                construct: String::from("variable declaration"),
                line: line.to_string()
            },
            position
        ));
    };

    let is_final = captures.get(1).is_some();
    let Some(var_type) = VarType::from_keyword(&captures[2]) else {
        return Err(MK_ERROR!(
            ErrorImpl::UnknownType {
                type_: captures[2].to_string()
            },
            position
        ));
    };

    for item in captures[3].split(',') {
        let (name, value) = match item.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value.trim())),
            None => (item.trim(), None),
        };

        if !is_identifier(name) {
            return Err(MK_ERROR!(
                ErrorImpl::InvalidIdentifier {
                    name: name.to_string()
                },
                position
            ));
        }

        match value {
            Some("") => {
                return Err(MK_ERROR!(
                    ErrorImpl::InvalidSyntax {
                        construct: String::from("variable declaration"),
                        line: line.to_string()
                    },
                    position
                ))
            }
            Some(value) => {
                let received = resolve_value(validator, value)?;

                if !var_type.accepts(received) {
                    return Err(MK_ERROR!(
                        ErrorImpl::TypeMatchError {
                            expected: var_type.to_string(),
                            received: received.to_string()
                        },
                        position
                    ));
                }
            }
            None if is_final => {
                return Err(MK_ERROR!(
                    ErrorImpl::FinalWithoutValue {
                        variable: name.to_string()
                    },
                    position
                ))
            }
            None => {}
        }

        let has_initializer = value.is_some();
        let symbols = &mut validator.symbol_table;

        if !symbols.is_global_scope() {
            symbols.declare(name, var_type, is_final, has_initializer, &position)?;
        } else if validator.pass == Pass::PreScan {
            symbols.seed_global(name, var_type, is_final, has_initializer, &position)?;
        } else {
            symbols.finalize_global(name, var_type, is_final, has_initializer, &position)?;
        }
    }

    Ok(())
}
