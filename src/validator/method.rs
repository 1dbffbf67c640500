use std::collections::HashSet;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::is_identifier,
        patterns::{METHOD_CALL_REGEX, METHOD_DECLARATION_REGEX, PARAMETER_REGEX},
    },
    symbols::{scope_stack::ScopeKind, types::VarType},
    Position, MK_ERROR,
};

use super::{
    registry::MethodSignature,
    validator::{resolve_value, Validator},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub var_type: VarType,
    pub is_final: bool,
}

/// A parsed `void name(params) {` line.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodHeader {
    pub name: String,
    pub parameters: Vec<Parameter>,
}

impl MethodHeader {
    pub fn signature(&self) -> MethodSignature {
        MethodSignature {
            name: self.name.clone(),
            parameters: self.parameters.iter().map(|p| p.var_type).collect(),
        }
    }
}

/// Splits a parenthesised list on commas. An empty list yields no items;
/// an empty item is an error.
fn split_list<'a>(
    list: &'a str,
    construct: &str,
    line: &str,
    position: &Position,
) -> Result<Vec<&'a str>, Error> {
    if list.trim().is_empty() {
        return Ok(vec![]);
    }

    list.split(',')
        .map(str::trim)
        .map(|item| {
            if item.is_empty() {
                Err(MK_ERROR!(
                    ErrorImpl::InvalidSyntax {
                        construct: construct.to_string(),
                        line: line.to_string()
                    },
                    position
                ))
            } else {
                Ok(item)
            }
        })
        .collect()
}

pub fn parse_method_header(line: &str, position: &Position) -> Result<MethodHeader, Error> {
    let Some(captures) = METHOD_DECLARATION_REGEX.captures(line) else {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidSyntax {
                construct: String::from("method declaration"),
                line: line.to_string()
            },
            position
        ));
    };

    let name = &captures[1];
    if !is_identifier(name) {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidIdentifier {
                name: name.to_string()
            },
            position
        ));
    }

    let mut parameters = vec![];
    for item in split_list(&captures[2], "parameter list", line, position)? {
        let Some(parameter) = PARAMETER_REGEX.captures(item) else {
            return Err(MK_ERROR!(
                ErrorImpl::InvalidSyntax {
                    construct: String::from("parameter"),
                    line: item.to_string()
                },
                position
            ));
        };

        let Some(var_type) = VarType::from_keyword(&parameter[2]) else {
            return Err(MK_ERROR!(
                ErrorImpl::UnknownType {
                    type_: parameter[2].to_string()
                },
                position
            ));
        };

        if !is_identifier(&parameter[3]) {
            return Err(MK_ERROR!(
                ErrorImpl::InvalidIdentifier {
                    name: parameter[3].to_string()
                },
                position
            ));
        }

        parameters.push(Parameter {
            name: parameter[3].to_string(),
            var_type,
            is_final: parameter.get(1).is_some(),
        });
    }

    Ok(MethodHeader {
        name: name.to_string(),
        parameters,
    })
}

/// Opens a method body and binds its parameters as assigned.
pub fn check_method_declaration(validator: &mut Validator, line: &str) -> Result<(), Error> {
    let position = validator.position.clone();

    if validator.scope_stack.in_method() {
        let name = METHOD_DECLARATION_REGEX
            .captures(line)
            .and_then(|c| c.get(1))
            .map_or(line, |m| m.as_str());

        return Err(MK_ERROR!(
            ErrorImpl::NestedMethod {
                method: name.to_string()
            },
            position
        ));
    }

    let header = parse_method_header(line, &position)?;

    if !validator.registry.contains(&header.name) {
        return Err(MK_ERROR!(
            ErrorImpl::UnregisteredMethod {
                method: header.name
            },
            position
        ));
    }

    let mut seen = HashSet::new();
    for parameter in header.parameters.iter() {
        if !seen.insert(parameter.name.as_str()) {
            return Err(MK_ERROR!(
                ErrorImpl::ParameterAlreadyDeclared {
                    parameter: parameter.name.clone(),
                    method: header.name.clone()
                },
                position
            ));
        }
    }

    validator.enter_block(ScopeKind::Method);
    for parameter in header.parameters.iter() {
        validator.symbol_table.declare(
            &parameter.name,
            parameter.var_type,
            parameter.is_final,
            true,
            &position,
        )?;
    }

    log::debug!("entered method `{}`", header.name);
    Ok(())
}

/// Checks a call against the registered signature of its method.
pub fn check_method_call(validator: &mut Validator, line: &str) -> Result<(), Error> {
    let position = validator.position.clone();

    if !validator.scope_stack.in_method() {
        return Err(MK_ERROR!(
            ErrorImpl::OutsideMethod {
                construct: String::from("method call")
            },
            position
        ));
    }

    let Some(captures) = METHOD_CALL_REGEX.captures(line) else {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidSyntax {
                construct: String::from("method call"),
                line: line.to_string()
            },
            position
        ));
    };

    let name = &captures[1];
    let Some(signature) = validator.registry.get(name) else {
        return Err(MK_ERROR!(
            ErrorImpl::MethodNotDeclared {
                method: name.to_string()
            },
            position
        ));
    };

    let arguments = split_list(&captures[2], "argument list", line, &position)?;

    if arguments.len() > signature.arity() {
        return Err(MK_ERROR!(
            ErrorImpl::UnexpectedArguments {
                expected: signature.arity(),
                received: arguments.len()
            },
            position
        ));
    } else if arguments.len() < signature.arity() {
        return Err(MK_ERROR!(
            ErrorImpl::MissingArguments {
                expected: signature.arity(),
                received: arguments.len()
            },
            position
        ));
    }

    let parameters = signature.parameters.iter();
    for (index, (argument, parameter)) in arguments.iter().zip(parameters).enumerate() {
        let received = resolve_value(validator, argument)?;

        if !parameter.accepts(received) {
            return Err(MK_ERROR!(
                ErrorImpl::ArgumentTypeMatchError {
                    method: name.to_string(),
                    index: index + 1,
                    expected: parameter.to_string(),
                    received: received.to_string()
                },
                position
            ));
        }
    }

    Ok(())
}
