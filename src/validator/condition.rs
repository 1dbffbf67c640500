use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{is_identifier, tokenize_condition},
        patterns::{CONDITION_LINE_REGEX, DOUBLE_REGEX},
        tokens::{Token, TokenKind},
    },
    symbols::scope_stack::ScopeKind,
    MK_ERROR,
};

use super::validator::Validator;

fn invalid_condition(validator: &Validator, tokens: &[Token]) -> Error {
    let condition = tokens
        .iter()
        .map(|token| token.value.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    MK_ERROR!(ErrorImpl::InvalidCondition { condition }, validator.position)
}

fn check_atom(validator: &Validator, tokens: &[Token]) -> Result<(), Error> {
    let [token] = tokens else {
        return Err(invalid_condition(validator, tokens));
    };

    if token.kind != TokenKind::Atom {
        return Err(invalid_condition(validator, tokens));
    }

    let atom = token.value.as_str();
    if atom == "true" || atom == "false" || DOUBLE_REGEX.is_match(atom) {
        return Ok(());
    }

    if !is_identifier(atom) {
        return Err(invalid_condition(validator, tokens));
    }

    let Some(variable) = validator.symbol_table.lookup(atom) else {
        return Err(MK_ERROR!(
            ErrorImpl::VariableNotDeclared {
                variable: atom.to_string()
            },
            validator.position
        ));
    };

    if !variable.is_assigned() {
        return Err(MK_ERROR!(
            ErrorImpl::VariableNotAssigned {
                variable: atom.to_string()
            },
            validator.position
        ));
    }

    if !variable.var_type.is_condition_type() {
        return Err(MK_ERROR!(
            ErrorImpl::TypeMatchError {
                expected: String::from("boolean"),
                received: variable.var_type.to_string()
            },
            validator.position
        ));
    }

    Ok(())
}

/// Splits on the left-most `||`, then the left-most `&&`, and otherwise
/// requires a single atom. Both sides of a split must hold.
pub fn check_expression(validator: &Validator, tokens: &[Token]) -> Result<(), Error> {
    for operator in [TokenKind::Or, TokenKind::And] {
        if let Some(split) = tokens.iter().position(|token| token.kind == operator) {
            check_expression(validator, &tokens[..split])?;
            return check_expression(validator, &tokens[split + 1..]);
        }
    }

    check_atom(validator, tokens)
}

/// Checks an `if (...) {` or `while (...) {` line and opens its block.
pub fn check_condition(validator: &mut Validator, line: &str, kind: ScopeKind) -> Result<(), Error> {
    let position = validator.position.clone();
    let keyword = match kind {
        ScopeKind::While => "while",
        _ => "if",
    };

    if !validator.scope_stack.in_method() {
        return Err(MK_ERROR!(
            ErrorImpl::OutsideMethod {
                construct: keyword.to_string()
            },
            position
        ));
    }

    let Some(captures) = CONDITION_LINE_REGEX.captures(line) else {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidSyntax {
                construct: format!("{} statement", keyword),
                line: line.to_string()
            },
            position
        ));
    };

    let mut tokens = tokenize_condition(&captures[2], &position)?;
    tokens.retain(|token| token.kind != TokenKind::EOF);

    check_expression(validator, &tokens)?;

    validator.enter_block(kind);
    Ok(())
}
