//! The validation run and its line orchestrator.
//!
//! `validate` runs the pre-scan to completion, then walks every line once:
//! the line is classified into a `LineKind` and handed to the matching
//! checker. The run succeeds when the last line leaves only the global scope
//! open.

use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::{classify, is_identifier},
        patterns::RETURN_REGEX,
        tokens::LineKind,
    },
    symbols::{
        scope_stack::{ScopeKind, ScopeStack},
        symbol_table::SymbolTable,
        types::{literal_type, VarType},
    },
    Position, SourceLine, MK_ERROR,
};

use super::{
    assignment::check_assignment,
    condition::check_condition,
    declaration::check_declaration,
    method::{check_method_call, check_method_declaration},
    prescan::prescan,
    registry::MethodRegistry,
};

/// Which of the two walks over the file is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    PreScan,
    Main,
}

/// State of one validation run. Created per file and dropped afterwards.
#[derive(Debug)]
pub struct Validator {
    pub symbol_table: SymbolTable,
    pub scope_stack: ScopeStack,
    pub registry: MethodRegistry,
    pub pass: Pass,
    /// Position of the line being checked.
    pub position: Position,
    file: Rc<String>,
}

impl Validator {
    pub fn new(file: Rc<String>) -> Self {
        Validator {
            symbol_table: SymbolTable::new(),
            scope_stack: ScopeStack::new(),
            registry: MethodRegistry::new(),
            pass: Pass::PreScan,
            position: Position(0, Rc::clone(&file)),
            file,
        }
    }

    pub fn at_line(&mut self, line: &SourceLine) {
        self.position = Position(line.number, Rc::clone(&self.file));
    }

    /// Opens a block on both the control stack and the symbol table.
    pub fn enter_block(&mut self, kind: ScopeKind) {
        self.scope_stack.push(kind);
        self.symbol_table.enter_scope();
    }

    /// Closes the innermost block, failing at global scope.
    pub fn exit_block(&mut self) -> Result<ScopeKind, Error> {
        let kind = self.scope_stack.pop(&self.position)?;
        self.symbol_table.exit_scope(&self.position)?;
        Ok(kind)
    }
}

/// The type a value expression evaluates to: the variable's type for an
/// identifier, or the natural type of a literal.
///
/// Identifiers must be declared and assigned.
pub fn resolve_value(validator: &Validator, value: &str) -> Result<VarType, Error> {
    if is_identifier(value) {
        let Some(variable) = validator.symbol_table.lookup(value) else {
            return Err(MK_ERROR!(
                ErrorImpl::VariableNotDeclared {
                    variable: value.to_string()
                },
                validator.position
            ));
        };

        if !variable.is_assigned() {
            return Err(MK_ERROR!(
                ErrorImpl::VariableNotAssigned {
                    variable: value.to_string()
                },
                validator.position
            ));
        }

        return Ok(variable.var_type);
    }

    literal_type(value).ok_or_else(|| {
        MK_ERROR!(
            ErrorImpl::InvalidValue {
                value: value.to_string()
            },
            validator.position
        )
    })
}

pub fn check_return(validator: &mut Validator, line: &str) -> Result<(), Error> {
    if !RETURN_REGEX.is_match(line) {
        return Err(MK_ERROR!(
            ErrorImpl::InvalidSyntax {
                construct: String::from("return statement"),
                line: line.to_string()
            },
            validator.position
        ));
    }

    if !validator.scope_stack.in_method() {
        return Err(MK_ERROR!(
            ErrorImpl::OutsideMethod {
                construct: String::from("return")
            },
            validator.position
        ));
    }

    Ok(())
}

/// Checks one line of the main pass.
pub fn validate_line(validator: &mut Validator, line: &str) -> Result<(), Error> {
    let trimmed = line.trim();
    let kind = classify(trimmed, &validator.position)?;

    log::debug!("line {}: {}", validator.position.0, kind);

    match kind {
        LineKind::MethodDeclaration => check_method_declaration(validator, trimmed),
        LineKind::MethodCall => check_method_call(validator, trimmed),
        LineKind::If => check_condition(validator, trimmed, ScopeKind::If),
        LineKind::While => check_condition(validator, trimmed, ScopeKind::While),
        LineKind::Declaration => check_declaration(validator, trimmed),
        LineKind::Return => check_return(validator, trimmed),
        LineKind::Assignment => check_assignment(validator, trimmed),
        LineKind::CloseScope => validator.exit_block().map(|_| ()),
    }
}

/// Validates a whole file given as its meaningful lines.
pub fn validate(lines: &[SourceLine], file: Rc<String>) -> Result<(), Error> {
    let mut validator = Validator::new(file);

    log::debug!("pre-scan over {} line(s)", lines.len());
    prescan(&mut validator, lines)?;

    validator.pass = Pass::Main;
    log::debug!("main pass");

    for line in lines {
        validator.at_line(line);
        validate_line(&mut validator, &line.text)?;
    }

    if !validator.scope_stack.is_global() {
        return Err(MK_ERROR!(
            ErrorImpl::UnclosedScope {
                open: validator.scope_stack.depth() - 1
            },
            validator.position
        ));
    }

    Ok(())
}
