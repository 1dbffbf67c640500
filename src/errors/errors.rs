use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        self.internal_error.kind()
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::InvalidLineEnding { .. } => "InvalidLineEnding",
            ErrorImpl::UnrecognisedLine { .. } => "UnrecognisedLine",
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::InvalidSyntax { .. } => "InvalidSyntax",
            ErrorImpl::InvalidIdentifier { .. } => "InvalidIdentifier",
            ErrorImpl::InvalidValue { .. } => "InvalidValue",
            ErrorImpl::UnknownType { .. } => "UnknownType",
            ErrorImpl::FinalWithoutValue { .. } => "FinalWithoutValue",
            ErrorImpl::InvalidCondition { .. } => "InvalidCondition",
            ErrorImpl::OutsideMethod { .. } => "OutsideMethod",
            ErrorImpl::NestedMethod { .. } => "NestedMethod",
            ErrorImpl::InvalidScopeExit => "InvalidScopeExit",
            ErrorImpl::UnclosedScope { .. } => "UnclosedScope",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::VariableNotAssigned { .. } => "VariableNotAssigned",
            ErrorImpl::MethodNotDeclared { .. } => "MethodNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::ArgumentTypeMatchError { .. } => "ArgumentTypeMatchError",
            ErrorImpl::FinalReassignment { .. } => "FinalReassignment",
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::MethodAlreadyDeclared { .. } => "MethodAlreadyDeclared",
            ErrorImpl::ParameterAlreadyDeclared { .. } => "ParameterAlreadyDeclared",
            ErrorImpl::UnexpectedArguments { .. } => "UnexpectedArguments",
            ErrorImpl::MissingArguments { .. } => "MissingArguments",
            ErrorImpl::MissingReturn { .. } => "MissingReturn",
            ErrorImpl::UnclosedMethod { .. } => "UnclosedMethod",
            ErrorImpl::UnregisteredMethod { .. } => "UnregisteredMethod",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::InvalidLineEnding { .. } => ErrorTip::Suggestion(String::from(
                "Every line must end with `;`, `{` or `}`",
            )),
            ErrorImpl::UnrecognisedLine { .. } => ErrorTip::None,
            ErrorImpl::UnrecognisedToken { token } => {
                ErrorTip::Suggestion(format!("Unexpected `{}` in condition", token))
            }
            ErrorImpl::InvalidSyntax { construct, .. } => {
                ErrorTip::Suggestion(format!("Malformed {}", construct))
            }
            ErrorImpl::InvalidIdentifier { name } => ErrorTip::Suggestion(format!(
                "`{}` is not a valid name, names start with a letter or `_` followed by a letter or digit",
                name
            )),
            ErrorImpl::InvalidValue { value } => {
                ErrorTip::Suggestion(format!("`{}` is not a literal of any type", value))
            }
            ErrorImpl::UnknownType { type_ } => {
                ErrorTip::Suggestion(format!("Unknown type `{}` found", type_))
            }
            ErrorImpl::FinalWithoutValue { variable } => ErrorTip::Suggestion(format!(
                "Final variable `{}` must be given a value where it is declared",
                variable
            )),
            ErrorImpl::InvalidCondition { condition } => ErrorTip::Suggestion(format!(
                "`{}` is not a boolean, int or double value",
                condition
            )),
            ErrorImpl::OutsideMethod { construct } => {
                ErrorTip::Suggestion(format!("`{}` is only allowed inside a method", construct))
            }
            ErrorImpl::NestedMethod { method } => ErrorTip::Suggestion(format!(
                "Method `{}` is declared inside another method",
                method
            )),
            ErrorImpl::InvalidScopeExit => ErrorTip::Suggestion(String::from(
                "Closing brace without a matching opening block",
            )),
            ErrorImpl::UnclosedScope { open } => {
                ErrorTip::Suggestion(format!("{} block(s) never closed", open))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::VariableNotAssigned { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is used before it is given a value",
                variable
            )),
            ErrorImpl::MethodNotDeclared { method } => {
                ErrorTip::Suggestion(format!("Method `{}` not declared", method))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::ArgumentTypeMatchError {
                expected, received, ..
            } => ErrorTip::Suggestion(format!(
                "Expected argument type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::FinalReassignment { variable } => ErrorTip::Suggestion(format!(
                "Variable `{}` is final and cannot be assigned again",
                variable
            )),
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::MethodAlreadyDeclared { method } => {
                ErrorTip::Suggestion(format!("Method `{}` already declared", method))
            }
            ErrorImpl::ParameterAlreadyDeclared { parameter, method } => ErrorTip::Suggestion(
                format!("Parameter `{}` appears twice in `{}`", parameter, method),
            ),
            ErrorImpl::UnexpectedArguments { expected, received } => ErrorTip::Suggestion(
                format!("Expected {} arguments, received {}", expected, received),
            ),
            ErrorImpl::MissingArguments { expected, received } => ErrorTip::Suggestion(format!(
                "Expected {} arguments, received {}",
                expected, received
            )),
            ErrorImpl::MissingReturn { method } => ErrorTip::Suggestion(format!(
                "Method `{}` must end with `return;` before its closing brace",
                method
            )),
            ErrorImpl::UnclosedMethod { method } => {
                ErrorTip::Suggestion(format!("Method `{}` is never closed", method))
            }
            ErrorImpl::UnregisteredMethod { .. } => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}: {}",
            self.kind(),
            self.position.1,
            self.position.0,
            self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// The coarse category a validation failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    SyntaxError,
    ScopeError,
    UndeclaredVariable,
    TypeMismatch,
    FinalReassignment,
    DuplicateDeclaration,
    ArityMismatch,
    StructuralMethodError,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("line does not end with `;`, `{{` or `}}`: {line:?}")]
    InvalidLineEnding { line: String },
    #[error("unrecognised line: {line:?}")]
    UnrecognisedLine { line: String },
    #[error("unrecognised token: {token:?}")]
    UnrecognisedToken { token: String },
    #[error("invalid {construct}: {line:?}")]
    InvalidSyntax { construct: String, line: String },
    #[error("invalid identifier {name:?}")]
    InvalidIdentifier { name: String },
    #[error("invalid value {value:?}")]
    InvalidValue { value: String },
    #[error("unknown type {type_} found")]
    UnknownType { type_: String },
    #[error("final variable {variable:?} declared without a value")]
    FinalWithoutValue { variable: String },
    #[error("invalid condition {condition:?}")]
    InvalidCondition { condition: String },
    #[error("{construct} used outside of a method")]
    OutsideMethod { construct: String },
    #[error("method {method:?} declared inside another method")]
    NestedMethod { method: String },
    #[error("closing brace outside of any block")]
    InvalidScopeExit,
    #[error("{open} block(s) left open at end of file")]
    UnclosedScope { open: usize },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("variable {variable:?} used before assignment")]
    VariableNotAssigned { variable: String },
    #[error("method {method:?} not declared")]
    MethodNotDeclared { method: String },
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMatchError { expected: String, received: String },
    #[error("argument {index} of {method:?} does not match: expected {expected:?}, received {received:?}")]
    ArgumentTypeMatchError {
        method: String,
        index: usize,
        expected: String,
        received: String,
    },
    #[error("final variable {variable:?} cannot be reassigned")]
    FinalReassignment { variable: String },
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("method {method:?} already declared")]
    MethodAlreadyDeclared { method: String },
    #[error("parameter {parameter:?} of {method:?} already declared")]
    ParameterAlreadyDeclared { parameter: String, method: String },
    #[error("unexpected arguments: expected {expected:?}, received {received:?}")]
    UnexpectedArguments { expected: usize, received: usize },
    #[error("missing arguments: expected {expected:?}, received {received:?}")]
    MissingArguments { expected: usize, received: usize },
    #[error("method {method:?} does not end with `return;`")]
    MissingReturn { method: String },
    #[error("method {method:?} is never closed")]
    UnclosedMethod { method: String },
    #[error("method {method:?} reached the main pass without being registered")]
    UnregisteredMethod { method: String },
}

impl ErrorImpl {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorImpl::InvalidLineEnding { .. }
            | ErrorImpl::UnrecognisedLine { .. }
            | ErrorImpl::UnrecognisedToken { .. }
            | ErrorImpl::InvalidSyntax { .. }
            | ErrorImpl::InvalidIdentifier { .. }
            | ErrorImpl::InvalidValue { .. }
            | ErrorImpl::UnknownType { .. }
            | ErrorImpl::FinalWithoutValue { .. }
            | ErrorImpl::InvalidCondition { .. } => ErrorKind::SyntaxError,
            ErrorImpl::OutsideMethod { .. }
            | ErrorImpl::NestedMethod { .. }
            | ErrorImpl::InvalidScopeExit
            | ErrorImpl::UnclosedScope { .. } => ErrorKind::ScopeError,
            ErrorImpl::VariableNotDeclared { .. }
            | ErrorImpl::VariableNotAssigned { .. }
            | ErrorImpl::MethodNotDeclared { .. } => ErrorKind::UndeclaredVariable,
            ErrorImpl::TypeMatchError { .. } | ErrorImpl::ArgumentTypeMatchError { .. } => {
                ErrorKind::TypeMismatch
            }
            ErrorImpl::FinalReassignment { .. } => ErrorKind::FinalReassignment,
            ErrorImpl::VariableAlreadyDeclared { .. }
            | ErrorImpl::MethodAlreadyDeclared { .. }
            | ErrorImpl::ParameterAlreadyDeclared { .. } => ErrorKind::DuplicateDeclaration,
            ErrorImpl::UnexpectedArguments { .. } | ErrorImpl::MissingArguments { .. } => {
                ErrorKind::ArityMismatch
            }
            ErrorImpl::MissingReturn { .. }
            | ErrorImpl::UnclosedMethod { .. }
            | ErrorImpl::UnregisteredMethod { .. } => ErrorKind::StructuralMethodError,
        }
    }
}
