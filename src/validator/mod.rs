//! Line validation for the subject language.
//!
//! This module contains the checkers and the two passes that drive them:
//!
//! - The method registry filled by the pre-scan
//! - One checker per construct (declaration, assignment, condition, method)
//! - The orchestrator that classifies and dispatches each line

pub mod assignment;
pub mod condition;
pub mod declaration;
pub mod method;
pub mod prescan;
pub mod registry;
pub mod validator;

#[cfg(test)]
mod tests;
