//! Symbols and scopes of a validation run.
//!
//! This module holds the state the checkers consult and update:
//!
//! - Variable types, widening and literal grammars
//! - The variable model with its status lifecycle
//! - The symbol table, a stack of frames with global seeding/finalizing
//! - The control stack of open blocks (global, method, if, while)

pub mod scope_stack;
pub mod symbol_table;
pub mod types;
pub mod variable;
