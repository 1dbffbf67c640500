//! Error types and error handling for the validator.
//!
//! This module defines the errors raised while validating a file. It includes:
//!
//! - Error structures carrying the line position they were raised at
//! - Detailed error variants, each mapped onto one coarse `ErrorKind`
//! - Error names and suggestions for display

pub mod errors;
