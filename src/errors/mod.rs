//! Error types and error reporting for the lexer.
//!
//! This module defines:
//!
//! - `LexicalError`, raised when no rule matches at the cursor
//! - The positioned `Error` wrapper with a name and an optional tip
//! - The context window used to quote the source near a failure

pub mod errors;
pub mod window;

#[cfg(test)]
mod tests;
