//! Lexical analysis for a small Java-like language.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens. It handles:
//!
//! - An ordered table of regex rules, one per token kind
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for every token
//! - Filtering of comments and whitespace from the final stream

pub mod lexer;
pub mod rules;
pub mod tokens;
