//! Lexical analysis module for the front-end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using regex patterns
//! - Recognition of keywords, identifiers, number literals and punctuation
//! - Token position tracking for error reporting
//! - Comments and whitespace handling
//!
//! The parser consumes tokens through the [`source::TokenSource`] cursor.

pub mod lexer;
pub mod source;
pub mod tokens;
