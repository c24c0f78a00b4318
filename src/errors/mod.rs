//! Error types and error handling for the front-end.
//!
//! This module defines the single error type shared by the lexer and the
//! parser. It includes:
//!
//! - An error structure carrying the source position of the failure
//! - One message variant per diagnostic the grammar can produce
//! - Optional suggestions shown alongside the message

pub mod errors;

#[cfg(test)]
mod tests;
