//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into expression trees. It handles:
//!
//! - Primary expressions (numbers, names, calls, parentheses)
//! - `if`/`else` and `while` with braced bodies
//! - Top-level `def` and `extern` items
//! - Error reporting: the first failure aborts the construct being parsed
//!
//! There are no binary operators; the expression entry point is the primary
//! expression production.

pub mod expr;
pub mod functions;
pub mod lookups;
pub mod parser;
