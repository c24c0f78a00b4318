//! Lowering of expression trees to text.
//!
//! A post-order walk over [`crate::ast::ast::Expr`]: children are rendered
//! before the syntax of their parent is put around them. The output stands in
//! for a real backend and is what the binary prints.

pub mod compiler;
pub mod expr;
