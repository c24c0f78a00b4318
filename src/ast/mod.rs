/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the tree the parser builds
///
/// Submodules:
/// - ast: The closed `Expr` sum type over every node kind
/// - expressions: Number, variable, call, if and while nodes
/// - functions: Prototype and function definition nodes
pub mod ast;
pub mod expressions;
pub mod functions;
