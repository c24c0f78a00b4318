use getset::Getters;

use crate::Span;

use super::ast::Expr;

/// Function signature: a name and its parameter names, no body.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct PrototypeAst {
    name: String,
    params: Vec<String>,
    span: Span,
}

impl PrototypeAst {
    pub fn new(name: String, params: Vec<String>, span: Span) -> Self {
        PrototypeAst { name, params, span }
    }
}

/// A prototype paired with its body.
///
/// Either half may be missing: a function without a body is a forward
/// declaration.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct FunctionAst {
    prototype: Option<PrototypeAst>,
    body: Option<Box<Expr>>,
    span: Span,
}

impl FunctionAst {
    pub fn new(prototype: Option<PrototypeAst>, body: Option<Expr>, span: Span) -> Self {
        FunctionAst {
            prototype,
            body: body.map(Box::new),
            span,
        }
    }
}
