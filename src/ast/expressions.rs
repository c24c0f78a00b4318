use getset::Getters;

use crate::Span;

use super::ast::Expr;

// LITERALS

/// Number Expression
/// Represents a numeric literal in the AST.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct NumberExpr {
    value: f64,
    span: Span,
}

impl NumberExpr {
    pub fn new(value: f64, span: Span) -> Self {
        NumberExpr { value, span }
    }
}

/// Variable Expression
/// A bare reference to a name.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct VariableExpr {
    name: String,
    span: Span,
}

impl VariableExpr {
    pub fn new(name: String, span: Span) -> Self {
        VariableExpr { name, span }
    }
}

// COMPOUND

/// Call Expression
/// `callee(arg, ...)`. Arguments are kept in source order.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct CallExpr {
    callee: String,
    arguments: Vec<Expr>,
    span: Span,
}

impl CallExpr {
    pub fn new(callee: String, arguments: Vec<Expr>, span: Span) -> Self {
        CallExpr {
            callee,
            arguments,
            span,
        }
    }
}

/// If Expression
///
/// `if <cond> <then> else <else>`. The parser always fills all three
/// branches; a node built by hand may leave some out, in which case it lowers
/// to nothing.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct IfExpr {
    condition: Option<Box<Expr>>,
    then_branch: Option<Box<Expr>>,
    else_branch: Option<Box<Expr>>,
    span: Span,
}

impl IfExpr {
    pub fn new(
        condition: Option<Expr>,
        then_branch: Option<Expr>,
        else_branch: Option<Expr>,
        span: Span,
    ) -> Self {
        IfExpr {
            condition: condition.map(Box::new),
            then_branch: then_branch.map(Box::new),
            else_branch: else_branch.map(Box::new),
            span,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.condition.is_some() && self.then_branch.is_some() && self.else_branch.is_some()
    }
}

/// While Expression
/// `while <cond> { <body> }`; the block itself leaves no node behind.
#[derive(Debug, Clone, PartialEq, Getters)]
#[getset(get = "pub")]
pub struct WhileExpr {
    condition: Option<Box<Expr>>,
    body: Option<Box<Expr>>,
    span: Span,
}

impl WhileExpr {
    pub fn new(condition: Option<Expr>, body: Option<Expr>, span: Span) -> Self {
        WhileExpr {
            condition: condition.map(Box::new),
            body: body.map(Box::new),
            span,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.condition.is_some() && self.body.is_some()
    }
}
