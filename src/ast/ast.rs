use crate::{compiler::compiler::Compiler, Span};

use super::{
    expressions::{CallExpr, IfExpr, NumberExpr, VariableExpr, WhileExpr},
    functions::{FunctionAst, PrototypeAst},
};

/// Expression Types
///
/// Discriminant-only view of [`Expr`], handy for assertions and logging.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Number,
    Variable,
    Call,
    If,
    While,
    Prototype,
    Function,
}

/// Any node of the tree.
///
/// Children are owned by their parent; a tree is dropped as a whole with its
/// root. Nothing mutates a node once the parser has built it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(NumberExpr),
    Variable(VariableExpr),
    Call(CallExpr),
    If(IfExpr),
    While(WhileExpr),
    Prototype(PrototypeAst),
    Function(FunctionAst),
}

impl Expr {
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Number(_) => ExprType::Number,
            Expr::Variable(_) => ExprType::Variable,
            Expr::Call(_) => ExprType::Call,
            Expr::If(_) => ExprType::If,
            Expr::While(_) => ExprType::While,
            Expr::Prototype(_) => ExprType::Prototype,
            Expr::Function(_) => ExprType::Function,
        }
    }

    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Number(expr) => expr.span(),
            Expr::Variable(expr) => expr.span(),
            Expr::Call(expr) => expr.span(),
            Expr::If(expr) => expr.span(),
            Expr::While(expr) => expr.span(),
            Expr::Prototype(proto) => proto.span(),
            Expr::Function(function) => function.span(),
        }
    }

    /// Renders this node with the default configuration.
    pub fn lower(&self) -> String {
        Compiler::default().lower(self)
    }
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

impl From<VariableExpr> for Expr {
    fn from(expr: VariableExpr) -> Self {
        Expr::Variable(expr)
    }
}

impl From<CallExpr> for Expr {
    fn from(expr: CallExpr) -> Self {
        Expr::Call(expr)
    }
}

impl From<IfExpr> for Expr {
    fn from(expr: IfExpr) -> Self {
        Expr::If(expr)
    }
}

impl From<WhileExpr> for Expr {
    fn from(expr: WhileExpr) -> Self {
        Expr::While(expr)
    }
}

impl From<PrototypeAst> for Expr {
    fn from(proto: PrototypeAst) -> Self {
        Expr::Prototype(proto)
    }
}

impl From<FunctionAst> for Expr {
    fn from(function: FunctionAst) -> Self {
        Expr::Function(function)
    }
}
