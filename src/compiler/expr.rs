use crate::ast::{
    ast::Expr,
    expressions::{CallExpr, IfExpr, NumberExpr, WhileExpr},
    functions::{FunctionAst, PrototypeAst},
};

use super::compiler::Compiler;

/// Renders `expression` and, post-order, everything below it.
pub fn gen_expression(compiler: &Compiler, expression: &Expr) -> String {
    match expression {
        Expr::Number(number) => gen_number(number),
        Expr::Variable(variable) => {
            tracing::debug!("lowering variable {}", variable.name());
            variable.name().clone()
        }
        Expr::Call(call) => gen_call(compiler, call),
        Expr::If(if_expr) => gen_if(compiler, if_expr),
        Expr::While(while_expr) => gen_while(compiler, while_expr),
        Expr::Prototype(proto) => gen_prototype(proto),
        Expr::Function(function) => gen_function(compiler, function),
    }
}

/// Shortest decimal form: `42.0` renders as `42`, `2.5` as `2.5`.
fn gen_number(number: &NumberExpr) -> String {
    tracing::debug!("lowering number {}", number.value());
    format!("{}", number.value())
}

/// Arguments are lowered left to right. Unless `stitch_calls` is set the call
/// itself contributes no text.
fn gen_call(compiler: &Compiler, call: &CallExpr) -> String {
    tracing::debug!("lowering call to {}", call.callee());

    let args: Vec<String> = call
        .arguments()
        .iter()
        .map(|arg| gen_expression(compiler, arg))
        .collect();

    if compiler.config.stitch_calls {
        format!("{}({})", call.callee(), args.join(","))
    } else {
        String::new()
    }
}

fn gen_if(compiler: &Compiler, if_expr: &IfExpr) -> String {
    tracing::debug!("lowering if");

    let (Some(cond), Some(then), Some(otherwise)) = (
        if_expr.condition(),
        if_expr.then_branch(),
        if_expr.else_branch(),
    ) else {
        return String::new();
    };

    let cond = gen_expression(compiler, cond);
    let then = gen_expression(compiler, then);
    let otherwise = gen_expression(compiler, otherwise);

    format!("if({}){{{}}}else{{{}}}", cond, then, otherwise)
}

fn gen_while(compiler: &Compiler, while_expr: &WhileExpr) -> String {
    tracing::debug!("lowering while");

    let (Some(cond), Some(body)) = (while_expr.condition(), while_expr.body()) else {
        return String::new();
    };

    let cond = gen_expression(compiler, cond);
    let body = gen_expression(compiler, body);

    format!("while({}){{{}}}", cond, body)
}

fn gen_prototype(proto: &PrototypeAst) -> String {
    tracing::debug!("lowering prototype {}({})", proto.name(), proto.params().join(" "));
    String::new()
}

fn gen_function(compiler: &Compiler, function: &FunctionAst) -> String {
    tracing::debug!("lowering function");

    if let Some(proto) = function.prototype() {
        gen_prototype(proto);
    }
    if let Some(body) = function.body() {
        gen_expression(compiler, body);
    }

    String::new()
}
