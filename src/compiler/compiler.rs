use crate::{ast::ast::Expr, Config};

use super::expr::gen_expression;

/// Lowers trees to text.
///
/// Holds nothing but configuration; lowering the same tree twice yields the
/// same string.
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    pub config: Config,
}

impl Compiler {
    pub fn new(config: Config) -> Self {
        Compiler { config }
    }

    /// Renders one tree rooted at `expr`.
    pub fn lower(&self, expr: &Expr) -> String {
        gen_expression(self, expr)
    }
}

/// Lowers each top-level tree, one string per root, in order.
pub fn compile(items: &[Expr], config: Config) -> Vec<String> {
    let compiler = Compiler::new(config);

    items.iter().map(|item| compiler.lower(item)).collect()
}
