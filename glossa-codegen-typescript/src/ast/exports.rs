//! TypeScript export builder.

use glossa_codegen::builder::{CodeFragment, Renderable};

use super::Expr;

/// Builder for TypeScript export statements.
#[derive(Debug, Clone)]
pub struct Export {
    default: Option<Expr>,
    named: Vec<String>,
    type_only: bool,
}

impl Export {
    pub fn new() -> Self {
        Self {
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Export a binding as default.
    pub fn default(self, name: impl Into<String>) -> Self {
        self.default_expr(Expr::raw(name))
    }

    /// Export an expression as default (`export default { ... };`).
    pub fn default_expr(mut self, expr: impl Into<Expr>) -> Self {
        self.default = Some(expr.into());
        self
    }

    /// Export a named item.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only export (`export type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }
}

impl Default for Export {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderable for Export {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_kw = if self.type_only { "type " } else { "" };

        let mut fragments = Vec::new();
        if !self.named.is_empty() {
            fragments.push(CodeFragment::line(format!(
                "export {}{{ {} }};",
                type_kw,
                self.named.join(", ")
            )));
        }
        if let Some(expr) = &self.default {
            fragments.push(
                expr.fragment()
                    .with_prefix("export default ")
                    .with_suffix(";"),
            );
        }
        fragments
    }
}
