//! TypeScript import builder.

use glossa_codegen::builder::{CodeFragment, Renderable};
use glossa_core::quote_string;

/// Builder for TypeScript import statements.
#[derive(Debug, Clone)]
pub struct Import {
    from: String,
    default: Option<String>,
    named: Vec<String>,
    type_only: bool,
}

impl Import {
    pub fn new(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            default: None,
            named: Vec::new(),
            type_only: false,
        }
    }

    /// Import a default export.
    pub fn default(mut self, name: impl Into<String>) -> Self {
        self.default = Some(name.into());
        self
    }

    /// Import a named export.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.named.push(name.into());
        self
    }

    /// Make this a type-only import (`import type { ... }`).
    pub fn type_only(mut self) -> Self {
        self.type_only = true;
        self
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let type_kw = if self.type_only { "type " } else { "" };
        let from = quote_string(&self.from);

        let import_str = match (&self.default, self.named.is_empty()) {
            (Some(def), true) => format!("import {}{} from {};", type_kw, def, from),
            (Some(def), false) => format!(
                "import {}{}, {{ {} }} from {};",
                type_kw,
                def,
                self.named.join(", "),
                from
            ),
            (None, false) => format!(
                "import {}{{ {} }} from {};",
                type_kw,
                self.named.join(", "),
                from
            ),
            (None, true) => format!("import {};", from),
        };

        vec![CodeFragment::line(import_str)]
    }
}
