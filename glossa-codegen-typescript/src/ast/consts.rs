//! TypeScript const declaration builder.

use glossa_codegen::builder::{CodeFragment, Renderable};

use super::Expr;

/// Builder for TypeScript const declarations.
#[derive(Debug, Clone)]
pub struct Const {
    name: String,
    value: Option<Expr>,
    ty: Option<String>,
    exported: bool,
}

impl Const {
    pub fn new(name: impl Into<String>, value: impl Into<Expr>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ty: None,
            exported: false,
        }
    }

    /// An ambient declaration without a value (`declare const x: T;`).
    pub fn declared(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            ty: Some(ty.into()),
            exported: false,
        }
    }

    /// Add a type annotation.
    pub fn ty(mut self, ty: impl Into<String>) -> Self {
        self.ty = Some(ty.into());
        self
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }
}

impl Renderable for Const {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let type_annotation = match &self.ty {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };

        let fragment = match &self.value {
            Some(value) => value.fragment().with_prefix(&format!(
                "{}const {}{} = ",
                export, self.name, type_annotation
            )),
            None => CodeFragment::line(format!(
                "{}declare const {}{}",
                export, self.name, type_annotation
            )),
        };
        vec![fragment.with_suffix(";")]
    }
}

#[cfg(test)]
mod tests {
    use glossa_codegen::builder::CodeBuilder;

    use super::*;
    use crate::ast::JsObject;

    fn build(c: &Const) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(c);
        builder.build()
    }

    #[test]
    fn test_simple_const() {
        assert_eq!(build(&Const::new("foo", Expr::raw("42"))), "const foo = 42;\n");
    }

    #[test]
    fn test_exported_const_with_type() {
        let c = Const::new("name", Expr::string("hello")).ty("string").exported();
        assert_eq!(build(&c), "export const name: string = \"hello\";\n");
    }

    #[test]
    fn test_const_with_object() {
        let c = Const::new("maps", JsObject::new().string("ok", "OK"));
        assert_eq!(build(&c), "const maps = {\n  ok: \"OK\",\n};\n");
    }

    #[test]
    fn test_declared_const() {
        let c = Const::declared("provider", "I18nProvider");
        assert_eq!(build(&c), "declare const provider: I18nProvider;\n");
    }
}
