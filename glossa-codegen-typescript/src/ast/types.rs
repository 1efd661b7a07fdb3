//! TypeScript type literal, alias and union builders.

use glossa_codegen::builder::{CodeFragment, Renderable};
use glossa_core::property_key;

/// A type expression.
#[derive(Debug, Clone, PartialEq)]
pub enum TsType {
    /// A type written out verbatim, e.g. `string`.
    Raw(String),
    /// An object type literal.
    Literal(TypeLiteral),
}

impl TsType {
    pub fn raw(ty: impl Into<String>) -> Self {
        Self::Raw(ty.into())
    }

    /// Render as a single fragment (a line, or a block for non-empty literals).
    pub fn fragment(&self) -> CodeFragment {
        match self {
            TsType::Raw(ty) => CodeFragment::line(ty),
            TsType::Literal(literal) => literal.fragment(),
        }
    }

    /// Render on one line.
    pub fn inline(&self) -> String {
        match self {
            TsType::Raw(ty) => ty.clone(),
            TsType::Literal(literal) => literal.inline(),
        }
    }
}

impl From<TypeLiteral> for TsType {
    fn from(literal: TypeLiteral) -> Self {
        Self::Literal(literal)
    }
}

/// A member of an object type literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub key: String,
    pub ty: TsType,
}

/// Builder for object type literals (`{ ok: string; ... }`).
///
/// Keys that are not identifiers are quoted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeLiteral {
    members: Vec<Member>,
}

impl TypeLiteral {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn member(mut self, key: impl Into<String>, ty: impl Into<TsType>) -> Self {
        self.members.push(Member {
            key: key.into(),
            ty: ty.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Render on one line: `{ a: string | number; b: string | number }`.
    pub fn inline(&self) -> String {
        if self.members.is_empty() {
            return "{}".to_string();
        }
        let members: Vec<String> = self
            .members
            .iter()
            .map(|m| format!("{}: {}", property_key(&m.key), m.ty.inline()))
            .collect();
        format!("{{ {} }}", members.join("; "))
    }

    /// Render as one member per line.
    pub fn fragment(&self) -> CodeFragment {
        if self.members.is_empty() {
            return CodeFragment::line("{}");
        }
        let body = self
            .members
            .iter()
            .map(|m| {
                m.ty
                    .fragment()
                    .with_prefix(&format!("{}: ", property_key(&m.key)))
                    .with_suffix(";")
            })
            .collect();
        CodeFragment::block("{", body, Some("}".to_string()))
    }
}

impl From<&str> for TsType {
    fn from(ty: &str) -> Self {
        Self::raw(ty)
    }
}

impl From<String> for TsType {
    fn from(ty: String) -> Self {
        Self::Raw(ty)
    }
}

/// Builder for TypeScript type aliases.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    ty: TsType,
    exported: bool,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<TsType>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            exported: true,
        }
    }

    pub fn private(mut self) -> Self {
        self.exported = false;
        self
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        vec![
            self.ty
                .fragment()
                .with_prefix(&format!("{}type {} = ", export, self.name))
                .with_suffix(";"),
        ]
    }
}

/// Builder for TypeScript union types.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            variants: Vec::new(),
        }
    }

    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variants.push(variant.into());
        self
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        // An empty union is `never`
        let ty = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };
        vec![CodeFragment::line(format!(
            "export type {} = {};",
            self.name, ty
        ))]
    }
}
