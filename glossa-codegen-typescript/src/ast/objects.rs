//! TypeScript/JavaScript expression and object literal builders.

use glossa_codegen::builder::{CodeFragment, Renderable};
use glossa_core::{property_key, quote_string};

/// A JavaScript expression.
///
/// Every expression renders as exactly one fragment, so declarations can
/// attach `const x = ` or a trailing `,` to it regardless of its height.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A raw expression (will not be quoted).
    Raw(String),
    /// A literal string value (will be quoted).
    String(String),
    /// An object literal.
    Object(JsObject),
    /// An arrow function.
    ArrowFn(ArrowFn),
    /// A `new` expression.
    New(New),
    /// A type assertion, `<expr> as <type>`.
    As(Box<Expr>, String),
}

impl Expr {
    pub fn raw(expr: impl Into<String>) -> Self {
        Self::Raw(expr.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Wrap in a type assertion.
    pub fn as_type(self, ty: impl Into<String>) -> Self {
        Self::As(Box::new(self), ty.into())
    }

    pub fn fragment(&self) -> CodeFragment {
        match self {
            Expr::Raw(expr) => CodeFragment::line(expr),
            Expr::String(value) => CodeFragment::line(quote_string(value)),
            Expr::Object(object) => object.fragment(),
            Expr::ArrowFn(func) => func.fragment(),
            Expr::New(new) => new.fragment(),
            Expr::As(expr, ty) => expr.fragment().with_suffix(&format!(" as {}", ty)),
        }
    }
}

impl From<JsObject> for Expr {
    fn from(object: JsObject) -> Self {
        Self::Object(object)
    }
}

impl From<ArrowFn> for Expr {
    fn from(func: ArrowFn) -> Self {
        Self::ArrowFn(func)
    }
}

impl From<New> for Expr {
    fn from(new: New) -> Self {
        Self::New(new)
    }
}

/// A property in a JavaScript object literal.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub key: String,
    pub value: Expr,
}

impl Property {
    pub fn new(key: impl Into<String>, value: impl Into<Expr>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    fn fragment(&self) -> CodeFragment {
        self.value
            .fragment()
            .with_prefix(&format!("{}: ", property_key(&self.key)))
            .with_suffix(",")
    }
}

/// An arrow function with an expression body.
#[derive(Debug, Clone, PartialEq)]
pub struct ArrowFn {
    pub params: String,
    pub is_async: bool,
    pub body: String,
}

impl ArrowFn {
    pub fn new(params: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            is_async: false,
            body: body.into(),
        }
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    fn fragment(&self) -> CodeFragment {
        let async_kw = if self.is_async { "async " } else { "" };
        CodeFragment::line(format!("{}({}) => {}", async_kw, self.params, self.body))
    }
}

/// A `new Class(args)` expression with one argument per line.
#[derive(Debug, Clone, PartialEq)]
pub struct New {
    class: String,
    args: Vec<Expr>,
}

impl New {
    pub fn new(class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Expr>) -> Self {
        self.args.push(arg.into());
        self
    }

    fn fragment(&self) -> CodeFragment {
        if self.args.is_empty() {
            return CodeFragment::line(format!("new {}()", self.class));
        }
        let args = self
            .args
            .iter()
            .map(|arg| arg.fragment().with_suffix(","))
            .collect();
        CodeFragment::block(format!("new {}(", self.class), args, Some(")".to_string()))
    }
}

/// Builder for JavaScript/TypeScript object literals.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsObject {
    properties: Vec<Property>,
}

impl JsObject {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a property with a string value (will be quoted).
    pub fn string(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::new(key, Expr::string(value)));
        self
    }

    /// Add a property with a raw expression value (will not be quoted).
    pub fn raw(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.push(Property::new(key, Expr::raw(value)));
        self
    }

    /// Add a property with a nested object value.
    pub fn object(mut self, key: impl Into<String>, value: JsObject) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Add an arrow function property.
    pub fn arrow_fn(mut self, key: impl Into<String>, value: ArrowFn) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Add a property with any expression value.
    pub fn expr(mut self, key: impl Into<String>, value: impl Into<Expr>) -> Self {
        self.properties.push(Property::new(key, value));
        self
    }

    /// Check if the object is empty.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn fragment(&self) -> CodeFragment {
        if self.properties.is_empty() {
            return CodeFragment::line("{}");
        }
        CodeFragment::block(
            "{",
            self.properties.iter().map(Property::fragment).collect(),
            Some("}".to_string()),
        )
    }
}

impl Renderable for JsObject {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![self.fragment()]
    }
}
