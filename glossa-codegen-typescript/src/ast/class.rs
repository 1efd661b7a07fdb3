//! TypeScript class builder.

use glossa_codegen::builder::{CodeFragment, Renderable};

/// A constructor parameter, optionally a parameter property (`private maps: T`).
#[derive(Debug, Clone)]
pub struct CtorParam {
    name: String,
    ty: String,
    modifier: Option<&'static str>,
}

impl CtorParam {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            modifier: None,
        }
    }

    /// Declare the parameter as a private class property.
    pub fn private(mut self) -> Self {
        self.modifier = Some("private");
        self
    }

    fn render(&self, declared: bool) -> String {
        match self.modifier {
            // Parameter properties are not allowed in ambient declarations
            Some(modifier) if !declared => format!("{} {}: {}", modifier, self.name, self.ty),
            _ => format!("{}: {}", self.name, self.ty),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MethodKind {
    Method,
    Getter,
    Setter,
}

/// A class method or accessor.
#[derive(Debug, Clone)]
pub struct Method {
    kind: MethodKind,
    name: String,
    params: String,
    returns: Option<String>,
    is_async: bool,
    body: Vec<CodeFragment>,
}

impl Method {
    fn with_kind(kind: MethodKind, name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            params: params.into(),
            returns: None,
            is_async: false,
            body: Vec::new(),
        }
    }

    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self::with_kind(MethodKind::Method, name, params)
    }

    pub fn getter(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self::with_kind(MethodKind::Getter, name, "").returns(returns)
    }

    pub fn setter(name: impl Into<String>, param: impl Into<String>) -> Self {
        Self::with_kind(MethodKind::Setter, name, param)
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn async_(mut self) -> Self {
        self.is_async = true;
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(CodeFragment::line(line));
        self
    }

    pub fn body(mut self, fragment: CodeFragment) -> Self {
        self.body.push(fragment);
        self
    }

    fn signature(&self, declared: bool) -> String {
        // `async` is not allowed in ambient declarations
        let prefix = match (self.is_async && !declared, self.kind) {
            (_, MethodKind::Getter) => "get ",
            (_, MethodKind::Setter) => "set ",
            (true, MethodKind::Method) => "async ",
            (false, MethodKind::Method) => "",
        };
        let returns = match &self.returns {
            Some(ty) => format!(": {}", ty),
            None => String::new(),
        };
        format!("{}{}({}){}", prefix, self.name, self.params, returns)
    }

    fn fragment(&self, declared: bool) -> CodeFragment {
        if declared {
            return CodeFragment::line(format!("{};", self.signature(true)));
        }
        CodeFragment::block(
            format!("{} {{", self.signature(false)),
            self.body.clone(),
            Some("}".to_string()),
        )
    }
}

/// Builder for TypeScript classes.
///
/// A declared class (`declare class`) renders member signatures only.
#[derive(Debug, Clone)]
pub struct Class {
    name: String,
    exported: bool,
    declared: bool,
    params: Vec<CtorParam>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            exported: false,
            declared: false,
            params: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn exported(mut self) -> Self {
        self.exported = true;
        self
    }

    pub fn declared(mut self) -> Self {
        self.declared = true;
        self
    }

    pub fn param(mut self, param: CtorParam) -> Self {
        self.params.push(param);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    fn constructor(&self) -> CodeFragment {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| p.render(self.declared))
            .collect();
        if self.declared {
            return CodeFragment::line(format!("constructor({});", params.join(", ")));
        }
        if params.is_empty() {
            return CodeFragment::line("constructor() {}");
        }
        CodeFragment::block(
            "constructor(",
            params
                .into_iter()
                .map(|p| CodeFragment::line(format!("{},", p)))
                .collect(),
            Some(") {}".to_string()),
        )
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let export = if self.exported { "export " } else { "" };
        let declare = if self.declared { "declare " } else { "" };

        let mut body = vec![self.constructor()];
        for method in &self.methods {
            if !self.declared {
                body.push(CodeFragment::blank());
            }
            body.push(method.fragment(self.declared));
        }

        vec![CodeFragment::block(
            format!("{}{}class {} {{", export, declare, self.name),
            body,
            Some("}".to_string()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use glossa_codegen::builder::CodeBuilder;

    use super::*;

    fn counter(declared: bool) -> Class {
        let class = Class::new("Counter")
            .param(CtorParam::new("count", "number").private())
            .method(Method::getter("value", "number").body_line("return this.count;"))
            .method(
                Method::new("reset", "")
                    .async_()
                    .returns("Promise<void>")
                    .body_line("this.count = 0;"),
            );
        if declared {
            class.exported().declared()
        } else {
            class
        }
    }

    fn render(class: &Class) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(class);
        builder.build()
    }

    #[test]
    fn test_class() {
        assert_eq!(
            render(&counter(false)),
            "class Counter {
  constructor(
    private count: number,
  ) {}

  get value(): number {
    return this.count;
  }

  async reset(): Promise<void> {
    this.count = 0;
  }
}
"
        );
    }

    #[test]
    fn test_declared_class() {
        assert_eq!(
            render(&counter(true)),
            "export declare class Counter {
  constructor(count: number);
  get value(): number;
  reset(): Promise<void>;
}
"
        );
    }

    #[test]
    fn test_setter() {
        let method = Method::setter("lang", "lang: Language").body_line("this._lang = lang;");
        assert_eq!(method.signature(false), "set lang(lang: Language)");
    }
}
