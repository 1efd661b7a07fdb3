//! Renderable trait and CodeFragment for decoupled code generation.
//!
//! AST nodes of a target language produce fragments; the [`CodeBuilder`]
//! turns fragments into indented text.
//!
//! [`CodeBuilder`]: super::CodeBuilder

/// Represents a fragment of generated code.
#[derive(Debug, Clone, PartialEq)]
pub enum CodeFragment {
    /// A single line of code (will have newline appended).
    Line(String),
    /// A blank line.
    Blank,
    /// A block with header, body fragments, and optional closing line.
    Block {
        header: String,
        body: Vec<CodeFragment>,
        close: Option<String>,
    },
}

impl CodeFragment {
    /// Create a line fragment.
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    /// Create a blank line fragment.
    pub fn blank() -> Self {
        Self::Blank
    }

    /// Create a block fragment.
    pub fn block(
        header: impl Into<String>,
        body: Vec<CodeFragment>,
        close: Option<String>,
    ) -> Self {
        Self::Block {
            header: header.into(),
            body,
            close,
        }
    }

    /// Prepend `prefix` to the first line this fragment renders.
    ///
    /// Used to attach a multi-line expression to its declaration, e.g.
    /// `const provider = ` before a `new ...(` block.
    pub fn with_prefix(self, prefix: &str) -> Self {
        match self {
            Self::Line(s) => Self::Line(format!("{}{}", prefix, s)),
            Self::Block {
                header,
                body,
                close,
            } => Self::Block {
                header: format!("{}{}", prefix, header),
                body,
                close,
            },
            Self::Blank => Self::Line(prefix.to_string()),
        }
    }

    /// Append `suffix` to the last line this fragment renders.
    ///
    /// Used for trailing separators such as `,` and `;` after multi-line
    /// values. Fragments that render no line are left untouched.
    pub fn with_suffix(self, suffix: &str) -> Self {
        match self {
            Self::Line(s) => Self::Line(format!("{}{}", s, suffix)),
            Self::Block {
                header,
                body,
                close: Some(close),
            } => Self::Block {
                header,
                body,
                close: Some(format!("{}{}", close, suffix)),
            },
            Self::Block {
                header,
                body,
                close: None,
            } => Self::Block {
                header,
                body: append_to_last(body, suffix),
                close: None,
            },
            Self::Blank => Self::Blank,
        }
    }
}

fn append_to_last(mut fragments: Vec<CodeFragment>, suffix: &str) -> Vec<CodeFragment> {
    if let Some(last) = fragments.pop() {
        fragments.push(last.with_suffix(suffix));
    }
    fragments
}

/// Trait for types that can be rendered to code fragments.
pub trait Renderable {
    /// Convert this node to a sequence of code fragments.
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (*self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.as_ref().to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_fragment_constructors() {
        assert_eq!(
            CodeFragment::line("test"),
            CodeFragment::Line("test".to_string())
        );
        assert_eq!(CodeFragment::blank(), CodeFragment::Blank);
    }

    #[test]
    fn test_with_suffix_on_block() {
        let block = CodeFragment::block(
            "ok: {",
            vec![CodeFragment::line("a: string")],
            Some("}".to_string()),
        )
        .with_suffix(";");
        assert_eq!(
            block,
            CodeFragment::block(
                "ok: {",
                vec![CodeFragment::line("a: string")],
                Some("};".to_string()),
            )
        );
    }

    #[test]
    fn test_with_prefix_on_block() {
        let block = CodeFragment::block("{", vec![], Some("}".to_string()))
            .with_prefix("export default ");
        assert_eq!(
            block,
            CodeFragment::block("export default {", vec![], Some("}".to_string()))
        );
    }

    #[test]
    fn test_with_suffix_on_open_block() {
        let block = CodeFragment::block(
            "if (ok) {",
            vec![CodeFragment::line("a"), CodeFragment::line("b")],
            None,
        )
        .with_suffix(",");
        assert_eq!(
            block,
            CodeFragment::block(
                "if (ok) {",
                vec![CodeFragment::line("a"), CodeFragment::line("b,")],
                None,
            )
        );
    }
}
