//! Code builder utility for generating properly indented code.

use super::{CodeFragment, Indent, Renderable};

/// Turns [`CodeFragment`]s into text, tracking the indentation level.
///
/// # Example
///
/// ```
/// use glossa_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "export default {",
///     vec![CodeFragment::line("ok: \"OK\",")],
///     Some("};".to_string()),
/// ));
///
/// assert_eq!(builder.build(), "export default {\n  ok: \"OK\",\n};\n");
/// ```
#[derive(Debug, Clone)]
pub struct CodeBuilder {
    indent_level: usize,
    indent: Indent,
    buffer: String,
}

impl CodeBuilder {
    /// Create a new CodeBuilder with the specified indentation.
    pub fn new(indent: Indent) -> Self {
        Self {
            indent_level: 0,
            indent,
            buffer: String::new(),
        }
    }

    /// Create a new CodeBuilder with 2-space indentation.
    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Add a line of code with current indentation.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line.
    pub fn push_blank(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn push_indent(&mut self) -> &mut Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn push_dedent(&mut self) -> &mut Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Emit a Renderable node.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    /// Apply a single code fragment.
    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(s) => {
                self.push_line(&s);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block {
                header,
                body,
                close,
            } => {
                self.push_line(&header);
                self.push_indent();
                for f in body {
                    self.apply_fragment(f);
                }
                self.push_dedent();
                if let Some(c) = close {
                    self.push_line(&c);
                }
            }
        }
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        for _ in 0..self.indent_level {
            self.buffer.push_str(self.indent.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(indent: Indent, fragments: Vec<CodeFragment>) -> String {
        let mut builder = CodeBuilder::new(indent);
        for fragment in fragments {
            builder.apply_fragment(fragment);
        }
        builder.build()
    }

    fn type_block() -> CodeFragment {
        CodeFragment::block(
            "export type RootType = {",
            vec![CodeFragment::line("ok: string;")],
            Some("};".to_string()),
        )
    }

    #[test]
    fn test_block() {
        assert_eq!(
            render(Indent::TYPESCRIPT, vec![type_block()]),
            "export type RootType = {\n  ok: string;\n};\n"
        );
    }

    #[test]
    fn test_custom_indent() {
        assert_eq!(
            render(Indent::Spaces(4), vec![type_block()]),
            "export type RootType = {\n    ok: string;\n};\n"
        );
        assert_eq!(
            render(Indent::Tab, vec![type_block()]),
            "export type RootType = {\n\tok: string;\n};\n"
        );
    }

    #[test]
    fn test_blank_line() {
        let code = render(
            Indent::TYPESCRIPT,
            vec![
                CodeFragment::line("import type { RootType } from \"./en\";"),
                CodeFragment::blank(),
                CodeFragment::line("export default {};"),
            ],
        );
        assert_eq!(
            code,
            "import type { RootType } from \"./en\";\n\nexport default {};\n"
        );
    }

    #[test]
    fn test_nested_blocks() {
        let code = render(
            Indent::TYPESCRIPT,
            vec![CodeFragment::block(
                "{",
                vec![
                    CodeFragment::line("en: {},"),
                    CodeFragment::block(
                        "zh: {",
                        vec![CodeFragment::line("ok: \"好\",")],
                        Some("},".to_string()),
                    ),
                ],
                None,
            )],
        );
        assert_eq!(code, "{\n  en: {},\n  zh: {\n    ok: \"好\",\n  },\n");
    }

    #[test]
    fn test_mutable_api() {
        let mut builder = CodeBuilder::typescript();
        builder
            .push_line("get lang() {")
            .push_indent()
            .push_line("return this._lang;")
            .push_dedent()
            .push_line("}");
        assert_eq!(builder.build(), "get lang() {\n  return this._lang;\n}\n");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut builder = CodeBuilder::typescript();
        builder.push_dedent().push_line("x");
        assert_eq!(builder.build(), "x\n");
    }

    #[test]
    fn test_emit_block_fragment() {
        struct BlockNode;
        impl Renderable for BlockNode {
            fn to_fragments(&self) -> Vec<CodeFragment> {
                vec![CodeFragment::Block {
                    header: "setLanguage(lang: Language) {".to_string(),
                    body: vec![CodeFragment::line("this._lang = lang;")],
                    close: Some("}".to_string()),
                }]
            }
        }

        let mut builder = CodeBuilder::typescript();
        builder.emit(&BlockNode);
        assert_eq!(
            builder.build(),
            "setLanguage(lang: Language) {\n  this._lang = lang;\n}\n"
        );
    }
}
