//! Schema tree display formatting, used by `glossa inspect`.
//!
//! # Example
//!
//! ```
//! use glossa_codegen::schema::{DisplayStyle, SchemaTreeDisplay};
//! use glossa_ir::{ArgSegment, RecordTypeDescriptor, TypeDescriptor};
//!
//! let mut root = RecordTypeDescriptor::new();
//! root.insert("ok", TypeDescriptor::string("OK"));
//! root.insert(
//!     "greet",
//!     TypeDescriptor::call(vec![ArgSegment::literal("hi "), ArgSegment::param("name")]),
//! );
//!
//! let text = SchemaTreeDisplay::new(&root).style(DisplayStyle::TreeBox).render();
//! assert_eq!(text, "├─ ok\n└─ greet(name)\n");
//! ```

use std::fmt;

use glossa_ir::{RecordTypeDescriptor, TypeDescriptor};

/// Display style for schema trees.
#[derive(Debug, Clone, Copy, Default)]
pub enum DisplayStyle {
    /// Indented keys, calls with their parameters.
    ///
    /// ```text
    /// ok
    /// dialog
    ///   greet(name)
    /// ```
    #[default]
    Simple,

    /// Tree structure with box-drawing characters.
    ///
    /// ```text
    /// ├─ ok
    /// └─ dialog
    ///    └─ greet(name)
    /// ```
    TreeBox,
}

/// Declarative schema tree display formatter.
#[derive(Debug, Clone)]
pub struct SchemaTreeDisplay<'a> {
    root: &'a RecordTypeDescriptor,
    style: DisplayStyle,
    indent_str: &'a str,
}

impl<'a> SchemaTreeDisplay<'a> {
    pub fn new(root: &'a RecordTypeDescriptor) -> Self {
        Self {
            root,
            style: DisplayStyle::default(),
            indent_str: "  ",
        }
    }

    /// Set the display style.
    pub fn style(mut self, style: DisplayStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the indentation string for [`DisplayStyle::Simple`] (default: two spaces).
    pub fn indent(mut self, indent: &'a str) -> Self {
        self.indent_str = indent;
        self
    }

    /// Render the schema tree to a string.
    pub fn render(&self) -> String {
        let mut output = String::new();
        match self.style {
            DisplayStyle::Simple => self.render_simple(&mut output, self.root, 0),
            DisplayStyle::TreeBox => self.render_tree_box(&mut output, self.root, ""),
        }
        output
    }

    fn render_simple(&self, output: &mut String, record: &RecordTypeDescriptor, depth: usize) {
        for (key, node) in record.iter() {
            output.push_str(&self.indent_str.repeat(depth));
            output.push_str(&label(key, node));
            output.push('\n');
            if let TypeDescriptor::Record(nested) = node {
                self.render_simple(output, nested, depth + 1);
            }
        }
    }

    fn render_tree_box(&self, output: &mut String, record: &RecordTypeDescriptor, prefix: &str) {
        let count = record.len();
        for (i, (key, node)) in record.iter().enumerate() {
            let is_last = i == count - 1;
            let connector = if is_last { "└─" } else { "├─" };
            output.push_str(&format!("{}{} {}\n", prefix, connector, label(key, node)));

            if let TypeDescriptor::Record(nested) = node {
                let child_prefix = if is_last {
                    format!("{}   ", prefix)
                } else {
                    format!("{}│  ", prefix)
                };
                self.render_tree_box(output, nested, &child_prefix);
            }
        }
    }
}

fn label(key: &str, node: &TypeDescriptor) -> String {
    match node {
        TypeDescriptor::Call(call) => {
            let params: Vec<&str> = call.param_names().into_iter().collect();
            format!("{}({})", key, params.join(", "))
        }
        TypeDescriptor::String(_) | TypeDescriptor::Record(_) => key.to_string(),
    }
}

impl fmt::Display for SchemaTreeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
