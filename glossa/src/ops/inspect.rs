//! Inspect operation - render the canonical schema.

use eyre::{Context, Result};
use glossa_codegen::schema::{DisplayStyle, SchemaTreeDisplay};
use glossa_ir::{NamedValue, RawDocument};

/// Unify the documents and render the canonical schema as a box-drawn tree,
/// or as pretty-printed JSON with `json`.
pub fn inspect(documents: Vec<NamedValue<RawDocument>>, json: bool) -> Result<String> {
    let schema = super::pipeline().compile(documents)?;

    if json {
        serde_json::to_string_pretty(&schema.canonical().value)
            .wrap_err("failed to serialize the schema")
    } else {
        Ok(SchemaTreeDisplay::new(schema.canonical())
            .style(DisplayStyle::TreeBox)
            .render())
    }
}
