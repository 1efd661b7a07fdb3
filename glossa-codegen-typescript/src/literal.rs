//! Maps one language's descriptor tree onto a JavaScript object literal.

use eyre::{Result, eyre};
use glossa_core::{member_access, quote_string};
use glossa_ir::{ArgSegment, CallTypeDescriptor, RecordTypeDescriptor, TypeDescriptor};

use crate::{
    ast::{ArrowFn, JsObject},
    schema_type::options_type,
};

/// The variable holding placeholder values inside generated functions.
const OPTIONS: &str = "options";

/// Render a language's messages in the key order of `canonical`.
///
/// The schema is diagnostic-free, so every canonical key is present in
/// `language` with the same kind; a miss is reported as an error rather
/// than emitting an object that would not satisfy the root type.
pub fn record_literal(
    canonical: &RecordTypeDescriptor,
    language: &RecordTypeDescriptor,
) -> Result<JsObject> {
    let mut path = Vec::new();
    record_at(canonical, language, &mut path)
}

fn record_at<'a>(
    canonical: &'a RecordTypeDescriptor,
    language: &RecordTypeDescriptor,
    path: &mut Vec<&'a str>,
) -> Result<JsObject> {
    let mut object = JsObject::new();
    for (key, expected) in canonical.iter() {
        path.push(key);
        let node = language
            .get(key)
            .ok_or_else(|| eyre!("no message at `{}`", path.join(".")))?;
        object = match (expected, node) {
            (TypeDescriptor::Record(expected), TypeDescriptor::Record(record)) => {
                object.object(key, record_at(expected, record, path)?)
            }
            (TypeDescriptor::String(_), TypeDescriptor::String(string)) => {
                object.string(key, &string.value)
            }
            (TypeDescriptor::Call(_), TypeDescriptor::Call(call)) => {
                object.arrow_fn(key, call_literal(call))
            }
            (expected, node) => {
                return Err(eyre!(
                    "message at `{}` is a {}, expected a {}",
                    path.join("."),
                    node.kind(),
                    expected.kind()
                ));
            }
        };
        path.pop();
    }
    Ok(object)
}

/// `(options: { name: string | number }) => ["hi ", options.name].join("")`
pub fn call_literal(call: &CallTypeDescriptor) -> ArrowFn {
    let parts: Vec<String> = call
        .body
        .iter()
        .map(|segment| match segment {
            ArgSegment::Literal { value } => quote_string(value),
            ArgSegment::Param { name } => member_access(OPTIONS, name),
        })
        .collect();
    ArrowFn::new(
        format!("{}: {}", OPTIONS, options_type(call).inline()),
        format!("[{}].join(\"\")", parts.join(", ")),
    )
}
