//! Build phase - classifies raw documents into descriptor trees.

use eyre::Result;
use glossa_ir::{NamedValue, RawDocument, RawValue, RecordTypeDescriptor, TypeDescriptor};
use indexmap::IndexMap;

use crate::{
    extract_segments,
    pipeline::{CompilationContext, Diagnostics, PathStack, Phase},
};

/// Phase that turns every input document into a [`RecordTypeDescriptor`].
pub struct BuildPhase;

impl Phase for BuildPhase {
    fn name(&self) -> &'static str {
        "build"
    }

    fn description(&self) -> &'static str {
        "Classify locale documents into type descriptors"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut trees = Vec::with_capacity(ctx.documents.len());
        for document in &ctx.documents {
            let tree = build_descriptor(&document.value, &document.name, &mut ctx.diagnostics)?;
            tracing::debug!(
                language = %document.name,
                messages = tree.leaf_count(),
                "built descriptor tree"
            );
            trees.push(NamedValue::new(document.name.clone(), tree));
        }
        ctx.trees = trees;
        Ok(())
    }
}

/// Classify one language's document.
///
/// Strings (and numbers, via their textual form) become `String` or `Call`
/// descriptors depending on whether they contain placeholders; mappings
/// become nested records. Any other value is recorded as an
/// `UnexpectedValueType` diagnostic and left out of the tree.
///
/// # Errors
///
/// Fails only when the path context ends up out of balance.
pub fn build_descriptor(
    document: &RawDocument,
    language: &str,
    diagnostics: &mut Diagnostics,
) -> Result<RecordTypeDescriptor> {
    let mut path = PathStack::new();
    let mut root = RecordTypeDescriptor::new();
    for (key, value) in document.iter() {
        build_entry(&mut root, key, value, language, &mut path, diagnostics)?;
    }
    path.finish()?;
    Ok(root)
}

fn build_record(
    entries: &IndexMap<String, RawValue>,
    language: &str,
    path: &mut PathStack,
    diagnostics: &mut Diagnostics,
) -> Result<RecordTypeDescriptor> {
    let mut record = RecordTypeDescriptor::new();
    for (key, value) in entries {
        build_entry(&mut record, key, value, language, path, diagnostics)?;
    }
    Ok(record)
}

fn build_entry(
    record: &mut RecordTypeDescriptor,
    key: &str,
    value: &RawValue,
    language: &str,
    path: &mut PathStack,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    match value {
        RawValue::String(text) => record.insert(key, classify(text)),
        RawValue::Number(number) => record.insert(key, classify(&number.to_string())),
        RawValue::Mapping(entries) => {
            let nested = path.scoped(key, |path| {
                build_record(entries, language, path, diagnostics)
            })?;
            record.insert(key, TypeDescriptor::record(nested));
        }
        RawValue::Bool(_) | RawValue::Sequence(_) | RawValue::Null => {
            diagnostics.unexpected_value_type(path.child(key), language, value);
        }
    }
    Ok(())
}

fn classify(text: &str) -> TypeDescriptor {
    match extract_segments(text) {
        Some(body) => TypeDescriptor::call(body),
        None => TypeDescriptor::string(text),
    }
}
