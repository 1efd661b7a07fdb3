//! Unify phase - folds per-language trees into one canonical schema.
//!
//! The first language in input order fixes the key set. Every later
//! language is checked against it and never adds keys of its own, so
//! swapping the input order can change which side a missing key is
//! reported on.

use std::collections::HashSet;

use eyre::Result;
use glossa_ir::{NamedValue, RecordTypeDescriptor, TypeDescriptor};

use crate::{
    Error,
    pipeline::{CompilationContext, Diagnostics, MissingSide, PathStack, Phase},
};

/// Phase that produces the canonical schema from the built trees.
///
/// Must run after `BuildPhase`.
pub struct UnifyPhase;

impl Phase for UnifyPhase {
    fn name(&self) -> &'static str {
        "unify"
    }

    fn description(&self) -> &'static str {
        "Unify per-language trees into the canonical schema"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let schema = unify(&ctx.trees, &mut ctx.diagnostics)?;
        tracing::debug!(
            languages = ctx.trees.len(),
            diagnostics = ctx.diagnostics.len(),
            "unified schema"
        );
        ctx.schema = Some(schema);
        Ok(())
    }
}

/// Fold all trees into the canonical schema, recording every disagreement.
///
/// Always walks every language before returning, so `diagnostics` holds the
/// complete set of problems.
///
/// # Errors
///
/// [`Error::NoLanguages`] for an empty input, [`Error::DuplicateLanguage`]
/// when two trees share a name, [`Error::UnconstrainedSchema`]
/// if the accumulator is never fixed, and [`Error::PathContextMismatch`] on
/// an unbalanced walk.
pub fn unify(
    trees: &[NamedValue<RecordTypeDescriptor>],
    diagnostics: &mut Diagnostics,
) -> Result<RecordTypeDescriptor> {
    if trees.is_empty() {
        return Err(Error::NoLanguages.into());
    }
    let mut seen = HashSet::with_capacity(trees.len());
    for tree in trees {
        if !seen.insert(tree.name.as_str()) {
            return Err(Error::DuplicateLanguage(tree.name.clone()).into());
        }
    }

    let mut schema = RecordTypeDescriptor::missing();
    for tree in trees {
        let mut path = PathStack::new();
        merge_record(&mut schema, &tree.value, &tree.name, &mut path, diagnostics)?;
        path.finish()?;
        tracing::trace!(language = %tree.name, "merged language into schema");
    }

    if schema.is_missing() {
        return Err(Error::UnconstrainedSchema.into());
    }
    Ok(schema)
}

fn merge_record(
    schema: &mut RecordTypeDescriptor,
    incoming: &RecordTypeDescriptor,
    language: &str,
    path: &mut PathStack,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    // Every key the schema has must exist in the incoming tree, with the same kind
    for (key, expected) in schema.iter() {
        match incoming.get(key) {
            None => diagnostics.not_found_key(path.child(key), MissingSide::Incoming, language),
            Some(found) if found.kind() != expected.kind() => {
                diagnostics.mismatched_kind(path.child(key), expected.kind(), found.kind(), language)
            }
            Some(_) => {}
        }
    }

    // Incoming keys are adopted only while the schema is unconstrained
    let adopting = schema.is_missing();
    for (key, found) in incoming.iter() {
        match schema.get_mut(key) {
            None if adopting => schema.insert(key.clone(), found.clone()),
            None => diagnostics.not_found_key(path.child(key), MissingSide::Canonical, language),
            Some(expected) => merge_node(expected, found, key, language, path, diagnostics)?,
        }
    }

    if adopting {
        schema.clear_missing();
    }
    Ok(())
}

fn merge_node(
    expected: &mut TypeDescriptor,
    found: &TypeDescriptor,
    key: &str,
    language: &str,
    path: &mut PathStack,
    diagnostics: &mut Diagnostics,
) -> Result<()> {
    match (expected, found) {
        (TypeDescriptor::String(_), TypeDescriptor::String(_)) => {}
        (TypeDescriptor::Call(expected), TypeDescriptor::Call(found)) => {
            if expected.param_names() != found.param_names() {
                diagnostics.mismatched_arguments(path.child(key), expected, found, language);
            }
        }
        (TypeDescriptor::Record(expected), TypeDescriptor::Record(found)) => {
            path.scoped(key, |path| {
                merge_record(expected, found, language, path, diagnostics)
            })?;
        }
        (expected, found) => {
            diagnostics.mismatched_kind(path.child(key), expected.kind(), found.kind(), language);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use glossa_ir::{DescriptorKind, RawDocument};

    use super::*;
    use crate::pipeline::{DiagnosticKind, Payload, SchemaPath, phases::build_descriptor};

    fn tree(name: &str, document: RawDocument) -> NamedValue<RecordTypeDescriptor> {
        let tree = build_descriptor(&document, name, &mut Diagnostics::new()).unwrap();
        NamedValue::new(name, tree)
    }

    fn path(dotted: &str) -> SchemaPath {
        dotted.split('.').collect()
    }

    #[test]
    fn test_single_language_is_identity() {
        let en = tree(
            "en",
            RawDocument::new()
                .entry("ok", "OK")
                .entry("greet", "hi {{ name }}")
                .entry("dialog", RawDocument::new().entry("cancel", "Cancel")),
        );

        let mut diagnostics = Diagnostics::new();
        let schema = unify(std::slice::from_ref(&en), &mut diagnostics).unwrap();

        assert!(diagnostics.is_empty());
        assert!(!schema.is_missing());
        assert_eq!(schema, en.value);
    }

    #[test]
    fn test_first_language_wins() {
        let a = tree("A", RawDocument::new().entry("x", "x").entry("y", "y"));
        let b = tree("B", RawDocument::new().entry("x", "x"));

        let mut diagnostics = Diagnostics::new();
        let schema = unify(&[a.clone(), b.clone()], &mut diagnostics).unwrap();
        assert_eq!(schema.len(), 2);
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.path, path("y"));
        assert_eq!(
            diagnostic.payload,
            Payload::NotFoundKey {
                side: MissingSide::Incoming,
                languages: ["B".to_string()].into_iter().collect(),
            }
        );

        let mut diagnostics = Diagnostics::new();
        let schema = unify(&[b, a], &mut diagnostics).unwrap();
        assert_eq!(schema.len(), 1);
        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(diagnostic.path, path("y"));
        assert_eq!(
            diagnostic.payload,
            Payload::NotFoundKey {
                side: MissingSide::Canonical,
                languages: ["A".to_string()].into_iter().collect(),
            }
        );
    }

    #[test]
    fn test_mismatched_arguments_dedup_across_languages() {
        let en = tree("en", RawDocument::new().entry("greet", "hi {{ a }}"));
        let zh = tree("zh", RawDocument::new().entry("greet", "hi {{ b }}"));
        let sp = tree("sp", RawDocument::new().entry("greet", "hi {{ c }}"));

        let mut diagnostics = Diagnostics::new();
        unify(&[en, zh, sp], &mut diagnostics).unwrap();

        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics
            .get(DiagnosticKind::MismatchedArguments, &path("greet"))
            .unwrap();
        assert_eq!(diagnostic.languages(), vec!["zh", "sp"]);
    }

    #[test]
    fn test_argument_order_is_irrelevant() {
        let en = tree("en", RawDocument::new().entry("m", "{{ a }} then {{ b }}"));
        let zh = tree("zh", RawDocument::new().entry("m", "{{ b }}{{ a }}{{ b }}"));

        let mut diagnostics = Diagnostics::new();
        unify(&[en, zh], &mut diagnostics).unwrap();
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_kind_mismatch_reported_once() {
        let en = tree("en", RawDocument::new().entry("title", "Title"));
        let zh = tree(
            "zh",
            RawDocument::new().entry("title", RawDocument::new().entry("main", "标题")),
        );

        let mut diagnostics = Diagnostics::new();
        let schema = unify(&[en, zh], &mut diagnostics).unwrap();

        assert_eq!(diagnostics.len(), 1);
        let diagnostic = diagnostics.iter().next().unwrap();
        assert_eq!(
            diagnostic.payload,
            Payload::MismatchedKind {
                expected: DescriptorKind::String,
                found: [("zh".to_string(), DescriptorKind::Record)]
                    .into_iter()
                    .collect(),
            }
        );
        // The canonical side keeps the first language's view
        assert_eq!(schema.get("title").map(TypeDescriptor::kind), Some(DescriptorKind::String));
    }

    #[test]
    fn test_string_and_call_disagree() {
        let en = tree("en", RawDocument::new().entry("greet", "hi {{ name }}"));
        let zh = tree("zh", RawDocument::new().entry("greet", "你好"));

        let mut diagnostics = Diagnostics::new();
        unify(&[en, zh], &mut diagnostics).unwrap();
        assert!(
            diagnostics
                .get(DiagnosticKind::MismatchedKind, &path("greet"))
                .is_some()
        );
    }

    #[test]
    fn test_nested_paths() {
        let en = tree(
            "en",
            RawDocument::new().entry(
                "dialog",
                RawDocument::new().entry("ok", "OK").entry("cancel", "Cancel"),
            ),
        );
        let zh = tree(
            "zh",
            RawDocument::new().entry(
                "dialog",
                RawDocument::new().entry("ok", "好").entry("close", "关闭"),
            ),
        );

        let mut diagnostics = Diagnostics::new();
        unify(&[en, zh], &mut diagnostics).unwrap();

        assert_eq!(diagnostics.len(), 2);
        let cancel = diagnostics
            .get(DiagnosticKind::NotFoundKey, &path("dialog.cancel"))
            .unwrap();
        assert!(matches!(
            cancel.payload,
            Payload::NotFoundKey { side: MissingSide::Incoming, .. }
        ));
        let close = diagnostics
            .get(DiagnosticKind::NotFoundKey, &path("dialog.close"))
            .unwrap();
        assert!(matches!(
            close.payload,
            Payload::NotFoundKey { side: MissingSide::Canonical, .. }
        ));
    }

    #[test]
    fn test_missing_key_accumulates_languages() {
        let en = tree("en", RawDocument::new().entry("ok", "OK").entry("extra", "E"));
        let zh = tree("zh", RawDocument::new().entry("ok", "好"));
        let sp = tree("sp", RawDocument::new().entry("ok", "Vale"));

        let mut diagnostics = Diagnostics::new();
        unify(&[en, zh, sp], &mut diagnostics).unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics.iter().next().unwrap().languages(), vec!["zh", "sp"]);
    }

    #[test]
    fn test_zero_languages() {
        let err = unify(&[], &mut Diagnostics::new()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NoLanguages)));
    }

    #[test]
    fn test_duplicate_language_is_rejected() {
        let en = tree("en", RawDocument::new().entry("ok", "OK"));
        let zh = tree("zh", RawDocument::new().entry("ok", "好"));
        let again = tree("en", RawDocument::new().entry("ok", "Okay"));

        let mut diagnostics = Diagnostics::new();
        let err = unify(&[en, zh, again], &mut diagnostics).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::DuplicateLanguage(name)) if name == "en"
        ));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_empty_first_language_still_fixes_schema() {
        let en = tree("en", RawDocument::new());
        let zh = tree("zh", RawDocument::new().entry("ok", "好"));

        let mut diagnostics = Diagnostics::new();
        let schema = unify(&[en, zh], &mut diagnostics).unwrap();
        assert!(schema.is_empty());
        assert!(!schema.is_missing());
        assert_eq!(diagnostics.len(), 1);
    }
}
