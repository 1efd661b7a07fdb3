//! Rendering of collected diagnostics into one human-readable report.

use std::fmt::Write;

use glossa_ir::{NamedValue, RecordTypeDescriptor, TypeDescriptor};
use indexmap::IndexMap;

use crate::pipeline::{Diagnostic, DiagnosticKind, Diagnostics, MissingSide, Payload};

/// Render a numbered report, grouped by kind and then by path.
///
/// `trees` are the per-language trees the diagnostics were collected from,
/// in input order. For kind and argument mismatches each language is looked
/// up again to show which variant it holds; languages where the path does
/// not exist are left out of those groups.
pub fn render(diagnostics: &Diagnostics, trees: &[NamedValue<RecordTypeDescriptor>]) -> String {
    let mut out = String::new();
    let count = diagnostics.len();
    let _ = writeln!(
        out,
        "found {} structural problem{} across {} language{}:",
        count,
        plural(count),
        trees.len(),
        plural(trees.len())
    );

    let mut number = 0;
    for kind in DiagnosticKind::ALL {
        for diagnostic in diagnostics.of_kind(kind) {
            number += 1;
            out.push('\n');
            let _ = writeln!(out, "{:>3}. [{}] {}", number, kind, headline(diagnostic, trees));
            for line in details(diagnostic, trees) {
                let _ = writeln!(out, "       {}", line);
            }
        }
    }
    out
}

fn plural(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

fn reference(trees: &[NamedValue<RecordTypeDescriptor>]) -> &str {
    trees.first().map(|t| t.name.as_str()).unwrap_or_default()
}

fn headline(diagnostic: &Diagnostic, trees: &[NamedValue<RecordTypeDescriptor>]) -> String {
    let path = &diagnostic.path;
    match &diagnostic.payload {
        Payload::UnexpectedValueType { .. } => {
            format!("`{}` must be a string, a number or a mapping", path)
        }
        Payload::NotFoundKey {
            side: MissingSide::Incoming,
            ..
        } => format!("`{}` is missing in some languages", path),
        Payload::NotFoundKey {
            side: MissingSide::Canonical,
            ..
        } => format!(
            "`{}` is not defined by the reference language `{}`",
            path,
            reference(trees)
        ),
        Payload::MismatchedKind { .. } => {
            format!("`{}` is not the same kind of message in every language", path)
        }
        Payload::MismatchedArguments { .. } => {
            format!("`{}` takes different placeholders across languages", path)
        }
    }
}

fn details(diagnostic: &Diagnostic, trees: &[NamedValue<RecordTypeDescriptor>]) -> Vec<String> {
    let segments = diagnostic.path.segments();
    match &diagnostic.payload {
        Payload::UnexpectedValueType { found } => found
            .iter()
            .map(|(language, type_name)| format!("{}: found {}", language, type_name))
            .collect(),
        Payload::NotFoundKey { side, languages } => {
            let listed = join(languages.iter().map(String::as_str));
            let present = join(
                trees
                    .iter()
                    .filter(|tree| tree.value.lookup(segments).is_some())
                    .map(|tree| tree.name.as_str()),
            );
            match side {
                MissingSide::Incoming => vec![
                    format!("missing in: {}", listed),
                    format!("present in: {}", present),
                ],
                MissingSide::Canonical => vec![format!("provided by: {}", listed)],
            }
        }
        Payload::MismatchedKind { .. } => group(trees, |tree| {
            tree.lookup(segments)
                .map(|node| node.kind().as_str().to_string())
        }),
        Payload::MismatchedArguments { .. } => group(trees, |tree| match tree.lookup(segments) {
            Some(TypeDescriptor::Call(call)) => {
                let params: Vec<&str> = call.param_names().into_iter().collect();
                Some(format!("{{ {} }}", params.join(", ")))
            }
            _ => None,
        }),
    }
}

/// Group languages by the variant `variant_of` derives from their tree.
fn group(
    trees: &[NamedValue<RecordTypeDescriptor>],
    variant_of: impl Fn(&RecordTypeDescriptor) -> Option<String>,
) -> Vec<String> {
    let mut groups: IndexMap<String, Vec<&str>> = IndexMap::new();
    for tree in trees {
        if let Some(variant) = variant_of(&tree.value) {
            groups.entry(variant).or_default().push(&tree.name);
        }
    }
    groups
        .into_iter()
        .map(|(variant, languages)| format!("{}: {}", variant, languages.join(", ")))
        .collect()
}

fn join<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}
