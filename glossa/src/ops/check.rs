//! Check operation - build, unify and diagnose without generating.

use eyre::Result;
use glossa_codegen::{
    Error,
    schema::{DisplayStyle, SchemaTreeDisplay},
};
use glossa_ir::{NamedValue, RawDocument};

use crate::reports::{CheckReport, SchemaSummary};

/// Execute the check operation.
///
/// Structural disagreements between languages become an invalid report
/// rather than an error; only internal failures are returned as `Err`.
pub fn check(documents: Vec<NamedValue<RawDocument>>) -> Result<CheckReport> {
    let schema = match super::pipeline().compile(documents) {
        Ok(schema) => schema,
        Err(e) => {
            return match e.downcast::<Error>() {
                Ok(Error::Diagnostics { report, .. }) => {
                    Ok(CheckReport::Invalid { problems: report })
                }
                Ok(other) => Err(other.into()),
                Err(e) => Err(e),
            };
        }
    };

    let tree = SchemaTreeDisplay::new(schema.canonical())
        .style(DisplayStyle::Simple)
        .render()
        .lines()
        .map(|line| format!("  {}\n", line))
        .collect();

    Ok(CheckReport::Valid {
        summary: SchemaSummary::new(&schema),
        tree,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_valid() {
        let report = check(vec![
            NamedValue::new(
                "en",
                RawDocument::new()
                    .entry("ok", "OK")
                    .entry("dialog", RawDocument::new().entry("greet", "hi {{ name }}")),
            ),
            NamedValue::new(
                "zh",
                RawDocument::new()
                    .entry("ok", "好")
                    .entry("dialog", RawDocument::new().entry("greet", "{{ name }}你好")),
            ),
        ])
        .unwrap();

        let CheckReport::Valid { summary, tree } = report else {
            panic!("expected a valid report");
        };
        assert_eq!(summary.message_count, 2);
        assert_eq!(summary.call_count, 1);
        assert_eq!(tree, "  ok\n  dialog\n    greet(name)\n");
    }

    #[test]
    fn test_check_reports_every_problem() {
        let report = check(vec![
            NamedValue::new(
                "en",
                RawDocument::new().entry("ok", "OK").entry("cancel", "Cancel"),
            ),
            NamedValue::new("zh", RawDocument::new().entry("ok", "{{ n }}")),
        ])
        .unwrap();

        let CheckReport::Invalid { problems } = report else {
            panic!("expected an invalid report");
        };
        assert!(problems.starts_with("found 2 structural problems across 2 languages:"));
        assert!(problems.contains("`cancel` is missing in some languages"));
        assert!(problems.contains("`ok` is not the same kind of message"));
    }

    #[test]
    fn test_check_empty_input_is_an_error() {
        let err = check(Vec::new()).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NoLanguages)));
    }
}
