//! Placeholder extraction for message strings.
//!
//! A placeholder is written `{{ name }}`: double braces, exactly one space
//! on each side, and a name of ASCII letters and digits. Anything else,
//! including `{{name}}` or `{{  name  }}`, is ordinary text.

use std::sync::LazyLock;

use glossa_ir::ArgSegment;
use regex::Regex;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{ ([a-zA-Z0-9]+) \}\}").expect("placeholder pattern is a valid regex")
});

/// Split a message into literal and parameter segments.
///
/// Returns `None` when the message has no placeholder, meaning it is a plain
/// string. Empty literal runs between adjacent placeholders are omitted.
///
/// ```
/// use glossa_codegen::extract_segments;
/// use glossa_ir::ArgSegment;
///
/// assert_eq!(
///     extract_segments("hello {{ name }}!"),
///     Some(vec![
///         ArgSegment::literal("hello "),
///         ArgSegment::param("name"),
///         ArgSegment::literal("!"),
///     ])
/// );
/// assert_eq!(extract_segments("no placeholders"), None);
/// ```
pub fn extract_segments(raw: &str) -> Option<Vec<ArgSegment>> {
    let mut segments = Vec::new();
    let mut cursor = 0;

    for captures in PLACEHOLDER.captures_iter(raw) {
        let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
            continue;
        };
        if whole.start() > cursor {
            segments.push(ArgSegment::literal(&raw[cursor..whole.start()]));
        }
        segments.push(ArgSegment::param(name.as_str()));
        cursor = whole.end();
    }

    if segments.is_empty() {
        return None;
    }
    if cursor < raw.len() {
        segments.push(ArgSegment::literal(&raw[cursor..]));
    }
    Some(segments)
}
