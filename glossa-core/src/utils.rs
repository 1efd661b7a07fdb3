//! Shared utility functions for emitting JavaScript-family source.

use std::borrow::Cow;

/// Words that cannot be used as declaration names in emitted TypeScript.
///
/// Property names are exempt (`{ class: "..." }` is valid), so this only
/// applies to configured type, class and variable names.
pub const RESERVED_WORDS: &[&str] = &[
    // JavaScript reserved words
    "break",
    "case",
    "catch",
    "class",
    "const",
    "continue",
    "debugger",
    "default",
    "delete",
    "do",
    "else",
    "enum",
    "export",
    "extends",
    "false",
    "finally",
    "for",
    "function",
    "if",
    "import",
    "in",
    "instanceof",
    "let",
    "new",
    "null",
    "return",
    "super",
    "switch",
    "this",
    "throw",
    "true",
    "try",
    "typeof",
    "var",
    "void",
    "while",
    "with",
    "yield",
    // TypeScript reserved type names
    "any",
    "boolean",
    "never",
    "number",
    "object",
    "string",
    "symbol",
    "undefined",
    "unknown",
];

/// Returns true if `name` is a reserved word.
pub fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Returns true if `name` is a plain ASCII JavaScript identifier.
///
/// Non-ASCII identifiers are valid JavaScript but are treated as
/// non-identifiers here so they always get quoted.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Quote a string as a double-quoted JavaScript string literal.
pub fn quote_string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render an object or type-literal key, quoting it when it is not an identifier.
///
/// `__proto__` is written as a computed key, since the plain and quoted
/// forms set the object's prototype instead of defining a property.
pub fn property_key(key: &str) -> Cow<'_, str> {
    if key == "__proto__" {
        Cow::Owned(format!("[{}]", quote_string(key)))
    } else if is_identifier(key) {
        Cow::Borrowed(key)
    } else {
        Cow::Owned(quote_string(key))
    }
}

/// Render a member access, falling back to bracket syntax for non-identifiers.
pub fn member_access(object: &str, member: &str) -> String {
    if is_identifier(member) {
        format!("{}.{}", object, member)
    } else {
        format!("{}[{}]", object, quote_string(member))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_identifier() {
        assert!(is_identifier("ok"));
        assert!(is_identifier("_private"));
        assert!(is_identifier("$el"));
        assert!(is_identifier("camelCase2"));
        assert!(!is_identifier(""));
        assert!(!is_identifier("1st"));
        assert!(!is_identifier("kebab-case"));
        assert!(!is_identifier("with space"));
        assert!(!is_identifier("确定"));
    }

    #[test]
    fn test_quote_string() {
        assert_eq!(quote_string("OK"), "\"OK\"");
        assert_eq!(quote_string("好"), "\"好\"");
        assert_eq!(quote_string("say \"hi\""), "\"say \\\"hi\\\"\"");
        assert_eq!(quote_string("a\\b"), "\"a\\\\b\"");
        assert_eq!(quote_string("line\nbreak"), "\"line\\nbreak\"");
        assert_eq!(quote_string("\u{0}"), "\"\\u0000\"");
        assert_eq!(quote_string("\u{2028}"), "\"\\u2028\"");
    }

    #[test]
    fn test_property_key() {
        assert_eq!(property_key("ok"), "ok");
        assert_eq!(property_key("not-ok"), "\"not-ok\"");
        assert_eq!(property_key("404"), "\"404\"");
    }

    #[test]
    fn test_proto_property_key_is_computed() {
        assert_eq!(property_key("__proto__"), "[\"__proto__\"]");
        assert_eq!(property_key("__proto"), "__proto");
    }

    #[test]
    fn test_member_access() {
        assert_eq!(member_access("options", "name"), "options.name");
        assert_eq!(member_access("options", "1st"), "options[\"1st\"]");
    }

    #[test]
    fn test_reserved_words() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("string"));
        assert!(!is_reserved_word("RootType"));
    }
}
