//! Validation of configured names, with source spans for error reporting.

use glossa_core::{is_identifier, is_reserved_word};
use miette::SourceSpan;

use crate::{Error, error::SourceContext};

/// Validation context that carries source information.
#[derive(Debug, Clone, Copy)]
pub struct ParseContext<'a> {
    source: &'a SourceContext,
}

impl<'a> ParseContext<'a> {
    pub fn new(source: &'a SourceContext) -> Self {
        Self { source }
    }

    /// Find the span of a key such as `indent = 3`.
    pub fn find_key_span(&self, key: &str) -> Option<SourceSpan> {
        find_key_span(self.source.src(), key)
    }

    /// Find the span of a string value, without its quotes.
    pub fn find_string_span(&self, value: &str) -> Option<SourceSpan> {
        find_string_span(self.source.src(), value)
    }

    pub fn validation_error(
        &self,
        message: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        self.source.validation_error(message, span)
    }

    /// Validate that a configured name can be used as a declaration name.
    pub fn validate_name(&self, name: &str, context: &str) -> crate::Result<()> {
        if let Some(reason) = invalid_name_reason(name) {
            return Err(self.source.invalid_name_error(
                name,
                context,
                reason,
                self.find_string_span(name),
            ));
        }
        Ok(())
    }
}

/// Returns why `name` cannot be used as a declaration name, if it can't.
pub(crate) fn invalid_name_reason(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("name cannot be empty");
    }
    if is_reserved_word(name) {
        return Some("name is a reserved word");
    }
    if !is_identifier(name) {
        return Some("name is not a valid identifier");
    }
    None
}

/// Find the span of a key at the start of a line
pub(crate) fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    let mut offset = 0;
    for line in src.split_inclusive('\n') {
        let trimmed = line.trim_start();
        if let Some(rest) = trimmed.strip_prefix(key)
            && rest.trim_start().starts_with('=')
        {
            let start = offset + (line.len() - trimmed.len());
            return Some(SourceSpan::from((start, key.len())));
        }
        offset += line.len();
    }
    None
}

/// Find the span of a quoted string value in the TOML source
pub(crate) fn find_string_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            // +1 to skip the opening quote
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}
