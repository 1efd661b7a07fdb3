//! Rendering of single messages.

use std::fmt;

use eyre::Result;
use glossa_ir::{ArgSegment, CallTypeDescriptor};
use indexmap::IndexMap;

use crate::Error;

/// A placeholder value: a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    String(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::String(s) => f.write_str(s),
            Arg::Int(i) => write!(f, "{}", i),
            Arg::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::String(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::String(value)
    }
}

impl From<i64> for Arg {
    fn from(value: i64) -> Self {
        Arg::Int(value)
    }
}

impl From<i32> for Arg {
    fn from(value: i32) -> Self {
        Arg::Int(value.into())
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

/// Placeholder values for a call, by parameter name.
///
/// # Example
///
/// ```
/// use glossa_runtime::Options;
///
/// let options = Options::new().set("name", "Ann").set("count", 3);
/// assert_eq!(options.get("count").map(ToString::to_string).as_deref(), Some("3"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    values: IndexMap<String, Arg>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, name: impl Into<String>, value: impl Into<Arg>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&Arg> {
        self.values.get(name)
    }
}

/// A message resolved from a resource.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message<'a> {
    /// A message without placeholders.
    Text(&'a str),
    /// A message with placeholders.
    Call(&'a CallTypeDescriptor),
}

impl Message<'_> {
    /// Render with the given placeholder values.
    ///
    /// Literal segments and parameter values are concatenated in order;
    /// extra options are ignored.
    pub fn render(&self, options: &Options) -> Result<String> {
        let call = match self {
            Message::Text(text) => return Ok(text.to_string()),
            Message::Call(call) => call,
        };

        let mut out = String::new();
        for segment in &call.body {
            match segment {
                ArgSegment::Literal { value } => out.push_str(value),
                ArgSegment::Param { name } => {
                    let value = options
                        .get(name)
                        .ok_or_else(|| Error::MissingOption(name.clone()))?;
                    out.push_str(&value.to_string());
                }
            }
        }
        Ok(out)
    }

    /// Parameter names the message needs, sorted.
    pub fn params(&self) -> Vec<&str> {
        match self {
            Message::Text(_) => Vec::new(),
            Message::Call(call) => call.param_names().into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greet() -> CallTypeDescriptor {
        CallTypeDescriptor {
            body: vec![
                ArgSegment::literal("hi "),
                ArgSegment::param("name"),
                ArgSegment::literal(", you are #"),
                ArgSegment::param("rank"),
            ],
        }
    }

    #[test]
    fn test_render_text() {
        assert_eq!(Message::Text("OK").render(&Options::new()).unwrap(), "OK");
    }

    #[test]
    fn test_render_call() {
        let call = greet();
        let options = Options::new().set("rank", 1).set("name", "Ann");
        assert_eq!(
            Message::Call(&call).render(&options).unwrap(),
            "hi Ann, you are #1"
        );
        assert_eq!(Message::Call(&call).params(), vec!["name", "rank"]);
    }

    #[test]
    fn test_missing_option() {
        let call = greet();
        let err = Message::Call(&call)
            .render(&Options::new().set("name", "Ann"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MissingOption(name)) if name == "rank"
        ));
    }

    #[test]
    fn test_arg_display() {
        assert_eq!(Arg::from(2.5).to_string(), "2.5");
        assert_eq!(Arg::from(-3i64).to_string(), "-3");
        assert_eq!(Arg::from("x").to_string(), "x");
    }
}
