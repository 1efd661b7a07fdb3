//! Raw locale documents, as produced by a structured-data deserializer.

use std::fmt;

use indexmap::IndexMap;
use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, SeqAccess, Visitor},
};

/// A number scalar, kept in the representation the source used.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawNumber {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Int(i) => write!(f, "{}", i),
            RawNumber::UInt(u) => write!(f, "{}", u),
            RawNumber::Float(x) => write!(f, "{}", x),
        }
    }
}

/// One node of a raw locale document.
///
/// Only strings, numbers and mappings are meaningful to the generator; the
/// remaining variants are kept so they can be reported with their location
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    String(String),
    Number(RawNumber),
    Mapping(IndexMap<String, RawValue>),
    Bool(bool),
    Sequence(Vec<RawValue>),
    Null,
}

impl RawValue {
    /// Human-readable name of the value's type, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::String(_) => "string",
            RawValue::Number(_) => "number",
            RawValue::Mapping(_) => "mapping",
            RawValue::Bool(_) => "boolean",
            RawValue::Sequence(_) => "sequence",
            RawValue::Null => "null",
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::String(s) => write!(f, "{:?}", s),
            RawValue::Number(n) => write!(f, "{}", n),
            RawValue::Mapping(m) => write!(f, "{{..{} keys}}", m.len()),
            RawValue::Bool(b) => write!(f, "{}", b),
            RawValue::Sequence(items) => write!(f, "[..{} items]", items.len()),
            RawValue::Null => f.write_str("null"),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::String(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::String(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(RawNumber::Int(value))
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(RawNumber::Float(value))
    }
}

impl From<RawDocument> for RawValue {
    fn from(value: RawDocument) -> Self {
        RawValue::Mapping(value.entries)
    }
}

struct RawValueVisitor;

impl<'de> Visitor<'de> for RawValueVisitor {
    type Value = RawValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number or mapping")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<RawValue, E> {
        Ok(RawValue::Bool(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<RawValue, E> {
        Ok(RawValue::Number(RawNumber::Int(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<RawValue, E> {
        Ok(RawValue::Number(RawNumber::UInt(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<RawValue, E> {
        Ok(RawValue::Number(RawNumber::Float(v)))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<RawValue, E> {
        Ok(RawValue::String(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<RawValue, E> {
        Ok(RawValue::String(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<RawValue, E> {
        Ok(RawValue::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<RawValue, D::Error> {
        RawValue::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<RawValue, A::Error> {
        let mut items = Vec::new();
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(RawValue::Sequence(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<RawValue, A::Error> {
        let mut entries = IndexMap::new();
        while let Some((key, value)) = map.next_entry::<String, RawValue>()? {
            entries.insert(key, value);
        }
        Ok(RawValue::Mapping(entries))
    }
}

impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RawValueVisitor)
    }
}

/// The deserialized tree for one language's locale file.
///
/// The root is always a mapping; key order is the order of the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawDocument {
    entries: IndexMap<String, RawValue>,
}

impl RawDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, returning `self` for chaining.
    pub fn entry(mut self, key: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> IndexMap<String, RawValue> {
        self.entries
    }
}

impl From<IndexMap<String, RawValue>> for RawDocument {
    fn from(entries: IndexMap<String, RawValue>) -> Self {
        Self { entries }
    }
}

impl<'de> Deserialize<'de> for RawDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match RawValue::deserialize(deserializer)? {
            RawValue::Mapping(entries) => Ok(Self { entries }),
            // An empty file deserializes as null in most formats
            RawValue::Null => Ok(Self::default()),
            other => Err(de::Error::custom(format!(
                "locale document root must be a mapping, found {}",
                other.type_name()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_order() {
        let doc: RawDocument =
            serde_json::from_str(r#"{ "z": "last?", "a": { "b": 1 }, "m": 2.5 }"#).unwrap();
        let keys: Vec<&String> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_unsupported_values_are_kept() {
        let doc: RawDocument =
            serde_json::from_str(r#"{ "flag": true, "list": [1, 2], "nothing": null }"#).unwrap();
        let types: Vec<&str> = doc.iter().map(|(_, v)| v.type_name()).collect();
        assert_eq!(types, vec!["boolean", "sequence", "null"]);
    }

    #[test]
    fn test_root_must_be_mapping() {
        let err = serde_json::from_str::<RawDocument>(r#"["a"]"#).unwrap_err();
        assert!(err.to_string().contains("must be a mapping"));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(RawNumber::Int(-3).to_string(), "-3");
        assert_eq!(RawNumber::UInt(42).to_string(), "42");
        assert_eq!(RawNumber::Float(1.5).to_string(), "1.5");
    }

    #[test]
    fn test_builder() {
        let doc = RawDocument::new()
            .entry("ok", "OK")
            .entry("count", 3i64)
            .entry("nested", RawDocument::new().entry("x", "y"));
        assert_eq!(doc.len(), 3);
        assert!(matches!(
            doc.iter().nth(2),
            Some((_, RawValue::Mapping(m))) if m.len() == 1
        ));
    }
}
