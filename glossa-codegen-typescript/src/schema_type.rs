//! Maps the canonical schema onto TypeScript types.

use glossa_ir::{CallTypeDescriptor, RecordTypeDescriptor, TypeDescriptor};

use crate::ast::{TsType, TypeLiteral};

/// Type of every placeholder value a call accepts.
pub const PARAM_TYPE: &str = "string | number";

/// Type returned by every message.
pub const MESSAGE_TYPE: &str = "string";

/// The object type a call's `options` parameter must satisfy.
///
/// One member per distinct parameter, in sorted order.
pub fn options_type(call: &CallTypeDescriptor) -> TypeLiteral {
    call.param_names()
        .into_iter()
        .fold(TypeLiteral::new(), |ty, name| ty.member(name, PARAM_TYPE))
}

/// The function type of a call, `(options: { .. }) => string`.
pub fn call_type(call: &CallTypeDescriptor) -> String {
    format!("(options: {}) => {}", options_type(call).inline(), MESSAGE_TYPE)
}

/// The object type mirroring a record, used for the root type alias.
pub fn record_type(record: &RecordTypeDescriptor) -> TypeLiteral {
    record
        .iter()
        .fold(TypeLiteral::new(), |ty, (key, node)| ty.member(key, node_type(node)))
}

fn node_type(node: &TypeDescriptor) -> TsType {
    match node {
        TypeDescriptor::String(_) => TsType::raw(MESSAGE_TYPE),
        TypeDescriptor::Call(call) => TsType::raw(call_type(call)),
        TypeDescriptor::Record(record) => record_type(record).into(),
    }
}

#[cfg(test)]
mod tests {
    use glossa_ir::ArgSegment;

    use super::*;

    fn call(params: &[&str]) -> CallTypeDescriptor {
        CallTypeDescriptor {
            body: params.iter().map(|p| ArgSegment::param(*p)).collect(),
        }
    }

    #[test]
    fn test_options_are_sorted_and_distinct() {
        assert_eq!(
            call_type(&call(&["who", "at", "who"])),
            "(options: { at: string | number; who: string | number }) => string"
        );
    }

    #[test]
    fn test_non_identifier_params_are_quoted() {
        assert_eq!(
            call_type(&call(&["1st"])),
            "(options: { \"1st\": string | number }) => string"
        );
    }

    #[test]
    fn test_record_type() {
        let mut dialog = RecordTypeDescriptor::new();
        dialog.insert("cancel", TypeDescriptor::string("Cancel"));
        let mut root = RecordTypeDescriptor::new();
        root.insert("ok", TypeDescriptor::string("OK"));
        root.insert("dialog", TypeDescriptor::record(dialog));

        let expected = TypeLiteral::new()
            .member("ok", "string")
            .member("dialog", TypeLiteral::new().member("cancel", "string"));
        assert_eq!(record_type(&root), expected);
    }
}
