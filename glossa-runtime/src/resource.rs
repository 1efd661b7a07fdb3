//! One language's messages.

use eyre::Result;
use glossa_ir::{RecordTypeDescriptor, TypeDescriptor};

use crate::{Error, Message, Options};

/// The messages of one language, addressed by dotted path (`dialog.ok`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resource {
    root: RecordTypeDescriptor,
}

impl Resource {
    pub fn new(root: RecordTypeDescriptor) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &RecordTypeDescriptor {
        &self.root
    }

    /// Resolve the message at `path`.
    pub fn message(&self, path: &str) -> Result<Message<'_>> {
        match self.root.lookup_dotted(path) {
            Some(TypeDescriptor::String(string)) => Ok(Message::Text(&string.value)),
            Some(TypeDescriptor::Call(call)) => Ok(Message::Call(call)),
            Some(TypeDescriptor::Record(_)) => Err(Error::NotAMessage(path.to_string()).into()),
            None => Err(Error::NotFound(path.to_string()).into()),
        }
    }

    /// Resolve and render the message at `path`.
    pub fn t(&self, path: &str, options: &Options) -> Result<String> {
        self.message(path)?.render(options)
    }
}

impl From<RecordTypeDescriptor> for Resource {
    fn from(root: RecordTypeDescriptor) -> Self {
        Self::new(root)
    }
}

#[cfg(test)]
mod tests {
    use glossa_ir::ArgSegment;

    use super::*;

    fn resource() -> Resource {
        let mut dialog = RecordTypeDescriptor::new();
        dialog.insert("cancel", TypeDescriptor::string("Cancel"));
        dialog.insert(
            "confirm",
            TypeDescriptor::call(vec![
                ArgSegment::literal("Delete "),
                ArgSegment::param("name"),
                ArgSegment::literal("?"),
            ]),
        );
        let mut root = RecordTypeDescriptor::new();
        root.insert("ok", TypeDescriptor::string("OK"));
        root.insert("dialog", TypeDescriptor::record(dialog));
        Resource::new(root)
    }

    #[test]
    fn test_lookup() {
        let resource = resource();
        assert_eq!(resource.t("ok", &Options::new()).unwrap(), "OK");
        assert_eq!(
            resource
                .t("dialog.confirm", &Options::new().set("name", "a.txt"))
                .unwrap(),
            "Delete a.txt?"
        );
    }

    #[test]
    fn test_lookup_errors() {
        let resource = resource();

        let err = resource.message("dialog").unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotAMessage(_))));

        let err = resource.message("dialog.cancel.label").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::NotFound(path)) if path == "dialog.cancel.label"
        ));
    }
}
