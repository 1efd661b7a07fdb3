/// Errors raised while looking up and rendering messages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A call was rendered without a value for one of its parameters.
    #[error("missing option '{0}'")]
    MissingOption(String),

    /// No message exists at the path.
    #[error("no message at '{0}'")]
    NotFound(String),

    /// The path names a namespace, not a message.
    #[error("'{0}' is a namespace, not a message")]
    NotAMessage(String),

    /// The language is not known to the provider.
    #[error("unknown language '{0}'")]
    UnknownLanguage(String),
}
