//! Runtime message lookup for glossa schemas.
//!
//! Mirrors the emitted TypeScript provider on the Rust side:
//!
//! - [`Message`] renders a string or placeholder message with [`Options`]
//! - [`Resource`] resolves dotted paths in one language's messages
//! - [`Provider`] switches between eagerly loaded languages
//! - [`LazyProvider`] loads non-default languages on first selection,
//!   at most once each

mod error;
mod lazy;
mod message;
mod provider;
mod resource;

pub use error::Error;
pub use lazy::{LazyProvider, LoadFuture, LoadState, Loader};
pub use message::{Arg, Message, Options};
pub use provider::Provider;
pub use resource::Resource;
