//! Intermediate representation types for the glossa i18n generator.
//!
//! This crate provides the data model shared by every stage of the
//! generation pipeline:
//!
//! ```text
//! locales/*.yaml → RawDocument (per language) → TypeDescriptor trees → canonical schema → codegen
//! ```
//!
//! - [`RawDocument`] / [`RawValue`] - a deserialized locale file, before classification
//! - [`TypeDescriptor`] - the classified String / Call / Record view of one node
//! - [`NamedValue`] - keeps the language identifier next to structural data
//! - [`Target`] - the artifact kinds the generator can emit
//!
//! The types are language-agnostic: nothing here knows about TypeScript or
//! any other emitted language.

mod descriptor;
mod document;
mod named;
mod target;

pub use descriptor::{
    ArgSegment, CallTypeDescriptor, DescriptorKind, RecordTypeDescriptor, StringTypeDescriptor,
    TypeDescriptor,
};
pub use document::{RawDocument, RawNumber, RawValue};
pub use named::NamedValue;
pub use target::Target;
