//! Core utilities for the glossa i18n generator.
//!
//! This crate provides small building blocks shared across the glossa
//! crates: writing generated units to disk and rendering JavaScript-family
//! names and literals safely.

mod file;
mod utils;

// File operations
pub use file::{File, WriteResult};
// String utilities
pub use utils::{
    RESERVED_WORDS, is_identifier, is_reserved_word, member_access, property_key, quote_string,
};
