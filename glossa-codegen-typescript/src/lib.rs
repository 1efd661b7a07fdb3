//! TypeScript code generator for the glossa i18n generator.
//!
//! Turns a unified [`Schema`](glossa_codegen::Schema) into TypeScript
//! source for one of three targets:
//!
//! - `resource` - the root type plus a default-exported language map
//! - `provider` - the root type plus a language-switching `I18nProvider`
//!   instance, optionally loading non-default languages on demand
//! - `type` - ambient declarations only, for a hand-written runtime
//!
//! # Usage
//!
//! ```
//! use glossa_codegen::{GenerateOptions, LanguageCodegen, Target, analyze};
//! use glossa_codegen_typescript::Generator;
//! use glossa_ir::{NamedValue, RawDocument};
//!
//! let schema = analyze(vec![
//!     NamedValue::new("en", RawDocument::new().entry("ok", "OK")),
//!     NamedValue::new("zh", RawDocument::new().entry("ok", "好")),
//! ])?;
//!
//! let options = GenerateOptions::default().target(Target::Resource);
//! let artifact = Generator::new().generate(&schema, &options)?;
//! assert!(artifact.main().contains("ok: \"好\","));
//! # Ok::<(), eyre::Report>(())
//! ```

mod code_file;
mod generator;
mod literal;
mod provider;
mod schema_type;

pub mod ast;

pub use code_file::CodeFile;
pub use generator::Generator;
pub use glossa_codegen::language::{Artifact, LanguageCodegen, PreviewFile};
