//! TypeScript AST builders for generating types, classes, literals, imports
//! and exports.
//!
//! Each node renders to [`CodeFragment`]s, which a
//! [`CodeBuilder`](glossa_codegen::builder::CodeBuilder) turns into text.
//!
//! [`CodeFragment`]: glossa_codegen::builder::CodeFragment

mod class;
mod consts;
mod exports;
mod imports;
mod objects;
mod types;

pub use class::{Class, CtorParam, Method};
pub use consts::Const;
pub use exports::Export;
pub use imports::Import;
pub use objects::{ArrowFn, Expr, JsObject, New, Property};
pub use types::{Member, TsType, TypeAlias, TypeLiteral, Union};
