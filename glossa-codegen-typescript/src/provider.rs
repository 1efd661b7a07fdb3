//! The language-switching provider class.

use glossa_codegen::{Naming, builder::CodeFragment};

use crate::ast::{Class, CtorParam, Method};

/// Type of the map the provider wraps.
///
/// Lazy maps hold a loader for every language that has not been resolved yet.
pub fn maps_type(naming: &Naming, lazy: bool) -> String {
    if lazy {
        format!(
            "Record<{lang}, {root} | (() => Promise<{root}>)>",
            lang = naming.language_type,
            root = naming.root_type
        )
    } else {
        format!("Record<{}, {}>", naming.language_type, naming.root_type)
    }
}

/// Build the provider class.
///
/// A declared class carries the same members as signatures only.
pub fn provider_class(naming: &Naming, lazy: bool, declared: bool) -> Class {
    let lang = naming.language_type.as_str();
    let root = naming.root_type.as_str();
    let lang_param = format!("lang: {}", lang);

    let mut class = Class::new(&naming.provider_class)
        .param(CtorParam::new("maps", maps_type(naming, lazy)).private())
        .param(CtorParam::new(if declared { "lang" } else { "_lang" }, lang).private())
        .method(Method::getter("lang", lang).body_line("return this._lang;"));

    // A lazy switch is asynchronous, so it cannot be a plain setter
    if !lazy {
        class = class.method(Method::setter("lang", &lang_param).body_line("this._lang = lang;"));
    }

    let set_language = if lazy {
        Method::new("setLanguage", &lang_param)
            .async_()
            .returns("Promise<void>")
            .body_line("const value = this.maps[lang];")
            .body(CodeFragment::block(
                "if (typeof value === \"function\") {",
                vec![CodeFragment::line("this.maps[lang] = await value();")],
                Some("}".to_string()),
            ))
            .body_line("this._lang = lang;")
    } else {
        Method::new("setLanguage", &lang_param)
            .returns("void")
            .body_line("this._lang = lang;")
    };

    let current = if lazy {
        // Only resolved languages are ever selected
        format!("return this.maps[this._lang] as {};", root)
    } else {
        "return this.maps[this._lang];".to_string()
    };

    class = class
        .method(set_language)
        .method(Method::getter("t", root).body_line(current));

    if declared {
        class.exported().declared()
    } else {
        class
    }
}
