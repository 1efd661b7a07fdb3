//! TypeScript code generator for the resource, provider and type targets.

use eyre::Result;
use glossa_codegen::{Artifact, GenerateOptions, LanguageCodegen, Schema, Target};
use glossa_core::quote_string;
use glossa_ir::{NamedValue, RecordTypeDescriptor};

use crate::{
    ast::{ArrowFn, Const, Export, Expr, Import, JsObject, New, TypeAlias, Union},
    code_file::CodeFile,
    literal::record_literal,
    provider::{maps_type, provider_class},
    schema_type::record_type,
};

/// TypeScript code generator.
///
/// The main unit always starts with the language union and the root type;
/// what follows depends on the [`Target`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator;

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn generate(&self, schema: &Schema, options: &GenerateOptions) -> Result<Artifact> {
        options.naming.validate()?;
        let default_language = schema.default_language(options.default_language.as_deref())?;
        let unit = Unit {
            schema,
            options,
            default_language,
        };

        let main = unit.main()?;
        if !options.splits_units() {
            tracing::debug!(target_kind = %options.target, "generated single unit");
            return Ok(Artifact::Single(main));
        }

        let others = schema
            .languages()
            .iter()
            .filter(|lang| lang.name != default_language)
            .map(|lang| Ok(NamedValue::new(lang.name.clone(), unit.language_unit(lang)?)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(
            target_kind = %options.target,
            units = others.len() + 1,
            "generated split units"
        );
        Ok(Artifact::Split { main, others })
    }
}

impl Generator {
    pub fn new() -> Self {
        Self
    }
}

/// One generation run.
struct Unit<'a> {
    schema: &'a Schema,
    options: &'a GenerateOptions,
    default_language: &'a str,
}

impl Unit<'_> {
    fn lazy(&self) -> bool {
        self.options.splits_units()
    }

    fn render(&self, file: CodeFile) -> String {
        file.render_with_indent(self.options.indent)
    }

    fn language_union(&self) -> Union {
        self.schema
            .language_names()
            .fold(Union::new(&self.options.naming.language_type), |union, name| {
                union.variant(quote_string(name))
            })
    }

    fn root_type(&self) -> TypeAlias {
        TypeAlias::new(
            &self.options.naming.root_type,
            record_type(self.schema.canonical()),
        )
    }

    fn main(&self) -> Result<String> {
        let naming = &self.options.naming;
        let file = CodeFile::new().add(self.language_union()).add(self.root_type());

        let file = match self.options.target {
            Target::Resource => file.export(
                Export::new()
                    .default_expr(Expr::from(self.maps()?).as_type(maps_type(naming, self.lazy()))),
            ),
            Target::Provider => {
                let maps = Expr::from(self.maps()?);
                // Lazy maps match the constructor parameter without an assertion
                let maps = if self.lazy() {
                    maps
                } else {
                    maps.as_type(maps_type(naming, false))
                };
                let instance = New::new(&naming.provider_class)
                    .arg(maps)
                    .arg(Expr::string(self.default_language));
                file.add(provider_class(naming, self.lazy(), false))
                    .add(Const::new(&naming.provider_name, instance))
                    .export(Export::new().default(&naming.provider_name))
            }
            Target::Type => file
                .add(provider_class(naming, self.options.lazy, true))
                .add(Const::declared(&naming.provider_name, &naming.provider_class))
                .export(Export::new().default(&naming.provider_name)),
        };

        Ok(self.render(file))
    }

    /// The language to resources map, with deferred languages as loaders.
    fn maps(&self) -> Result<JsObject> {
        let canonical = self.schema.canonical();
        let mut maps = JsObject::new();
        for lang in self.schema.languages() {
            maps = if self.lazy() && lang.name != self.default_language {
                maps.arrow_fn(&lang.name, self.loader(&lang.name))
            } else {
                maps.object(&lang.name, record_literal(canonical, &lang.value)?)
            };
        }
        Ok(maps)
    }

    fn loader(&self, language: &str) -> ArrowFn {
        let module = format!("{}{}", self.options.import_prefix, language);
        ArrowFn::new(
            "",
            format!("import({}).then((m) => m.default)", quote_string(&module)),
        )
    }

    fn language_unit(&self, lang: &NamedValue<RecordTypeDescriptor>) -> Result<String> {
        let naming = &self.options.naming;
        let module = format!("{}{}", self.options.import_prefix, self.options.main_module);
        let literal = record_literal(self.schema.canonical(), &lang.value)?;
        tracing::trace!(language = %lang.name, "emitting language unit");

        Ok(self.render(
            CodeFile::new()
                .import(Import::new(module).named(&naming.root_type).type_only())
                .export(Export::new().default_expr(Expr::from(literal).as_type(&naming.root_type))),
        ))
    }
}

