//! Language switching with on-demand loading.

use std::{fmt, future::Future, sync::Arc};

use eyre::{Result, WrapErr};
use futures::future::{BoxFuture, FutureExt};
use glossa_ir::NamedValue;
use indexmap::IndexMap;

use crate::{Error, Resource};

/// A pending load of one language's resource.
pub type LoadFuture = BoxFuture<'static, Result<Resource>>;

/// Produces a fresh load each time it is invoked.
pub type Loader = Arc<dyn Fn() -> LoadFuture + Send + Sync>;

/// Load state of one language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The loader has not run, or its last run failed.
    Unloaded,
    /// A load started and has not completed.
    Loading,
    /// The resource is materialized; its loader will not run again.
    Loaded,
}

enum Slot {
    Loaded(Resource),
    Loading(Loader),
    Unloaded(Loader),
}

impl Slot {
    fn state(&self) -> LoadState {
        match self {
            Slot::Loaded(_) => LoadState::Loaded,
            Slot::Loading(_) => LoadState::Loading,
            Slot::Unloaded(_) => LoadState::Unloaded,
        }
    }
}

/// A provider that materializes non-default languages on first selection.
///
/// `set_language` stores the loaded resource before moving the
/// current-language pointer, so [`LazyProvider::t`] always reads a loaded
/// language. Switches take `&mut self` and are therefore serialized.
///
/// # Example
///
/// ```
/// use futures::executor::block_on;
/// use glossa_ir::{RecordTypeDescriptor, TypeDescriptor};
/// use glossa_runtime::{LazyProvider, LoadState, Options, Resource};
///
/// let resource = |text: &str| {
///     let mut root = RecordTypeDescriptor::new();
///     root.insert("ok", TypeDescriptor::string(text));
///     Resource::new(root)
/// };
///
/// let zh = resource("好");
/// let mut provider = LazyProvider::new("en", resource("OK"))
///     .with_loader("zh", move || {
///         let zh = zh.clone();
///         async move { Ok(zh) }
///     });
///
/// assert_eq!(provider.state("zh"), Some(LoadState::Unloaded));
/// block_on(provider.set_language("zh"))?;
/// assert_eq!(provider.state("zh"), Some(LoadState::Loaded));
/// assert_eq!(provider.t().t("ok", &Options::new())?, "好");
/// # Ok::<(), eyre::Report>(())
/// ```
pub struct LazyProvider {
    slots: IndexMap<String, Slot>,
    current: String,
}

impl LazyProvider {
    /// Create a provider whose default language is already loaded.
    pub fn new(default: impl Into<String>, resource: Resource) -> Self {
        let default = default.into();
        let mut slots = IndexMap::new();
        slots.insert(default.clone(), Slot::Loaded(resource));
        Self {
            slots,
            current: default,
        }
    }

    /// Register a language that is loaded on first selection.
    ///
    /// A language that is already loaded, the default included, keeps its
    /// resource and the loader is ignored.
    pub fn with_loader<F, Fut>(mut self, lang: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Resource>> + Send + 'static,
    {
        let lang = lang.into();
        if let Some(Slot::Loaded(_)) = self.slots.get(lang.as_str()) {
            tracing::debug!(language = %lang, "language already loaded, loader ignored");
            return self;
        }
        let loader: Loader = Arc::new(move || loader().boxed());
        self.slots.insert(lang, Slot::Unloaded(loader));
        self
    }

    /// Register an already materialized language.
    pub fn with_resource(mut self, resource: NamedValue<Resource>) -> Self {
        self.slots.insert(resource.name, Slot::Loaded(resource.value));
        self
    }

    /// The current language.
    pub fn lang(&self) -> &str {
        &self.current
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.slots.keys().map(String::as_str)
    }

    /// Load state of `lang`, or `None` for an unknown language.
    pub fn state(&self, lang: &str) -> Option<LoadState> {
        self.slots.get(lang).map(Slot::state)
    }

    /// The current language's resource.
    pub fn t(&self) -> &Resource {
        match self.slots.get(self.current.as_str()) {
            Some(Slot::Loaded(resource)) => resource,
            // The pointer only moves after the slot is loaded
            _ => unreachable!("current language '{}' is not loaded", self.current),
        }
    }

    /// Select `lang`, loading it first if needed.
    ///
    /// A successful load replaces the loader with the resource, so each
    /// language is loaded at most once. A failed load leaves the language
    /// unloaded and the current language unchanged. A load whose future was
    /// dropped before completing is restarted.
    pub async fn set_language(&mut self, lang: &str) -> Result<()> {
        let loader = match self.slots.get(lang) {
            None => return Err(Error::UnknownLanguage(lang.to_string()).into()),
            Some(Slot::Loaded(_)) => None,
            Some(Slot::Unloaded(loader) | Slot::Loading(loader)) => Some(Arc::clone(loader)),
        };

        if let Some(loader) = loader {
            tracing::debug!(language = %lang, "loading language");
            self.slots
                .insert(lang.to_string(), Slot::Loading(Arc::clone(&loader)));

            match loader().await {
                Ok(resource) => {
                    self.slots.insert(lang.to_string(), Slot::Loaded(resource));
                }
                Err(err) => {
                    self.slots.insert(lang.to_string(), Slot::Unloaded(loader));
                    return Err(err)
                        .wrap_err_with(|| format!("failed to load language '{}'", lang));
                }
            }
        }

        self.current = lang.to_string();
        Ok(())
    }
}

impl fmt::Debug for LazyProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let states: IndexMap<&str, LoadState> = self
            .slots
            .iter()
            .map(|(lang, slot)| (lang.as_str(), slot.state()))
            .collect();
        f.debug_struct("LazyProvider")
            .field("slots", &states)
            .field("current", &self.current)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use futures::executor::block_on;
    use glossa_ir::{RecordTypeDescriptor, TypeDescriptor};

    use super::*;
    use crate::Options;

    fn resource(text: &str) -> Resource {
        let mut root = RecordTypeDescriptor::new();
        root.insert("ok", TypeDescriptor::string(text));
        Resource::new(root)
    }

    fn ok(provider: &LazyProvider) -> String {
        provider.t().t("ok", &Options::new()).unwrap()
    }

    /// A loader that counts its invocations.
    fn counting(
        text: &'static str,
        calls: Arc<AtomicUsize>,
    ) -> impl Fn() -> LoadFuture + Send + Sync + 'static {
        move || {
            calls.fetch_add(1, Ordering::SeqCst);
            async move { Ok(resource(text)) }.boxed()
        }
    }

    #[test]
    fn test_load_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut provider = LazyProvider::new("en", resource("OK"))
            .with_loader("zh", counting("好", Arc::clone(&calls)))
            .with_resource(NamedValue::new("sp", resource("Vale")));

        block_on(provider.set_language("zh")).unwrap();
        assert_eq!(ok(&provider), "好");
        block_on(provider.set_language("en")).unwrap();
        assert_eq!(ok(&provider), "OK");
        block_on(provider.set_language("zh")).unwrap();
        block_on(provider.set_language("sp")).unwrap();
        assert_eq!(ok(&provider), "Vale");

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(provider.state("zh"), Some(LoadState::Loaded));
    }

    #[test]
    fn test_failed_load_restores_unloaded() {
        let attempts = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&attempts);
        let mut provider = LazyProvider::new("en", resource("OK")).with_loader("zh", move || {
            let attempt = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if attempt == 0 {
                    Err(eyre::eyre!("network down"))
                } else {
                    Ok(resource("好"))
                }
            }
        });

        let err = block_on(provider.set_language("zh")).unwrap_err();
        assert_eq!(err.to_string(), "failed to load language 'zh'");
        assert_eq!(provider.state("zh"), Some(LoadState::Unloaded));
        assert_eq!(provider.lang(), "en");

        block_on(provider.set_language("zh")).unwrap();
        assert_eq!(ok(&provider), "好");
        assert_eq!(attempts.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_dropped_load_is_restarted() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut provider = LazyProvider::new("en", resource("OK")).with_loader("zh", move || {
            let call = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                if call == 0 {
                    futures::future::pending::<()>().await;
                }
                Ok(resource("好"))
            }
        });

        assert!(provider.set_language("zh").now_or_never().is_none());
        assert_eq!(provider.state("zh"), Some(LoadState::Loading));
        assert_eq!(provider.lang(), "en");

        block_on(provider.set_language("zh")).unwrap();
        assert_eq!(ok(&provider), "好");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_loader_does_not_replace_loaded_language() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut provider = LazyProvider::new("en", resource("OK"))
            .with_resource(NamedValue::new("sp", resource("Vale")))
            .with_loader("en", counting("Hello", Arc::clone(&calls)))
            .with_loader("sp", counting("Hola", Arc::clone(&calls)));

        assert_eq!(provider.state("en"), Some(LoadState::Loaded));
        assert_eq!(ok(&provider), "OK");

        block_on(provider.set_language("sp")).unwrap();
        assert_eq!(ok(&provider), "Vale");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unknown_language() {
        let mut provider = LazyProvider::new("en", resource("OK"));
        let err = block_on(provider.set_language("fr")).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::UnknownLanguage(_))));
        assert_eq!(provider.state("fr"), None);
    }
}
