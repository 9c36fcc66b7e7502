use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::pattern::PatternTrie;

/// Key-value arguments carried after `?` in a translation path, e.g.
/// `"notice/favorite/add-failed?reason=timeout"`.
#[derive(Debug, Default)]
pub struct QueryParams {
    params: HashMap<String, String>,
}

impl QueryParams {
    /// Parse `"a=1&b=2"`. Pairs without `=` become empty-valued keys.
    pub fn parse(query: &str) -> Self {
        let mut params = HashMap::new();
        if !query.is_empty() {
            for pair in query.split('&') {
                match pair.split_once('=') {
                    Some((k, v)) => params.insert(k.to_string(), v.to_string()),
                    None => params.insert(pair.to_string(), String::new()),
                };
            }
        }
        Self { params }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }
}

/// Translates one path (plus arguments) into display text for a locale.
pub trait I18nHandler: Send + Sync {
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String;
}

impl<F> I18nHandler for F
where
    F: Fn(&str, &QueryParams, &str) -> String + Send + Sync,
{
    fn translate(&self, path: &str, query: &QueryParams, locale: &str) -> String {
        self(path, query, locale)
    }
}

/// Locale-aware text lookup routed through the same trie as everything
/// else: catalogs register under patterns (`"ui/#"`, `"error/#"`), shells
/// call [`I18nStore::get`] with concrete paths at render time.
///
/// # Example
///
/// ```ignore
/// let i18n = I18nStore::new("de");
/// i18n.handle("ui/#", Arc::new(|path: &str, _: &QueryParams, locale: &str| {
///     match (path, locale) {
///         ("ui/search/button", "de") => "Suchen".to_string(),
///         ("ui/search/button", _) => "Search".to_string(),
///         _ => path.to_string(),
///     }
/// }));
///
/// assert_eq!(i18n.get("ui/search/button"), "Suchen");
/// ```
pub struct I18nStore {
    handlers: PatternTrie<Arc<dyn I18nHandler>>,
    locale: RwLock<String>,
}

impl I18nStore {
    pub fn new(default_locale: &str) -> Self {
        Self {
            handlers: PatternTrie::new(),
            locale: RwLock::new(default_locale.to_string()),
        }
    }

    /// Switch the active locale for all subsequent lookups.
    pub fn set_locale(&self, locale: &str) {
        let mut current = self.locale.write().unwrap();
        *current = locale.to_string();
    }

    pub fn locale(&self) -> String {
        self.locale.read().unwrap().clone()
    }

    /// Register a catalog for every path covered by `pattern`.
    pub fn handle(&self, pattern: &str, handler: Arc<dyn I18nHandler>) {
        self.handlers.insert(pattern, handler);
    }

    /// Resolve `"path"` or `"path?k=v&k2=v2"` in the current locale.
    /// Unmatched paths echo back unchanged, so missing catalog entries
    /// stay visible instead of rendering as blanks.
    pub fn get(&self, path_and_query: &str) -> String {
        let (path, query) = match path_and_query.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path_and_query, ""),
        };
        let params = QueryParams::parse(query);
        let locale = self.locale();

        let handlers = self.handlers.matches(path);
        match handlers.first() {
            Some(handler) => handler.translate(path, &params, &locale),
            None => path.to_string(),
        }
    }
}
