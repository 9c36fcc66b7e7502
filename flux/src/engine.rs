use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::router::{Payload, Router};
use crate::store::{Change, Store};
use crate::value::{SubscriptionId, Value};

/// The engine facade: one store, one router.
///
/// Shells and handler modules interact with state exclusively through this
/// type: `emit` sends typed requests into registered handlers, `subscribe`
/// watches state paths, `get`/`get_as` read current state.
///
/// # Example
///
/// ```ignore
/// let flux = Flux::new();
///
/// flux.on("app/initialize", |_, _, store| async move {
///     store.set("app/route", "/search".to_string());
/// });
///
/// flux.subscribe("app/#", |path, _| println!("changed: {path}"));
/// flux.emit("app/initialize", ()).await;
/// ```
pub struct Flux {
    store: Arc<Store>,
    router: Router,
}

impl Flux {
    pub fn new() -> Self {
        Self {
            store: Arc::new(Store::new()),
            router: Router::new(),
        }
    }

    /// Handle to the underlying store, for handler wiring and tests.
    pub fn store(&self) -> Arc<Store> {
        Arc::clone(&self.store)
    }

    /// Send a typed request to every handler matching `path`, awaiting
    /// them in order.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        let payload: Payload = Arc::new(payload);
        self.router.dispatch(path, payload, Arc::clone(&self.store)).await;
    }

    /// Register an async request handler under a trie pattern.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<Store>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on(pattern, handler);
    }

    pub fn has_handler(&self, pattern: &str) -> bool {
        self.router.has_handler(pattern)
    }

    // State reads, delegated to the store.

    pub fn get(&self, path: &str) -> Option<Value> {
        self.store.get(path)
    }

    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        self.store.get_as(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(path)
    }

    pub fn scan(&self, prefix: &str) -> Vec<(String, Value)> {
        self.store.scan(prefix)
    }

    pub fn snapshot(&self) -> Vec<(String, Value)> {
        self.store.snapshot()
    }

    /// Mark a path stale for all subscribers; see `Store::invalidate`.
    pub fn invalidate(&self, path: &str) {
        self.store.invalidate(path)
    }

    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &Change) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.store.unsubscribe(pattern, id)
    }
}

impl Default for Flux {
    fn default() -> Self {
        Self::new()
    }
}
