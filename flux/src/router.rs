use std::any::Any;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::pattern::PatternTrie;
use crate::store::Store;

/// Boxed future returned by erased request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased request payload. Handlers downcast to their typed request.
pub type Payload = Arc<dyn Any + Send + Sync>;

type ErasedHandler = Arc<dyn Fn(String, Payload, Arc<Store>) -> BoxFuture + Send + Sync>;

/// Request router: emit paths in, async handlers out.
///
/// Handlers are registered under trie patterns, so one handler can serve a
/// family of requests (`"favorites/+"`) and diagnostics can tap everything
/// (`"#"`). Dispatch awaits matching handlers one after another; a handler
/// finishes its state writes before the next one starts.
pub struct Router {
    handlers: PatternTrie<ErasedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self {
            handlers: PatternTrie::new(),
        }
    }

    /// Register an async handler for requests matching `pattern`.
    pub fn on<F, Fut>(&self, pattern: &str, handler: F)
    where
        F: Fn(String, Payload, Arc<Store>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let erased: ErasedHandler =
            Arc::new(move |path, payload, store| Box::pin(handler(path, payload, store)));
        self.handlers.insert(pattern, erased);
    }

    /// Run every handler whose pattern matches `path`, in match order,
    /// each awaited to completion.
    pub async fn dispatch(&self, path: &str, payload: Payload, store: Arc<Store>) {
        let matched = self.handlers.matches(path);
        if matched.is_empty() {
            tracing::debug!(path, "request had no handler");
            return;
        }
        tracing::trace!(path, handlers = matched.len(), "dispatching request");
        for handler in matched {
            handler(path.to_string(), payload.clone(), store.clone()).await;
        }
    }

    /// Number of handlers that would run for `path`.
    pub fn matches(&self, path: &str) -> usize {
        self.handlers.matches(path).len()
    }

    /// Whether a handler is registered under exactly this pattern.
    pub fn has_handler(&self, pattern: &str) -> bool {
        self.handlers.has_pattern(pattern)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[derive(Debug)]
    struct ToggleReq {
        profile_id: u64,
    }

    #[tokio::test]
    async fn handler_runs_on_exact_path() {
        let router = Router::new();
        let store = Arc::new(Store::new());
        let hits = Arc::new(AtomicU64::new(0));

        let hits2 = Arc::clone(&hits);
        router.on("favorites/toggle", move |_, _, _| {
            let hits2 = Arc::clone(&hits2);
            async move {
                hits2.fetch_add(1, Ordering::SeqCst);
            }
        });

        router
            .dispatch("favorites/toggle", Arc::new(()), store.clone())
            .await;
        router.dispatch("favorites/load", Arc::new(()), store).await;

        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn handler_downcasts_its_payload() {
        let router = Router::new();
        let store = Arc::new(Store::new());
        let seen = Arc::new(AtomicU64::new(0));

        let seen2 = Arc::clone(&seen);
        router.on("favorites/toggle", move |_, payload, _| {
            let seen2 = Arc::clone(&seen2);
            async move {
                let req = payload.downcast_ref::<ToggleReq>().unwrap();
                seen2.store(req.profile_id, Ordering::SeqCst);
            }
        });

        router
            .dispatch(
                "favorites/toggle",
                Arc::new(ToggleReq { profile_id: 42 }),
                store,
            )
            .await;

        assert_eq!(seen.load(Ordering::SeqCst), 42);
    }

    #[tokio::test]
    async fn handler_writes_into_the_store() {
        let router = Router::new();
        let store = Arc::new(Store::new());

        router.on("search/clear", move |_, _, store| async move {
            store.set("search/state", "cleared".to_string());
        });

        router.dispatch("search/clear", Arc::new(()), store.clone()).await;

        assert_eq!(
            store.get_as::<String>("search/state").unwrap(),
            "cleared"
        );
    }

    #[tokio::test]
    async fn wildcard_handler_sees_each_request_path() {
        let router = Router::new();
        let store = Arc::new(Store::new());
        let log: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(vec![]));

        let log2 = Arc::clone(&log);
        router.on("favorites/#", move |path, _, _| {
            let log2 = Arc::clone(&log2);
            async move {
                log2.lock().unwrap().push(path);
            }
        });

        router
            .dispatch("favorites/load", Arc::new(()), store.clone())
            .await;
        router
            .dispatch("favorites/toggle", Arc::new(()), store.clone())
            .await;
        router.dispatch("jobs/load", Arc::new(()), store).await;

        assert_eq!(
            log.lock().unwrap().as_slice(),
            &["favorites/load".to_string(), "favorites/toggle".to_string()]
        );
    }

    #[tokio::test]
    async fn overlapping_handlers_run_sequentially() {
        let router = Router::new();
        let store = Arc::new(Store::new());
        let order: Arc<Mutex<Vec<&'static str>>> = Arc::new(Mutex::new(vec![]));

        let o = Arc::clone(&order);
        router.on("jobs/load", move |_, _, _| {
            let o = Arc::clone(&o);
            async move {
                // Yield so an interleaving bug would surface.
                tokio::task::yield_now().await;
                o.lock().unwrap().push("exact");
            }
        });
        let o = Arc::clone(&order);
        router.on("jobs/#", move |_, _, _| {
            let o = Arc::clone(&o);
            async move {
                o.lock().unwrap().push("subtree");
            }
        });

        router.dispatch("jobs/load", Arc::new(()), store).await;

        let order = order.lock().unwrap();
        assert_eq!(order.len(), 2);
        assert!(order.contains(&"exact"));
        assert!(order.contains(&"subtree"));
    }

    #[tokio::test]
    async fn dispatch_without_handler_is_a_no_op() {
        let router = Router::new();
        let store = Arc::new(Store::new());

        router.dispatch("unrouted/request", Arc::new(()), store.clone()).await;
        assert!(store.is_empty());
    }

    #[test]
    fn matches_and_has_handler() {
        let router = Router::new();
        router.on("favorites/toggle", |_, _, _| async {});
        router.on("favorites/+", |_, _, _| async {});

        assert_eq!(router.matches("favorites/toggle"), 2);
        assert_eq!(router.matches("favorites/load"), 1);
        assert_eq!(router.matches("jobs/load"), 0);

        assert!(router.has_handler("favorites/toggle"));
        assert!(router.has_handler("favorites/+"));
        assert!(!router.has_handler("favorites/load"));
    }
}
