use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};

use crate::pattern::PatternTrie;
use crate::value::{SubscriptionId, Value};

/// What a subscriber is being told about a path.
#[derive(Debug, Clone)]
pub enum Change {
    /// The path now holds this value.
    Set(Value),
    /// The value at the path is stale; holders should refetch. The stored
    /// value itself is untouched.
    Invalidated,
}

impl Change {
    /// The new value for a `Set`, `None` for an invalidation.
    pub fn value(&self) -> Option<&Value> {
        match self {
            Change::Set(v) => Some(v),
            Change::Invalidated => None,
        }
    }
}

/// Callback type for change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &Change) + Send + Sync>;

/// Path-addressed state store with trie-routed subscriptions.
///
/// - `set(path, value)` stores a value and notifies matching subscribers.
/// - `get(path)` / `get_as::<T>(path)` read the current value.
/// - `update::<T>(path, f)` applies a read-modify-write.
/// - `invalidate(path)` tells subscribers the path is stale without
///   touching the value.
/// - `scan(prefix)` lists direct and nested children, ordered.
///
/// Values live in a `BTreeMap` so prefix scans come out ordered.
pub struct Store {
    /// Current values, keyed by exact path.
    values: RwLock<BTreeMap<String, Value>>,
    /// Subscription patterns to handler entries.
    subscribers: PatternTrie<SubscriberEntry>,
    /// Monotonic subscription id counter.
    next_id: AtomicU64,
}

#[derive(Clone)]
struct SubscriberEntry {
    id: SubscriptionId,
    handler: ChangeHandler,
}

impl Store {
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            subscribers: PatternTrie::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Store a typed value at `path` and notify matching subscribers.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, Value::new(value));
    }

    /// Store a pre-wrapped [`Value`] at `path` and notify matching
    /// subscribers. Notification happens after the write lock is released.
    pub fn set_value(&self, path: &str, value: Value) {
        {
            let mut values = self.values.write().unwrap();
            values.insert(path.to_string(), value.clone());
        }
        tracing::trace!(path, "state set");
        let entries = self.subscribers.matches(path);
        if !entries.is_empty() {
            let change = Change::Set(value);
            for entry in entries {
                (entry.handler)(path, &change);
            }
        }
    }

    /// Current value at `path` (Arc clone, no data copy).
    pub fn get(&self, path: &str) -> Option<Value> {
        let values = self.values.read().unwrap();
        values.get(path).cloned()
    }

    /// Clone of the concrete state at `path`, or `None` when the path is
    /// unset or holds a different type.
    pub fn get_as<T: Any + Clone>(&self, path: &str) -> Option<T> {
        let values = self.values.read().unwrap();
        values.get(path).and_then(|v| v.downcast_ref::<T>().cloned())
    }

    /// Read-modify-write of the typed state at `path`.
    ///
    /// Clones the current `T`, applies `f`, stores the result as a fresh
    /// value, and notifies subscribers like `set`. Returns `false` without
    /// side effects when the path is unset or holds a different type.
    pub fn update<T, F>(&self, path: &str, f: F) -> bool
    where
        T: Any + Send + Sync + Clone,
        F: FnOnce(&mut T),
    {
        let next = {
            let values = self.values.read().unwrap();
            let Some(current) = values.get(path) else {
                return false;
            };
            let Some(state) = current.downcast_ref::<T>() else {
                return false;
            };
            let mut state = state.clone();
            f(&mut state);
            Value::new(state)
        };
        self.set_value(path, next);
        true
    }

    /// Delete the value at `path` without notifying anyone. Teardown is
    /// silent; views going away do not produce renders.
    pub fn remove(&self, path: &str) -> Option<Value> {
        let mut values = self.values.write().unwrap();
        values.remove(path)
    }

    /// Tell subscribers whose pattern matches `path` that whatever they
    /// hold for it is stale. The stored value, if any, is untouched; paths
    /// with no stored value still produce the notification.
    pub fn invalidate(&self, path: &str) {
        tracing::debug!(path, "state invalidated");
        let entries = self.subscribers.matches(path);
        if !entries.is_empty() {
            let change = Change::Invalidated;
            for entry in entries {
                (entry.handler)(path, &change);
            }
        }
    }

    /// All entries strictly below `{prefix}/`, ordered by path. The exact
    /// `prefix` entry itself is not included.
    pub fn scan(&self, prefix: &str) -> Vec<(String, Value)> {
        let values = self.values.read().unwrap();
        let scan_prefix = format!("{}/", prefix);
        values
            .range(scan_prefix.clone()..)
            .take_while(|(k, _)| k.starts_with(&scan_prefix))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap();
        values.contains_key(path)
    }

    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap();
        values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Register a change handler for every path covered by `pattern`.
    ///
    /// Handlers run synchronously on the thread that mutated the store and
    /// must not block.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &Change) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let entry = SubscriberEntry {
            id,
            handler: Arc::new(handler),
        };
        self.subscribers.insert(pattern, entry);
        id
    }

    /// Remove the subscription registered under `pattern` with this id.
    pub fn unsubscribe(&self, pattern: &str, id: SubscriptionId) {
        self.subscribers.remove(pattern, |entry| entry.id == id);
    }

    /// Every path/value pair, ordered by path.
    pub fn snapshot(&self) -> Vec<(String, Value)> {
        let values = self.values.read().unwrap();
        values.iter().map(|(k, v)| (k.clone(), v.clone())).collect()
    }

    /// Every stored path, ordered.
    pub fn paths(&self) -> Vec<String> {
        let values = self.values.read().unwrap();
        values.keys().cloned().collect()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
