//! Flux — path-addressed state engine for the speedjobs client.
//!
//! Rust owns the client state and the logic that mutates it; platform
//! shells (web, mobile) render state and emit typed requests. Data flows
//! one way: request in, handler runs, state changes, subscribers render.
//!
//! # Three primitives
//!
//! - `get(path)` — read state, Arc zero-copy
//! - `emit(path, payload)` — send a request, trie-routed to handlers
//! - `subscribe(pattern)` — observe state changes and invalidations
//!
//! # Path addressing
//!
//! All state and requests share one flat `/`-separated namespace:
//! - Global: `auth/state`, `app/route`
//! - Page: `search/state`, `jobs/feed`
//! - Items: `favorites/items/{id}`, `profiles/pages/{id}`
//!
//! # Pattern matching
//!
//! Subscriptions, request routing and i18n lookup use MQTT-style
//! wildcards: exact (`jobs/feed`), single segment (`favorites/items/+`),
//! subtree (`favorites/#`), everything (`#`).
//!
//! # Example
//!
//! ```ignore
//! use speedjobs_flux::Flux;
//!
//! let flux = Flux::new();
//!
//! flux.on("app/initialize", |_, _, store| async move {
//!     store.set("app/route", "/search".to_string());
//! });
//!
//! flux.subscribe("#", |path, _| {
//!     println!("state changed: {path}");
//! });
//!
//! flux.emit("app/initialize", ()).await;
//! ```

pub mod engine;
pub mod i18n;
pub mod pattern;
pub mod router;
pub mod store;
pub mod value;

// Re-export primary types at crate root.
pub use engine::Flux;
pub use i18n::{I18nHandler, I18nStore, QueryParams};
pub use pattern::PatternTrie;
pub use router::{BoxFuture, Payload, Router};
pub use store::{Change, ChangeHandler, Store};
pub use value::{SubscriptionId, Value};
