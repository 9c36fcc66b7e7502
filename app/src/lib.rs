//! Client application core for the speedjobs marketplace.
//!
//! State lives in a path-addressed store; shells emit typed requests and
//! subscribe to the paths they render. Four layers:
//!
//! - [`state`] and [`request`] define the store paths and request types.
//! - [`handlers`] connect requests to the marketplace API.
//! - [`form`] holds the field presets for the job posting form.
//! - [`i18n_strings`] carries the German and English catalogs.
//!
//! [`stub`] serves a seeded in-memory backend for tests and demos.
//!
//! # Example
//!
//! ```ignore
//! let flux = Flux::new();
//! register_handlers(&flux, ctx);
//!
//! flux.emit(InitializeReq::PATH, InitializeReq).await;
//! flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 7 }).await;
//!
//! let entry: FavoriteSync = flux.get_as(&FavoriteSync::path(7)).unwrap();
//! assert!(entry.displayed());
//! ```

pub mod form;
pub mod handlers;
pub mod i18n_strings;
pub mod request;
pub mod state;
pub mod stub;
