//! HTTP client for the speedjobs marketplace backend.
//!
//! Thin typed passthrough: one method per consumed REST endpoint, no
//! caching and no retries. Authentication is a pluggable [`TokenSource`]
//! so the same client serves anonymous browsing and signed-in sessions.
//!
//! # Usage
//!
//! ```ignore
//! use speedjobs_api::{ApiClient, StaticToken};
//!
//! let client = ApiClient::new("https://api.speedjobs.at", Arc::new(StaticToken::new(token)));
//! let status = client.favorite_status(42).await?;
//! ```

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::{NoAuth, StaticToken, TokenSource};
pub use client::ApiClient;
pub use error::{ApiError, error_code};
pub use types::{FavoriteStatus, JobDraft, JobKind, JobListing, Profile, ProfileQuery, SessionUser};
