//! State types and the store paths they live under.
//!
//! Every type here carries a `PATH` constant from `#[state(...)]`. Types
//! addressed per entity (profile pages, favorite entries) add a `path()`
//! helper that appends the entity id.

mod auth;
mod favorite;
mod job;
mod notice;
mod profile;
mod route;
mod search;

pub use auth::{AuthPhase, AuthState};
pub use favorite::{FavoriteSync, FavoritesList};
pub use job::{JobForm, JobsFeed};
pub use notice::{Notice, NoticeLevel, Notices};
pub use profile::ProfilePage;
pub use route::{AppLocale, AppRoute};
pub use search::SearchState;
