//! Request types dispatched through the router.
//!
//! Each type carries its dispatch path as `PATH` from `#[request(...)]`;
//! shells emit them with `flux.emit(LoadFavoriteReq::PATH, req)`.

mod app;
mod auth;
mod favorite;
mod job;
mod notice;
mod profile;
mod search;

pub use app::{InitializeReq, SetLocaleReq};
pub use auth::{LogoutReq, SessionLoadReq};
pub use favorite::{LoadFavoriteReq, LoadFavoritesListReq, ToggleFavoriteReq};
pub use job::{EditJobFormReq, LoadJobsReq, OpenJobFormReq, SubmitJobFormReq};
pub use notice::DismissNoticeReq;
pub use profile::LoadProfileReq;
pub use search::{ClearSearchReq, RunSearchReq};
