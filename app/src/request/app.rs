//! App lifecycle requests.

use speedjobs_flux_derive::request;

/// Seed the store and resolve the session. Emitted once at startup.
#[request("app/initialize")]
pub struct InitializeReq;

#[request("app/set-locale")]
pub struct SetLocaleReq {
    pub locale: String,
}
