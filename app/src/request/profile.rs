//! Profile page requests.

use speedjobs_flux_derive::request;

/// Load a provider profile and seed its favorite entry.
#[request("profiles/load")]
pub struct LoadProfileReq {
    pub profile_id: u64,
}
