//! Favorite requests.

use speedjobs_flux_derive::request;

/// Fetch the favorite status for one profile and settle its entry.
#[request("favorites/load")]
pub struct LoadFavoriteReq {
    pub profile_id: u64,
}

/// Flip the favorite flag for one profile, optimistically.
#[request("favorites/toggle")]
pub struct ToggleFavoriteReq {
    pub profile_id: u64,
}

/// Fetch the signed-in user's favorites into `favorites/list`.
#[request("favorites/list-load")]
pub struct LoadFavoritesListReq;
