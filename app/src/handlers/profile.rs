//! Profile page handlers.

use speedjobs_api::ApiClient;
use speedjobs_flux::Store;
use tracing::warn;

use crate::request::LoadProfileReq;
use crate::state::{AppRoute, ProfilePage};

/// Handle `profiles/load`. On success the route follows the loaded page;
/// the wiring seeds the profile's favorite entry afterwards.
pub async fn handle_load(req: &LoadProfileReq, store: &Store, api: &ApiClient) {
    let path = ProfilePage::path(req.profile_id);
    store.set(&path, ProfilePage::loading());

    match api.profile(req.profile_id).await {
        Ok(profile) => {
            store.set(&path, ProfilePage::loaded(profile));
            store.set(
                AppRoute::PATH,
                AppRoute(format!("/profiles/{}", req.profile_id)),
            );
        }
        Err(err) => {
            warn!(profile_id = req.profile_id, error = %err, "profile fetch failed");
            store.set(&path, ProfilePage::failed(err.code()));
        }
    }
}

/// Whether the page at `profiles/pages/{id}` holds a loaded profile.
pub fn page_loaded(store: &Store, profile_id: u64) -> bool {
    store
        .get_as::<ProfilePage>(&ProfilePage::path(profile_id))
        .map(|page| page.profile.is_some())
        .unwrap_or(false)
}
