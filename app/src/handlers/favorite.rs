//! Favorite handlers.
//!
//! The toggle is optimistic: the entry flips to `Toggling { target }` before
//! the request leaves, so the control renders the requested state while the
//! server works. Success settles on the target; failure reverts to the
//! settled state the toggle started from.

use speedjobs_api::ApiClient;
use speedjobs_flux::Store;
use tracing::{debug, warn};

use super::helpers;
use crate::request::{LoadFavoriteReq, ToggleFavoriteReq};
use crate::state::{FavoriteSync, FavoritesList, NoticeLevel};

/// Handle `favorites/load`: settle the entry for one profile.
pub async fn handle_load(req: &LoadFavoriteReq, store: &Store, api: &ApiClient) {
    let path = FavoriteSync::path(req.profile_id);

    // Guests have no favorites; settle without a request.
    if !helpers::is_signed_in(store) {
        store.set(&path, FavoriteSync::NotFavorited);
        return;
    }

    store.set(&path, FavoriteSync::Loading);
    let result = api.favorite_status(req.profile_id).await;
    // Logout may tear the entry down while the request is out; a late
    // result must not resurrect it.
    if !store.contains(&path) {
        debug!(profile_id = req.profile_id, "entry removed mid-load, result dropped");
        return;
    }
    match result {
        Ok(status) => {
            store.set(&path, FavoriteSync::settled(status.is_favorite));
        }
        Err(err) => {
            warn!(profile_id = req.profile_id, error = %err, "favorite status fetch failed");
            store.set(&path, FavoriteSync::Unknown);
            helpers::push_notice(
                store,
                NoticeLevel::Error,
                format!("error/favorite/load-failed?reason={}", err.code()),
            );
        }
    }
}

/// Handle `favorites/toggle`: flip one profile's flag, optimistically.
pub async fn handle_toggle(req: &ToggleFavoriteReq, store: &Store, api: &ApiClient) {
    let path = FavoriteSync::path(req.profile_id);

    // Favoriting requires a session. Nothing leaves the client for guests.
    if !helpers::is_signed_in(store) {
        helpers::push_notice(store, NoticeLevel::Error, "error/favorite/auth-required");
        return;
    }

    let current = store
        .get_as::<FavoriteSync>(&path)
        .unwrap_or(FavoriteSync::Unknown);
    let target = match current {
        FavoriteSync::NotFavorited => true,
        FavoriteSync::Favorited => false,
        FavoriteSync::Loading | FavoriteSync::Toggling { .. } => {
            debug!(profile_id = req.profile_id, "toggle ignored, request already in flight");
            return;
        }
        FavoriteSync::Unknown => {
            debug!(profile_id = req.profile_id, "toggle ignored, status never settled");
            return;
        }
    };

    store.set(&path, FavoriteSync::Toggling { target });

    let result = if target {
        api.add_favorite(req.profile_id).await
    } else {
        api.remove_favorite(req.profile_id).await
    };

    if !store.contains(&path) {
        debug!(profile_id = req.profile_id, "entry removed mid-toggle, result dropped");
        return;
    }

    match result {
        Ok(()) => {
            store.set(&path, FavoriteSync::settled(target));
            store.invalidate(FavoritesList::PATH);
            refresh_list(store, api).await;
            let message = if target {
                "notice/favorite/added"
            } else {
                "notice/favorite/removed"
            };
            helpers::push_notice(store, NoticeLevel::Success, message);
        }
        Err(err) => {
            warn!(profile_id = req.profile_id, error = %err, "favorite mutation failed");
            store.set(&path, FavoriteSync::settled(!target));
            let message = if target {
                "error/favorite/add-failed"
            } else {
                "error/favorite/remove-failed"
            };
            helpers::push_notice(
                store,
                NoticeLevel::Error,
                format!("{}?reason={}", message, err.code()),
            );
        }
    }
}

/// Handle `favorites/list-load`: fetch the favorites page data.
pub async fn handle_list_load(store: &Store, api: &ApiClient) {
    if !helpers::is_signed_in(store) {
        store.set(FavoritesList::PATH, FavoritesList::empty());
        return;
    }

    let prev = store
        .get_as::<FavoritesList>(FavoritesList::PATH)
        .unwrap_or_else(FavoritesList::empty);
    store.set(
        FavoritesList::PATH,
        FavoritesList {
            busy: true,
            stale: false,
            error: None,
            items: prev.items,
        },
    );

    match api.favorites().await {
        Ok(items) => {
            store.set(FavoritesList::PATH, FavoritesList::loaded(items));
        }
        Err(err) => {
            warn!(error = %err, "favorites list fetch failed");
            store.update::<FavoritesList, _>(FavoritesList::PATH, |list| {
                list.busy = false;
                list.error = Some(err.code().to_string());
            });
            helpers::push_notice(
                store,
                NoticeLevel::Error,
                format!("error/favorite/list-failed?reason={}", err.code()),
            );
        }
    }
}

/// Refetch the list in place after a mutation, when some view holds one.
/// A failed refetch leaves the previous items but marks them stale.
async fn refresh_list(store: &Store, api: &ApiClient) {
    if !store.contains(FavoritesList::PATH) {
        return;
    }
    match api.favorites().await {
        Ok(items) => {
            store.set(FavoritesList::PATH, FavoritesList::loaded(items));
        }
        Err(err) => {
            debug!(error = %err, "favorites list refresh failed, keeping stale items");
            store.update::<FavoritesList, _>(FavoritesList::PATH, |list| {
                list.stale = true;
                list.error = Some(err.code().to_string());
            });
        }
    }
}
