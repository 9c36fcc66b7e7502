//! Session handlers.

use speedjobs_api::ApiClient;
use speedjobs_flux::Store;
use tracing::{info, warn};

use crate::state::{AuthPhase, AuthState};

/// Handle `auth/load`: resolve the server session into `auth/state`.
pub async fn handle_session_load(store: &Store, api: &ApiClient) {
    let prev = store
        .get_as::<AuthState>(AuthState::PATH)
        .unwrap_or_else(AuthState::unknown);
    store.set(AuthState::PATH, AuthState { busy: true, ..prev });

    match api.session().await {
        Ok(user) => {
            info!(user_id = user.id, "session resolved");
            store.set(AuthState::PATH, AuthState::signed_in(user));
        }
        Err(err) if err.is_unauthenticated() => {
            store.set(AuthState::PATH, AuthState::guest());
        }
        Err(err) => {
            warn!(error = %err, "session check failed");
            store.set(
                AuthState::PATH,
                AuthState {
                    phase: AuthPhase::Unknown,
                    user: None,
                    busy: false,
                    error: Some(err.code().to_string()),
                },
            );
        }
    }
}

/// Handle `auth/logout`: drop to guest and clear per-user state.
pub async fn handle_logout(store: &Store) {
    store.set(AuthState::PATH, AuthState::guest());
    // Favorites belong to the session that loaded them.
    for (path, _) in store.scan("favorites") {
        store.remove(&path);
    }
    info!("signed out");
}
