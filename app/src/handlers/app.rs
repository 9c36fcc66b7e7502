//! App lifecycle handlers.

use speedjobs_flux::{I18nStore, Store};
use tracing::{debug, info};

use crate::request::SetLocaleReq;
use crate::state::{AppLocale, AppRoute, AuthState, Notices, SearchState};

/// Handle `app/initialize`: seed the store with empty display state.
/// Session resolution follows in the wiring.
pub async fn handle_initialize(store: &Store) {
    store.set(AuthState::PATH, AuthState::unknown());
    store.set(SearchState::PATH, SearchState::empty());
    store.set(Notices::PATH, Notices::empty());
    store.set(AppRoute::PATH, AppRoute("/search".to_string()));
    info!("store seeded");
}

/// Handle `app/set-locale`: switch the i18n store and mirror the tag into
/// display state.
pub async fn handle_set_locale(req: &SetLocaleReq, store: &Store, i18n: &I18nStore) {
    i18n.set_locale(&req.locale);
    store.set(AppLocale::PATH, AppLocale(req.locale.clone()));
    debug!(locale = %req.locale, "locale switched");
}
