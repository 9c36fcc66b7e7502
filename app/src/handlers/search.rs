//! Provider search handlers.

use speedjobs_api::{ApiClient, ProfileQuery};
use speedjobs_flux::Store;
use tracing::warn;

use super::helpers;
use crate::request::RunSearchReq;
use crate::state::{NoticeLevel, SearchState};

/// Handle `search/run`.
pub async fn handle_run(req: &RunSearchReq, store: &Store, api: &ApiClient) {
    let query = req.query.trim().to_string();
    if query.is_empty() && req.category.is_none() && req.region.is_none() {
        store.set(
            SearchState::PATH,
            SearchState {
                query,
                category: None,
                region: None,
                results: Vec::new(),
                busy: false,
                error: Some("error/search/empty".to_string()),
            },
        );
        return;
    }

    let prev = store
        .get_as::<SearchState>(SearchState::PATH)
        .unwrap_or_else(SearchState::empty);
    store.set(
        SearchState::PATH,
        SearchState {
            query: query.clone(),
            category: req.category.clone(),
            region: req.region.clone(),
            // Keep the old results on screen while the new ones load.
            results: prev.results,
            busy: true,
            error: None,
        },
    );

    let filter = ProfileQuery {
        query: (!query.is_empty()).then_some(query),
        category: req.category.clone(),
        region: req.region.clone(),
    };
    match api.search_profiles(&filter).await {
        Ok(results) => {
            store.update::<SearchState, _>(SearchState::PATH, |state| {
                state.results = results;
                state.busy = false;
            });
        }
        Err(err) => {
            warn!(error = %err, "provider search failed");
            store.update::<SearchState, _>(SearchState::PATH, |state| {
                state.results = Vec::new();
                state.busy = false;
                state.error = Some(err.code().to_string());
            });
            helpers::push_notice(
                store,
                NoticeLevel::Error,
                format!("error/search/failed?reason={}", err.code()),
            );
        }
    }
}

/// Handle `search/clear`.
pub async fn handle_clear(store: &Store) {
    store.set(SearchState::PATH, SearchState::empty());
}
