//! speedjobs-appd: scripted walk through the client core against the
//! seeded stub backend. Run with `RUST_LOG=debug` to watch every state
//! transition.

use std::sync::Arc;

use anyhow::{Context, Result};
use speedjobs_api::{ApiClient, JobKind, StaticToken};
use speedjobs_app::handlers::{AppContext, register_handlers};
use speedjobs_app::i18n_strings;
use speedjobs_app::request::{
    EditJobFormReq, InitializeReq, LoadFavoritesListReq, LoadJobsReq, LoadProfileReq, LogoutReq,
    OpenJobFormReq, RunSearchReq, SetLocaleReq, SubmitJobFormReq, ToggleFavoriteReq,
};
use speedjobs_app::state::{AuthState, FavoriteSync, FavoritesList, JobsFeed, Notices, SearchState};
use speedjobs_app::stub::{ANNA_TOKEN, StubBackend};
use speedjobs_flux::{Change, Flux, I18nStore};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let backend = StubBackend::start().await?;
    let i18n = Arc::new(I18nStore::new("de"));
    i18n_strings::register_all(&i18n);

    let api = Arc::new(ApiClient::new(
        backend.base_url(),
        Arc::new(StaticToken::new(ANNA_TOKEN)),
    ));
    let flux = Flux::new();
    register_handlers(
        &flux,
        Arc::new(AppContext {
            api,
            i18n: Arc::clone(&i18n),
        }),
    );

    // Watch what a favorite control would render.
    flux.subscribe("favorites/items/+", |path, change| {
        if let Some(entry) = change.value().and_then(|v| v.downcast_ref::<FavoriteSync>()) {
            info!(
                path,
                displayed = entry.displayed(),
                pending = entry.pending(),
                "favorite entry"
            );
        }
    });
    flux.subscribe("favorites/list", |_, change| {
        if matches!(change, Change::Invalidated) {
            info!("favorites list marked stale");
        }
    });

    flux.emit(InitializeReq::PATH, InitializeReq).await;
    let auth: AuthState = flux.get_as(AuthState::PATH).context("auth state missing")?;
    let name = auth
        .user
        .as_ref()
        .map(|u| u.display_name.clone())
        .unwrap_or_default();
    info!("{}", i18n.get(&format!("format/greeting?name={}", name)));

    flux.emit(
        RunSearchReq::PATH,
        RunSearchReq {
            query: "installateur".to_string(),
            category: None,
            region: None,
        },
    )
    .await;
    let search: SearchState = flux.get_as(SearchState::PATH).context("search state missing")?;
    info!(
        "{}",
        i18n.get(&format!("format/result-count?count={}", search.results.len()))
    );
    let profile_id = search
        .results
        .first()
        .map(|p| p.id)
        .context("no providers found")?;

    flux.emit(LoadProfileReq::PATH, LoadProfileReq { profile_id }).await;
    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id }).await;
    flux.emit(LoadFavoritesListReq::PATH, LoadFavoritesListReq).await;
    let list: FavoritesList = flux
        .get_as(FavoritesList::PATH)
        .context("favorites list missing")?;
    info!(count = list.items.len(), "favorites loaded");

    flux.emit(LoadJobsReq::PATH, LoadJobsReq).await;
    flux.emit(
        OpenJobFormReq::PATH,
        OpenJobFormReq {
            kind: JobKind::CustomerRequest,
        },
    )
    .await;
    for (field, value) in [
        ("title", "Garten winterfest machen"),
        ("description", "Hecke schneiden und Beete abdecken, ca. 200 m2"),
        ("category", "garten"),
        ("region", "wien"),
    ] {
        flux.emit(
            EditJobFormReq::PATH,
            EditJobFormReq {
                field: field.to_string(),
                value: value.to_string(),
            },
        )
        .await;
    }
    flux.emit(SubmitJobFormReq::PATH, SubmitJobFormReq).await;
    let feed: JobsFeed = flux.get_as(JobsFeed::PATH).context("job feed missing")?;
    info!(count = feed.items.len(), "job feed after posting");

    // Replay the queued notices in English.
    flux.emit(
        SetLocaleReq::PATH,
        SetLocaleReq {
            locale: "en".to_string(),
        },
    )
    .await;
    if let Some(queue) = flux.get_as::<Notices>(Notices::PATH) {
        for notice in &queue.items {
            info!(level = ?notice.level, "{}", i18n.get(&notice.message));
        }
    }

    flux.emit(LogoutReq::PATH, LogoutReq).await;
    info!(remaining = flux.scan("favorites").len(), "signed out");
    Ok(())
}
