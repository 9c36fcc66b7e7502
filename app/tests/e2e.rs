//! End-to-end tests: the full client core wired against the in-memory
//! backend, exercised the way a shell would drive it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use speedjobs_api::{ApiClient, JobKind, NoAuth, StaticToken, TokenSource};
use speedjobs_app::handlers::{AppContext, register_handlers};
use speedjobs_app::i18n_strings;
use speedjobs_app::request::{
    ClearSearchReq, DismissNoticeReq, EditJobFormReq, InitializeReq, LoadFavoriteReq,
    LoadFavoritesListReq, LoadJobsReq, LoadProfileReq, LogoutReq, OpenJobFormReq, RunSearchReq,
    SubmitJobFormReq, ToggleFavoriteReq,
};
use speedjobs_app::state::{
    AppRoute, AuthPhase, AuthState, FavoriteSync, FavoritesList, JobForm, JobsFeed, Notices,
    ProfilePage, SearchState,
};
use speedjobs_app::stub::{ANNA_TOKEN, BERND_TOKEN, StubBackend};
use speedjobs_flux::{Change, Flux, I18nStore};

/// Boot the client core against a fresh backend. `token == None` runs as a
/// guest. Initialization has already settled the session when this returns.
async fn start_app(token: Option<&str>) -> (Flux, StubBackend) {
    let backend = StubBackend::start().await.unwrap();
    let token_source: Arc<dyn TokenSource> = match token {
        Some(t) => Arc::new(StaticToken::new(t)),
        None => Arc::new(NoAuth),
    };
    let api = Arc::new(ApiClient::new(backend.base_url(), token_source));
    let i18n = Arc::new(I18nStore::new("de"));
    i18n_strings::register_all(&i18n);

    let flux = Flux::new();
    register_handlers(&flux, Arc::new(AppContext { api, i18n }));
    flux.emit(InitializeReq::PATH, InitializeReq).await;
    (flux, backend)
}

fn entry(flux: &Flux, profile_id: u64) -> Option<FavoriteSync> {
    flux.get_as(&FavoriteSync::path(profile_id))
}

fn notices(flux: &Flux) -> Notices {
    flux.get_as(Notices::PATH).unwrap()
}

/// Record every value the favorite entry for `profile_id` passes through.
fn record_entry(flux: &Flux, profile_id: u64) -> Arc<Mutex<Vec<FavoriteSync>>> {
    let states: Arc<Mutex<Vec<FavoriteSync>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&states);
    flux.subscribe(&FavoriteSync::path(profile_id), move |_, change| {
        if let Some(state) = change.value().and_then(|v| v.downcast_ref::<FavoriteSync>()) {
            sink.lock().unwrap().push(state.clone());
        }
    });
    states
}

async fn fill_form(flux: &Flux, pairs: &[(&str, &str)]) {
    for (field, value) in pairs {
        flux.emit(
            EditJobFormReq::PATH,
            EditJobFormReq {
                field: field.to_string(),
                value: value.to_string(),
            },
        )
        .await;
    }
}

// ── Session ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn initialize_resolves_the_session() {
    let (flux, _backend) = start_app(Some(ANNA_TOKEN)).await;

    let auth: AuthState = flux.get_as(AuthState::PATH).unwrap();
    assert_eq!(auth.phase, AuthPhase::SignedIn);
    assert_eq!(auth.user.unwrap().display_name, "Anna Gruber");
    assert_eq!(flux.get_as::<AppRoute>(AppRoute::PATH).unwrap().0, "/search");
    assert!(notices(&flux).items.is_empty());
}

#[tokio::test]
async fn initialize_without_token_lands_on_guest() {
    let (flux, _backend) = start_app(None).await;

    let auth: AuthState = flux.get_as(AuthState::PATH).unwrap();
    assert_eq!(auth.phase, AuthPhase::Guest);
    assert!(auth.user.is_none());
}

#[tokio::test]
async fn logout_clears_per_user_favorites() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    backend.set_favorite(ANNA_TOKEN, 2);
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 2 }).await;
    flux.emit(LoadFavoritesListReq::PATH, LoadFavoritesListReq).await;
    assert!(entry(&flux, 2).is_some());

    flux.emit(LogoutReq::PATH, LogoutReq).await;

    let auth: AuthState = flux.get_as(AuthState::PATH).unwrap();
    assert_eq!(auth.phase, AuthPhase::Guest);
    assert!(entry(&flux, 2).is_none());
    assert!(!flux.contains(FavoritesList::PATH));
}

// ── Favorite status loading ─────────────────────────────────────────────

#[tokio::test]
async fn load_reflects_the_server_side_status() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    backend.set_favorite(ANNA_TOKEN, 2);

    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 2 }).await;
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;

    let favorited = entry(&flux, 2).unwrap();
    assert_eq!(favorited, FavoriteSync::Favorited);
    assert!(favorited.displayed());

    let other = entry(&flux, 1).unwrap();
    assert_eq!(other, FavoriteSync::NotFavorited);
    assert!(!other.displayed());
}

#[tokio::test]
async fn loading_twice_settles_on_the_same_state() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    backend.set_favorite(ANNA_TOKEN, 3);

    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 3 }).await;
    let first = entry(&flux, 3).unwrap();
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 3 }).await;
    let second = entry(&flux, 3).unwrap();

    assert_eq!(first, FavoriteSync::Favorited);
    assert_eq!(first, second);
}

#[tokio::test]
async fn guest_load_settles_without_a_request() {
    let (flux, backend) = start_app(None).await;

    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;

    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::NotFavorited);
    assert_eq!(backend.favorite_requests(), 0);
}

#[tokio::test]
async fn failed_status_load_resets_to_unknown_and_blocks_toggling() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    backend.fail_favorite_status(true);

    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;
    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::Unknown);
    assert!(notices(&flux).has_message("error/favorite/load-failed?reason=server"));

    // Toggling an unsettled entry stays local.
    let before = backend.favorite_requests();
    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;
    assert_eq!(backend.favorite_requests(), before);
    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::Unknown);

    // A later reload recovers and unblocks the control.
    backend.fail_favorite_status(false);
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;
    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::NotFavorited);
    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;
    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::Favorited);
}

// ── Toggling ────────────────────────────────────────────────────────────

#[tokio::test]
async fn guest_toggle_is_rejected_without_network() {
    let (flux, backend) = start_app(None).await;

    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;

    assert_eq!(backend.favorite_requests(), 0);
    assert!(entry(&flux, 1).is_none());
    assert!(notices(&flux).has_message("error/favorite/auth-required"));
}

#[tokio::test]
async fn toggle_flips_optimistically_then_settles() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;

    let recorded = record_entry(&flux, 1);
    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;

    let states = recorded.lock().unwrap();
    assert_eq!(
        states.as_slice(),
        &[FavoriteSync::Toggling { target: true }, FavoriteSync::Favorited],
    );
    assert!(states.iter().all(|s| s.displayed()));
    drop(states);

    assert!(backend.has_favorite(ANNA_TOKEN, 1));
    assert!(notices(&flux).has_message("notice/favorite/added"));
}

#[tokio::test]
async fn failed_add_reverts_the_control() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;
    backend.fail_mutations(true);

    let recorded = record_entry(&flux, 1);
    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;

    let states = recorded.lock().unwrap();
    assert_eq!(
        states.as_slice(),
        &[
            FavoriteSync::Toggling { target: true },
            FavoriteSync::NotFavorited,
        ],
    );
    drop(states);

    assert!(!entry(&flux, 1).unwrap().displayed());
    assert!(!backend.has_favorite(ANNA_TOKEN, 1));
    assert!(notices(&flux).has_message("error/favorite/add-failed?reason=server"));
}

#[tokio::test]
async fn removal_settles_and_refreshes_the_list() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    backend.set_favorite(ANNA_TOKEN, 2);
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 2 }).await;
    flux.emit(LoadFavoritesListReq::PATH, LoadFavoritesListReq).await;
    assert!(flux.get_as::<FavoritesList>(FavoritesList::PATH).unwrap().contains(2));

    let stale_seen = Arc::new(AtomicBool::new(false));
    let stale_sink = Arc::clone(&stale_seen);
    flux.subscribe(FavoritesList::PATH, move |_, change| {
        if matches!(change, Change::Invalidated) {
            stale_sink.store(true, Ordering::SeqCst);
        }
    });

    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 2 }).await;

    assert_eq!(entry(&flux, 2).unwrap(), FavoriteSync::NotFavorited);
    assert!(!backend.has_favorite(ANNA_TOKEN, 2));
    assert!(stale_seen.load(Ordering::SeqCst));

    let list: FavoritesList = flux.get_as(FavoritesList::PATH).unwrap();
    assert!(!list.contains(2));
    assert!(!list.stale);
    assert!(notices(&flux).has_message("notice/favorite/removed"));
}

#[tokio::test]
async fn pending_toggle_blocks_a_second_one() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;

    // Park the entry mid-mutation, as if a request were still out.
    flux.store()
        .set(&FavoriteSync::path(1), FavoriteSync::Toggling { target: true });
    let before = backend.favorite_requests();

    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;

    assert_eq!(backend.favorite_requests(), before);
    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::Toggling { target: true });
}

#[tokio::test]
async fn concurrent_toggles_collapse_to_one_request() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;
    let before = backend.favorite_requests();

    // On the single-threaded test runtime the first emit reaches its HTTP
    // await before the second starts, which then sees `Toggling` and bows
    // out.
    let first = flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 });
    let second = flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 });
    tokio::join!(first, second);

    assert_eq!(backend.favorite_requests(), before + 1);
    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::Favorited);
}

#[tokio::test]
async fn users_see_only_their_own_favorites() {
    let (flux, backend) = start_app(Some(BERND_TOKEN)).await;
    backend.set_favorite(ANNA_TOKEN, 1);

    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;
    assert_eq!(entry(&flux, 1).unwrap(), FavoriteSync::NotFavorited);

    flux.emit(LoadFavoritesListReq::PATH, LoadFavoritesListReq).await;
    assert!(flux.get_as::<FavoritesList>(FavoritesList::PATH).unwrap().items.is_empty());
}

#[tokio::test]
async fn added_favorite_shows_up_in_the_list() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(LoadFavoriteReq::PATH, LoadFavoriteReq { profile_id: 1 }).await;
    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;
    flux.emit(LoadFavoritesListReq::PATH, LoadFavoritesListReq).await;

    let list: FavoritesList = flux.get_as(FavoritesList::PATH).unwrap();
    assert_eq!(list.items.len(), 1);
    assert_eq!(list.items[0].name, "Huber Installationen");
    assert!(backend.has_favorite(ANNA_TOKEN, 1));
}

// ── Search and profile pages ────────────────────────────────────────────

#[tokio::test]
async fn search_filters_providers() {
    let (flux, _backend) = start_app(None).await;

    flux.emit(
        RunSearchReq::PATH,
        RunSearchReq {
            query: "elektro".to_string(),
            category: None,
            region: None,
        },
    )
    .await;
    let state: SearchState = flux.get_as(SearchState::PATH).unwrap();
    assert_eq!(state.results.len(), 1);
    assert_eq!(state.results[0].name, "Elektro Steiner");
    assert!(!state.busy);

    flux.emit(
        RunSearchReq::PATH,
        RunSearchReq {
            query: String::new(),
            category: None,
            region: Some("wien".to_string()),
        },
    )
    .await;
    let state: SearchState = flux.get_as(SearchState::PATH).unwrap();
    assert_eq!(state.results.len(), 2);
}

#[tokio::test]
async fn empty_search_is_rejected_locally() {
    let (flux, _backend) = start_app(None).await;

    flux.emit(
        RunSearchReq::PATH,
        RunSearchReq {
            query: "   ".to_string(),
            category: None,
            region: None,
        },
    )
    .await;

    let state: SearchState = flux.get_as(SearchState::PATH).unwrap();
    assert_eq!(state.error.as_deref(), Some("error/search/empty"));
    assert!(state.results.is_empty());

    flux.emit(ClearSearchReq::PATH, ClearSearchReq).await;
    let state: SearchState = flux.get_as(SearchState::PATH).unwrap();
    assert!(state.error.is_none());
}

#[tokio::test]
async fn profile_load_seeds_page_route_and_favorite_entry() {
    let (flux, _backend) = start_app(Some(ANNA_TOKEN)).await;

    flux.emit(LoadProfileReq::PATH, LoadProfileReq { profile_id: 4 }).await;

    let page: ProfilePage = flux.get_as(&ProfilePage::path(4)).unwrap();
    assert_eq!(page.profile.unwrap().name, "Gartenprofi Wagner");
    assert_eq!(flux.get_as::<AppRoute>(AppRoute::PATH).unwrap().0, "/profiles/4");
    assert_eq!(entry(&flux, 4).unwrap(), FavoriteSync::NotFavorited);
}

#[tokio::test]
async fn missing_profile_reports_the_error_code() {
    let (flux, _backend) = start_app(None).await;

    flux.emit(LoadProfileReq::PATH, LoadProfileReq { profile_id: 99 }).await;

    let page: ProfilePage = flux.get_as(&ProfilePage::path(99)).unwrap();
    assert!(page.profile.is_none());
    assert_eq!(page.error.as_deref(), Some("server"));
    // No page, no favorite entry to seed.
    assert!(entry(&flux, 99).is_none());
}

// ── Jobs ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn job_form_validates_before_posting() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(LoadJobsReq::PATH, LoadJobsReq).await;
    assert_eq!(flux.get_as::<JobsFeed>(JobsFeed::PATH).unwrap().items.len(), 2);

    flux.emit(
        OpenJobFormReq::PATH,
        OpenJobFormReq {
            kind: JobKind::CustomerRequest,
        },
    )
    .await;
    fill_form(&flux, &[("title", "Zaun streichen")]).await;
    flux.emit(SubmitJobFormReq::PATH, SubmitJobFormReq).await;

    let form: JobForm = flux.get_as(JobForm::PATH).unwrap();
    assert_eq!(form.errors.len(), 3);
    assert_eq!(form.errors.get("description").map(String::as_str), Some("error/form/required"));
    assert_eq!(backend.job_count(), 2);

    fill_form(
        &flux,
        &[
            ("description", "Holzzaun, ca. 20 Meter, Farbe vorhanden"),
            ("category", "maler"),
            ("region", "linz"),
        ],
    )
    .await;
    flux.emit(SubmitJobFormReq::PATH, SubmitJobFormReq).await;

    assert_eq!(backend.job_count(), 3);
    let feed: JobsFeed = flux.get_as(JobsFeed::PATH).unwrap();
    assert_eq!(feed.items.len(), 3);
    assert_eq!(feed.items[0].title, "Zaun streichen");
    assert!(notices(&flux).has_message("notice/job/posted"));

    // The form resets for the next listing.
    let form: JobForm = flux.get_as(JobForm::PATH).unwrap();
    assert!(form.values.is_empty());
    assert!(form.errors.is_empty());
}

#[tokio::test]
async fn provider_offer_posts_without_description() {
    let (flux, backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(
        OpenJobFormReq::PATH,
        OpenJobFormReq {
            kind: JobKind::ProviderOffer,
        },
    )
    .await;
    fill_form(
        &flux,
        &[
            ("title", "Installateur mit freien Terminen"),
            ("category", "sanitaer"),
            ("region", "wien"),
        ],
    )
    .await;
    flux.emit(SubmitJobFormReq::PATH, SubmitJobFormReq).await;

    assert_eq!(backend.job_count(), 3);
    assert!(notices(&flux).has_message("notice/job/posted"));
}

#[tokio::test]
async fn guest_job_post_is_rejected_locally() {
    let (flux, backend) = start_app(None).await;
    flux.emit(
        OpenJobFormReq::PATH,
        OpenJobFormReq {
            kind: JobKind::CustomerRequest,
        },
    )
    .await;
    fill_form(
        &flux,
        &[
            ("title", "Regal montieren"),
            ("description", "Zwei Regale, Material vorhanden"),
            ("category", "montage"),
            ("region", "wien"),
        ],
    )
    .await;
    flux.emit(SubmitJobFormReq::PATH, SubmitJobFormReq).await;

    assert_eq!(backend.job_count(), 2);
    assert!(notices(&flux).has_message("error/job/auth-required"));
}

#[tokio::test]
async fn unknown_form_fields_are_dropped() {
    let (flux, _backend) = start_app(Some(ANNA_TOKEN)).await;
    flux.emit(
        OpenJobFormReq::PATH,
        OpenJobFormReq {
            kind: JobKind::CustomerRequest,
        },
    )
    .await;
    fill_form(&flux, &[("budget", "500"), ("title", "Zaun streichen")]).await;

    let form: JobForm = flux.get_as(JobForm::PATH).unwrap();
    assert_eq!(form.value("title"), "Zaun streichen");
    assert!(!form.values.contains_key("budget"));
}

// ── Notices ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn notices_are_dismissed_by_id() {
    let (flux, _backend) = start_app(None).await;
    flux.emit(ToggleFavoriteReq::PATH, ToggleFavoriteReq { profile_id: 1 }).await;

    let queue = notices(&flux);
    assert_eq!(queue.items.len(), 1);
    let id = queue.items[0].id;

    flux.emit(DismissNoticeReq::PATH, DismissNoticeReq { id }).await;
    assert!(notices(&flux).items.is_empty());
}
