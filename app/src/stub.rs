//! In-memory stand-in for the marketplace backend.
//!
//! Serves the same wire surface as the product API from seeded data, for
//! the demo binary and the end-to-end tests. Failure switches let tests
//! force server errors without tearing the process down.

use std::collections::{HashMap, HashSet};
use std::io;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Deserialize;
use speedjobs_api::{FavoriteStatus, JobDraft, JobKind, JobListing, Profile, SessionUser};
use tokio::net::TcpListener;
use tracing::info;

/// Session tokens of the seeded demo accounts.
pub const ANNA_TOKEN: &str = "demo-anna";
pub const BERND_TOKEN: &str = "demo-bernd";

struct BackendState {
    profiles: Vec<Profile>,
    users: HashMap<String, SessionUser>,
    favorites: Mutex<HashMap<String, HashSet<u64>>>,
    jobs: Mutex<Vec<JobListing>>,
    next_job_id: AtomicU64,
    fail_mutations: AtomicBool,
    fail_favorite_status: AtomicBool,
    favorite_requests: AtomicU64,
}

impl BackendState {
    fn seeded() -> Self {
        let profile = |id, name: &str, trade: &str, category: &str, region: &str, rating, favorite_count| Profile {
            id,
            name: name.to_string(),
            trade: trade.to_string(),
            category: category.to_string(),
            region: region.to_string(),
            rating,
            favorite_count,
        };
        let user = |id, name: &str, email: &str| SessionUser {
            id,
            display_name: name.to_string(),
            email: email.to_string(),
        };

        let mut users = HashMap::new();
        users.insert(ANNA_TOKEN.to_string(), user(1, "Anna Gruber", "anna@example.at"));
        users.insert(BERND_TOKEN.to_string(), user(2, "Bernd Leitner", "bernd@example.at"));

        Self {
            profiles: vec![
                profile(1, "Huber Installationen", "Installateur", "sanitaer", "wien", 4.6, 31),
                profile(2, "Elektro Steiner", "Elektriker", "elektrik", "graz", 4.8, 54),
                profile(3, "Malerei Brunner", "Maler", "maler", "linz", 4.3, 12),
                profile(4, "Gartenprofi Wagner", "Gärtner", "garten", "wien", 4.9, 87),
            ],
            users,
            favorites: Mutex::new(HashMap::new()),
            jobs: Mutex::new(seeded_jobs()),
            next_job_id: AtomicU64::new(3),
            fail_mutations: AtomicBool::new(false),
            fail_favorite_status: AtomicBool::new(false),
            favorite_requests: AtomicU64::new(0),
        }
    }

    fn user_for(&self, headers: &HeaderMap) -> Option<SessionUser> {
        let token = bearer(headers)?;
        self.users.get(token).cloned()
    }

    fn token_of(&self, headers: &HeaderMap) -> Option<String> {
        let token = bearer(headers)?;
        self.users.contains_key(token).then(|| token.to_string())
    }
}

fn seeded_jobs() -> Vec<JobListing> {
    vec![
        JobListing {
            id: 1,
            title: "Silikonfugen im Bad erneuern".to_string(),
            description: "Ca. 8 Laufmeter, Termin unter der Woche".to_string(),
            kind: JobKind::CustomerRequest,
            category: "sanitaer".to_string(),
            region: "wien".to_string(),
            created_at: Utc::now(),
        },
        JobListing {
            id: 2,
            title: "Elektriker übernimmt Kleinaufträge".to_string(),
            description: "Kurzfristig verfügbar im Raum Graz".to_string(),
            kind: JobKind::ProviderOffer,
            category: "elektrik".to_string(),
            region: "graz".to_string(),
            created_at: Utc::now(),
        },
    ]
}

fn bearer(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// A running stub server bound to an ephemeral local port.
pub struct StubBackend {
    base_url: String,
    state: Arc<BackendState>,
}

impl StubBackend {
    /// Bind `127.0.0.1:0` and serve in a background task. The listener is
    /// bound before this returns, so clients may connect immediately.
    pub async fn start() -> io::Result<Self> {
        let state = Arc::new(BackendState::seeded());
        let app = router(Arc::clone(&state));
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        info!(%addr, "stub backend listening");
        Ok(Self {
            base_url: format!("http://{}", addr),
            state,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // Failure switches and inspection hooks for tests.

    /// Make favorite mutations answer 500 until switched back.
    pub fn fail_mutations(&self, on: bool) {
        self.state.fail_mutations.store(on, Ordering::SeqCst);
    }

    /// Make favorite status reads answer 500 until switched back.
    pub fn fail_favorite_status(&self, on: bool) {
        self.state.fail_favorite_status.store(on, Ordering::SeqCst);
    }

    /// How many requests hit any favorites endpoint so far.
    pub fn favorite_requests(&self) -> u64 {
        self.state.favorite_requests.load(Ordering::SeqCst)
    }

    /// Pre-seed a favorite server-side, bypassing the HTTP surface.
    pub fn set_favorite(&self, token: &str, profile_id: u64) {
        let mut favorites = self.state.favorites.lock().unwrap();
        favorites.entry(token.to_string()).or_default().insert(profile_id);
    }

    pub fn has_favorite(&self, token: &str, profile_id: u64) -> bool {
        let favorites = self.state.favorites.lock().unwrap();
        favorites.get(token).is_some_and(|set| set.contains(&profile_id))
    }

    pub fn job_count(&self) -> usize {
        self.state.jobs.lock().unwrap().len()
    }
}

fn router(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/session", get(session))
        .route("/profiles", get(search_profiles))
        .route("/profiles/{id}", get(profile_by_id))
        .route("/favorites", get(favorites_list).post(favorites_add))
        .route("/favorites/{id}", get(favorite_status).delete(favorites_remove))
        .route("/jobs", get(jobs_list).post(jobs_create))
        .with_state(state)
}

async fn session(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    match state.user_for(&headers) {
        Some(user) => Json(user).into_response(),
        None => StatusCode::UNAUTHORIZED.into_response(),
    }
}

#[derive(Deserialize)]
struct ProfileFilter {
    query: Option<String>,
    category: Option<String>,
    region: Option<String>,
}

fn filter_matches(profile: &Profile, filter: &ProfileFilter) -> bool {
    if let Some(q) = &filter.query {
        let q = q.to_lowercase();
        if !profile.name.to_lowercase().contains(&q) && !profile.trade.to_lowercase().contains(&q) {
            return false;
        }
    }
    if let Some(category) = &filter.category {
        if &profile.category != category {
            return false;
        }
    }
    if let Some(region) = &filter.region {
        if &profile.region != region {
            return false;
        }
    }
    true
}

async fn search_profiles(
    State(state): State<Arc<BackendState>>,
    Query(filter): Query<ProfileFilter>,
) -> Response {
    let hits: Vec<&Profile> = state
        .profiles
        .iter()
        .filter(|p| filter_matches(p, &filter))
        .collect();
    Json(hits).into_response()
}

async fn profile_by_id(State(state): State<Arc<BackendState>>, Path(id): Path<u64>) -> Response {
    match state.profiles.iter().find(|p| p.id == id) {
        Some(profile) => Json(profile).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn favorite_status(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    state.favorite_requests.fetch_add(1, Ordering::SeqCst);
    if state.fail_favorite_status.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "favorites backend unavailable").into_response();
    }
    let Some(token) = state.token_of(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let favorites = state.favorites.lock().unwrap();
    let is_favorite = favorites.get(&token).is_some_and(|set| set.contains(&id));
    Json(FavoriteStatus { is_favorite }).into_response()
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddFavoriteBody {
    profile_id: u64,
}

async fn favorites_add(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(body): Json<AddFavoriteBody>,
) -> Response {
    state.favorite_requests.fetch_add(1, Ordering::SeqCst);
    if state.fail_mutations.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "favorites backend unavailable").into_response();
    }
    let Some(token) = state.token_of(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    if !state.profiles.iter().any(|p| p.id == body.profile_id) {
        return StatusCode::NOT_FOUND.into_response();
    }
    let mut favorites = state.favorites.lock().unwrap();
    favorites.entry(token).or_default().insert(body.profile_id);
    StatusCode::CREATED.into_response()
}

async fn favorites_remove(
    State(state): State<Arc<BackendState>>,
    Path(id): Path<u64>,
    headers: HeaderMap,
) -> Response {
    state.favorite_requests.fetch_add(1, Ordering::SeqCst);
    if state.fail_mutations.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, "favorites backend unavailable").into_response();
    }
    let Some(token) = state.token_of(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let mut favorites = state.favorites.lock().unwrap();
    if let Some(set) = favorites.get_mut(&token) {
        set.remove(&id);
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn favorites_list(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    state.favorite_requests.fetch_add(1, Ordering::SeqCst);
    let Some(token) = state.token_of(&headers) else {
        return StatusCode::UNAUTHORIZED.into_response();
    };
    let favorites = state.favorites.lock().unwrap();
    let ids = favorites.get(&token).cloned().unwrap_or_default();
    let items: Vec<&Profile> = state.profiles.iter().filter(|p| ids.contains(&p.id)).collect();
    Json(items).into_response()
}

async fn jobs_list(State(state): State<Arc<BackendState>>) -> Response {
    let jobs = state.jobs.lock().unwrap();
    Json(jobs.clone()).into_response()
}

async fn jobs_create(
    State(state): State<Arc<BackendState>>,
    headers: HeaderMap,
    Json(draft): Json<JobDraft>,
) -> Response {
    if state.user_for(&headers).is_none() {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let listing = JobListing {
        id: state.next_job_id.fetch_add(1, Ordering::SeqCst),
        title: draft.title,
        description: draft.description,
        kind: draft.kind,
        category: draft.category,
        region: draft.region,
        created_at: Utc::now(),
    };
    let mut jobs = state.jobs.lock().unwrap();
    jobs.insert(0, listing.clone());
    (StatusCode::CREATED, Json(listing)).into_response()
}
