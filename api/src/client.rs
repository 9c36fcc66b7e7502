use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::auth::TokenSource;
use crate::error::ApiError;
use crate::types::{FavoriteStatus, JobDraft, JobListing, Profile, ProfileQuery, SessionUser};

/// Async client for the marketplace REST backend.
///
/// One instance per backend; cheap to clone behind an `Arc`. Every request
/// asks the [`TokenSource`] for a bearer token first, so the same client
/// serves anonymous browsing and signed-in sessions.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token_source: Arc<dyn TokenSource>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token_source: Arc<dyn TokenSource>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token_source,
        }
    }

    // ── Request plumbing ────────────────────────────────────────────────

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token, if the source has one.
    async fn authed(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ApiError> {
        match self.token_source.token().await? {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Ok(builder),
        }
    }

    /// Parse a response body, mapping HTTP errors to `ApiError`.
    async fn parse<R: DeserializeOwned>(resp: reqwest::Response) -> Result<R, ApiError> {
        Self::check(resp)
            .await?
            .json::<R>()
            .await
            .map_err(|e| ApiError::Decode(format!("response body: {}", e)))
    }

    /// Status-only check for endpoints whose body we ignore.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.as_u16() == 401 {
            return Err(ApiError::Unauthenticated);
        }
        if !status.is_success() {
            let code = status.as_u16();
            let body = resp.text().await.unwrap_or_default();
            tracing::debug!(status = code, "api request failed");
            return Err(ApiError::Server {
                status: code,
                message: body,
            });
        }
        Ok(resp)
    }

    // ── Session ─────────────────────────────────────────────────────────

    /// `GET /session` — who the attached token belongs to.
    pub async fn session(&self) -> Result<SessionUser, ApiError> {
        let req = self.http.get(self.url("/session"));
        let resp = self.authed(req).await?.send().await?;
        Self::parse(resp).await
    }

    // ── Profiles ────────────────────────────────────────────────────────

    /// `GET /profiles` with optional query/category/region filters.
    pub async fn search_profiles(&self, filter: &ProfileQuery) -> Result<Vec<Profile>, ApiError> {
        let req = self.http.get(self.url("/profiles")).query(filter);
        let resp = self.authed(req).await?.send().await?;
        Self::parse(resp).await
    }

    /// `GET /profiles/{id}`.
    pub async fn profile(&self, id: u64) -> Result<Profile, ApiError> {
        let req = self.http.get(self.url(&format!("/profiles/{}", id)));
        let resp = self.authed(req).await?.send().await?;
        Self::parse(resp).await
    }

    // ── Favorites ───────────────────────────────────────────────────────

    /// `GET /favorites/{id}` — whether the current user favorited this
    /// profile.
    pub async fn favorite_status(&self, profile_id: u64) -> Result<FavoriteStatus, ApiError> {
        let req = self.http.get(self.url(&format!("/favorites/{}", profile_id)));
        let resp = self.authed(req).await?.send().await?;
        Self::parse(resp).await
    }

    /// `POST /favorites` with `{profileId}`.
    pub async fn add_favorite(&self, profile_id: u64) -> Result<(), ApiError> {
        let req = self
            .http
            .post(self.url("/favorites"))
            .json(&serde_json::json!({ "profileId": profile_id }));
        let resp = self.authed(req).await?.send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// `DELETE /favorites/{id}`.
    pub async fn remove_favorite(&self, profile_id: u64) -> Result<(), ApiError> {
        let req = self.http.delete(self.url(&format!("/favorites/{}", profile_id)));
        let resp = self.authed(req).await?.send().await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// `GET /favorites` — the full favorited-profile list.
    pub async fn favorites(&self) -> Result<Vec<Profile>, ApiError> {
        let req = self.http.get(self.url("/favorites"));
        let resp = self.authed(req).await?.send().await?;
        Self::parse(resp).await
    }

    // ── Jobs ────────────────────────────────────────────────────────────

    /// `GET /jobs`.
    pub async fn jobs(&self) -> Result<Vec<JobListing>, ApiError> {
        let req = self.http.get(self.url("/jobs"));
        let resp = self.authed(req).await?.send().await?;
        Self::parse(resp).await
    }

    /// `POST /jobs`.
    pub async fn create_job(&self, draft: &JobDraft) -> Result<JobListing, ApiError> {
        let req = self.http.post(self.url("/jobs")).json(draft);
        let resp = self.authed(req).await?.send().await?;
        Self::parse(resp).await
    }
}
