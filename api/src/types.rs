use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service-provider profile as the backend returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: u64,
    pub name: String,
    /// Short trade description, e.g. "Installateur".
    pub trade: String,
    pub category: String,
    pub region: String,
    pub rating: f32,
    pub favorite_count: u32,
}

/// The signed-in user, as reported by `GET /session`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: u64,
    pub display_name: String,
    pub email: String,
}

/// Answer of `GET /favorites/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteStatus {
    pub is_favorite: bool,
}

/// Who posted a job listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobKind {
    /// A customer looking for help.
    CustomerRequest,
    /// A provider offering capacity.
    ProviderOffer,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub kind: JobKind,
    pub category: String,
    pub region: String,
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /jobs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDraft {
    pub kind: JobKind,
    pub title: String,
    pub description: String,
    pub category: String,
    pub region: String,
}

/// Filters for `GET /profiles`. Unset fields stay off the query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}
