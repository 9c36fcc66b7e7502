//! Provider search state, stored at `search/state`.

use serde::{Deserialize, Serialize};
use speedjobs_api::Profile;
use speedjobs_flux_derive::state;

#[state("search/state")]
#[derive(Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchState {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    pub results: Vec<Profile>,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchState {
    pub fn empty() -> Self {
        SearchState::default()
    }
}
