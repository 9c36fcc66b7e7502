//! Profile page state, one entry per viewed provider at
//! `profiles/pages/{profile_id}`.

use serde::{Deserialize, Serialize};
use speedjobs_api::Profile;
use speedjobs_flux_derive::state;

#[state("profiles/pages")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<Profile>,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProfilePage {
    pub fn path(profile_id: u64) -> String {
        format!("{}/{}", Self::PATH, profile_id)
    }

    pub fn loading() -> Self {
        ProfilePage {
            profile: None,
            busy: true,
            error: None,
        }
    }

    pub fn loaded(profile: Profile) -> Self {
        ProfilePage {
            profile: Some(profile),
            busy: false,
            error: None,
        }
    }

    pub fn failed(code: &str) -> Self {
        ProfilePage {
            profile: None,
            busy: false,
            error: Some(code.to_string()),
        }
    }
}
