//! Session state, stored at `auth/state`.

use serde::{Deserialize, Serialize};
use speedjobs_api::SessionUser;
use speedjobs_flux_derive::state;

/// Whether the session has been resolved yet, and what it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthPhase {
    /// Session not checked yet, or the last check failed.
    Unknown,
    Guest,
    SignedIn,
}

#[state("auth/state")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthState {
    pub phase: AuthPhase,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    pub busy: bool,
    /// Stable error code of the last failed session check.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AuthState {
    pub fn unknown() -> Self {
        AuthState {
            phase: AuthPhase::Unknown,
            user: None,
            busy: false,
            error: None,
        }
    }

    pub fn guest() -> Self {
        AuthState {
            phase: AuthPhase::Guest,
            user: None,
            busy: false,
            error: None,
        }
    }

    pub fn signed_in(user: SessionUser) -> Self {
        AuthState {
            phase: AuthPhase::SignedIn,
            user: Some(user),
            busy: false,
            error: None,
        }
    }

    pub fn is_signed_in(&self) -> bool {
        self.phase == AuthPhase::SignedIn
    }
}
