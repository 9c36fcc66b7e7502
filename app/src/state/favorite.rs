//! Favorite synchronization state.
//!
//! One [`FavoriteSync`] entry per viewed profile at
//! `favorites/items/{profile_id}`, plus the aggregated [`FavoritesList`]
//! at `favorites/list`.

use serde::{Deserialize, Serialize};
use speedjobs_api::Profile;
use speedjobs_flux_derive::state;

/// Sync state between a favorite control and the server-side flag.
///
/// An explicit machine instead of a pair of booleans: an entry is either
/// settled (`Favorited` / `NotFavorited`), in its first fetch (`Loading`),
/// mid-mutation (`Toggling`), or untouched (`Unknown`). `Unknown` is also
/// the reset target after a failed status fetch.
#[state("favorites/items")]
#[derive(Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum FavoriteSync {
    Unknown,
    Loading,
    NotFavorited,
    Favorited,
    /// A mutation is in flight. `target` is what the user asked for and
    /// what the control shows until the server answers.
    Toggling { target: bool },
}

impl FavoriteSync {
    pub fn path(profile_id: u64) -> String {
        format!("{}/{}", Self::PATH, profile_id)
    }

    /// Settled variant for a confirmed server value.
    pub fn settled(is_favorite: bool) -> Self {
        if is_favorite {
            FavoriteSync::Favorited
        } else {
            FavoriteSync::NotFavorited
        }
    }

    /// What the control renders right now.
    pub fn displayed(&self) -> bool {
        match self {
            FavoriteSync::Favorited => true,
            FavoriteSync::Toggling { target } => *target,
            FavoriteSync::Unknown | FavoriteSync::Loading | FavoriteSync::NotFavorited => false,
        }
    }

    /// A request for this entry is in flight.
    pub fn pending(&self) -> bool {
        matches!(self, FavoriteSync::Loading | FavoriteSync::Toggling { .. })
    }
}

/// The signed-in user's favorites, as shown on the favorites page.
#[state("favorites/list")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesList {
    pub items: Vec<Profile>,
    pub busy: bool,
    /// Set when a mutation elsewhere outdated this list and the refetch
    /// after it failed.
    pub stale: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FavoritesList {
    pub fn empty() -> Self {
        FavoritesList {
            items: Vec::new(),
            busy: false,
            stale: false,
            error: None,
        }
    }

    pub fn loaded(items: Vec<Profile>) -> Self {
        FavoritesList {
            items,
            busy: false,
            stale: false,
            error: None,
        }
    }

    pub fn contains(&self, profile_id: u64) -> bool {
        self.items.iter().any(|p| p.id == profile_id)
    }
}
