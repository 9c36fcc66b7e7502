//! Helpers shared by the request handlers.

use speedjobs_api::SessionUser;
use speedjobs_flux::Store;

use crate::state::{AuthState, NoticeLevel, Notices};

pub fn current_user(store: &Store) -> Option<SessionUser> {
    store
        .get_as::<AuthState>(AuthState::PATH)
        .and_then(|auth| auth.user)
}

pub fn is_signed_in(store: &Store) -> bool {
    store
        .get_as::<AuthState>(AuthState::PATH)
        .map(|auth| auth.is_signed_in())
        .unwrap_or(false)
}

/// Queue a notice for the shell. Seeds the queue if the store has none yet.
pub fn push_notice(store: &Store, level: NoticeLevel, message: impl Into<String>) {
    let message = message.into();
    let updated = store.update::<Notices, _>(Notices::PATH, |queue| {
        queue.push(level, message.clone());
    });
    if !updated {
        let mut queue = Notices::empty();
        queue.push(level, message);
        store.set(Notices::PATH, queue);
    }
}
