//! Notice queue handlers.

use speedjobs_flux::Store;

use crate::request::DismissNoticeReq;
use crate::state::Notices;

/// Handle `notices/dismiss`.
pub async fn handle_dismiss(req: &DismissNoticeReq, store: &Store) {
    store.update::<Notices, _>(Notices::PATH, |queue| {
        queue.dismiss(req.id);
    });
}
