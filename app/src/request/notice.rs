//! Notice queue requests.

use speedjobs_flux_derive::request;

#[request("notices/dismiss")]
pub struct DismissNoticeReq {
    pub id: u64,
}
