//! Provider search requests.

use speedjobs_flux_derive::request;

#[request("search/run")]
pub struct RunSearchReq {
    pub query: String,
    pub category: Option<String>,
    pub region: Option<String>,
}

#[request("search/clear")]
pub struct ClearSearchReq;
