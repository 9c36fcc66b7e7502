//! Job feed and job form requests.

use speedjobs_api::JobKind;
use speedjobs_flux_derive::request;

#[request("jobs/load")]
pub struct LoadJobsReq;

/// Open the posting form with the field preset for `kind`.
#[request("jobs/form/open")]
pub struct OpenJobFormReq {
    pub kind: JobKind,
}

#[request("jobs/form/edit")]
pub struct EditJobFormReq {
    pub field: String,
    pub value: String,
}

/// Validate the open form and post it.
#[request("jobs/form/submit")]
pub struct SubmitJobFormReq;
