//! Job feed and job form state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use speedjobs_api::{JobKind, JobListing};
use speedjobs_flux_derive::state;

/// The public job feed, stored at `jobs/feed`.
#[state("jobs/feed")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobsFeed {
    pub items: Vec<JobListing>,
    pub busy: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl JobsFeed {
    pub fn empty() -> Self {
        JobsFeed {
            items: Vec::new(),
            busy: false,
            error: None,
        }
    }

    pub fn loaded(items: Vec<JobListing>) -> Self {
        JobsFeed {
            items,
            busy: false,
            error: None,
        }
    }
}

/// The one job posting form, stored at `jobs/form`.
///
/// The same form serves customer requests and provider offers; `kind`
/// selects the field preset. Values and per-field errors are keyed by
/// field name.
#[state("jobs/form")]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobForm {
    pub kind: JobKind,
    pub values: BTreeMap<String, String>,
    /// Field name to message path, filled by validation.
    pub errors: BTreeMap<String, String>,
    pub busy: bool,
}

impl JobForm {
    pub fn open(kind: JobKind) -> Self {
        JobForm {
            kind,
            values: BTreeMap::new(),
            errors: BTreeMap::new(),
            busy: false,
        }
    }

    pub fn value(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }
}
