//! Job feed and job form handlers.

use speedjobs_api::ApiClient;
use speedjobs_flux::Store;
use tracing::{debug, info, warn};

use super::helpers;
use crate::form;
use crate::request::{EditJobFormReq, OpenJobFormReq};
use crate::state::{JobForm, JobsFeed, NoticeLevel};

/// Handle `jobs/load`.
pub async fn handle_load(store: &Store, api: &ApiClient) {
    let prev = store
        .get_as::<JobsFeed>(JobsFeed::PATH)
        .unwrap_or_else(JobsFeed::empty);
    store.set(
        JobsFeed::PATH,
        JobsFeed {
            busy: true,
            error: None,
            items: prev.items,
        },
    );

    match api.jobs().await {
        Ok(items) => {
            store.set(JobsFeed::PATH, JobsFeed::loaded(items));
        }
        Err(err) => {
            warn!(error = %err, "job feed fetch failed");
            store.update::<JobsFeed, _>(JobsFeed::PATH, |feed| {
                feed.busy = false;
                feed.error = Some(err.code().to_string());
            });
            helpers::push_notice(
                store,
                NoticeLevel::Error,
                format!("error/job/feed-failed?reason={}", err.code()),
            );
        }
    }
}

/// Handle `jobs/form/open`: reset the form to the preset for `kind`.
pub async fn handle_form_open(req: &OpenJobFormReq, store: &Store) {
    store.set(JobForm::PATH, JobForm::open(req.kind));
}

/// Handle `jobs/form/edit`: record one field value. Edits to fields the
/// preset does not know are dropped.
pub async fn handle_form_edit(req: &EditJobFormReq, store: &Store) {
    let updated = store.update::<JobForm, _>(JobForm::PATH, |form| {
        if form::spec_for(form.kind).has_field(&req.field) {
            form.values.insert(req.field.clone(), req.value.clone());
            form.errors.remove(&req.field);
        } else {
            warn!(field = %req.field, "edit for unknown form field dropped");
        }
    });
    if !updated {
        debug!(field = %req.field, "edit without an open form dropped");
    }
}

/// Handle `jobs/form/submit`: validate, post, refresh the feed.
pub async fn handle_form_submit(store: &Store, api: &ApiClient) {
    let Some(form) = store.get_as::<JobForm>(JobForm::PATH) else {
        debug!("submit without an open form dropped");
        return;
    };
    if form.busy {
        debug!("submit ignored, post already in flight");
        return;
    }

    // Posting requires a session, same as favoriting.
    if !helpers::is_signed_in(store) {
        helpers::push_notice(store, NoticeLevel::Error, "error/job/auth-required");
        return;
    }

    let spec = form::spec_for(form.kind);
    let errors = spec.validate(&form.values);
    if !errors.is_empty() {
        store.update::<JobForm, _>(JobForm::PATH, |form| {
            form.errors = errors;
        });
        return;
    }

    store.update::<JobForm, _>(JobForm::PATH, |form| {
        form.busy = true;
        form.errors.clear();
    });

    match api.create_job(&spec.to_draft(&form.values)).await {
        Ok(listing) => {
            info!(job_id = listing.id, kind = ?listing.kind, "job posted");
            store.set(JobForm::PATH, JobForm::open(form.kind));
            store.invalidate(JobsFeed::PATH);
            if store.contains(JobsFeed::PATH) {
                handle_load(store, api).await;
            }
            helpers::push_notice(store, NoticeLevel::Success, "notice/job/posted");
        }
        Err(err) => {
            warn!(error = %err, "job post failed");
            store.update::<JobForm, _>(JobForm::PATH, |form| {
                form.busy = false;
            });
            helpers::push_notice(
                store,
                NoticeLevel::Error,
                format!("error/job/post-failed?reason={}", err.code()),
            );
        }
    }
}
