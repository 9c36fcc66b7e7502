//! Request handler wiring.
//!
//! [`register_handlers`] connects every request path to its handler.
//! Cross-domain follow-ups live here in the wiring rather than inside the
//! handlers: initialization resolves the session, a loaded profile page
//! seeds its favorite entry.

mod app;
mod auth;
mod favorite;
mod helpers;
mod job;
mod notice;
mod profile;
mod search;

use std::sync::Arc;

use speedjobs_api::ApiClient;
use speedjobs_flux::{Flux, I18nStore, Store};

use crate::request::{
    ClearSearchReq, DismissNoticeReq, EditJobFormReq, InitializeReq, LoadFavoriteReq,
    LoadFavoritesListReq, LoadJobsReq, LoadProfileReq, LogoutReq, OpenJobFormReq, RunSearchReq,
    SessionLoadReq, SetLocaleReq, SubmitJobFormReq, ToggleFavoriteReq,
};

/// Shared services the handlers run against.
pub struct AppContext {
    pub api: Arc<ApiClient>,
    pub i18n: Arc<I18nStore>,
}

pub fn register_handlers(flux: &Flux, ctx: Arc<AppContext>) {
    {
        let ctx = ctx.clone();
        flux.on(InitializeReq::PATH, move |_, _, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                app::handle_initialize(&store).await;
                auth::handle_session_load(&store, &ctx.api).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.on(SetLocaleReq::PATH, move |_, payload, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<SetLocaleReq>().unwrap();
                app::handle_set_locale(req, &store, &ctx.i18n).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.on(SessionLoadReq::PATH, move |_, _, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                auth::handle_session_load(&store, &ctx.api).await;
            }
        });
    }

    flux.on(LogoutReq::PATH, move |_, _, store: Arc<Store>| async move {
        auth::handle_logout(&store).await;
    });

    {
        let ctx = ctx.clone();
        flux.on(RunSearchReq::PATH, move |_, payload, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<RunSearchReq>().unwrap();
                search::handle_run(req, &store, &ctx.api).await;
            }
        });
    }

    flux.on(ClearSearchReq::PATH, move |_, _, store: Arc<Store>| async move {
        search::handle_clear(&store).await;
    });

    {
        let ctx = ctx.clone();
        flux.on(LoadProfileReq::PATH, move |_, payload, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<LoadProfileReq>().unwrap();
                profile::handle_load(req, &store, &ctx.api).await;
                // A rendered profile page always carries its favorite
                // control, so settle that entry right away.
                if profile::page_loaded(&store, req.profile_id) {
                    let load = LoadFavoriteReq {
                        profile_id: req.profile_id,
                    };
                    favorite::handle_load(&load, &store, &ctx.api).await;
                }
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.on(LoadFavoriteReq::PATH, move |_, payload, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<LoadFavoriteReq>().unwrap();
                favorite::handle_load(req, &store, &ctx.api).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.on(ToggleFavoriteReq::PATH, move |_, payload, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                let req = payload.downcast_ref::<ToggleFavoriteReq>().unwrap();
                favorite::handle_toggle(req, &store, &ctx.api).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.on(LoadFavoritesListReq::PATH, move |_, _, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                favorite::handle_list_load(&store, &ctx.api).await;
            }
        });
    }

    {
        let ctx = ctx.clone();
        flux.on(LoadJobsReq::PATH, move |_, _, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                job::handle_load(&store, &ctx.api).await;
            }
        });
    }

    flux.on(OpenJobFormReq::PATH, move |_, payload, store: Arc<Store>| async move {
        let req = payload.downcast_ref::<OpenJobFormReq>().unwrap();
        job::handle_form_open(req, &store).await;
    });

    flux.on(EditJobFormReq::PATH, move |_, payload, store: Arc<Store>| async move {
        let req = payload.downcast_ref::<EditJobFormReq>().unwrap();
        job::handle_form_edit(req, &store).await;
    });

    {
        let ctx = ctx.clone();
        flux.on(SubmitJobFormReq::PATH, move |_, _, store: Arc<Store>| {
            let ctx = ctx.clone();
            async move {
                job::handle_form_submit(&store, &ctx.api).await;
            }
        });
    }

    flux.on(DismissNoticeReq::PATH, move |_, payload, store: Arc<Store>| async move {
        let req = payload.downcast_ref::<DismissNoticeReq>().unwrap();
        notice::handle_dismiss(req, &store).await;
    });
}
