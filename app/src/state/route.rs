//! App-level display state: current route and locale.

use serde::{Deserialize, Serialize};
use speedjobs_flux_derive::state;

/// Logical route the shell should render, stored at `app/route`.
#[state("app/route")]
#[derive(Serialize, Deserialize)]
pub struct AppRoute(pub String);

/// Active locale tag (`de` or `en`), stored at `app/locale`.
#[state("app/locale")]
#[derive(Serialize, Deserialize)]
pub struct AppLocale(pub String);
