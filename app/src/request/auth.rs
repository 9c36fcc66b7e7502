//! Session requests.

use speedjobs_flux_derive::request;

/// Re-check the server session and settle `auth/state`.
#[request("auth/load")]
pub struct SessionLoadReq;

/// Drop to guest and clear per-user state.
#[request("auth/logout")]
pub struct LogoutReq;
