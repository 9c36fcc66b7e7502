//! Proc macros for speedjobs flux types.
//!
//! - `#[state("path")]` — mark a struct or enum as a state type
//! - `#[request("path")]` — mark a struct or enum as a request type
//!
//! Both emit:
//! - `impl TypeName { pub const PATH: &'static str = "the/path"; }`
//! - the baseline derives (`Debug, Clone`), added only when missing
//!
//! `#[state]` additionally adds `PartialEq`; collapsing duplicate renders
//! needs state comparison.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;
mod request;
mod state;

/// Define a state type.
///
/// ```ignore
/// #[state("search/state")]
/// pub struct SearchState {
///     pub query: String,
///     pub busy: bool,
/// }
/// ```
///
/// Generates `#[derive(Debug, Clone, PartialEq)]` (missing ones only) and
/// `impl SearchState { pub const PATH: &'static str = "search/state"; }`.
/// Enums are accepted too, for state machines.
#[proc_macro_attribute]
pub fn state(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::Item);
    state::expand(attr.into(), item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}

/// Define a request type.
///
/// ```ignore
/// #[request("favorites/toggle")]
/// pub struct ToggleFavoriteReq {
///     pub profile_id: u64,
/// }
/// ```
///
/// Generates `#[derive(Debug, Clone)]` (missing ones only) and
/// `impl ToggleFavoriteReq { pub const PATH: &'static str = "favorites/toggle"; }`.
#[proc_macro_attribute]
pub fn request(attr: TokenStream, item: TokenStream) -> TokenStream {
    let item = parse_macro_input!(item as syn::Item);
    request::expand(attr.into(), item)
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
