//! `#[request("path")]` expansion: baseline `Debug, Clone`.

use proc_macro2::TokenStream;
use syn::Item;

use crate::common::expand_with_derives;

pub fn expand(attr: TokenStream, item: Item) -> syn::Result<TokenStream> {
    expand_with_derives(attr, item, &["Debug", "Clone"])
}
