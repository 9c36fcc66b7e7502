//! Shared expansion: attach baseline derives and the `PATH` const to a
//! struct or enum.

use proc_macro2::TokenStream;
use quote::quote;
use syn::Item;

pub fn expand_with_derives(
    attr: TokenStream,
    mut item: Item,
    baseline: &[&str],
) -> syn::Result<TokenStream> {
    let path = parse_path(attr)?;

    let (ident, attrs) = match &mut item {
        Item::Struct(s) => (s.ident.clone(), &mut s.attrs),
        Item::Enum(e) => (e.ident.clone(), &mut e.attrs),
        other => {
            return Err(syn::Error::new_spanned(
                other,
                "expected a struct or enum",
            ));
        }
    };

    let present = collect_derives(attrs);
    let missing: Vec<syn::Ident> = baseline
        .iter()
        .filter(|d| !present.iter().any(|p| p == *d))
        .map(|d| syn::Ident::new(d, proc_macro2::Span::call_site()))
        .collect();
    if !missing.is_empty() {
        attrs.push(syn::parse_quote! { #[derive(#(#missing),*)] });
    }

    Ok(quote! {
        #item

        impl #ident {
            /// Path this type is addressed under.
            pub const PATH: &'static str = #path;
        }
    })
}

fn parse_path(attr: TokenStream) -> syn::Result<String> {
    let lit: syn::LitStr = syn::parse2(attr)?;
    let path = lit.value();
    if path.is_empty() {
        return Err(syn::Error::new(lit.span(), "path cannot be empty"));
    }
    Ok(path)
}

fn collect_derives(attrs: &[syn::Attribute]) -> Vec<String> {
    let mut derives = Vec::new();
    for attr in attrs {
        if attr.path().is_ident("derive") {
            if let Ok(paths) = attr.parse_args_with(
                syn::punctuated::Punctuated::<syn::Path, syn::Token![,]>::parse_terminated,
            ) {
                for path in paths {
                    if let Some(ident) = path.segments.last() {
                        derives.push(ident.ident.to_string());
                    }
                }
            }
        }
    }
    derives
}
