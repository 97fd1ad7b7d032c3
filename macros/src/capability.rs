use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{DeriveInput, Ident};

pub fn expand_derive_capability(input: DeriveInput) -> TokenStream2 {
    if !input.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.generics,
            "#[derive(Capability)] supports non-generic types only; \
             parametrized families implement `Capability` by hand through a family key",
        )
        .to_compile_error();
    }

    let ident = &input.ident;
    let route = route_type(route_hash(&ident.to_string()));

    quote! {
        impl ::nominal::Capability for #ident {
            type Route = #route;
        }
    }
}

/// Low 64 bits of the BLAKE3 hash of the capability name.
fn route_hash(name: &str) -> u64 {
    let digest = blake3::hash(name.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}

/// Spell the hash as a route: 32 crumbs, low bits first, `Q0` tail.
fn route_type(hash: u64) -> TokenStream2 {
    let mut route = quote!(::nominal::Repeat<::nominal::Q0>);
    for position in (0..32).rev() {
        let crumb = (hash >> (2 * position)) & 0b11;
        let q = Ident::new(&format!("Q{crumb}"), Span::call_site());
        route = quote!(::nominal::Step<::nominal::#q, #route>);
    }
    route
}
