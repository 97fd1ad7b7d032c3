//! Procedural macros for the nominal capability system.
//!
//! One macro lives here: `#[derive(Capability)]`, which assigns a capability
//! its trie route. The route is the low 64 bits of a BLAKE3 hash of the type
//! name, spelled as a 32-crumb `Step` chain. That is a closed type, so the
//! main crate needs no const-generic bridge to consume it.

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod capability;

/// Derive `Capability` for a marker type.
///
/// ```ignore
/// use nominal::Capability;
///
/// #[derive(Capability)]
/// struct Audited;
/// ```
///
/// Route identity is the hash of the type *name*; two capabilities that share
/// a name (in different modules) would share a route. Declare routes manually
/// with `capability!` when that matters.
#[proc_macro_derive(Capability)]
pub fn derive_capability(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    capability::expand_derive_capability(input).into()
}
