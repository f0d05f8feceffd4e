//! Procedural macros for taxon enumeration tables.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Merge derive implementation.
mod merge;

/// Derives `taxon::Merge` field-wise for a struct.
///
/// Every field's type must itself implement `Merge`; type parameters get a
/// `Merge` bound added automatically.
///
/// ```ignore
/// #[derive(Merge)]
/// struct Status {
///     label: Option<&'static str>,
///     terminal: Option<bool>,
/// }
/// ```
#[proc_macro_derive(Merge)]
pub fn derive_merge(input: TokenStream) -> TokenStream {
	let input = parse_macro_input!(input as DeriveInput);
	merge::expand(input).into()
}
