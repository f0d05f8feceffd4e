//! Field-wise expansion of `#[derive(Merge)]`.

use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Error, Fields, Index, parse_quote};

pub(crate) fn expand(input: DeriveInput) -> TokenStream {
	let body = match &input.data {
		Data::Struct(data) => match &data.fields {
			Fields::Named(fields) => {
				let steps = fields.named.iter().map(|field| {
					let ident = field.ident.as_ref().expect("named fields have identifiers");
					quote! {
						::taxon::Merge::merge_defaults(&mut self.#ident, &defaults.#ident);
					}
				});
				quote! { #(#steps)* }
			}
			Fields::Unnamed(fields) => {
				let steps = (0..fields.unnamed.len()).map(|position| {
					let position = Index::from(position);
					quote! {
						::taxon::Merge::merge_defaults(&mut self.#position, &defaults.#position);
					}
				});
				quote! { #(#steps)* }
			}
			Fields::Unit => quote! {},
		},
		Data::Enum(_) | Data::Union(_) => {
			return Error::new_spanned(&input.ident, "Merge can only be derived for structs")
				.to_compile_error();
		}
	};

	let mut generics = input.generics;
	for param in generics.type_params_mut() {
		param.bounds.push(parse_quote!(::taxon::Merge));
	}
	let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();
	let ident = &input.ident;

	quote! {
		#[automatically_derived]
		impl #impl_generics ::taxon::Merge for #ident #ty_generics #where_clause {
			fn merge_defaults(&mut self, defaults: &Self) {
				#body
			}
		}
	}
}
