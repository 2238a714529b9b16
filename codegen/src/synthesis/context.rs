//! The per-record `Buildable` implementation
//!
//! This is the one implementation instance per record type through which generic code
//! reaches the record's partial, its empty value, and a builder.

use super::names::SynthesisContext;

/// `impl Buildable for MyData { type Partial = PartialMyData; fn as_partial(&self) ... }`
pub(super) fn buildable_impl(ctx: &SynthesisContext) -> syn::Item {
    let SynthesisContext {
        partial_ident,
        record_path,
        runtime,
        ..
    } = ctx;

    let fields = ctx.fields.iter().map(|field| {
        let ident = &field.ident;
        if field.nullable {
            quote::quote! { #ident: ::core::clone::Clone::clone(&self.#ident) }
        } else {
            quote::quote! {
                #ident: ::core::option::Option::Some(::core::clone::Clone::clone(&self.#ident))
            }
        }
    });

    syn::parse_quote! {
        impl #runtime::Buildable for #record_path {
            type Partial = #partial_ident;

            fn as_partial(&self) -> #partial_ident {
                #partial_ident {
                    #(#fields,)*
                }
            }
        }
    }
}
