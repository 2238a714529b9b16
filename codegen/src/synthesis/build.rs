//! The build operation: a total function from a partial to an optional record

use super::names::SynthesisContext;

/// `impl Partial for PartialMyData` whose `build` returns the record when every field is
/// set and `None` otherwise. `?` on each field keeps it total: it never panics.
pub(super) fn build_impl(ctx: &SynthesisContext) -> syn::Item {
    let SynthesisContext {
        partial_ident,
        record_path,
        runtime,
        ..
    } = ctx;

    let fields = ctx.fields.iter().map(|field| {
        let ident = &field.ident;
        // A nullable field has the same type on both sides but must still be `Some`
        if field.nullable {
            quote::quote! {
                #ident: ::core::option::Option::Some(::core::clone::Clone::clone(&self.#ident)?)
            }
        } else {
            quote::quote! { #ident: ::core::clone::Clone::clone(&self.#ident)? }
        }
    });
    let is_complete = ctx
        .fields
        .iter()
        .map(|field| {
            let ident = &field.ident;
            quote::quote! { self.#ident.is_some() }
        })
        .reduce(|checks, check| quote::quote! { #checks && #check })
        .unwrap_or_else(|| quote::quote! { true });

    syn::parse_quote! {
        impl #runtime::Partial for #partial_ident {
            type Target = #record_path;

            fn build(&self) -> ::core::option::Option<#record_path> {
                ::core::option::Option::Some(#record_path {
                    #(#fields,)*
                })
            }

            fn is_complete(&self) -> bool {
                #is_complete
            }
        }
    }
}
