//! Field accessors: one lens pair per record field

use proc_macro2::TokenStream;
use quote::quote;

use super::names::LoweredField;
use super::names::SynthesisContext;

/// `impl MyData { pub fn arg1() -> Field<MyData, String, PartialMyData, Option<String>> ... }`
///
/// Each accessor pairs a lens on the record with a lens on the partial. Setters copy
/// every other field unchanged. An accessor is as visible as the field it reads.
pub(super) fn field_accessors(ctx: &SynthesisContext) -> syn::Item {
    let record_path = &ctx.record_path;
    let accessors = ctx.fields.iter().map(|field| field_accessor(ctx, field));

    syn::parse_quote! {
        impl #record_path {
            #(#accessors)*
        }
    }
}

fn field_accessor(ctx: &SynthesisContext, field: &LoweredField) -> TokenStream {
    let SynthesisContext {
        partial_ident,
        record_path,
        record_name,
        runtime,
        ..
    } = ctx;
    let LoweredField {
        ident,
        value_ty,
        partial_ty,
        nullable,
        name,
        visibility,
    } = field;

    let doc = format!(" Accessor for `{record_name}::{name}` on the record and its partial.");
    let record_fields = with_focus(ctx, ident);
    let lift = if *nullable {
        quote! { |focus: #value_ty| focus }
    } else {
        quote! { |focus: #value_ty| ::core::option::Option::Some(focus) }
    };

    quote! {
        #[doc = #doc]
        #visibility fn #ident() -> #runtime::Field<#record_path, #value_ty, #partial_ident, #partial_ty> {
            #runtime::Field::new(
                #name,
                #runtime::Lens::new(
                    |source: &#record_path| ::core::clone::Clone::clone(&source.#ident),
                    |source: #record_path, focus: #value_ty| #record_path { #record_fields },
                ),
                #runtime::Lens::new(
                    |source: &#partial_ident| ::core::clone::Clone::clone(&source.#ident),
                    |source: #partial_ident, focus: #partial_ty| #partial_ident { #record_fields },
                ),
                #lift,
            )
        }
    }
}

/// Field initializers taking `focus` for the focused field and `source.<field>` for the rest
fn with_focus(ctx: &SynthesisContext, focused: &syn::Ident) -> TokenStream {
    let initializers = ctx.fields.iter().map(|field| {
        let ident = &field.ident;
        if ident == focused {
            quote! { #ident: focus }
        } else {
            quote! { #ident: source.#ident }
        }
    });
    quote! { #(#initializers),* }
}
