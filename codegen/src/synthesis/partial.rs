//! The partial type: the record with every field optional

use super::names::SynthesisContext;

/// `pub struct PartialMyData { pub arg1: Option<String>, ... }`
///
/// `Default` is the all-unset partial, the identity of `combine`. Each partial field keeps
/// the visibility of the record field it mirrors.
pub(super) fn partial_type(ctx: &SynthesisContext) -> syn::Item {
    let SynthesisContext {
        partial_ident,
        visibility,
        record_name,
        ..
    } = ctx;

    let doc = format!(
        " Partial representation of `{record_name}`, with every field optional."
    );
    let fields = ctx.fields.iter().map(|field| {
        let ident = &field.ident;
        let ty = &field.partial_ty;
        let field_visibility = &field.visibility;
        let field_doc = format!(" Value of `{record_name}::{}`, if set.", field.name);
        quote::quote! {
            #[doc = #field_doc]
            #field_visibility #ident: #ty
        }
    });

    syn::parse_quote! {
        #[doc = #doc]
        #[derive(
            ::core::clone::Clone,
            ::core::fmt::Debug,
            ::core::default::Default,
            ::core::cmp::PartialEq
        )]
        #visibility struct #partial_ident {
            #(#fields,)*
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unreachable, reason = "tests")]
mod tests {
    use super::*;
    use crate::config::CodegenConfig;

    #[test]
    fn test_partial_type() {
        let ctx =
            SynthesisContext::new(&super::super::tests::my_data(), &CodegenConfig::default())
                .unwrap();

        let expected: syn::Item = syn::parse_quote! {
            #[doc = " Partial representation of `MyData`, with every field optional."]
            #[derive(
                ::core::clone::Clone,
                ::core::fmt::Debug,
                ::core::default::Default,
                ::core::cmp::PartialEq
            )]
            pub struct PartialMyData {
                #[doc = " Value of `MyData::arg1`, if set."]
                pub arg1: ::core::option::Option<String>,
                #[doc = " Value of `MyData::arg2`, if set."]
                pub arg2: ::core::option::Option<i32>,
            }
        };
        assert_eq!(partial_type(&ctx), expected);
    }

    #[test]
    fn test_private_field_stays_private() {
        let mut record = super::super::tests::my_data();
        record.fields[0].visibility = Some(String::new());
        record.fields[1].visibility = Some("pub(crate)".to_string());
        let ctx = SynthesisContext::new(&record, &CodegenConfig::default()).unwrap();

        let syn::Item::Struct(partial) = partial_type(&ctx) else {
            unreachable!("the partial type is always a struct");
        };
        let visibilities = partial
            .fields
            .iter()
            .map(|field| quote::ToTokens::to_token_stream(&field.vis).to_string())
            .collect::<Vec<_>>();
        assert_eq!(partial.vis, syn::parse_quote!(pub));
        assert_eq!(visibilities, ["", "pub (crate)"]);
    }

    #[test]
    fn test_zero_field_partial_type() {
        let mut record = super::super::tests::my_data();
        record.fields.clear();
        record.visibility = String::new();
        let ctx = SynthesisContext::new(&record, &CodegenConfig::default()).unwrap();

        let expected: syn::Item = syn::parse_quote! {
            #[doc = " Partial representation of `MyData`, with every field optional."]
            #[derive(
                ::core::clone::Clone,
                ::core::fmt::Debug,
                ::core::default::Default,
                ::core::cmp::PartialEq
            )]
            struct PartialMyData {}
        };
        assert_eq!(partial_type(&ctx), expected);
    }
}
