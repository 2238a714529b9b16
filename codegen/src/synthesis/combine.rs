//! The combine operation: a field-wise, self-biased merge of two partials

use quote::format_ident;

use super::names::SynthesisContext;

/// `impl Semigroup for PartialMyData`, keeping each field of `self` when set and taking
/// the field of `other` otherwise.
///
/// Field-wise first-set-wins is associative, and the all-unset partial is both a left and
/// a right identity, so the partial type is a monoid under this operation.
pub(super) fn combine_impl(ctx: &SynthesisContext) -> syn::Item {
    let SynthesisContext {
        partial_ident,
        runtime,
        ..
    } = ctx;

    // Zero-field partials never read `other`
    let other = if ctx.fields.is_empty() {
        format_ident!("_other")
    } else {
        format_ident!("other")
    };
    let merged = ctx.fields.iter().map(|field| {
        let ident = &field.ident;
        quote::quote! { #ident: self.#ident.or(#other.#ident) }
    });

    syn::parse_quote! {
        impl #runtime::Semigroup for #partial_ident {
            fn combine(self, #other: Self) -> Self {
                Self {
                    #(#merged,)*
                }
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::unreachable, reason = "tests")]
mod tests {
    use super::*;
    use crate::config::CodegenConfig;

    #[test]
    fn test_combine_prefers_self() {
        let ctx =
            SynthesisContext::new(&super::super::tests::my_data(), &CodegenConfig::default())
                .unwrap();

        let expected: syn::Item = syn::parse_quote! {
            impl ::buildable::Semigroup for PartialMyData {
                fn combine(self, other: Self) -> Self {
                    Self {
                        arg1: self.arg1.or(other.arg1),
                        arg2: self.arg2.or(other.arg2),
                    }
                }
            }
        };
        assert_eq!(combine_impl(&ctx), expected);
    }

    #[test]
    fn test_zero_field_combine() {
        let mut record = super::super::tests::my_data();
        record.fields.clear();
        let ctx = SynthesisContext::new(&record, &CodegenConfig::default()).unwrap();

        let expected: syn::Item = syn::parse_quote! {
            impl ::buildable::Semigroup for PartialMyData {
                fn combine(self, _other: Self) -> Self {
                    Self {}
                }
            }
        };
        assert_eq!(combine_impl(&ctx), expected);
    }

    #[test]
    fn test_custom_runtime_path() {
        let config = CodegenConfig::default()
            .with_runtime_path_str("crate::runtime")
            .unwrap();
        let ctx = SynthesisContext::new(&super::super::tests::my_data(), &config).unwrap();

        let syn::Item::Impl(item) = combine_impl(&ctx) else {
            unreachable!("combine is always an impl block")
        };
        let (_, trait_path, _) = item.trait_.unwrap();
        let expected: syn::Path = syn::parse_quote!(crate::runtime::Semigroup);
        assert_eq!(trait_path, expected);
    }
}
