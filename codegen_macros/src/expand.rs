//! `#[derive(GenBuildable)]` implementation

use buildable_codegen::Generator;
use buildable_codegen::describe;
use proc_macro2::TokenStream;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;

use crate::attributes::HostAttributes;
use crate::candidate::candidate;
use crate::candidate::field_name;
use crate::logging;
use crate::token_sink::TokenSink;

/// Expand the derive. A field whose type cannot be handled fails the whole derive with
/// an error pointing at that field's type.
pub(crate) fn derive_gen_buildable(input: &DeriveInput) -> syn::Result<TokenStream> {
    logging::init();

    let generator = Generator::new(HostAttributes::from_attrs(&input.attrs)?.config());
    let candidate = candidate(input);
    let mut sink = TokenSink::new(input.ident.span());

    match generator.process(&candidate, &mut sink) {
        Ok(_) => Ok(sink.into_tokens()),
        Err(report) => {
            let message = describe(&report);
            tracing::error!(record = %candidate.fully_qualified_name, "{message}");
            let field = report
                .current_context()
                .field()
                .and_then(|name| field_type(input, name));
            Err(match field {
                Some(ty) => syn::Error::new_spanned(ty, message),
                None => syn::Error::new(input.ident.span(), message),
            })
        }
    }
}

fn field_type<'a>(input: &'a DeriveInput, name: &str) -> Option<&'a syn::Type> {
    let Data::Struct(data) = &input.data else {
        return None;
    };
    let Fields::Named(named) = &data.fields else {
        return None;
    };
    named
        .named
        .iter()
        .find(|field| field.ident.as_ref().is_some_and(|ident| field_name(ident) == name))
        .map(|field| &field.ty)
}
