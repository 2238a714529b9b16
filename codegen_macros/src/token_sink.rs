//! Turns the core's artifacts and diagnostics into tokens for the compiler

use buildable_codegen::Diagnostic;
use buildable_codegen::GeneratedArtifact;
use buildable_codegen::GenerationSink;
use buildable_codegen::Result;
use buildable_codegen::Severity;
use proc_macro2::Span;
use proc_macro2::TokenStream;
use quote::ToTokens;
use quote::quote;
use quote::quote_spanned;

/// Collects the expansion of one derive.
///
/// Warnings become the use of a deprecated item spanned at the record name, the one
/// warning channel stable proc macros have. Errors become `compile_error!`.
pub(crate) struct TokenSink {
    span:   Span,
    tokens: TokenStream,
}

impl TokenSink {
    /// Point diagnostics at `span`
    pub(crate) fn new(span: Span) -> Self {
        Self {
            span,
            tokens: TokenStream::new(),
        }
    }

    pub(crate) fn into_tokens(self) -> TokenStream { self.tokens }
}

impl GenerationSink for TokenSink {
    fn emit(&mut self, artifact: GeneratedArtifact) -> Result<()> {
        artifact.to_tokens(&mut self.tokens);
        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        let message = diagnostic.message;
        let span = self.span;
        let tokens = match diagnostic.severity {
            Severity::Warning => {
                let usage = quote_spanned! {span=> let _ = GenBuildableSkipped; };
                quote! {
                    const _: () = {
                        #[deprecated(note = #message)]
                        struct GenBuildableSkipped;
                        #usage
                    };
                }
            }
            Severity::Error => syn::Error::new(span, message).into_compile_error(),
        };
        self.tokens.extend(tokens);
    }
}
