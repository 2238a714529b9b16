//! Code synthesis: from a [`RecordDescriptor`] to a [`GeneratedArtifact`]
//!
//! Every declaration is built as a `syn::Item` and only turned into text by
//! [`GeneratedArtifact::render`]. All names derive from the descriptor and the
//! [`CodegenConfig`], so synthesizing the same descriptor twice yields identical output.
//!
//! For a record `MyData { arg1: String, arg2: i32 }` the artifact contains, in order:
//! - `PartialMyData`, one `Option` field per record field
//! - `impl Semigroup for PartialMyData`, field-wise `self.f.or(other.f)`
//! - `impl Partial for PartialMyData`, `build` succeeding iff every field is set
//! - `impl Buildable for MyData`, tying the record to its partial
//! - `impl MyData`, one `Field` accessor per record field

mod build;
mod combine;
mod context;
mod fields;
mod names;
mod partial;

use std::path::PathBuf;

use proc_macro2::TokenStream;
use quote::ToTokens;
use quote::quote;
use strum::AsRefStr;
use strum::Display;

use self::names::SynthesisContext;
use crate::config::CodegenConfig;
use crate::constants::GENERATED_HEADER;
use crate::error::Result;
use crate::record::RecordDescriptor;

/// What a generated declaration provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum DeclarationKind {
    /// The partial struct
    PartialType,
    /// The biased merge of two partials
    Combine,
    /// Turning a complete partial into the record
    Build,
    /// The per-record `Buildable` implementation
    Context,
    /// Field accessors on the record
    Fields,
}

/// One generated declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    /// What the declaration provides
    pub kind: DeclarationKind,
    /// The declaration itself
    pub item: syn::Item,
}

impl Declaration {
    const fn new(kind: DeclarationKind, item: syn::Item) -> Self { Self { kind, item } }

    /// Pretty-printed source of this declaration alone
    pub fn to_source(&self) -> String { unparse(vec![self.item.clone()]) }
}

/// Everything generated for one record
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedArtifact {
    /// Qualified name of the record this was generated for
    pub record_name:            String,
    /// Name of the generated partial type
    pub partial_type_name:      String,
    /// Generated declarations, in emission order
    pub generated_declarations: Vec<Declaration>,
    /// Suggested output file, relative to the host's output directory
    pub target_file:            PathBuf,
}

impl GeneratedArtifact {
    /// The declaration of a given kind, if generated
    pub fn declaration(&self, kind: DeclarationKind) -> Option<&Declaration> {
        self.generated_declarations
            .iter()
            .find(|declaration| declaration.kind == kind)
    }

    /// Each declaration as pretty-printed text
    pub fn declaration_texts(&self) -> Vec<String> {
        self.generated_declarations
            .iter()
            .map(Declaration::to_source)
            .collect()
    }

    /// The whole artifact as the text of one source file
    pub fn render(&self) -> String {
        let body = unparse(
            self.generated_declarations
                .iter()
                .map(|declaration| declaration.item.clone())
                .collect(),
        );
        format!("{GENERATED_HEADER}\n\n{body}")
    }
}

impl ToTokens for GeneratedArtifact {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let items = self
            .generated_declarations
            .iter()
            .map(|declaration| &declaration.item);
        tokens.extend(quote! { #(#items)* });
    }
}

/// Synthesize every declaration for a record
pub fn synthesize(record: &RecordDescriptor, config: &CodegenConfig) -> Result<GeneratedArtifact> {
    let ctx = SynthesisContext::new(record, config)?;

    let generated_declarations = vec![
        Declaration::new(DeclarationKind::PartialType, partial::partial_type(&ctx)),
        Declaration::new(DeclarationKind::Combine, combine::combine_impl(&ctx)),
        Declaration::new(DeclarationKind::Build, build::build_impl(&ctx)),
        Declaration::new(DeclarationKind::Context, context::buildable_impl(&ctx)),
        Declaration::new(DeclarationKind::Fields, fields::field_accessors(&ctx)),
    ];

    for declaration in &generated_declarations {
        tracing::debug!(
            record = %record.qualified_name(),
            kind = %declaration.kind,
            "Synthesized declaration"
        );
    }

    Ok(GeneratedArtifact {
        record_name: record.qualified_name(),
        partial_type_name: ctx.partial_ident.to_string(),
        generated_declarations,
        target_file: names::target_file(record, config),
    })
}

fn unparse(items: Vec<syn::Item>) -> String {
    prettyplease::unparse(&syn::File {
        shebang: None,
        attrs: Vec::new(),
        items,
    })
}
