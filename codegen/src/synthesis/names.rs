//! Identifiers, paths, and types derived from a record descriptor

use std::path::PathBuf;

use error_stack::Report;
use error_stack::ResultExt;
use heck::ToSnakeCase;
use itertools::Itertools;

use crate::config::CodegenConfig;
use crate::constants::GENERATED_FILE_SUFFIX;
use crate::constants::PARTIAL_TYPE_PREFIX;
use crate::error::Error;
use crate::error::Result;
use crate::record::FieldDescriptor;
use crate::record::RecordDescriptor;
use crate::type_expr::rust_ident;

/// A record field lowered to Rust
pub(super) struct LoweredField {
    /// The field's identifier
    pub ident:      syn::Ident,
    /// The field's type on the record
    pub value_ty:   syn::Type,
    /// The field's type on the partial, always an `Option`
    pub partial_ty: syn::Type,
    /// Whether the record type is already nullable, making both types equal
    pub nullable:   bool,
    /// The field name as text
    pub name:       String,
    /// Visibility of the partial field and the accessor
    pub visibility: syn::Visibility,
}

/// Everything the declaration builders need, computed once per record
pub(super) struct SynthesisContext {
    /// Path of the record relative to the package (`Scope1::Nested`)
    pub record_path:   syn::Path,
    /// Name of the record as written in messages (`Scope1.Nested`)
    pub record_name:   String,
    /// Name of the partial type
    pub partial_ident: syn::Ident,
    /// Path of the runtime crate
    pub runtime:       syn::Path,
    /// Visibility of generated items
    pub visibility:    syn::Visibility,
    /// Lowered fields in declaration order
    pub fields:        Vec<LoweredField>,
}

impl SynthesisContext {
    pub(super) fn new(record: &RecordDescriptor, config: &CodegenConfig) -> Result<Self> {
        let segments = record
            .record_path_segments()
            .into_iter()
            .map(rust_ident)
            .collect::<Result<Vec<_>>>()?;
        let record_path = syn::parse_quote!(#(#segments)::*);

        let partial_ident = rust_ident(&format!("{PARTIAL_TYPE_PREFIX}{}", record.name))?;

        let visibility = parse_visibility(&record.visibility)?;

        let fields = record
            .fields
            .iter()
            .map(|field| {
                lower_field(field, &record.visibility)
                    .change_context(Error::invalid_field(&record.name, &field.name))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            record_path,
            record_name: record.scoped_name(),
            partial_ident,
            runtime: config.runtime_path().clone(),
            visibility,
            fields,
        })
    }
}

/// Lower a field; a field without its own visibility takes `record_visibility`
fn lower_field(field: &FieldDescriptor, record_visibility: &str) -> Result<LoweredField> {
    let ident = rust_ident(&field.name)?;
    let visibility = parse_visibility(field.visibility.as_deref().unwrap_or(record_visibility))?;

    let (value_ty, partial_ty, nullable) = if field.is_variadic {
        // A variadic field of element type T holds every supplied element
        let element = field.ty.to_rust_type()?;
        (
            syn::parse_quote!(::std::vec::Vec<#element>),
            syn::parse_quote!(::core::option::Option<::std::vec::Vec<#element>>),
            false,
        )
    } else {
        (
            field.ty.to_rust_type()?,
            field.ty.clone().with_nullable(true).to_rust_type()?,
            field.ty.nullable,
        )
    };

    Ok(LoweredField {
        ident,
        value_ty,
        partial_ty,
        nullable,
        name: field.name.clone(),
        visibility,
    })
}

fn parse_visibility(visibility: &str) -> Result<syn::Visibility> {
    if visibility.trim().is_empty() {
        return Ok(syn::Visibility::Inherited);
    }
    syn::parse_str::<syn::Visibility>(visibility).map_err(|e| {
        Report::new(Error::invalid_identifier("visibility", visibility)).attach(e.to_string())
    })
}

/// `<generated_root>/<package path>/<snake_case scoped name>_buildable.rs`
///
/// The enclosing scopes are part of the file name, so `Scope1.Nested` and `Scope2.Nested`
/// in one package land in different files.
pub(super) fn target_file(record: &RecordDescriptor, config: &CodegenConfig) -> PathBuf {
    let stem = record
        .record_path_segments()
        .iter()
        .map(|segment| segment.to_snake_case())
        .join("_");
    let mut path = config.generated_root().to_path_buf();
    path.extend(record.package_segments());
    path.push(format!("{stem}{GENERATED_FILE_SUFFIX}"));
    path
}
