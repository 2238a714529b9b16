//! Describes a derive input to the core as a candidate declaration

use buildable_codegen::CandidateDeclaration;
use buildable_codegen::RawField;
use quote::ToTokens;
use syn::Data;
use syn::DeriveInput;
use syn::Fields;
use syn::GenericArgument;
use syn::PathArguments;
use syn::Type;

/// The input as the core sees it.
///
/// Structs with named fields and unit structs are records. Every field carries its own
/// visibility, so a private field stays private on the partial. A type with generic
/// parameters has no parameter-free namespace to hang field accessors on, so it has no
/// companion scope.
pub(crate) fn candidate(input: &DeriveInput) -> CandidateDeclaration {
    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => Some(
                named
                    .named
                    .iter()
                    .filter_map(|field| {
                        field.ident.as_ref().map(|ident| {
                            RawField::new(field_name(ident), type_text(&field.ty))
                                .with_visibility(field.vis.to_token_stream().to_string())
                        })
                    })
                    .collect(),
            ),
            Fields::Unit => Some(Vec::new()),
            Fields::Unnamed(_) => None,
        },
        Data::Enum(_) | Data::Union(_) => None,
    };

    CandidateDeclaration {
        is_record_type:       fields.is_some(),
        has_companion_scope:  input.generics.params.is_empty(),
        fully_qualified_name: input.ident.to_string(),
        enclosing_scopes:     Vec::new(),
        fields,
        visibility:           input.vis.to_token_stream().to_string(),
        location:             None,
    }
}

/// A field name as written, keeping any `r#` prefix so it stays a valid identifier
pub(crate) fn field_name(ident: &syn::Ident) -> String { ident.to_string() }

/// A field type in the accessor grammar.
///
/// `Option<T>` becomes `T?` and generic arguments are joined with `, `. Anything the
/// grammar cannot express is rendered as written so the parser reports it.
fn type_text(ty: &Type) -> String {
    match ty {
        Type::Group(group) => type_text(&group.elem),
        Type::Paren(paren) => type_text(&paren.elem),
        Type::Path(path) if path.qself.is_none() => path_text(&path.path)
            .unwrap_or_else(|| ty.to_token_stream().to_string()),
        _ => ty.to_token_stream().to_string(),
    }
}

fn path_text(path: &syn::Path) -> Option<String> {
    if let Some(inner) = option_argument(path) {
        return Some(format!("{}?", type_text(inner)));
    }

    let mut segments = Vec::with_capacity(path.segments.len());
    for segment in &path.segments {
        let arguments = match &segment.arguments {
            PathArguments::None => String::new(),
            PathArguments::AngleBracketed(arguments) => {
                let types = arguments
                    .args
                    .iter()
                    .map(|argument| match argument {
                        GenericArgument::Type(ty) => Some(type_text(ty)),
                        _ => None,
                    })
                    .collect::<Option<Vec<_>>>()?;
                format!("<{}>", types.join(", "))
            }
            PathArguments::Parenthesized(_) => return None,
        };
        segments.push(format!("{}{arguments}", segment.ident));
    }

    let leading = if path.leading_colon.is_some() { "::" } else { "" };
    Some(format!("{leading}{}", segments.join("::")))
}

/// `T` when the path is exactly `Option<T>`
fn option_argument(path: &syn::Path) -> Option<&Type> {
    if path.leading_colon.is_some() || path.segments.len() != 1 {
        return None;
    }
    let segment = path.segments.first()?;
    if segment.ident != "Option" {
        return None;
    }
    let PathArguments::AngleBracketed(arguments) = &segment.arguments else {
        return None;
    };
    match arguments.args.first() {
        Some(GenericArgument::Type(inner)) if arguments.args.len() == 1 => Some(inner),
        _ => None,
    }
}
