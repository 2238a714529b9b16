//! Structured type expressions and their textual grammar
//!
//! A [`TypeExpr`] is the narrow type representation the synthesis engine works on:
//! a name, ordered type arguments, and outermost nullability. It round-trips through
//! its normalized text (`Map<Int, String>?`) and lowers to a Rust type, with nullability
//! becoming `Option`.

mod parser;

use std::fmt;
use std::str::FromStr;

use error_stack::Report;
use itertools::Itertools;

pub use self::parser::parse_type_expr;
use crate::error::Error;
use crate::error::Result;

/// A parsed type signature
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeExpr {
    /// Base type name, never empty
    pub name:      String,
    /// Generic arguments, empty unless the text contained `<...>`
    pub type_args: Vec<Self>,
    /// Whether the text ended with `?` at this level
    pub nullable:  bool,
}

impl TypeExpr {
    /// Parse a type expression from text
    pub fn parse(text: &str) -> Result<Self> { parse_type_expr(text) }

    /// A non-nullable type without arguments
    pub fn simple(name: impl Into<String>) -> Self {
        Self {
            name:      name.into(),
            type_args: Vec::new(),
            nullable:  false,
        }
    }

    /// A non-nullable type with arguments
    pub fn generic(name: impl Into<String>, type_args: Vec<Self>) -> Self {
        Self {
            name: name.into(),
            type_args,
            nullable: false,
        }
    }

    /// The same type with outermost nullability replaced
    #[must_use]
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Lower to a Rust type; nullable types become `::core::option::Option<T>`
    pub fn to_rust_type(&self) -> Result<syn::Type> {
        let inner = self.to_rust_type_ignoring_nullability()?;
        if self.nullable {
            Ok(syn::parse_quote!(::core::option::Option<#inner>))
        } else {
            Ok(inner)
        }
    }

    /// Lower to a Rust type as if this level were not nullable; arguments keep their own
    /// nullability
    pub fn to_rust_type_ignoring_nullability(&self) -> Result<syn::Type> {
        let name = rust_ident(&self.name)?;
        if self.type_args.is_empty() {
            return Ok(syn::parse_quote!(#name));
        }
        let args = self
            .type_args
            .iter()
            .map(Self::to_rust_type)
            .collect::<Result<Vec<_>>>()?;
        Ok(syn::parse_quote!(#name<#(#args),*>))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        if !self.type_args.is_empty() {
            write!(f, "<{}>", self.type_args.iter().join(", "))?;
        }
        if self.nullable {
            f.write_str("?")?;
        }
        Ok(())
    }
}

impl FromStr for TypeExpr {
    type Err = Report<Error>;

    fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

/// Convert a name from a descriptor into a Rust identifier
pub(crate) fn rust_ident(name: &str) -> Result<syn::Ident> {
    syn::parse_str::<syn::Ident>(name).map_err(|e| {
        Report::new(Error::invalid_identifier("type or field", name)).attach(e.to_string())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests")]
mod tests {
    use proptest::prelude::*;
    use quote::ToTokens;

    use super::*;

    fn rust(text: &str) -> String {
        TypeExpr::parse(text)
            .unwrap()
            .to_rust_type()
            .unwrap()
            .to_token_stream()
            .to_string()
    }

    #[test]
    fn test_display_normalizes_whitespace() {
        let parsed = TypeExpr::parse("Map<Int,List<String?>  ,  Double>?").unwrap();
        assert_eq!(parsed.to_string(), "Map<Int, List<String?>, Double>?");
    }

    #[test]
    fn test_from_str() {
        let parsed: TypeExpr = "Int?".parse().unwrap();
        assert_eq!(parsed, TypeExpr::simple("Int").with_nullable(true));
    }

    #[test]
    fn test_to_rust_type() {
        assert_eq!(rust("i32"), "i32");
        assert_eq!(rust("f64?"), ":: core :: option :: Option < f64 >");
        assert_eq!(
            rust("HashMap<u32, Vec<String?>>"),
            "HashMap < u32 , Vec < :: core :: option :: Option < String > > >"
        );
    }

    #[test]
    fn test_to_rust_type_ignoring_nullability() {
        let parsed = TypeExpr::parse("Vec<i32?>?").unwrap();
        assert_eq!(
            parsed
                .to_rust_type_ignoring_nullability()
                .unwrap()
                .to_token_stream()
                .to_string(),
            "Vec < :: core :: option :: Option < i32 > >"
        );
    }

    #[test]
    fn test_invalid_rust_identifiers() {
        for text in ["1st", "type", "_"] {
            let error = TypeExpr::parse(text).unwrap().to_rust_type().unwrap_err();
            assert!(
                matches!(error.current_context(), Error::InvalidIdentifier(_)),
                "{text} should not lower"
            );
        }
    }

    fn type_expr_strategy() -> impl Strategy<Value = TypeExpr> {
        let leaf = ("[A-Za-z_][A-Za-z0-9_]{0,6}", any::<bool>())
            .prop_map(|(name, nullable)| TypeExpr::simple(name).with_nullable(nullable));
        leaf.prop_recursive(3, 16, 3, |inner| {
            (
                "[A-Z][a-z]{0,5}",
                prop::collection::vec(inner, 1..4),
                any::<bool>(),
            )
                .prop_map(|(name, args, nullable)| {
                    TypeExpr::generic(name, args).with_nullable(nullable)
                })
        })
    }

    proptest! {
        #[test]
        fn prop_render_then_parse_is_identity(expr in type_expr_strategy()) {
            let rendered = expr.to_string();
            prop_assert_eq!(TypeExpr::parse(&rendered).unwrap(), expr);
        }

        #[test]
        fn prop_render_normalizes_comma_spacing(
            expr in type_expr_strategy(),
            padding in "[ \t]{0,3}",
        ) {
            let normalized = expr.to_string();
            let padded = normalized.replace(", ", &format!("{padding},{padding}"));
            prop_assert_eq!(TypeExpr::parse(&padded).unwrap().to_string(), normalized);
        }
    }
}
