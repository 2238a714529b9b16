//! The normalized record model the synthesis engine consumes

mod builder;

use itertools::Itertools;

pub use self::builder::build_record;
use crate::constants::QUALIFIER_SEPARATOR;
use crate::type_expr::TypeExpr;

/// A field of a record, with its type parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name, unique within the owning record
    pub name:        String,
    /// Parsed field type
    pub ty:          TypeExpr,
    /// Whether the field is variadic
    pub is_variadic: bool,
    /// Visibility of the field as Rust source; `None` inherits the record's
    pub visibility:  Option<String>,
}

impl FieldDescriptor {
    /// Create a non-variadic field
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            is_variadic: false,
            visibility: None,
        }
    }
}

/// A discovered record, ready for synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDescriptor {
    /// Package the record lives in, dot separated, possibly empty
    pub package_qualifier:         String,
    /// Enclosing containers, outer to inner, dot separated, possibly empty
    pub enclosing_scope_qualifier: String,
    /// Simple name of the record
    pub name:                      String,
    /// Visibility of generated items, as Rust source (`pub`, `pub(crate)`, or empty)
    pub visibility:                String,
    /// Fields in declaration order
    pub fields:                    Vec<FieldDescriptor>,
}

impl RecordDescriptor {
    /// The name qualified by its enclosing scopes (`Scope1.Nested`)
    pub fn scoped_name(&self) -> String {
        join_qualified([self.enclosing_scope_qualifier.as_str(), self.name.as_str()])
    }

    /// The globally unique name (`com.example.Scope1.Nested`)
    pub fn qualified_name(&self) -> String {
        join_qualified([
            self.package_qualifier.as_str(),
            self.enclosing_scope_qualifier.as_str(),
            self.name.as_str(),
        ])
    }

    /// Path segments naming the record relative to its package
    pub fn record_path_segments(&self) -> Vec<&str> {
        self.enclosing_scope_qualifier
            .split(QUALIFIER_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .chain(std::iter::once(self.name.as_str()))
            .collect()
    }

    /// Path segments of the package
    pub fn package_segments(&self) -> Vec<&str> {
        self.package_qualifier
            .split(QUALIFIER_SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

/// Join non-empty qualifier parts with the qualifier separator
pub(crate) fn join_qualified<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .join(QUALIFIER_SEPARATOR)
}
