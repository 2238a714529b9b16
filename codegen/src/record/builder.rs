//! Builds a [`RecordDescriptor`] from a host candidate

use std::collections::HashSet;

use error_stack::Report;
use error_stack::ResultExt;
use itertools::Itertools;

use super::FieldDescriptor;
use super::RecordDescriptor;
use super::join_qualified;
use crate::constants::QUALIFIER_SEPARATOR;
use crate::error::Error;
use crate::error::Result;
use crate::host::CandidateDeclaration;
use crate::type_expr::TypeExpr;

/// Model a candidate whose preconditions the host has already checked.
///
/// Fails with [`Error::InvariantViolated`] when the primary field list is absent, field
/// names repeat, or the fully qualified name does not end with the scoped name. A field
/// whose type text does not parse fails with [`Error::InvalidField`] on top of the
/// [`Error::MalformedTypeExpression`].
pub fn build_record(candidate: &CandidateDeclaration) -> Result<RecordDescriptor> {
    let name = candidate.simple_name().to_string();

    let Some(raw_fields) = &candidate.fields else {
        return Err(Report::new(Error::invariant(format!(
            "record `{}` has no primary field list",
            candidate.fully_qualified_name
        ))));
    };

    // The host walks outward from the declaration, so the innermost scope comes first
    let enclosing_scope_qualifier = candidate
        .enclosing_scopes
        .iter()
        .rev()
        .map(|scope| scope.name.as_str())
        .join(QUALIFIER_SEPARATOR);

    let package_qualifier = strip_scoped_suffix(
        &candidate.fully_qualified_name,
        &join_qualified([enclosing_scope_qualifier.as_str(), name.as_str()]),
    )?;

    let mut seen = HashSet::new();
    let fields = raw_fields
        .iter()
        .map(|raw| {
            if !seen.insert(raw.name.as_str()) {
                return Err(Report::new(Error::invariant(format!(
                    "field `{}` is declared twice in `{name}`",
                    raw.name
                ))));
            }
            let ty = TypeExpr::parse(&raw.raw_type_text)
                .change_context(Error::invalid_field(&name, &raw.name))?;
            Ok(FieldDescriptor {
                name: raw.name.clone(),
                ty,
                is_variadic: raw.is_variadic,
                visibility: raw.visibility.clone(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        record = %name,
        package = %package_qualifier,
        scope = %enclosing_scope_qualifier,
        field_count = fields.len(),
        "Built record descriptor"
    );

    Ok(RecordDescriptor {
        package_qualifier,
        enclosing_scope_qualifier,
        name,
        visibility: candidate.visibility.clone(),
        fields,
    })
}

/// Remove `.scoped_name` (or the whole string when it equals `scoped_name`) from the end
/// of a fully qualified name
fn strip_scoped_suffix(fully_qualified_name: &str, scoped_name: &str) -> Result<String> {
    if fully_qualified_name == scoped_name {
        return Ok(String::new());
    }
    fully_qualified_name
        .strip_suffix(scoped_name)
        .and_then(|prefix| prefix.strip_suffix(QUALIFIER_SEPARATOR))
        .map(ToString::to_string)
        .ok_or_else(|| {
            Report::new(Error::invariant(format!(
                "`{fully_qualified_name}` does not end with `{scoped_name}`"
            )))
        })
}
