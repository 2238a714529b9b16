//! The boundary with the host compiler
//!
//! Hosts discover annotated declarations and describe each one as a
//! [`CandidateDeclaration`]. The [`Generator`] checks the two preconditions, builds the
//! record model, synthesizes the artifact, and hands artifacts and diagnostics to a
//! [`GenerationSink`].

mod collecting_sink;
mod directory_sink;
mod generator;

use serde::Deserialize;
use serde::Serialize;
use strum::AsRefStr;
use strum::Display;

pub use self::collecting_sink::CollectingSink;
pub use self::directory_sink::DirectorySink;
pub use self::generator::GenerationSummary;
pub use self::generator::Generator;
pub use self::generator::Outcome;
use crate::constants::DERIVE_NAME;
use crate::error::Result;
use crate::synthesis::GeneratedArtifact;

/// A position in the host's sources
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// File the declaration lives in
    pub path:   String,
    /// One-based line
    pub line:   u32,
    /// One-based column
    pub column: u32,
}

/// One lexically enclosing container of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnclosingScope {
    /// Name of the container
    pub name: String,
}

impl EnclosingScope {
    /// Create a scope entry
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

/// A declared field as the host sees it, before its type text is parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawField {
    /// Field name, unique within the record
    pub name:          String,
    /// The field's type as written, in the type-expression grammar
    pub raw_type_text: String,
    /// Whether the field is variadic
    #[serde(default)]
    pub is_variadic:   bool,
    /// Where the field is declared, for error reporting
    #[serde(default)]
    pub location:      Option<SourceLocation>,
    /// Visibility of the field as Rust source; `None` inherits the record's
    #[serde(default)]
    pub visibility:    Option<String>,
}

impl RawField {
    /// Create a non-variadic field without location
    pub fn new(name: impl Into<String>, raw_type_text: impl Into<String>) -> Self {
        Self {
            name:          name.into(),
            raw_type_text: raw_type_text.into(),
            is_variadic:   false,
            location:      None,
            visibility:    None,
        }
    }

    /// Give the field its own visibility (`pub`, `pub(crate)`, empty for private)
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = Some(visibility.into());
        self
    }

    /// Mark the field as variadic
    #[must_use]
    pub const fn variadic(mut self) -> Self {
        self.is_variadic = true;
        self
    }
}

/// A declaration carrying the generation annotation, as discovered by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDeclaration {
    /// Whether the declaration is a record (an immutable field aggregate)
    pub is_record_type:       bool,
    /// Whether the declaration has the static scope field accessors attach to
    pub has_companion_scope:  bool,
    /// Dot-separated fully qualified name
    pub fully_qualified_name: String,
    /// Lexically enclosing containers, innermost first
    #[serde(default)]
    pub enclosing_scopes:     Vec<EnclosingScope>,
    /// The primary field list; absent when the host could not find one
    pub fields:               Option<Vec<RawField>>,
    /// Visibility to give generated items (`pub`, `pub(crate)`, empty for private)
    #[serde(default)]
    pub visibility:           String,
    /// Where the declaration lives, for diagnostics
    #[serde(default)]
    pub location:             Option<SourceLocation>,
}

impl CandidateDeclaration {
    /// A public record candidate with both preconditions met
    pub fn record(fully_qualified_name: impl Into<String>, fields: Vec<RawField>) -> Self {
        Self {
            is_record_type:       true,
            has_companion_scope:  true,
            fully_qualified_name: fully_qualified_name.into(),
            enclosing_scopes:     Vec::new(),
            fields:               Some(fields),
            visibility:           "pub".to_string(),
            location:             None,
        }
    }

    /// Set the enclosing scopes, innermost first
    #[must_use]
    pub fn with_enclosing_scopes<I, S>(mut self, scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enclosing_scopes = scopes.into_iter().map(EnclosingScope::new).collect();
        self
    }

    /// Set the visibility of generated items
    #[must_use]
    pub fn with_visibility(mut self, visibility: impl Into<String>) -> Self {
        self.visibility = visibility.into();
        self
    }

    /// The simple name: the last segment of the fully qualified name
    pub fn simple_name(&self) -> &str {
        self.fully_qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.fully_qualified_name)
    }

    /// The first precondition this candidate fails, if any
    pub const fn unmet_precondition(&self) -> Option<PreconditionNotMet> {
        if !self.is_record_type {
            Some(PreconditionNotMet::NotARecord)
        } else if !self.has_companion_scope {
            Some(PreconditionNotMet::MissingCompanionScope)
        } else {
            None
        }
    }

    /// Location of a field, if the host supplied one
    pub fn field_location(&self, field: &str) -> Option<&SourceLocation> {
        self.fields
            .iter()
            .flatten()
            .find(|raw| raw.name == field)
            .and_then(|raw| raw.location.as_ref())
    }
}

/// The preconditions whose failure skips a candidate with a warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PreconditionNotMet {
    /// The declaration is not a record type
    NotARecord,
    /// The declaration lacks the scope field accessors attach to
    MissingCompanionScope,
}

impl PreconditionNotMet {
    /// The warning text reported for a skipped candidate
    pub fn message(self, record_name: &str) -> String {
        let requirement = match self {
            Self::NotARecord => "structs with named fields",
            Self::MissingCompanionScope => "types with a companion scope (no generic parameters)",
        };
        format!(
            "#[derive({DERIVE_NAME})] can only be applied to {requirement}. \
             No sources will be generated for `{record_name}`."
        )
    }
}

/// Diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Generation was skipped; compilation continues
    Warning,
    /// Generation failed for a record
    Error,
}

/// A message for the host to surface to the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// How serious the message is
    pub severity: Severity,
    /// Human readable text
    pub message:  String,
    /// Where to point, if known
    pub location: Option<SourceLocation>,
    /// Field the message concerns, if any
    pub field:    Option<String>,
}

impl Diagnostic {
    /// A warning for a skipped candidate
    pub fn skipped(candidate: &CandidateDeclaration, reason: PreconditionNotMet) -> Self {
        Self {
            severity: Severity::Warning,
            message:  reason.message(candidate.simple_name()),
            location: candidate.location.clone(),
            field:    None,
        }
    }

    /// An error for a candidate whose generation failed
    pub fn failed(
        candidate: &CandidateDeclaration,
        field: Option<&str>,
        message: impl Into<String>,
    ) -> Self {
        let location = field
            .and_then(|name| candidate.field_location(name))
            .or(candidate.location.as_ref())
            .cloned();
        Self {
            severity: Severity::Error,
            message: message.into(),
            location,
            field: field.map(ToString::to_string),
        }
    }
}

/// Receives what the core produces for each candidate
pub trait GenerationSink {
    /// Take ownership of a generated artifact
    fn emit(&mut self, artifact: GeneratedArtifact) -> Result<()>;

    /// Surface a diagnostic
    fn report(&mut self, diagnostic: Diagnostic);
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;

    #[test]
    fn test_unmet_precondition_order() {
        let mut candidate = CandidateDeclaration::record("a.B", vec![]);
        assert_eq!(candidate.unmet_precondition(), None);

        candidate.has_companion_scope = false;
        assert_eq!(
            candidate.unmet_precondition(),
            Some(PreconditionNotMet::MissingCompanionScope)
        );

        candidate.is_record_type = false;
        assert_eq!(
            candidate.unmet_precondition(),
            Some(PreconditionNotMet::NotARecord)
        );
    }

    #[test]
    fn test_skipped_message() {
        let candidate = CandidateDeclaration::record("com.example.MyData", vec![]);
        let diagnostic = Diagnostic::skipped(&candidate, PreconditionNotMet::NotARecord);
        assert_eq!(diagnostic.severity, Severity::Warning);
        assert_eq!(
            diagnostic.message,
            "#[derive(GenBuildable)] can only be applied to structs with named fields. \
             No sources will be generated for `MyData`."
        );
    }

    #[test]
    fn test_failed_points_at_field_location() {
        let mut field = RawField::new("arg1", "List<");
        field.location = Some(SourceLocation {
            path:   "src/lib.rs".to_string(),
            line:   4,
            column: 5,
        });
        let candidate = CandidateDeclaration::record("MyData", vec![field]);

        let diagnostic = Diagnostic::failed(&candidate, Some("arg1"), "bad type");
        assert_eq!(diagnostic.severity, Severity::Error);
        assert_eq!(diagnostic.location.unwrap().line, 4);
        assert_eq!(diagnostic.field.as_deref(), Some("arg1"));
    }

    #[test]
    fn test_candidate_from_json() {
        let candidate: CandidateDeclaration = serde_json::from_str(
            r#"{
                "is_record_type": true,
                "has_companion_scope": true,
                "fully_qualified_name": "com.example.test.Scope1.Nested",
                "enclosing_scopes": [{ "name": "Scope1" }],
                "fields": [
                    { "name": "arg1", "raw_type_text": "String" },
                    { "name": "arg3", "raw_type_text": "Int", "visibility": "pub(crate)" },
                    { "name": "arg2", "raw_type_text": "Int", "is_variadic": true }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(candidate.simple_name(), "Nested");
        assert_eq!(candidate.visibility, "");
        let fields = candidate.fields.unwrap();
        assert!(!fields[0].is_variadic);
        assert!(fields[2].is_variadic);
        assert_eq!(fields[0].visibility, None);
        assert_eq!(fields[1].visibility.as_deref(), Some("pub(crate)"));
    }

    #[test]
    fn test_severity_display() {
        assert_eq!(Severity::Warning.to_string(), "warning");
        assert_eq!(
            PreconditionNotMet::MissingCompanionScope.as_ref(),
            "missing_companion_scope"
        );
    }
}
