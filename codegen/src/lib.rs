//! Partial, builder, and lens synthesis for record types
//!
//! The pipeline for one annotated declaration:
//!
//! 1. a host describes it as a [`CandidateDeclaration`]
//! 2. the [`Generator`] skips it with a warning when a precondition fails
//! 3. [`build_record`] parses every field type into a [`TypeExpr`] and yields a
//!    [`RecordDescriptor`]
//! 4. [`synthesize`] turns the descriptor into a [`GeneratedArtifact`]
//! 5. a [`GenerationSink`] takes the artifact, as tokens or as a file
//!
//! ```
//! use buildable_codegen::CandidateDeclaration;
//! use buildable_codegen::CollectingSink;
//! use buildable_codegen::Generator;
//! use buildable_codegen::RawField;
//!
//! let candidate = CandidateDeclaration::record(
//!     "com.bedelln.example.MyData",
//!     vec![RawField::new("arg1", "String"), RawField::new("arg2", "i32")],
//! );
//! let mut sink = CollectingSink::default();
//! Generator::default().process(&candidate, &mut sink)?;
//!
//! assert_eq!(sink.artifacts()[0].partial_type_name, "PartialMyData");
//! # Ok::<(), error_stack::Report<buildable_codegen::Error>>(())
//! ```

mod config;
pub mod constants;
mod error;
mod host;
mod record;
mod synthesis;
mod type_expr;

pub use config::CodegenConfig;
pub use error::Error;
pub use error::Result;
pub use error::describe;
pub use host::CandidateDeclaration;
pub use host::CollectingSink;
pub use host::Diagnostic;
pub use host::DirectorySink;
pub use host::EnclosingScope;
pub use host::GenerationSink;
pub use host::GenerationSummary;
pub use host::Generator;
pub use host::Outcome;
pub use host::PreconditionNotMet;
pub use host::RawField;
pub use host::Severity;
pub use host::SourceLocation;
pub use record::FieldDescriptor;
pub use record::RecordDescriptor;
pub use record::build_record;
pub use synthesis::Declaration;
pub use synthesis::DeclarationKind;
pub use synthesis::GeneratedArtifact;
pub use synthesis::synthesize;
pub use type_expr::TypeExpr;
pub use type_expr::parse_type_expr;
