//! Drives one candidate at a time from discovery to emission

use super::CandidateDeclaration;
use super::Diagnostic;
use super::GenerationSink;
use super::PreconditionNotMet;
use crate::config::CodegenConfig;
use crate::error::Result;
use crate::error::describe;
use crate::record::build_record;
use crate::synthesis::synthesize;

/// What happened to a single candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// An artifact was emitted
    Generated {
        /// Name of the generated partial type
        partial_type_name: String,
    },
    /// A precondition failed; a warning was reported and nothing was emitted
    Skipped(PreconditionNotMet),
}

/// Counts over a batch of candidates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Candidates that produced an artifact
    pub generated: usize,
    /// Candidates skipped with a warning
    pub skipped:   usize,
    /// Candidates that failed with an error
    pub failed:    usize,
}

/// Processes candidates independently: no state is shared between two candidates
#[derive(Debug, Clone, Default)]
pub struct Generator {
    config: CodegenConfig,
}

impl Generator {
    /// Create a generator with the given configuration
    pub const fn new(config: CodegenConfig) -> Self { Self { config } }

    /// The configuration in use
    pub const fn config(&self) -> &CodegenConfig { &self.config }

    /// Check preconditions, model the record, synthesize, and emit.
    ///
    /// A failed precondition is reported to the sink as a warning and yields
    /// [`Outcome::Skipped`]. Any other failure is returned and nothing is emitted.
    pub fn process(
        &self,
        candidate: &CandidateDeclaration,
        sink: &mut impl GenerationSink,
    ) -> Result<Outcome> {
        if let Some(reason) = candidate.unmet_precondition() {
            let diagnostic = Diagnostic::skipped(candidate, reason);
            tracing::warn!(
                record = %candidate.fully_qualified_name,
                reason = %reason,
                "{}",
                diagnostic.message
            );
            sink.report(diagnostic);
            return Ok(Outcome::Skipped(reason));
        }

        let record = build_record(candidate)?;
        let artifact = synthesize(&record, &self.config)?;
        let partial_type_name = artifact.partial_type_name.clone();

        tracing::debug!(
            record = %artifact.record_name,
            target = %artifact.target_file.display(),
            "Emitting artifact"
        );
        sink.emit(artifact)?;

        Ok(Outcome::Generated { partial_type_name })
    }

    /// Process every candidate, reporting failures as error diagnostics and moving on
    pub fn process_all<'a>(
        &self,
        candidates: impl IntoIterator<Item = &'a CandidateDeclaration>,
        sink: &mut impl GenerationSink,
    ) -> GenerationSummary {
        let mut summary = GenerationSummary::default();
        for candidate in candidates {
            match self.process(candidate, sink) {
                Ok(Outcome::Generated { .. }) => summary.generated += 1,
                Ok(Outcome::Skipped(_)) => summary.skipped += 1,
                Err(report) => {
                    summary.failed += 1;
                    let message = describe(&report);
                    tracing::error!(
                        record = %candidate.fully_qualified_name,
                        "{message}"
                    );
                    sink.report(Diagnostic::failed(
                        candidate,
                        report.current_context().field(),
                        message,
                    ));
                }
            }
        }
        tracing::debug!(
            generated = summary.generated,
            skipped = summary.skipped,
            failed = summary.failed,
            "Processed candidates"
        );
        summary
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "tests")]
mod tests {
    use super::*;
    use crate::host::CollectingSink;
    use crate::host::RawField;
    use crate::host::Severity;

    fn my_data() -> CandidateDeclaration {
        CandidateDeclaration::record(
            "com.bedelln.example.MyData",
            vec![RawField::new("arg1", "String"), RawField::new("arg2", "i32")],
        )
    }

    #[test]
    fn test_process_emits_artifact() {
        let mut sink = CollectingSink::default();
        let outcome = Generator::default().process(&my_data(), &mut sink).unwrap();

        assert_eq!(
            outcome,
            Outcome::Generated {
                partial_type_name: "PartialMyData".to_string(),
            }
        );
        assert_eq!(sink.artifacts().len(), 1);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn test_not_a_record_is_skipped_with_warning() {
        let mut candidate = my_data();
        candidate.is_record_type = false;
        let mut sink = CollectingSink::default();

        let outcome = Generator::default().process(&candidate, &mut sink).unwrap();

        assert_eq!(outcome, Outcome::Skipped(PreconditionNotMet::NotARecord));
        assert!(sink.artifacts().is_empty());
        assert_eq!(sink.diagnostics().len(), 1);
        assert_eq!(sink.diagnostics()[0].severity, Severity::Warning);
        assert!(sink.diagnostics()[0].message.contains("`MyData`"));
    }

    #[test]
    fn test_missing_companion_scope_is_skipped_with_warning() {
        let mut candidate = my_data();
        candidate.has_companion_scope = false;
        let mut sink = CollectingSink::default();

        let outcome = Generator::default().process(&candidate, &mut sink).unwrap();

        assert_eq!(
            outcome,
            Outcome::Skipped(PreconditionNotMet::MissingCompanionScope)
        );
        assert!(sink.artifacts().is_empty());
    }

    #[test]
    fn test_process_all_continues_after_failure() {
        let broken = CandidateDeclaration::record(
            "com.bedelln.example.Broken",
            vec![RawField::new("arg1", "List<Int")],
        );
        let mut skipped = my_data();
        skipped.is_record_type = false;
        let candidates = [broken, skipped, my_data()];
        let mut sink = CollectingSink::default();

        let summary = Generator::default().process_all(&candidates, &mut sink);

        assert_eq!(
            summary,
            GenerationSummary {
                generated: 1,
                skipped:   1,
                failed:    1,
            }
        );
        assert_eq!(sink.artifacts().len(), 1);
        let error = &sink.diagnostics()[0];
        assert_eq!(error.severity, Severity::Error);
        assert_eq!(error.field.as_deref(), Some("arg1"));
        assert_eq!(
            error.message,
            "Invalid field `arg1` of record `Broken`: \
             Malformed type expression 'List<Int' at offset 8"
        );
    }
}
