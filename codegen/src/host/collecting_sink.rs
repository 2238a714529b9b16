//! A sink that keeps everything in memory

use super::Diagnostic;
use super::GenerationSink;
use crate::error::Result;
use crate::synthesis::GeneratedArtifact;

/// Collects artifacts and diagnostics in the order they arrive
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    artifacts:   Vec<GeneratedArtifact>,
    diagnostics: Vec<Diagnostic>,
}

impl CollectingSink {
    /// Artifacts emitted so far
    pub fn artifacts(&self) -> &[GeneratedArtifact] { &self.artifacts }

    /// Diagnostics reported so far
    pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }

    /// Consume the sink, returning artifacts and diagnostics
    pub fn into_parts(self) -> (Vec<GeneratedArtifact>, Vec<Diagnostic>) {
        (self.artifacts, self.diagnostics)
    }
}

impl GenerationSink for CollectingSink {
    fn emit(&mut self, artifact: GeneratedArtifact) -> Result<()> {
        self.artifacts.push(artifact);
        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) { self.diagnostics.push(diagnostic); }
}
