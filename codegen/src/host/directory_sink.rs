//! A sink that writes each artifact under an output directory

use std::fs;
use std::path::Path;
use std::path::PathBuf;

use error_stack::Report;

use super::Diagnostic;
use super::GenerationSink;
use crate::error::Error;
use crate::error::Result;
use crate::synthesis::GeneratedArtifact;

/// Writes `artifact.render()` to `<root>/<artifact.target_file>`, creating parent
/// directories as needed. Diagnostics are kept for the caller to surface.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    root:        PathBuf,
    written:     Vec<PathBuf>,
    diagnostics: Vec<Diagnostic>,
}

impl DirectorySink {
    /// Write under `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root:        root.into(),
            written:     Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// The output directory
    pub fn root(&self) -> &Path { &self.root }

    /// Files written so far
    pub fn written(&self) -> &[PathBuf] { &self.written }

    /// Diagnostics reported so far
    pub fn diagnostics(&self) -> &[Diagnostic] { &self.diagnostics }
}

impl GenerationSink for DirectorySink {
    fn emit(&mut self, artifact: GeneratedArtifact) -> Result<()> {
        let path = self.root.join(&artifact.target_file);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Report::new(Error::io_failed("create directory", parent, e)))?;
        }
        fs::write(&path, artifact.render())
            .map_err(|e| Report::new(Error::io_failed("write", &path, e)))?;

        tracing::debug!(path = %path.display(), "Wrote generated source");
        self.written.push(path);
        Ok(())
    }

    fn report(&mut self, diagnostic: Diagnostic) { self.diagnostics.push(diagnostic); }
}
