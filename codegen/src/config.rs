//! Generation settings shared by every record processed by a [`Generator`](crate::Generator)

use std::path::Path;
use std::path::PathBuf;

use error_stack::Report;

use crate::constants::DEFAULT_GENERATED_ROOT;
use crate::constants::DEFAULT_RUNTIME_PATH;
use crate::error::Error;
use crate::error::Result;

/// Settings for the synthesis engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodegenConfig {
    runtime_path:   syn::Path,
    generated_root: PathBuf,
}

impl Default for CodegenConfig {
    fn default() -> Self {
        Self {
            runtime_path:   default_runtime_path(),
            generated_root: PathBuf::from(DEFAULT_GENERATED_ROOT),
        }
    }
}

impl CodegenConfig {
    /// Path of the runtime crate the generated code refers to (default `::buildable`)
    pub const fn runtime_path(&self) -> &syn::Path { &self.runtime_path }

    /// Root directory artifacts are placed under (default `generated`)
    pub fn generated_root(&self) -> &Path { &self.generated_root }

    /// Use a different runtime crate path, e.g. when the runtime is re-exported
    #[must_use]
    pub fn with_runtime_path(mut self, path: syn::Path) -> Self {
        self.runtime_path = path;
        self
    }

    /// Parse and use a runtime crate path given as text
    pub fn with_runtime_path_str(self, path: &str) -> Result<Self> {
        let parsed = syn::parse_str::<syn::Path>(path).map_err(|e| {
            Report::new(Error::invalid_identifier("runtime crate path", path))
                .attach(e.to_string())
        })?;
        Ok(self.with_runtime_path(parsed))
    }

    /// Place artifacts under a different root
    #[must_use]
    pub fn with_generated_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.generated_root = root.into();
        self
    }
}

fn default_runtime_path() -> syn::Path {
    let runtime = syn::Ident::new(
        DEFAULT_RUNTIME_PATH.trim_start_matches("::"),
        proc_macro2::Span::call_site(),
    );
    syn::parse_quote!(::#runtime)
}
