//! Naming constants shared by the synthesis engine and its hosts

// ============================================================================
// GENERATED NAMES
// ============================================================================

/// Prefix of the generated partial type (`MyData` -> `PartialMyData`)
pub const PARTIAL_TYPE_PREFIX: &str = "Partial";

/// Name of the derive the Rust host answers to, used in diagnostics
pub const DERIVE_NAME: &str = "GenBuildable";

/// Name of the helper attribute carrying host configuration
pub const ATTRIBUTE_NAME: &str = "buildable";

// ============================================================================
// GENERATED FILES
// ============================================================================

/// Default root under which artifacts are laid out, mirroring the package path
pub const DEFAULT_GENERATED_ROOT: &str = "generated";

/// Suffix of every generated file name (`my_data` -> `my_data_buildable.rs`)
pub const GENERATED_FILE_SUFFIX: &str = "_buildable.rs";

/// First line of every rendered artifact
pub const GENERATED_HEADER: &str = "// @generated by buildable_codegen. Do not edit.";

// ============================================================================
// RUNTIME PATHS
// ============================================================================

/// Default path of the runtime crate referenced from generated code
pub const DEFAULT_RUNTIME_PATH: &str = "::buildable";

/// Separator used in qualifiers handed over by hosts
pub const QUALIFIER_SEPARATOR: &str = ".";
