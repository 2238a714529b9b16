//! The `#[buildable(...)]` helper attribute

use buildable_codegen::CodegenConfig;
use buildable_codegen::constants::ATTRIBUTE_NAME;

/// Host settings read from `#[buildable(...)]`
#[derive(Debug, Default)]
pub(crate) struct HostAttributes {
    /// Path of the runtime crate, from `crate = "..."`
    pub runtime_path: Option<syn::Path>,
}

impl HostAttributes {
    pub(crate) fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<Self> {
        let mut attributes = Self::default();
        for attr in attrs {
            if !attr.path().is_ident(ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("crate") {
                    let value: syn::LitStr = meta.value()?.parse()?;
                    attributes.runtime_path = Some(value.parse()?);
                    Ok(())
                } else {
                    Err(meta.error("unsupported buildable attribute"))
                }
            })?;
        }
        Ok(attributes)
    }

    pub(crate) fn config(self) -> CodegenConfig {
        match self.runtime_path {
            Some(path) => CodegenConfig::default().with_runtime_path(path),
            None => CodegenConfig::default(),
        }
    }
}
