use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Module the `TypedDocumentNode` wrapper type is imported from by default.
pub const DEFAULT_TYPED_DOCUMENT_NODE_MODULE: &str = "@graphql-typed-document-node/core";

/// Plugin options as written in the codegen configuration.
///
/// Every field is optional here; [`TypedFilesModulesConfig::resolve`] fills in
/// the defaults. Keys use the camelCase spelling of the codegen config file and
/// unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypedFilesModulesConfig {
    /// Module the result and variables types are imported from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types_module: Option<String>,

    /// Module the `TypedDocumentNode` type is imported from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub typed_document_node_module: Option<String>,

    /// Never emit `export default`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_default_exports: Option<bool>,

    /// Declare modules by their path relative to the working directory
    /// instead of a `*/<basename>` wildcard
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relative_to_cwd: Option<bool>,

    /// Directory (relative to the working directory) that relative paths start from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_prefix: Option<String>,

    /// Prepended to every module path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,

    /// Suffix appended to operation result type names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation_result_suffix: Option<String>,

    /// Append the operation kind (`Query`, `Mutation`, `Subscription`) to
    /// result and variables type names
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_operation_name_as_suffix: Option<bool>,
}

impl TypedFilesModulesConfig {
    /// Read plugin options from the JSON value of a codegen plugin block.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(value.clone())?)
    }

    /// Read plugin options from YAML text.
    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        serde_saphyr::from_str(contents).map_err(|e| ConfigError::Yaml(e.to_string()))
    }

    /// Apply defaults, producing the settings the renderer works with.
    ///
    /// `cwd` is the directory module paths are made relative to when
    /// `relativeToCwd` is enabled. A relative `cwd` is made absolute against
    /// the process working directory.
    #[must_use]
    pub fn resolve(self, cwd: impl Into<PathBuf>) -> ResolvedConfig {
        let cwd = absolute_cwd(cwd.into());

        let types_module = self.types_module.unwrap_or_else(|| {
            tracing::warn!(
                "No typesModule configured, generated imports will have an empty source"
            );
            String::new()
        });

        ResolvedConfig {
            types_module,
            typed_document_node_module: self
                .typed_document_node_module
                .unwrap_or_else(|| DEFAULT_TYPED_DOCUMENT_NODE_MODULE.to_string()),
            exclude_default_exports: self.exclude_default_exports.unwrap_or(false),
            relative_to_cwd: self.relative_to_cwd.unwrap_or(false),
            strip_prefix: self.strip_prefix.unwrap_or_default(),
            prefix: self.prefix.unwrap_or_default(),
            operation_result_suffix: self.operation_result_suffix.filter(|s| !s.is_empty()),
            use_operation_name_as_suffix: self.use_operation_name_as_suffix.unwrap_or(false),
            cwd,
        }
    }
}

fn absolute_cwd(cwd: PathBuf) -> PathBuf {
    if cwd.is_absolute() {
        return cwd;
    }
    std::path::absolute(&cwd).unwrap_or_else(|e| {
        tracing::warn!(
            cwd = %cwd.display(),
            error = %e,
            "Could not make working directory absolute"
        );
        cwd
    })
}

/// Fully populated plugin settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ResolvedConfig {
    pub types_module: String,
    pub typed_document_node_module: String,
    pub exclude_default_exports: bool,
    pub relative_to_cwd: bool,
    pub strip_prefix: String,
    pub prefix: String,
    /// Never `Some("")`
    pub operation_result_suffix: Option<String>,
    pub use_operation_name_as_suffix: bool,
    pub cwd: PathBuf,
}

impl ResolvedConfig {
    /// Directory module paths are computed from in `relativeToCwd` mode.
    #[must_use]
    pub fn relative_root(&self) -> PathBuf {
        self.cwd.join(Path::new(&self.strip_prefix))
    }

    /// How result and variables type names are derived for operations.
    #[must_use]
    pub fn type_suffix(&self) -> TypeSuffix<'_> {
        match self.operation_result_suffix.as_deref() {
            Some(suffix) => TypeSuffix::Result(suffix),
            None if self.use_operation_name_as_suffix => TypeSuffix::OperationKind,
            None => TypeSuffix::Bare,
        }
    }
}

/// Naming scheme for operation result/variables types.
///
/// `operationResultSuffix` takes precedence over `useOperationNameAsSuffix`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeSuffix<'a> {
    /// `<Name><suffix>` and `<Name>Variables`
    Result(&'a str),
    /// `<Name><Kind>` and `<Name><Kind>Variables`
    OperationKind,
    /// `<Name>` and `<Name>Variables`
    Bare,
}
