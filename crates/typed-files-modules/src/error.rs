use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TypedFilesModulesError>;

/// The kind of top-level definition a module export is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Operation,
    Fragment,
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operation => f.write_str("Operation"),
            Self::Fragment => f.write_str("Fragment"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid plugin configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid plugin configuration: YAML parse error: {0}")]
    Yaml(String),
}

#[derive(Debug, Error)]
pub enum TypedFilesModulesError {
    #[error("{kind} must have a name ({location})")]
    MissingName {
        kind: DefinitionKind,
        location: String,
    },

    #[error("Syntax error in {location}: {message}")]
    Syntax { location: String, message: String },

    #[error(
        "Plugin \"{}\" requires extension to be \".d.ts\": {}",
        crate::PLUGIN_NAME,
        .0.display()
    )]
    InvalidOutputExtension(PathBuf),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
