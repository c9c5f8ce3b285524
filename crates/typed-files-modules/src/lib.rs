//! Codegen plugin that declares typed ambient modules for GraphQL documents.
//!
//! Importing a `.graphql`/`.gql` file from TypeScript yields untyped documents
//! unless the compiler is told what each file exports. For every document this
//! plugin emits a `declare module` block whose named exports (and, for
//! single-definition files, default export) are `TypedDocumentNode`s wired to
//! the result and variables types produced by the types plugins.
//!
//! The host pipeline owns file discovery, schema loading and writing the
//! output. This crate only turns parsed documents plus plugin options into the
//! declaration text.
//!
//! # Example
//!
//! ```
//! use graphql_typed_files_modules::{plugin, Source, TypedFilesModulesConfig};
//!
//! let config = TypedFilesModulesConfig {
//!     types_module: Some("@codegen-types".to_string()),
//!     ..Default::default()
//! }
//! .resolve("/project");
//!
//! let documents = vec![Source::parse("authors.gql", "query authors { authors { idField } }")?];
//! let output = plugin(&documents, &config)?;
//!
//! assert!(output.starts_with("declare module \"*/authors.gql\" {"));
//! assert!(output.contains("export const authors: TypedDocumentNode<Authors, AuthorsVariables>;"));
//! assert!(output.contains("export default authors;"));
//! # Ok::<(), graphql_typed_files_modules::TypedFilesModulesError>(())
//! ```

mod case;
mod config;
mod error;
mod paths;
mod plugin;
mod visitor;

pub use case::pascal_case;
pub use config::{
    ResolvedConfig, TypeSuffix, TypedFilesModulesConfig, DEFAULT_TYPED_DOCUMENT_NODE_MODULE,
};
pub use error::{ConfigError, DefinitionKind, Result, TypedFilesModulesError};
pub use paths::module_path;
pub use plugin::{plugin, validate_output_path, Source, PLUGIN_NAME};
pub use visitor::{render_document, TypedDocumentVisitor};
