use crate::config::ResolvedConfig;
use crate::error::{Result, TypedFilesModulesError};
use crate::visitor::TypedDocumentVisitor;
use apollo_parser::{Parser, SyntaxTree};
use std::path::Path;

/// Name the plugin is registered under in codegen configuration.
pub const PLUGIN_NAME: &str = "typed-files-modules";

/// A parsed GraphQL document and the file it was loaded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Source {
    pub location: String,
    pub document: SyntaxTree,
}

impl Source {
    #[must_use]
    pub fn new(location: impl Into<String>, document: SyntaxTree) -> Self {
        Self {
            location: location.into(),
            document,
        }
    }

    /// Parse `text` into a source document, rejecting syntax errors.
    pub fn parse(location: impl Into<String>, text: &str) -> Result<Self> {
        let location = location.into();
        let document = Parser::new(text).parse();

        if let Some(error) = document.errors().next() {
            return Err(TypedFilesModulesError::Syntax {
                location,
                message: format!("{} (at offset {})", error.message(), error.index()),
            });
        }

        Ok(Self { location, document })
    }
}

/// Generate the declaration file contents for `documents`.
///
/// One `declare module` block is emitted per document, in input order,
/// joined by newlines. No documents yields an empty string. The first
/// operation or fragment without a name fails the whole run.
#[tracing::instrument(skip_all, fields(documents = documents.len()))]
pub fn plugin(documents: &[Source], config: &ResolvedConfig) -> Result<String> {
    let mut output = Vec::with_capacity(documents.len());

    for source in documents {
        TypedDocumentVisitor::new(&mut output, &source.location, config)
            .visit_document(&source.document)?;
    }

    tracing::debug!(modules = output.len(), "Generated module declarations");
    Ok(output.join("\n"))
}

/// Check that the plugin's output file is a TypeScript declaration file.
pub fn validate_output_path(path: &Path) -> Result<()> {
    let is_declaration_file = path
        .file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(".d.ts"));

    if is_declaration_file {
        Ok(())
    } else {
        Err(TypedFilesModulesError::InvalidOutputExtension(path.to_path_buf()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypedFilesModulesConfig;

    #[test]
    fn test_source_parse() {
        let source = Source::parse("authors.gql", "query authors { authors { idField } }").unwrap();
        assert_eq!(source.location, "authors.gql");
        assert_eq!(source.document.document().definitions().count(), 1);
    }

    #[test]
    fn test_source_parse_syntax_error() {
        let err = Source::parse("broken.gql", "query authors { authors {").unwrap_err();
        assert!(matches!(
            err,
            TypedFilesModulesError::Syntax { ref location, .. } if location == "broken.gql"
        ));
    }

    #[test]
    fn test_plugin_empty() {
        let config = TypedFilesModulesConfig::default().resolve("/project");
        assert_eq!(plugin(&[], &config).unwrap(), "");
    }

    #[test]
    fn test_plugin_joins_with_newline() {
        let config = TypedFilesModulesConfig {
            types_module: Some("@codegen-types".to_string()),
            ..Default::default()
        }
        .resolve("/project");
        let documents = vec![
            Source::parse("a.gql", "type A { id: ID }").unwrap(),
            Source::parse("b.gql", "type B { id: ID }").unwrap(),
        ];

        let output = plugin(&documents, &config).unwrap();
        assert_eq!(
            output,
            "declare module \"*/a.gql\" {\n\
             \x20 import { TypedDocumentNode } from \"@graphql-typed-document-node/core\";\n\
             }\n\
             declare module \"*/b.gql\" {\n\
             \x20 import { TypedDocumentNode } from \"@graphql-typed-document-node/core\";\n\
             }"
        );
    }

    #[test]
    fn test_plugin_fails_on_missing_name() {
        let config = TypedFilesModulesConfig::default().resolve("/project");
        let documents = vec![
            Source::parse("authors.gql", "query authors { authors { idField } }").unwrap(),
            Source::parse("anonymous.gql", "{ authors { idField } }").unwrap(),
        ];

        let err = plugin(&documents, &config).unwrap_err();
        assert_eq!(err.to_string(), "Operation must have a name (anonymous.gql)");
    }

    #[test]
    fn test_validate_output_path() {
        assert!(validate_output_path(Path::new("src/ops.d.ts")).is_ok());
        assert!(matches!(
            validate_output_path(Path::new("src/ops.ts")),
            Err(TypedFilesModulesError::InvalidOutputExtension(_))
        ));
        assert!(validate_output_path(Path::new("src/")).is_err());
    }
}
