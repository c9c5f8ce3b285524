//! Renders one `declare module` block per GraphQL document.
//!
//! Only the top-level definitions of a document are inspected. Operations are
//! rendered first, then fragments, each group in source order:
//!
//! ```text
//! declare module "*/authors.gql" {
//!   import { TypedDocumentNode } from "@graphql-typed-document-node/core";
//!   import { Authors, AuthorsVariables } from "@codegen-types";
//!   export const authors: TypedDocumentNode<Authors, AuthorsVariables>;
//!   export default authors;
//! }
//! ```

use crate::case::pascal_case;
use crate::config::{ResolvedConfig, TypeSuffix};
use crate::error::{DefinitionKind, Result, TypedFilesModulesError};
use crate::paths::module_path;
use apollo_parser::SyntaxTree;
use graphql_apollo_ext::{DocumentExt, NameExt, OperationExt, OperationType};

/// A named top-level operation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NamedOperation {
    name: String,
    kind: OperationType,
}

/// Appends the ambient module declaration for each visited document to a
/// shared output buffer.
pub struct TypedDocumentVisitor<'a> {
    output: &'a mut Vec<String>,
    location: &'a str,
    config: &'a ResolvedConfig,
}

impl<'a> TypedDocumentVisitor<'a> {
    #[must_use]
    pub fn new(
        output: &'a mut Vec<String>,
        location: &'a str,
        config: &'a ResolvedConfig,
    ) -> Self {
        Self {
            output,
            location,
            config,
        }
    }

    /// Render `document` and append the block to the output.
    ///
    /// Nothing is appended when an operation or fragment has no name.
    #[tracing::instrument(skip_all, fields(location = %self.location))]
    pub fn visit_document(&mut self, document: &SyntaxTree) -> Result<()> {
        let operations = self.named_operations(document)?;
        let fragments = self.named_fragments(document)?;
        let definitions_count = document.definitions_count();

        let module_path = module_path(self.location, self.config);
        tracing::debug!(
            module_path = %module_path,
            operations = operations.len(),
            fragments = fragments.len(),
            definitions = definitions_count,
            "Rendering module declaration"
        );

        let mut block = String::new();
        block.push_str(&format!("declare module \"{module_path}\" {{\n"));
        block.push_str(&format!(
            "  import {{ TypedDocumentNode }} from \"{}\";\n",
            self.config.typed_document_node_module
        ));
        block.push_str(&self.render_operations(&operations));
        block.push_str(&self.render_fragments(&fragments, definitions_count));
        block.push('}');

        self.output.push(block);
        Ok(())
    }

    fn named_operations(&self, document: &SyntaxTree) -> Result<Vec<NamedOperation>> {
        document
            .operations()
            .map(|op| {
                let name = op
                    .name_text()
                    .ok_or_else(|| self.missing_name(DefinitionKind::Operation))?;
                Ok(NamedOperation {
                    name,
                    kind: op.operation_kind(),
                })
            })
            .collect()
    }

    fn named_fragments(&self, document: &SyntaxTree) -> Result<Vec<String>> {
        document
            .fragments()
            .map(|frag| {
                frag.name_text()
                    .ok_or_else(|| self.missing_name(DefinitionKind::Fragment))
            })
            .collect()
    }

    fn missing_name(&self, kind: DefinitionKind) -> TypedFilesModulesError {
        TypedFilesModulesError::MissingName {
            kind,
            location: self.location.to_string(),
        }
    }

    fn render_operations(&self, operations: &[NamedOperation]) -> String {
        let types_module = &self.config.types_module;
        let mut output = String::new();

        for operation in operations {
            let (result_type, variables_type) = self.operation_type_names(operation);
            output.push_str(&format!(
                "  import {{ {result_type}, {variables_type} }} from \"{types_module}\";\n"
            ));
            output.push_str(&format!(
                "  export const {}: TypedDocumentNode<{result_type}, {variables_type}>;\n",
                operation.name
            ));
        }

        if let [operation] = operations {
            if !self.config.exclude_default_exports {
                output.push_str(&format!("  export default {};\n", operation.name));
            }
        }
        output
    }

    /// Result and variables type names for an operation.
    fn operation_type_names(&self, operation: &NamedOperation) -> (String, String) {
        let type_name = pascal_case(&operation.name);
        match self.config.type_suffix() {
            TypeSuffix::Result(suffix) => {
                (format!("{type_name}{suffix}"), format!("{type_name}Variables"))
            }
            TypeSuffix::OperationKind => {
                let kind = pascal_case(operation.kind.as_str());
                (
                    format!("{type_name}{kind}"),
                    format!("{type_name}{kind}Variables"),
                )
            }
            TypeSuffix::Bare => (type_name.clone(), format!("{type_name}Variables")),
        }
    }

    fn render_fragments(&self, fragments: &[String], definitions_count: usize) -> String {
        let types_module = &self.config.types_module;
        let mut output = String::new();

        for fragment in fragments {
            let type_name = pascal_case(fragment);
            output.push_str(&format!(
                "  import {{ {type_name} as _{type_name} }} from \"{types_module}\";\n"
            ));
            output.push_str(&format!(
                "  export const {fragment}: TypedDocumentNode<_{type_name}>;\n"
            ));
        }

        // A fragment is only the default export when it is the whole document
        if let [fragment] = fragments {
            if definitions_count == 1 && !self.config.exclude_default_exports {
                output.push_str(&format!("  export default {fragment};\n"));
            }
        }
        output
    }
}

/// Render the module declaration for a single document.
pub fn render_document(
    location: &str,
    document: &SyntaxTree,
    config: &ResolvedConfig,
) -> Result<String> {
    let mut output = Vec::with_capacity(1);
    TypedDocumentVisitor::new(&mut output, location, config).visit_document(document)?;
    Ok(output.concat())
}
