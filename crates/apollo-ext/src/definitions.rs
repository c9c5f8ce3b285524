//! Top-level definition access for GraphQL documents.
//!
//! This module provides iterators over the operations and fragments declared
//! directly in a document, in source order. Nested selections are never visited.
//!
//! # Example
//!
//! ```
//! use graphql_apollo_ext::DocumentExt;
//! use apollo_parser::Parser;
//!
//! let source = r"
//!     fragment authorFragment on Author { idField }
//!     query authors { authors { ...authorFragment } }
//!     query alsoAuthors { authors { ...authorFragment } }
//! ";
//! let tree = Parser::new(source).parse();
//!
//! assert_eq!(tree.operations().count(), 2);
//! assert_eq!(tree.fragments().count(), 1);
//! assert_eq!(tree.definitions_count(), 3);
//! ```

use apollo_parser::cst;
use apollo_parser::SyntaxTree;

/// Extension trait for convenient access to document definitions.
pub trait DocumentExt {
    /// Number of top-level definitions of any kind.
    fn definitions_count(&self) -> usize;

    /// Iterate over all operation definitions in the document.
    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition>;

    /// Iterate over all fragment definitions in the document.
    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition>;
}

impl DocumentExt for SyntaxTree {
    fn definitions_count(&self) -> usize {
        self.document().definitions().count()
    }

    fn operations(&self) -> impl Iterator<Item = cst::OperationDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::OperationDefinition(op) = def {
                Some(op)
            } else {
                None
            }
        })
    }

    fn fragments(&self) -> impl Iterator<Item = cst::FragmentDefinition> {
        self.document().definitions().filter_map(|def| {
            if let cst::Definition::FragmentDefinition(frag) = def {
                Some(frag)
            } else {
                None
            }
        })
    }
}

/// Operation type (query, mutation, subscription).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationType {
    Query,
    Mutation,
    Subscription,
}

impl OperationType {
    /// The GraphQL keyword for this operation type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Query => "query",
            Self::Mutation => "mutation",
            Self::Subscription => "subscription",
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extension trait for operation definitions.
pub trait OperationExt {
    /// Get the operation type. Shorthand operations (`{ ... }`) are queries.
    fn operation_kind(&self) -> OperationType;
}

impl OperationExt for cst::OperationDefinition {
    fn operation_kind(&self) -> OperationType {
        match self.operation_type() {
            Some(op_type) if op_type.mutation_token().is_some() => OperationType::Mutation,
            Some(op_type) if op_type.subscription_token().is_some() => OperationType::Subscription,
            _ => OperationType::Query,
        }
    }
}
