//! Name extraction utilities for GraphQL CST nodes.
//!
//! # Example
//!
//! ```
//! use graphql_apollo_ext::NameExt;
//! use apollo_parser::Parser;
//!
//! let source = "fragment authorFragment on Author { idField }";
//! let tree = Parser::new(source).parse();
//! let doc = tree.document();
//!
//! for def in doc.definitions() {
//!     if let apollo_parser::cst::Definition::FragmentDefinition(frag) = def {
//!         // Instead of: frag.fragment_name().and_then(|n| n.name()).map(|n| n.text().to_string())
//!         assert_eq!(frag.name_text(), Some("authorFragment".to_string()));
//!     }
//! }
//! ```

use apollo_parser::cst;

/// Extension trait for extracting names from CST nodes.
///
/// Provides convenient methods to get name text without long option chains.
pub trait NameExt {
    /// Get the name text as a String, if available.
    fn name_text(&self) -> Option<String>;
}

impl NameExt for cst::OperationDefinition {
    fn name_text(&self) -> Option<String> {
        self.name().map(|n| n.text().to_string())
    }
}

impl NameExt for cst::FragmentDefinition {
    fn name_text(&self) -> Option<String> {
        self.fragment_name()
            .and_then(|n| n.name())
            .map(|n| n.text().to_string())
    }
}
