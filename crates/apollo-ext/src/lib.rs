//! Extensions for `apollo-parser`: top-level definition access and name extraction.
//!
//! **Note**: This crate is specifically tied to `apollo-parser`'s CST types.
//!
//! This crate provides:
//! - **Definition iterators** for the top-level operations and fragments of a document
//! - **Name extraction helpers** for getting names from CST nodes
//! - **Operation kinds** resolved from the optional operation keyword
//!
//! Only top-level definitions are ever looked at. Selection sets and nested
//! fragments are never traversed.
//!
//! # Example
//!
//! ```
//! use graphql_apollo_ext::{DocumentExt, NameExt, OperationExt, OperationType};
//!
//! let source = "mutation createAuthor { createAuthor { idField } }";
//! let tree = apollo_parser::Parser::new(source).parse();
//!
//! let op = tree.operations().next().unwrap();
//! assert_eq!(op.name_text().as_deref(), Some("createAuthor"));
//! assert_eq!(op.operation_kind(), OperationType::Mutation);
//! ```

mod definitions;
mod names;

pub use definitions::*;
pub use names::*;
