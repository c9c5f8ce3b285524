//! Shared test fixtures for the plugin's documents.
//!
//! The documents are written against a schema with an `Author` type exposing
//! `idField`, a `Query.authors` list and a `Mutation.createAuthor` field.
//!
//! Documents are `(location, source)` pairs so tests can parse them with
//! whatever entry point they exercise.
//!
//! # Guidelines
//!
//! - **Use shared fixtures** for end-to-end output checks where the exact
//!   documents are incidental.
//! - **Use inline documents** when the test is about one definition shape
//!   (anonymous operations, mixed definition kinds, ...).

/// Types module used by the fixture configurations.
pub const TYPES_MODULE: &str = "@codegen-types";

/// Typed document node module used by the fixture configurations.
pub const TYPED_DOCUMENT_NODE_MODULE: &str = "docnode";

/// One definition per document: a query, a mutation and a fragment.
pub const SINGLE_OP_DOCUMENTS: &[(&str, &str)] = &[
    (
        "authors.gql",
        r#"
        query authors {
            authors {
                idField
            }
        }
        "#,
    ),
    (
        "createAuthor.gql",
        r#"
        mutation createAuthor {
            createAuthor {
                idField
            }
        }
        "#,
    ),
    (
        "authorFragment.gql",
        r#"
        fragment authorFragment on Author {
            idField
        }
        "#,
    ),
];

/// Documents holding several definitions each.
pub const MULTI_OP_DOCUMENTS: &[(&str, &str)] = &[
    (
        "authors.gql",
        r#"
        fragment authorFragment on Author {
            idField
        }
        query authors {
            authors {
                ...authorFragment
            }
        }
        query alsoAuthors {
            authors {
                ...authorFragment
            }
        }
        "#,
    ),
    (
        "createAuthor.gql",
        r#"
        mutation createAuthor {
            createAuthor {
                idField
            }
        }
        mutation alsoCreateAuthor {
            createAuthor {
                idField
            }
        }
        "#,
    ),
];

/// Documents in nested directories under a `/project` working directory.
pub const NESTED_DOCUMENTS: &[(&str, &str)] = &[
    (
        "/project/src/queries/authors.gql",
        "query authors { authors { idField } }",
    ),
    (
        "/project/src/mutations/createAuthor.gql",
        "mutation createAuthor { createAuthor { idField } }",
    ),
];
