//! Helpers for inspecting generated declaration output.
//!
//! Snapshot tests compare whole outputs with insta; these helpers cover the
//! targeted checks.

/// Module specifiers of every `declare module` header in `output`, in order.
///
/// # Example
///
/// ```
/// use graphql_test_utils::declared_modules;
///
/// let output = "declare module \"*/a.gql\" {\n}\ndeclare module \"*/b.gql\" {\n}";
/// assert_eq!(declared_modules(output), vec!["*/a.gql", "*/b.gql"]);
/// ```
pub fn declared_modules(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter_map(|line| line.strip_prefix("declare module \""))
        .filter_map(|rest| rest.strip_suffix("\" {"))
        .collect()
}
