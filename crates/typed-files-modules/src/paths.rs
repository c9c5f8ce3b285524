//! Module path computation for `declare module "<path>"` headers.

use crate::config::ResolvedConfig;
use std::path::{Component, Path};

/// Compute the module specifier a document is declared under.
///
/// By default the module matches the file by name anywhere (`*/<basename>`).
/// With `relativeToCwd` it is the document path relative to the working
/// directory joined with `stripPrefix`. `prefix` is prepended to either form.
#[must_use]
pub fn module_path(location: &str, config: &ResolvedConfig) -> String {
    let path = if config.relative_to_cwd {
        let root = config.relative_root();
        let target = config.cwd.join(location);
        relative_path(&root, &target)
    } else {
        format!("*/{}", basename(location))
    };

    format!("{}{path}", config.prefix)
}

/// Last path segment of `location`, ignoring trailing separators.
fn basename(location: &str) -> String {
    location
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default()
        .to_string()
}

/// Lexical relative path from `from` to `to`, `/`-separated.
///
/// Neither path is touched on disk; `.` and `..` segments are resolved
/// textually. Identical paths yield the empty string. When the two paths
/// have different roots there is no relative form and `to` is returned whole.
fn relative_path(from: &Path, to: &Path) -> String {
    let from = LexicalPath::new(from);
    let to = LexicalPath::new(to);

    if from.root != to.root {
        return to.to_string();
    }

    let common = from
        .segments
        .iter()
        .zip(to.segments.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut segments: Vec<String> = Vec::new();
    segments.extend(std::iter::repeat_n(
        "..".to_string(),
        from.segments.len() - common,
    ));
    segments.extend(to.segments.iter().skip(common).cloned());
    segments.join("/")
}

/// A path split into its root and plain segments, with `.` and `..` resolved.
///
/// `..` above an absolute root is dropped; `..` above a relative start is kept.
#[derive(Debug, PartialEq, Eq)]
struct LexicalPath {
    root: String,
    segments: Vec<String>,
}

impl LexicalPath {
    fn new(path: &Path) -> Self {
        let mut root = String::new();
        let mut segments: Vec<String> = Vec::new();
        for component in path.components() {
            match component {
                Component::Prefix(prefix) => root.push_str(&prefix.as_os_str().to_string_lossy()),
                Component::RootDir => root.push('/'),
                Component::CurDir => {}
                Component::ParentDir => match segments.last().map(String::as_str) {
                    Some("..") => segments.push("..".to_string()),
                    Some(_) => {
                        segments.pop();
                    }
                    None if root.is_empty() => segments.push("..".to_string()),
                    None => {}
                },
                Component::Normal(segment) => {
                    segments.push(segment.to_string_lossy().into_owned());
                }
            }
        }
        Self { root, segments }
    }
}

impl std::fmt::Display for LexicalPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.root, self.segments.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TypedFilesModulesConfig;

    fn config(relative_to_cwd: bool, strip_prefix: &str, prefix: &str) -> ResolvedConfig {
        TypedFilesModulesConfig {
            types_module: Some("@codegen-types".to_string()),
            relative_to_cwd: Some(relative_to_cwd),
            strip_prefix: Some(strip_prefix.to_string()),
            prefix: Some(prefix.to_string()),
            ..Default::default()
        }
        .resolve("/project")
    }

    #[test]
    fn test_wildcard_basename() {
        let config = config(false, "", "");
        assert_eq!(module_path("authors.gql", &config), "*/authors.gql");
        assert_eq!(
            module_path("/project/src/queries/authors.gql", &config),
            "*/authors.gql"
        );
        assert_eq!(module_path("src/queries/", &config), "*/queries");
    }

    #[test]
    fn test_wildcard_with_prefix() {
        let config = config(false, "", "gql/");
        assert_eq!(module_path("src/authors.gql", &config), "gql/*/authors.gql");
    }

    #[test]
    fn test_relative_to_cwd() {
        let config = config(true, "", "");
        assert_eq!(module_path("authors.gql", &config), "authors.gql");
        assert_eq!(
            module_path("/project/src/queries/authors.gql", &config),
            "src/queries/authors.gql"
        );
        assert_eq!(
            module_path("./src/../lib/authors.gql", &config),
            "lib/authors.gql"
        );
    }

    #[test]
    fn test_relative_to_cwd_with_strip_prefix() {
        let config = config(true, "src", "");
        assert_eq!(
            module_path("/project/src/queries/authors.gql", &config),
            "queries/authors.gql"
        );
        assert_eq!(
            module_path("/project/lib/authors.gql", &config),
            "../lib/authors.gql"
        );
    }

    #[test]
    fn test_relative_to_cwd_with_prefix() {
        let config = config(true, "src", "defs/");
        assert_eq!(
            module_path("src/authors.gql", &config),
            "defs/authors.gql"
        );
    }

    #[test]
    fn test_relative_outside_cwd() {
        let config = config(true, "", "");
        assert_eq!(
            module_path("/elsewhere/authors.gql", &config),
            "../elsewhere/authors.gql"
        );
    }

    #[test]
    fn test_relative_same_directory_is_empty() {
        assert_eq!(relative_path(Path::new("/a/b"), Path::new("/a/b/")), "");
    }

    #[test]
    fn test_parent_segments_above_a_relative_start_are_kept() {
        assert_eq!(
            LexicalPath::new(Path::new("../a/../../b")).to_string(),
            "../../b"
        );
        assert_eq!(LexicalPath::new(Path::new("/../b")).to_string(), "/b");
        assert_eq!(
            relative_path(Path::new("src"), Path::new("../other/a.gql")),
            "../../other/a.gql"
        );
    }

    #[test]
    fn test_relative_cwd_is_made_absolute() {
        let config = TypedFilesModulesConfig {
            relative_to_cwd: Some(true),
            ..Default::default()
        }
        .resolve(".");
        assert!(config.cwd.is_absolute());

        assert_eq!(module_path("../other/a.gql", &config), "../other/a.gql");

        let depth = LexicalPath::new(&config.cwd).segments.len();
        assert_eq!(
            module_path("/project/src/a.gql", &config),
            format!("{}project/src/a.gql", "../".repeat(depth))
        );
    }

    #[test]
    fn test_different_roots_have_no_relative_form() {
        assert_eq!(
            relative_path(Path::new("/project"), Path::new("lib/a.gql")),
            "lib/a.gql"
        );
    }
}
