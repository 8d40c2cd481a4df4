//! Pure predicates deciding whether a candidate path (relative to a data
//! root) satisfies a query. Shared between the archive scanner, which
//! applies them to entry names, and the loose-file phase.

use crate::identifier::Identifier;

/// What a resolution call is looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// One specific file.
    Exact,
    /// Everything inside the directory the identifier names.
    Directory { recursive: bool },
}

impl QueryKind {
    pub(crate) fn matches(self, candidate: &str, resource_id: &Identifier) -> bool {
        match self {
            QueryKind::Exact => matches_exact_file(candidate, resource_id),
            QueryKind::Directory { recursive } => {
                matches_directory_contents(candidate, resource_id, recursive)
            }
        }
    }
}

/// True iff `candidate` names exactly the file the identifier points to.
/// No partial matches of any kind.
pub fn matches_exact_file(candidate: &str, resource_id: &Identifier) -> bool {
    let candidate = candidate.strip_prefix('/').unwrap_or(candidate);
    let path = resource_id.path();
    let path = path.strip_prefix('/').unwrap_or(path);

    let prefix = format!("{}/{}", resource_id.namespace(), path);
    candidate == prefix
}

/// True iff `candidate` sits inside the directory the identifier names.
///
/// The identifier itself never matches (a file cannot be inside itself),
/// and a candidate that merely continues the last path component
/// (`foo/bar` vs `foo/barrista/baz.json`) is a different directory and is
/// rejected. Non-recursive queries accept direct children only.
pub fn matches_directory_contents(
    candidate: &str,
    resource_id: &Identifier,
    recursive: bool,
) -> bool {
    let candidate = candidate.strip_prefix('/').unwrap_or(candidate);
    let base = resource_id.path();
    let base = base.strip_prefix('/').unwrap_or(base);
    let base = base.strip_suffix('/').unwrap_or(base);

    // The namespace root keeps no trailing slash, so "foo" prefixes every
    // candidate in the namespace.
    let prefix = if resource_id.path().is_empty() {
        resource_id.namespace().to_string()
    } else {
        format!("{}/{}", resource_id.namespace(), base)
    };

    if candidate == prefix {
        return false;
    }
    let Some(remainder) = candidate.strip_prefix(prefix.as_str()) else {
        return false;
    };
    let Some(inside) = remainder.strip_prefix('/') else {
        // Prefix ended mid-component; not actually within this directory.
        return false;
    };

    if recursive {
        return true;
    }
    !inside.contains('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(namespace: &str, path: &str) -> Identifier {
        Identifier::new(namespace, path)
    }

    #[test]
    fn test_exact_match() {
        let target = id("foo", "bar/baz.json");
        assert!(matches_exact_file("foo/bar/baz.json", &target));
        assert!(matches_exact_file("/foo/bar/baz.json", &target));
    }

    #[test]
    fn test_exact_rejects_sub_and_super_strings() {
        let target = id("foo", "bar/baz.json");
        assert!(!matches_exact_file("foo/bar/baz.json5", &target));
        assert!(!matches_exact_file("foo/bar/baz.jso", &target));
        assert!(!matches_exact_file("foo/bar", &target));
        assert!(!matches_exact_file("foo/bar/baz.json/extra", &target));
    }

    #[test]
    fn test_exact_trims_leading_slash_in_target_path() {
        assert!(matches_exact_file("foo/bar.json", &id("foo", "/bar.json")));
    }

    #[test]
    fn test_directory_excludes_itself() {
        assert!(!matches_directory_contents("foo/bar", &id("foo", "bar"), false));
        assert!(!matches_directory_contents("foo/bar", &id("foo", "bar"), true));
    }

    #[test]
    fn test_directory_direct_child() {
        assert!(matches_directory_contents(
            "foo/bar/baz.json",
            &id("foo", "bar"),
            false
        ));
    }

    #[test]
    fn test_directory_nested_child_needs_recursive() {
        let target = id("foo", "bar");
        assert!(!matches_directory_contents("foo/bar/sub/baz.json", &target, false));
        assert!(matches_directory_contents("foo/bar/sub/baz.json", &target, true));
    }

    #[test]
    fn test_directory_rejects_false_prefix() {
        assert!(!matches_directory_contents(
            "foo/barrista/baz.json",
            &id("foo", "bar"),
            true
        ));
    }

    #[test]
    fn test_directory_rejects_other_namespace() {
        assert!(!matches_directory_contents(
            "other/bar/baz.json",
            &id("foo", "bar"),
            true
        ));
    }

    #[test]
    fn test_namespace_root_query() {
        let root = id("foo", "");
        assert!(matches_directory_contents("foo/anything", &root, true));
        assert!(matches_directory_contents("foo/top.json", &root, false));
        assert!(!matches_directory_contents("foo/sub/deep.json", &root, false));
        assert!(matches_directory_contents("foo/sub/deep.json", &root, true));
        // The bare namespace is not inside itself.
        assert!(!matches_directory_contents("foo", &root, true));
    }

    #[test]
    fn test_directory_trims_trailing_slash() {
        assert!(matches_directory_contents(
            "foo/bar/baz.json",
            &id("foo", "bar/"),
            false
        ));
    }

    #[test]
    fn test_query_kind_dispatch() {
        let target = id("foo", "bar");
        assert!(!QueryKind::Exact.matches("foo/bar/baz.json", &target));
        assert!(QueryKind::Directory { recursive: false }.matches("foo/bar/baz.json", &target));
        assert!(QueryKind::Exact.matches("foo/bar", &target));
        assert!(!QueryKind::Directory { recursive: true }.matches("foo/bar", &target));
    }
}
