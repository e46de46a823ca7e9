//! Path resolution for writing generated files under a root directory.
//!
//! Everything here is lexical: paths are normalized by walking their
//! components, never by touching the filesystem. Symlinks are therefore not
//! resolved, and a symlink inside the root that points elsewhere is followed by
//! the OS when the shell writes through it.

use std::path::{Component, Path, PathBuf};

use crate::generation::FileDescriptor;

/// A file path that would land outside (or exactly on) the write root.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid path outside root: {path}")]
pub struct PathEscape {
    pub path: String,
}

/// A destination that passed the containment check, ready to be written.
#[derive(Debug, PartialEq, Eq)]
pub struct PlannedWrite<'a> {
    pub destination: PathBuf,
    pub file: &'a FileDescriptor,
}

/// Lexically normalize a path: drop `.` components, collapse redundant
/// separators and resolve `..` against the preceding component.
///
/// `..` never climbs above the filesystem root. Leading `..` components of a
/// relative path are kept.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            Component::Normal(name) => normalized.push(name),
        }
    }

    normalized
}

/// Resolve the write root to an absolute, normalized path.
///
/// Relative roots are resolved against `cwd`. The root does not need to exist.
pub fn resolve_root(root: &Path, cwd: &Path) -> PathBuf {
    normalize_path(&cwd.join(root))
}

/// Resolve a descriptor path against `root`, rejecting anything that escapes it.
///
/// `root` must already be absolute and normalized (see [`resolve_root`]).
/// Containment is decided component by component, so a sibling directory that
/// merely shares a string prefix with the root (`/proj-old` for `/proj`) is
/// rejected. A path that resolves to the root itself names no file and is
/// rejected too.
pub fn resolve_destination(root: &Path, path: &str) -> Result<PathBuf, PathEscape> {
    let destination = normalize_path(&root.join(path));

    if destination == root || !destination.starts_with(root) {
        return Err(PathEscape {
            path: path.to_string(),
        });
    }

    Ok(destination)
}

/// Resolve every descriptor before anything is written.
///
/// Fails on the first escaping path, so a request containing any escape
/// produces no writes at all.
pub fn plan_writes<'a>(
    root: &Path,
    files: &'a [FileDescriptor],
) -> Result<Vec<PlannedWrite<'a>>, PathEscape> {
    files
        .iter()
        .map(|file| {
            resolve_destination(root, &file.path).map(|destination| PlannedWrite { destination, file })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(path: &str) -> PathBuf {
        PathBuf::from(path)
    }

    // ============================================================================
    // normalize_path tests
    // ============================================================================

    #[test]
    fn test_normalize_removes_current_dir() {
        assert_eq!(normalize_path(Path::new("/proj/./a/./b.txt")), p("/proj/a/b.txt"));
    }

    #[test]
    fn test_normalize_collapses_separators() {
        assert_eq!(normalize_path(Path::new("/proj//a///b.txt")), p("/proj/a/b.txt"));
    }

    #[test]
    fn test_normalize_resolves_parent_dir() {
        assert_eq!(normalize_path(Path::new("/proj/a/../b.txt")), p("/proj/b.txt"));
    }

    #[test]
    fn test_normalize_does_not_climb_above_root() {
        assert_eq!(normalize_path(Path::new("/../../etc/passwd")), p("/etc/passwd"));
    }

    #[test]
    fn test_normalize_keeps_leading_parent_of_relative_path() {
        assert_eq!(normalize_path(Path::new("../a/./b")), p("../a/b"));
        assert_eq!(normalize_path(Path::new("a/../../b")), p("../b"));
    }

    // ============================================================================
    // resolve_root tests
    // ============================================================================

    #[test]
    fn test_relative_root_resolves_against_cwd() {
        assert_eq!(
            resolve_root(Path::new("generated_project"), Path::new("/home/dev")),
            p("/home/dev/generated_project")
        );
    }

    #[test]
    fn test_absolute_root_ignores_cwd() {
        assert_eq!(resolve_root(Path::new("/proj/"), Path::new("/home/dev")), p("/proj"));
    }

    #[test]
    fn test_root_with_parent_components_is_normalized() {
        assert_eq!(
            resolve_root(Path::new("../out/./site"), Path::new("/home/dev/app")),
            p("/home/dev/out/site")
        );
    }

    // ============================================================================
    // resolve_destination tests
    // ============================================================================

    #[test]
    fn test_nested_path_inside_root() {
        assert_eq!(
            resolve_destination(Path::new("/proj"), "a/b.txt").unwrap(),
            p("/proj/a/b.txt")
        );
    }

    #[test]
    fn test_parent_dir_that_stays_inside_root() {
        assert_eq!(
            resolve_destination(Path::new("/proj"), "src/../README.md").unwrap(),
            p("/proj/README.md")
        );
    }

    #[test]
    fn test_parent_dir_escape_is_rejected() {
        let err = resolve_destination(Path::new("/proj"), "../../etc/passwd").unwrap_err();
        assert_eq!(
            err,
            PathEscape {
                path: "../../etc/passwd".to_string()
            }
        );
    }

    #[test]
    fn test_absolute_descriptor_path_is_rejected() {
        assert!(resolve_destination(Path::new("/proj"), "/etc/passwd").is_err());
    }

    #[test]
    fn test_absolute_descriptor_path_inside_root_is_allowed() {
        assert_eq!(
            resolve_destination(Path::new("/proj"), "/proj/a.txt").unwrap(),
            p("/proj/a.txt")
        );
    }

    #[test]
    fn test_sibling_with_shared_prefix_is_rejected() {
        assert!(resolve_destination(Path::new("/proj"), "../proj-evil/x.txt").is_err());
    }

    #[test]
    fn test_path_resolving_to_root_is_rejected() {
        let root = Path::new("/proj");
        assert!(resolve_destination(root, "").is_err());
        assert!(resolve_destination(root, ".").is_err());
        assert!(resolve_destination(root, "a/..").is_err());
    }

    #[test]
    fn test_escape_error_message() {
        let err = resolve_destination(Path::new("/proj"), "../x").unwrap_err();
        assert_eq!(err.to_string(), "Invalid path outside root: ../x");
    }

    // ============================================================================
    // plan_writes tests
    // ============================================================================

    #[test]
    fn test_plan_preserves_order() {
        let files = vec![
            FileDescriptor::new("b.txt", "2"),
            FileDescriptor::new("a/c.txt", "3"),
        ];

        let plan = plan_writes(Path::new("/proj"), &files).unwrap();

        assert_eq!(
            plan,
            vec![
                PlannedWrite {
                    destination: p("/proj/b.txt"),
                    file: &files[0],
                },
                PlannedWrite {
                    destination: p("/proj/a/c.txt"),
                    file: &files[1],
                },
            ]
        );
    }

    #[test]
    fn test_plan_rejects_when_any_path_escapes() {
        let files = vec![
            FileDescriptor::new("ok.txt", "fine"),
            FileDescriptor::new("../outside.txt", "bad"),
            FileDescriptor::new("also-ok.txt", "fine"),
        ];

        let err = plan_writes(Path::new("/proj"), &files).unwrap_err();
        assert_eq!(err.path, "../outside.txt");
    }

    #[test]
    fn test_plan_of_no_files_is_empty() {
        assert!(plan_writes(Path::new("/proj"), &[]).unwrap().is_empty());
    }
}
