//! Integration tests for path sets against a real filesystem.
//!
//! Each test builds a small tree in a temporary directory and checks the
//! containment rules through `OsProbe`:
//! - Listed files match exactly
//! - Listed directories cover their descendants only when parent matching
//!   is allowed
//! - Sibling directories sharing a name prefix are never covered
//! - Paths that do not exist are accepted as plain entries

use std::fs;
use std::path::{Path, PathBuf};

use pathset::{CaseSensitivity, MatchOptions, OsProbe, PathSet};
use tempfile::TempDir;

/// A temporary source tree:
///
/// ```text
/// root/
///   src/main.rs
///   src/nested/mod.rs
///   srcgen/out.rs
///   lib/util.rs
///   README.md
/// ```
struct Tree {
    _dir: TempDir,
    root: PathBuf,
}

impl Tree {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        // Canonicalize so that platform temp-dir symlinks do not leak into
        // comparisons.
        let root = fs::canonicalize(dir.path()).expect("Failed to canonicalize temp dir");

        for file in [
            "src/main.rs",
            "src/nested/mod.rs",
            "srcgen/out.rs",
            "lib/util.rs",
            "README.md",
        ] {
            let path = root.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, "").unwrap();
        }

        Self { _dir: dir, root }
    }

    fn path(&self, rel: &str) -> String {
        to_string(&self.root.join(rel))
    }

    fn probe(&self) -> OsProbe {
        OsProbe::new().with_working_dir(&self.root)
    }
}

fn to_string(path: &Path) -> String {
    path.to_str().expect("temp paths are UTF-8").to_string()
}

#[test]
fn test_directory_entry_covers_descendants() {
    let tree = Tree::new();
    let set = PathSet::with_probe([tree.path("src")], tree.probe()).unwrap();

    assert!(set.contains(&tree.path("src/main.rs"), true).unwrap());
    assert!(set.contains(&tree.path("src/nested/mod.rs"), true).unwrap());
    assert!(set.contains(&tree.path("src/nested"), true).unwrap());
    assert!(!set.contains(&tree.path("lib/util.rs"), true).unwrap());
}

#[test]
fn test_directory_entry_without_parent_matching() {
    let tree = Tree::new();
    let set = PathSet::with_probe([tree.path("src")], tree.probe()).unwrap();

    assert!(!set.contains(&tree.path("src/main.rs"), false).unwrap());
    assert!(set.contains(&tree.path("src"), false).unwrap());
    assert!(set.contains(&format!("{}/", tree.path("src")), false).unwrap());
}

#[test]
fn test_sibling_with_shared_prefix_not_covered() {
    let tree = Tree::new();
    let set = PathSet::with_probe([tree.path("src")], tree.probe()).unwrap();

    assert!(!set.contains(&tree.path("srcgen"), true).unwrap());
    assert!(!set.contains(&tree.path("srcgen/out.rs"), true).unwrap());
}

#[test]
fn test_relative_inputs_resolve_against_working_dir() {
    let tree = Tree::new();
    let set = PathSet::with_probe(["./src/", "README.md"], tree.probe()).unwrap();

    let entries: Vec<&str> = set.entries().collect();
    assert_eq!(entries.len(), 2);
    assert!(entries[0].ends_with(std::path::MAIN_SEPARATOR));
    assert!(set.is_directory_entry(entries[0]));
    assert!(!set.is_directory_entry(entries[1]));

    assert!(set.contains("src/nested/../main.rs", true).unwrap());
    assert!(set.contains("README.md", false).unwrap());
    assert!(!set.contains("lib/util.rs", true).unwrap());
}

#[test]
fn test_missing_path_is_plain_entry() {
    let tree = Tree::new();
    let future = tree.path("generated/later.rs");
    let set = PathSet::with_probe([future.as_str()], tree.probe()).unwrap();

    assert!(!set.is_directory_entry(&future));
    assert!(set.contains(&future, false).unwrap());
    assert!(!set.contains(&tree.path("generated/other.rs"), true).unwrap());
}

#[test]
fn test_path_created_later_is_still_matched() {
    let tree = Tree::new();
    let future = tree.path("build/output.txt");
    let set = PathSet::with_probe([future.as_str()], tree.probe()).unwrap();

    fs::create_dir_all(tree.root.join("build")).unwrap();
    fs::write(&future, "done").unwrap();

    assert!(set.contains(&future, false).unwrap());
}

#[test]
fn test_empty_set_covers_missing_paths() {
    let tree = Tree::new();
    let set = PathSet::with_probe(Vec::<String>::new(), tree.probe()).unwrap();

    assert!(set.is_empty());
    assert!(set.contains(&tree.path("does/not/exist"), false).unwrap());
}

#[test]
fn test_identical_inputs_build_identical_sets() {
    let tree = Tree::new();
    let inputs = ["src", "README.md", "lib/util.rs"];
    let first = PathSet::with_probe(inputs, tree.probe()).unwrap();
    let second = PathSet::with_probe(inputs, tree.probe()).unwrap();

    assert!(first.entries().eq(second.entries()));
    for query in ["src/main.rs", "srcgen/out.rs", "lib", "lib/util.rs", "README.md"] {
        for allow in [true, false] {
            assert_eq!(
                first.contains(query, allow).unwrap(),
                second.contains(query, allow).unwrap(),
                "query {query} allow {allow}"
            );
        }
    }
}

#[test]
fn test_case_insensitive_matching() {
    let tree = Tree::new();
    let options = MatchOptions {
        case_sensitivity: CaseSensitivity::Insensitive,
        ..MatchOptions::default()
    };
    let set = PathSet::with_options([tree.path("README.md")], tree.probe(), options).unwrap();

    let upper = to_string(&tree.root.join("readme.MD"));
    assert!(set.contains(&upper, false).unwrap());
}

#[cfg(unix)]
#[test]
fn test_symlinked_directory_follows_only_when_enabled() {
    use std::os::unix::fs::symlink;

    let tree = Tree::new();
    let link = tree.root.join("src-link");
    symlink(tree.root.join("src"), &link).unwrap();
    let via_link = to_string(&link.join("main.rs"));

    let plain = PathSet::with_probe([tree.path("src")], tree.probe()).unwrap();
    assert!(!plain.contains(&via_link, true).unwrap());

    let following =
        PathSet::with_probe([tree.path("src")], tree.probe().with_follow_symlinks(true)).unwrap();
    assert!(following.contains(&via_link, true).unwrap());
}

#[test]
fn test_following_symlinks_below_a_file_is_not_an_error() {
    let tree = Tree::new();
    let set =
        PathSet::with_probe([tree.path("src")], tree.probe().with_follow_symlinks(true)).unwrap();

    assert!(!set.contains("README.md/child", true).unwrap());
    assert!(!set.contains(&tree.path("src/main.rs/child"), false).unwrap());
    assert!(set.contains(&tree.path("src/main.rs/child"), true).unwrap());
}

#[test]
fn test_tilde_prefixed_file_name() {
    let tree = Tree::new();
    fs::write(tree.root.join("~notes.txt"), "").unwrap();
    let set = PathSet::with_probe(["~notes.txt"], tree.probe()).unwrap();

    assert!(set.contains(&tree.path("~notes.txt"), false).unwrap());
}

#[test]
fn test_default_constructor_uses_process_cwd() {
    let tree = Tree::new();
    let set = PathSet::new([tree.path("lib")]).unwrap();

    assert!(set.contains(&tree.path("lib/util.rs"), true).unwrap());
    assert!(!set.probe().follows_symlinks());
}

#[test]
fn test_shared_across_threads() {
    let tree = Tree::new();
    let set = PathSet::with_probe([tree.path("src")], tree.probe()).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = ["src/main.rs", "lib/util.rs", "src/nested/mod.rs"]
            .into_iter()
            .map(|rel| {
                let set = &set;
                let path = tree.path(rel);
                scope.spawn(move || set.contains(&path, true).unwrap())
            })
            .collect();

        let results: Vec<bool> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(results, vec![true, false, true]);
    });
}
