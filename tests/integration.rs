//! Integration tests for autoindex


use std::fs;

use harness::{TestDir, autoindex_cmd, entry_names, generated_files, read_index, run_autoindex};
use predicates::prelude::*;

fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(n, t)| (n.to_string(), t.to_string()))
        .collect()
}

#[test]
fn test_basic_listing() {
    let tree = TestDir::new();
    tree.add_file("file1.txt", "content");
    tree.add_file("file2.json", "{\"a\": 1}");
    tree.add_dir("subdir");

    let (stdout, stderr, success) = run_autoindex(tree.path(), &["--summary-json"]);
    assert!(success, "autoindex should succeed: {}", stderr);

    assert!(tree.path().join("index.html").is_file());
    assert!(tree.path().join("index.json").is_file());

    let index = read_index(tree.path());
    assert_eq!(index["path"], "/");
    assert_eq!(
        entry_names(&index),
        pairs(&[
            ("subdir", "directory"),
            ("file1.txt", "file"),
            ("file2.json", "file"),
        ])
    );
    assert_eq!(index["entries"][1]["size"], 7);

    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["directories-scanned"], 2);
    assert_eq!(summary["generated-count"], 4);
    assert!(
        summary["manifest-path"]
            .as_str()
            .unwrap()
            .ends_with("index.json")
    );
}

#[test]
fn test_ignore_node_modules() {
    let tree = TestDir::new();
    tree.add_file("node_modules/pkg.js", "module.exports = {}");
    tree.add_file("app.js", "console.log('hi')");

    let (stdout, stderr, success) =
        run_autoindex(tree.path(), &["--ignore", "node_modules", "--summary-json"]);
    assert!(success, "autoindex should succeed: {}", stderr);

    let index = read_index(tree.path());
    assert_eq!(entry_names(&index), pairs(&[("app.js", "file")]));
    assert!(!tree.path().join("node_modules").join("index.json").exists());
    assert!(!tree.path().join("node_modules").join("index.html").exists());

    let summary: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(summary["directories-scanned"], 1);
}

#[test]
fn test_missing_root() {
    let tree = TestDir::new();

    autoindex_cmd(tree.path())
        .arg("does-not-exist")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));

    assert!(generated_files(tree.path()).is_empty());
}

#[test]
fn test_without_metadata() {
    let tree = TestDir::new();
    tree.add_file("a.txt", "aaaa");
    tree.add_file("nested/b.bin", "bbbb");

    let (_stdout, stderr, success) =
        run_autoindex(tree.path(), &["--include-metadata", "false"]);
    assert!(success, "autoindex should succeed: {}", stderr);

    for dir in [tree.path().to_path_buf(), tree.path().join("nested")] {
        let raw = fs::read_to_string(dir.join("index.json")).unwrap();
        assert!(!raw.contains("\"size\""), "unexpected size: {}", raw);
        assert!(!raw.contains("\"modified\""), "unexpected modified: {}", raw);
    }
}

#[test]
fn test_index_per_directory() {
    let tree = TestDir::new();
    tree.add_file("a/b/c/deep.txt", "x");
    tree.add_file("a/side.txt", "x");
    tree.add_dir("empty");
    tree.add_file("skip/me.txt", "x");

    let (_stdout, stderr, success) = run_autoindex(
        tree.path(),
        &["--output-format", "json", "--ignore", "skip"],
    );
    assert!(success, "autoindex should succeed: {}", stderr);

    // root, a, a/b, a/b/c, empty
    let files = generated_files(tree.path());
    assert_eq!(files.len(), 5, "unexpected outputs: {:?}", files);
    assert!(files.iter().all(|p| p.ends_with("index.json")));
}

#[test]
fn test_round_trip_matches_children() {
    let tree = TestDir::new();
    tree.add_file("docs/guide.md", "# guide");
    tree.add_file("docs/api.md", "# api");
    tree.add_file("docs/debug.log", "noise");
    tree.add_dir("docs/images");

    let (_stdout, stderr, success) = run_autoindex(tree.path(), &["--ignore", "*.log"]);
    assert!(success, "autoindex should succeed: {}", stderr);

    let docs = read_index(&tree.path().join("docs"));
    assert_eq!(docs["path"], "/docs");
    assert_eq!(
        entry_names(&docs),
        pairs(&[
            ("images", "directory"),
            ("api.md", "file"),
            ("guide.md", "file"),
        ])
    );
    assert_eq!(docs["entries"][1]["path"], "docs/api.md");
}

#[test]
fn test_rerun_is_stable() {
    let tree = TestDir::new();
    tree.add_file("one.txt", "1");
    tree.add_file("sub/two.txt", "22");

    let strip = |mut v: serde_json::Value| {
        v.as_object_mut().unwrap().remove("generated");
        for entry in v["entries"].as_array_mut().unwrap() {
            entry.as_object_mut().unwrap().remove("modified");
        }
        v
    };

    assert!(run_autoindex(tree.path(), &[]).2);
    let first = strip(read_index(tree.path()));
    assert!(run_autoindex(tree.path(), &[]).2);
    let second = strip(read_index(tree.path()));

    assert_eq!(first, second);
    assert_eq!(entry_names(&second), pairs(&[("sub", "directory"), ("one.txt", "file")]));
}

#[test]
fn test_html_only() {
    let tree = TestDir::new();
    tree.add_file("sub/page.txt", "x");

    autoindex_cmd(tree.path())
        .args(["--output-format", "html", "--summary-json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest-path").not());

    assert!(tree.path().join("index.html").is_file());
    assert!(!tree.path().join("index.json").exists());

    let html = fs::read_to_string(tree.path().join("sub").join("index.html")).unwrap();
    assert!(html.contains("<title>Index of /sub</title>"));
    assert!(html.contains("href=\"../\""));
    assert!(html.contains("<a href=\"page.txt\">page.txt</a>"));
}

#[test]
fn test_stylesheet_and_title() {
    let tree = TestDir::new();
    tree.add_file("a.txt", "x");

    let (_stdout, stderr, success) = run_autoindex(
        tree.path(),
        &[
            "--stylesheet",
            "https://example.com/site.css",
            "--title-template",
            "Files in {path}",
        ],
    );
    assert!(success, "autoindex should succeed: {}", stderr);

    let html = fs::read_to_string(tree.path().join("index.html")).unwrap();
    assert!(html.contains("<link rel=\"stylesheet\" href=\"https://example.com/site.css\">"));
    assert!(!html.contains("<style>"));
    assert!(html.contains("<title>Files in /</title>"));
}

#[test]
fn test_inputs_from_action_environment() {
    let tree = TestDir::new();
    tree.add_file("site/keep.txt", "x");
    tree.add_file("site/drop.tmp", "x");
    tree.add_file("site/cache/blob", "x");
    let outputs = tree.path().join("github_output");

    autoindex_cmd(tree.path())
        .env("INPUT_ROOT", "site")
        .env("INPUT_OUTPUT-FORMAT", "json")
        .env("INPUT_IGNORE", "*.tmp\ncache\n# comment")
        .env("INPUT_INCLUDE-METADATA", "false")
        .env("GITHUB_OUTPUT", &outputs)
        .assert()
        .success();

    let index = read_index(&tree.path().join("site"));
    assert_eq!(entry_names(&index), pairs(&[("keep.txt", "file")]));
    assert!(!tree.path().join("site").join("index.html").exists());

    let reported = fs::read_to_string(&outputs).unwrap();
    assert!(reported.contains("generated-count=1\n"));
    assert!(reported.contains("directories-scanned=1\n"));
    assert!(reported.contains("manifest-path="));
}

#[test]
fn test_summary_table() {
    let tree = TestDir::new();
    tree.add_file("a.txt", "x");

    autoindex_cmd(tree.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("generated-count:"))
        .stdout(predicate::str::contains("directories-scanned:"));
}

#[test]
fn test_invalid_output_format() {
    let tree = TestDir::new();

    autoindex_cmd(tree.path())
        .args(["--output-format", "xml"])
        .assert()
        .failure();

    assert!(generated_files(tree.path()).is_empty());
}
