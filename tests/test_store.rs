use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use snapserve::store::{ContentStore, parse_redirects};

#[test]
fn test_parse_redirects_two_token_lines() {
    let defs = "/old /new\n/gone.html /moved.html\n";
    let redirects = parse_redirects(defs);

    assert_eq!(redirects.len(), 2);
    assert_eq!(redirects.get("/old").unwrap(), "/new");
    assert_eq!(redirects.get("/gone.html").unwrap(), "/moved.html");
}

#[test]
fn test_parse_redirects_skips_malformed_lines() {
    let defs = "/only-one-token\n/a /b /c\n\n/ok /target\n";
    let redirects = parse_redirects(defs);

    assert_eq!(redirects.len(), 1);
    assert_eq!(redirects.get("/ok").unwrap(), "/target");
}

#[test]
fn test_parse_redirects_any_whitespace_separates() {
    let redirects = parse_redirects("/old\t\t  /new\n");

    assert_eq!(redirects.get("/old").unwrap(), "/new");
}

fn scratch_root(name: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("snapserve-{}-{}", name, std::process::id()));
    if root.exists() {
        fs::remove_dir_all(&root).unwrap();
    }
    fs::create_dir_all(&root).unwrap();
    root
}

#[test]
fn test_load_keys_are_root_relative() {
    let root = scratch_root("load");
    fs::write(root.join("index.html"), b"<p>home</p>").unwrap();
    fs::create_dir_all(root.join("img")).unwrap();
    fs::write(root.join("img/logo.png"), b"\x89PNG").unwrap();

    let store = ContentStore::load(&root).unwrap();

    assert_eq!(store.file("/index.html").unwrap(), b"<p>home</p>");
    assert_eq!(store.file("/img/logo.png").unwrap(), b"\x89PNG");
    assert!(store.file("index.html").is_none());

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_load_excludes_redirect_defs_from_file_table() {
    let root = scratch_root("defs");
    fs::write(root.join("a.txt"), b"a").unwrap();
    fs::write(root.join("redirect.defs"), "/old /new\n").unwrap();

    let store = ContentStore::load(&root).unwrap();

    assert!(store.file("/redirect.defs").is_none());
    assert_eq!(store.redirect("/old").unwrap(), "/new");

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_load_without_redirect_file_is_not_fatal() {
    let root = scratch_root("nodefs");
    fs::write(root.join("a.txt"), b"a").unwrap();

    let store = ContentStore::load(&root).unwrap();

    assert!(store.file("/a.txt").is_some());
    assert!(store.redirect("/anything").is_none());

    fs::remove_dir_all(&root).unwrap();
}

#[test]
fn test_synthetic_store_lookups() {
    let mut files = HashMap::new();
    files.insert("/a.txt".to_string(), b"content".to_vec());
    let store = ContentStore::new(files, HashMap::new());

    assert_eq!(store.file("/a.txt").unwrap(), b"content");
    assert!(store.file("/b.txt").is_none());
    assert!(store.redirect("/a.txt").is_none());
}
