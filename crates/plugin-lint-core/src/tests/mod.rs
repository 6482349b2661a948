//! Crate-level integration and BDD tests.

use std::fs;

use tempfile::TempDir;

use crate::{Manifest, validate};


#[test]
fn end_to_end_load_and_validate() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("manifest.json");
    fs::write(
        &path,
        r#"{
            "id": "bad-manifest-obsidian-plugin",
            "name": "Bad Obsidian Plugin",
            "description": "This plugin for Obsidian has a long description exceeding limits",
            "author": "author@example.com",
            "version": "1.0.0-beta",
            "minAppVersion": "1.0.0-final",
            "isDesktopOnly": false,
            "authorUrl": "https://obsidian.md",
            "fundingUrl": "https://obsidian.md/pricing"
        }"#,
    )
    .expect("write manifest");

    let manifest = Manifest::load(&path).expect("load");
    let result = validate(&manifest);
    assert_eq!(result.errors().len(), 9);
    assert_eq!(result.warnings().len(), 2);
    assert!(!result.is_valid());
}

#[test]
fn omitted_optional_urls_never_error() {
    let manifest = Manifest::from_json_slice(
        br#"{
            "id": "tidy",
            "name": "Tidy",
            "description": "Keeps folders tidy.",
            "author": "Sam",
            "version": "0.1.0",
            "minAppVersion": "0.15.0"
        }"#,
    )
    .expect("decode");
    assert!(validate(&manifest).is_valid());
}
