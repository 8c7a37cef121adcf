//! Tests for folder source module

use super::*;
use crate::error::ErrorCode;
use crate::types::Folder;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use tempfile::tempdir;
use uuid::Uuid;

fn default_org() -> Uuid {
    Uuid::parse_str(DEFAULT_ORG_ID).unwrap()
}

fn folder(n: u128, name: &str, org: Uuid) -> Folder {
    Folder::new(Uuid::from_u128(n), name, org)
}

// ============================================================================
// InMemoryCatalog Tests
// ============================================================================

#[test]
fn test_fetch_filters_by_organization_in_order() {
    let org_a = Uuid::from_u128(0xa);
    let org_b = Uuid::from_u128(0xb);
    let catalog = InMemoryCatalog::new(vec![
        folder(1, "one", org_a),
        folder(2, "two", org_b),
        folder(3, "three", org_a),
        folder(4, "four", org_a),
    ]);

    let folders = catalog.fetch_by_organization(org_a).unwrap();
    let names: Vec<_> = folders.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["one", "three", "four"]);
}

#[test]
fn test_fetch_is_stable_across_calls() {
    let catalog = sample_catalog().unwrap();
    let first = catalog.fetch_by_organization(default_org()).unwrap();
    let second = catalog.fetch_by_organization(default_org()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_fetch_nil_organization() {
    let catalog = sample_catalog().unwrap();
    let err = catalog.fetch_by_organization(Uuid::nil()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidOrganizationId);
}

#[test]
fn test_fetch_unknown_organization_is_empty() {
    let catalog = sample_catalog().unwrap();
    let folders = catalog.fetch_by_organization(Uuid::new_v4()).unwrap();
    assert!(folders.is_empty());
}

#[test]
fn test_fetch_returns_copies() {
    let catalog = InMemoryCatalog::new(vec![folder(1, "one", Uuid::from_u128(0xa))]);

    let mut folders = catalog.fetch_by_organization(Uuid::from_u128(0xa)).unwrap();
    folders[0].name = "renamed".to_string();

    assert_eq!(catalog.folders()[0].name, "one");
}

#[test]
fn test_organizations_first_seen_order() {
    let org_a = Uuid::from_u128(0xa);
    let org_b = Uuid::from_u128(0xb);
    let catalog = InMemoryCatalog::new(vec![
        folder(1, "one", org_b),
        folder(2, "two", org_a),
        folder(3, "three", org_b),
    ]);

    assert_eq!(catalog.organizations(), vec![(org_b, 2), (org_a, 1)]);
    assert_eq!(catalog.len(), 3);
    assert!(!catalog.is_empty());
}

#[test]
fn test_shared_source_impls() {
    let catalog = Arc::new(sample_catalog().unwrap());
    let boxed: Box<dyn FolderSource> = Box::new(catalog.clone());

    let via_arc = catalog.fetch_by_organization(default_org()).unwrap();
    let via_box = boxed.fetch_by_organization(default_org()).unwrap();
    let via_ref = (&*catalog).fetch_by_organization(default_org()).unwrap();

    assert_eq!(via_arc, via_box);
    assert_eq!(via_arc, via_ref);
}

// ============================================================================
// Sample Catalog Tests
// ============================================================================

#[test]
fn test_sample_catalog_default_org() {
    let catalog = sample_catalog().unwrap();
    let folders = catalog.fetch_by_organization(default_org()).unwrap();

    assert_eq!(folders.len(), 9);
    assert!(folders.iter().all(|f| f.organization_id == default_org()));
}

#[test]
fn test_sample_catalog_has_other_orgs() {
    let catalog = sample_catalog().unwrap();
    let orgs = catalog.organizations();

    assert_eq!(orgs.len(), 3);
    assert_eq!(orgs[0], (default_org(), 9));
    assert_eq!(orgs.iter().map(|(_, n)| n).sum::<usize>(), catalog.len());
}

// ============================================================================
// Catalog Loading Tests
// ============================================================================

#[test]
fn test_catalog_format_from_path() {
    use std::path::Path;

    assert_eq!(CatalogFormat::from_path(Path::new("a.yaml")), CatalogFormat::Yaml);
    assert_eq!(CatalogFormat::from_path(Path::new("a.YML")), CatalogFormat::Yaml);
    assert_eq!(CatalogFormat::from_path(Path::new("a.json")), CatalogFormat::Json);
    assert_eq!(CatalogFormat::from_path(Path::new("catalog")), CatalogFormat::Json);
}

#[test]
fn test_load_yaml_catalog() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.yaml");
    std::fs::write(
        &path,
        r#"
- id: 00000000-0000-0000-0000-000000000001
  name: alpha
  org_id: 00000000-0000-0000-0000-00000000000a
- id: 00000000-0000-0000-0000-000000000002
  name: beta
  org_id: 00000000-0000-0000-0000-00000000000a
  deleted: true
"#,
    )
    .unwrap();

    let catalog = load_catalog(&path).unwrap();
    let folders = catalog.fetch_by_organization(Uuid::from_u128(0xa)).unwrap();

    assert_eq!(folders.len(), 2);
    assert_eq!(folders[0].name, "alpha");
    assert!(folders[1].deleted);
}

#[test]
fn test_load_missing_catalog_is_unavailable() {
    let dir = tempdir().unwrap();
    let err = load_catalog(dir.path().join("missing.json")).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataSourceUnavailable);
    assert!(err.to_string().contains("missing.json"));
}

#[test]
fn test_load_corrupt_catalog_is_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "{not json").unwrap();

    let err = load_catalog(&path).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataSourceUnavailable);
}

// ============================================================================
// FileCatalog Tests
// ============================================================================

#[test]
fn test_file_catalog_reads_on_fetch() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let org = Uuid::from_u128(0xa);

    std::fs::write(
        &path,
        serde_json::to_string(&vec![folder(1, "one", org)]).unwrap(),
    )
    .unwrap();
    let source = FileCatalog::new(&path);
    assert_eq!(source.fetch_by_organization(org).unwrap().len(), 1);

    std::fs::write(
        &path,
        serde_json::to_string(&vec![folder(1, "one", org), folder(2, "two", org)]).unwrap(),
    )
    .unwrap();
    assert_eq!(source.fetch_by_organization(org).unwrap().len(), 2);
}

#[test]
fn test_file_catalog_missing_file_vs_empty_org() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    let source = FileCatalog::new(&path);

    let err = source.fetch_by_organization(Uuid::from_u128(0xa)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::DataSourceUnavailable);

    std::fs::write(&path, "[]").unwrap();
    let folders = source.fetch_by_organization(Uuid::from_u128(0xa)).unwrap();
    assert!(folders.is_empty());
}

#[test]
fn test_file_catalog_nil_org_checked_first() {
    let dir = tempdir().unwrap();
    let source = FileCatalog::new(dir.path().join("missing.json"));

    let err = source.fetch_by_organization(Uuid::nil()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidOrganizationId);
    assert!(source.path() == dir.path().join("missing.json"));
}
