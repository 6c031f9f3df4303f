use facetfind::catalog::Catalog;
use facetfind::error::FacetError;
use facetfind::search::{SearchEngine, SearchQuery};
use std::fs;

const CATALOG_JSON: &str = r#"{
    "sizes": [
        {"id": "small", "name": "Small"},
        {"id": "large", "name": "Large"}
    ],
    "colors": [
        {"id": "red", "name": "Red"},
        {"id": "blue", "name": "Blue"}
    ],
    "shirts": [
        {"id": 1, "name": "Harbor Tee", "size": "small", "color": "red"},
        {"id": 2, "name": "Skyline Polo", "size": "large", "color": "blue"}
    ]
}"#;

#[test]
fn loads_and_searches_a_json_catalog() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    assert_eq!(catalog.len(), 2);

    let engine = SearchEngine::new(&catalog);
    let results = engine
        .search(&SearchQuery::unfiltered().colors(["red"]))
        .unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results.items[0].name, "Harbor Tee");
}

#[test]
fn loads_from_a_file_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let catalog = Catalog::from_json_file(&path).unwrap();
    assert_eq!(catalog.len(), 2);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let err = Catalog::from_json_file(&path).unwrap_err();
    match err {
        FacetError::CatalogLoad { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected CatalogLoad, got {other:?}"),
    }
}

#[test]
fn rejects_a_shirt_outside_the_declared_universes() {
    let json = CATALOG_JSON.replace("\"color\": \"blue\"", "\"color\": \"green\"");
    let err = Catalog::from_json_str(&json).unwrap_err();
    assert!(matches!(err, FacetError::Catalog(_)));
    assert!(err.to_string().contains("green"));
}

#[test]
fn rejects_malformed_json() {
    let err = Catalog::from_json_str("{\"sizes\": [").unwrap_err();
    assert!(matches!(err, FacetError::Json(_)));
}

#[test]
fn sample_catalog_round_trips_through_the_json_loader() {
    let sample = Catalog::sample();
    let json = serde_json::to_string(&sample).unwrap();
    let reloaded = Catalog::from_json_str(&json).unwrap();
    assert_eq!(reloaded, sample);
}
