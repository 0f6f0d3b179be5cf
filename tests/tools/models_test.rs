//! Tests for `src/tools/models.rs`: the built-in model catalog.

use autoagent::tools::models::ModelCatalog;

#[test]
fn builtin_catalog_has_eight_available_models() {
    let catalog = ModelCatalog::builtin();
    assert_eq!(catalog.models.len(), 8);
    assert!(catalog.models.iter().all(|m| m.status == "available"));
}

#[test]
fn builtin_categories_reference_known_models() {
    let catalog = ModelCatalog::builtin();
    assert!(catalog.dangling_references().is_empty());
    assert_eq!(catalog.categories.len(), 4);
}

#[test]
fn response_shape() {
    let catalog = ModelCatalog::builtin();
    let value = serde_json::to_value(catalog.response()).expect("should serialize");
    assert_eq!(value["total"], 8);
    assert_eq!(value["models"][0]["id"], "mixtral-8x7b");
    assert_eq!(value["models"][0]["type"], "Mixture of Experts");
    assert!(value["categories"]["Code Generation"]
        .as_array()
        .is_some_and(|ids| ids.iter().any(|id| id == "codellama")));
}
