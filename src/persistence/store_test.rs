use super::store::{builtin_templates, FileTemplateStore, TemplateStore};
use crate::domain::{Field, FieldType};
use crate::persistence::PersistenceError;
use tempfile::TempDir;

fn store_path(dir: &TempDir) -> std::path::PathBuf {
    dir.path().join("templates.json")
}

fn sample_schema() -> Vec<Field> {
    vec![Field {
        name: "title".to_string(),
        field_type: FieldType::String,
        ..Field::default()
    }]
}

#[tokio::test]
async fn test_empty_store_lists_exactly_the_builtins() {
    let dir = TempDir::new().unwrap();
    let store = FileTemplateStore::open(store_path(&dir), vec![]).await;

    let templates = store.list().await.unwrap();
    let builtin_ids: Vec<String> = builtin_templates().into_iter().map(|t| t.id).collect();
    let listed_ids: Vec<String> = templates.into_iter().map(|t| t.id).collect();
    assert_eq!(listed_ids, builtin_ids);
}

#[tokio::test]
async fn test_saved_template_lists_before_builtins() {
    let dir = TempDir::new().unwrap();
    let store = FileTemplateStore::open(store_path(&dir), vec![]).await;

    let saved = store.save("My Schema", sample_schema()).await.unwrap();
    let templates = store.list().await.unwrap();

    assert_eq!(templates[0].id, saved.id);
    assert_eq!(templates[0].name, "My Schema");
    // Built-ins still follow.
    assert!(templates.iter().any(|t| t.id == "default-user-profile"));
}

#[tokio::test]
async fn test_get_returns_saved_schema() {
    let dir = TempDir::new().unwrap();
    let store = FileTemplateStore::open(store_path(&dir), vec![]).await;

    let saved = store.save("My Schema", sample_schema()).await.unwrap();
    let fetched = store.get(&saved.id).await.unwrap();
    assert_eq!(fetched.schema.len(), 1);
    assert_eq!(fetched.schema[0].name, "title");
}

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FileTemplateStore::open(store_path(&dir), vec![]).await;

    let result = store.get("nope").await;
    assert!(matches!(result, Err(PersistenceError::NotFound { .. })));
}

#[tokio::test]
async fn test_delete_builtin_materializes_remaining_list() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let store = FileTemplateStore::open(&path, vec![]).await;

    store.delete("default-product").await.unwrap();

    let templates = store.list().await.unwrap();
    assert!(!templates.iter().any(|t| t.id == "default-product"));
    assert!(templates.iter().any(|t| t.id == "default-user-profile"));

    // The surviving merged list was persisted as the user list.
    let reopened = FileTemplateStore::open(&path, vec![]).await;
    let templates = reopened.list().await.unwrap();
    assert!(!templates.iter().any(|t| t.id == "default-product"));
}

#[tokio::test]
async fn test_delete_missing_is_not_found() {
    let dir = TempDir::new().unwrap();
    let store = FileTemplateStore::open(store_path(&dir), vec![]).await;

    let result = store.delete("nope").await;
    assert!(matches!(result, Err(PersistenceError::NotFound { .. })));
}

#[tokio::test]
async fn test_templates_survive_reopen() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);

    let store = FileTemplateStore::open(&path, vec![]).await;
    let saved = store.save("Persisted", sample_schema()).await.unwrap();

    let reopened = FileTemplateStore::open(&path, vec![]).await;
    let fetched = reopened.get(&saved.id).await.unwrap();
    assert_eq!(fetched.name, "Persisted");
}

#[tokio::test]
async fn test_malformed_store_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    std::fs::write(&path, "not json").unwrap();

    let store = FileTemplateStore::open(&path, vec![]).await;
    let templates = store.list().await.unwrap();
    assert_eq!(templates.len(), builtin_templates().len());
}

#[tokio::test]
async fn test_user_template_shadows_builtin_with_same_id() {
    let dir = TempDir::new().unwrap();
    let path = store_path(&dir);
    let shadow = serde_json::json!([{
        "id": "default-product",
        "name": "My Product",
        "schema": [],
        "created_at": "2026-01-01T00:00:00Z"
    }]);
    std::fs::write(&path, shadow.to_string()).unwrap();

    let store = FileTemplateStore::open(&path, vec![]).await;
    let templates = store.list().await.unwrap();
    let product_entries: Vec<_> = templates
        .iter()
        .filter(|t| t.id == "default-product")
        .collect();
    assert_eq!(product_entries.len(), 1);
    assert_eq!(product_entries[0].name, "My Product");
}
