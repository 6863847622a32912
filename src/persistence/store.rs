//! Template store: named snapshots of schema trees.
//!
//! A fixed set of built-in example templates is always available. User-saved
//! templates live in a JSON file and take precedence: listings return user
//! templates first, followed by any built-in whose id has not been shadowed.
//! When no user templates exist, listings are exactly the built-ins.

use crate::domain::{Field, FieldType, SchemaTemplate};
use crate::persistence::error::PersistenceError;
use async_trait::async_trait;
use chrono::Utc;
use std::path::PathBuf;
use tokio::sync::RwLock;

/// Port for template persistence.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// List all visible templates, user-saved first.
    async fn list(&self) -> Result<Vec<SchemaTemplate>, PersistenceError>;

    /// Fetch a single template by id.
    async fn get(&self, id: &str) -> Result<SchemaTemplate, PersistenceError>;

    /// Save a schema under a new name, assigning a fresh id.
    async fn save(&self, name: &str, schema: Vec<Field>)
        -> Result<SchemaTemplate, PersistenceError>;

    /// Delete a template by id. Deleting a built-in materializes the
    /// remaining merged list into the user store.
    async fn delete(&self, id: &str) -> Result<(), PersistenceError>;
}

/// File-backed template store with an in-memory cache.
pub struct FileTemplateStore {
    path: PathBuf,
    builtins: Vec<SchemaTemplate>,
    user_templates: RwLock<Vec<SchemaTemplate>>,
}

impl FileTemplateStore {
    /// Open a store backed by `path`, loading previously saved templates.
    ///
    /// A missing or malformed store file starts as an empty user list.
    /// `extra_builtins` (e.g. templates from the config directory) are
    /// appended to the standard built-in set.
    pub async fn open(path: impl Into<PathBuf>, extra_builtins: Vec<SchemaTemplate>) -> Self {
        let path = path.into();
        let user_templates = match tokio::fs::read_to_string(&path).await {
            Ok(content) => match serde_json::from_str::<Vec<SchemaTemplate>>(&content) {
                Ok(templates) => templates,
                Err(e) => {
                    tracing::warn!(
                        "Ignoring malformed template file {}: {}",
                        path.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };

        let mut builtins = builtin_templates();
        builtins.extend(extra_builtins);

        Self {
            path,
            builtins,
            user_templates: RwLock::new(user_templates),
        }
    }

    fn merged(&self, user: &[SchemaTemplate]) -> Vec<SchemaTemplate> {
        if user.is_empty() {
            return self.builtins.clone();
        }
        let mut merged = user.to_vec();
        for builtin in &self.builtins {
            if !merged.iter().any(|t| t.id == builtin.id) {
                merged.push(builtin.clone());
            }
        }
        merged
    }

    async fn persist(&self, templates: &[SchemaTemplate]) -> Result<(), PersistenceError> {
        let content = serde_json::to_string_pretty(templates)?;
        tokio::fs::write(&self.path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl TemplateStore for FileTemplateStore {
    async fn list(&self) -> Result<Vec<SchemaTemplate>, PersistenceError> {
        let user = self.user_templates.read().await;
        Ok(self.merged(&user))
    }

    async fn get(&self, id: &str) -> Result<SchemaTemplate, PersistenceError> {
        let user = self.user_templates.read().await;
        self.merged(&user)
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| PersistenceError::NotFound { id: id.to_string() })
    }

    async fn save(
        &self,
        name: &str,
        schema: Vec<Field>,
    ) -> Result<SchemaTemplate, PersistenceError> {
        let template = SchemaTemplate {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            schema,
            created_at: Utc::now().to_rfc3339(),
        };

        let mut user = self.user_templates.write().await;
        user.push(template.clone());
        self.persist(&user).await?;
        Ok(template)
    }

    async fn delete(&self, id: &str) -> Result<(), PersistenceError> {
        let mut user = self.user_templates.write().await;
        let merged = self.merged(&user);
        if !merged.iter().any(|t| t.id == id) {
            return Err(PersistenceError::NotFound { id: id.to_string() });
        }

        let remaining: Vec<SchemaTemplate> =
            merged.into_iter().filter(|t| t.id != id).collect();
        self.persist(&remaining).await?;
        *user = remaining;
        Ok(())
    }
}

fn builtin_field(id: &str, name: &str, field_type: FieldType) -> Field {
    Field {
        id: id.to_string(),
        name: name.to_string(),
        field_type,
        required: true,
        ..Field::default()
    }
}

/// The built-in example templates every installation ships with.
pub fn builtin_templates() -> Vec<SchemaTemplate> {
    let stamp = Utc::now().to_rfc3339();

    vec![
        SchemaTemplate {
            id: "default-user-profile".to_string(),
            name: "User Profile".to_string(),
            created_at: stamp.clone(),
            schema: vec![
                Field {
                    is_primary_key: true,
                    ..builtin_field("1", "id", FieldType::Number)
                },
                builtin_field("2", "name", FieldType::String),
                builtin_field("3", "email", FieldType::String),
                builtin_field("4", "age", FieldType::Number),
                builtin_field("5", "isActive", FieldType::Boolean),
                builtin_field("6", "createdAt", FieldType::Date),
            ],
        },
        SchemaTemplate {
            id: "default-product".to_string(),
            name: "Product".to_string(),
            created_at: stamp.clone(),
            schema: vec![
                Field {
                    is_primary_key: true,
                    ..builtin_field("1", "id", FieldType::Number)
                },
                builtin_field("2", "product", FieldType::String),
                builtin_field("3", "description", FieldType::String),
                builtin_field("4", "price", FieldType::Number),
                builtin_field("5", "inStock", FieldType::Boolean),
                Field {
                    array_item_type: Some(FieldType::String),
                    ..builtin_field("6", "tags", FieldType::Array)
                },
                builtin_field("7", "createdAt", FieldType::Date),
            ],
        },
        SchemaTemplate {
            id: "default-blog-post".to_string(),
            name: "Blog Post".to_string(),
            created_at: stamp.clone(),
            schema: vec![
                Field {
                    is_primary_key: true,
                    ..builtin_field("1", "id", FieldType::Number)
                },
                builtin_field("2", "title", FieldType::String),
                Field {
                    children: Some(vec![
                        builtin_field("31", "name", FieldType::String),
                        builtin_field("32", "email", FieldType::String),
                    ]),
                    ..builtin_field("3", "author", FieldType::Object)
                },
                builtin_field("4", "content", FieldType::String),
                Field {
                    array_item_type: Some(FieldType::String),
                    ..builtin_field("5", "tags", FieldType::Array)
                },
                builtin_field("6", "published", FieldType::Boolean),
                builtin_field("7", "publishedAt", FieldType::Date),
            ],
        },
        SchemaTemplate {
            id: "default-order".to_string(),
            name: "Order".to_string(),
            created_at: stamp.clone(),
            schema: vec![
                Field {
                    is_primary_key: true,
                    ..builtin_field("1", "orderId", FieldType::Number)
                },
                builtin_field("2", "userId", FieldType::Number),
                Field {
                    array_item_type: Some(FieldType::Object),
                    array_item_schema: Some(vec![
                        builtin_field("31", "productId", FieldType::Number),
                        builtin_field("32", "quantity", FieldType::Number),
                        builtin_field("33", "price", FieldType::Number),
                    ]),
                    ..builtin_field("3", "items", FieldType::Array)
                },
                builtin_field("4", "total", FieldType::Number),
                builtin_field("5", "status", FieldType::String),
                builtin_field("6", "orderedAt", FieldType::Date),
            ],
        },
        SchemaTemplate {
            id: "default-employee".to_string(),
            name: "Employee Record".to_string(),
            created_at: stamp,
            schema: vec![
                Field {
                    is_primary_key: true,
                    ..builtin_field("1", "employeeId", FieldType::Number)
                },
                builtin_field("2", "name", FieldType::String),
                builtin_field("3", "department", FieldType::String),
                builtin_field("4", "email", FieldType::String),
                builtin_field("5", "hireDate", FieldType::Date),
                builtin_field("6", "salary", FieldType::Number),
                builtin_field("7", "isActive", FieldType::Boolean),
            ],
        },
    ]
}
