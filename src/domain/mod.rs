use serde::{Deserialize, Serialize};

/// The closed set of types a schema field can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Object,
    Array,
    Date,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Object => "object",
            Self::Array => "array",
            Self::Date => "date",
        }
    }
}

/// One node of a schema tree as authored by the form UI.
///
/// Everything except `type` is optional on the wire: trees arrive in
/// whatever half-finished state the editor has them in, and the generator
/// copes rather than rejects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    /// Opaque editor-assigned token, used only for identity comparisons.
    #[serde(default)]
    pub id: String,
    /// Key under which the generated value is emitted. May be empty while
    /// the field is still being edited.
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    /// Advisory only; the generator never omits a field based on it.
    #[serde(default)]
    pub required: bool,
    /// Meaningful on root-level string/number fields.
    #[serde(default)]
    pub is_primary_key: bool,
    /// Child fields, present for object fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Field>>,
    /// Element type, present for array fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_item_type: Option<FieldType>,
    /// Element schema, present for arrays of objects.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_item_schema: Option<Vec<Field>>,
    /// Inclusive lower bound for generated dates (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_min: Option<String>,
    /// Inclusive upper bound for generated dates (`YYYY-MM-DD`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_max: Option<String>,
}

impl Default for Field {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            field_type: FieldType::String,
            required: false,
            is_primary_key: false,
            children: None,
            array_item_type: None,
            array_item_schema: None,
            date_min: None,
            date_max: None,
        }
    }
}

/// A named snapshot of a schema tree, as stored by the template store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaTemplate {
    pub id: String,
    pub name: String,
    pub schema: Vec<Field>,
    #[serde(default)]
    pub created_at: String,
}
