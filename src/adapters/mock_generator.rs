//! Schema-driven mock data generation.
//!
//! Walks a [`Field`] tree and produces JSON records. Non-key values are
//! randomly sampled; primary-key values are derived from the record index,
//! so a batch of N records carries keys `1..=N` without any shared state
//! between calls.
//!
//! Array elements recurse with the element position as the index, not the
//! enclosing record index. Primary keys nested inside array items therefore
//! restart for every array instance and are only unique within one array.

use crate::domain::{Field, FieldType};
use chrono::{Duration, NaiveDate};
use fake::faker::address::en::{CityName, StreetName};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Word;
use fake::faker::name::en::Name;
use fake::Fake;
use rand::Rng;
use serde_json::{json, Map, Value};

/// Thematic pool a string field draws samples from, picked by name inference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StringPool {
    PersonName,
    Email,
    City,
    Street,
    Word,
}

/// Generate a single record from a schema tree.
pub fn generate_from_schema(fields: &[Field]) -> Value {
    generate_record(fields, 0)
}

/// Generate `count` records from a schema tree.
///
/// Records are independent objects in input order; primary-key fields
/// sequence across them by record index.
pub fn generate_multiple_from_schema(fields: &[Field], count: usize) -> Vec<Value> {
    (0..count).map(|index| generate_record(fields, index)).collect()
}

fn generate_record(fields: &[Field], index: usize) -> Value {
    let mut record = Map::new();
    for field in fields {
        // Duplicate sibling names overwrite earlier entries; accepted.
        record.insert(field.name.clone(), generate_field_value(field, index));
    }
    Value::Object(record)
}

fn generate_field_value(field: &Field, index: usize) -> Value {
    if field.is_primary_key {
        return generate_primary_key(field, index);
    }

    match field.field_type {
        FieldType::String => json!(random_string(infer_string_pool(&field.name))),
        FieldType::Number => json!(random_number()),
        FieldType::Boolean => json!(rand::thread_rng().gen_bool(0.5)),
        FieldType::Object => match &field.children {
            Some(children) if !children.is_empty() => generate_record(children, index),
            _ => Value::Object(Map::new()),
        },
        FieldType::Array => generate_array_value(field),
        FieldType::Date => json!(random_date(
            field.date_min.as_deref(),
            field.date_max.as_deref()
        )),
    }
}

fn generate_array_value(field: &Field) -> Value {
    let len = rand::thread_rng().gen_range(1..=3);
    let mut items = Vec::with_capacity(len);

    for position in 0..len {
        let value = match (field.array_item_type, &field.array_item_schema) {
            (Some(FieldType::Object), Some(schema)) => generate_record(schema, position),
            (Some(item_type), _) => {
                // Transient non-key field standing in for the element.
                let item_field = Field {
                    id: format!("item-{position}"),
                    name: format!("item{position}"),
                    field_type: item_type,
                    ..Field::default()
                };
                generate_field_value(&item_field, position)
            }
            (None, _) => json!(random_string(StringPool::Word)),
        };
        items.push(value);
    }

    Value::Array(items)
}

/// Index-derived key for a primary-key field.
///
/// Numeric keys are `index + 1`. String keys follow the name, checked in
/// order: id/uuid, then email, then username/user, then a lowercased
/// `name_<n>` fallback.
fn generate_primary_key(field: &Field, index: usize) -> Value {
    let name = field.name.to_lowercase();

    match field.field_type {
        FieldType::Number => json!(index as i64 + 1),
        FieldType::String => {
            let key = if name.contains("id") || name.contains("uuid") {
                format!("{}_{:03}", name, index + 1)
            } else if name.contains("email") {
                format!("user{}@example.com", index + 1)
            } else if name.contains("username") || name.contains("user") {
                format!("user{}", index + 1)
            } else {
                format!("{}_{}", name, index + 1)
            };
            json!(key)
        }
        // Only root string/number fields are eligible; anything else that
        // slips through gets the sequential id.
        _ => json!(index as i64 + 1),
    }
}

fn infer_string_pool(field_name: &str) -> StringPool {
    let name = field_name.to_lowercase();
    if name.contains("name") || name.contains("title") || name.contains("author") {
        StringPool::PersonName
    } else if name.contains("email") {
        StringPool::Email
    } else if name.contains("city") {
        StringPool::City
    } else if name.contains("street") || name.contains("address") {
        StringPool::Street
    } else {
        StringPool::Word
    }
}

fn random_string(pool: StringPool) -> String {
    match pool {
        StringPool::PersonName => Name().fake::<String>(),
        StringPool::Email => SafeEmail().fake::<String>(),
        StringPool::City => CityName().fake::<String>(),
        StringPool::Street => StreetName().fake::<String>(),
        StringPool::Word => Word().fake::<String>(),
    }
}

fn random_number() -> i64 {
    rand::thread_rng().gen_range(1..=1000)
}

fn default_date_bounds() -> (NaiveDate, NaiveDate) {
    (
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or(NaiveDate::MIN),
        NaiveDate::from_ymd_opt(2030, 12, 31).unwrap_or(NaiveDate::MAX),
    )
}

/// Uniform random calendar date in `[min, max]`, day granularity.
/// Missing or unparseable bounds fall back to the defaults, as does an
/// inverted range.
fn random_date(min: Option<&str>, max: Option<&str>) -> String {
    let (default_min, default_max) = default_date_bounds();

    let mut lower = min
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or(default_min);
    let mut upper = max
        .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
        .unwrap_or(default_max);
    if upper < lower {
        lower = default_min;
        upper = default_max;
    }

    let span_days = (upper - lower).num_days();
    let offset = rand::thread_rng().gen_range(0..=span_days);
    (lower + Duration::days(offset)).format("%Y-%m-%d").to_string()
}
