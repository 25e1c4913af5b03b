//! # Entity Schema Module
//!
//! Declarative descriptions of the JSON contracts the Pet Store API is
//! expected to honor.
//!
//! ## Overview
//!
//! A [`Schema`] is a fixed, ordered list of [`FieldSpec`]s: field name,
//! expected [`FieldType`], and whether the field must be present. Schemas are
//! plain data with no validation logic of their own. The
//! [`EntityValidator`](crate::validator::EntityValidator) walks a schema
//! against a decoded payload and accumulates every violation it finds.
//!
//! Field declaration order matters: violations are reported in the order the
//! fields were declared, so callers get a stable, reviewable defect list.
//!
//! ## Canned contracts
//!
//! - [`pet_schema`] - the full Pet record (all fields required)
//! - [`pet_summary_schema`] - Pet without the `name` requirement, for list
//!   responses where the upstream service omits it
//! - [`error_schema`] - the `{code, type, message}` error envelope the API
//!   returns for 404s and image uploads

use serde::Serialize;

/// Expected type (and value constraint) for a single schema field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldType {
    /// JSON number with no fractional part.
    Integer,
    /// Any JSON number.
    Number,
    /// JSON string.
    String,
    /// JSON boolean.
    Boolean,
    /// JSON array whose every element matches the inner type.
    Array(Box<FieldType>),
    /// JSON object validated against a nested schema.
    Object(Schema),
    /// JSON string restricted to a fixed set of values.
    StringEnum(Vec<String>),
}

impl FieldType {
    /// Human-readable description used in violation reports.
    pub fn describe(&self) -> String {
        match self {
            FieldType::Integer => "integer".to_string(),
            FieldType::Number => "number".to_string(),
            FieldType::String => "string".to_string(),
            FieldType::Boolean => "boolean".to_string(),
            FieldType::Array(elem) => format!("array of {}", elem.describe()),
            FieldType::Object(_) => "object".to_string(),
            FieldType::StringEnum(allowed) => {
                let quoted: Vec<String> = allowed.iter().map(|v| format!("\"{v}\"")).collect();
                format!("one of [{}]", quoted.join(", "))
            }
        }
    }

    /// Shorthand for a string enum from literal values.
    pub fn one_of(values: &[&str]) -> Self {
        FieldType::StringEnum(values.iter().map(|v| (*v).to_string()).collect())
    }
}

/// One field of a schema: name, expected type, presence requirement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Field name as it appears in the JSON object.
    pub name: String,
    /// Expected type and value constraint.
    pub ty: FieldType,
    /// Whether absence of the field is a violation. Optional fields are still
    /// type-checked when present.
    pub required: bool,
}

/// Ordered, immutable description of an entity contract.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Schema {
    /// Fields in declaration (and reporting) order.
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Declare a required field.
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            ty,
            required: true,
        });
        self
    }

    /// Declare an optional field (type-checked only when present).
    pub fn optional_field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.push(FieldSpec {
            name: name.into(),
            ty,
            required: false,
        });
        self
    }
}

/// Nested `category` object shared by the pet contracts.
fn category_schema() -> Schema {
    Schema::new()
        .field("id", FieldType::Integer)
        .field("name", FieldType::String)
}

/// Nested `tags` element shared by the pet contracts.
fn tag_schema() -> Schema {
    Schema::new()
        .field("id", FieldType::Integer)
        .field("name", FieldType::String)
}

/// Full Pet record contract.
///
/// Every field is required, including `name`. Use this for single-resource
/// responses (`GET /pet/{id}`, `POST /pet`, `PUT /pet`).
pub fn pet_schema() -> Schema {
    Schema::new()
        .field("id", FieldType::Integer)
        .field("name", FieldType::String)
        .field("category", FieldType::Object(category_schema()))
        .field("photoUrls", FieldType::Array(Box::new(FieldType::String)))
        .field(
            "tags",
            FieldType::Array(Box::new(FieldType::Object(tag_schema()))),
        )
        .field(
            "status",
            FieldType::one_of(&["pending", "available", "sold"]),
        )
}

/// Pet contract for list contexts where the service may omit `name`.
///
/// `name` is still type-checked when present; its absence is not a violation.
pub fn pet_summary_schema() -> Schema {
    Schema::new()
        .field("id", FieldType::Integer)
        .optional_field("name", FieldType::String)
        .field("category", FieldType::Object(category_schema()))
        .field("photoUrls", FieldType::Array(Box::new(FieldType::String)))
        .field(
            "tags",
            FieldType::Array(Box::new(FieldType::Object(tag_schema()))),
        )
        .field(
            "status",
            FieldType::one_of(&["pending", "available", "sold"]),
        )
}

/// Error envelope returned by the API for 404s and image uploads.
pub fn error_schema() -> Schema {
    Schema::new()
        .field("code", FieldType::Integer)
        .field("type", FieldType::String)
        .field("message", FieldType::String)
}
