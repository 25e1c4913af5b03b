//! # Entity Validator Module
//!
//! Schema-driven contract validation for decoded JSON payloads.
//!
//! ## Overview
//!
//! [`EntityValidator`] walks a [`Schema`] against a `serde_json::Value` and
//! reports **every** violation it finds, never just the first. The caller
//! gets the complete defect list for a payload in a single pass, in schema
//! declaration order, and decides what to do with it; the validator itself
//! has no fatal path. Any input, however malformed, produces a
//! [`ValidationResult`]; malformed input is the thing being reported on, not
//! an error condition.
//!
//! ## Check ordering
//!
//! Per field, presence precedes type precedes value constraint:
//!
//! - absent required field → one [`ViolationKind::MissingField`], nothing else
//! - present with the wrong type → one [`ViolationKind::TypeMismatch`]
//! - right type, value outside the permitted set → one
//!   [`ViolationKind::ConstraintViolation`]
//!
//! Nested objects and element-typed arrays recurse with the same policy;
//! their violations carry dotted paths (`category.id`) and bracketed indices
//! (`tags[2].name`).
//!
//! ## Usage
//!
//! ```rust
//! use petstore_contract::EntityValidator;
//! use serde_json::json;
//!
//! let validator = EntityValidator::pet();
//! let result = validator.validate(&json!({
//!     "id": 1,
//!     "name": "Rex",
//!     "category": {"id": 1, "name": "dog"},
//!     "photoUrls": [],
//!     "tags": [],
//!     "status": "available"
//! }));
//! assert!(result.ok());
//! ```

use crate::schema::{error_schema, pet_schema, pet_summary_schema, FieldType, Schema};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// Category of a contract defect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ViolationKind {
    /// Required field absent.
    MissingField,
    /// Field present but wrong primitive type.
    TypeMismatch,
    /// Correct type but value outside the permitted set.
    ConstraintViolation,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ViolationKind::MissingField => "MissingField",
            ViolationKind::TypeMismatch => "TypeMismatch",
            ViolationKind::ConstraintViolation => "ConstraintViolation",
        };
        f.write_str(name)
    }
}

/// A single contract defect: where, what kind, what was expected, what was
/// observed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Dotted field path with bracketed array indices, e.g. `tags[2].name`.
    /// The payload root is `$`.
    pub path: String,
    /// Defect category.
    pub kind: ViolationKind,
    /// Expected type or constraint, human readable.
    pub expected: String,
    /// Observed type and value, human readable.
    pub actual: String,
}

impl Violation {
    /// Create a violation.
    pub fn new(
        path: impl Into<String>,
        kind: ViolationKind,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Violation {
            path: path.into(),
            kind,
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: expected {}, got {}",
            self.kind, self.path, self.expected, self.actual
        )
    }
}

/// Outcome of validating one payload against one schema.
///
/// Equality is derived, so idempotence is directly assertable:
/// `validate(p) == validate(p)`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct ValidationResult {
    /// Every defect found, in schema declaration order.
    pub violations: Vec<Violation>,
}

impl ValidationResult {
    /// True when the payload conforms to the schema.
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ok() {
            return f.write_str("payload conforms to schema");
        }
        writeln!(f, "{} violation(s) found:", self.violations.len())?;
        for violation in &self.violations {
            writeln!(f, "  {violation}")?;
        }
        Ok(())
    }
}

/// Stateless, schema-driven payload checker.
///
/// Construct once with a [`Schema`] and call [`validate`](Self::validate) per
/// response. The validator holds no mutable state and is safe to share across
/// threads; concurrent callers validating their own payloads need no
/// coordination.
#[derive(Debug, Clone)]
pub struct EntityValidator {
    schema: Schema,
}

impl EntityValidator {
    /// Create a validator for an arbitrary schema.
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    /// Validator for the full Pet record contract.
    pub fn pet() -> Self {
        Self::new(pet_schema())
    }

    /// Validator for the Pet contract without the `name` requirement.
    pub fn pet_summary() -> Self {
        Self::new(pet_summary_schema())
    }

    /// Validator for the API error envelope (`{code, type, message}`).
    pub fn error_envelope() -> Self {
        Self::new(error_schema())
    }

    /// The schema this validator checks against.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate a decoded payload against the schema.
    ///
    /// Pure function of the payload and the fixed schema. Accumulates every
    /// violation across the full schema in one pass; never stops early and
    /// never fails. A payload root that is not a JSON object yields a single
    /// `TypeMismatch` at path `$`.
    pub fn validate(&self, payload: &Value) -> ValidationResult {
        let mut violations = Vec::new();
        match payload.as_object() {
            Some(map) => check_object(&self.schema, "", map, &mut violations),
            None => violations.push(Violation::new(
                "$",
                ViolationKind::TypeMismatch,
                "object",
                describe_value(payload),
            )),
        }
        ValidationResult { violations }
    }
}

/// Check every field of `schema` against `map`, appending violations in
/// declaration order.
fn check_object(schema: &Schema, prefix: &str, map: &Map<String, Value>, out: &mut Vec<Violation>) {
    for field in &schema.fields {
        let path = join_path(prefix, &field.name);
        match map.get(&field.name) {
            None => {
                if field.required {
                    out.push(Violation::new(
                        path,
                        ViolationKind::MissingField,
                        field.ty.describe(),
                        "absent",
                    ));
                }
            }
            Some(value) => check_value(&field.ty, &path, value, out),
        }
    }
}

/// Check one value against its expected type, recursing into arrays and
/// nested objects.
fn check_value(ty: &FieldType, path: &str, value: &Value, out: &mut Vec<Violation>) {
    match ty {
        FieldType::Integer => {
            if !value.is_i64() && !value.is_u64() {
                out.push(mismatch(path, ty, value));
            }
        }
        FieldType::Number => {
            if !value.is_number() {
                out.push(mismatch(path, ty, value));
            }
        }
        FieldType::String => {
            if !value.is_string() {
                out.push(mismatch(path, ty, value));
            }
        }
        FieldType::Boolean => {
            if !value.is_boolean() {
                out.push(mismatch(path, ty, value));
            }
        }
        FieldType::StringEnum(allowed) => match value.as_str() {
            // Type check first: a non-string is a TypeMismatch, never both.
            None => out.push(Violation::new(
                path,
                ViolationKind::TypeMismatch,
                "string",
                describe_value(value),
            )),
            Some(s) if !allowed.iter().any(|a| a == s) => out.push(Violation::new(
                path,
                ViolationKind::ConstraintViolation,
                ty.describe(),
                describe_value(value),
            )),
            Some(_) => {}
        },
        FieldType::Array(elem) => match value.as_array() {
            None => out.push(mismatch(path, ty, value)),
            Some(items) => {
                for (index, item) in items.iter().enumerate() {
                    check_value(elem, &format!("{path}[{index}]"), item, out);
                }
            }
        },
        FieldType::Object(nested) => match value.as_object() {
            None => out.push(mismatch(path, ty, value)),
            Some(map) => check_object(nested, path, map, out),
        },
    }
}

fn mismatch(path: &str, ty: &FieldType, value: &Value) -> Violation {
    Violation::new(
        path,
        ViolationKind::TypeMismatch,
        ty.describe(),
        describe_value(value),
    )
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

/// Describe the observed type and value for violation reports.
fn describe_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) => format!("string \"{s}\""),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
