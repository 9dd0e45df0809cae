//! Schema-driven form validation.
//!
//! [`validate`] checks raw JSON input against a template's field schema and
//! produces either a fully-typed [`FormValues`] or the complete set of
//! field errors. Validation never short-circuits: every field is visited so
//! the caller can aggregate all messages into a single notification.

use std::fmt;
use std::sync::LazyLock;

use indexmap::IndexMap;
use validator::ValidateEmail;

use crate::template::{schema, FieldKind, FieldSpec, TemplateId};
use crate::values::{FieldValue, FormValues};

/// Optional leading `+`, then 10-15 digits with a non-zero first digit.
static PHONE_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^\+?[1-9]\d{9,14}$").expect("valid regex"));

/// One invalid field with its user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All field errors for one submission, in field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldErrors(pub Vec<FieldError>);

impl FieldErrors {
    /// Per-field messages in declaration order.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }
}

impl fmt::Display for FieldErrors {
    /// Joins all messages with a space, matching the combined notification
    /// shown to the user.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.messages().join(" "))
    }
}

/// Validate raw JSON input against a template's schema.
///
/// Returns the typed, declaration-ordered [`FormValues`] on success, or
/// every field violation at once on failure. Unknown keys in the input are
/// ignored; only schema fields are read.
pub fn validate(
    template: TemplateId,
    raw: &serde_json::Map<String, serde_json::Value>,
) -> Result<FormValues, FieldErrors> {
    let mut values = IndexMap::new();
    let mut errors = Vec::new();

    for field in schema(template) {
        match check_field(field, raw.get(field.name)) {
            Ok(Some(value)) => {
                values.insert(field.name.to_string(), value);
            }
            Ok(None) => {}
            Err(message) => errors.push(FieldError {
                field: field.name.to_string(),
                message,
            }),
        }
    }

    if errors.is_empty() {
        Ok(FormValues::new(template, values))
    } else {
        Err(FieldErrors(errors))
    }
}

/// Check one field. `Ok(Some(_))` stores a value, `Ok(None)` skips the
/// field entirely (never happens today -- optional text stores `""` so the
/// value set mirrors the submitted form), `Err` carries the message.
fn check_field(
    field: &FieldSpec,
    raw: Option<&serde_json::Value>,
) -> Result<Option<FieldValue>, String> {
    let text = raw.and_then(serde_json::Value::as_str).unwrap_or("");

    match field.kind {
        FieldKind::Text | FieldKind::TextArea | FieldKind::Password => {
            let min = field.min_len.unwrap_or(usize::from(field.required));
            if text.chars().count() < min {
                return Err(field.error_message.to_string());
            }
            Ok(Some(FieldValue::Text(text.to_string())))
        }

        FieldKind::Email => {
            if !text.validate_email() {
                return Err(field.error_message.to_string());
            }
            Ok(Some(FieldValue::Text(text.to_string())))
        }

        FieldKind::Phone => {
            if !PHONE_RE.is_match(text) {
                return Err(field.error_message.to_string());
            }
            Ok(Some(FieldValue::Text(text.to_string())))
        }

        FieldKind::Date => match chrono::NaiveDate::parse_from_str(text, "%Y-%m-%d") {
            Ok(date) => Ok(Some(FieldValue::Date(date))),
            Err(_) => Err(field.error_message.to_string()),
        },

        FieldKind::Radio => {
            let options = field.options.unwrap_or_default();
            if options.contains(&text) {
                Ok(Some(FieldValue::Text(text.to_string())))
            } else {
                Err(field.error_message.to_string())
            }
        }

        FieldKind::Checkbox => match raw {
            None | Some(serde_json::Value::Null) => Ok(Some(FieldValue::Bool(false))),
            Some(serde_json::Value::Bool(b)) => Ok(Some(FieldValue::Bool(*b))),
            Some(_) => Err(format!("{} must be a boolean.", field.label)),
        },
    }
}
