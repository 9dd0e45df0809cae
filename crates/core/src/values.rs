//! Validated form values.
//!
//! A [`FormValues`] is produced by [`crate::validate::validate`] and never
//! mutated afterwards -- each generate action creates a fresh submission.
//! The inner map preserves insertion order, which the validator guarantees
//! to be the owning template's field declaration order.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::template::TemplateId;

/// A single validated field value, constrained by the field's kind.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Text-like kinds (text, email, tel, password, textarea) and radio
    /// choices.
    Text(String),
    /// Checkbox state; absent checkboxes default to `false`.
    Bool(bool),
    /// Calendar date without a time component.
    Date(NaiveDate),
}

impl FieldValue {
    /// The contained text, if this is a [`FieldValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// JSON representation used for history denormalization.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }
}

/// A validated, immutable set of submitted values for one template.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    template: TemplateId,
    values: IndexMap<String, FieldValue>,
}

impl FormValues {
    /// Construct from a validated, declaration-ordered map. Only the
    /// validator should call this.
    pub(crate) fn new(template: TemplateId, values: IndexMap<String, FieldValue>) -> Self {
        Self { template, values }
    }

    /// The originating template.
    pub fn template(&self) -> TemplateId {
        self.template
    }

    /// Look up a field by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Iterate fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Normalized display name: whichever of `fullName` / `name` is
    /// present and non-empty.
    pub fn full_name(&self) -> Option<&str> {
        self.get("fullName")
            .or_else(|| self.get("name"))
            .and_then(FieldValue::as_text)
            .filter(|s| !s.is_empty())
    }

    /// Denormalized JSON copy of the values, in declaration order.
    pub fn to_json_fields(&self) -> IndexMap<String, serde_json::Value> {
        self.values
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FormValues {
        let mut map = IndexMap::new();
        map.insert("password".into(), FieldValue::Text("secret1".into()));
        map.insert("name".into(), FieldValue::Text("Jane".into()));
        map.insert(
            "dob".into(),
            FieldValue::Date(NaiveDate::from_ymd_opt(2024, 4, 5).unwrap()),
        );
        map.insert("resumeAttached".into(), FieldValue::Bool(false));
        FormValues::new(TemplateId::ContactForm, map)
    }

    #[test]
    fn full_name_falls_back_to_name() {
        assert_eq!(sample().full_name(), Some("Jane"));
    }

    #[test]
    fn full_name_prefers_full_name_key() {
        let mut map = IndexMap::new();
        map.insert("fullName".into(), FieldValue::Text("Jane Doe".into()));
        map.insert("name".into(), FieldValue::Text("Jane".into()));
        let values = FormValues::new(TemplateId::StudentBio, map);
        assert_eq!(values.full_name(), Some("Jane Doe"));
    }

    #[test]
    fn json_fields_preserve_order_and_types() {
        let fields = sample().to_json_fields();
        let keys: Vec<_> = fields.keys().map(String::as_str).collect();
        assert_eq!(keys, ["password", "name", "dob", "resumeAttached"]);
        assert_eq!(fields["dob"], serde_json::json!("2024-04-05"));
        assert_eq!(fields["resumeAttached"], serde_json::json!(false));
    }
}
