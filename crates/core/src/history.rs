//! History entry model.
//!
//! One entry records one completed QR-generation event. Entries are
//! persisted by the `formqr-store` crate; the 50-entry cap and ordering
//! invariants live there.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::template::TemplateId;
use crate::types::Timestamp;
use crate::values::FormValues;

/// A persisted record of one generated QR code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Generation timestamp in RFC 3339 -- doubles as the entry id.
    pub id: String,
    pub timestamp: Timestamp,
    /// The rendered QR image as a `data:image/png;base64,` URL.
    pub qr_data_url: String,
    pub form_type: TemplateId,
    /// Normalized from whichever of `fullName` / `name` was submitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub full_name: Option<String>,
    /// Denormalized copy of the submitted values, in declaration order.
    pub fields: IndexMap<String, serde_json::Value>,
}

impl HistoryEntry {
    /// Build an entry from a completed submission.
    pub fn new(timestamp: Timestamp, qr_data_url: String, values: &FormValues) -> Self {
        Self {
            id: timestamp.to_rfc3339(),
            timestamp,
            qr_data_url,
            form_type: values.template(),
            full_name: values.full_name().map(str::to_string),
            fields: values.to_json_fields(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use serde_json::json;

    fn entry() -> HistoryEntry {
        let raw = json!({
            "password": "secret1",
            "name": "Jane Doe",
            "email": "jane@x.com",
            "phone": "+19876543210",
            "subject": "Hi",
            "message": "1234567890",
        });
        let values = validate(TemplateId::ContactForm, raw.as_object().unwrap()).unwrap();
        let ts = "2024-04-05T12:00:00Z".parse().unwrap();
        HistoryEntry::new(ts, "data:image/png;base64,AAAA".into(), &values)
    }

    #[test]
    fn id_is_the_rfc3339_timestamp() {
        let e = entry();
        assert_eq!(e.id, e.timestamp.to_rfc3339());
    }

    #[test]
    fn name_is_normalized_from_the_name_field() {
        assert_eq!(entry().full_name.as_deref(), Some("Jane Doe"));
    }

    #[test]
    fn round_trips_through_json() {
        let e = entry();
        let json = serde_json::to_string(&e).unwrap();
        let back: HistoryEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn fields_keep_submission_order() {
        let keys: Vec<_> = entry().fields.keys().cloned().collect();
        assert_eq!(
            keys,
            ["password", "name", "email", "phone", "subject", "message"]
        );
    }
}
