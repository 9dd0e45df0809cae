//! Base64 payload encoding and the viewer URL contract.
//!
//! The payload is the base64 (standard alphabet, padded) of the text's
//! UTF-8 bytes. The viewer reverses it: `GET /view?data={payload}` decodes
//! back to the exact serialized (or accepted-summary) text, byte for byte.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::QrError;

/// Encode text into its base64 payload.
pub fn encode_payload(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}

/// Decode a payload back into text.
pub fn decode_payload(encoded: &str) -> Result<String, QrError> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| QrError::InvalidPayload(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| QrError::InvalidPayload(e.to_string()))
}

/// Build the viewer URL for a payload: `{origin}/view?data={encoded}`.
pub fn viewer_url(origin: &str, text: &str) -> String {
    format!("{}/view?data={}", origin, encode_payload(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_is_byte_exact() {
        let text = "Password: secret1\nForm Type: Contact Form\n\nName: Jane Doe\n";
        assert_eq!(decode_payload(&encode_payload(text)).unwrap(), text);
    }

    #[test]
    fn round_trip_survives_non_ascii() {
        let text = "Name: José Álvarez\nAddress: Ünterstraße 12, 東京\n";
        assert_eq!(decode_payload(&encode_payload(text)).unwrap(), text);
    }

    #[test]
    fn viewer_url_shape() {
        let url = viewer_url("https://example.com", "hi");
        assert_eq!(url, format!("https://example.com/view?data={}", encode_payload("hi")));
    }

    #[test]
    fn invalid_base64_is_rejected() {
        assert!(decode_payload("not base64!!").is_err());
    }

    #[test]
    fn non_utf8_decode_is_rejected() {
        let encoded = STANDARD.encode([0xff, 0xfe, 0xfd]);
        assert!(decode_payload(&encoded).is_err());
    }
}
