//! Payload encoding and QR rendering.
//!
//! [`payload`] turns serialized text into the base64 payload carried by a
//! viewer URL (and back); [`render`] draws that URL as a fixed-size PNG QR
//! image. [`generate`] composes the two into a [`QrArtifact`].

pub mod payload;
pub mod render;

pub use render::{EcLevel, QrOptions};

/// A generated QR code plus the URL it encodes.
#[derive(Debug, Clone)]
pub struct QrArtifact {
    /// Rendered PNG bytes.
    pub image_png: Vec<u8>,
    /// The same image as a `data:image/png;base64,` URL, ready for clients
    /// and history entries.
    pub image_data_url: String,
    /// The viewer URL embedded in the QR symbol.
    pub source_url: String,
}

/// Errors from payload encoding or QR rendering.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    /// The payload is not valid base64 or does not decode to UTF-8.
    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    /// The URL does not fit in a QR symbol at the requested error
    /// correction level. Terminal for the submission -- no retry.
    #[error("Data too long for a QR code")]
    DataTooLong,

    /// Any other symbol construction failure.
    #[error("QR symbol construction failed: {0}")]
    Symbol(String),

    /// PNG encoding failed.
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

/// Encode `text` behind a viewer URL and render it as a QR image.
pub fn generate(origin: &str, text: &str, options: &QrOptions) -> Result<QrArtifact, QrError> {
    let source_url = payload::viewer_url(origin, text);
    let image_png = render::render_qr(&source_url, options)?;
    let image_data_url = render::png_data_url(&image_png);
    Ok(QrArtifact {
        image_png,
        image_data_url,
        source_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_produces_png_and_data_url() {
        let artifact = generate(
            "http://localhost:3000",
            "Password: secret1\nForm Type: Contact Form\n\n",
            &QrOptions::default(),
        )
        .unwrap();

        assert!(artifact.source_url.starts_with("http://localhost:3000/view?data="));
        assert!(artifact.image_data_url.starts_with("data:image/png;base64,"));
        // PNG magic bytes.
        assert_eq!(&artifact.image_png[..4], b"\x89PNG");
    }
}
