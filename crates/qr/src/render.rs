//! QR symbol rendering.
//!
//! The output geometry is fixed by design: a 300x300 PNG with a 2-module
//! quiet margin, dark modules in `#0A4D68` on a `#F0F8FF` background. Only
//! the error correction level is configurable.

use std::io::Cursor;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use image::{Rgb, RgbImage};
use qrcode::QrCode;

use crate::QrError;

/// Output image edge length in pixels.
pub const QR_SIZE: u32 = 300;
/// Quiet margin around the symbol, in modules.
pub const QUIET_MODULES: u32 = 2;
/// Dark module color (`#0A4D68`).
pub const DARK: Rgb<u8> = Rgb([0x0a, 0x4d, 0x68]);
/// Background / light module color (`#F0F8FF`).
pub const LIGHT: Rgb<u8> = Rgb([0xf0, 0xf8, 0xff]);

/// QR error correction level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EcLevel {
    Low,
    #[default]
    Medium,
    Quartile,
    High,
}

impl EcLevel {
    /// Parse the single-letter form used in configuration (`l`/`m`/`q`/`h`,
    /// case-insensitive).
    pub fn parse(s: &str) -> Option<EcLevel> {
        match s.to_ascii_lowercase().as_str() {
            "l" | "low" => Some(EcLevel::Low),
            "m" | "medium" => Some(EcLevel::Medium),
            "q" | "quartile" => Some(EcLevel::Quartile),
            "h" | "high" => Some(EcLevel::High),
            _ => None,
        }
    }

    fn to_qrcode(self) -> qrcode::EcLevel {
        match self {
            EcLevel::Low => qrcode::EcLevel::L,
            EcLevel::Medium => qrcode::EcLevel::M,
            EcLevel::Quartile => qrcode::EcLevel::Q,
            EcLevel::High => qrcode::EcLevel::H,
        }
    }
}

/// Rendering options. Geometry and colors are fixed; see the module docs.
#[derive(Debug, Clone, Default)]
pub struct QrOptions {
    pub ec_level: EcLevel,
}

/// Render `url` as a QR symbol into PNG bytes.
///
/// Each output pixel is mapped back onto the module grid (symbol plus
/// quiet margin) by nearest sampling, so the image is exactly
/// [`QR_SIZE`]x[`QR_SIZE`] regardless of the symbol version chosen.
pub fn render_qr(url: &str, options: &QrOptions) -> Result<Vec<u8>, QrError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), options.ec_level.to_qrcode())
        .map_err(|e| match e {
            qrcode::types::QrError::DataTooLong => QrError::DataTooLong,
            other => QrError::Symbol(format!("{other:?}")),
        })?;

    let modules = code.to_colors();
    let width = code.width() as u32;
    let grid = width + 2 * QUIET_MODULES;

    let mut img = RgbImage::from_pixel(QR_SIZE, QR_SIZE, LIGHT);
    for y in 0..QR_SIZE {
        for x in 0..QR_SIZE {
            let mx = (x * grid / QR_SIZE) as i64 - i64::from(QUIET_MODULES);
            let my = (y * grid / QR_SIZE) as i64 - i64::from(QUIET_MODULES);
            if mx < 0 || my < 0 || mx >= i64::from(width) || my >= i64::from(width) {
                continue; // quiet margin
            }
            if modules[(my as usize) * (width as usize) + mx as usize] == qrcode::Color::Dark {
                img.put_pixel(x, y, DARK);
            }
        }
    }

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}

/// Wrap PNG bytes as a `data:image/png;base64,` URL.
pub fn png_data_url(png: &[u8]) -> String {
    format!("data:image/png;base64,{}", STANDARD.encode(png))
}
