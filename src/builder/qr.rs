use image::RgbaImage;
use log::{debug, warn};
use qrcode::{Color as Module, QrCode};

use super::Style;
use crate::common::error::{RenderError, RenderResult};

// Matrix generation
//------------------------------------------------------------------------------

/// Generates the symbol for `content` and rasterizes it to exactly
/// `style.size` x `style.size` pixels, without a quiet zone.
pub(crate) fn generate(content: &str, style: &Style) -> RenderResult<RgbaImage> {
    if content.is_empty() {
        return Err(RenderError::EmptyContent);
    }
    style.validate()?;

    debug!("Generating QR {}...", style.metadata());
    let code = QrCode::with_error_correction_level(content.as_bytes(), style.ec_level.into())?;
    let w = code.width();
    debug!("Symbol width: {w} modules");

    if (style.size as usize) < w {
        warn!("Size {} is smaller than the symbol width {w}, modules will be dropped", style.size);
    }

    Ok(rasterize(&code.to_colors(), w, style))
}

// Render
//------------------------------------------------------------------------------

/// Nearest neighbour mapping from pixels back to modules, so any size fits.
fn rasterize(modules: &[Module], w: usize, style: &Style) -> RgbaImage {
    debug_assert!(modules.len() == w * w, "Module count {} is not {w}x{w}", modules.len());

    let sz = style.size as usize;
    let mut canvas = RgbaImage::new(style.size, style.size);
    for i in 0..sz {
        let r = i * w / sz;
        for j in 0..sz {
            let c = j * w / sz;
            let pixel = match modules[r * w + c] {
                Module::Dark => style.foreground,
                Module::Light => style.background,
            };
            canvas.put_pixel(j as u32, i as u32, pixel);
        }
    }
    canvas
}
