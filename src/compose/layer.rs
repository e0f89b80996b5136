use image::{imageops, Rgba, RgbaImage};

use super::anchor::resolve;
use crate::common::{
    error::{RenderError, RenderResult},
    metadata::{AnchorMode, Offset, Rect},
};

// Layer
//------------------------------------------------------------------------------

/// Draws `fg` over a fresh copy of `bg` with its origin at `offset`.
///
/// `bg` is never written to. Parts of `fg` falling outside `bg` are clipped.
pub fn composite(fg: &RgbaImage, bg: &RgbaImage, offset: Offset) -> RgbaImage {
    let mut canvas = bg.clone();
    imageops::overlay(&mut canvas, fg, offset.dx as i64, offset.dy as i64);
    canvas
}

/// Centers `img` on a canvas grown by `border` pixels on every side.
pub fn bordered(img: &RgbaImage, border: u32, color: Rgba<u8>) -> RenderResult<RgbaImage> {
    let grow = |side: u32| border.checked_mul(2).and_then(|b| side.checked_add(b));
    let (Some(w), Some(h)) = (grow(img.width()), grow(img.height())) else {
        return Err(RenderError::BorderTooLarge(border));
    };

    let canvas = RgbaImage::from_pixel(w, h, color);
    let offset = resolve(AnchorMode::Center, Rect::of(img), Rect::of(&canvas), Offset::default());
    Ok(composite(img, &canvas, offset))
}
