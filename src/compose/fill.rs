use enough::Stop;
use image::{imageops::FilterType, Rgba, RgbaImage};
use log::debug;

use crate::common::{
    error::{RenderError, RenderResult},
    metadata::Rect,
    pixel::{Color, PixelBuffer},
};

/// Rows walked between two cancellation checks.
const ROW_BATCH: u32 = 16;

#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub struct FillStats {
    pub rewritten: usize,
    pub skipped: usize,
}

// Classifier
//------------------------------------------------------------------------------

/// Alpha form of a writable working buffer.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
enum Alpha {
    Straight,
    Premultiplied,
}

impl Alpha {
    fn encode(self, color: Color) -> Rgba<u8> {
        match self {
            Self::Straight => color.to_straight(),
            Self::Premultiplied => color.to_premultiplied(),
        }
    }
}

/// True if a working pixel must keep its value: fully transparent, or already
/// `target` in every channel. Channels are compared as stored, for both alpha forms.
pub fn is_skippable(pixel: &Rgba<u8>, target: &Rgba<u8>) -> bool {
    pixel.0 == [0, 0, 0, 0] || pixel == target
}

/// True if `(x, y)` lies in the outer `border` pixel ring of a `w` x `h` buffer.
pub fn in_border(x: u32, y: u32, w: u32, h: u32, border: u32) -> bool {
    border > 0
        && (x < border
            || y < border
            || x >= w.saturating_sub(border)
            || y >= h.saturating_sub(border))
}


// Color fill
//------------------------------------------------------------------------------

/// Rewrites every non-border pixel of `working` that is not skippable against
/// `target` with the matching pixel of `reference`.
///
/// This is the one in-place operation on a working buffer. Luma-chroma and
/// wide buffers are first replaced by a premultiplied copy. A reference of a
/// different extent is resampled to fit, an empty one is rejected before
/// anything is touched. `stop` is checked every 16 rows; on cancellation the
/// rows already walked stay rewritten.
pub fn fill(
    working: &mut PixelBuffer,
    reference: &PixelBuffer,
    border: u32,
    target: Rgba<u8>,
    stop: &dyn Stop,
) -> RenderResult<FillStats> {
    if reference.width() == 0 || reference.height() == 0 {
        return Err(RenderError::EmptyReference);
    }

    match working {
        PixelBuffer::Straight(img) => walk(img, Alpha::Straight, reference, border, target, stop),
        PixelBuffer::Premultiplied(img) => {
            walk(img, Alpha::Premultiplied, reference, border, target, stop)
        }
        other => {
            debug!("Normalizing {} working buffer to premultiplied...", other.encoding());
            let mut img = other.to_premultiplied();
            let res = walk(&mut img, Alpha::Premultiplied, reference, border, target, stop);
            *other = PixelBuffer::Premultiplied(img);
            res
        }
    }
}

fn walk(
    img: &mut RgbaImage,
    alpha: Alpha,
    reference: &PixelBuffer,
    border: u32,
    target: Rgba<u8>,
    stop: &dyn Stop,
) -> RenderResult<FillStats> {
    let (w, h) = img.dimensions();

    let resized;
    let reference = if reference.rect() != Rect::of(img) {
        debug!("Resizing {:?} reference to {w}x{h}...", reference.rect());
        resized = reference.resize(w, h, FilterType::Lanczos3);
        &resized
    } else {
        reference
    };

    let mut stats = FillStats::default();
    for y in 0..h {
        if y % ROW_BATCH == 0 {
            stop.check()?;
        }
        for x in 0..w {
            if in_border(x, y, w, h, border) {
                continue;
            }
            let pixel = img.get_pixel_mut(x, y);
            if is_skippable(pixel, &target) {
                stats.skipped += 1;
                continue;
            }
            *pixel = alpha.encode(reference.color_at(x, y));
            stats.rewritten += 1;
        }
    }

    debug!(
        "Filled from {} reference: {} rewritten, {} skipped",
        reference.encoding(),
        stats.rewritten,
        stats.skipped
    );
    Ok(stats)
}
