use image::{
    imageops::{self, FilterType},
    DynamicImage, ImageBuffer, ImageFormat, Rgb, RgbImage, Rgba, RgbaImage,
};

use super::{
    error::{RenderError, RenderResult},
    metadata::Rect,
};

pub type Rgba16Image = ImageBuffer<Rgba<u16>, Vec<u16>>;

/// Luma-chroma buffer. Channels hold Y, Cb and Cr in that order.
pub type YCbCrImage = ImageBuffer<Rgb<u8>, Vec<u8>>;

// Channel math
//------------------------------------------------------------------------------

fn premultiply(Rgba([r, g, b, a]): Rgba<u8>) -> Rgba<u8> {
    let alpha = a as u32;
    let scale = |c: u8| ((c as u32 * alpha + 127) / 255) as u8;
    Rgba([scale(r), scale(g), scale(b), a])
}

fn unpremultiply(Rgba([r, g, b, a]): Rgba<u8>) -> Rgba<u8> {
    if a == 0 {
        return Rgba([0, 0, 0, 0]);
    }
    let alpha = a as u32;
    let scale = |c: u8| ((c as u32 * 255 + alpha / 2) / alpha).min(255) as u8;
    Rgba([scale(r), scale(g), scale(b), a])
}

fn narrow(c: u16) -> u8 {
    (c >> 8) as u8
}

fn clamp_u8(v: i32) -> u8 {
    v.clamp(0, 255) as u8
}

// Luma-chroma color
//------------------------------------------------------------------------------

/// Full range JFIF luma-chroma triple.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct YCbCr {
    pub y: u8,
    pub cb: u8,
    pub cr: u8,
}

impl YCbCr {
    // 16.16 fixed point JFIF coefficients
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        let (r, g, b) = (r as i32, g as i32, b as i32);
        let y = (19595 * r + 38470 * g + 7471 * b + (1 << 15)) >> 16;
        let cb = (-11058 * r - 21710 * g + 32768 * b + (257 << 15)) >> 16;
        let cr = (32768 * r - 27439 * g - 5329 * b + (257 << 15)) >> 16;
        Self { y: clamp_u8(y), cb: clamp_u8(cb), cr: clamp_u8(cr) }
    }

    pub fn to_rgb(self) -> [u8; 3] {
        let yy = ((self.y as i32) << 16) + (1 << 15);
        let cb = self.cb as i32 - 128;
        let cr = self.cr as i32 - 128;
        let r = (yy + 91881 * cr) >> 16;
        let g = (yy - 22554 * cb - 46802 * cr) >> 16;
        let b = (yy + 116130 * cb) >> 16;
        [clamp_u8(r), clamp_u8(g), clamp_u8(b)]
    }
}

// Color
//------------------------------------------------------------------------------

/// A single pixel tagged with the encoding it was read in.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Straight(Rgba<u8>),
    Premultiplied(Rgba<u8>),
    Wide(Rgba<u16>),
    LumaChroma(YCbCr),
}

impl Color {
    pub fn to_straight(self) -> Rgba<u8> {
        match self {
            Self::Straight(c) => c,
            Self::Premultiplied(c) => unpremultiply(c),
            Self::Wide(Rgba(c)) => Rgba(c.map(narrow)),
            Self::LumaChroma(c) => {
                let [r, g, b] = c.to_rgb();
                Rgba([r, g, b, u8::MAX])
            }
        }
    }

    pub fn to_premultiplied(self) -> Rgba<u8> {
        match self {
            Self::Straight(c) => premultiply(c),
            Self::Premultiplied(c) => c,
            Self::Wide(_) => premultiply(self.to_straight()),
            // Opaque, both alpha forms agree
            Self::LumaChroma(_) => self.to_straight(),
        }
    }
}



// Pixel buffer
//------------------------------------------------------------------------------

/// A width x height grid where exactly one encoding is active.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelBuffer {
    Straight(RgbaImage),
    Premultiplied(RgbaImage),
    Wide(Rgba16Image),
    LumaChroma(YCbCrImage),
}

impl PixelBuffer {
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Self::Straight(img) | Self::Premultiplied(img) => img.dimensions(),
            Self::Wide(img) => img.dimensions(),
            Self::LumaChroma(img) => img.dimensions(),
        }
    }

    pub fn width(&self) -> u32 {
        self.dimensions().0
    }

    pub fn height(&self) -> u32 {
        self.dimensions().1
    }

    pub fn rect(&self) -> Rect {
        let (w, h) = self.dimensions();
        Rect::new(w, h)
    }

    pub fn encoding(&self) -> &'static str {
        match self {
            Self::Straight(_) => "straight",
            Self::Premultiplied(_) => "premultiplied",
            Self::Wide(_) => "wide",
            Self::LumaChroma(_) => "luma-chroma",
        }
    }

    /// Panics if `(x, y)` is out of bounds.
    pub fn color_at(&self, x: u32, y: u32) -> Color {
        match self {
            Self::Straight(img) => Color::Straight(*img.get_pixel(x, y)),
            Self::Premultiplied(img) => Color::Premultiplied(*img.get_pixel(x, y)),
            Self::Wide(img) => Color::Wide(*img.get_pixel(x, y)),
            Self::LumaChroma(img) => {
                let Rgb([y, cb, cr]) = *img.get_pixel(x, y);
                Color::LumaChroma(YCbCr { y, cb, cr })
            }
        }
    }

    /// Straight alpha 8-bit copy, whatever the active encoding.
    pub fn to_rgba8(&self) -> RgbaImage {
        match self {
            Self::Straight(img) => img.clone(),
            _ => {
                let (w, h) = self.dimensions();
                RgbaImage::from_fn(w, h, |x, y| self.color_at(x, y).to_straight())
            }
        }
    }

    pub fn to_premultiplied(&self) -> RgbaImage {
        match self {
            Self::Premultiplied(img) => img.clone(),
            _ => {
                let (w, h) = self.dimensions();
                RgbaImage::from_fn(w, h, |x, y| self.color_at(x, y).to_premultiplied())
            }
        }
    }

    /// Resamples in the active encoding, so the result keeps the same variant.
    pub fn resize(&self, width: u32, height: u32, filter: FilterType) -> Self {
        match self {
            Self::Straight(img) => Self::Straight(imageops::resize(img, width, height, filter)),
            Self::Premultiplied(img) => {
                Self::Premultiplied(imageops::resize(img, width, height, filter))
            }
            Self::Wide(img) => Self::Wide(imageops::resize(img, width, height, filter)),
            Self::LumaChroma(img) => Self::LumaChroma(imageops::resize(img, width, height, filter)),
        }
    }

    /// Encoder facing view. Straight and wide buffers keep their depth.
    pub fn to_dynamic(&self) -> DynamicImage {
        match self {
            Self::Straight(img) => DynamicImage::ImageRgba8(img.clone()),
            Self::Premultiplied(_) => DynamicImage::ImageRgba8(self.to_rgba8()),
            Self::Wide(img) => DynamicImage::ImageRgba16(img.clone()),
            Self::LumaChroma(img) => {
                let rgb = RgbImage::from_fn(img.width(), img.height(), |x, y| {
                    let Rgb([y, cb, cr]) = *img.get_pixel(x, y);
                    Rgb(YCbCr { y, cb, cr }.to_rgb())
                });
                DynamicImage::ImageRgb8(rgb)
            }
        }
    }

    /// Maps decoder output onto the encoding it natively carries.
    ///
    /// JPEG sources keep luma-chroma, opaque RGB is stored premultiplied (with
    /// full alpha the two forms agree) and 16-bit sources become wide. Any
    /// other layout is rejected.
    pub fn from_decoded(img: DynamicImage, format: Option<ImageFormat>) -> RenderResult<Self> {
        match img {
            DynamicImage::ImageRgba8(img) => Ok(Self::Straight(img)),
            DynamicImage::ImageRgb8(img) if format == Some(ImageFormat::Jpeg) => {
                let ycc = YCbCrImage::from_fn(img.width(), img.height(), |x, y| {
                    let c = YCbCr::from_rgb(img.get_pixel(x, y).0);
                    Rgb([c.y, c.cb, c.cr])
                });
                Ok(Self::LumaChroma(ycc))
            }
            DynamicImage::ImageRgb8(img) => {
                Ok(Self::Premultiplied(DynamicImage::ImageRgb8(img).into_rgba8()))
            }
            DynamicImage::ImageRgba16(img) => Ok(Self::Wide(img)),
            DynamicImage::ImageRgb16(img) => Ok(Self::Wide(DynamicImage::ImageRgb16(img).into_rgba16())),
            other => Err(RenderError::UnsupportedPixelFormat(other.color())),
        }
    }
}

impl TryFrom<DynamicImage> for PixelBuffer {
    type Error = RenderError;

    fn try_from(img: DynamicImage) -> RenderResult<Self> {
        Self::from_decoded(img, None)
    }
}
