use std::{io::Write, path::Path};

use enough::{Stop, Unstoppable};
use image::{
    codecs::png::PngEncoder,
    imageops::{self, FilterType},
    DynamicImage, ImageFormat, ImageReader, Rgba,
};
use log::{debug, info};

use crate::builder::{generate, Style, WHITE};
use crate::common::{
    error::{RenderError, RenderResult},
    metadata::Rect,
    pixel::PixelBuffer,
};
use crate::compose::{bordered, composite, fill, resolve, FillStats};

/// A render session owning one working buffer.
///
/// The buffer is generated lazily by the first operation that needs it and is
/// replaced by every border or overlay step. Color fills rewrite it in place.
/// Operations apply to whatever buffer exists at call time, so their order
/// shapes the result.
#[derive(Debug, Clone)]
pub struct QRImage {
    content: String,
    style: Style,
    img: Option<PixelBuffer>,
}

impl QRImage {
    pub fn new(content: impl Into<String>) -> Self {
        Self::with_style(content, Style::default())
    }

    pub fn with_style(content: impl Into<String>, style: Style) -> Self {
        Self { content: content.into(), style, img: None }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Size, colors and ec level only reach a render that has not happened yet.
    /// Anchor and offset apply to the next overlay.
    pub fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    /// The working buffer, if rendered.
    pub fn image(&self) -> Option<&PixelBuffer> {
        self.img.as_ref()
    }

    pub fn into_image(self) -> Option<PixelBuffer> {
        self.img
    }

    /// Generates the working buffer once. Later calls return it unchanged.
    pub fn render(&mut self) -> RenderResult<&mut PixelBuffer> {
        let img = match self.img.take() {
            Some(img) => img,
            None => {
                let img = generate(&self.content, &self.style)?;
                info!("Rendered QR at {}x{}", img.width(), img.height());
                PixelBuffer::Straight(img)
            }
        };
        Ok(self.img.insert(img))
    }
}

// Border
//------------------------------------------------------------------------------

impl QRImage {
    /// Grows the current buffer by `size` pixels of `color` on every side.
    /// Always centered, the configured anchor is not consulted.
    pub fn set_border(&mut self, size: u32, color: Rgba<u8>) -> RenderResult<()> {
        let img = self.render()?.to_rgba8();
        let out = bordered(&img, size, color)?;
        debug!("Border {size}px: {:?} -> {:?}", img.dimensions(), out.dimensions());
        self.img = Some(PixelBuffer::Straight(out));
        Ok(())
    }

    pub fn set_border_default(&mut self, size: u32) -> RenderResult<()> {
        self.set_border(size, WHITE)
    }
}

// Overlay
//------------------------------------------------------------------------------

impl QRImage {
    /// Composites `overlay`, resized to `width` x `height`, with the current buffer.
    ///
    /// With `is_background` the overlay is the canvas (a poster) and the QR is
    /// drawn onto it; otherwise the overlay (a logo) is drawn onto the QR. The
    /// placement comes from the style's anchor and offset.
    pub fn overlay(
        &mut self,
        overlay: &DynamicImage,
        width: u32,
        height: u32,
        is_background: bool,
    ) -> RenderResult<()> {
        let base = self.render()?.to_rgba8();
        let scaled = imageops::resize(&overlay.to_rgba8(), width, height, FilterType::Lanczos3);

        let (fg, bg) = if is_background { (base, scaled) } else { (scaled, base) };
        let offset = resolve(self.style.anchor, Rect::of(&fg), Rect::of(&bg), self.style.offset);
        debug!(
            "Overlay {:?} onto {:?} at ({}, {}) with {:?}",
            fg.dimensions(),
            bg.dimensions(),
            offset.dx,
            offset.dy,
            self.style.anchor
        );

        self.img = Some(PixelBuffer::Straight(composite(&fg, &bg, offset)));
        Ok(())
    }

    pub fn overlay_file(
        &mut self,
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
        is_background: bool,
    ) -> RenderResult<()> {
        let (img, _) = load(path.as_ref())?;
        self.overlay(&img, width, height, is_background)
    }
}

// Color fill
//------------------------------------------------------------------------------

impl QRImage {
    /// Recolors the working buffer from `reference`, leaving a `border` pixel
    /// ring untouched.
    ///
    /// `fill_background` picks the style color that is kept as is: the
    /// background when set, so the ink takes the reference's colors, and the
    /// foreground otherwise.
    pub fn fill_color(
        &mut self,
        reference: &PixelBuffer,
        border: u32,
        fill_background: bool,
    ) -> RenderResult<FillStats> {
        self.fill_color_with_stop(reference, border, fill_background, &Unstoppable)
    }

    pub fn fill_color_with_stop(
        &mut self,
        reference: &PixelBuffer,
        border: u32,
        fill_background: bool,
        stop: &dyn Stop,
    ) -> RenderResult<FillStats> {
        let target = if fill_background { self.style.background } else { self.style.foreground };
        let working = self.render()?;
        let stats = fill(working, reference, border, target, stop)?;
        info!("Color fill rewrote {} pixels", stats.rewritten);
        Ok(stats)
    }

    pub fn fill_color_file(
        &mut self,
        path: impl AsRef<Path>,
        border: u32,
        fill_background: bool,
    ) -> RenderResult<FillStats> {
        self.render()?;
        let (img, format) = load(path.as_ref())?;
        let reference = PixelBuffer::from_decoded(img, format)?;
        self.fill_color(&reference, border, fill_background)
    }
}

// Output
//------------------------------------------------------------------------------

impl QRImage {
    /// Encodes the current buffer as PNG. Can be called any number of times.
    pub fn write_png<W: Write>(&mut self, sink: W) -> RenderResult<()> {
        let img = self.render()?.to_dynamic();
        img.write_with_encoder(PngEncoder::new(sink)).map_err(RenderError::Encode)
    }
}

fn load(path: &Path) -> RenderResult<(DynamicImage, Option<ImageFormat>)> {
    debug!("Loading {}...", path.display());
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    let format = reader.format();
    let img = reader.decode().map_err(RenderError::Decode)?;
    Ok((img, format))
}
