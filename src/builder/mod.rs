mod qr;

pub(crate) use qr::generate;

use image::Rgba;

use crate::common::{
    error::{RenderError, RenderResult},
    metadata::{AnchorMode, ECLevel, Offset},
};

pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
pub const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// Style of a rendered QR and of the overlays placed on it.
///
/// Setters take and return the value, so a style can be derived from another
/// without touching the original:
///
/// ```rust
/// use qrism_art::{AnchorMode, ECLevel, Style};
///
/// let base = Style::default().size(72).ec_level(ECLevel::Q);
/// let poster = base.anchor(AnchorMode::BottomOffset);
/// assert_eq!(base.anchor, AnchorMode::Center);
/// assert_eq!(poster.size, 72);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub size: u32,
    pub background: Rgba<u8>,
    pub foreground: Rgba<u8>,
    pub ec_level: ECLevel,
    pub anchor: AnchorMode,
    pub offset: Offset,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            size: 256,
            background: WHITE,
            foreground: BLACK,
            ec_level: ECLevel::H,
            anchor: AnchorMode::Center,
            offset: Offset::default(),
        }
    }
}

impl Style {
    pub fn size(mut self, size: u32) -> Self {
        self.size = size;
        self
    }

    pub fn background(mut self, color: Rgba<u8>) -> Self {
        self.background = color;
        self
    }

    pub fn foreground(mut self, color: Rgba<u8>) -> Self {
        self.foreground = color;
        self
    }

    pub fn ec_level(mut self, ec_level: ECLevel) -> Self {
        self.ec_level = ec_level;
        self
    }

    pub fn anchor(mut self, anchor: AnchorMode) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn offset(mut self, offset: Offset) -> Self {
        self.offset = offset;
        self
    }

    pub fn offset_x(mut self, dx: i32) -> Self {
        self.offset.dx = dx;
        self
    }

    pub fn offset_y(mut self, dy: i32) -> Self {
        self.offset.dy = dy;
        self
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.size == 0 {
            return Err(RenderError::InvalidSize(self.size));
        }
        Ok(())
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Size: {}, Ec level: {:?}, Anchor: {:?}, Offset: ({}, {}) }}",
            self.size, self.ec_level, self.anchor, self.offset.dx, self.offset.dy
        )
    }
}
