use image::GenericImageView;

use super::error::{RenderError, RenderResult};

// Error correction level
//------------------------------------------------------------------------------

/// Recovery level of the generated symbol, from ~7% (L) up to ~30% (H) damage tolerance.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    #[default]
    H = 3,
}

impl TryFrom<u8> for ECLevel {
    type Error = RenderError;

    fn try_from(level: u8) -> RenderResult<Self> {
        match level {
            0 => Ok(Self::L),
            1 => Ok(Self::M),
            2 => Ok(Self::Q),
            3 => Ok(Self::H),
            _ => Err(RenderError::InvalidRecoveryLevel(level)),
        }
    }
}

impl From<ECLevel> for qrcode::EcLevel {
    fn from(ecl: ECLevel) -> Self {
        match ecl {
            ECLevel::L => qrcode::EcLevel::L,
            ECLevel::M => qrcode::EcLevel::M,
            ECLevel::Q => qrcode::EcLevel::Q,
            ECLevel::H => qrcode::EcLevel::H,
        }
    }
}

// Anchor mode
//------------------------------------------------------------------------------

/// Placement policy for an image drawn inside a larger one.
///
/// The numeric form (`0..=11`) follows declaration order.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone)]
pub enum AnchorMode {
    /// Caller supplied offset, used verbatim.
    Custom,
    #[default]
    Center,
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    TopCenter,
    RightCenter,
    BottomCenter,
    LeftCenter,
    /// Flush right, vertical offset kept from the caller.
    RightOffset,
    /// Flush bottom, horizontal offset kept from the caller.
    BottomOffset,
}

impl TryFrom<u8> for AnchorMode {
    type Error = RenderError;

    fn try_from(mode: u8) -> RenderResult<Self> {
        let anchor = match mode {
            0 => Self::Custom,
            1 => Self::Center,
            2 => Self::TopLeft,
            3 => Self::TopRight,
            4 => Self::BottomRight,
            5 => Self::BottomLeft,
            6 => Self::TopCenter,
            7 => Self::RightCenter,
            8 => Self::BottomCenter,
            9 => Self::LeftCenter,
            10 => Self::RightOffset,
            11 => Self::BottomOffset,
            _ => return Err(RenderError::InvalidAnchorMode(mode)),
        };
        Ok(anchor)
    }
}

// Geometry
//------------------------------------------------------------------------------

/// Signed placement of a foreground image relative to the background's origin.
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// Bounds of a pixel buffer anchored at the origin.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of<I: GenericImageView>(img: &I) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }
}

#[cfg(test)]
mod metadata_tests {
    use test_case::test_case;

    use super::{AnchorMode, ECLevel};
    use crate::common::error::RenderError;

    #[test_case(0, ECLevel::L)]
    #[test_case(1, ECLevel::M)]
    #[test_case(2, ECLevel::Q)]
    #[test_case(3, ECLevel::H)]
    fn test_ec_level_from_u8(level: u8, exp: ECLevel) {
        assert_eq!(ECLevel::try_from(level).unwrap(), exp);
    }

    #[test]
    fn test_ec_level_out_of_range() {
        assert!(matches!(ECLevel::try_from(4), Err(RenderError::InvalidRecoveryLevel(4))));
    }

    #[test]
    fn test_anchor_mode_from_u8() {
        assert_eq!(AnchorMode::try_from(0).unwrap(), AnchorMode::Custom);
        assert_eq!(AnchorMode::try_from(1).unwrap(), AnchorMode::Center);
        assert_eq!(AnchorMode::try_from(7).unwrap(), AnchorMode::RightCenter);
        assert_eq!(AnchorMode::try_from(11).unwrap(), AnchorMode::BottomOffset);
        assert!(matches!(AnchorMode::try_from(12), Err(RenderError::InvalidAnchorMode(12))));
    }
}
