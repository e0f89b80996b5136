use crate::common::metadata::{AnchorMode, Offset, Rect};

// Anchor
//------------------------------------------------------------------------------

/// Where `fg` lands inside `bg` under `mode`.
///
/// Pure in its inputs. `current` only matters for `Custom`, which passes it
/// through, and for the one-axis modes, which keep its other axis. Results may
/// be negative when `fg` is larger than `bg`; nothing is clamped.
pub fn resolve(mode: AnchorMode, fg: Rect, bg: Rect, current: Offset) -> Offset {
    let right = bg.width as i32 - fg.width as i32;
    let bottom = bg.height as i32 - fg.height as i32;
    let (center_x, center_y) = (right / 2, bottom / 2);

    let (dx, dy) = match mode {
        AnchorMode::Custom => (current.dx, current.dy),
        AnchorMode::Center => (center_x, center_y),
        AnchorMode::TopLeft => (0, 0),
        AnchorMode::TopRight => (right, 0),
        AnchorMode::BottomRight => (right, bottom),
        AnchorMode::BottomLeft => (0, bottom),
        AnchorMode::TopCenter => (center_x, 0),
        AnchorMode::RightCenter => (right, center_y),
        AnchorMode::BottomCenter => (center_x, bottom),
        AnchorMode::LeftCenter => (0, center_y),
        AnchorMode::RightOffset => (right, current.dy),
        AnchorMode::BottomOffset => (current.dx, bottom),
    };
    Offset::new(dx, dy)
}
