//! Anchor-based caption placement.
//!
//! Nine alignment combinations, each mapping to a preferred anchor rule
//! against the highlighted region, plus four hard screen bounds that
//! always win. The host layout system is never consulted: the preferred
//! position is computed directly, then clamped numerically.

use limelight_protocol::{
    HorizontalAlignment, Point, Rect, Size, TextPosition, VerticalAlignment,
};

/// The caption origin the anchor table asks for, before clamping.
pub fn preferred_origin(region: Rect, size: Size, position: TextPosition, offset: Point) -> Point {
    use HorizontalAlignment as H;
    use VerticalAlignment as V;

    let x = match position.horizontal {
        // Left/center hangs the caption off the region's leading edge;
        // any other vertical keeps it flush with that edge.
        H::Left if position.vertical == V::Center => region.min_x() - offset.x - size.w,
        H::Left => region.min_x() + offset.x,
        H::Center => region.center_x() + offset.x - size.w / 2.0,
        // Right/center pushes the caption past the trailing edge;
        // otherwise its trailing edge lines up with the region's.
        H::Right if position.vertical == V::Center => region.max_x() + offset.x,
        H::Right => region.max_x() - offset.x - size.w,
    };
    let y = match position.vertical {
        V::Top => region.min_y() - offset.y - size.h,
        V::Center => region.center_y() + offset.y - size.h / 2.0,
        V::Bottom => region.max_y() + offset.y,
    };
    Point::new(x, y)
}

/// Place a caption of `size` relative to `region`, keeping it fully
/// inside `screen`. The anchor position is preferred; the screen edges
/// are hard. When the caption is larger than the screen the top/leading
/// bounds win.
pub fn place_caption(
    region: Rect,
    size: Size,
    position: TextPosition,
    offset: Point,
    screen: Rect,
) -> Rect {
    let preferred = preferred_origin(region, size, position, offset);
    let x = preferred
        .x
        .min(screen.max_x() - size.w)
        .max(screen.min_x());
    let y = preferred
        .y
        .min(screen.max_y() - size.h)
        .max(screen.min_y());
    Rect::from_origin_size(Point::new(x, y), size)
}
