//! Paintable decompositions of the even-odd dim mask.
//!
//! The mask itself is defined as "overlay bounds minus cutout, even-odd
//! fill" ([`DimMask::covers`]). Paint engines with a real even-odd path
//! fill (SVG) draw it directly; engines without one (egui's tessellator,
//! a terminal cell grid) reconstruct the same region from axis-aligned
//! side strips plus per-corner triangle fans.

use limelight_protocol::{DimMask, Point, Rect, RoundedRect};

/// Triangle-fan segments per rounded corner. At this resolution the
/// sagitta error stays under half a pixel for radii up to ~200.
pub const CORNER_SEGMENTS: usize = 8;

/// The four axis-aligned strips of the dim mask that surround the
/// cutout's bounding rect, clamped to the overlay bounds. Strips with
/// no positive area are omitted; a degenerate cutout dims the whole
/// bounds.
pub fn side_strips(mask: &DimMask) -> Vec<Rect> {
    let bounds = mask.bounds;
    let hole = mask.cutout.rect;
    if hole.w <= 0.0 || hole.h <= 0.0 {
        return vec![bounds];
    }

    let hx0 = hole.min_x().clamp(bounds.min_x(), bounds.max_x());
    let hx1 = hole.max_x().clamp(bounds.min_x(), bounds.max_x());
    let hy0 = hole.min_y().clamp(bounds.min_y(), bounds.max_y());
    let hy1 = hole.max_y().clamp(bounds.min_y(), bounds.max_y());

    let candidates = [
        // Top and bottom run the full overlay width.
        Rect::new(bounds.x, bounds.y, bounds.w, hy0 - bounds.min_y()),
        Rect::new(bounds.x, hy1, bounds.w, bounds.max_y() - hy1),
        // Left and right fill the remaining band.
        Rect::new(bounds.x, hy0, hx0 - bounds.min_x(), hy1 - hy0),
        Rect::new(hx1, hy0, bounds.max_x() - hx1, hy1 - hy0),
    ];
    candidates
        .into_iter()
        .filter(|r| r.w > 0.0 && r.h > 0.0)
        .collect()
}

/// Triangle fans covering the four corner bites — the dim regions
/// inside the cutout's bounding rect but outside its rounded shape.
/// Empty when the cutout has square corners or no area.
pub fn corner_fans(cutout: &RoundedRect, segments: usize) -> Vec<[Point; 3]> {
    let r = cutout.effective_radius();
    if r <= 0.0 || cutout.rect.w <= 0.0 || cutout.rect.h <= 0.0 {
        return Vec::new();
    }
    let rect = cutout.rect;
    let segments = segments.max(1);

    // (corner point, arc center, start angle) per corner; each arc spans
    // a quarter turn in y-down screen coordinates.
    let quarter = std::f64::consts::FRAC_PI_2;
    let corners = [
        (
            Point::new(rect.min_x(), rect.min_y()),
            Point::new(rect.min_x() + r, rect.min_y() + r),
            std::f64::consts::PI,
        ),
        (
            Point::new(rect.max_x(), rect.min_y()),
            Point::new(rect.max_x() - r, rect.min_y() + r),
            std::f64::consts::PI * 1.5,
        ),
        (
            Point::new(rect.max_x(), rect.max_y()),
            Point::new(rect.max_x() - r, rect.max_y() - r),
            0.0,
        ),
        (
            Point::new(rect.min_x(), rect.max_y()),
            Point::new(rect.min_x() + r, rect.max_y() - r),
            quarter,
        ),
    ];

    let mut fans = Vec::with_capacity(4 * segments);
    for (corner, center, start) in corners {
        let mut prev = arc_point(center, r, start);
        for i in 1..=segments {
            let theta = start + quarter * (i as f64 / segments as f64);
            let next = arc_point(center, r, theta);
            fans.push([corner, prev, next]);
            prev = next;
        }
    }
    fans
}

fn arc_point(center: Point, radius: f64, theta: f64) -> Point {
    Point::new(
        center.x + radius * theta.cos(),
        center.y + radius * theta.sin(),
    )
}
