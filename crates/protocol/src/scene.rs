use serde::{Deserialize, Serialize};

use crate::options::FontSpec;
use crate::types::{Color, Point, Rect};

/// A rectangle with rounded corners — the shape of both the cutout and
/// the border outline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoundedRect {
    pub rect: Rect,
    pub radius: f64,
}

impl RoundedRect {
    pub fn new(rect: Rect, radius: f64) -> Self {
        Self { rect, radius }
    }

    /// The radius actually drawable on this rect: never negative, never
    /// more than half the smaller dimension.
    pub fn effective_radius(&self) -> f64 {
        self.radius
            .max(0.0)
            .min(self.rect.w.abs() / 2.0)
            .min(self.rect.h.abs() / 2.0)
    }

    /// Whether `p` falls inside the rounded shape. The straight edges
    /// use the same half-open convention as [`Rect::contains`]; the
    /// corner test is a circle-distance check.
    pub fn contains(&self, p: Point) -> bool {
        if !self.rect.contains(p) {
            return false;
        }
        let r = self.effective_radius();
        if r <= 0.0 {
            return true;
        }
        let (min_x, min_y) = (self.rect.min_x(), self.rect.min_y());
        let (max_x, max_y) = (self.rect.max_x(), self.rect.max_y());
        // Corner circle centers.
        let centers = [
            Point::new(min_x + r, min_y + r),
            Point::new(max_x - r, min_y + r),
            Point::new(min_x + r, max_y - r),
            Point::new(max_x - r, max_y - r),
        ];
        for c in centers {
            let in_corner_square =
                (p.x - c.x).abs() <= r && (p.y - c.y).abs() <= r && {
                    // Only the quadrant pointing away from the rect
                    // interior belongs to the corner.
                    let toward_x = if c.x <= self.rect.center_x() { p.x < c.x } else { p.x > c.x };
                    let toward_y = if c.y <= self.rect.center_y() { p.y < c.y } else { p.y > c.y };
                    toward_x && toward_y
                };
            if in_corner_square {
                let dx = p.x - c.x;
                let dy = p.y - c.y;
                return dx * dx + dy * dy <= r * r;
            }
        }
        true
    }
}

/// The dimmed backdrop: a path covering `bounds` with the `cutout`
/// shape appended, filled even-odd so the cutout stays transparent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimMask {
    pub bounds: Rect,
    pub cutout: RoundedRect,
    pub color: Color,
    pub opacity: f32,
}

impl DimMask {
    /// Even-odd membership: a point is dimmed when it lies inside the
    /// overlay bounds but outside the cutout shape.
    pub fn covers(&self, p: Point) -> bool {
        self.bounds.contains(p) && !self.cutout.contains(p)
    }
}

/// The outline drawn on the highlighted region. Transparent fill,
/// stroked with `color` at `width`; purely decorative and must never
/// intercept input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BorderVisual {
    pub shape: RoundedRect,
    pub color: Color,
    pub width: f64,
}

/// The caption label: a background-filled, rounded box whose frame
/// already includes the configured text padding. Text renders
/// horizontally centered within the frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionVisual {
    pub frame: Rect,
    pub text: String,
    pub color: Color,
    pub background: Color,
    pub radius: f64,
    pub font: FontSpec,
    /// 0 means unlimited.
    pub max_lines: u32,
}

/// Everything one highlight draws. Produced by the overlay renderer,
/// owned and attached/detached by the sequencer; frontends only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverlayScene {
    pub dim: DimMask,
    pub border: BorderVisual,
    pub caption: CaptionVisual,
}
