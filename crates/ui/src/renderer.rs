use egui::{Align2, Color32, CornerRadius, FontId, Pos2, Stroke, StrokeKind};
use limelight_core::measure::visible_lines;
use limelight_core::overlay::cutout;
use limelight_protocol::{Color, OverlayScene, Point, Rect};

pub fn to_egui_rect(r: Rect) -> egui::Rect {
    egui::Rect::from_min_size(
        Pos2::new(r.x as f32, r.y as f32),
        egui::vec2(r.w as f32, r.h as f32),
    )
}

pub fn to_pos2(p: Point) -> Pos2 {
    Pos2::new(p.x as f32, p.y as f32)
}

pub fn to_color32(c: Color) -> Color32 {
    Color32::from_rgba_unmultiplied(
        (c.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.b.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.a.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

fn corner_radius(radius: f64) -> CornerRadius {
    CornerRadius::same(radius.clamp(0.0, 255.0) as u8)
}

/// Paint one overlay scene into an egui `Painter`.
///
/// epaint has no even-odd path fill, so the dim mask is reconstructed
/// from its side strips plus the per-corner triangle fans; the two
/// decompositions cover the same region as the even-odd definition.
pub fn paint_scene(painter: &egui::Painter, scene: &OverlayScene) {
    // Dim mask.
    let dim_fill = to_color32(scene.dim.color.with_opacity(scene.dim.opacity));
    for strip in cutout::side_strips(&scene.dim) {
        painter.rect_filled(to_egui_rect(strip), CornerRadius::ZERO, dim_fill);
    }
    for tri in cutout::corner_fans(&scene.dim.cutout, cutout::CORNER_SEGMENTS) {
        painter.add(egui::Shape::convex_polygon(
            tri.iter().copied().map(to_pos2).collect(),
            dim_fill,
            Stroke::NONE,
        ));
    }

    // Border outline. Purely decorative: input is handled by the
    // full-surface overlay response, never by this shape.
    let border = &scene.border;
    if border.width > 0.0 && !border.color.is_transparent() {
        painter.rect_stroke(
            to_egui_rect(border.shape.rect),
            corner_radius(border.shape.effective_radius()),
            Stroke::new(border.width as f32, to_color32(border.color)),
            StrokeKind::Inside,
        );
    }

    // Caption: background box, then centered text lines.
    let caption = &scene.caption;
    let frame = to_egui_rect(caption.frame);
    painter.rect_filled(
        frame,
        corner_radius(caption.radius),
        to_color32(caption.background),
    );

    let font_id = FontId::proportional(caption.font.size as f32);
    let text_color = to_color32(caption.color);
    let lines: Vec<&str> = visible_lines(&caption.text, caption.max_lines).collect();
    let galleys: Vec<_> = lines
        .iter()
        .map(|line| painter.layout_no_wrap((*line).to_owned(), font_id.clone(), text_color))
        .collect();
    let total_height: f32 = galleys.iter().map(|g| g.size().y).sum();
    let mut y = frame.center().y - total_height / 2.0;
    for galley in galleys {
        let pos = Pos2::new(frame.center().x - galley.size().x / 2.0, y);
        y += galley.size().y;
        painter.galley(pos, galley, text_color);
    }
}

/// Paint a plain filled label — used by the demo backdrop, not by the
/// overlay itself.
pub fn paint_labeled_box(
    painter: &egui::Painter,
    rect: Rect,
    label: &str,
    fill: Color32,
    text: Color32,
) {
    let rect = to_egui_rect(rect);
    painter.rect_filled(rect, CornerRadius::same(6), fill);
    painter.text(
        rect.center(),
        Align2::CENTER_CENTER,
        label,
        FontId::proportional(13.0),
        text,
    );
}
