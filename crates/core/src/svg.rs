//! SVG exporter: renders an `OverlayScene` as a standalone SVG string.
//!
//! SVG has a real even-odd fill rule, so the dim mask exports as a
//! single two-subpath `<path>` — the same construction the scene
//! semantics describe, with no decomposition needed.

use limelight_protocol::{Color, OverlayScene, Rect, RoundedRect};

use crate::measure::visible_lines;

/// Render a scene as an SVG document string. `width` and `height`
/// define the viewBox and should match the screen bounds the scene was
/// rendered for.
pub fn render_svg(scene: &OverlayScene, width: f64, height: f64) -> String {
    let mut svg = String::with_capacity(2048);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}" width="{width}" height="{height}" style="font-family:system-ui,-apple-system,sans-serif">"#,
    ));

    // Dim mask: full-bounds subpath plus cutout subpath, even-odd.
    let dim = &scene.dim;
    svg.push_str(&format!(
        r#"<path d="{} {}" fill-rule="evenodd" fill="{}" fill-opacity="{}"/>"#,
        rect_path(dim.bounds),
        rounded_rect_path(dim.cutout),
        css_color(dim.color),
        dim.color.a * dim.opacity,
    ));

    // Border outline, transparent fill.
    let border = &scene.border;
    if border.width > 0.0 && !border.color.is_transparent() {
        let shape = border.shape;
        svg.push_str(&format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="none" stroke="{}" stroke-opacity="{}" stroke-width="{}" pointer-events="none"/>"#,
            shape.rect.x,
            shape.rect.y,
            shape.rect.w,
            shape.rect.h,
            shape.effective_radius(),
            css_color(border.color),
            border.color.a,
            border.width,
        ));
    }

    // Caption: background box plus centered text lines.
    let caption = &scene.caption;
    svg.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}" fill-opacity="{}"/>"#,
        caption.frame.x,
        caption.frame.y,
        caption.frame.w,
        caption.frame.h,
        caption.radius.max(0.0),
        css_color(caption.background),
        caption.background.a,
    ));

    let lines: Vec<&str> = visible_lines(&caption.text, caption.max_lines).collect();
    let line_height = caption.font.size * 1.2;
    let block_height = lines.len() as f64 * line_height;
    let first_baseline =
        caption.frame.center_y() - block_height / 2.0 + line_height * 0.75;
    for (i, line) in lines.iter().enumerate() {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" font-size="{}" fill="{}" fill-opacity="{}">{}</text>"#,
            caption.frame.center_x(),
            first_baseline + i as f64 * line_height,
            caption.font.size,
            css_color(caption.color),
            caption.color.a,
            escape_xml(line),
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn rect_path(r: Rect) -> String {
    format!(
        "M{} {}H{}V{}H{}Z",
        r.min_x(),
        r.min_y(),
        r.max_x(),
        r.max_y(),
        r.min_x()
    )
}

fn rounded_rect_path(shape: RoundedRect) -> String {
    let r = shape.effective_radius();
    let rect = shape.rect;
    if r <= 0.0 {
        return rect_path(rect);
    }
    let (x0, y0, x1, y1) = (rect.min_x(), rect.min_y(), rect.max_x(), rect.max_y());
    format!(
        "M{} {}H{}A{r} {r} 0 0 1 {} {}V{}A{r} {r} 0 0 1 {} {}H{}A{r} {r} 0 0 1 {} {}V{}A{r} {r} 0 0 1 {} {}Z",
        x0 + r,
        y0,
        x1 - r,
        x1,
        y0 + r,
        y1 - r,
        x1 - r,
        y1,
        x0 + r,
        x0,
        y1 - r,
        y0 + r,
        x0 + r,
        y0,
    )
}

fn css_color(c: Color) -> String {
    format!(
        "rgb({},{},{})",
        (c.r.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.g.clamp(0.0, 1.0) * 255.0).round() as u8,
        (c.b.clamp(0.0, 1.0) * 255.0).round() as u8,
    )
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
