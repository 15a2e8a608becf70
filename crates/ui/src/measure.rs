use egui::{Color32, FontId};
use limelight_core::measure::{TextMeasurer, visible_lines};
use limelight_protocol::{FontSpec, Size};

/// Text measurement backed by egui's font atlas, so caption sizing
/// matches what [`paint_scene`] actually draws.
///
/// [`paint_scene`]: crate::renderer::paint_scene
pub struct GalleyMeasurer {
    ctx: egui::Context,
}

impl GalleyMeasurer {
    pub fn new(ctx: &egui::Context) -> Self {
        Self { ctx: ctx.clone() }
    }
}

impl TextMeasurer for GalleyMeasurer {
    fn measure(&self, text: &str, font: &FontSpec, max_lines: u32) -> Size {
        let font_id = FontId::proportional(font.size as f32);
        self.ctx.fonts(|fonts| {
            let mut width = 0.0f32;
            let mut height = 0.0f32;
            for line in visible_lines(text, max_lines) {
                let galley =
                    fonts.layout_no_wrap(line.to_owned(), font_id.clone(), Color32::WHITE);
                width = width.max(galley.size().x);
                height += galley.size().y;
            }
            Size::new(f64::from(width), f64::from(height))
        })
    }
}
