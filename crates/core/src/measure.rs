use limelight_protocol::{FontSpec, FontWeight, Size};

/// Opaque text-measurement capability.
///
/// The core treats fonts as data; only the host knows how text actually
/// rasterizes. Frontends with a real text engine (egui) measure with
/// it, everything else falls back to [`HeuristicMeasurer`].
///
/// Line breaking is owned by the measurer: explicit `\n` separates
/// lines, `max_lines` caps how many count (0 = unlimited). There is no
/// width-driven wrapping — a caption has no preferred width.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec, max_lines: u32) -> Size;
}

/// Split `text` into the lines that will actually render.
pub fn visible_lines(text: &str, max_lines: u32) -> impl Iterator<Item = &str> {
    let cap = if max_lines == 0 {
        usize::MAX
    } else {
        max_lines as usize
    };
    text.split('\n').take(cap)
}

/// Deterministic glyph-advance measurer, used by the tui frontend, the
/// wasm bridge, and tests. Width scales with character count and font
/// size; height with line count.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicMeasurer;

impl HeuristicMeasurer {
    const LINE_HEIGHT_FACTOR: f64 = 1.2;

    fn advance(font: &FontSpec) -> f64 {
        let base = font.size * 0.55;
        match font.weight {
            FontWeight::Regular => base,
            FontWeight::Medium => base * 1.03,
            FontWeight::Bold => base * 1.08,
        }
    }
}

impl TextMeasurer for HeuristicMeasurer {
    fn measure(&self, text: &str, font: &FontSpec, max_lines: u32) -> Size {
        let advance = Self::advance(font);
        let line_height = font.size * Self::LINE_HEIGHT_FACTOR;
        let mut width: f64 = 0.0;
        let mut lines: usize = 0;
        for line in visible_lines(text, max_lines) {
            width = width.max(line.chars().count() as f64 * advance);
            lines += 1;
        }
        Size::new(width, lines as f64 * line_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line_width_scales_with_length() {
        let m = HeuristicMeasurer;
        let font = FontSpec::default();
        let short = m.measure("hi", &font, 0);
        let long = m.measure("hello there", &font, 0);
        assert!(long.w > short.w);
        assert_eq!(short.h, long.h);
    }

    #[test]
    fn newlines_add_height_not_width() {
        let m = HeuristicMeasurer;
        let font = FontSpec::default();
        let one = m.measure("abcdef", &font, 0);
        let two = m.measure("abcdef\nabc", &font, 0);
        assert_eq!(one.w, two.w);
        assert_eq!(two.h, one.h * 2.0);
    }

    #[test]
    fn max_lines_caps_measurement() {
        let m = HeuristicMeasurer;
        let font = FontSpec::default();
        let capped = m.measure("a\nb\nc\nd", &font, 2);
        let full = m.measure("a\nb\nc\nd", &font, 0);
        assert_eq!(capped.h, full.h / 2.0);
    }

    #[test]
    fn empty_text_measures_one_empty_line() {
        let m = HeuristicMeasurer;
        let font = FontSpec::default();
        let size = m.measure("", &font, 0);
        assert_eq!(size.w, 0.0);
        assert!(size.h > 0.0);
    }
}
