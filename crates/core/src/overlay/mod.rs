pub mod caption;
pub mod cutout;

use limelight_protocol::{
    BackgroundOptions, BorderVisual, CaptionVisual, DimMask, OverlayScene, Rect, RoundedRect, Size,
};

use crate::measure::TextMeasurer;
use crate::model::Highlight;

/// Turn one highlight into everything it draws.
///
/// Pure: no state survives between calls, and the same inputs always
/// produce the same scene. The sequencer owns when scenes are attached
/// and detached.
pub fn render_overlay(
    highlight: &Highlight,
    screen: Rect,
    measurer: &dyn TextMeasurer,
    background: &BackgroundOptions,
) -> OverlayScene {
    let options = highlight.options();
    let frame = highlight.frame();
    let shape = RoundedRect::new(frame, options.corner_radius.resolve(frame.h));

    let dim = DimMask {
        bounds: screen,
        cutout: shape,
        color: background.color,
        opacity: background.opacity,
    };

    let border = BorderVisual {
        shape,
        color: options.border_color,
        width: options.border_width,
    };

    let text_size = measurer.measure(highlight.text(), &options.text_font, options.text_max_lines);
    let padded = Size::new(
        text_size.w + options.text_insets.left + options.text_insets.right,
        text_size.h + options.text_insets.top + options.text_insets.bottom,
    );
    let caption_frame = caption::place_caption(
        frame,
        padded,
        options.text_position,
        options.text_offset,
        screen,
    );
    let caption = CaptionVisual {
        frame: caption_frame,
        text: highlight.text().to_owned(),
        color: options.text_color,
        background: options.text_background_color,
        radius: options.text_corner_radius.resolve(padded.h),
        font: options.text_font,
        max_lines: options.text_max_lines,
    };

    OverlayScene {
        dim,
        border,
        caption,
    }
}

#[cfg(test)]
mod tests {
    use limelight_protocol::{
        CornerRadius, FontSpec, HighlightOptions, Insets, Point,
    };

    use crate::measure::HeuristicMeasurer;

    use super::*;

    const SCREEN: Rect = Rect {
        x: 0.0,
        y: 0.0,
        w: 800.0,
        h: 600.0,
    };

    #[test]
    fn cutout_matches_inset_adjusted_frame() {
        let options = HighlightOptions {
            insets: Insets::uniform(4.0),
            corner_radius: CornerRadius::Relative(1.0),
            ..HighlightOptions::default()
        };
        let h = Highlight::from_frame(Rect::new(100.0, 100.0, 60.0, 20.0), "x", options);
        let scene = render_overlay(&h, SCREEN, &HeuristicMeasurer, &BackgroundOptions::default());

        let expected = Rect::new(96.0, 96.0, 68.0, 28.0);
        assert_eq!(scene.dim.cutout.rect, expected);
        // Relative(1.0) resolves to half the inset-adjusted height.
        assert_eq!(scene.dim.cutout.radius, 14.0);
        assert_eq!(scene.border.shape, scene.dim.cutout);
    }

    #[test]
    fn points_inside_target_are_never_dimmed() {
        let h = Highlight::from_frame(
            Rect::new(200.0, 150.0, 100.0, 50.0),
            "x",
            HighlightOptions::default(),
        );
        let scene = render_overlay(&h, SCREEN, &HeuristicMeasurer, &BackgroundOptions::default());
        assert!(!scene.dim.covers(Point::new(250.0, 175.0)));
        assert!(scene.dim.covers(Point::new(199.0, 175.0)));
        assert!(scene.dim.covers(Point::new(10.0, 10.0)));
    }

    #[test]
    fn caption_size_includes_text_insets() {
        let font = FontSpec::default();
        let text = "tap here";
        let bare = HeuristicMeasurer.measure(text, &font, 0);
        let options = HighlightOptions {
            text_insets: Insets::new(6.0, 12.0, 6.0, 12.0),
            ..HighlightOptions::default()
        };
        let h = Highlight::from_frame(Rect::new(100.0, 100.0, 40.0, 40.0), text, options);
        let scene = render_overlay(&h, SCREEN, &HeuristicMeasurer, &BackgroundOptions::default());
        assert!((scene.caption.frame.w - (bare.w + 24.0)).abs() < 1e-9);
        assert!((scene.caption.frame.h - (bare.h + 12.0)).abs() < 1e-9);
    }

    #[test]
    fn caption_radius_resolves_against_padded_height() {
        let options = HighlightOptions {
            text_insets: Insets::new(5.0, 0.0, 5.0, 0.0),
            text_corner_radius: CornerRadius::Relative(1.0),
            ..HighlightOptions::default()
        };
        let h = Highlight::from_frame(Rect::new(100.0, 100.0, 40.0, 40.0), "x", options.clone());
        let scene = render_overlay(&h, SCREEN, &HeuristicMeasurer, &BackgroundOptions::default());
        let text_h = HeuristicMeasurer.measure("x", &options.text_font, 0).h;
        assert!((scene.caption.radius - (text_h + 10.0) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn default_caption_rests_below_centered() {
        let h = Highlight::from_frame(
            Rect::new(300.0, 200.0, 100.0, 40.0),
            "hello",
            HighlightOptions::default(),
        );
        let scene = render_overlay(&h, SCREEN, &HeuristicMeasurer, &BackgroundOptions::default());
        assert_eq!(scene.caption.frame.min_y(), 240.0);
        assert!((scene.caption.frame.center_x() - 350.0).abs() < 1e-9);
    }

    #[test]
    fn background_options_flow_into_dim() {
        let bg = BackgroundOptions {
            color: limelight_protocol::Color::rgb(0.1, 0.2, 0.3),
            opacity: 0.8,
        };
        let h = Highlight::from_frame(
            Rect::new(0.0, 0.0, 10.0, 10.0),
            "x",
            HighlightOptions::default(),
        );
        let scene = render_overlay(&h, SCREEN, &HeuristicMeasurer, &bg);
        assert_eq!(scene.dim.color, bg.color);
        assert_eq!(scene.dim.opacity, bg.opacity);
    }
}
