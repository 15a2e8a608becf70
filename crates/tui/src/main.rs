mod renderer;

use anyhow::Result;
use limelight_core::model::Highlight;
use limelight_protocol::{
    BackgroundOptions, Color, CornerRadius, HighlightOptions, HorizontalAlignment, Insets, Point,
    Rect, TextPosition, VerticalAlignment,
};

// Demo layout in terminal cells; assumes at least an 80x24 terminal.
fn demo_highlights() -> Vec<Highlight> {
    let step = |rect: Rect, caption: &str, h: HorizontalAlignment, v: VerticalAlignment| {
        Highlight::from_frame(
            rect,
            caption,
            HighlightOptions {
                border_color: Color::rgb(1.0, 0.85, 0.4),
                border_width: 1.0,
                corner_radius: CornerRadius::Absolute(1.0),
                insets: Insets::uniform(1.0),
                text_background_color: Color::rgb(0.92, 0.92, 0.95),
                text_insets: Insets::new(1.0, 2.0, 1.0, 2.0),
                text_offset: Point::new(0.0, 1.0),
                text_position: TextPosition::new(h, v),
                ..HighlightOptions::default()
            },
        )
    };
    vec![
        step(
            Rect::new(4.0, 2.0, 22.0, 3.0),
            "The menu lives here",
            HorizontalAlignment::Left,
            VerticalAlignment::Bottom,
        ),
        step(
            Rect::new(32.0, 2.0, 20.0, 3.0),
            "Connection status",
            HorizontalAlignment::Center,
            VerticalAlignment::Bottom,
        ),
        step(
            Rect::new(4.0, 9.0, 30.0, 8.0),
            "Logs stream into this pane.\nPress q to leave the tour.",
            HorizontalAlignment::Center,
            VerticalAlignment::Top,
        ),
    ]
}

fn main() -> Result<()> {
    renderer::run_walkthrough(demo_highlights(), BackgroundOptions::default())?;
    Ok(())
}
