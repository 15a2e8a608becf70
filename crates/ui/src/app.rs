use eframe::egui;
use limelight_core::{
    Effect, GesturePhase, Highlight, Highlightable, Sequencer, SequencerState,
};
use limelight_protocol::{
    BackgroundOptions, Color, CornerRadius, HighlightOptions, HorizontalAlignment, Insets, Point,
    Rect, TextPosition, VerticalAlignment,
};

use crate::measure::GalleyMeasurer;
use crate::renderer;

struct DemoTarget {
    rect: Rect,
    label: &'static str,
    caption: &'static str,
    position: TextPosition,
}

fn demo_targets(screen: Rect) -> Vec<DemoTarget> {
    vec![
        DemoTarget {
            rect: Rect::new(16.0, 12.0, 240.0, 32.0),
            label: "Search",
            caption: "Find anything from here.\nTry a file name or a symbol.",
            position: TextPosition::new(HorizontalAlignment::Left, VerticalAlignment::Bottom),
        },
        DemoTarget {
            rect: Rect::new(272.0, 12.0, 96.0, 32.0),
            label: "Filters",
            caption: "Narrow results by type.",
            position: TextPosition::new(HorizontalAlignment::Center, VerticalAlignment::Bottom),
        },
        DemoTarget {
            rect: Rect::new(screen.w - 124.0, 12.0, 108.0, 32.0),
            label: "Save view",
            caption: "Keep this setup for later.",
            position: TextPosition::new(HorizontalAlignment::Right, VerticalAlignment::Bottom),
        },
    ]
}

/// Demo application: a fake toolbar whose controls get walked through
/// once on startup. A click anywhere on the overlay advances; the last
/// click dismisses it.
pub struct WalkthroughApp {
    sequencer: Option<Sequencer>,
    tour_started: bool,
}

impl Highlightable for WalkthroughApp {
    fn present_overlay(&mut self, sequencer: Sequencer) {
        self.sequencer = Some(sequencer);
    }
}

impl WalkthroughApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        Self {
            sequencer: None,
            tour_started: false,
        }
    }

    fn start_tour(&mut self, screen: Rect) {
        let highlights: Vec<Highlight> = demo_targets(screen)
            .into_iter()
            .map(|target| {
                Highlight::from_frame(
                    target.rect,
                    target.caption,
                    HighlightOptions {
                        border_color: Color::WHITE,
                        border_width: 2.0,
                        corner_radius: CornerRadius::Relative(1.0),
                        insets: Insets::uniform(6.0),
                        text_insets: Insets::new(8.0, 12.0, 8.0, 12.0),
                        text_corner_radius: CornerRadius::Absolute(6.0),
                        text_offset: Point::new(0.0, 12.0),
                        text_position: target.position,
                        ..HighlightOptions::default()
                    },
                )
            })
            .collect();
        self.highlight(
            highlights,
            Some(BackgroundOptions {
                color: Color::BLACK,
                opacity: 0.6,
            }),
        );
    }

    fn draw_backdrop(&self, painter: &egui::Painter, screen: Rect) {
        let toolbar = Rect::new(0.0, 0.0, screen.w, 56.0);
        painter.rect_filled(
            renderer::to_egui_rect(toolbar),
            egui::CornerRadius::ZERO,
            egui::Color32::from_rgb(0x24, 0x27, 0x30),
        );
        for target in demo_targets(screen) {
            renderer::paint_labeled_box(
                painter,
                target.rect,
                target.label,
                egui::Color32::from_rgb(0x3a, 0x3f, 0x4d),
                egui::Color32::from_rgb(0xd8, 0xdc, 0xe4),
            );
        }
        painter.text(
            renderer::to_egui_rect(screen).center(),
            egui::Align2::CENTER_CENTER,
            "Click anywhere to step through the tour",
            egui::FontId::proportional(15.0),
            egui::Color32::from_rgb(0x6c, 0x70, 0x80),
        );
    }
}

impl eframe::App for WalkthroughApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let screen_rect = ctx.screen_rect();
        let screen = Rect::new(
            0.0,
            0.0,
            f64::from(screen_rect.width()),
            f64::from(screen_rect.height()),
        );

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_backdrop(ui.painter(), screen);

            if !self.tour_started {
                self.tour_started = true;
                self.start_tour(screen);
            }

            let measurer = GalleyMeasurer::new(ctx);
            let mut finished = false;
            if let Some(seq) = self.sequencer.as_mut() {
                if seq.state() == SequencerState::Idle
                    && seq.begin(screen, &measurer) == Effect::Dismiss
                {
                    finished = true;
                }

                // The whole overlay surface is one tap target; a
                // completed click is the only actionable gesture.
                let response = ui.interact(
                    screen_rect,
                    egui::Id::new("limelight_overlay"),
                    egui::Sense::click(),
                );
                if response.clicked()
                    && seq.tap(GesturePhase::Ended, screen, &measurer) == Effect::Dismiss
                {
                    finished = true;
                }

                if let Some(scene) = seq.scene() {
                    renderer::paint_scene(ui.painter(), scene);
                }
            }
            if finished {
                self.sequencer = None;
            }
        });
    }
}
