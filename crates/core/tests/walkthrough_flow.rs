//! Integration test: drive a three-step walkthrough end to end through
//! the public API — host entry point, sequencing, overlay geometry, and
//! the SVG exporter — the way a frontend would.

use limelight_core::model::{Highlight, HighlightError, HostView};
use limelight_core::measure::HeuristicMeasurer;
use limelight_core::sequencer::{Effect, GesturePhase, Sequencer, SequencerState};
use limelight_core::svg::render_svg;
use limelight_core::Highlightable;
use limelight_protocol::{
    BackgroundOptions, Color, HighlightOptions, HorizontalAlignment, Insets, Point, Rect,
    TextPosition, VerticalAlignment,
};

const SCREEN: Rect = Rect {
    x: 0.0,
    y: 0.0,
    w: 1024.0,
    h: 768.0,
};

struct Host {
    sequencer: Option<Sequencer>,
}

impl Highlightable for Host {
    fn present_overlay(&mut self, sequencer: Sequencer) {
        self.sequencer = Some(sequencer);
    }
}

fn steps() -> Vec<Highlight> {
    let captioned = |x: f64, text: &str| {
        Highlight::from_frame(
            Rect::new(x, 200.0, 120.0, 44.0),
            text,
            HighlightOptions {
                insets: Insets::uniform(6.0),
                text_insets: Insets::new(8.0, 12.0, 8.0, 12.0),
                text_offset: Point::new(10.0, 5.0),
                text_position: TextPosition::new(
                    HorizontalAlignment::Left,
                    VerticalAlignment::Bottom,
                ),
                ..HighlightOptions::default()
            },
        )
    };
    vec![
        captioned(100.0, "Search from here"),
        captioned(300.0, "Filter the results"),
        captioned(500.0, "Save your view"),
    ]
}

#[test]
fn full_walkthrough_shows_each_step_then_dismisses_once() {
    let mut host = Host { sequencer: None };
    host.highlight(steps(), Some(BackgroundOptions::default()));
    let mut seq = host.sequencer.take().expect("host should have presented");

    assert_eq!(seq.begin(SCREEN, &HeuristicMeasurer), Effect::Redraw);

    let mut captions = Vec::new();
    let mut dismissals = 0;
    loop {
        match seq.scene() {
            Some(scene) => captions.push(scene.caption.text.clone()),
            None => break,
        }
        // An in-progress press never advances.
        assert_eq!(
            seq.tap(GesturePhase::Began, SCREEN, &HeuristicMeasurer),
            Effect::None
        );
        match seq.tap(GesturePhase::Ended, SCREEN, &HeuristicMeasurer) {
            Effect::Redraw => {}
            Effect::Dismiss => {
                dismissals += 1;
                break;
            }
            Effect::None => break,
        }
    }

    assert_eq!(
        captions,
        vec![
            "Search from here",
            "Filter the results",
            "Save your view",
        ]
    );
    assert_eq!(dismissals, 1);
    assert_eq!(seq.state(), SequencerState::Finished);

    // Extra taps after dismissal stay silent.
    assert_eq!(
        seq.tap(GesturePhase::Ended, SCREEN, &HeuristicMeasurer),
        Effect::None
    );
}

#[test]
fn each_scene_honors_geometry_and_placement() {
    let mut seq = Sequencer::new(steps(), BackgroundOptions::default());
    seq.begin(SCREEN, &HeuristicMeasurer);

    let scene = seq.scene().cloned().expect("scene must exist after begin");

    // Inset-adjusted cutout.
    assert_eq!(scene.dim.cutout.rect, Rect::new(94.0, 194.0, 132.0, 56.0));
    // Target interior is transparent, surroundings dimmed.
    assert!(!scene.dim.covers(Point::new(150.0, 220.0)));
    assert!(scene.dim.covers(Point::new(50.0, 50.0)));

    // Left/bottom with offset (10, 5): leading edge anchored 10 right
    // of the region's leading edge, top edge 5 below its bottom.
    assert_eq!(scene.caption.frame.min_x(), 94.0 + 10.0);
    assert_eq!(scene.caption.frame.min_y(), 250.0 + 5.0);

    // And the whole scene exports to SVG with the even-odd mask.
    let svg = render_svg(&scene, SCREEN.w, SCREEN.h);
    assert!(svg.contains("evenodd"));
    assert!(svg.contains("Search from here"));
}

#[test]
fn empty_highlight_list_presents_nothing() {
    let mut host = Host { sequencer: None };
    host.highlight(Vec::new(), None);
    assert!(host.sequencer.is_none());
}

#[test]
fn detached_target_produces_no_highlight_and_no_visuals() {
    struct Floating;
    impl HostView for Floating {
        fn frame(&self) -> Rect {
            Rect::new(10.0, 10.0, 40.0, 40.0)
        }
        fn parent(&self) -> Option<&dyn HostView> {
            None
        }
    }

    let result = Highlight::from_target(&Floating, "missing", HighlightOptions::default());
    assert_eq!(result, Err(HighlightError::DetachedTarget));

    // The failed construction contributes nothing to a sequence.
    let mut host = Host { sequencer: None };
    let highlights: Vec<Highlight> = result.into_iter().collect();
    host.highlight(highlights, None);
    assert!(host.sequencer.is_none());
}

#[test]
fn background_options_tint_every_scene() {
    let background = BackgroundOptions {
        color: Color::rgb(0.0, 0.1, 0.2),
        opacity: 0.75,
    };
    let mut seq = Sequencer::new(steps(), background);
    seq.begin(SCREEN, &HeuristicMeasurer);
    while let Some(scene) = seq.scene() {
        assert_eq!(scene.dim.color, background.color);
        assert_eq!(scene.dim.opacity, background.opacity);
        if seq.tap(GesturePhase::Ended, SCREEN, &HeuristicMeasurer) == Effect::Dismiss {
            break;
        }
    }
}
