use std::sync::Mutex;

use limelight_core::measure::HeuristicMeasurer;
use limelight_core::model::Highlight;
use limelight_core::sequencer::{GesturePhase, Sequencer, SequencerState};
use limelight_protocol::{BackgroundOptions, HighlightOptions, OverlayScene, Rect};
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

static WALKTHROUGHS: Mutex<Vec<Sequencer>> = Mutex::new(Vec::new());

/// One highlight definition as sent by the JS host.
#[derive(Deserialize)]
struct HighlightDef {
    /// Target region in window coordinates, before insets.
    frame: Rect,
    text: String,
    options: Option<HighlightOptions>,
}

/// What the host gets back after creating or advancing a walkthrough.
#[derive(Serialize)]
struct StepResponse {
    finished: bool,
    scene: Option<OverlayScene>,
}

fn respond(seq: &Sequencer) -> Result<String, JsError> {
    let response = StepResponse {
        finished: seq.state() == SequencerState::Finished,
        scene: seq.scene().cloned(),
    };
    serde_json::to_string(&response).map_err(|e| JsError::new(&e.to_string()))
}

/// Create a walkthrough from highlight definitions (JSON array) and a
/// screen rect (JSON), show its first step, and return a handle for
/// later calls. Text sizing uses the deterministic fallback measurer;
/// hosts that need exact metrics should pre-measure and bake padding
/// into `text_insets`.
#[wasm_bindgen]
pub fn create_walkthrough(
    highlights_json: &str,
    screen_json: &str,
    background_json: Option<String>,
) -> Result<usize, JsError> {
    let defs: Vec<HighlightDef> =
        serde_json::from_str(highlights_json).map_err(|e| JsError::new(&e.to_string()))?;
    let screen: Rect =
        serde_json::from_str(screen_json).map_err(|e| JsError::new(&e.to_string()))?;
    let background: BackgroundOptions = match background_json {
        Some(json) => serde_json::from_str(&json).map_err(|e| JsError::new(&e.to_string()))?,
        None => BackgroundOptions::default(),
    };

    let highlights: Vec<Highlight> = defs
        .into_iter()
        .map(|def| {
            Highlight::from_frame(def.frame, def.text, def.options.unwrap_or_default())
        })
        .collect();

    let mut seq = Sequencer::new(highlights, background);
    seq.begin(screen, &HeuristicMeasurer);

    let mut walkthroughs = WALKTHROUGHS.lock().unwrap();
    let handle = walkthroughs.len();
    walkthroughs.push(seq);
    Ok(handle)
}

/// The scene currently on display, as JSON (`scene` is null once the
/// walkthrough has finished).
#[wasm_bindgen]
pub fn current_scene(handle: usize) -> Result<String, JsError> {
    let walkthroughs = WALKTHROUGHS.lock().unwrap();
    let seq = walkthroughs
        .get(handle)
        .ok_or_else(|| JsError::new("invalid walkthrough handle"))?;
    respond(seq)
}

/// Feed a completed tap: tears down the current step and either shows
/// the next one or finishes. Returns the new state as JSON; once
/// `finished` is true the host should remove its overlay element.
#[wasm_bindgen]
pub fn advance(handle: usize, screen_json: &str) -> Result<String, JsError> {
    let screen: Rect =
        serde_json::from_str(screen_json).map_err(|e| JsError::new(&e.to_string()))?;
    let mut walkthroughs = WALKTHROUGHS.lock().unwrap();
    let seq = walkthroughs
        .get_mut(handle)
        .ok_or_else(|| JsError::new("invalid walkthrough handle"))?;
    seq.tap(GesturePhase::Ended, screen, &HeuristicMeasurer);
    respond(seq)
}

/// Number of steps not yet shown.
#[wasm_bindgen]
pub fn remaining_steps(handle: usize) -> Result<usize, JsError> {
    let walkthroughs = WALKTHROUGHS.lock().unwrap();
    let seq = walkthroughs
        .get(handle)
        .ok_or_else(|| JsError::new("invalid walkthrough handle"))?;
    Ok(seq.remaining())
}
