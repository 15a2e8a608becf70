use std::collections::VecDeque;

use limelight_protocol::{BackgroundOptions, OverlayScene, Rect};
use serde::{Deserialize, Serialize};

use crate::measure::TextMeasurer;
use crate::model::Highlight;
use crate::overlay::render_overlay;

/// Where a tap gesture is in its lifecycle. Only [`GesturePhase::Ended`]
/// is actionable — the sequencer ignores everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SequencerState {
    /// Nothing has been shown yet.
    Idle,
    /// The highlight at `index` (0-based position in the original
    /// sequence) is on screen.
    Showing { index: usize },
    /// The queue is exhausted; the overlay should be gone.
    Finished,
}

/// What the host must do after feeding the sequencer an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// A new scene replaced the previous one — re-read
    /// [`Sequencer::scene`] and repaint.
    Redraw,
    /// The walkthrough finished; tear down the overlay presentation.
    /// Emitted exactly once per sequencer.
    Dismiss,
    /// Nothing changed.
    None,
}

/// Steps through a queue of highlights, one per completed tap.
///
/// Owns the single active [`OverlayScene`]; at most one highlight's
/// visuals exist at a time. The queue is consumed front to back,
/// destructively — there is no way back to an earlier step.
#[derive(Debug, Clone)]
pub struct Sequencer {
    queue: VecDeque<Highlight>,
    background: BackgroundOptions,
    state: SequencerState,
    scene: Option<OverlayScene>,
    next_index: usize,
}

impl Sequencer {
    pub fn new(highlights: Vec<Highlight>, background: BackgroundOptions) -> Self {
        Self {
            queue: highlights.into(),
            background,
            state: SequencerState::Idle,
            scene: None,
            next_index: 0,
        }
    }

    pub fn state(&self) -> SequencerState {
        self.state
    }

    pub fn background(&self) -> &BackgroundOptions {
        &self.background
    }

    /// The currently displayed visuals, if any.
    pub fn scene(&self) -> Option<&OverlayScene> {
        self.scene.as_ref()
    }

    /// Number of highlights not yet shown.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }

    /// First activation: show the front of the queue, or finish
    /// immediately when there is nothing to show. Calling again after
    /// the first activation does nothing.
    pub fn begin(&mut self, screen: Rect, measurer: &dyn TextMeasurer) -> Effect {
        if self.state != SequencerState::Idle {
            return Effect::None;
        }
        self.advance(screen, measurer)
    }

    /// Feed a tap gesture. In-progress phases are ignored; a completed
    /// tap tears down the current visuals and shows the next highlight,
    /// or finishes the walkthrough. Taps after `Finished` are no-ops.
    pub fn tap(
        &mut self,
        phase: GesturePhase,
        screen: Rect,
        measurer: &dyn TextMeasurer,
    ) -> Effect {
        if phase != GesturePhase::Ended {
            return Effect::None;
        }
        match self.state {
            SequencerState::Showing { .. } => self.advance(screen, measurer),
            SequencerState::Idle | SequencerState::Finished => Effect::None,
        }
    }

    fn advance(&mut self, screen: Rect, measurer: &dyn TextMeasurer) -> Effect {
        // All current visuals come down before anything new goes up.
        self.scene = None;
        match self.queue.pop_front() {
            Some(highlight) => {
                self.scene = Some(render_overlay(
                    &highlight,
                    screen,
                    measurer,
                    &self.background,
                ));
                self.state = SequencerState::Showing {
                    index: self.next_index,
                };
                self.next_index += 1;
                Effect::Redraw
            }
            None => {
                self.state = SequencerState::Finished;
                Effect::Dismiss
            }
        }
    }
}
