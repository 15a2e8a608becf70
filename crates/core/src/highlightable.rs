use limelight_protocol::BackgroundOptions;

use crate::model::Highlight;
use crate::sequencer::Sequencer;

/// Opt-in capability for hosts that can display a full-screen overlay.
///
/// Implementors only provide the presentation hook; the provided
/// [`Highlightable::highlight`] method is the public entry point and
/// handles the empty-sequence case before any presentation happens.
pub trait Highlightable {
    /// Display the configured walkthrough modally over the host's
    /// content. The host drives the sequencer from its own event loop
    /// and tears the presentation down on [`Effect::Dismiss`].
    ///
    /// [`Effect::Dismiss`]: crate::sequencer::Effect::Dismiss
    fn present_overlay(&mut self, sequencer: Sequencer);

    /// Start a walkthrough over `highlights`. An empty list is a
    /// silent no-op: nothing is presented and no callback fires.
    fn highlight(&mut self, highlights: Vec<Highlight>, background: Option<BackgroundOptions>) {
        if highlights.is_empty() {
            return;
        }
        self.present_overlay(Sequencer::new(highlights, background.unwrap_or_default()));
    }
}
