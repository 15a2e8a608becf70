use limelight_protocol::{HighlightOptions, Rect};
use serde::{Deserialize, Serialize};

use super::{HighlightError, HostView, frame_in_window};

/// One step of a walkthrough: a target region in window coordinates,
/// the caption shown next to it, and the visual options for both.
///
/// Immutable after construction. The raw frame is captured once, before
/// insets; everything drawable is derived from it by the overlay
/// renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Highlight {
    frame_without_insets: Rect,
    text: String,
    options: HighlightOptions,
}

impl Highlight {
    /// Create a highlight from a pre-resolved frame in window
    /// coordinates. Always succeeds.
    pub fn from_frame(frame: Rect, text: impl Into<String>, options: HighlightOptions) -> Self {
        Self {
            frame_without_insets: frame,
            text: text.into(),
            options,
        }
    }

    /// Create a highlight for a live target view. Fails with
    /// [`HighlightError::DetachedTarget`] when the view is not attached
    /// to a view hierarchy, producing nothing.
    pub fn from_target(
        view: &dyn HostView,
        text: impl Into<String>,
        options: HighlightOptions,
    ) -> Result<Self, HighlightError> {
        let frame = frame_in_window(view)?;
        Ok(Self::from_frame(frame, text, options))
    }

    /// The captured target region, before insets.
    pub fn raw_frame(&self) -> Rect {
        self.frame_without_insets
    }

    /// The inset-adjusted region the overlay actually highlights.
    pub fn frame(&self) -> Rect {
        self.frame_without_insets.inset_by(self.options.insets)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }
}
