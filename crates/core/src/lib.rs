pub mod highlightable;
pub mod measure;
pub mod model;
pub mod overlay;
pub mod sequencer;
pub mod svg;

pub use highlightable::Highlightable;
pub use measure::{HeuristicMeasurer, TextMeasurer};
pub use model::{Highlight, HighlightError, HostView};
pub use sequencer::{Effect, GesturePhase, Sequencer, SequencerState};
