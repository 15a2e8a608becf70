pub mod highlight;
pub mod target;

pub use highlight::Highlight;
pub use target::{HostView, frame_in_window};

use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum HighlightError {
    /// The target view has no ancestor chain, so its absolute frame
    /// cannot be resolved. Retry once the view is attached.
    #[error("target view is not attached to a view hierarchy")]
    DetachedTarget,
}
