pub mod options;
pub mod scene;
pub mod types;

pub use options::{
    BackgroundOptions, CornerRadius, FontSpec, FontWeight, HighlightOptions, HorizontalAlignment,
    TextPosition, VerticalAlignment,
};
pub use scene::{BorderVisual, CaptionVisual, DimMask, OverlayScene, RoundedRect};
pub use types::{Color, Insets, Point, Rect, Size};
