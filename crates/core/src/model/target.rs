use limelight_protocol::Rect;

use super::HighlightError;

/// Read-only window onto the host's view tree.
///
/// The core never owns or mutates host views; it only needs to walk the
/// ancestor chain once, at highlight construction time, to turn a local
/// frame into window coordinates.
pub trait HostView {
    /// This view's frame in its parent's coordinate space. For a root
    /// view the frame is already in window coordinates.
    fn frame(&self) -> Rect;

    /// The parent view, or `None` for a root or a detached view.
    fn parent(&self) -> Option<&dyn HostView>;
}

/// Resolve `view`'s frame to window coordinates by accumulating the
/// origins of every ancestor. A view with no parent has no attachment
/// point and fails with [`HighlightError::DetachedTarget`].
pub fn frame_in_window(view: &dyn HostView) -> Result<Rect, HighlightError> {
    let mut ancestor = view.parent().ok_or(HighlightError::DetachedTarget)?;
    let mut frame = view.frame();
    loop {
        let origin = ancestor.frame().origin();
        frame = frame.translate(origin.x, origin.y);
        match ancestor.parent() {
            Some(next) => ancestor = next,
            None => break,
        }
    }
    Ok(frame)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StubView {
        frame: Rect,
        parent: Option<Box<StubView>>,
    }

    impl HostView for StubView {
        fn frame(&self) -> Rect {
            self.frame
        }

        fn parent(&self) -> Option<&dyn HostView> {
            self.parent.as_deref().map(|p| p as &dyn HostView)
        }
    }

    #[test]
    fn detached_view_has_no_window_frame() {
        let view = StubView {
            frame: Rect::new(5.0, 5.0, 10.0, 10.0),
            parent: None,
        };
        assert_eq!(
            frame_in_window(&view),
            Err(HighlightError::DetachedTarget)
        );
    }

    #[test]
    fn nested_origins_accumulate() {
        let root = StubView {
            frame: Rect::new(0.0, 20.0, 320.0, 480.0),
            parent: None,
        };
        let panel = StubView {
            frame: Rect::new(10.0, 40.0, 300.0, 200.0),
            parent: Some(Box::new(root)),
        };
        let button = StubView {
            frame: Rect::new(8.0, 16.0, 44.0, 44.0),
            parent: Some(Box::new(panel)),
        };
        let resolved = frame_in_window(&button).unwrap_or_default();
        assert_eq!(resolved, Rect::new(18.0, 76.0, 44.0, 44.0));
    }

    #[test]
    fn direct_child_of_root() {
        let root = StubView {
            frame: Rect::new(0.0, 0.0, 800.0, 600.0),
            parent: None,
        };
        let child = StubView {
            frame: Rect::new(100.0, 50.0, 60.0, 30.0),
            parent: Some(Box::new(root)),
        };
        let resolved = frame_in_window(&child).unwrap_or_default();
        assert_eq!(resolved, Rect::new(100.0, 50.0, 60.0, 30.0));
    }
}
