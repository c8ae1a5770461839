//! Drag-to-zoom state machine for the combined scatter view
//!
//! Idle → Selecting → Idle. Committing is a side effect of the transition
//! back to Idle, not a distinct state. The minimum-span thresholds tell an
//! intentional drag apart from a click, since clicks dismiss points in the
//! same view.

/// Minimum x span (currency units) for a drag to commit as a zoom
pub const MIN_X_SPAN: f64 = 0.1;
/// Minimum y span (percentage points) for a drag to commit as a zoom
pub const MIN_Y_SPAN: f64 = 1.0;

/// Committed axis-domain override for the scatter view. `None` means "use
/// the default domain computed from the current view data".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ZoomState {
    pub x: Option<(f64, f64)>,
    pub y: Option<(f64, f64)>,
}

impl ZoomState {
    /// Whether any axis is overridden; gates the Reset Zoom control
    pub fn is_zoomed(&self) -> bool {
        self.x.is_some() || self.y.is_some()
    }

    /// Clear both domains back to auto-ranging
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The effective x domain
    pub fn x_domain_or(&self, default: (f64, f64)) -> (f64, f64) {
        self.x.unwrap_or(default)
    }

    /// The effective y domain
    pub fn y_domain_or(&self, default: (f64, f64)) -> (f64, f64) {
        self.y.unwrap_or(default)
    }
}

/// In-progress drag rectangle in data-space coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SelectionRect {
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
}

impl SelectionRect {
    /// All four corners, once the gesture has both an anchor and a current point
    pub fn corners(&self) -> Option<(f64, f64, f64, f64)> {
        match (self.x1, self.y1, self.x2, self.y2) {
            (Some(x1), Some(y1), Some(x2), Some(y2)) => Some((x1, y1, x2, y2)),
            _ => None,
        }
    }
}

/// The gesture state machine
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragZoom {
    rect: SelectionRect,
    selecting: bool,
}

impl DragZoom {
    /// Whether a drag is live
    pub fn is_selecting(&self) -> bool {
        self.selecting
    }

    /// The rectangle to draw while a drag is live
    pub fn active_rect(&self) -> Option<(f64, f64, f64, f64)> {
        if self.selecting {
            self.rect.corners()
        } else {
            None
        }
    }

    /// Idle → Selecting: record the anchor. Callers only invoke this with
    /// defined data-space coordinates (inside the plot area).
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        self.rect = SelectionRect {
            x1: Some(x),
            y1: Some(y),
            x2: None,
            y2: None,
        };
        self.selecting = true;
    }

    /// Selecting → Selecting: update the moving corner. No-op while idle;
    /// callers suppress moves whose coordinates are undefined.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if self.selecting {
            self.rect.x2 = Some(x);
            self.rect.y2 = Some(y);
        }
    }

    /// Selecting → Idle: commit into `zoom` when the normalized rectangle
    /// exceeds both minimum spans, otherwise discard the gesture. The
    /// rectangle is cleared unconditionally. Pointer-leave routes here too.
    pub fn pointer_up(&mut self, zoom: &mut ZoomState) {
        if self.selecting {
            if let Some((ax, ay, bx, by)) = self.rect.corners() {
                let (x1, x2) = (ax.min(bx), ax.max(bx));
                let (y1, y2) = (ay.min(by), ay.max(by));
                if x2 - x1 > MIN_X_SPAN && y2 - y1 > MIN_Y_SPAN {
                    zoom.x = Some((x1, x2));
                    zoom.y = Some((y1, y2));
                }
            }
        }
        self.rect = SelectionRect::default();
        self.selecting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn drag_commits_normalized_domains() {
        let mut drag = DragZoom::default();
        let mut zoom = ZoomState::default();

        drag.pointer_down(2.0, 10.0);
        drag.pointer_move(5.0, 50.0);
        drag.pointer_up(&mut zoom);

        assert_eq!(zoom.x, Some((2.0, 5.0)));
        assert_eq!(zoom.y, Some((10.0, 50.0)));
        assert!(zoom.is_zoomed());
        assert!(!drag.is_selecting());
    }

    #[test]
    fn reversed_drag_is_normalized() {
        let mut drag = DragZoom::default();
        let mut zoom = ZoomState::default();

        drag.pointer_down(5.0, 50.0);
        drag.pointer_move(2.0, 10.0);
        drag.pointer_up(&mut zoom);

        assert_eq!(zoom.x, Some((2.0, 5.0)));
        assert_eq!(zoom.y, Some((10.0, 50.0)));
    }

    #[test]
    fn sub_threshold_drag_is_discarded() {
        let mut drag = DragZoom::default();
        let mut zoom = ZoomState::default();

        // x span 0.05 < 0.1: rejected even though y span passes
        drag.pointer_down(1.0, 1.0);
        drag.pointer_move(1.05, 1.5);
        drag.pointer_up(&mut zoom);

        assert_eq!(zoom, ZoomState::default());
        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn y_span_threshold_is_independent() {
        let mut drag = DragZoom::default();
        let mut zoom = ZoomState::default();

        // x span passes, y span 0.5 < 1.0
        drag.pointer_down(1.0, 10.0);
        drag.pointer_move(2.0, 10.5);
        drag.pointer_up(&mut zoom);

        assert!(!zoom.is_zoomed());
    }

    #[test]
    fn click_without_move_is_discarded() {
        let mut drag = DragZoom::default();
        let mut zoom = ZoomState::default();

        drag.pointer_down(3.0, 30.0);
        drag.pointer_up(&mut zoom);

        assert!(!zoom.is_zoomed());
        assert_eq!(drag, DragZoom::default());
    }

    #[test]
    fn move_while_idle_is_ignored() {
        let mut drag = DragZoom::default();
        drag.pointer_move(4.0, 40.0);
        assert_eq!(drag, DragZoom::default());
        assert!(drag.active_rect().is_none());
    }

    #[test]
    fn rectangle_clears_unconditionally_on_release() {
        let mut drag = DragZoom::default();
        let mut zoom = ZoomState::default();

        drag.pointer_down(0.0, 0.0);
        drag.pointer_move(10.0, 90.0);
        assert!(drag.active_rect().is_some());

        drag.pointer_up(&mut zoom);
        assert!(drag.active_rect().is_none());

        // and again after a discarded gesture
        drag.pointer_down(0.0, 0.0);
        drag.pointer_up(&mut zoom);
        assert!(drag.active_rect().is_none());
        assert!(!drag.is_selecting());
    }

    #[test]
    fn anchor_alone_has_no_rect() {
        let mut drag = DragZoom::default();
        drag.pointer_down(1.0, 2.0);
        assert!(drag.is_selecting());
        assert!(drag.active_rect().is_none());

        drag.pointer_move(3.0, 4.0);
        assert_eq!(drag.active_rect(), Some((1.0, 2.0, 3.0, 4.0)));
    }

    #[test]
    fn reset_clears_committed_zoom() {
        let mut zoom = ZoomState {
            x: Some((1.0, 2.0)),
            y: Some((10.0, 20.0)),
        };
        zoom.reset();
        assert_eq!(zoom, ZoomState::default());
    }

    #[test]
    fn effective_domains_fall_back_to_defaults() {
        let zoom = ZoomState::default();
        assert_eq!(zoom.x_domain_or((0.0, 9.0)), (0.0, 9.0));

        let zoomed = ZoomState {
            x: Some((1.0, 2.0)),
            y: None,
        };
        assert_eq!(zoomed.x_domain_or((0.0, 9.0)), (1.0, 2.0));
        assert_eq!(zoomed.y_domain_or((0.0, 100.0)), (0.0, 100.0));
    }

    #[test]
    fn new_gesture_replaces_previous_commit() {
        let mut drag = DragZoom::default();
        let mut zoom = ZoomState::default();

        drag.pointer_down(0.0, 0.0);
        drag.pointer_move(4.0, 40.0);
        drag.pointer_up(&mut zoom);
        assert_eq!(zoom.x, Some((0.0, 4.0)));

        drag.pointer_down(1.0, 10.0);
        drag.pointer_move(2.0, 30.0);
        drag.pointer_up(&mut zoom);
        assert_eq!(zoom.x, Some((1.0, 2.0)));
        assert_eq!(zoom.y, Some((10.0, 30.0)));
    }
}
