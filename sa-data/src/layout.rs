//! Chart container sizing.

/// Smallest height a chart can be dragged to, in pixels.
pub const MIN_CHART_HEIGHT: f64 = 200.0;
/// Largest height a chart can be dragged to, in pixels.
pub const MAX_CHART_HEIGHT: f64 = 800.0;
/// Initial chart height.
pub const DEFAULT_CHART_HEIGHT: f64 = 300.0;

/// An in-progress drag of a chart's resize handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeDrag {
    start_y: f64,
    start_height: f64,
}

impl ResizeDrag {
    pub fn new(start_y: f64, start_height: f64) -> Self {
        Self {
            start_y,
            start_height,
        }
    }

    /// Height for the pointer at `y`, or `None` when it would leave the
    /// allowed range (the container then keeps its last height).
    pub fn height_at(&self, y: f64) -> Option<f64> {
        let height = self.start_height + (y - self.start_y);
        (MIN_CHART_HEIGHT..=MAX_CHART_HEIGHT)
            .contains(&height)
            .then_some(height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_follows_pointer() {
        let drag = ResizeDrag::new(100.0, 300.0);
        assert_eq!(drag.height_at(150.0), Some(350.0));
        assert_eq!(drag.height_at(0.0), Some(200.0));
    }

    #[test]
    fn drag_outside_bounds_is_ignored() {
        let drag = ResizeDrag::new(100.0, 300.0);
        assert_eq!(drag.height_at(-1.0), None);
        assert_eq!(drag.height_at(601.0), None);
        assert_eq!(drag.height_at(600.0), Some(800.0));
    }
}
