//! Pointer-driven drag and resize for a single widget
//!
//! Each widget on the canvas gets its own [`InteractionController`]. The
//! controller only turns pointer positions into clamped geometry; the store
//! mutations it needs arrive through [`WidgetActions`].

use super::store::WidgetActions;
use crate::data::{
    CanvasSize, Point, Position, Size, WidgetFrame, WidgetId, MIN_WIDGET_HEIGHT, MIN_WIDGET_WIDTH,
};

/// Which part of the widget the pointer went down on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrabTarget {
    Body,
    ResizeHandle,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionMode {
    Idle,
    /// `anchor` is the pointer offset from the widget's top-left corner
    Dragging { anchor: Point },
    /// `anchor` is where the pointer went down
    Resizing { anchor: Point, start_size: Size },
}

/// `value.min(upper).max(lower)`: an inverted range yields `lower`
pub fn saturating_clamp(value: i64, lower: i64, upper: i64) -> i64 {
    value.min(upper).max(lower)
}

/// Keep a dragged widget entirely on the canvas where possible
pub fn clamp_drag(candidate: Point, size: Size, canvas: CanvasSize) -> Position {
    let max_x = i64::from(canvas.width) - i64::from(size.width);
    let max_y = i64::from(canvas.height) - i64::from(size.height);
    Position {
        x: to_u32(saturating_clamp(i64::from(candidate.x), 0, max_x)),
        y: to_u32(saturating_clamp(i64::from(candidate.y), 0, max_y)),
    }
}

/// Grow or shrink from `start` by `delta`, between the minimum size and the
/// canvas edge
pub fn clamp_resize(start: Size, delta: (i64, i64), position: Position, canvas: CanvasSize) -> Size {
    let max_width = i64::from(canvas.width) - i64::from(position.x);
    let max_height = i64::from(canvas.height) - i64::from(position.y);
    Size {
        width: to_u32(saturating_clamp(
            i64::from(start.width) + delta.0,
            i64::from(MIN_WIDGET_WIDTH),
            max_width,
        )),
        height: to_u32(saturating_clamp(
            i64::from(start.height) + delta.1,
            i64::from(MIN_WIDGET_HEIGHT),
            max_height,
        )),
    }
}

// Clamp results are never negative; the upper bound only guards overflow
fn to_u32(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

#[derive(Clone, Debug)]
pub struct InteractionController {
    widget_id: WidgetId,
    mode: InteractionMode,
}

impl InteractionController {
    pub fn new(widget_id: WidgetId) -> Self {
        Self {
            widget_id,
            mode: InteractionMode::Idle,
        }
    }

    pub fn widget_id(&self) -> &WidgetId {
        &self.widget_id
    }

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn is_idle(&self) -> bool {
        self.mode == InteractionMode::Idle
    }

    /// Start a drag or resize; ignored unless idle
    pub fn pointer_down(
        &mut self,
        target: GrabTarget,
        point: Point,
        frame: WidgetFrame,
        actions: &mut dyn WidgetActions,
    ) {
        if !self.is_idle() {
            return;
        }

        self.mode = match target {
            GrabTarget::Body => InteractionMode::Dragging {
                anchor: Point::new(
                    point.x.saturating_sub(to_i32(frame.position.x)),
                    point.y.saturating_sub(to_i32(frame.position.y)),
                ),
            },
            GrabTarget::ResizeHandle => InteractionMode::Resizing {
                anchor: point,
                start_size: frame.size,
            },
        };
        tracing::trace!("Widget {} entered {:?}", self.widget_id, self.mode);
        actions.bring_to_front(&self.widget_id);
    }

    pub fn pointer_move(
        &mut self,
        point: Point,
        frame: WidgetFrame,
        canvas: CanvasSize,
        actions: &mut dyn WidgetActions,
    ) {
        match self.mode {
            InteractionMode::Idle => {}
            InteractionMode::Dragging { anchor } => {
                let candidate = Point::new(
                    point.x.saturating_sub(anchor.x),
                    point.y.saturating_sub(anchor.y),
                );
                let position = clamp_drag(candidate, frame.size, canvas);
                if position != frame.position {
                    actions.move_widget(&self.widget_id, position);
                }
            }
            InteractionMode::Resizing { anchor, start_size } => {
                let delta = (
                    i64::from(point.x) - i64::from(anchor.x),
                    i64::from(point.y) - i64::from(anchor.y),
                );
                let size = clamp_resize(start_size, delta, frame.position, canvas);
                if size != frame.size {
                    actions.resize_widget(&self.widget_id, size);
                }
            }
        }
    }

    /// Pointer released anywhere
    pub fn pointer_up(&mut self) {
        self.mode = InteractionMode::Idle;
    }
}

fn to_i32(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls and applies them to a single frame
    struct Recorder {
        frame: WidgetFrame,
        calls: Vec<String>,
    }

    impl Recorder {
        fn new(position: Position, size: Size) -> Self {
            Self {
                frame: WidgetFrame { position, size },
                calls: Vec::new(),
            }
        }
    }

    impl WidgetActions for Recorder {
        fn move_widget(&mut self, _id: &WidgetId, position: Position) -> bool {
            self.frame.position = position;
            self.calls.push(format!("move {} {}", position.x, position.y));
            true
        }

        fn resize_widget(&mut self, _id: &WidgetId, size: Size) -> bool {
            self.frame.size = size;
            self.calls.push(format!("resize {} {}", size.width, size.height));
            true
        }

        fn bring_to_front(&mut self, _id: &WidgetId) -> bool {
            self.calls.push("front".to_string());
            true
        }
    }

    const CANVAS: CanvasSize = CanvasSize {
        width: 1000,
        height: 800,
    };

    #[test]
    fn test_clamp_drag_pins_to_canvas() {
        let position = clamp_drag(Point::new(-50, 900), Size::new(400, 300), CANVAS);
        assert_eq!(position, Position::new(0, 500));
    }

    #[test]
    fn test_clamp_drag_oversized_widget_sticks_to_origin() {
        let position = clamp_drag(Point::new(300, 300), Size::new(1200, 900), CANVAS);
        assert_eq!(position, Position::new(0, 0));
    }

    #[test]
    fn test_clamp_resize_respects_minimum() {
        let size = clamp_resize(Size::new(250, 300), (-200, 0), Position::new(0, 0), CANVAS);
        assert_eq!(size, Size::new(200, 300));
    }

    #[test]
    fn test_clamp_resize_stops_at_canvas_edge() {
        let size = clamp_resize(Size::new(400, 300), (900, 900), Position::new(500, 400), CANVAS);
        assert_eq!(size, Size::new(500, 400));
    }

    #[test]
    fn test_clamp_resize_degenerate_canvas_gives_minimum() {
        let tiny = CanvasSize::new(100, 100);
        let size = clamp_resize(Size::new(400, 300), (50, 50), Position::new(0, 0), tiny);
        assert_eq!(size, Size::new(MIN_WIDGET_WIDTH, MIN_WIDGET_HEIGHT));
    }

    #[test]
    fn test_saturating_clamp_inverted_range() {
        assert_eq!(saturating_clamp(42, 10, -5), 10);
        assert_eq!(saturating_clamp(-3, 0, 10), 0);
        assert_eq!(saturating_clamp(7, 0, 10), 7);
    }

    #[test]
    fn test_drag_keeps_grab_offset() {
        let mut actions = Recorder::new(Position::new(100, 100), Size::new(400, 300));
        let mut controller = InteractionController::new(WidgetId::new("w"));

        controller.pointer_down(GrabTarget::Body, Point::new(120, 110), actions.frame, &mut actions);
        assert_eq!(
            controller.mode(),
            InteractionMode::Dragging {
                anchor: Point::new(20, 10)
            }
        );

        let frame = actions.frame;
        controller.pointer_move(Point::new(220, 160), frame, CANVAS, &mut actions);
        assert_eq!(actions.frame.position, Position::new(200, 150));
        assert_eq!(actions.calls, vec!["front", "move 200 150"]);
    }

    #[test]
    fn test_resize_from_handle() {
        let mut actions = Recorder::new(Position::new(0, 0), Size::new(400, 300));
        let mut controller = InteractionController::new(WidgetId::new("w"));

        controller.pointer_down(
            GrabTarget::ResizeHandle,
            Point::new(400, 300),
            actions.frame,
            &mut actions,
        );
        let frame = actions.frame;
        controller.pointer_move(Point::new(450, 280), frame, CANVAS, &mut actions);

        assert_eq!(actions.frame.size, Size::new(450, 280));
        assert_eq!(actions.frame.position, Position::new(0, 0));
    }

    #[test]
    fn test_second_pointer_down_is_ignored() {
        let mut actions = Recorder::new(Position::new(0, 0), Size::new(400, 300));
        let mut controller = InteractionController::new(WidgetId::new("w"));

        controller.pointer_down(GrabTarget::Body, Point::new(10, 10), actions.frame, &mut actions);
        controller.pointer_down(
            GrabTarget::ResizeHandle,
            Point::new(400, 300),
            actions.frame,
            &mut actions,
        );

        assert!(matches!(controller.mode(), InteractionMode::Dragging { .. }));
        assert_eq!(actions.calls, vec!["front"]);
    }

    #[test]
    fn test_pointer_up_returns_to_idle() {
        let mut actions = Recorder::new(Position::new(0, 0), Size::new(400, 300));
        let mut controller = InteractionController::new(WidgetId::new("w"));

        controller.pointer_down(
            GrabTarget::ResizeHandle,
            Point::new(400, 300),
            actions.frame,
            &mut actions,
        );
        controller.pointer_up();
        assert!(controller.is_idle());

        let frame = actions.frame;
        controller.pointer_move(Point::new(600, 500), frame, CANVAS, &mut actions);
        assert_eq!(actions.frame.size, Size::new(400, 300));
    }
}
