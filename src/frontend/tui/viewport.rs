//! Mapping between terminal cells and canvas pixels.
//!
//! Row 0 holds the toolbar and the last row the status line; the canvas
//! fills everything between, with its origin at the top-left cell below the
//! toolbar. Each cell covers a fixed number of canvas pixels.

use super::{header, welcome};
use super::widget_card::CardLayout;
use crate::core::AppCore;
use crate::data::{CanvasSize, HitTarget, Point, ToolbarButton, UiState, Widget, WidgetFrame};
use ratatui::layout::{Position as CellPosition, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    screen: Rect,
    cell_width: u32,
    cell_height: u32,
}

impl Viewport {
    /// `scale` is canvas pixels per cell, each axis at least 1
    pub fn new(screen: Rect, scale: (u32, u32)) -> Self {
        Self {
            screen,
            cell_width: scale.0.max(1),
            cell_height: scale.1.max(1),
        }
    }

    pub fn set_screen(&mut self, screen: Rect) {
        self.screen = screen;
    }

    pub fn screen(&self) -> Rect {
        self.screen
    }

    pub fn header_area(&self) -> Rect {
        Rect::new(self.screen.x, self.screen.y, self.screen.width, self.screen.height.min(1))
    }

    pub fn footer_area(&self) -> Rect {
        if self.screen.height < 2 {
            return Rect::new(self.screen.x, self.screen.bottom(), self.screen.width, 0);
        }
        Rect::new(self.screen.x, self.screen.bottom() - 1, self.screen.width, 1)
    }

    /// Cells available to the canvas
    pub fn canvas_area(&self) -> Rect {
        Rect::new(
            self.screen.x,
            self.screen.y.saturating_add(1),
            self.screen.width,
            self.screen.height.saturating_sub(2),
        )
    }

    /// The board itself: canvas bounds in cells, clipped to the screen
    pub fn board_rect(&self, canvas: CanvasSize) -> Rect {
        let area = self.canvas_area();
        let width = cells(u64::from(canvas.width), self.cell_width);
        let height = cells(u64::from(canvas.height), self.cell_height);
        Rect::new(area.x, area.y, width.min(area.width), height.min(area.height))
    }

    /// Cell to canvas pixel; cells left of or above the origin go negative
    pub fn to_canvas_point(&self, column: u16, row: u16) -> Point {
        let area = self.canvas_area();
        let x = (i64::from(column) - i64::from(area.x)) * i64::from(self.cell_width);
        let y = (i64::from(row) - i64::from(area.y)) * i64::from(self.cell_height);
        Point::new(to_i32(x), to_i32(y))
    }

    /// Screen rectangle of a widget, clipped to the canvas area; `None` when
    /// nothing of it is visible
    pub fn card_rect(&self, frame: WidgetFrame) -> Option<Rect> {
        let area = self.canvas_area();
        let left = u64::from(frame.position.x) / u64::from(self.cell_width);
        let top = u64::from(frame.position.y) / u64::from(self.cell_height);
        let right = (u64::from(frame.position.x) + u64::from(frame.size.width))
            / u64::from(self.cell_width);
        let bottom = (u64::from(frame.position.y) + u64::from(frame.size.height))
            / u64::from(self.cell_height);

        let x = u64::from(area.x) + left;
        let y = u64::from(area.y) + top;
        let right_edge = (u64::from(area.x) + right.max(left + 1)).min(u64::from(area.right()));
        let bottom_edge = (u64::from(area.y) + bottom.max(top + 1)).min(u64::from(area.bottom()));
        if x >= right_edge || y >= bottom_edge {
            return None;
        }

        Some(Rect::new(
            x as u16,
            y as u16,
            (right_edge - x) as u16,
            (bottom_edge - y) as u16,
        ))
    }

    /// What lies under a cell, topmost widget first
    pub fn hit_test(&self, column: u16, row: u16, core: &AppCore) -> HitTarget {
        let cell = CellPosition::new(column, row);

        if self.header_area().contains(cell) {
            return header::button_at(self.header_area(), core.store.theme(), column)
                .map(HitTarget::Toolbar)
                .unwrap_or(HitTarget::Outside);
        }
        if !self.canvas_area().contains(cell) {
            return HitTarget::Outside;
        }

        if core.store.widgets().is_empty()
            && welcome::button_rect(self.canvas_area()).is_some_and(|b| b.contains(cell))
        {
            return HitTarget::Toolbar(ToolbarButton::AddWidget);
        }

        let widgets = core.store.paint_order();
        if let Some(target) = self.hit_widget(cell, widgets.iter().rev().copied(), &core.ui_state) {
            return target;
        }

        if self.board_rect(core.store.canvas_size()).contains(cell) {
            HitTarget::Canvas
        } else {
            HitTarget::Outside
        }
    }

    fn hit_widget<'a>(
        &self,
        cell: CellPosition,
        top_first: impl Iterator<Item = &'a Widget>,
        ui_state: &UiState,
    ) -> Option<HitTarget> {
        for widget in top_first {
            let Some(rect) = self.card_rect(widget.frame()) else {
                continue;
            };
            if rect.contains(cell) {
                let layout = CardLayout::new(rect, ui_state.settings_open(&widget.id));
                return Some(layout.target_at(cell, &widget.id));
            }
        }
        None
    }
}

fn cells(px: u64, per_cell: u32) -> u16 {
    u16::try_from(px / u64::from(per_cell)).unwrap_or(u16::MAX)
}

fn to_i32(value: i64) -> i32 {
    value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::storage::MemoryStorage;
    use crate::core::transfer::FsConfigFiles;
    use crate::core::{samples, DashboardStore, WidgetActions};
    use crate::data::{Position, Size, WidgetId};

    fn viewport() -> Viewport {
        Viewport::new(Rect::new(0, 0, 150, 44), (10, 20))
    }

    fn core() -> AppCore {
        let store = DashboardStore::open(
            Box::new(MemoryStorage::new()),
            samples::default_state(CanvasSize::default()),
        );
        AppCore::new(Config::default(), store, Box::new(FsConfigFiles::new("/tmp")))
    }

    #[test]
    fn test_areas() {
        let vp = viewport();
        assert_eq!(vp.header_area(), Rect::new(0, 0, 150, 1));
        assert_eq!(vp.canvas_area(), Rect::new(0, 1, 150, 42));
        assert_eq!(vp.footer_area(), Rect::new(0, 43, 150, 1));
    }

    #[test]
    fn test_cell_aligned_round_trip() {
        let vp = viewport();
        let frame = WidgetFrame {
            position: Position::new(50, 60),
            size: Size::new(400, 300),
        };
        let rect = vp.card_rect(frame).unwrap();
        assert_eq!(rect, Rect::new(5, 4, 40, 15));
        assert_eq!(vp.to_canvas_point(rect.x, rect.y), Point::new(50, 60));
    }

    #[test]
    fn test_points_above_canvas_are_negative() {
        let vp = viewport();
        assert_eq!(vp.to_canvas_point(0, 0), Point::new(0, -20));
    }

    #[test]
    fn test_card_clipped_to_screen() {
        let vp = viewport();
        let frame = WidgetFrame {
            position: Position::new(1300, 700),
            size: Size::new(400, 300),
        };
        let rect = vp.card_rect(frame).unwrap();
        assert_eq!(rect, Rect::new(130, 36, 20, 7));

        let hidden = WidgetFrame {
            position: Position::new(1600, 0),
            size: Size::new(400, 300),
        };
        assert_eq!(vp.card_rect(hidden), None);
    }

    #[test]
    fn test_hit_topmost_widget() {
        let mut core = core();
        let vp = viewport();
        // Widget 1 covers cells 5..45 x 3..18, widget 2 is at 50..90
        assert_eq!(
            vp.hit_test(10, 10, &core),
            HitTarget::WidgetBody(WidgetId::new("1"))
        );

        core.store.move_widget(&WidgetId::new("2"), Position::new(100, 100));
        // Widget 2 has the higher zIndex and now overlaps widget 1
        assert_eq!(
            vp.hit_test(20, 10, &core),
            HitTarget::WidgetBody(WidgetId::new("2"))
        );
    }

    #[test]
    fn test_hit_resize_handle_and_buttons() {
        let core = core();
        let vp = viewport();
        let rect = vp.card_rect(core.store.widget(&WidgetId::new("1")).unwrap().frame()).unwrap();
        let id = WidgetId::new("1");

        assert_eq!(
            vp.hit_test(rect.right() - 1, rect.bottom() - 1, &core),
            HitTarget::ResizeHandle(id.clone())
        );
        assert_eq!(
            vp.hit_test(rect.right() - 3, rect.y, &core),
            HitTarget::CloseButton(id.clone())
        );
        assert_eq!(
            vp.hit_test(rect.right() - 5, rect.y, &core),
            HitTarget::SettingsButton(id)
        );
    }

    #[test]
    fn test_welcome_button_adds_widget_when_empty() {
        let mut core = core();
        let vp = viewport();
        let button = super::welcome::button_rect(vp.canvas_area()).unwrap();
        // Not a target while widgets exist
        assert_ne!(
            vp.hit_test(button.x, button.y, &core),
            HitTarget::Toolbar(ToolbarButton::AddWidget)
        );

        for id in ["1", "2", "3", "4"] {
            core.remove_widget(&WidgetId::new(id));
        }
        assert_eq!(
            vp.hit_test(button.x, button.y, &core),
            HitTarget::Toolbar(ToolbarButton::AddWidget)
        );
        assert_eq!(vp.hit_test(button.x, button.y - 2, &core), HitTarget::Canvas);
    }

    #[test]
    fn test_hit_empty_canvas_and_beyond() {
        let core = core();
        let vp = viewport();
        assert_eq!(vp.hit_test(120, 3, &core), HitTarget::Canvas);
        assert_eq!(vp.hit_test(10, 43, &core), HitTarget::Outside);
    }
}
