//! Dashboard state - the aggregate root that gets persisted wholesale

use super::widget::{Widget, WidgetId};
use serde::{Deserialize, Serialize};

/// Light or dark color scheme
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Canvas dimensions, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 1400,
            height: 800,
        }
    }
}

/// Widgets (insertion order), theme and canvas size
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub widgets: Vec<Widget>,
    pub theme: Theme,
    pub canvas_size: CanvasSize,
}

impl DashboardState {
    pub fn new(canvas_size: CanvasSize) -> Self {
        Self {
            widgets: Vec::new(),
            theme: Theme::Light,
            canvas_size,
        }
    }

    pub fn widget(&self, id: &WidgetId) -> Option<&Widget> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    pub fn widget_mut(&mut self, id: &WidgetId) -> Option<&mut Widget> {
        self.widgets.iter_mut().find(|w| &w.id == id)
    }

    pub fn contains(&self, id: &WidgetId) -> bool {
        self.widget(id).is_some()
    }

    /// Highest stacking order, or None when there are no widgets
    pub fn max_z_index(&self) -> Option<i64> {
        self.widgets.iter().map(|w| w.z_index).max()
    }

    /// Widgets from bottom to top; equal z keeps insertion order
    pub fn paint_order(&self) -> Vec<&Widget> {
        let mut ordered: Vec<&Widget> = self.widgets.iter().collect();
        ordered.sort_by_key(|w| w.z_index);
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::widget::{Position, Size, WidgetContent};

    fn widget(id: &str, z_index: i64) -> Widget {
        Widget {
            id: WidgetId::new(id),
            title: id.to_string(),
            position: Position::default(),
            size: Size::new(400, 300),
            color: "#3B82F6".to_string(),
            z_index,
            config: None,
            content: WidgetContent::Table(Vec::new()),
        }
    }

    #[test]
    fn test_paint_order_is_stable_for_ties() {
        let state = DashboardState {
            widgets: vec![widget("a", 2), widget("b", 1), widget("c", 2)],
            ..DashboardState::default()
        };

        let order: Vec<&str> = state.paint_order().iter().map(|w| w.id.as_str()).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_max_z_index() {
        let mut state = DashboardState::default();
        assert_eq!(state.max_z_index(), None);
        state.widgets.push(widget("a", -4));
        assert_eq!(state.max_z_index(), Some(-4));
    }

    #[test]
    fn test_theme_wire_format() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }

    #[test]
    fn test_state_uses_camel_case_keys() {
        let value = serde_json::to_value(DashboardState::default()).unwrap();
        assert_eq!(value["canvasSize"]["width"], 1400);
        assert_eq!(value["theme"], "light");
    }
}
