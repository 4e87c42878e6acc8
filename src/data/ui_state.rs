//! UI State - input mode, transient panels and pointer routing
//!
//! This module contains UI state that is independent of rendering.
//! Frontends translate raw mouse input into [`PointerEvent`]s and read the
//! rest of this state to decide what to draw.

use super::widget::{Point, WidgetId};
use std::collections::HashSet;

/// Application UI state
#[derive(Clone, Debug)]
pub struct UiState {
    /// Current input mode
    pub input_mode: InputMode,

    /// Widgets whose settings panel is open
    pub open_settings: HashSet<WidgetId>,

    /// Path being typed at the import prompt
    pub import_input: String,

    /// Last known mouse cell, for hover tooltips
    pub hover: Option<(u16, u16)>,

    /// Status bar text
    pub status_text: String,
}

/// Input mode for the application
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputMode {
    /// Canvas interaction and toolbar shortcuts
    Normal,
    /// Add-widget modal is open
    AddWidget,
    /// Typing a file path to import
    ImportPrompt,
    /// Keystrokes edit the title of this widget
    EditTitle(WidgetId),
}

/// Toolbar actions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolbarButton {
    AddWidget,
    Export,
    Import,
    ToggleTheme,
}

/// What lies under the pointer
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HitTarget {
    Toolbar(ToolbarButton),
    WidgetBody(WidgetId),
    ResizeHandle(WidgetId),
    CloseButton(WidgetId),
    SettingsButton(WidgetId),
    TitleField(WidgetId),
    ColorSwatch(WidgetId, usize),
    /// Empty canvas
    Canvas,
    /// Anywhere else (footer, beyond the canvas)
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// Mouse input after hit testing and cell-to-pixel mapping
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub target: HitTarget,
    /// Pointer in canvas pixels
    pub point: Point,
    /// Pointer in terminal cells
    pub cell: (u16, u16),
}

impl UiState {
    pub fn new() -> Self {
        Self {
            input_mode: InputMode::Normal,
            open_settings: HashSet::new(),
            import_input: String::new(),
            hover: None,
            status_text: String::from("Ready"),
        }
    }

    pub fn settings_open(&self, id: &WidgetId) -> bool {
        self.open_settings.contains(id)
    }

    /// Widget whose title currently receives keystrokes
    pub fn editing_title(&self) -> Option<&WidgetId> {
        match &self.input_mode {
            InputMode::EditTitle(id) => Some(id),
            _ => None,
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
