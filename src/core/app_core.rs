use super::add_widget::AddWidgetForm;
use super::input_result::InputResult;
use super::interaction::{GrabTarget, InteractionController};
use super::store::{DashboardStore, WidgetActions};
use super::transfer::ConfigFiles;
use crate::config::Config;
use crate::data::{
    HitTarget, InputMode, Point, PointerEvent, PointerKind, ToolbarButton, UiState, WidgetId,
    WidgetUpdate, ACCENT_PALETTE,
};
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;
use std::path::PathBuf;

/// Core application state (frontend-agnostic)
///
/// AppCore owns the dashboard store and everything transient around it: one
/// interaction controller per widget, the input mode and the status line.
/// Frontends translate native events into key codes and [`PointerEvent`]s,
/// hand them here, then render from the resulting state.
pub struct AppCore {
    /// Application configuration
    pub config: Config,

    /// Single source of truth for widgets, theme and canvas
    pub store: DashboardStore,

    /// Export/import file access
    files: Box<dyn ConfigFiles>,

    /// Drag/resize state machines keyed by widget
    controllers: HashMap<WidgetId, InteractionController>,

    /// Input mode, open settings panels, status text
    pub ui_state: UiState,

    /// Application running flag
    pub running: bool,

    /// Set whenever something visible changed
    pub needs_render: bool,
}

impl AppCore {
    pub fn new(config: Config, store: DashboardStore, files: Box<dyn ConfigFiles>) -> Self {
        let mut core = Self {
            config,
            store,
            files,
            controllers: HashMap::new(),
            ui_state: UiState::new(),
            running: true,
            needs_render: true,
        };
        core.sync_controllers();
        core
    }

    /// Create and drop controllers so there is exactly one per widget
    pub fn sync_controllers(&mut self) {
        let state = self.store.state();
        self.controllers.retain(|id, _| state.contains(id));
        for widget in &state.widgets {
            self.controllers
                .entry(widget.id.clone())
                .or_insert_with(|| InteractionController::new(widget.id.clone()));
        }
        self.ui_state.open_settings.retain(|id| state.contains(id));
        let editing_gone = self
            .ui_state
            .editing_title()
            .is_some_and(|id| !state.contains(id));
        if editing_gone {
            self.ui_state.input_mode = InputMode::Normal;
        }
    }

    pub fn controller(&self, id: &WidgetId) -> Option<&InteractionController> {
        self.controllers.get(id)
    }

    /// True while any widget is being dragged or resized
    pub fn is_interacting(&self) -> bool {
        self.controllers.values().any(|c| !c.is_idle())
    }

    /// Apply a hit-tested pointer event
    pub fn handle_pointer(&mut self, event: PointerEvent) -> InputResult {
        // A release always ends a gesture, even behind the modal
        if event.kind == PointerKind::Up {
            self.release_grabs();
            return InputResult::Handled;
        }
        if self.ui_state.input_mode == InputMode::AddWidget {
            return InputResult::Ignored;
        }

        let result = match event.kind {
            PointerKind::Down => self.pointer_down(event.target, event.point),
            PointerKind::Move => {
                self.ui_state.hover = Some(event.cell);
                self.pointer_move(event.point);
                InputResult::Handled
            }
            PointerKind::Up => InputResult::Handled,
        };

        if result.is_handled() {
            self.needs_render = true;
        }
        result
    }

    fn release_grabs(&mut self) {
        for controller in self.controllers.values_mut() {
            if !controller.is_idle() {
                controller.pointer_up();
                self.needs_render = true;
            }
        }
    }

    fn pointer_down(&mut self, target: HitTarget, point: Point) -> InputResult {
        // Clicking anywhere but the title field ends title editing
        if !matches!(target, HitTarget::TitleField(_)) && self.ui_state.editing_title().is_some() {
            self.ui_state.input_mode = InputMode::Normal;
        }

        match target {
            HitTarget::Toolbar(button) => self.press_toolbar(button),
            HitTarget::WidgetBody(id) => self.grab(&id, GrabTarget::Body, point),
            HitTarget::ResizeHandle(id) => self.grab(&id, GrabTarget::ResizeHandle, point),
            HitTarget::CloseButton(id) => {
                self.remove_widget(&id);
                InputResult::Handled
            }
            HitTarget::SettingsButton(id) => {
                self.toggle_settings(&id);
                InputResult::Handled
            }
            HitTarget::TitleField(id) => {
                if self.store.widget(&id).is_some() {
                    self.ui_state.input_mode = InputMode::EditTitle(id);
                }
                InputResult::Handled
            }
            HitTarget::ColorSwatch(id, index) => {
                self.set_color(&id, index);
                InputResult::Handled
            }
            HitTarget::Canvas | HitTarget::Outside => InputResult::Handled,
        }
    }

    fn grab(&mut self, id: &WidgetId, target: GrabTarget, point: Point) -> InputResult {
        let Some(frame) = self.store.widget(id).map(|w| w.frame()) else {
            return InputResult::Ignored;
        };
        let controller = self
            .controllers
            .entry(id.clone())
            .or_insert_with(|| InteractionController::new(id.clone()));
        controller.pointer_down(target, point, frame, &mut self.store);
        InputResult::Handled
    }

    fn pointer_move(&mut self, point: Point) {
        let canvas = self.store.canvas_size();
        for controller in self.controllers.values_mut() {
            if controller.is_idle() {
                continue;
            }
            let Some(frame) = self.store.widget(controller.widget_id()).map(|w| w.frame()) else {
                continue;
            };
            controller.pointer_move(point, frame, canvas, &mut self.store);
        }
    }

    pub fn press_toolbar(&mut self, button: ToolbarButton) -> InputResult {
        match button {
            ToolbarButton::AddWidget => self.open_add_widget(),
            ToolbarButton::Export => {
                self.export();
                InputResult::Handled
            }
            ToolbarButton::Import => {
                self.begin_import();
                InputResult::Handled
            }
            ToolbarButton::ToggleTheme => {
                self.toggle_theme();
                InputResult::Handled
            }
        }
    }

    /// Handle a key press outside the add-widget modal
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> InputResult {
        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            return self.quit();
        }

        let result = match self.ui_state.input_mode.clone() {
            InputMode::Normal => self.handle_normal_key(code),
            InputMode::ImportPrompt => self.handle_import_key(code),
            InputMode::EditTitle(id) => self.handle_title_key(&id, code),
            InputMode::AddWidget => InputResult::Ignored,
        };

        if result.is_handled() {
            self.needs_render = true;
        }
        result
    }

    fn handle_normal_key(&mut self, code: KeyCode) -> InputResult {
        match code {
            KeyCode::Char('a') => self.press_toolbar(ToolbarButton::AddWidget),
            KeyCode::Char('e') => self.press_toolbar(ToolbarButton::Export),
            KeyCode::Char('i') => self.press_toolbar(ToolbarButton::Import),
            KeyCode::Char('t') => self.press_toolbar(ToolbarButton::ToggleTheme),
            KeyCode::Char('q') => self.quit(),
            KeyCode::Esc if !self.ui_state.open_settings.is_empty() => {
                self.ui_state.open_settings.clear();
                InputResult::Handled
            }
            _ => InputResult::Ignored,
        }
    }

    fn handle_import_key(&mut self, code: KeyCode) -> InputResult {
        match code {
            KeyCode::Char(c) => self.ui_state.import_input.push(c),
            KeyCode::Backspace => {
                self.ui_state.import_input.pop();
            }
            KeyCode::Enter => self.finish_import(),
            KeyCode::Esc => self.cancel_import(),
            _ => return InputResult::Ignored,
        }
        InputResult::Handled
    }

    fn handle_title_key(&mut self, id: &WidgetId, code: KeyCode) -> InputResult {
        let Some(mut title) = self.store.widget(id).map(|w| w.title.clone()) else {
            self.ui_state.input_mode = InputMode::Normal;
            return InputResult::Handled;
        };

        match code {
            KeyCode::Char(c) => title.push(c),
            KeyCode::Backspace => {
                title.pop();
            }
            KeyCode::Enter | KeyCode::Esc => {
                self.ui_state.input_mode = InputMode::Normal;
                return InputResult::Handled;
            }
            _ => return InputResult::Ignored,
        }

        self.store.update_widget(id, WidgetUpdate::title(title));
        InputResult::Handled
    }

    /// Bracketed paste into whichever text field has focus
    pub fn paste(&mut self, text: &str) -> InputResult {
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        match self.ui_state.input_mode.clone() {
            InputMode::ImportPrompt => self.ui_state.import_input.push_str(&text),
            InputMode::EditTitle(id) => {
                let Some(title) = self.store.widget(&id).map(|w| format!("{}{}", w.title, text))
                else {
                    return InputResult::Ignored;
                };
                self.store.update_widget(&id, WidgetUpdate::title(title));
            }
            InputMode::Normal | InputMode::AddWidget => return InputResult::Ignored,
        }
        self.needs_render = true;
        InputResult::Handled
    }

    pub fn quit(&mut self) -> InputResult {
        tracing::info!("Quit requested");
        self.running = false;
        InputResult::Quit
    }

    pub fn open_add_widget(&mut self) -> InputResult {
        self.release_grabs();
        self.ui_state.input_mode = InputMode::AddWidget;
        self.needs_render = true;
        InputResult::OpenAddWidget
    }

    /// Add the widget described by `form`; `None` when the form is invalid
    pub fn submit_add_widget(&mut self, form: &AddWidgetForm) -> Option<WidgetId> {
        let new_widget = form.build()?;
        let title = new_widget.title.clone();
        let id = self.store.add_widget(new_widget);
        self.sync_controllers();
        self.ui_state.input_mode = InputMode::Normal;
        self.set_status(format!("Added '{}'", title));
        Some(id)
    }

    pub fn cancel_add_widget(&mut self) {
        self.ui_state.input_mode = InputMode::Normal;
        self.needs_render = true;
    }

    /// Export the dashboard; returns the written path
    pub fn export(&mut self) -> Option<PathBuf> {
        match self.store.export_config(self.files.as_mut()) {
            Ok(path) => {
                self.set_status(format!("Exported to {}", path.display()));
                Some(path)
            }
            Err(e) => {
                tracing::error!(error = ?e, "Export failed");
                self.set_status("Export failed (see log)".to_string());
                None
            }
        }
    }

    pub fn begin_import(&mut self) {
        self.ui_state.input_mode = InputMode::ImportPrompt;
        self.ui_state.import_input.clear();
        self.needs_render = true;
    }

    pub fn cancel_import(&mut self) {
        self.ui_state.input_mode = InputMode::Normal;
        self.ui_state.import_input.clear();
        self.needs_render = true;
    }

    /// Read the typed path and replace the dashboard with its contents.
    ///
    /// Read and parse failures are logged only; the dashboard stays as is.
    pub fn finish_import(&mut self) {
        let path = PathBuf::from(self.ui_state.import_input.trim());
        self.cancel_import();
        if path.as_os_str().is_empty() {
            return;
        }

        let text = match self.files.read_import(&path) {
            Ok(text) => text,
            Err(e) => {
                tracing::error!(error = ?e, "Import failed");
                return;
            }
        };

        // Errors are already logged by the store
        if let Ok(count) = self.store.import_config(&text) {
            for controller in self.controllers.values_mut() {
                controller.pointer_up();
            }
            self.sync_controllers();
            self.set_status(format!("Imported {} widgets", count));
        }
    }

    pub fn toggle_theme(&mut self) {
        let theme = self.store.toggle_theme();
        tracing::debug!("Theme switched to {}", theme.as_str());
        self.needs_render = true;
    }

    pub fn remove_widget(&mut self, id: &WidgetId) -> bool {
        let removed = self.store.remove_widget(id);
        if removed {
            self.sync_controllers();
            self.needs_render = true;
        }
        removed
    }

    /// Open or close the settings panel of one widget
    pub fn toggle_settings(&mut self, id: &WidgetId) {
        if !self.store.state().contains(id) {
            return;
        }
        if !self.ui_state.open_settings.remove(id) {
            self.ui_state.open_settings.insert(id.clone());
        } else if self.ui_state.editing_title() == Some(id) {
            self.ui_state.input_mode = InputMode::Normal;
        }
        self.needs_render = true;
    }

    /// Apply palette entry `index` to a widget
    pub fn set_color(&mut self, id: &WidgetId, index: usize) -> bool {
        let Some(color) = ACCENT_PALETTE.get(index) else {
            return false;
        };
        self.store.update_widget(id, WidgetUpdate::color(*color))
    }

    fn set_status(&mut self, text: String) {
        self.ui_state.status_text = text;
        self.needs_render = true;
    }
}
