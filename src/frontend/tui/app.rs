use super::add_widget_modal::{AddWidgetModal, ModalResult};
use super::viewport::Viewport;
use super::widget_card::{self, CardContext, CardLayout};
use super::{chart, header, welcome};
use crate::config::Config;
use crate::core::{AppCore, InputResult};
use crate::data::{HitTarget, InputMode, PointerEvent, PointerKind};
use crate::frontend::{Frontend, FrontendEvent};
use crate::theme::AppTheme;
use crate::widgets::tooltip_text;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture, KeyEvent},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
    Terminal,
};
use std::io;
use std::time::Duration;

const KEY_HINTS: &str = " a:Add  e:Export  i:Import  t:Theme  q:Quit ";

/// TUI Frontend using ratatui
///
/// Draws the dashboard onto the terminal and maps mouse cells to canvas
/// pixels through a [`Viewport`]. Owns the add-widget modal, which only
/// exists on the terminal side.
pub struct TuiFrontend {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    poll_timeout: Duration,
    viewport: Viewport,
    modal: AddWidgetModal,
}

impl TuiFrontend {
    /// Create a new TUI frontend
    ///
    /// Initializes terminal in raw mode, enables mouse capture and bracketed
    /// paste, and enters alternate screen.
    pub fn new(config: &Config) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)
            .context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor()?;

        let size = terminal.size().unwrap_or_default();
        let viewport = Viewport::new(Rect::new(0, 0, size.width, size.height), config.cell_scale());

        Ok(Self {
            terminal,
            poll_timeout: Duration::from_millis(config.ui.poll_timeout_ms),
            viewport,
            modal: AddWidgetModal::new(),
        })
    }

    /// Track a terminal resize so hit testing matches the next frame
    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport.set_screen(Rect::new(0, 0, width, height));
    }

    /// Hit test a mouse cell and map it into canvas space
    pub fn pointer_event(&self, kind: PointerKind, column: u16, row: u16, core: &AppCore) -> PointerEvent {
        PointerEvent {
            kind,
            target: self.viewport.hit_test(column, row, core),
            point: self.viewport.to_canvas_point(column, row),
            cell: (column, row),
        }
    }

    /// Start a fresh add-widget form
    pub fn open_modal(&mut self) {
        self.modal.reset();
    }

    /// Route a key press to the open modal
    pub fn modal_key(&mut self, key: KeyEvent, core: &mut AppCore) -> InputResult {
        match self.modal.input(key) {
            ModalResult::Submit(form) => {
                core.submit_add_widget(&form);
                self.modal.reset();
            }
            ModalResult::Cancel => {
                core.cancel_add_widget();
                self.modal.reset();
            }
            ModalResult::Continue => {}
        }
        core.needs_render = true;
        InputResult::Handled
    }

    pub fn modal_paste(&mut self, text: &str, core: &mut AppCore) {
        self.modal.paste(text);
        core.needs_render = true;
    }
}

impl Frontend for TuiFrontend {
    fn poll_events(&mut self) -> Result<Vec<FrontendEvent>> {
        let mut events = Vec::new();

        // Block for the first event only; drain whatever else is queued
        let mut timeout = self.poll_timeout;
        while event::poll(timeout)? {
            if let Some(frontend_event) = FrontendEvent::from_crossterm(event::read()?) {
                events.push(frontend_event);
            }
            timeout = Duration::ZERO;
        }

        Ok(events)
    }

    fn render(&mut self, core: &AppCore) -> Result<()> {
        let viewport = &mut self.viewport;
        let modal = &mut self.modal;
        self.terminal.draw(|f| {
            let area = f.area();
            viewport.set_screen(area);
            draw_dashboard(f.buffer_mut(), core, viewport, modal);
        })?;
        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture,
            DisableBracketedPaste
        )?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiFrontend {
    fn drop(&mut self) {
        // Ensure terminal is restored even if cleanup() wasn't called
        let _ = self.cleanup();
    }
}

/// Paint one full frame: canvas, cards in stacking order, toolbar, status
/// line and, when open, the add-widget modal on top
pub fn draw_dashboard(buf: &mut Buffer, core: &AppCore, viewport: &Viewport, modal: &mut AddWidgetModal) {
    let colors = AppTheme::for_theme(core.store.theme());
    let screen = viewport.screen().intersection(buf.area);

    buf.set_style(screen, Style::default().bg(colors.background).fg(colors.text_primary));
    draw_board(buf, viewport.board_rect(core.store.canvas_size()), &colors);

    if core.store.widgets().is_empty() {
        welcome::render(viewport.canvas_area(), buf, &colors);
    }

    let editing = core.ui_state.editing_title();
    for widget in core.store.paint_order() {
        let Some(rect) = viewport.card_rect(widget.frame()) else {
            continue;
        };
        let ctx = CardContext {
            colors: &colors,
            settings_open: core.ui_state.settings_open(&widget.id),
            editing_title: editing == Some(&widget.id),
            active: core.controller(&widget.id).is_some_and(|c| !c.is_idle()),
        };
        widget_card::render(widget, rect, buf, &ctx);
    }

    header::render(
        viewport.header_area(),
        buf,
        core.store.theme(),
        core.store.widgets().len(),
        &colors,
    );
    draw_footer(buf, viewport.footer_area(), core, viewport, &colors);

    if core.ui_state.input_mode == InputMode::AddWidget {
        modal.render(viewport.canvas_area(), buf, &colors);
    }
}

fn draw_board(buf: &mut Buffer, board: Rect, colors: &AppTheme) {
    let dots = Style::default().fg(colors.canvas_dots);
    for y in (board.top()..board.bottom()).step_by(2) {
        for x in (board.left()..board.right()).step_by(4) {
            if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
                cell.set_symbol("·");
                cell.set_style(dots);
            }
        }
    }
}

fn draw_footer(buf: &mut Buffer, area: Rect, core: &AppCore, viewport: &Viewport, colors: &AppTheme) {
    if area.height == 0 {
        return;
    }
    let base = Style::default().bg(colors.header_background).fg(colors.text_secondary);
    buf.set_style(area, base);

    let line = if core.ui_state.input_mode == InputMode::ImportPrompt {
        Line::from(vec![
            Span::styled(" Import from: ", base.add_modifier(Modifier::BOLD)),
            Span::styled(
                format!("{}▏", core.ui_state.import_input),
                base.fg(colors.text_primary),
            ),
            Span::styled("  Enter:Load  Esc:Cancel", base.fg(colors.text_muted)),
        ])
    } else if let Some(tooltip) = hover_tooltip(core, viewport) {
        Line::from(Span::styled(format!(" {}", tooltip), base.fg(colors.text_primary)))
    } else {
        Line::from(Span::styled(format!(" {}", core.ui_state.status_text), base))
    };
    Paragraph::new(line).render(area, buf);

    if core.ui_state.input_mode == InputMode::Normal {
        let width = Span::raw(KEY_HINTS).width() as u16;
        if area.width > width * 2 {
            let hints = Rect::new(area.right() - width, area.y, width, 1);
            Paragraph::new(Span::styled(KEY_HINTS, base.fg(colors.text_muted))).render(hints, buf);
        }
    }
}

/// Tooltip for the chart point or table row under the mouse, if any
pub fn hover_tooltip(core: &AppCore, viewport: &Viewport) -> Option<String> {
    if !core.config.ui.hover_tooltips
        || core.ui_state.input_mode != InputMode::Normal
        || core.is_interacting()
    {
        return None;
    }

    let (column, row) = core.ui_state.hover?;
    let HitTarget::WidgetBody(id) = viewport.hit_test(column, row, core) else {
        return None;
    };
    let widget = core.store.widget(&id)?;
    let rect = viewport.card_rect(widget.frame())?;
    let layout = CardLayout::new(rect, core.ui_state.settings_open(&id));
    let index = chart::point_under(&widget.content, layout.content, Position::new(column, row))?;
    widget.content.points()?.get(index).map(tooltip_text)
}
