//! Popup dialog for adding a widget: title, kind and accent color.
//!
//! Mouse input is not routed here; the modal is keyboard driven and the
//! canvas underneath stays inert while it is open.

use crate::core::event_bridge::to_textarea_input;
use crate::core::AddWidgetForm;
use crate::data::{WidgetKind, ACCENT_PALETTE};
use crate::theme::{parse_hex_color, AppTheme};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget as RatatuiWidget},
};
use tui_textarea::TextArea;

const POPUP_WIDTH: u16 = 56;
const POPUP_HEIGHT: u16 = 17;
const LABEL_WIDTH: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Kind,
    Color,
}

impl Field {
    fn next(self) -> Self {
        match self {
            Self::Title => Self::Kind,
            Self::Kind => Self::Color,
            Self::Color => Self::Title,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Title => Self::Color,
            Self::Kind => Self::Title,
            Self::Color => Self::Kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalResult {
    Continue,
    Submit(AddWidgetForm),
    Cancel,
}

pub struct AddWidgetModal {
    title: TextArea<'static>,
    kind_index: usize,
    color_index: usize,
    focus: Field,
    error: Option<String>,
}

impl AddWidgetModal {
    pub fn new() -> Self {
        Self {
            title: Self::title_field(),
            kind_index: 0,
            color_index: 0,
            focus: Field::Title,
            error: None,
        }
    }

    fn title_field() -> TextArea<'static> {
        let mut title = TextArea::default();
        title.set_placeholder_text("e.g., Weekly Sales");
        title
    }

    /// Clear every field back to its initial value
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Current field values as a form
    pub fn form(&self) -> AddWidgetForm {
        AddWidgetForm {
            title: self.title.lines().join(" "),
            kind: WidgetKind::ALL[self.kind_index],
            color: ACCENT_PALETTE[self.color_index].to_string(),
        }
    }

    pub fn input(&mut self, key: KeyEvent) -> ModalResult {
        match key.code {
            KeyCode::Esc => return ModalResult::Cancel,
            KeyCode::Enter => return self.submit(),
            KeyCode::Tab => self.focus = self.focus.next(),
            KeyCode::BackTab => self.focus = self.focus.previous(),
            _ => match self.focus {
                Field::Title => {
                    self.title.input(to_textarea_input(key));
                    self.error = None;
                }
                Field::Kind => {
                    self.kind_index = step(self.kind_index, WidgetKind::ALL.len(), key.code);
                }
                Field::Color => {
                    self.color_index = step(self.color_index, ACCENT_PALETTE.len(), key.code);
                }
            },
        }
        ModalResult::Continue
    }

    /// Pasted text goes into the title when it has focus
    pub fn paste(&mut self, text: &str) {
        if self.focus != Field::Title {
            return;
        }
        let text: String = text.chars().filter(|c| !c.is_control()).collect();
        self.title.insert_str(text);
        self.error = None;
    }

    fn submit(&mut self) -> ModalResult {
        let form = self.form();
        if form.is_valid() {
            ModalResult::Submit(form)
        } else {
            self.error = Some("Title is required".to_string());
            self.focus = Field::Title;
            ModalResult::Continue
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
        let width = POPUP_WIDTH.min(area.width);
        let height = POPUP_HEIGHT.min(area.height);
        let popup = Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        );

        Clear.render(popup, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(colors.button))
            .title(Span::styled(
                " Add Widget ",
                Style::default()
                    .fg(colors.text_primary)
                    .add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(colors.card_background).fg(colors.text_primary));
        let inner = block.inner(popup);
        block.render(popup, buf);
        if inner.width <= LABEL_WIDTH || inner.height == 0 {
            return;
        }

        let x = inner.x + 1;
        let row = |offset: u16| Rect::new(x, inner.y + offset, inner.width.saturating_sub(2), 1);
        let fits = |offset: u16| offset < inner.height;

        // Title
        if fits(1) {
            self.render_label("Title:", Field::Title, row(1), buf, colors);
            let field_style = Style::default()
                .bg(colors.input_background)
                .fg(colors.text_primary);
            self.title.set_style(field_style);
            self.title.set_cursor_line_style(Style::default());
            self.title.set_placeholder_style(field_style.fg(colors.text_muted));
            self.title.set_cursor_style(if self.focus == Field::Title {
                Style::default().bg(colors.text_primary).fg(colors.input_background)
            } else {
                field_style
            });
            let field = row(1);
            let input_area = Rect::new(
                field.x + LABEL_WIDTH,
                field.y,
                field.width.saturating_sub(LABEL_WIDTH),
                1,
            );
            RatatuiWidget::render(&self.title, input_area, buf);
        }

        // Kind list
        if fits(3) {
            self.render_label("Type:", Field::Kind, row(3), buf, colors);
        }
        for (i, kind) in WidgetKind::ALL.iter().enumerate() {
            let offset = 4 + i as u16;
            if !fits(offset) {
                break;
            }
            let selected = i == self.kind_index;
            let marker = if selected { "◉ " } else { "○ " };
            let name_style = if selected {
                Style::default()
                    .fg(colors.text_primary)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text_secondary)
            };
            let mut line_style = Style::default();
            if selected && self.focus == Field::Kind {
                line_style = line_style.bg(colors.selection);
            }
            let line = Line::from(vec![
                Span::styled(marker, Style::default().fg(colors.button)),
                Span::styled(format!("{:<18}", kind.display_name()), name_style),
                Span::styled(kind.description(), Style::default().fg(colors.text_muted)),
            ]);
            Paragraph::new(line)
                .style(line_style)
                .render(row(offset), buf);
        }

        // Color swatches
        if fits(11) {
            self.render_label("Color:", Field::Color, row(11), buf, colors);
            let swatch_row = row(11);
            for (i, hex) in ACCENT_PALETTE.iter().enumerate() {
                let column = swatch_row.x + LABEL_WIDTH + i as u16 * 3;
                if column >= swatch_row.right() {
                    break;
                }
                let glyph = if i == self.color_index { "◉" } else { "●" };
                let color = parse_hex_color(hex).unwrap_or(colors.button);
                buf.set_string(column, swatch_row.y, glyph, Style::default().fg(color));
            }
        }

        if fits(13) {
            if let Some(error) = &self.error {
                Paragraph::new(Span::styled(error.as_str(), Style::default().fg(colors.status_error)))
                    .render(row(13), buf);
            }
        }
        if fits(14) {
            Paragraph::new(Span::styled(
                "Tab:Next  ←/→:Change  Enter:Add  Esc:Cancel",
                Style::default().fg(colors.text_muted),
            ))
            .render(row(14), buf);
        }
    }

    fn render_label(&self, text: &str, field: Field, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
        let style = if self.focus == field {
            Style::default().fg(colors.button).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text_secondary)
        };
        let label_area = Rect::new(area.x, area.y, LABEL_WIDTH.min(area.width), 1);
        Paragraph::new(Span::styled(text.to_string(), style)).render(label_area, buf);
    }
}

impl Default for AddWidgetModal {
    fn default() -> Self {
        Self::new()
    }
}

/// Move a selection index with arrow keys, wrapping at both ends
fn step(index: usize, len: usize, code: KeyCode) -> usize {
    match code {
        KeyCode::Right | KeyCode::Down => (index + 1) % len,
        KeyCode::Left | KeyCode::Up => (index + len - 1) % len,
        _ => index,
    }
}
