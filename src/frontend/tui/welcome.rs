//! Welcome panel shown while the dashboard has no widgets. Like the toolbar,
//! its button rectangle is shared by rendering and hit testing.

use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget},
};

const PANEL_WIDTH: u16 = 48;
const PANEL_HEIGHT: u16 = 10;
const BUTTON_LABEL: &str = " + Add Your First Widget ";
/// Button row, counted from the panel's top border
const BUTTON_ROW: u16 = 7;

/// Panel centered in `area`, shrunk to fit
pub fn panel_rect(area: Rect) -> Rect {
    let width = PANEL_WIDTH.min(area.width);
    let height = PANEL_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Button rectangle; `None` when the panel is too small to show it
pub fn button_rect(area: Rect) -> Option<Rect> {
    let panel = panel_rect(area);
    let width = Span::raw(BUTTON_LABEL).width() as u16;
    if panel.height <= BUTTON_ROW + 1 || panel.width < width + 2 {
        return None;
    }
    Some(Rect::new(
        panel.x + (panel.width - width) / 2,
        panel.y + BUTTON_ROW,
        width,
        1,
    ))
}

pub fn render(area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    let panel = panel_rect(area);
    if panel.width < 3 || panel.height < 3 {
        return;
    }

    Clear.render(panel, buf);
    let block = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.track))
        .style(Style::default().bg(colors.card_background).fg(colors.text_primary));
    let inner = block.inner(panel);
    block.render(panel, buf);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("⚙", Style::default().fg(colors.button))),
        Line::from(Span::styled(
            "Welcome to your Dashboard",
            Style::default()
                .fg(colors.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Get started by adding your first widget",
            Style::default().fg(colors.text_secondary),
        )),
        Line::from(Span::styled(
            "to visualize your data",
            Style::default().fg(colors.text_secondary),
        )),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .render(inner, buf);

    if let Some(button) = button_rect(area) {
        Paragraph::new(BUTTON_LABEL)
            .style(Style::default().bg(colors.button).fg(colors.button_text))
            .render(button, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_inside_centered_panel() {
        let area = Rect::new(0, 1, 150, 42);
        let panel = panel_rect(area);
        assert_eq!(panel, Rect::new(51, 17, 48, 10));

        let button = button_rect(area).unwrap();
        assert_eq!(button.y, 24);
        assert!(button.x > panel.x && button.right() < panel.right());
    }

    #[test]
    fn test_tiny_area_has_no_button() {
        assert_eq!(button_rect(Rect::new(0, 1, 20, 5)), None);
    }
}
