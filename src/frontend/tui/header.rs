//! Toolbar row. Layout is shared by rendering and hit testing so a click
//! always lands on the button that was drawn there.

use crate::data::{Theme, ToolbarButton};
use crate::theme::AppTheme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

const TITLE: &str = " ▦ Widget Board ";

fn label(button: ToolbarButton, theme: Theme) -> String {
    match button {
        ToolbarButton::AddWidget => " + Add ".to_string(),
        ToolbarButton::Export => " Export ".to_string(),
        ToolbarButton::Import => " Import ".to_string(),
        ToolbarButton::ToggleTheme => format!(" {} ", AppTheme::toggle_icon(theme)),
    }
}

const BUTTONS: [ToolbarButton; 4] = [
    ToolbarButton::AddWidget,
    ToolbarButton::Export,
    ToolbarButton::Import,
    ToolbarButton::ToggleTheme,
];

/// Button rectangles left to right, dropping any that do not fit
pub fn button_rects(area: Rect, theme: Theme) -> Vec<(ToolbarButton, Rect)> {
    let mut x = area.x.saturating_add(Span::raw(TITLE).width() as u16 + 1);
    let mut rects = Vec::with_capacity(BUTTONS.len());
    for button in BUTTONS {
        let width = Span::raw(label(button, theme)).width() as u16;
        if x.saturating_add(width) > area.right() {
            break;
        }
        rects.push((button, Rect::new(x, area.y, width, area.height.min(1))));
        x = x.saturating_add(width + 1);
    }
    rects
}

pub fn button_at(area: Rect, theme: Theme, column: u16) -> Option<ToolbarButton> {
    button_rects(area, theme)
        .into_iter()
        .find(|(_, rect)| column >= rect.x && column < rect.right())
        .map(|(button, _)| button)
}

pub fn render(area: Rect, buf: &mut Buffer, theme: Theme, widget_count: usize, colors: &AppTheme) {
    if area.height == 0 {
        return;
    }

    let base = Style::default().bg(colors.header_background).fg(colors.header_text);
    buf.set_style(area, base);
    Paragraph::new(Line::from(Span::styled(TITLE, base.add_modifier(Modifier::BOLD))))
        .render(area, buf);

    let button_style = Style::default().bg(colors.button).fg(colors.button_text);
    let rects = button_rects(area, theme);
    for (button, rect) in &rects {
        Paragraph::new(label(*button, theme))
            .style(button_style)
            .render(*rect, buf);
    }

    let count = format!("{} widgets ", widget_count);
    let count_width = Span::raw(count.as_str()).width() as u16;
    let after_buttons = rects.last().map(|(_, r)| r.right() + 1).unwrap_or(area.x);
    if area.right().saturating_sub(count_width) >= after_buttons {
        let count_area = Rect::new(area.right() - count_width, area.y, count_width, 1);
        Paragraph::new(Span::styled(count, base.fg(colors.text_muted))).render(count_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_follow_title() {
        let rects = button_rects(Rect::new(0, 0, 100, 1), Theme::Light);
        assert_eq!(rects.len(), 4);
        assert_eq!(rects[0].0, ToolbarButton::AddWidget);
        assert_eq!(rects[0].1.x, 17);
        assert_eq!(rects[1].1.x, rects[0].1.right() + 1);
    }

    #[test]
    fn test_button_at_matches_layout() {
        let area = Rect::new(0, 0, 100, 1);
        for (button, rect) in button_rects(area, Theme::Dark) {
            assert_eq!(button_at(area, Theme::Dark, rect.x), Some(button));
            assert_eq!(button_at(area, Theme::Dark, rect.right() - 1), Some(button));
        }
        assert_eq!(button_at(area, Theme::Dark, 2), None);
    }

    #[test]
    fn test_narrow_header_drops_buttons() {
        let rects = button_rects(Rect::new(0, 0, 30, 1), Theme::Light);
        assert_eq!(rects.len(), 1);
    }
}
