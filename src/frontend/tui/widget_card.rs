//! Widget card: bordered chrome, settings panel and content dispatch.
//!
//! [`CardLayout`] is the single description of where the chrome controls sit
//! inside a card; both drawing and hit testing read it.

use super::{chart, metrics, progress, table};
use crate::data::{HitTarget, Widget, WidgetContent, WidgetId, ACCENT_PALETTE};
use crate::theme::{accent_color, parse_hex_color, AppTheme};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget as RatatuiWidget},
};

/// Columns taken by the `Color: ` label before the first swatch
const SWATCH_OFFSET: u16 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardLayout {
    pub rect: Rect,
    pub close: Option<Position>,
    pub settings: Option<Position>,
    pub handle: Position,
    pub title_field: Option<Rect>,
    pub swatches: Vec<Position>,
    pub content: Rect,
}

impl CardLayout {
    pub fn new(rect: Rect, settings_open: bool) -> Self {
        let inner = Rect::new(
            rect.x.saturating_add(1),
            rect.y.saturating_add(1),
            rect.width.saturating_sub(2),
            rect.height.saturating_sub(2),
        );
        let buttons_fit = rect.width >= 8;

        let mut layout = Self {
            rect,
            close: buttons_fit.then(|| Position::new(rect.right() - 3, rect.y)),
            settings: buttons_fit.then(|| Position::new(rect.right() - 5, rect.y)),
            handle: Position::new(
                rect.right().saturating_sub(1),
                rect.bottom().saturating_sub(1),
            ),
            title_field: None,
            swatches: Vec::new(),
            content: inner,
        };

        if settings_open && inner.height >= 2 && inner.width > 0 {
            layout.title_field = Some(Rect::new(inner.x, inner.y, inner.width, 1));
            layout.swatches = (0..ACCENT_PALETTE.len() as u16)
                .map(|i| Position::new(inner.x + SWATCH_OFFSET + i * 2, inner.y + 1))
                .filter(|p| p.x < inner.right())
                .collect();
            layout.content = Rect::new(
                inner.x,
                inner.y + 3.min(inner.height),
                inner.width,
                inner.height.saturating_sub(3),
            );
        }

        layout
    }

    /// Control under `cell`, which must lie inside the card
    pub fn target_at(&self, cell: Position, id: &WidgetId) -> HitTarget {
        if cell == self.handle {
            return HitTarget::ResizeHandle(id.clone());
        }
        if Some(cell) == self.close {
            return HitTarget::CloseButton(id.clone());
        }
        if Some(cell) == self.settings {
            return HitTarget::SettingsButton(id.clone());
        }
        if self.title_field.is_some_and(|field| field.contains(cell)) {
            return HitTarget::TitleField(id.clone());
        }
        if let Some(index) = self.swatches.iter().position(|p| *p == cell) {
            return HitTarget::ColorSwatch(id.clone(), index);
        }
        HitTarget::WidgetBody(id.clone())
    }
}

/// Per-card render inputs beyond the widget itself
pub struct CardContext<'a> {
    pub colors: &'a AppTheme,
    pub settings_open: bool,
    pub editing_title: bool,
    pub active: bool,
}

pub fn render(widget: &Widget, rect: Rect, buf: &mut Buffer, ctx: &CardContext) {
    if rect.width < 2 || rect.height < 2 {
        return;
    }

    let layout = CardLayout::new(rect, ctx.settings_open);
    let accent = accent_color(&widget.color, ctx.colors);
    let base = Style::default()
        .bg(ctx.colors.card_background)
        .fg(ctx.colors.text_primary);

    Clear.render(rect, buf);
    let border_type = if ctx.active {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };
    Block::bordered()
        .border_type(border_type)
        .border_style(Style::default().fg(accent))
        .title(Line::from(Span::styled(
            format!(" {} ", widget.title),
            Style::default()
                .fg(ctx.colors.card_title)
                .add_modifier(Modifier::BOLD),
        )))
        .style(base)
        .render(rect, buf);

    if let Some(settings) = layout.settings {
        put(buf, settings, "⚙", Style::default().fg(ctx.colors.text_secondary));
    }
    if let Some(close) = layout.close {
        put(buf, close, "✕", Style::default().fg(ctx.colors.status_error));
    }
    put(buf, layout.handle, "◢", Style::default().fg(accent));

    if ctx.settings_open {
        render_settings(widget, &layout, buf, ctx);
    }

    let content = layout.content;
    if content.width == 0 || content.height == 0 {
        return;
    }
    match &widget.content {
        WidgetContent::LineChart(points) => chart::render_line(points, accent, content, buf, ctx.colors),
        WidgetContent::BarChart(points) => chart::render_bar(points, accent, content, buf, ctx.colors),
        WidgetContent::PieChart(points) => chart::render_pie(points, content, buf, ctx.colors),
        WidgetContent::Metrics(data) => metrics::render(data, content, buf, ctx.colors),
        WidgetContent::Progress(data) => progress::render(data, accent, content, buf, ctx.colors),
        WidgetContent::Table(points) => table::render(points, accent, content, buf, ctx.colors),
    }
}

fn render_settings(widget: &Widget, layout: &CardLayout, buf: &mut Buffer, ctx: &CardContext) {
    let Some(field) = layout.title_field else {
        return;
    };

    let label = Style::default().fg(ctx.colors.text_secondary);
    let input = Style::default()
        .bg(ctx.colors.input_background)
        .fg(ctx.colors.text_primary);
    let mut spans = vec![
        Span::styled("Title: ", label),
        Span::styled(widget.title.clone(), input),
    ];
    if ctx.editing_title {
        spans.push(Span::styled("▏", input.add_modifier(Modifier::SLOW_BLINK)));
    }
    Paragraph::new(Line::from(spans)).render(field, buf);

    let swatch_row = Rect::new(field.x, field.y + 1, field.width, 1);
    Paragraph::new(Span::styled("Color:", label)).render(swatch_row, buf);
    for (position, hex) in layout.swatches.iter().zip(ACCENT_PALETTE) {
        let glyph = if widget.color.eq_ignore_ascii_case(hex) {
            "◉"
        } else {
            "●"
        };
        let color = parse_hex_color(hex).unwrap_or(ctx.colors.button);
        put(buf, *position, glyph, Style::default().fg(color));
    }

    if field.height > 0 && layout.content.y > field.y + 2 {
        let separator = Rect::new(field.x, field.y + 2, field.width, 1);
        Paragraph::new("─".repeat(usize::from(field.width)))
            .style(Style::default().fg(ctx.colors.track))
            .render(separator, buf);
    }
}

fn put(buf: &mut Buffer, position: Position, symbol: &str, style: Style) {
    if let Some(cell) = buf.cell_mut(position) {
        cell.set_symbol(symbol);
        cell.set_style(style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::samples;

    #[test]
    fn test_layout_controls() {
        let layout = CardLayout::new(Rect::new(5, 3, 40, 15), false);
        assert_eq!(layout.close, Some(Position::new(42, 3)));
        assert_eq!(layout.settings, Some(Position::new(40, 3)));
        assert_eq!(layout.handle, Position::new(44, 17));
        assert_eq!(layout.content, Rect::new(6, 4, 38, 13));
        assert!(layout.swatches.is_empty());
    }

    #[test]
    fn test_settings_panel_targets() {
        let layout = CardLayout::new(Rect::new(5, 3, 40, 15), true);
        let id = WidgetId::new("w");

        assert_eq!(layout.target_at(Position::new(20, 4), &id), HitTarget::TitleField(id.clone()));
        assert_eq!(
            layout.target_at(Position::new(6 + 7 + 4, 5), &id),
            HitTarget::ColorSwatch(id.clone(), 2)
        );
        assert_eq!(layout.target_at(Position::new(6 + 8, 5), &id), HitTarget::WidgetBody(id));
        assert_eq!(layout.content.y, 7);
    }

    #[test]
    fn test_tiny_card_has_no_buttons() {
        let layout = CardLayout::new(Rect::new(0, 0, 6, 3), true);
        assert_eq!(layout.close, None);
        assert_eq!(layout.title_field, None);
    }

    #[test]
    fn test_render_draws_title_and_handle() {
        let widget = samples::default_widgets().remove(0);
        let area = Rect::new(0, 0, 40, 15);
        let mut buf = Buffer::empty(area);
        let colors = AppTheme::light();
        let ctx = CardContext {
            colors: &colors,
            settings_open: true,
            editing_title: true,
            active: false,
        };

        render(&widget, area, &mut buf, &ctx);

        let top: String = (0..40).map(|x| buf[(x, 0)].symbol().to_string()).collect();
        assert!(top.contains("Revenue Overview"));
        assert_eq!(buf[(39, 14)].symbol(), "◢");
        assert_eq!(buf[(37, 0)].symbol(), "✕");
        // Widget 1 uses the first palette color
        assert_eq!(buf[(8, 2)].symbol(), "◉");
    }
}
