//! KPI tiles in a two-column grid.

use crate::data::MetricsData;
use crate::theme::{parse_hex_color, AppTheme};
use crate::widgets::{metric_tiles, MetricTile};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Paragraph, Widget},
};

const COLUMNS: usize = 2;

pub fn render(data: &MetricsData, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    let tiles = metric_tiles(data);
    if tiles.is_empty() {
        Paragraph::new(Span::styled("No metrics", Style::default().fg(colors.text_muted)))
            .render(area, buf);
        return;
    }

    let rows = tiles.len().div_ceil(COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(area);
    for (row_area, chunk) in row_areas.iter().zip(tiles.chunks(COLUMNS)) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
            .split(*row_area);
        for (cell, tile) in cells.iter().zip(chunk) {
            render_tile(tile, *cell, buf, colors);
        }
    }
}

fn render_tile(tile: &MetricTile, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    let tint = parse_hex_color(tile.descriptor.color).unwrap_or(colors.button);
    let trend = if tile.trending_up {
        colors.status_success
    } else {
        colors.status_error
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", tile.descriptor.icon), Style::default().fg(tint)),
            Span::styled(tile.descriptor.label, Style::default().fg(colors.text_secondary)),
        ]),
        Line::from(Span::styled(
            tile.value_text.clone(),
            Style::default()
                .fg(colors.text_primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(tile.trend_text.clone(), Style::default().fg(trend))),
    ];

    let block = Block::bordered()
        .border_type(BorderType::Plain)
        .border_style(Style::default().fg(colors.track));
    Paragraph::new(lines).block(block).render(area, buf);
}
