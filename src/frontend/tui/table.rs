//! Name/value table for table widgets.

use crate::data::ChartPoint;
use crate::theme::AppTheme;
use crate::widgets::format_number;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Row, Table, Widget},
};

/// Rows taken by the header before the first data row
const HEADER_ROWS: u16 = 1;

pub fn render(points: &[ChartPoint], accent: Color, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    let header = Row::new(["Name", "Value"]).style(
        Style::default()
            .fg(accent)
            .add_modifier(Modifier::BOLD),
    );
    let rows = points.iter().map(|p| {
        Row::new([p.name.clone(), format_number(p.value)])
            .style(Style::default().fg(colors.text_primary))
    });

    Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
        .header(header)
        .style(Style::default().bg(colors.card_background))
        .render(area, buf);
}

/// Data row drawn `offset_y` rows below the top of the table
pub fn row_at(count: usize, offset_y: u16) -> Option<usize> {
    let index = usize::from(offset_y.checked_sub(HEADER_ROWS)?);
    (index < count).then_some(index)
}
