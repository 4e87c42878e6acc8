//! Line, bar and pie renderers plus the hover lookup that mirrors their
//! layouts.

use crate::data::{ChartPoint, WidgetContent};
use crate::theme::{parse_hex_color, AppTheme};
use crate::widgets::chart::{bucket_point, nearest_point, pie_slices, slice_widths, y_bounds};
use crate::widgets::format_number;
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Bar, BarChart, BarGroup, Chart, Dataset, GraphType, Paragraph, Widget},
};

/// Rows above the pie legend: the strip and a spacer
const PIE_LEGEND_OFFSET: u16 = 2;

pub fn render_line(points: &[ChartPoint], accent: Color, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    if points.is_empty() {
        render_empty(area, buf, colors);
        return;
    }

    let data: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (i as f64, p.value))
        .collect();
    let (lo, hi) = y_bounds(points);
    let last = points.len().saturating_sub(1);
    let axis_style = Style::default().fg(colors.text_muted);

    let mut x_labels = vec![points[0].name.clone()];
    if last >= 2 {
        x_labels.push(points[last / 2].name.clone());
    }
    if last >= 1 {
        x_labels.push(points[last].name.clone());
    }

    let dataset = Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(accent))
        .data(&data);

    Chart::new(vec![dataset])
        .style(Style::default().bg(colors.card_background))
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, last.max(1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(axis_style)
                .bounds([lo, hi])
                .labels(vec![format_number(lo), format_number((lo + hi) / 2.0), format_number(hi)]),
        )
        .render(area, buf);
}

pub fn render_bar(points: &[ChartPoint], accent: Color, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    if points.is_empty() {
        render_empty(area, buf, colors);
        return;
    }

    let bars: Vec<Bar> = points
        .iter()
        .map(|p| {
            Bar::default()
                .value(p.value.max(0.0).round() as u64)
                .text_value(format_number(p.value))
                .label(Line::from(p.name.clone()))
        })
        .collect();

    let count = points.len() as u16;
    let bar_width = (area.width / count.max(1)).saturating_sub(1).max(1);

    BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(accent))
        .value_style(Style::default().fg(colors.button_text).bg(accent))
        .label_style(Style::default().fg(colors.text_secondary))
        .style(Style::default().bg(colors.card_background))
        .render(area, buf);
}

pub fn render_pie(points: &[ChartPoint], area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    let slices = pie_slices(points);
    if slices.is_empty() {
        render_empty(area, buf, colors);
        return;
    }

    let mut x = area.x;
    for (slice, width) in slices.iter().zip(slice_widths(&slices, area.width)) {
        let color = parse_hex_color(slice.color).unwrap_or(colors.button);
        for column in x..x.saturating_add(width).min(area.right()) {
            if let Some(cell) = buf.cell_mut(Position::new(column, area.y)) {
                cell.set_symbol("█");
                cell.set_style(Style::default().fg(color));
            }
        }
        x = x.saturating_add(width);
    }

    let legend_top = area.y.saturating_add(PIE_LEGEND_OFFSET);
    for (i, slice) in slices.iter().enumerate() {
        let row = legend_top.saturating_add(i as u16);
        if row >= area.bottom() {
            break;
        }
        let color = parse_hex_color(slice.color).unwrap_or(colors.button);
        let line = Line::from(vec![
            Span::styled("■ ", Style::default().fg(color)),
            Span::styled(slice.label(), Style::default().fg(colors.text_primary)),
            Span::styled(
                format!("  {}", format_number(slice.value)),
                Style::default().fg(colors.text_muted),
            ),
        ]);
        Paragraph::new(line).render(Rect::new(area.x, row, area.width, 1), buf);
    }
}

fn render_empty(area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    Paragraph::new(Span::styled("No data", Style::default().fg(colors.text_muted)))
        .render(area, buf);
}

/// Index of the point drawn under `cell` in a content area, if any
pub fn point_under(content: &WidgetContent, area: Rect, cell: Position) -> Option<usize> {
    if !area.contains(cell) {
        return None;
    }
    let offset_x = cell.x - area.x;
    let offset_y = cell.y - area.y;

    match content {
        WidgetContent::LineChart(points) => nearest_point(points.len(), offset_x, area.width),
        WidgetContent::BarChart(points) => bucket_point(points.len(), offset_x, area.width),
        WidgetContent::PieChart(points) => {
            if offset_y == 0 {
                let slices = pie_slices(points);
                let mut end = 0u16;
                for (i, width) in slice_widths(&slices, area.width).into_iter().enumerate() {
                    end = end.saturating_add(width);
                    if offset_x < end {
                        return Some(i);
                    }
                }
                None
            } else {
                let index = usize::from(offset_y.checked_sub(PIE_LEGEND_OFFSET)?);
                (index < points.len()).then_some(index)
            }
        }
        WidgetContent::Table(points) => super::table::row_at(points.len(), offset_y),
        WidgetContent::Metrics(_) | WidgetContent::Progress(_) => None,
    }
}
