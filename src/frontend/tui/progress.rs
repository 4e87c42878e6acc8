//! Goal list: a label row, a gauge and an optional achievement line per goal.

use crate::data::ProgressData;
use crate::theme::AppTheme;
use crate::widgets::GoalProgress;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Gauge, Paragraph, Widget},
};

pub fn render(data: &ProgressData, accent: Color, area: Rect, buf: &mut Buffer, colors: &AppTheme) {
    if data.goals.is_empty() {
        Paragraph::new(Span::styled("No goals", Style::default().fg(colors.text_muted)))
            .render(area, buf);
        return;
    }

    let mut y = area.y;
    for goal in &data.goals {
        if y >= area.bottom() {
            break;
        }
        let progress = GoalProgress::from_goal(goal);
        y = render_goal(&progress, accent, Rect::new(area.x, y, area.width, area.bottom() - y), buf, colors);
        // Blank line between goals
        y = y.saturating_add(1);
    }
}

/// Draws one goal from the top of `area`; returns the row after it
fn render_goal(progress: &GoalProgress, accent: Color, area: Rect, buf: &mut Buffer, colors: &AppTheme) -> u16 {
    let row = |offset: u16| Rect::new(area.x, area.y + offset, area.width, 1);

    let name_width = area
        .width
        .saturating_sub(progress.value_label.chars().count() as u16 + 1);
    let header = Line::from(vec![
        Span::styled(
            format!("{:<width$} ", progress.name, width = usize::from(name_width)),
            Style::default()
                .fg(colors.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(progress.value_label.clone(), Style::default().fg(colors.text_secondary)),
    ]);
    Paragraph::new(header).render(row(0), buf);
    if area.height < 2 {
        return area.bottom();
    }

    Gauge::default()
        .ratio(progress.fraction)
        .label(progress.percent_label.clone())
        .gauge_style(Style::default().fg(accent).bg(colors.track))
        .use_unicode(true)
        .render(row(1), buf);

    if progress.achieved && area.height >= 3 {
        Paragraph::new(Span::styled(
            "✓ Goal achieved!",
            Style::default().fg(colors.status_success),
        ))
        .render(row(2), buf);
        return area.y + 3;
    }
    area.y + 2
}
