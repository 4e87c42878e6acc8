//! Chart helpers (rendering-agnostic): pie slices, axis bounds and hover
//! lookup for line, bar, pie and table widgets.

use super::format::{format_json_value, format_number};
use crate::data::ChartPoint;

/// Slice colors, cycled
pub const PIE_COLORS: [&str; 5] = ["#3B82F6", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444"];

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub name: String,
    pub value: f64,
    /// Share of the total (0.0 to 1.0)
    pub fraction: f64,
    pub color: &'static str,
}

impl PieSlice {
    /// `Desktop 60%`
    pub fn label(&self) -> String {
        format!("{} {:.0}%", self.name, self.fraction * 100.0)
    }
}

/// Proportional slices; negative values count as empty
pub fn pie_slices(points: &[ChartPoint]) -> Vec<PieSlice> {
    let total: f64 = points.iter().map(|p| p.value.max(0.0)).sum();
    points
        .iter()
        .enumerate()
        .map(|(i, p)| PieSlice {
            name: p.name.clone(),
            value: p.value,
            fraction: if total > 0.0 {
                p.value.max(0.0) / total
            } else {
                0.0
            },
            color: PIE_COLORS[i % PIE_COLORS.len()],
        })
        .collect()
}

/// Split `width` cells between slices, largest remainders first, so the
/// strip always fills exactly
pub fn slice_widths(slices: &[PieSlice], width: u16) -> Vec<u16> {
    let total = f64::from(width);
    let mut widths: Vec<u16> = slices
        .iter()
        .map(|s| (s.fraction * total).floor() as u16)
        .collect();

    let used: u16 = widths.iter().sum();
    let has_area = slices.iter().any(|s| s.fraction > 0.0);
    if !has_area || used >= width {
        return widths;
    }

    let mut order: Vec<usize> = (0..slices.len()).collect();
    order.sort_by(|&a, &b| {
        let ra = slices[a].fraction * total - f64::from(widths[a]);
        let rb = slices[b].fraction * total - f64::from(widths[b]);
        rb.total_cmp(&ra)
    });
    for &i in order.iter().cycle().take(usize::from(width - used)) {
        widths[i] += 1;
    }
    widths
}

/// Y axis range that always includes zero, with headroom above the top value
pub fn y_bounds(points: &[ChartPoint]) -> (f64, f64) {
    let finite = points.iter().map(|p| p.value).filter(|v| v.is_finite());
    let (min, max) = finite.fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if max - min <= f64::EPSILON {
        return (min, min + 1.0);
    }
    let headroom = (max - min) * 0.1;
    (min, max + headroom)
}

/// Point whose x position is closest to `offset` when `count` points are
/// spread edge to edge across `width` cells (line charts)
pub fn nearest_point(count: usize, offset: u16, width: u16) -> Option<usize> {
    if count == 0 || width == 0 || offset >= width {
        return None;
    }
    if count == 1 || width == 1 {
        return Some(0);
    }
    let step = f64::from(width - 1) / (count - 1) as f64;
    let index = (f64::from(offset) / step).round() as usize;
    Some(index.min(count - 1))
}

/// Point owning the equal-width bucket under `offset` (bars, pie strip)
pub fn bucket_point(count: usize, offset: u16, width: u16) -> Option<usize> {
    if count == 0 || width == 0 || offset >= width {
        return None;
    }
    let index = usize::from(offset) * count / usize::from(width);
    Some(index.min(count - 1))
}

/// `Jan · value: 4,200 · growth: 8`
pub fn tooltip_text(point: &ChartPoint) -> String {
    let mut text = format!("{} · value: {}", point.name, format_number(point.value));
    for (key, value) in &point.extra {
        text.push_str(&format!(" · {}: {}", key, format_json_value(value)));
    }
    text
}
