//! Widget view models (rendering-agnostic)
//!
//! This module turns widget payloads into display-ready values: formatted
//! numbers, clamped progress fractions, pie slices and tooltips. It holds
//! no rendering logic, so frontends only lay the results out.

pub mod chart;
pub mod format;
pub mod metrics;
pub mod progress;

pub use chart::{pie_slices, tooltip_text, PieSlice, PIE_COLORS};
pub use format::format_number;
pub use metrics::{metric_tiles, MetricTile};
pub use progress::GoalProgress;
