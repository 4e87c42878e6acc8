//! Typed failures for dashboard documents.
//!
//! Everything that reads persisted or imported JSON funnels through these so
//! callers can tell a malformed file from an invalid one.

use crate::data::WidgetId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("malformed dashboard document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to serialize dashboard: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("widget id '{0}' appears more than once")]
    DuplicateId(WidgetId),

    #[error("widget #{0} has an empty id")]
    EmptyId(usize),

    #[error("canvas size {width}x{height} has no area")]
    EmptyCanvas { width: u32, height: u32 },
}
