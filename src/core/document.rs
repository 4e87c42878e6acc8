//! Reading and writing the dashboard JSON document.
//!
//! Parsing is typed (payload shape follows the widget `type`), then the
//! aggregate invariants are checked before a document is accepted.

use super::error::DashboardError;
use crate::data::DashboardState;
use std::collections::HashSet;

/// Parse and validate a dashboard document
pub fn parse(text: &str) -> Result<DashboardState, DashboardError> {
    let state: DashboardState = serde_json::from_str(text)?;
    validate(&state)?;
    Ok(state)
}

/// Check ids are present and unique and the canvas has an area
pub fn validate(state: &DashboardState) -> Result<(), DashboardError> {
    let canvas = state.canvas_size;
    if canvas.width == 0 || canvas.height == 0 {
        return Err(DashboardError::EmptyCanvas {
            width: canvas.width,
            height: canvas.height,
        });
    }

    let mut seen = HashSet::with_capacity(state.widgets.len());
    for (index, widget) in state.widgets.iter().enumerate() {
        if widget.id.is_empty() {
            return Err(DashboardError::EmptyId(index));
        }
        if !seen.insert(&widget.id) {
            return Err(DashboardError::DuplicateId(widget.id.clone()));
        }
    }

    Ok(())
}

/// Compact form used for the storage snapshot
pub fn to_json(state: &DashboardState) -> Result<String, DashboardError> {
    serde_json::to_string(state).map_err(DashboardError::Serialize)
}

/// Indented form used for exports
pub fn to_pretty_json(state: &DashboardState) -> Result<String, DashboardError> {
    serde_json::to_string_pretty(state).map_err(DashboardError::Serialize)
}
