//! Data layer - Pure state without UI coupling
//!
//! This module contains the dashboard document and the UI state as pure data
//! structures. NO imports from frontend/ or any rendering code.
//! Frontends read from these structures to render.

pub mod dashboard;
pub mod ui_state;
pub mod widget;

pub use dashboard::*;
pub use ui_state::*;
pub use widget::*;
