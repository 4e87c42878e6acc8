//! TUI Frontend (ratatui-based)
//!
//! This module implements the Frontend trait using ratatui for terminal rendering.
//! It wraps crossterm for event handling and terminal management.

pub mod add_widget_modal;
pub mod app;
pub mod chart;
pub mod header;
pub mod metrics;
pub mod progress;
pub mod table;
pub mod viewport;
pub mod welcome;
pub mod widget_card;

pub use app::TuiFrontend;
