//! Core business logic layer
//!
//! This module contains the dashboard store, drag/resize state machines and
//! input handling. NO imports from frontend/ or rendering code.
//! Core updates data structures in the data layer, frontends read and render.

pub mod add_widget;
pub mod app_core;
pub mod document;
pub mod error;
pub mod event_bridge;
pub mod input_result;
pub mod interaction;
pub mod samples;
pub mod storage;
pub mod store;
pub mod transfer;

pub use add_widget::AddWidgetForm;
pub use app_core::AppCore;
pub use error::DashboardError;
pub use input_result::InputResult;
pub use store::{DashboardStore, WidgetActions};
