//! What should happen after the core handles a key or pointer event.
//!
//! The frontend matches on `InputResult` to apply side effects it owns, such
//! as opening the add-widget modal.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Nothing applied; the frontend may route the event elsewhere
    Ignored,

    /// Event consumed, state may have changed
    Handled,

    /// Frontend should show the add-widget modal
    OpenAddWidget,

    /// Application should exit
    Quit,
}

impl InputResult {
    pub fn is_handled(&self) -> bool {
        !matches!(self, InputResult::Ignored)
    }
}
