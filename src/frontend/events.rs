//! Frontend-agnostic input events.
//!
//! The terminal frontend translates crossterm's event stream into this enum
//! so the event loop only handles one event shape. Mouse input is reduced to
//! the three pointer phases the dashboard cares about.

use crate::data::PointerKind;
use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEventKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrontendEvent {
    /// Keyboard input (presses only)
    Key(KeyEvent),
    /// Primary-button pointer input at a terminal cell
    Pointer {
        kind: PointerKind,
        column: u16,
        row: u16,
    },
    /// Terminal resize
    Resize { width: u16, height: u16 },
    /// Bracketed paste
    Paste { text: String },
}

impl FrontendEvent {
    pub fn pointer(kind: PointerKind, column: u16, row: u16) -> Self {
        Self::Pointer { kind, column, row }
    }

    /// Convert a crossterm event; `None` for anything the dashboard ignores
    pub fn from_crossterm(event: Event) -> Option<Self> {
        match event {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    return None;
                }
                Some(Self::Key(key_event))
            }
            Event::Mouse(mouse_event) => {
                let kind = match mouse_event.kind {
                    MouseEventKind::Down(MouseButton::Left) => PointerKind::Down,
                    MouseEventKind::Up(MouseButton::Left) => PointerKind::Up,
                    MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => {
                        PointerKind::Move
                    }
                    _ => return None,
                };
                Some(Self::pointer(kind, mouse_event.column, mouse_event.row))
            }
            Event::Resize(width, height) => Some(Self::Resize { width, height }),
            Event::Paste(text) => Some(Self::Paste { text }),
            _ => None,
        }
    }
}
