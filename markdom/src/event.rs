//! High-level events with element targeting.
//!
//! Events arrive from the embedding host already resolved to a target
//! element id; there is no hit testing here.

/// An input event delivered to a widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer pressed on an element.
    PointerPress {
        target: Option<String>,
        button: MouseButton,
    },
    /// A date range was selected (custom signal, ISO-8601 bounds).
    RangeSelected { from: String, to: String },
}

impl Event {
    /// Convenience constructor for a left pointer press on `target`.
    pub fn press(target: impl Into<String>) -> Self {
        Event::PointerPress {
            target: Some(target.into()),
            button: MouseButton::Left,
        }
    }
}

/// Mouse button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}
