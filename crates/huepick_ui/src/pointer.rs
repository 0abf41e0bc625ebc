//! Pointer input normalization.
//!
//! Hosts deliver either mouse or touch events. Both are reduced to a
//! [`PointerPosition`] so the drag math never has to care which one it got.
//! The press/move/release event names are picked once, as an
//! [`InputScheme`], and every listener the picker registers uses that scheme.

use crate::layout::Rectangle;
use serde::{Deserialize, Serialize};

/// Which kind of device produced an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputKind {
    Mouse,
    Touch,
}

/// Where in a gesture an event sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Press,
    Move,
    Release,
}

/// Concrete host event names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventName {
    MouseDown,
    MouseMove,
    MouseUp,
    TouchStart,
    TouchMove,
    TouchEnd,
}

impl EventName {
    /// Event name for an input kind and gesture phase.
    pub fn of(kind: InputKind, phase: Phase) -> Self {
        match (kind, phase) {
            (InputKind::Mouse, Phase::Press) => EventName::MouseDown,
            (InputKind::Mouse, Phase::Move) => EventName::MouseMove,
            (InputKind::Mouse, Phase::Release) => EventName::MouseUp,
            (InputKind::Touch, Phase::Press) => EventName::TouchStart,
            (InputKind::Touch, Phase::Move) => EventName::TouchMove,
            (InputKind::Touch, Phase::Release) => EventName::TouchEnd,
        }
    }

    /// The DOM-style name, e.g. `"mousedown"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::MouseDown => "mousedown",
            EventName::MouseMove => "mousemove",
            EventName::MouseUp => "mouseup",
            EventName::TouchStart => "touchstart",
            EventName::TouchMove => "touchmove",
            EventName::TouchEnd => "touchend",
        }
    }

    pub fn kind(&self) -> InputKind {
        match self {
            EventName::MouseDown | EventName::MouseMove | EventName::MouseUp => InputKind::Mouse,
            EventName::TouchStart | EventName::TouchMove | EventName::TouchEnd => InputKind::Touch,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            EventName::MouseDown | EventName::TouchStart => Phase::Press,
            EventName::MouseMove | EventName::TouchMove => Phase::Move,
            EventName::MouseUp | EventName::TouchEnd => Phase::Release,
        }
    }
}

/// The press/move/release triple used for every listener of a picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputScheme {
    pub press: EventName,
    pub moved: EventName,
    pub release: EventName,
}

impl InputScheme {
    pub const MOUSE: Self = Self {
        press: EventName::MouseDown,
        moved: EventName::MouseMove,
        release: EventName::MouseUp,
    };

    pub const TOUCH: Self = Self {
        press: EventName::TouchStart,
        moved: EventName::TouchMove,
        release: EventName::TouchEnd,
    };

    /// Pick the scheme from the host's touch capability.
    pub fn detect(touch_capable: bool) -> Self {
        if touch_capable {
            Self::TOUCH
        } else {
            Self::MOUSE
        }
    }

    /// Event name this scheme uses for a phase.
    pub fn name_for(&self, phase: Phase) -> EventName {
        match phase {
            Phase::Press => self.press,
            Phase::Move => self.moved,
            Phase::Release => self.release,
        }
    }

    /// Input kind of the press event.
    pub fn kind(&self) -> InputKind {
        self.press.kind()
    }
}

impl Default for InputScheme {
    fn default() -> Self {
        Self::MOUSE
    }
}

/// A pointer location, normalized across input kinds.
///
/// `client_*` is viewport-relative and drives drag deltas. `offset_*` is
/// relative to the target surface and positions the initial press.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub client_x: f32,
    pub client_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Raw mouse coordinates as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MouseInput {
    pub client_x: f32,
    pub client_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// One active touch point. Touches carry no native offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub client_x: f32,
    pub client_y: f32,
    pub page_x: f32,
    pub page_y: f32,
}

impl TouchPoint {
    /// A touch at a viewport point on an unscrolled page.
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            client_x: x,
            client_y: y,
            page_x: x,
            page_y: y,
        }
    }
}

/// Device-specific payload of a pointer event.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse(MouseInput),
    /// Active touches, first one wins.
    Touch(Vec<TouchPoint>),
}

/// A pointer event dispatched by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerEvent {
    pub phase: Phase,
    pub input: PointerInput,
}

impl PointerEvent {
    pub fn mouse(phase: Phase, client_x: f32, client_y: f32, offset_x: f32, offset_y: f32) -> Self {
        Self {
            phase,
            input: PointerInput::Mouse(MouseInput {
                client_x,
                client_y,
                offset_x,
                offset_y,
            }),
        }
    }

    pub fn touch(phase: Phase, touches: Vec<TouchPoint>) -> Self {
        Self {
            phase,
            input: PointerInput::Touch(touches),
        }
    }

    pub fn kind(&self) -> InputKind {
        match self.input {
            PointerInput::Mouse(_) => InputKind::Mouse,
            PointerInput::Touch(_) => InputKind::Touch,
        }
    }

    /// Host event name of this event.
    pub fn name(&self) -> EventName {
        EventName::of(self.kind(), self.phase)
    }
}

/// Normalize an event against the bounding rectangle of its target.
///
/// Returns `None` for touch events without an active touch (a `touchend`
/// for the last finger, for example).
pub fn resolve_position(rect: Rectangle, event: &PointerEvent) -> Option<PointerPosition> {
    match &event.input {
        PointerInput::Mouse(mouse) => Some(PointerPosition {
            client_x: mouse.client_x,
            client_y: mouse.client_y,
            offset_x: mouse.offset_x,
            offset_y: mouse.offset_y,
        }),
        PointerInput::Touch(touches) => {
            let touch = touches.first()?;
            Some(PointerPosition {
                client_x: touch.client_x,
                client_y: touch.client_y,
                offset_x: touch.page_x - rect.x,
                offset_y: touch.page_y - rect.y,
            })
        }
    }
}
