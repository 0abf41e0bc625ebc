//! Drag sessions and the drag state machine.
//!
//! A [`DragSession`] captures everything a gesture needs at press time: the
//! viewport position of the press, the starting HSV component(s) and the
//! pixel extent that maps onto the component's range. Moves are then pure
//! functions of the session and the current pointer position.
//!
//! [`DragController`] owns at most one session and the two document
//! listeners that session registered. Ending the session removes exactly
//! those listeners.

use crate::color::{clamp_component, Hsv, HUE_MAX, PERCENT_MAX};
use crate::layout::{PaletteGeometry, Target};
use crate::listener::{Handler, ListenerId, ListenerRegistry};
use crate::pointer::{InputScheme, PointerPosition};

/// New HSV component values produced by a drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HsvUpdate {
    SaturationValue { saturation: f32, value: f32 },
    Hue(f32),
}

impl HsvUpdate {
    /// Apply to a color, leaving untouched components as they are.
    pub fn apply(self, hsv: Hsv) -> Hsv {
        match self {
            HsvUpdate::SaturationValue { saturation, value } => {
                hsv.with_saturation_value(saturation, value)
            }
            HsvUpdate::Hue(hue) => hsv.with_hue(hue),
        }
    }
}

/// Axis mapping and starting values of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragAxes {
    /// X drives saturation, Y drives value (inverted)
    Palette {
        init_saturation: f32,
        init_value: f32,
        width: f32,
        height: f32,
    },
    /// X drives hue
    Hue { init_hue: f32, width: f32 },
}

/// State of one press-to-release gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    origin: Target,
    init_x: f32,
    init_y: f32,
    axes: DragAxes,
}

impl DragSession {
    /// Start a saturation/value drag from a press on the palette canvas.
    pub fn palette(press: &PointerPosition, geometry: &PaletteGeometry) -> Self {
        let saturation = (press.offset_x - geometry.inset) / geometry.width * PERCENT_MAX;
        let value = PERCENT_MAX - (press.offset_y - geometry.inset) / geometry.height * PERCENT_MAX;
        Self {
            origin: Target::Palette,
            init_x: press.client_x,
            init_y: press.client_y,
            axes: DragAxes::Palette {
                init_saturation: clamp_component(saturation, PERCENT_MAX),
                init_value: clamp_component(value, PERCENT_MAX),
                width: geometry.width,
                height: geometry.height,
            },
        }
    }

    /// Start a hue drag from a press on the track; the hue jumps to the
    /// press point.
    pub fn hue_track(press: &PointerPosition, width: f32) -> Self {
        let hue = press.offset_x / width * HUE_MAX;
        Self::hue(Target::SliderTrack, press, hue, width)
    }

    /// Start a hue drag from a press on the knob; the hue stays put.
    pub fn hue_knob(press: &PointerPosition, current_hue: f32, width: f32) -> Self {
        Self::hue(Target::SliderKnob, press, current_hue, width)
    }

    fn hue(origin: Target, press: &PointerPosition, hue: f32, width: f32) -> Self {
        Self {
            origin,
            init_x: press.client_x,
            init_y: press.client_y,
            axes: DragAxes::Hue {
                init_hue: clamp_component(hue, HUE_MAX),
                width,
            },
        }
    }

    /// Target the press landed on. Moves are resolved against it.
    pub fn origin(&self) -> Target {
        self.origin
    }

    pub fn axes(&self) -> DragAxes {
        self.axes
    }

    /// Values at press time.
    pub fn initial(&self) -> HsvUpdate {
        match self.axes {
            DragAxes::Palette {
                init_saturation,
                init_value,
                ..
            } => HsvUpdate::SaturationValue {
                saturation: init_saturation,
                value: init_value,
            },
            DragAxes::Hue { init_hue, .. } => HsvUpdate::Hue(init_hue),
        }
    }

    /// Values for a pointer that moved to `position`.
    ///
    /// Pixel deltas are scaled linearly onto the component range and added
    /// to the press-time value, then clamped.
    pub fn on_move(&self, position: &PointerPosition) -> HsvUpdate {
        let delta_x = position.client_x - self.init_x;
        let delta_y = position.client_y - self.init_y;

        match self.axes {
            DragAxes::Palette {
                init_saturation,
                init_value,
                width,
                height,
            } => {
                let delta_s = delta_x / width * PERCENT_MAX;
                let delta_v = delta_y / height * PERCENT_MAX;
                HsvUpdate::SaturationValue {
                    saturation: clamp_component(init_saturation + delta_s, PERCENT_MAX),
                    value: clamp_component(init_value - delta_v, PERCENT_MAX),
                }
            }
            DragAxes::Hue { init_hue, width } => {
                let delta = delta_x / width * HUE_MAX;
                HsvUpdate::Hue(clamp_component(init_hue + delta, HUE_MAX))
            }
        }
    }
}

/// Drag interaction state
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// Not dragging
    #[default]
    Idle,
    /// A gesture is in progress
    Dragging {
        session: DragSession,
        move_listener: ListenerId,
        release_listener: ListenerId,
    },
}

impl DragState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging { .. })
    }

    pub fn session(&self) -> Option<&DragSession> {
        match self {
            DragState::Dragging { session, .. } => Some(session),
            DragState::Idle => None,
        }
    }
}

/// Drives `Idle -> Dragging -> Idle` for one picker.
#[derive(Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state.is_dragging()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.state.session()
    }

    /// Start a session and register its document listeners.
    ///
    /// A session that is still running is ended first. Returns the
    /// press-time values to commit.
    pub fn begin(
        &mut self,
        session: DragSession,
        registry: &mut ListenerRegistry,
        scheme: &InputScheme,
    ) -> HsvUpdate {
        if self.end(registry) {
            log::warn!("press while dragging: restarting drag session");
        }

        let move_listener = registry.add(Target::Document, scheme.moved, Handler::DragMove);
        let release_listener = registry.add(Target::Document, scheme.release, Handler::DragRelease);
        log::debug!("drag started on {:?}", session.origin());

        self.state = DragState::Dragging {
            session,
            move_listener,
            release_listener,
        };
        session.initial()
    }

    /// Values for a move, or `None` when idle.
    pub fn on_move(&self, position: &PointerPosition) -> Option<HsvUpdate> {
        self.session().map(|session| session.on_move(position))
    }

    /// End the session and remove its listeners.
    ///
    /// Safe to call repeatedly; returns `true` only when a session ended.
    pub fn end(&mut self, registry: &mut ListenerRegistry) -> bool {
        match std::mem::take(&mut self.state) {
            DragState::Dragging {
                session,
                move_listener,
                release_listener,
            } => {
                registry.remove(move_listener);
                registry.remove(release_listener);
                log::debug!("drag ended on {:?}", session.origin());
                true
            }
            DragState::Idle => false,
        }
    }
}
