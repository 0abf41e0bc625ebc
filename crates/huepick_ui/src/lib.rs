//! huepick_ui - An embeddable HSV color picker widget
//!
//! A saturation/value palette sits above a hue slider. The widget draws into
//! canvases handed out by a [`Backend`], mounts into a host [`Surface`] and
//! reacts to pointer events the host dispatches into it. Observers are told
//! about every committed color as an [`Rgb`] triple.
//!
//! A headless tiny-skia backend ([`RasterBackend`], [`HeadlessSurface`]) is
//! included for rendering without a window.

mod callback;
mod color;
mod config;
mod drag;
mod error;
mod layout;
mod listener;
mod palette;
mod picker;
mod pointer;
mod raster;
mod slider;
mod surface;

pub use callback::{ObserverList, SubscriptionId};
pub use color::{format_color, hsv_to_rgb, rgb_to_hsv, Hsv, Rgb, HUE_MAX, PERCENT_MAX};
pub use config::{PickerConfig, PickerStyle, ValueScale};
pub use drag::{DragAxes, DragController, DragSession, DragState, HsvUpdate};
pub use error::{PickerError, Result};
pub use layout::{PaletteGeometry, PickerLayout, Point, Rectangle, Size, Target, VisualTree};
pub use listener::{Handler, ListenerId, ListenerRegistry, Propagation};
pub use palette::{row_value, PaletteRenderer};
pub use picker::{create_color_picker, ColorPicker, ColorPickerImpl};
pub use pointer::{
    resolve_position, EventName, InputKind, InputScheme, MouseInput, Phase, PointerEvent,
    PointerInput, PointerPosition, TouchPoint,
};
pub use raster::{HeadlessSurface, RasterBackend, RasterCanvas};
pub use slider::{hue_stops, SliderRenderer};
pub use surface::{Backend, Canvas, Surface};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::{format_color, Hsv, Rgb};
    pub use crate::config::{PickerConfig, PickerStyle, ValueScale};
    pub use crate::layout::{Point, Target};
    pub use crate::picker::{create_color_picker, ColorPicker, ColorPickerImpl};
    pub use crate::pointer::{InputScheme, Phase, PointerEvent, TouchPoint};
    pub use crate::raster::{HeadlessSurface, RasterBackend};
    pub use crate::surface::{Backend, Canvas, Surface};
}

/// Picker drawing with tiny-skia, the usual choice for headless hosts.
pub type RasterColorPicker = ColorPickerImpl<RasterCanvas, HeadlessSurface>;
