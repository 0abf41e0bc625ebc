//! The color picker widget.
//!
//! Renders a saturation/value palette with a hue slider underneath. The
//! host mounts it with [`ColorPicker::attach`] and feeds pointer events
//! through [`ColorPicker::dispatch`]. Every committed change repaints first
//! and then notifies observers, so an observer always sees a picker whose
//! pixels already match the color it was handed.

use crate::callback::{ObserverList, SubscriptionId};
use crate::color::{rgb_to_hsv, Hsv, Rgb};
use crate::config::{PickerConfig, PickerStyle};
use crate::drag::{DragController, DragSession, HsvUpdate};
use crate::error::{PickerError, Result};
use crate::layout::{PickerLayout, Point, Rectangle, Target};
use crate::listener::{Handler, ListenerRegistry, Propagation};
use crate::palette::{device_pixels, PaletteRenderer};
use crate::pointer::{
    resolve_position, InputKind, InputScheme, Phase, PointerEvent, PointerPosition, TouchPoint,
};
use crate::slider::SliderRenderer;
use crate::surface::{Backend, Canvas, Surface};

/// The public capability of a color picker.
pub trait ColorPicker<S: Surface> {
    /// Mount into `surface` and start listening for presses.
    fn attach(&mut self, surface: S) -> Result<()>;

    /// Stop listening, unmount and hand the surface back.
    ///
    /// Returns `None` (and logs) when the picker was not attached.
    fn detach(&mut self) -> Option<S>;

    /// Set the color. A `silent` change skips observers, which lets callers
    /// mirror external state without feedback loops.
    fn change_color(&mut self, rgb: Rgb, silent: bool);

    /// Current color.
    fn rgb(&self) -> Rgb;

    /// Register an observer called with the color on every committed change.
    fn on_color_changed(&mut self, observer: Box<dyn FnMut(Rgb)>) -> SubscriptionId;

    /// Deliver a host pointer event that hit `target`.
    fn dispatch(&mut self, target: Target, event: &PointerEvent);
}

/// Picker implementation over a canvas type and a surface type.
pub struct ColorPickerImpl<C, S> {
    style: PickerStyle,
    layout: PickerLayout,
    quality: f32,
    input: InputScheme,
    canvas: C,
    slider_canvas: C,
    palette: PaletteRenderer<C>,
    slider: SliderRenderer,
    hsv: Hsv,
    drag: DragController,
    listeners: ListenerRegistry,
    observers: ObserverList<Rgb>,
    surface: Option<S>,
}

impl<C: Canvas, S: Surface> ColorPickerImpl<C, S> {
    /// Build a picker, allocating its canvases from `backend`.
    pub fn new<B>(config: PickerConfig, backend: &mut B) -> Result<Self>
    where
        B: Backend<Canvas = C>,
    {
        let PickerConfig {
            style,
            quality,
            input,
        } = config;
        style.validate()?;

        let quality = quality.unwrap_or_else(|| backend.device_pixel_ratio());
        if !(quality.is_finite() && quality > 0.0) {
            return Err(PickerError::InvalidStyle(format!(
                "quality must be positive, got {}",
                quality
            )));
        }
        let input = input.unwrap_or_else(|| InputScheme::detect(backend.supports_touch()));

        let layout = PickerLayout::new(&style);
        let mut canvas = backend.create_canvas()?;
        let mut slider_canvas = backend.create_canvas()?;
        let palette_bitmap = backend.create_canvas()?;

        let palette_rect = layout.palette_canvas();
        canvas.resize(
            device_pixels(palette_rect.width, quality),
            device_pixels(palette_rect.height, quality),
        )?;
        let slider_rect = layout.slider_canvas();
        slider_canvas.resize(
            device_pixels(slider_rect.width, quality),
            device_pixels(slider_rect.height, quality),
        )?;

        let palette = PaletteRenderer::new(
            palette_bitmap,
            layout.palette_geometry(),
            style.value_scale,
            quality,
        )?;
        let slider = SliderRenderer::new(&layout, quality);

        let mut picker = Self {
            style,
            layout,
            quality,
            input,
            canvas,
            slider_canvas,
            palette,
            slider,
            hsv: Hsv::default(),
            drag: DragController::new(),
            listeners: ListenerRegistry::new(),
            observers: ObserverList::new(),
            surface: None,
        };
        picker.palette.render_palette(picker.hsv.hue());
        picker.repaint();

        log::debug!(
            "color picker created: {}x{} palette, quality {}, {:?} input",
            picker.style.palette_width,
            picker.style.palette_height,
            quality,
            input.kind()
        );
        Ok(picker)
    }

    pub fn style(&self) -> &PickerStyle {
        &self.style
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    pub fn quality(&self) -> f32 {
        self.quality
    }

    pub fn input_scheme(&self) -> InputScheme {
        self.input
    }

    pub fn hsv(&self) -> Hsv {
        self.hsv
    }

    /// The visible palette canvas.
    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    /// The visible hue slider canvas.
    pub fn slider_canvas(&self) -> &C {
        &self.slider_canvas
    }

    /// The cached offscreen palette.
    pub fn palette(&self) -> &PaletteRenderer<C> {
        &self.palette
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn is_attached(&self) -> bool {
        self.surface.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Number of listeners currently registered.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Remove an observer added with [`ColorPicker::on_color_changed`].
    pub fn remove_observer(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Set the hue directly, in degrees.
    pub fn set_hue(&mut self, hue: f32, silent: bool) {
        let next = self.hsv.with_hue(hue);
        self.commit(next, silent);
    }

    /// End the drag session without a release event, e.g. when the pointer
    /// left the window or the host lost pointer capture.
    pub fn cancel_drag(&mut self) -> bool {
        self.drag.end(&mut self.listeners)
    }

    /// Viewport bounds of a target, if attached.
    pub fn target_bounds(&self, target: Target) -> Option<Rectangle> {
        let origin = self.surface.as_ref()?.origin();
        Some(self.layout.bounds(target, self.hsv.hue()).translate(origin))
    }

    /// Innermost target under a viewport point, if attached.
    pub fn hit_test(&self, client: Point) -> Option<Target> {
        let origin = self.surface.as_ref()?.origin();
        let local = Point::new(client.x - origin.x, client.y - origin.y);
        Some(self.layout.hit_test(local, self.hsv.hue()))
    }

    /// Build the event a host without native offsets would deliver for a
    /// pointer at a viewport point, together with the target it hits.
    ///
    /// Uses this picker's input scheme. Returns `None` when not attached.
    pub fn pointer_event_at(
        &self,
        phase: Phase,
        client: Point,
    ) -> Option<(Target, PointerEvent)> {
        let target = self.hit_test(client)?;
        let bounds = self.target_bounds(target)?;
        let event = match self.input.kind() {
            InputKind::Mouse => PointerEvent::mouse(
                phase,
                client.x,
                client.y,
                client.x - bounds.x,
                client.y - bounds.y,
            ),
            InputKind::Touch if phase == Phase::Release => PointerEvent::touch(phase, Vec::new()),
            InputKind::Touch => {
                PointerEvent::touch(phase, vec![TouchPoint::at(client.x, client.y)])
            }
        };
        Some((target, event))
    }

    fn resolve(&self, target: Target, event: &PointerEvent) -> Option<PointerPosition> {
        let bounds = self.target_bounds(target)?;
        resolve_position(bounds, event)
    }

    fn register_press_listeners(&mut self) {
        let press = self.input.press;
        self.listeners.add(Target::Palette, press, Handler::PalettePress);
        self.listeners.add(Target::SliderTrack, press, Handler::TrackPress);
        self.listeners.add(Target::SliderKnob, press, Handler::KnobPress);
    }

    fn begin_drag(&mut self, session: DragSession) {
        let update = self.drag.begin(session, &mut self.listeners, &self.input);
        self.apply(update);
    }

    fn apply(&mut self, update: HsvUpdate) {
        let next = update.apply(self.hsv);
        log::trace!(
            "hsv -> ({:.1}, {:.1}, {:.1})",
            next.hue(),
            next.saturation(),
            next.value()
        );
        self.commit(next, false);
    }

    /// Store a new color, repaint, then notify unless silent.
    fn commit(&mut self, hsv: Hsv, silent: bool) {
        self.hsv = hsv;
        self.palette.render_palette(hsv.hue());
        self.repaint();
        if !silent {
            self.observers.notify(hsv.to_rgb());
        }
    }

    fn repaint(&mut self) {
        self.palette.paint_frame(&mut self.canvas, self.hsv);
        self.slider.paint(&mut self.slider_canvas, self.hsv.hue());
    }

    fn handle(&mut self, handler: Handler, event: &PointerEvent) -> Propagation {
        match handler {
            Handler::PalettePress => {
                if let Some(press) = self.resolve(Target::Palette, event) {
                    let session = DragSession::palette(&press, &self.layout.palette_geometry());
                    self.begin_drag(session);
                }
                Propagation::Continue
            }
            Handler::TrackPress => {
                if let Some(press) = self.resolve(Target::SliderTrack, event) {
                    let session = DragSession::hue_track(&press, self.layout.hue_scale_width());
                    self.begin_drag(session);
                }
                Propagation::Continue
            }
            Handler::KnobPress => {
                if let Some(press) = self.resolve(Target::SliderKnob, event) {
                    let width = self.layout.hue_scale_width();
                    let session = DragSession::hue_knob(&press, self.hsv.hue(), width);
                    self.begin_drag(session);
                }
                // The track underneath must not see this press, it would
                // jump the hue to the knob's own position
                Propagation::Stop
            }
            Handler::DragMove => {
                let update = self
                    .drag
                    .session()
                    .and_then(|session| self.resolve(session.origin(), event))
                    .and_then(|position| self.drag.on_move(&position));
                if let Some(update) = update {
                    self.apply(update);
                }
                Propagation::Continue
            }
            Handler::DragRelease => {
                self.drag.end(&mut self.listeners);
                Propagation::Continue
            }
        }
    }
}

impl<C: Canvas, S: Surface> ColorPicker<S> for ColorPickerImpl<C, S> {
    fn attach(&mut self, mut surface: S) -> Result<()> {
        if self.surface.is_some() {
            log::warn!("ColorPicker is already attached");
            return Err(PickerError::AlreadyAttached);
        }
        surface.mount(&self.layout.visual_tree())?;
        self.register_press_listeners();
        self.surface = Some(surface);
        log::debug!("color picker attached");
        Ok(())
    }

    fn detach(&mut self) -> Option<S> {
        let Some(mut surface) = self.surface.take() else {
            log::error!("ColorPicker is not attached yet.");
            return None;
        };
        self.drag.end(&mut self.listeners);
        let removed = self.listeners.clear();
        surface.unmount();
        log::debug!("color picker detached, {} listeners removed", removed);
        Some(surface)
    }

    fn change_color(&mut self, rgb: Rgb, silent: bool) {
        let converted = rgb_to_hsv(rgb);
        // Grays and black carry no hue; keep the slider where it is
        let hsv = if converted.saturation() <= 0.0 || converted.value() <= 0.0 {
            converted.with_hue(self.hsv.hue())
        } else {
            converted
        };
        self.commit(hsv, silent);
    }

    fn rgb(&self) -> Rgb {
        self.hsv.to_rgb()
    }

    fn on_color_changed(&mut self, observer: Box<dyn FnMut(Rgb)>) -> SubscriptionId {
        self.observers.subscribe_boxed(observer)
    }

    fn dispatch(&mut self, target: Target, event: &PointerEvent) {
        if self.surface.is_none() {
            log::warn!("ignoring {} event: picker is not attached", event.name().as_str());
            return;
        }

        let name = event.name();
        for node in target.bubble_path() {
            let mut propagation = Propagation::Continue;
            for (id, handler) in self.listeners.matching(*node, name) {
                // A handler earlier in this dispatch may have removed it
                if !self.listeners.contains(id) {
                    continue;
                }
                if self.handle(handler, event) == Propagation::Stop {
                    propagation = Propagation::Stop;
                }
            }
            if propagation == Propagation::Stop {
                break;
            }
        }
    }
}

/// Build a picker with the default quality and input scheme of `backend`.
pub fn create_color_picker<B, S>(
    style: PickerStyle,
    backend: &mut B,
) -> Result<ColorPickerImpl<B::Canvas, S>>
where
    B: Backend,
    S: Surface,
{
    ColorPickerImpl::new(PickerConfig::new(style), backend)
}
