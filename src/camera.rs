use crate::input::{Modifiers, PointerButton};
use crate::store::{components, properties, PropertyValue, SceneStore};
use glam::Vec2;
use winit::window::CursorIcon;

pub const ZOOM_IN_FACTOR: f32 = 1.1;
pub const ZOOM_OUT_FACTOR: f32 = 0.9;
pub const DEFAULT_ZOOM_MIN: f32 = 0.1;
pub const DEFAULT_ZOOM_MAX: f32 = 10.0;

/// The canvas bounding rectangle in logical pixels plus the device scale
/// factor. Window-space event coordinates are physical pixels; everything
/// the camera computes in is logical.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportRect {
    pub origin: Vec2,
    pub size: Vec2,
    pub scale_factor: f32,
}

impl ViewportRect {
    pub fn new(origin: Vec2, size: Vec2, scale_factor: f32) -> Self {
        Self { origin, size, scale_factor }
    }

    fn dpr(&self) -> f32 {
        self.scale_factor.max(f32::EPSILON)
    }

    pub fn window_to_local(&self, window_px: Vec2) -> Vec2 {
        window_px / self.dpr() - self.origin
    }

    pub fn local_to_window(&self, local: Vec2) -> Vec2 {
        (local + self.origin) * self.dpr()
    }
}

impl Default for ViewportRect {
    fn default() -> Self {
        Self { origin: Vec2::ZERO, size: Vec2::new(1280.0, 720.0), scale_factor: 1.0 }
    }
}

/// Viewport camera. The rendering transform it inverts is
/// `translate(w/2 + pan*zoom, h/2 + pan*zoom); scale(zoom)` with world Y up
/// (screen down is negative world Y).
#[derive(Debug, Clone)]
pub struct CameraController {
    pan: Vec2,
    zoom: f32,
    zoom_limits: (f32, f32),
    drag_anchor: Option<Vec2>,
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            pan: Vec2::ZERO,
            zoom: 1.0,
            zoom_limits: (DEFAULT_ZOOM_MIN, DEFAULT_ZOOM_MAX),
            drag_anchor: None,
        }
    }

    pub fn pan(&self) -> Vec2 {
        self.pan
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn set_zoom_limits(&mut self, min: f32, max: f32) {
        debug_assert!(min > 0.0 && max > min);
        self.zoom_limits = (min.max(f32::EPSILON), max.max(min));
        self.zoom = self.zoom.clamp(self.zoom_limits.0, self.zoom_limits.1);
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.clamp(self.zoom_limits.0, self.zoom_limits.1);
    }

    pub fn screen_to_world(&self, window_px: Vec2, viewport: &ViewportRect) -> Vec2 {
        let local = viewport.window_to_local(window_px);
        let centered = local - viewport.size * 0.5;
        Vec2::new(centered.x / self.zoom - self.pan.x, self.pan.y - centered.y / self.zoom)
    }

    pub fn world_to_screen(&self, world: Vec2, viewport: &ViewportRect) -> Vec2 {
        let local = viewport.size * 0.5
            + Vec2::new((self.pan.x + world.x) * self.zoom, (self.pan.y - world.y) * self.zoom);
        viewport.local_to_window(local)
    }

    /// Zoom about the cursor: the world point under it must not move.
    pub fn apply_wheel_zoom(&mut self, window_px: Vec2, steps: f32, viewport: &ViewportRect) {
        if steps == 0.0 {
            return;
        }
        let anchor = self.screen_to_world(window_px, viewport);
        let factor = if steps > 0.0 {
            ZOOM_IN_FACTOR.powf(steps)
        } else {
            ZOOM_OUT_FACTOR.powf(-steps)
        };
        self.zoom = (self.zoom * factor).clamp(self.zoom_limits.0, self.zoom_limits.1);

        let centered = viewport.window_to_local(window_px) - viewport.size * 0.5;
        self.pan.x = centered.x / self.zoom - anchor.x;
        self.pan.y = anchor.y + centered.y / self.zoom;
    }

    /// Middle button, alt+left, and left-while-space-held all pan the camera.
    pub fn should_start_drag(&self, button: PointerButton, modifiers: Modifiers, space_held: bool) -> bool {
        match button {
            PointerButton::Middle => true,
            PointerButton::Left => modifiers.contains(Modifiers::ALT) || space_held,
            PointerButton::Right => false,
        }
    }

    pub fn start_drag(&mut self, window_px: Vec2) {
        self.drag_anchor = Some(window_px);
    }

    pub fn drag(&mut self, window_px: Vec2, viewport: &ViewportRect) {
        let Some(anchor) = self.drag_anchor else { return };
        let delta_local = (window_px - anchor) / viewport.dpr();
        self.pan += delta_local / self.zoom;
        self.drag_anchor = Some(window_px);
    }

    pub fn stop_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    pub fn cursor(&self, space_held: bool) -> CursorIcon {
        if self.is_dragging() {
            CursorIcon::Grabbing
        } else if space_held {
            CursorIcon::Grab
        } else {
            CursorIcon::Default
        }
    }

    pub fn focus_on(&mut self, world: Vec2) {
        self.pan = Vec2::new(-world.x, world.y);
    }

    /// Arrow-key nudge of the selected entity: one world unit, or the grid
    /// step while the snap modifier is held. Exactly one mutator call per key
    /// event so the host undo history sees one step.
    pub fn nudge_selection(
        &self,
        store: &mut dyn SceneStore,
        direction: Vec2,
        snap: bool,
        grid_size: f32,
    ) -> bool {
        let Some(id) = store.selected_entity() else { return false };
        let Some(transform) = store.world_transform(id) else { return false };
        let step = if snap { grid_size.max(f32::EPSILON) } else { 1.0 };
        let new_position = transform.position + direction * step;
        store.update_property(
            id,
            components::TRANSFORM,
            properties::POSITION,
            PropertyValue::Vec2(transform.position),
            PropertyValue::Vec2(new_position),
        );
        true
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}
