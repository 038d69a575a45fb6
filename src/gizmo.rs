use crate::overlay::{
    self, OverlayFrame, AXIS_X_COLOR, AXIS_Y_COLOR, HANDLE_COLOR, HANDLE_HOVER_COLOR,
};
use crate::store::{components, properties, EntityId, PropertyValue, SceneStore, WorldTransform};
use crate::wrap_angle;
use glam::{EulerRot, Quat, Vec2, Vec3};
use winit::window::CursorIcon;

pub(crate) const GIZMO_CENTER_RADIUS_PX: f32 = 10.0;
pub(crate) const GIZMO_AXIS_LENGTH_PX: f32 = 56.0;
pub(crate) const GIZMO_AXIS_THICKNESS_PX: f32 = 8.0;
pub(crate) const GIZMO_AXIS_DEADZONE_PX: f32 = 12.0;
pub(crate) const GIZMO_SCALE_HANDLE_SIZE_PX: f32 = 12.0;
pub(crate) const GIZMO_ROTATE_INNER_RADIUS_PX: f32 = 40.0;
pub(crate) const GIZMO_ROTATE_OUTER_RADIUS_PX: f32 = 54.0;
pub(crate) const SCALE_DRAG_SENSITIVITY: f32 = 0.02;
pub(crate) const SCALE_FLOOR: f32 = 0.01;

pub const MODE_SELECT: &str = "select";
pub const MODE_MOVE: &str = "move";
pub const MODE_ROTATE: &str = "rotate";
pub const MODE_SCALE: &str = "scale";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GizmoAxis {
    X,
    Y,
    Both,
}

impl GizmoAxis {
    pub fn cursor(self) -> CursorIcon {
        match self {
            GizmoAxis::X => CursorIcon::EwResize,
            GizmoAxis::Y => CursorIcon::NsResize,
            GizmoAxis::Both => CursorIcon::Move,
        }
    }

    pub fn vector(self) -> Vec2 {
        match self {
            GizmoAxis::X => Vec2::X,
            GizmoAxis::Y => Vec2::Y,
            GizmoAxis::Both => Vec2::ONE,
        }
    }
}

/// Snapshot handed to mode callbacks: the primary selected entity's current
/// transform plus the interaction parameters of this event.
#[derive(Clone, Copy, Debug)]
pub struct GizmoContext {
    pub entity: EntityId,
    pub transform: WorldTransform,
    pub zoom: f32,
    /// Snap modifier (grid/angle/step rounding).
    pub snap: bool,
    /// Constrain modifier (dominant-axis lock, uniform scale).
    pub constrain: bool,
    pub grid_size: f32,
    pub rotate_snap_degrees: f32,
    pub scale_snap_step: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CapturedValue {
    Position(Vec2),
    Rotation { euler_degrees: Vec3, pointer_angle: f32 },
    Scale(Vec2),
}

/// Transient per-drag state, discarded when the drag ends.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragCapture {
    pub axis: GizmoAxis,
    pub value: CapturedValue,
    pub pointer_world: Vec2,
    pub pivot: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PropertyEdit {
    pub component: &'static str,
    pub property: &'static str,
    pub old_value: PropertyValue,
    pub new_value: PropertyValue,
}

/// One manipulation mode. Handle layout is laid out in screen pixels and
/// divided by the zoom so handles keep a constant on-screen size.
pub trait GizmoMode {
    fn id(&self) -> &'static str;

    fn shortcut(&self) -> Option<char> {
        None
    }

    /// False for plain selection modes that expose no handles.
    fn manipulates(&self) -> bool {
        true
    }

    fn hit_test(&self, ctx: &GizmoContext, pointer_world: Vec2) -> Option<GizmoAxis>;

    fn capture(&self, ctx: &GizmoContext, pointer_world: Vec2, axis: GizmoAxis) -> CapturedValue;

    /// Turns the captured start value plus the current pointer into a
    /// property edit against the current transform. `None` means no change
    /// this event.
    fn drag_edit(
        &self,
        ctx: &GizmoContext,
        capture: &DragCapture,
        pointer_world: Vec2,
    ) -> Option<PropertyEdit>;

    fn cursor(&self, axis: GizmoAxis) -> CursorIcon {
        axis.cursor()
    }

    fn draw(&self, ctx: &GizmoContext, hover: Option<GizmoAxis>, frame: &mut OverlayFrame);
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum GizmoState {
    Idle,
    Hovered(GizmoAxis),
    Dragging(DragCapture),
}

#[derive(Clone, Copy, Debug)]
pub struct GizmoSettings {
    pub grid_size: f32,
    pub rotate_snap_degrees: f32,
    pub scale_snap_step: f32,
}

impl Default for GizmoSettings {
    fn default() -> Self {
        Self { grid_size: 1.0, rotate_snap_degrees: 15.0, scale_snap_step: 0.1 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GizmoMoveResponse {
    pub redraw: bool,
    pub cursor: CursorIcon,
}

pub struct GizmoManager {
    modes: Vec<Box<dyn GizmoMode>>,
    active: usize,
    state: GizmoState,
}

impl GizmoManager {
    /// Registry preloaded with the built-in modes, in toolbar order.
    pub fn with_builtin_modes() -> Self {
        let mut manager = Self { modes: Vec::new(), active: 0, state: GizmoState::Idle };
        manager.register_mode(Box::new(SelectMode));
        manager.register_mode(Box::new(MoveMode));
        manager.register_mode(Box::new(RotateMode));
        manager.register_mode(Box::new(ScaleMode));
        manager
    }

    /// Registration order is iteration order; the toolbar relies on it.
    pub fn register_mode(&mut self, mode: Box<dyn GizmoMode>) {
        self.modes.push(mode);
    }

    pub fn modes(&self) -> impl Iterator<Item = &dyn GizmoMode> {
        self.modes.iter().map(|m| m.as_ref())
    }

    pub fn active_mode(&self) -> &dyn GizmoMode {
        self.modes[self.active].as_ref()
    }

    pub fn set_active_mode(&mut self, id: &str) -> bool {
        match self.modes.iter().position(|m| m.id() == id) {
            Some(index) => {
                if index != self.active {
                    self.active = index;
                    self.state = GizmoState::Idle;
                }
                true
            }
            None => false,
        }
    }

    pub fn mode_for_shortcut(&self, ch: char) -> Option<&'static str> {
        self.modes.iter().find(|m| m.shortcut() == Some(ch)).map(|m| m.id())
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GizmoState::Dragging(_))
    }

    pub fn hovered_axis(&self) -> Option<GizmoAxis> {
        match self.state {
            GizmoState::Hovered(axis) => Some(axis),
            GizmoState::Dragging(capture) => Some(capture.axis),
            GizmoState::Idle => None,
        }
    }

    fn selection_context(
        &self,
        store: &dyn SceneStore,
        zoom: f32,
        snap: bool,
        constrain: bool,
        settings: &GizmoSettings,
    ) -> Option<GizmoContext> {
        let entity = store.selected_entity()?;
        let transform = store.world_transform(entity)?;
        Some(GizmoContext {
            entity,
            transform,
            zoom: zoom.max(f32::EPSILON),
            snap,
            constrain,
            grid_size: settings.grid_size,
            rotate_snap_degrees: settings.rotate_snap_degrees,
            scale_snap_step: settings.scale_snap_step,
        })
    }

    /// Claim attempt: hit-test the active mode's handles against the primary
    /// selected entity and capture the pre-drag value on success.
    pub fn on_mouse_down(
        &mut self,
        store: &dyn SceneStore,
        zoom: f32,
        snap: bool,
        constrain: bool,
        settings: &GizmoSettings,
        pointer_world: Vec2,
    ) -> bool {
        if !self.active_mode().manipulates() {
            return false;
        }
        let Some(ctx) = self.selection_context(store, zoom, snap, constrain, settings) else {
            return false;
        };
        let mode = self.modes[self.active].as_ref();
        let Some(axis) = mode.hit_test(&ctx, pointer_world) else {
            return false;
        };
        let value = mode.capture(&ctx, pointer_world, axis);
        self.state = GizmoState::Dragging(DragCapture {
            axis,
            value,
            pointer_world,
            pivot: ctx.transform.position,
        });
        true
    }

    pub fn on_mouse_move(
        &mut self,
        store: &mut dyn SceneStore,
        zoom: f32,
        snap: bool,
        constrain: bool,
        settings: &GizmoSettings,
        pointer_world: Vec2,
    ) -> GizmoMoveResponse {
        match self.state {
            GizmoState::Dragging(capture) => {
                // Selection deleted mid-drag: the drag becomes a no-op.
                let Some(ctx) = self.selection_context(store, zoom, snap, constrain, settings) else {
                    self.state = GizmoState::Idle;
                    return GizmoMoveResponse { redraw: true, cursor: CursorIcon::Default };
                };
                let mode = self.modes[self.active].as_ref();
                if let Some(edit) = mode.drag_edit(&ctx, &capture, pointer_world) {
                    store.update_property(
                        ctx.entity,
                        edit.component,
                        edit.property,
                        edit.old_value,
                        edit.new_value,
                    );
                }
                GizmoMoveResponse { redraw: true, cursor: mode.cursor(capture.axis) }
            }
            _ => self.update_hover(store, zoom, snap, constrain, settings, pointer_world),
        }
    }

    /// Hover pass: redraw only when the hovered handle changes.
    fn update_hover(
        &mut self,
        store: &dyn SceneStore,
        zoom: f32,
        snap: bool,
        constrain: bool,
        settings: &GizmoSettings,
        pointer_world: Vec2,
    ) -> GizmoMoveResponse {
        let previous = match self.state {
            GizmoState::Hovered(axis) => Some(axis),
            _ => None,
        };
        let hover = if self.active_mode().manipulates() {
            self.selection_context(store, zoom, snap, constrain, settings)
                .and_then(|ctx| self.modes[self.active].hit_test(&ctx, pointer_world))
        } else {
            None
        };
        self.state = match hover {
            Some(axis) => GizmoState::Hovered(axis),
            None => GizmoState::Idle,
        };
        let cursor = match hover {
            Some(axis) => self.modes[self.active].cursor(axis),
            None => CursorIcon::Default,
        };
        GizmoMoveResponse { redraw: hover != previous, cursor }
    }

    pub fn on_mouse_up(&mut self) {
        self.state = GizmoState::Idle;
    }

    pub fn cancel(&mut self) {
        self.state = GizmoState::Idle;
    }

    /// Click-on-handle check used to suppress click-select.
    pub fn hit_test(
        &self,
        store: &dyn SceneStore,
        zoom: f32,
        settings: &GizmoSettings,
        pointer_world: Vec2,
    ) -> bool {
        if !self.active_mode().manipulates() {
            return false;
        }
        self.selection_context(store, zoom, false, false, settings)
            .and_then(|ctx| self.modes[self.active].hit_test(&ctx, pointer_world))
            .is_some()
    }

    pub fn draw(
        &self,
        store: &dyn SceneStore,
        zoom: f32,
        settings: &GizmoSettings,
        frame: &mut OverlayFrame,
    ) {
        if !self.active_mode().manipulates() {
            return;
        }
        if let Some(ctx) = self.selection_context(store, zoom, false, false, settings) {
            self.modes[self.active].draw(&ctx, self.hovered_axis(), frame);
        }
    }
}

fn snap_to_step(value: f32, step: f32) -> f32 {
    if step <= f32::EPSILON {
        value
    } else {
        (value / step).round() * step
    }
}

fn axis_color(axis: GizmoAxis, hover: Option<GizmoAxis>) -> overlay::Color {
    if hover == Some(axis) {
        HANDLE_HOVER_COLOR
    } else {
        match axis {
            GizmoAxis::X => AXIS_X_COLOR,
            GizmoAxis::Y => AXIS_Y_COLOR,
            GizmoAxis::Both => HANDLE_COLOR,
        }
    }
}

/// Shared arm layout for the move and scale gizmos: a center disc plus axis
/// arms, tested in pixel space around the pivot.
fn hit_test_axis_arms(ctx: &GizmoContext, pointer_world: Vec2, center_radius_px: f32) -> Option<GizmoAxis> {
    let rel_px = (pointer_world - ctx.transform.position) * ctx.zoom;
    if rel_px.length() <= center_radius_px {
        return Some(GizmoAxis::Both);
    }
    let half_thickness = GIZMO_AXIS_THICKNESS_PX * 0.5;
    if rel_px.x >= GIZMO_AXIS_DEADZONE_PX
        && rel_px.x <= GIZMO_AXIS_LENGTH_PX + GIZMO_SCALE_HANDLE_SIZE_PX
        && rel_px.y.abs() <= half_thickness.max(GIZMO_SCALE_HANDLE_SIZE_PX * 0.5)
    {
        return Some(GizmoAxis::X);
    }
    if rel_px.y >= GIZMO_AXIS_DEADZONE_PX
        && rel_px.y <= GIZMO_AXIS_LENGTH_PX + GIZMO_SCALE_HANDLE_SIZE_PX
        && rel_px.x.abs() <= half_thickness.max(GIZMO_SCALE_HANDLE_SIZE_PX * 0.5)
    {
        return Some(GizmoAxis::Y);
    }
    None
}

fn draw_axis_arms(ctx: &GizmoContext, hover: Option<GizmoAxis>, frame: &mut OverlayFrame) {
    let pivot = ctx.transform.position;
    let len = GIZMO_AXIS_LENGTH_PX / ctx.zoom;
    let width = 2.0 / ctx.zoom;
    frame.line(pivot, pivot + Vec2::X * len, width, axis_color(GizmoAxis::X, hover));
    frame.line(pivot, pivot + Vec2::Y * len, width, axis_color(GizmoAxis::Y, hover));
    frame.disc(pivot, GIZMO_CENTER_RADIUS_PX / ctx.zoom, axis_color(GizmoAxis::Both, hover));
}

struct SelectMode;

impl GizmoMode for SelectMode {
    fn id(&self) -> &'static str {
        MODE_SELECT
    }

    fn shortcut(&self) -> Option<char> {
        Some('q')
    }

    fn manipulates(&self) -> bool {
        false
    }

    fn hit_test(&self, _ctx: &GizmoContext, _pointer_world: Vec2) -> Option<GizmoAxis> {
        None
    }

    fn capture(&self, ctx: &GizmoContext, _pointer_world: Vec2, _axis: GizmoAxis) -> CapturedValue {
        CapturedValue::Position(ctx.transform.position)
    }

    fn drag_edit(
        &self,
        _ctx: &GizmoContext,
        _capture: &DragCapture,
        _pointer_world: Vec2,
    ) -> Option<PropertyEdit> {
        None
    }

    fn draw(&self, _ctx: &GizmoContext, _hover: Option<GizmoAxis>, _frame: &mut OverlayFrame) {}
}

struct MoveMode;

impl GizmoMode for MoveMode {
    fn id(&self) -> &'static str {
        MODE_MOVE
    }

    fn shortcut(&self) -> Option<char> {
        Some('w')
    }

    fn hit_test(&self, ctx: &GizmoContext, pointer_world: Vec2) -> Option<GizmoAxis> {
        hit_test_axis_arms(ctx, pointer_world, GIZMO_CENTER_RADIUS_PX)
    }

    fn capture(&self, ctx: &GizmoContext, _pointer_world: Vec2, _axis: GizmoAxis) -> CapturedValue {
        CapturedValue::Position(ctx.transform.position)
    }

    fn drag_edit(
        &self,
        ctx: &GizmoContext,
        capture: &DragCapture,
        pointer_world: Vec2,
    ) -> Option<PropertyEdit> {
        let CapturedValue::Position(start) = capture.value else { return None };
        let delta = pointer_world - capture.pointer_world;

        let mut axis = capture.axis;
        // Shift during a free drag locks to the dominant axis.
        if axis == GizmoAxis::Both && ctx.constrain && delta.length_squared() > f32::EPSILON {
            axis = if delta.x.abs() >= delta.y.abs() { GizmoAxis::X } else { GizmoAxis::Y };
        }

        let mut position = start;
        match axis {
            GizmoAxis::X => position.x += delta.x,
            GizmoAxis::Y => position.y += delta.y,
            GizmoAxis::Both => position += delta,
        }
        if ctx.snap {
            match axis {
                GizmoAxis::X => position.x = snap_to_step(position.x, ctx.grid_size),
                GizmoAxis::Y => position.y = snap_to_step(position.y, ctx.grid_size),
                GizmoAxis::Both => {
                    position.x = snap_to_step(position.x, ctx.grid_size);
                    position.y = snap_to_step(position.y, ctx.grid_size);
                }
            }
        }

        let current = ctx.transform.position;
        if (position - current).length_squared() <= f32::EPSILON {
            return None;
        }
        Some(PropertyEdit {
            component: components::TRANSFORM,
            property: properties::POSITION,
            old_value: PropertyValue::Vec2(current),
            new_value: PropertyValue::Vec2(position),
        })
    }

    fn draw(&self, ctx: &GizmoContext, hover: Option<GizmoAxis>, frame: &mut OverlayFrame) {
        draw_axis_arms(ctx, hover, frame);
        // Arrow heads.
        let pivot = ctx.transform.position;
        let len = GIZMO_AXIS_LENGTH_PX / ctx.zoom;
        let head = GIZMO_SCALE_HANDLE_SIZE_PX * 0.5 / ctx.zoom;
        frame.disc(pivot + Vec2::X * (len + head), head, axis_color(GizmoAxis::X, hover));
        frame.disc(pivot + Vec2::Y * (len + head), head, axis_color(GizmoAxis::Y, hover));
    }
}

struct RotateMode;

impl GizmoMode for RotateMode {
    fn id(&self) -> &'static str {
        MODE_ROTATE
    }

    fn shortcut(&self) -> Option<char> {
        Some('e')
    }

    fn hit_test(&self, ctx: &GizmoContext, pointer_world: Vec2) -> Option<GizmoAxis> {
        let dist_px = (pointer_world - ctx.transform.position).length() * ctx.zoom;
        if dist_px >= GIZMO_ROTATE_INNER_RADIUS_PX && dist_px <= GIZMO_ROTATE_OUTER_RADIUS_PX {
            Some(GizmoAxis::Both)
        } else {
            None
        }
    }

    fn capture(&self, ctx: &GizmoContext, pointer_world: Vec2, _axis: GizmoAxis) -> CapturedValue {
        let rel = pointer_world - ctx.transform.position;
        CapturedValue::Rotation {
            euler_degrees: quat_to_euler_degrees(ctx.transform.rotation),
            pointer_angle: rel.y.atan2(rel.x),
        }
    }

    fn drag_edit(
        &self,
        ctx: &GizmoContext,
        capture: &DragCapture,
        pointer_world: Vec2,
    ) -> Option<PropertyEdit> {
        let CapturedValue::Rotation { euler_degrees, pointer_angle } = capture.value else {
            return None;
        };
        let rel = pointer_world - capture.pivot;
        if rel.length_squared() <= f32::EPSILON {
            return None;
        }
        let current_angle = rel.y.atan2(rel.x);
        let mut delta_degrees = wrap_angle(current_angle - pointer_angle).to_degrees();
        if ctx.snap {
            delta_degrees = snap_to_step(delta_degrees, ctx.rotate_snap_degrees);
        }
        let target = Vec3::new(euler_degrees.x, euler_degrees.y, euler_degrees.z + delta_degrees);
        let new_rotation = euler_degrees_to_quat(target);

        let current = ctx.transform.rotation;
        if new_rotation.abs_diff_eq(current, 1e-6) {
            return None;
        }
        Some(PropertyEdit {
            component: components::TRANSFORM,
            property: properties::ROTATION,
            old_value: PropertyValue::Quat(current),
            new_value: PropertyValue::Quat(new_rotation),
        })
    }

    fn cursor(&self, _axis: GizmoAxis) -> CursorIcon {
        CursorIcon::Move
    }

    fn draw(&self, ctx: &GizmoContext, hover: Option<GizmoAxis>, frame: &mut OverlayFrame) {
        let pivot = ctx.transform.position;
        let inner = GIZMO_ROTATE_INNER_RADIUS_PX / ctx.zoom;
        let outer = GIZMO_ROTATE_OUTER_RADIUS_PX / ctx.zoom;
        let width = 2.0 / ctx.zoom;
        let color = axis_color(GizmoAxis::Both, hover);
        frame.circle(pivot, inner, width, color);
        frame.circle(pivot, outer, width, color);
        // Current-angle tick.
        let z_radians = quat_to_euler_degrees(ctx.transform.rotation).z.to_radians();
        let dir = Vec2::new(z_radians.cos(), z_radians.sin());
        frame.line(pivot + dir * inner, pivot + dir * outer, width, color);
    }
}

struct ScaleMode;

impl ScaleMode {
    fn uniform_delta(delta: Vec2) -> f32 {
        (delta.x + delta.y) * 0.5
    }
}

impl GizmoMode for ScaleMode {
    fn id(&self) -> &'static str {
        MODE_SCALE
    }

    fn shortcut(&self) -> Option<char> {
        Some('r')
    }

    fn hit_test(&self, ctx: &GizmoContext, pointer_world: Vec2) -> Option<GizmoAxis> {
        hit_test_axis_arms(ctx, pointer_world, GIZMO_SCALE_HANDLE_SIZE_PX)
    }

    fn capture(&self, ctx: &GizmoContext, _pointer_world: Vec2, _axis: GizmoAxis) -> CapturedValue {
        CapturedValue::Scale(ctx.transform.scale)
    }

    fn drag_edit(
        &self,
        ctx: &GizmoContext,
        capture: &DragCapture,
        pointer_world: Vec2,
    ) -> Option<PropertyEdit> {
        let CapturedValue::Scale(start) = capture.value else { return None };
        let delta = pointer_world - capture.pointer_world;

        let mut scale = start;
        match capture.axis {
            GizmoAxis::X => {
                let d = delta.x * SCALE_DRAG_SENSITIVITY;
                scale.x = start.x + d;
                // Shift makes an axis handle scale uniformly.
                if ctx.constrain {
                    scale.y = start.y + d;
                }
            }
            GizmoAxis::Y => {
                let d = delta.y * SCALE_DRAG_SENSITIVITY;
                scale.y = start.y + d;
                if ctx.constrain {
                    scale.x = start.x + d;
                }
            }
            GizmoAxis::Both => {
                let d = Self::uniform_delta(delta) * SCALE_DRAG_SENSITIVITY;
                scale = start + Vec2::splat(d);
            }
        }
        if ctx.snap {
            scale.x = snap_to_step(scale.x, ctx.scale_snap_step);
            scale.y = snap_to_step(scale.y, ctx.scale_snap_step);
        }
        // Scale must never reach zero or flip sign under the floor.
        scale.x = scale.x.max(SCALE_FLOOR);
        scale.y = scale.y.max(SCALE_FLOOR);

        let current = ctx.transform.scale;
        if (scale - current).length_squared() <= f32::EPSILON {
            return None;
        }
        Some(PropertyEdit {
            component: components::TRANSFORM,
            property: properties::SCALE,
            old_value: PropertyValue::Vec2(current),
            new_value: PropertyValue::Vec2(scale),
        })
    }

    fn draw(&self, ctx: &GizmoContext, hover: Option<GizmoAxis>, frame: &mut OverlayFrame) {
        draw_axis_arms(ctx, hover, frame);
        let pivot = ctx.transform.position;
        let len = GIZMO_AXIS_LENGTH_PX / ctx.zoom;
        let half = GIZMO_SCALE_HANDLE_SIZE_PX * 0.5 / ctx.zoom;
        for (axis, center) in [
            (GizmoAxis::X, pivot + Vec2::X * (len + half)),
            (GizmoAxis::Y, pivot + Vec2::Y * (len + half)),
            (GizmoAxis::Both, pivot),
        ] {
            let rect =
                crate::geometry::WorldRect::from_center_half(center, Vec2::splat(half));
            frame.rect_fill(rect, axis_color(axis, hover));
        }
    }
}

/// ZYX (yaw-pitch-roll) decomposition, degrees. The asin operand is clamped
/// so the gimbal-lock boundary yields ±90° instead of NaN.
pub fn quat_to_euler_degrees(q: Quat) -> Vec3 {
    let roll = (2.0 * (q.w * q.x + q.y * q.z)).atan2(1.0 - 2.0 * (q.x * q.x + q.y * q.y));
    let pitch = (2.0 * (q.w * q.y - q.z * q.x)).clamp(-1.0, 1.0).asin();
    let yaw = (2.0 * (q.w * q.z + q.x * q.y)).atan2(1.0 - 2.0 * (q.y * q.y + q.z * q.z));
    Vec3::new(roll.to_degrees(), pitch.to_degrees(), yaw.to_degrees())
}

pub fn euler_degrees_to_quat(euler_degrees: Vec3) -> Quat {
    Quat::from_euler(
        EulerRot::ZYX,
        euler_degrees.z.to_radians(),
        euler_degrees.y.to_radians(),
        euler_degrees.x.to_radians(),
    )
}
