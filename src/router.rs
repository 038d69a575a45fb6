use crate::camera::{CameraController, ViewportRect};
use crate::collider::ColliderOverlay;
use crate::config::EditorConfig;
use crate::geometry::{point_hit_test, BoundsProvider};
use crate::gizmo::{GizmoManager, MODE_SELECT};
use crate::input::{InputEvent, ModifierTracker, PointerButton};
use crate::marquee::MarqueeSelection;
use crate::store::SceneStore;
use glam::Vec2;
use winit::keyboard::{Key, NamedKey};
use winit::window::CursorIcon;

/// Net pointer travel below this is a click, not a drag. Also the tolerance
/// for "same point" when cycling through overlapping entities.
pub const CLICK_DRAG_THRESHOLD_PX: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragClaim {
    Camera,
    Gizmo,
    Collider,
    Marquee,
}

/// Document-level listener registration held for the duration of a claimed
/// drag so the pointer keeps tracking outside the canvas. The router owns
/// the acquire/release balance; release happens on every exit path.
pub trait DragListenerHost {
    fn acquire_drag_listeners(&mut self) {}
    fn release_drag_listeners(&mut self) {}
}

pub struct NoopListenerHost;

impl DragListenerHost for NoopListenerHost {}

/// Everything one event needs, borrowed for the duration of the call. The
/// store and the manipulators stay host-owned and panel-owned respectively.
pub struct RouterContext<'a> {
    pub store: &'a mut dyn SceneStore,
    pub bounds: &'a dyn BoundsProvider,
    pub listeners: &'a mut dyn DragListenerHost,
    pub camera: &'a mut CameraController,
    pub gizmos: &'a mut GizmoManager,
    pub colliders: &'a mut ColliderOverlay,
    pub marquee: &'a mut MarqueeSelection,
    pub viewport: ViewportRect,
    pub config: &'a EditorConfig,
    pub show_colliders: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RouterResponse {
    pub redraw: bool,
    pub cursor: CursorIcon,
}

#[derive(Clone, Copy, Debug)]
struct PointerDownState {
    button: PointerButton,
    position: Vec2,
    max_travel: f32,
}

#[derive(Clone, Copy, Debug)]
struct ClickCycle {
    position: Vec2,
    index: usize,
}

/// Owns one pointer-down-to-pointer-up interaction span and decides, in
/// fixed priority order, which manipulator claims it: camera pan, gizmo
/// drag, collider drag, marquee, click-select. Subsequent move/up events go
/// only to the claimant.
pub struct InputRouter {
    claim: Option<DragClaim>,
    listeners_held: bool,
    pointer_pos: Vec2,
    down: Option<PointerDownState>,
    skip_next_click: bool,
    click_cycle: Option<ClickCycle>,
    modifiers: ModifierTracker,
}

impl InputRouter {
    pub fn new() -> Self {
        Self {
            claim: None,
            listeners_held: false,
            pointer_pos: Vec2::ZERO,
            down: None,
            skip_next_click: false,
            click_cycle: None,
            modifiers: ModifierTracker::default(),
        }
    }

    pub fn active_claim(&self) -> Option<DragClaim> {
        self.claim
    }

    pub fn listeners_held(&self) -> bool {
        self.listeners_held
    }

    pub fn modifiers(&self) -> &ModifierTracker {
        &self.modifiers
    }

    pub fn handle_event(&mut self, event: &InputEvent, ctx: &mut RouterContext) -> RouterResponse {
        let redraw = match event {
            InputEvent::PointerMoved { position } => self.on_pointer_moved(*position, ctx),
            InputEvent::PointerButton { button, pressed: true } => self.on_pointer_down(*button, ctx),
            InputEvent::PointerButton { button, pressed: false } => self.on_pointer_up(*button, ctx),
            InputEvent::Wheel { delta } => {
                ctx.camera.apply_wheel_zoom(self.pointer_pos, *delta, &ctx.viewport);
                true
            }
            InputEvent::Key { key, pressed } => self.on_key(key, *pressed, ctx),
            InputEvent::PointerLeft => self.on_pointer_left(ctx),
            InputEvent::Other => false,
        };
        RouterResponse { redraw, cursor: self.cursor_for(ctx) }
    }

    /// Ends any active drag and releases document listeners. Safe to call at
    /// any time, including mid-drag teardown of the whole panel.
    pub fn dispose(&mut self, ctx: &mut RouterContext) {
        self.cancel_active_drag(ctx);
        self.down = None;
        self.skip_next_click = false;
        self.modifiers.clear();
    }

    fn on_pointer_down(&mut self, button: PointerButton, ctx: &mut RouterContext) -> bool {
        // A second button during an owned interaction is ignored.
        if self.down.is_some() || self.claim.is_some() {
            return false;
        }
        self.down =
            Some(PointerDownState { button, position: self.pointer_pos, max_travel: 0.0 });

        let settings = ctx.config.gizmo_settings();
        let world = ctx.camera.screen_to_world(self.pointer_pos, &ctx.viewport);
        let zoom = ctx.camera.zoom();
        let snap = self.modifiers.ctrl_held();
        let constrain = self.modifiers.shift_held();

        // Fixed claim priority; first success owns the interaction span.
        if ctx.camera.should_start_drag(button, self.modifiers.modifiers(), self.modifiers.space_held())
        {
            ctx.camera.start_drag(self.pointer_pos);
            self.claim = Some(DragClaim::Camera);
        } else if button == PointerButton::Left {
            if ctx.gizmos.on_mouse_down(ctx.store, zoom, snap, constrain, &settings, world) {
                self.claim = Some(DragClaim::Gizmo);
            } else if ctx.show_colliders
                && ctx.store.selected_entity().is_some()
                && ctx.colliders.on_drag_start(ctx.store, world, zoom)
            {
                self.claim = Some(DragClaim::Collider);
            } else if ctx.gizmos.active_mode().id() == MODE_SELECT
                && point_hit_test(ctx.store, ctx.bounds, world).is_empty()
            {
                ctx.marquee.start(world, self.modifiers.shift_held());
                self.claim = Some(DragClaim::Marquee);
            }
        }

        if self.claim.is_some() {
            self.acquire_listeners(ctx.listeners);
            true
        } else {
            false
        }
    }

    fn on_pointer_moved(&mut self, position: Vec2, ctx: &mut RouterContext) -> bool {
        self.pointer_pos = position;
        if let Some(down) = self.down.as_mut() {
            down.max_travel = down.max_travel.max(position.distance(down.position));
        }

        let settings = ctx.config.gizmo_settings();
        let world = ctx.camera.screen_to_world(position, &ctx.viewport);
        let zoom = ctx.camera.zoom();
        let snap = self.modifiers.ctrl_held();
        let constrain = self.modifiers.shift_held();

        match self.claim {
            Some(DragClaim::Camera) => {
                ctx.camera.drag(position, &ctx.viewport);
                true
            }
            Some(DragClaim::Gizmo) => {
                ctx.gizmos
                    .on_mouse_move(ctx.store, zoom, snap, constrain, &settings, world)
                    .redraw
            }
            Some(DragClaim::Collider) => ctx.colliders.on_drag(ctx.store, world),
            Some(DragClaim::Marquee) => ctx.marquee.update(world),
            None => {
                // Hover feedback only; gizmo handles shadow collider handles.
                let gizmo = ctx
                    .gizmos
                    .on_mouse_move(ctx.store, zoom, snap, constrain, &settings, world);
                let mut redraw = gizmo.redraw;
                if ctx.show_colliders {
                    redraw |= ctx.colliders.update_hover(ctx.store, world, zoom).redraw;
                }
                redraw
            }
        }
    }

    fn on_pointer_up(&mut self, button: PointerButton, ctx: &mut RouterContext) -> bool {
        let Some(down) = self.down else { return false };
        if down.button != button {
            return false;
        }
        self.down = None;

        let had_claim = self.claim.take();
        match had_claim {
            Some(DragClaim::Camera) => ctx.camera.stop_drag(),
            Some(DragClaim::Gizmo) => ctx.gizmos.on_mouse_up(),
            Some(DragClaim::Collider) => ctx.colliders.on_drag_end(),
            Some(DragClaim::Marquee) => ctx.marquee.finish(ctx.store, ctx.bounds),
            None => {}
        }
        self.release_listeners(ctx.listeners);

        let suppress_click =
            had_claim.is_some() || down.max_travel > CLICK_DRAG_THRESHOLD_PX || self.skip_next_click;
        self.skip_next_click = false;
        if !suppress_click {
            self.click_select(down.position, ctx);
        }
        true
    }

    /// Click-select with cycling: repeated clicks on the same point step
    /// through the overlapping hits front-to-back instead of re-selecting
    /// the top one.
    fn click_select(&mut self, position: Vec2, ctx: &mut RouterContext) {
        let world = ctx.camera.screen_to_world(position, &ctx.viewport);
        let settings = ctx.config.gizmo_settings();
        // A click that landed on a gizmo handle never changes the selection.
        if ctx.gizmos.hit_test(ctx.store, ctx.camera.zoom(), &settings, world) {
            return;
        }
        let hits = point_hit_test(ctx.store, ctx.bounds, world);
        if hits.is_empty() {
            ctx.store.select_entity(None);
            self.click_cycle = None;
            return;
        }
        let index = match self.click_cycle {
            Some(cycle) if cycle.position.distance(position) <= CLICK_DRAG_THRESHOLD_PX => {
                (cycle.index + 1) % hits.len()
            }
            _ => 0,
        };
        ctx.store.select_entity(Some(hits[index]));
        self.click_cycle = Some(ClickCycle { position, index });
    }

    fn on_key(&mut self, key: &Key, pressed: bool, ctx: &mut RouterContext) -> bool {
        self.modifiers.apply_key(key, pressed);
        if !pressed {
            return false;
        }
        match key {
            Key::Character(text) => {
                let Some(ch) = text.to_lowercase().chars().next() else { return false };
                if ch == 'd' && self.modifiers.command_held() {
                    ctx.store.duplicate_selected_entities();
                    return true;
                }
                if ch == 'f' {
                    return self.focus_selection(ctx);
                }
                // Mode shortcuts come from the registry; ignored mid-drag so
                // a claimed gizmo interaction is not yanked away.
                if self.claim.is_none() {
                    if let Some(mode) = ctx.gizmos.mode_for_shortcut(ch) {
                        return ctx.gizmos.set_active_mode(mode);
                    }
                }
                false
            }
            Key::Named(NamedKey::Delete) | Key::Named(NamedKey::Backspace) => {
                ctx.store.delete_selected_entities();
                true
            }
            Key::Named(NamedKey::ArrowUp) => self.nudge(Vec2::Y, ctx),
            Key::Named(NamedKey::ArrowDown) => self.nudge(-Vec2::Y, ctx),
            Key::Named(NamedKey::ArrowLeft) => self.nudge(-Vec2::X, ctx),
            Key::Named(NamedKey::ArrowRight) => self.nudge(Vec2::X, ctx),
            _ => false,
        }
    }

    fn nudge(&self, direction: Vec2, ctx: &mut RouterContext) -> bool {
        ctx.camera.nudge_selection(
            ctx.store,
            direction,
            self.modifiers.ctrl_held(),
            ctx.config.grid_size,
        )
    }

    fn focus_selection(&self, ctx: &mut RouterContext) -> bool {
        let Some(id) = ctx.store.selected_entity() else { return false };
        let Some(transform) = ctx.store.world_transform(id) else { return false };
        ctx.camera.focus_on(transform.position);
        true
    }

    /// Pointer left the canvas. With a button held the claimed drag keeps
    /// tracking through the document listeners; with no button held any
    /// leftover drag state is stale and gets torn down.
    fn on_pointer_left(&mut self, ctx: &mut RouterContext) -> bool {
        if self.down.is_some() {
            return false;
        }
        let had_state = self.claim.is_some()
            || ctx.gizmos.hovered_axis().is_some()
            || ctx.colliders.hovered_handle().is_some();
        self.cancel_active_drag(ctx);
        ctx.gizmos.cancel();
        ctx.colliders.cancel();
        had_state
    }

    fn cancel_active_drag(&mut self, ctx: &mut RouterContext) {
        if let Some(claim) = self.claim.take() {
            match claim {
                DragClaim::Camera => ctx.camera.stop_drag(),
                DragClaim::Gizmo => ctx.gizmos.cancel(),
                DragClaim::Collider => ctx.colliders.cancel(),
                DragClaim::Marquee => ctx.marquee.cancel(),
            }
            if self.down.is_some() {
                self.skip_next_click = true;
            }
        }
        self.release_listeners(ctx.listeners);
    }

    fn acquire_listeners(&mut self, host: &mut dyn DragListenerHost) {
        if !self.listeners_held {
            host.acquire_drag_listeners();
            self.listeners_held = true;
        }
    }

    fn release_listeners(&mut self, host: &mut dyn DragListenerHost) {
        if self.listeners_held {
            host.release_drag_listeners();
            self.listeners_held = false;
        }
    }

    fn cursor_for(&self, ctx: &RouterContext) -> CursorIcon {
        if ctx.camera.is_dragging() {
            return CursorIcon::Grabbing;
        }
        if self.modifiers.space_held() {
            return CursorIcon::Grab;
        }
        if let Some(axis) = ctx.gizmos.hovered_axis() {
            return ctx.gizmos.active_mode().cursor(axis);
        }
        if ctx.show_colliders {
            if let Some(handle) = ctx.colliders.hovered_handle() {
                return handle.cursor();
            }
        }
        CursorIcon::Default
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}
