use crate::overlay::{OverlayFrame, COLLIDER_COLOR, HANDLE_COLOR, HANDLE_HOVER_COLOR};
use crate::store::{
    components, properties, ColliderShape, EntityId, PropertyValue, SceneStore, WorldTransform,
};
use glam::Vec2;
use smallvec::SmallVec;
use winit::window::CursorIcon;

pub(crate) const COLLIDER_HANDLE_RADIUS_PX: f32 = 6.0;
pub(crate) const COLLIDER_PARAM_FLOOR: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColliderHandle {
    HalfWidth,
    HalfHeight,
    Radius,
    CapsuleRadius,
    CapsuleHalfHeight,
}

impl ColliderHandle {
    pub fn cursor(self) -> CursorIcon {
        match self {
            ColliderHandle::HalfWidth | ColliderHandle::Radius | ColliderHandle::CapsuleRadius => {
                CursorIcon::EwResize
            }
            ColliderHandle::HalfHeight | ColliderHandle::CapsuleHalfHeight => CursorIcon::NsResize,
        }
    }

    fn component(self) -> &'static str {
        match self {
            ColliderHandle::HalfWidth | ColliderHandle::HalfHeight => components::BOX_COLLIDER,
            ColliderHandle::Radius => components::CIRCLE_COLLIDER,
            ColliderHandle::CapsuleRadius | ColliderHandle::CapsuleHalfHeight => {
                components::CAPSULE_COLLIDER
            }
        }
    }

    fn property(self) -> &'static str {
        match self {
            ColliderHandle::HalfWidth => properties::HALF_WIDTH,
            ColliderHandle::HalfHeight | ColliderHandle::CapsuleHalfHeight => properties::HALF_HEIGHT,
            ColliderHandle::Radius | ColliderHandle::CapsuleRadius => properties::RADIUS,
        }
    }
}

type HandleLayout = SmallVec<[(ColliderHandle, Vec2); 2]>;

fn handle_layout(shape: &ColliderShape, transform: &WorldTransform) -> HandleLayout {
    let center = transform.position;
    let scale = transform.scale.abs();
    let mut layout = HandleLayout::new();
    match shape {
        ColliderShape::Box { half_extents } => {
            layout.push((ColliderHandle::HalfWidth, center + Vec2::X * half_extents.x * scale.x));
            layout.push((ColliderHandle::HalfHeight, center + Vec2::Y * half_extents.y * scale.y));
        }
        ColliderShape::Circle { radius } => {
            layout.push((ColliderHandle::Radius, center + Vec2::X * *radius * scale.x));
        }
        ColliderShape::Capsule { radius, half_height } => {
            layout.push((ColliderHandle::CapsuleRadius, center + Vec2::X * *radius * scale.x));
            layout.push((
                ColliderHandle::CapsuleHalfHeight,
                center + Vec2::Y * *half_height * scale.y,
            ));
        }
    }
    layout
}

#[derive(Clone, Copy, Debug)]
struct ColliderDrag {
    entity: EntityId,
    handle: ColliderHandle,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColliderHoverResponse {
    pub redraw: bool,
    pub cursor: Option<CursorIcon>,
}

/// Drag handles for the selected entity's collider parameters. Mirrors the
/// gizmo drag lifecycle but edits one collider component's fields; the
/// router keeps the two mutually exclusive.
#[derive(Default)]
pub struct ColliderOverlay {
    drag: Option<ColliderDrag>,
    hover: Option<ColliderHandle>,
}

impl ColliderOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn hovered_handle(&self) -> Option<ColliderHandle> {
        self.drag.map(|d| d.handle).or(self.hover)
    }

    fn handle_at(
        store: &dyn SceneStore,
        entity: EntityId,
        pointer_world: Vec2,
        zoom: f32,
    ) -> Option<ColliderHandle> {
        let shape = store.collider_shape(entity)?;
        let transform = store.world_transform(entity)?;
        let hit_radius = COLLIDER_HANDLE_RADIUS_PX / zoom.max(f32::EPSILON);
        handle_layout(&shape, &transform)
            .into_iter()
            .find(|(_, pos)| pointer_world.distance(*pos) <= hit_radius)
            .map(|(handle, _)| handle)
    }

    pub fn hit_test(&self, store: &dyn SceneStore, pointer_world: Vec2, zoom: f32) -> bool {
        store
            .selected_entity()
            .and_then(|entity| Self::handle_at(store, entity, pointer_world, zoom))
            .is_some()
    }

    pub fn on_drag_start(&mut self, store: &dyn SceneStore, pointer_world: Vec2, zoom: f32) -> bool {
        let Some(entity) = store.selected_entity() else { return false };
        match Self::handle_at(store, entity, pointer_world, zoom) {
            Some(handle) => {
                self.drag = Some(ColliderDrag { entity, handle });
                true
            }
            None => false,
        }
    }

    pub fn on_drag(&mut self, store: &mut dyn SceneStore, pointer_world: Vec2) -> bool {
        let Some(drag) = self.drag else { return false };
        // Entity or collider gone mid-drag: no-op and end.
        let (Some(shape), Some(transform)) =
            (store.collider_shape(drag.entity), store.world_transform(drag.entity))
        else {
            self.drag = None;
            return true;
        };
        let scale = transform.scale.abs().max(Vec2::splat(f32::EPSILON));
        let rel = pointer_world - transform.position;

        let (old_value, new_value) = match (drag.handle, shape) {
            (ColliderHandle::HalfWidth, ColliderShape::Box { half_extents }) => {
                (half_extents.x, rel.x / scale.x)
            }
            (ColliderHandle::HalfHeight, ColliderShape::Box { half_extents }) => {
                (half_extents.y, rel.y / scale.y)
            }
            (ColliderHandle::Radius, ColliderShape::Circle { radius }) => (radius, rel.x / scale.x),
            (ColliderHandle::CapsuleRadius, ColliderShape::Capsule { radius, .. }) => {
                (radius, rel.x / scale.x)
            }
            (ColliderHandle::CapsuleHalfHeight, ColliderShape::Capsule { half_height, .. }) => {
                (half_height, rel.y / scale.y)
            }
            // Shape type changed under the drag.
            _ => {
                self.drag = None;
                return true;
            }
        };

        let new_value = new_value.max(COLLIDER_PARAM_FLOOR);
        if (new_value - old_value).abs() <= f32::EPSILON {
            return false;
        }
        store.update_property(
            drag.entity,
            drag.handle.component(),
            drag.handle.property(),
            PropertyValue::Float(old_value),
            PropertyValue::Float(new_value),
        );
        true
    }

    pub fn on_drag_end(&mut self) {
        self.drag = None;
    }

    pub fn cancel(&mut self) {
        self.drag = None;
        self.hover = None;
    }

    pub fn update_hover(
        &mut self,
        store: &dyn SceneStore,
        pointer_world: Vec2,
        zoom: f32,
    ) -> ColliderHoverResponse {
        let hover = store
            .selected_entity()
            .and_then(|entity| Self::handle_at(store, entity, pointer_world, zoom));
        let redraw = hover != self.hover;
        self.hover = hover;
        ColliderHoverResponse { redraw, cursor: hover.map(ColliderHandle::cursor) }
    }

    pub fn draw(&self, store: &dyn SceneStore, zoom: f32, frame: &mut OverlayFrame) {
        let Some(entity) = store.selected_entity() else { return };
        let (Some(shape), Some(transform)) =
            (store.collider_shape(entity), store.world_transform(entity))
        else {
            return;
        };
        let zoom = zoom.max(f32::EPSILON);
        let width = 1.5 / zoom;
        let center = transform.position;
        let scale = transform.scale.abs();

        match shape {
            ColliderShape::Box { half_extents } => {
                let rect = crate::geometry::WorldRect::from_center_half(center, half_extents * scale);
                frame.rect_outline(rect, width, COLLIDER_COLOR);
            }
            ColliderShape::Circle { radius } => {
                frame.circle(center, radius * scale.x, width, COLLIDER_COLOR);
            }
            ColliderShape::Capsule { radius, half_height } => {
                let r = radius * scale.x;
                let h = half_height * scale.y;
                frame.circle(center + Vec2::Y * h, r, width, COLLIDER_COLOR);
                frame.circle(center - Vec2::Y * h, r, width, COLLIDER_COLOR);
                frame.line(
                    center + Vec2::new(-r, h),
                    center + Vec2::new(-r, -h),
                    width,
                    COLLIDER_COLOR,
                );
                frame.line(
                    center + Vec2::new(r, h),
                    center + Vec2::new(r, -h),
                    width,
                    COLLIDER_COLOR,
                );
            }
        }

        let handle_radius = COLLIDER_HANDLE_RADIUS_PX / zoom;
        let highlighted = self.hovered_handle();
        for (handle, pos) in handle_layout(&shape, &transform) {
            let color = if highlighted == Some(handle) { HANDLE_HOVER_COLOR } else { HANDLE_COLOR };
            frame.disc(pos, handle_radius, color);
        }
    }
}
