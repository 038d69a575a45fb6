#![allow(dead_code)]

use glam::{Quat, Vec2};
use osprey_editor::geometry::{BoundsProvider, LocalBounds};
use osprey_editor::router::DragListenerHost;
use osprey_editor::store::{
    properties, ColliderShape, EntityId, PropertyValue, SceneStore, WorldTransform,
};
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct EditRecord {
    pub id: EntityId,
    pub component: String,
    pub property: String,
    pub old_value: PropertyValue,
    pub new_value: PropertyValue,
}

#[derive(Clone, Debug)]
struct TestEntity {
    transform: WorldTransform,
    visible: bool,
    collider: Option<ColliderShape>,
}

/// In-memory scene document. `update_property` both records the edit (so
/// tests can assert on old/new values) and applies it, the way the real
/// store mutates state and notifies synchronously.
#[derive(Default)]
pub struct TestStore {
    order: Vec<EntityId>,
    entities: HashMap<EntityId, TestEntity>,
    selection: Vec<EntityId>,
    pub edits: Vec<EditRecord>,
    pub delete_requests: usize,
    pub duplicate_requests: usize,
}

impl TestStore {
    pub fn position(&self, id: EntityId) -> Vec2 {
        self.entities[&id].transform.position
    }

    pub fn rotation(&self, id: EntityId) -> Quat {
        self.entities[&id].transform.rotation
    }

    pub fn scale(&self, id: EntityId) -> Vec2 {
        self.entities[&id].transform.scale
    }

    pub fn collider(&self, id: EntityId) -> Option<ColliderShape> {
        self.entities.get(&id).and_then(|e| e.collider)
    }

    pub fn set_transform(&mut self, id: EntityId, transform: WorldTransform) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.transform = transform;
        }
    }

    pub fn set_visible(&mut self, id: EntityId, visible: bool) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.visible = visible;
        }
    }

    pub fn set_collider(&mut self, id: EntityId, collider: ColliderShape) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.collider = Some(collider);
        }
    }

    pub fn remove_entity(&mut self, id: EntityId) {
        self.entities.remove(&id);
        self.order.retain(|&e| e != id);
        self.selection.retain(|&e| e != id);
    }

    pub fn select(&mut self, ids: &[EntityId]) {
        self.selection = ids.to_vec();
    }

    fn apply_edit(&mut self, id: EntityId, property: &str, value: PropertyValue) {
        let Some(entity) = self.entities.get_mut(&id) else { return };
        match (property, value) {
            (properties::POSITION, PropertyValue::Vec2(v)) => entity.transform.position = v,
            (properties::ROTATION, PropertyValue::Quat(q)) => entity.transform.rotation = q,
            (properties::SCALE, PropertyValue::Vec2(v)) => entity.transform.scale = v,
            (properties::HALF_WIDTH, PropertyValue::Float(v)) => {
                if let Some(ColliderShape::Box { half_extents }) = entity.collider.as_mut() {
                    half_extents.x = v;
                }
            }
            (properties::HALF_HEIGHT, PropertyValue::Float(v)) => match entity.collider.as_mut() {
                Some(ColliderShape::Box { half_extents }) => half_extents.y = v,
                Some(ColliderShape::Capsule { half_height, .. }) => *half_height = v,
                _ => {}
            },
            (properties::RADIUS, PropertyValue::Float(v)) => match entity.collider.as_mut() {
                Some(ColliderShape::Circle { radius }) => *radius = v,
                Some(ColliderShape::Capsule { radius, .. }) => *radius = v,
                _ => {}
            },
            _ => {}
        }
    }
}

impl SceneStore for TestStore {
    fn entities_back_to_front(&self) -> Vec<EntityId> {
        self.order.clone()
    }

    fn world_transform(&self, id: EntityId) -> Option<WorldTransform> {
        self.entities.get(&id).map(|e| e.transform)
    }

    fn is_entity_visible(&self, id: EntityId) -> bool {
        self.entities.get(&id).map(|e| e.visible).unwrap_or(false)
    }

    fn collider_shape(&self, id: EntityId) -> Option<ColliderShape> {
        self.entities.get(&id).and_then(|e| e.collider)
    }

    fn selected_entities(&self) -> Vec<EntityId> {
        self.selection.clone()
    }

    fn selected_entity(&self) -> Option<EntityId> {
        self.selection.first().copied()
    }

    fn select_entity(&mut self, id: Option<EntityId>) {
        self.selection = id.into_iter().collect();
    }

    fn select_entities(&mut self, ids: Vec<EntityId>) {
        self.selection = ids;
    }

    fn update_property(
        &mut self,
        id: EntityId,
        component: &str,
        property: &str,
        old_value: PropertyValue,
        new_value: PropertyValue,
    ) {
        self.edits.push(EditRecord {
            id,
            component: component.to_string(),
            property: property.to_string(),
            old_value,
            new_value,
        });
        self.apply_edit(id, property, new_value);
    }

    fn delete_selected_entities(&mut self) {
        self.delete_requests += 1;
        for id in std::mem::take(&mut self.selection) {
            self.remove_entity(id);
        }
    }

    fn duplicate_selected_entities(&mut self) {
        self.duplicate_requests += 1;
    }
}

#[derive(Default)]
pub struct TestBounds {
    map: HashMap<EntityId, LocalBounds>,
}

impl TestBounds {
    pub fn set(&mut self, id: EntityId, bounds: LocalBounds) {
        self.map.insert(id, bounds);
    }
}

impl BoundsProvider for TestBounds {
    fn local_bounds(&self, id: EntityId) -> Option<LocalBounds> {
        self.map.get(&id).copied()
    }
}

#[derive(Default)]
pub struct CountingListeners {
    pub acquired: usize,
    pub released: usize,
}

impl CountingListeners {
    pub fn held(&self) -> bool {
        self.acquired > self.released
    }
}

impl DragListenerHost for CountingListeners {
    fn acquire_drag_listeners(&mut self) {
        self.acquired += 1;
    }

    fn release_drag_listeners(&mut self) {
        self.released += 1;
    }
}

/// Screen position of a world point for the default camera (pan 0, zoom 1)
/// and the default 1280x720 viewport at scale factor 1.
pub fn screen_at(world: Vec2) -> Vec2 {
    Vec2::new(640.0 + world.x, 360.0 - world.y)
}

pub fn pointer_move(position: Vec2) -> osprey_editor::InputEvent {
    osprey_editor::InputEvent::PointerMoved { position }
}

pub fn left_button(pressed: bool) -> osprey_editor::InputEvent {
    osprey_editor::InputEvent::PointerButton {
        button: osprey_editor::PointerButton::Left,
        pressed,
    }
}

pub fn middle_button(pressed: bool) -> osprey_editor::InputEvent {
    osprey_editor::InputEvent::PointerButton {
        button: osprey_editor::PointerButton::Middle,
        pressed,
    }
}

pub fn named_key(key: winit::keyboard::NamedKey, pressed: bool) -> osprey_editor::InputEvent {
    osprey_editor::InputEvent::Key { key: winit::keyboard::Key::Named(key), pressed }
}

pub fn char_key(ch: &str, pressed: bool) -> osprey_editor::InputEvent {
    osprey_editor::InputEvent::Key {
        key: winit::keyboard::Key::Character(winit::keyboard::SmolStr::new(ch)),
        pressed,
    }
}

/// Store + bounds + listener host wired together for panel-level tests.
#[derive(Default)]
pub struct TestScene {
    pub store: TestStore,
    pub bounds: TestBounds,
    pub listeners: CountingListeners,
}

impl TestScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pivot-centered entity with the given world position and footprint.
    pub fn spawn(&mut self, id: u64, position: Vec2, width: f32, height: f32) -> EntityId {
        let id = EntityId(id);
        self.store.order.push(id);
        self.store.entities.insert(
            id,
            TestEntity {
                transform: WorldTransform { position, ..WorldTransform::default() },
                visible: true,
                collider: None,
            },
        );
        self.bounds.set(id, LocalBounds::new(width, height));
        id
    }
}
