use glam::{Quat, Vec2};

/// Opaque identifier minted by the host scene document.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldTransform {
    pub position: Vec2,
    pub rotation: Quat,
    pub scale: Vec2,
}

impl Default for WorldTransform {
    fn default() -> Self {
        Self { position: Vec2::ZERO, rotation: Quat::IDENTITY, scale: Vec2::ONE }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PropertyValue {
    Float(f32),
    Vec2(Vec2),
    Quat(Quat),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColliderShape {
    Box { half_extents: Vec2 },
    Circle { radius: f32 },
    Capsule { radius: f32, half_height: f32 },
}

pub mod components {
    pub const TRANSFORM: &str = "transform";
    pub const BOX_COLLIDER: &str = "box_collider";
    pub const CIRCLE_COLLIDER: &str = "circle_collider";
    pub const CAPSULE_COLLIDER: &str = "capsule_collider";
}

pub mod properties {
    pub const POSITION: &str = "position";
    pub const ROTATION: &str = "rotation";
    pub const SCALE: &str = "scale";
    pub const HALF_WIDTH: &str = "half_width";
    pub const HALF_HEIGHT: &str = "half_height";
    pub const RADIUS: &str = "radius";
}

/// The host scene document. Transforms and the selection set live there;
/// this crate reads them per interaction and mutates through
/// `update_property` so the host undo history can build inverse operations
/// from the true previous value.
pub trait SceneStore {
    /// Draw order, back first. Hit-testing walks this in reverse.
    fn entities_back_to_front(&self) -> Vec<EntityId>;
    fn world_transform(&self, id: EntityId) -> Option<WorldTransform>;
    fn is_entity_visible(&self, id: EntityId) -> bool;
    fn collider_shape(&self, id: EntityId) -> Option<ColliderShape>;

    fn selected_entities(&self) -> Vec<EntityId>;
    fn selected_entity(&self) -> Option<EntityId>;
    fn select_entity(&mut self, id: Option<EntityId>);
    fn select_entities(&mut self, ids: Vec<EntityId>);

    fn update_property(
        &mut self,
        id: EntityId,
        component: &str,
        property: &str,
        old_value: PropertyValue,
        new_value: PropertyValue,
    );

    fn delete_selected_entities(&mut self);
    fn duplicate_selected_entities(&mut self);
}
