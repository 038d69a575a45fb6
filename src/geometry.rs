use crate::store::{EntityId, SceneStore, WorldTransform};
use glam::Vec2;
use smallvec::SmallVec;

/// Local, unscaled, pivot-relative bounds for an entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalBounds {
    pub size: Vec2,
    pub offset: Vec2,
}

impl LocalBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { size: Vec2::new(width.max(0.0), height.max(0.0)), offset: Vec2::ZERO }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }
}

/// Resolves an entity's local footprint (sprite size, text metrics, collider
/// extents). Supplied by the host; entities it cannot resolve are skipped.
pub trait BoundsProvider {
    fn local_bounds(&self, id: EntityId) -> Option<LocalBounds>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl WorldRect {
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        Self { min: a.min(b), max: a.max(b) }
    }

    pub fn from_center_half(center: Vec2, half: Vec2) -> Self {
        let half = half.abs();
        Self { min: center - half, max: center + half }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    // Touching edges count as contained/intersecting.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn intersects(&self, other: &WorldRect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Axis-aligned world footprint. Rotation is intentionally ignored so the
/// footprint stays an AABB even for rotated entities; scale and pivot offset
/// are applied.
pub fn entity_footprint(transform: &WorldTransform, bounds: &LocalBounds) -> WorldRect {
    let center = transform.position + bounds.offset * transform.scale;
    let half = (bounds.size * transform.scale).abs() * 0.5;
    WorldRect::from_center_half(center, half)
}

pub fn footprint_of(
    store: &dyn SceneStore,
    bounds: &dyn BoundsProvider,
    id: EntityId,
) -> Option<WorldRect> {
    let transform = store.world_transform(id)?;
    let local = bounds.local_bounds(id)?;
    Some(entity_footprint(&transform, &local))
}

pub type HitList = SmallVec<[EntityId; 8]>;

/// All visible entities whose footprint contains the point, front-to-back.
pub fn point_hit_test(
    store: &dyn SceneStore,
    bounds: &dyn BoundsProvider,
    world_point: Vec2,
) -> HitList {
    let mut hits = HitList::new();
    for id in store.entities_back_to_front().into_iter().rev() {
        if !store.is_entity_visible(id) {
            continue;
        }
        if let Some(footprint) = footprint_of(store, bounds, id) {
            if footprint.contains(world_point) {
                hits.push(id);
            }
        }
    }
    hits
}

/// All visible entities whose footprint intersects the rect, front-to-back.
pub fn rect_hit_test(store: &dyn SceneStore, bounds: &dyn BoundsProvider, rect: &WorldRect) -> HitList {
    let mut hits = HitList::new();
    for id in store.entities_back_to_front().into_iter().rev() {
        if !store.is_entity_visible(id) {
            continue;
        }
        if let Some(footprint) = footprint_of(store, bounds, id) {
            if footprint.intersects(rect) {
                hits.push(id);
            }
        }
    }
    hits
}
