//! Generic scene props — street furniture placed by the level editor.
//!
//! Props have no per-kind dimensions; picking and occlusion use a fixed
//! fallback box around the prop's position.

use glam::Vec3;

use crate::physics::collision::Aabb;
use super::occludable::Occludable;

/// Half extent of the fallback bounding box used for props.
pub const OBJECT_HALF_EXTENT: f32 = 1.0;

/// A generic placed object (lamp post, trash can, crate, ...).
#[derive(Debug, Clone)]
pub struct GameObject {
    pub id: u32,
    pub position: Vec3,
    /// Editor label, e.g. "street_lamp".
    pub name: String,
    occluded: bool,
}

impl GameObject {
    pub fn new(id: u32, position: Vec3, name: impl Into<String>) -> Self {
        Self {
            id,
            position,
            name: name.into(),
            occluded: false,
        }
    }

    pub fn is_occluded(&self) -> bool {
        self.occluded
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, Vec3::splat(OBJECT_HALF_EXTENT))
    }
}

impl Occludable for GameObject {
    fn occluder_id(&self) -> u32 {
        self.id
    }

    fn bounding_box(&self) -> Aabb {
        GameObject::bounding_box(self)
    }

    fn set_occluded(&mut self, occluded: bool) {
        self.occluded = occluded;
    }
}
