//! Buildings — the mostly-static structures the city is made of.
//!
//! Houses are the dominant occluders: a tenement between the camera and
//! the player is exactly the case the occlusion system fades out.

use glam::Vec3;

use crate::physics::collision::{Aabb, Ray};
use super::occludable::Occludable;

/// Building palette with footprint dimensions (width, height, depth).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HouseKind {
    Tenement,
    Office,
    CornerShop,
    Warehouse,
}

impl HouseKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            HouseKind::Tenement => "Tenement",
            HouseKind::Office => "Office",
            HouseKind::CornerShop => "Corner Shop",
            HouseKind::Warehouse => "Warehouse",
        }
    }

    pub fn dimensions(&self) -> Vec3 {
        match self {
            HouseKind::Tenement => Vec3::new(12.0, 16.0, 10.0),
            HouseKind::Office => Vec3::new(14.0, 24.0, 12.0),
            HouseKind::CornerShop => Vec3::new(8.0, 6.0, 8.0),
            HouseKind::Warehouse => Vec3::new(20.0, 10.0, 16.0),
        }
    }
}

/// A building. `position` is the footprint center at ground level.
#[derive(Debug, Clone)]
pub struct GameHouse {
    pub id: u32,
    pub position: Vec3,
    pub kind: HouseKind,
    occluded: bool,
}

impl GameHouse {
    pub fn new(id: u32, position: Vec3, kind: HouseKind) -> Self {
        Self {
            id,
            position,
            kind,
            occluded: false,
        }
    }

    pub fn is_occluded(&self) -> bool {
        self.occluded
    }

    /// Bounding box standing on the ground at `position`.
    pub fn bounding_box(&self) -> Aabb {
        let dims = self.kind.dimensions();
        let half = Vec3::new(dims.x / 2.0, 0.0, dims.z / 2.0);
        Aabb::new(
            self.position - half,
            self.position + half + Vec3::new(0.0, dims.y, 0.0),
        )
    }

    /// Nearest intersection with the building volume, if any.
    pub fn intersects_ray(&self, ray: &Ray) -> Option<f32> {
        self.bounding_box().intersect_ray(ray)
    }
}

impl Occludable for GameHouse {
    fn occluder_id(&self) -> u32 {
        self.id
    }

    fn bounding_box(&self) -> Aabb {
        GameHouse::bounding_box(self)
    }

    fn set_occluded(&mut self, occluded: bool) {
        self.occluded = occluded;
    }
}
