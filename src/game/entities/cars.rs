//! Parked and drivable cars.

use glam::Vec3;

use crate::physics::collision::Aabb;
use super::occludable::Occludable;

/// Car palette with body dimensions (full width/height/length, meters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarKind {
    Sedan,
    Taxi,
    PoliceCruiser,
    DeliveryTruck,
}

impl CarKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            CarKind::Sedan => "Sedan",
            CarKind::Taxi => "Taxi",
            CarKind::PoliceCruiser => "Police Cruiser",
            CarKind::DeliveryTruck => "Delivery Truck",
        }
    }

    /// (width, height, length) of the body.
    pub fn dimensions(&self) -> Vec3 {
        match self {
            CarKind::Sedan => Vec3::new(2.0, 1.6, 4.6),
            CarKind::Taxi => Vec3::new(2.0, 1.7, 4.8),
            CarKind::PoliceCruiser => Vec3::new(2.1, 1.7, 5.0),
            CarKind::DeliveryTruck => Vec3::new(2.4, 2.8, 6.5),
        }
    }
}

/// A car in the scene. `position` is the body center.
#[derive(Debug, Clone)]
pub struct GameCar {
    pub id: u32,
    pub position: Vec3,
    pub kind: CarKind,
    occluded: bool,
}

impl GameCar {
    pub fn new(id: u32, position: Vec3, kind: CarKind) -> Self {
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

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, self.kind.dimensions() / 2.0)
    }
}

impl Occludable for GameCar {
    fn occluder_id(&self) -> u32 {
        self.id
    }

    fn bounding_box(&self) -> Aabb {
        GameCar::bounding_box(self)
    }

    fn set_occluded(&mut self, occluded: bool) {
        self.occluded = occluded;
    }
}
