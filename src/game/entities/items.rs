//! Pickup items — money, weapons, medkits.
//!
//! Collected items stay in the scene list until the cleanup pass but are
//! invisible to picking.

use glam::Vec3;

use crate::physics::collision::Aabb;

/// Item palette with pickup dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    MoneyStack,
    Pistol,
    Shotgun,
    Medkit,
}

impl ItemKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemKind::MoneyStack => "Money Stack",
            ItemKind::Pistol => "Pistol",
            ItemKind::Shotgun => "Shotgun",
            ItemKind::Medkit => "Medkit",
        }
    }

    /// Half extents of the pickup's bounding box.
    pub fn half_extents(&self) -> Vec3 {
        match self {
            ItemKind::MoneyStack => Vec3::new(0.5, 0.25, 0.5),
            ItemKind::Pistol => Vec3::new(0.6, 0.3, 0.4),
            ItemKind::Shotgun => Vec3::new(1.0, 0.3, 0.4),
            ItemKind::Medkit => Vec3::new(0.6, 0.4, 0.5),
        }
    }
}

/// A placed pickup.
#[derive(Debug, Clone)]
pub struct GameItem {
    pub id: u32,
    pub position: Vec3,
    pub kind: ItemKind,
    pub collected: bool,
}

impl GameItem {
    pub fn new(id: u32, position: Vec3, kind: ItemKind) -> Self {
        Self {
            id,
            position,
            kind,
            collected: false,
        }
    }

    pub fn bounding_box(&self) -> Aabb {
        Aabb::from_center_half_extents(self.position, self.kind.half_extents())
    }
}
