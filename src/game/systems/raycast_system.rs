//! Ray picking — nearest-hit queries against the typed entity
//! collections.
//!
//! One query per collection, all with the same contract: linear scan,
//! ray/AABB slab test per entity, running minimum on squared distance to
//! the hit point with strict `<`, so equal-distance ties keep the
//! earlier entity. A miss is a normal `None`, not an error.
//!
//! No broad phase: queries run at editor/pick rates against bounded
//! collections, and the scan-order tie-break is part of the contract.

use glam::Vec3;

use crate::game::entities::{GameCar, GameHouse, GameItem, GameObject};
use crate::game::world::GameBlock;
use crate::physics::collision::{Aabb, Ray};

pub struct RaycastSystem {
    block_size: f32,
}

impl RaycastSystem {
    pub fn new(block_size: f32) -> Self {
        Self { block_size }
    }

    /// Linear nearest-hit scan. `bounds_of` supplies each entity's box;
    /// entities it returns `None` for are skipped.
    fn closest_hit<'a, T, F>(ray: &Ray, entities: &'a [T], bounds_of: F) -> Option<&'a T>
    where
        F: Fn(&T) -> Option<Aabb>,
    {
        let mut closest: Option<&T> = None;
        let mut closest_dist2 = f32::MAX;

        for entity in entities {
            let Some(bounds) = bounds_of(entity) else {
                continue;
            };
            if let Some(t) = bounds.intersect_ray(ray) {
                let hit: Vec3 = ray.point_at(t);
                let dist2 = ray.origin.distance_squared(hit);
                if dist2 < closest_dist2 {
                    closest_dist2 = dist2;
                    closest = Some(entity);
                }
            }
        }
        closest
    }

    /// The placed block nearest along the ray, if any.
    pub fn get_block_at_ray<'a>(
        &self,
        ray: &Ray,
        blocks: &'a [GameBlock],
    ) -> Option<&'a GameBlock> {
        Self::closest_hit(ray, blocks, |block| Some(block.bounding_box(self.block_size)))
    }

    /// The generic prop nearest along the ray, if any.
    pub fn get_object_at_ray<'a>(
        &self,
        ray: &Ray,
        objects: &'a [GameObject],
    ) -> Option<&'a GameObject> {
        Self::closest_hit(ray, objects, |object| Some(object.bounding_box()))
    }

    /// The pickup nearest along the ray. Collected items are excluded
    /// before the intersection test.
    pub fn get_item_at_ray<'a>(&self, ray: &Ray, items: &'a [GameItem]) -> Option<&'a GameItem> {
        Self::closest_hit(ray, items, |item| {
            if item.collected {
                None
            } else {
                Some(item.bounding_box())
            }
        })
    }

    /// The car nearest along the ray, if any.
    pub fn get_car_at_ray<'a>(&self, ray: &Ray, cars: &'a [GameCar]) -> Option<&'a GameCar> {
        Self::closest_hit(ray, cars, |car| Some(car.bounding_box()))
    }

    /// The building nearest along the ray, if any.
    pub fn get_house_at_ray<'a>(
        &self,
        ray: &Ray,
        houses: &'a [GameHouse],
    ) -> Option<&'a GameHouse> {
        Self::closest_hit(ray, houses, |house| Some(house.bounding_box()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::entities::ItemKind;
    use crate::game::world::{BlockShape, BlockType};

    const BLOCK_SIZE: f32 = 4.0;

    fn stone(position: Vec3) -> GameBlock {
        GameBlock::new(BlockType::Stone, BlockShape::FullBlock, position, 0.0)
    }

    #[test]
    fn closest_of_three_blocks_wins() {
        let system = RaycastSystem::new(BLOCK_SIZE);
        // Blocks along +X; scan order deliberately far-to-near
        let blocks = vec![
            stone(Vec3::new(30.0, 0.0, 0.0)),
            stone(Vec3::new(20.0, 0.0, 0.0)),
            stone(Vec3::new(10.0, 0.0, 0.0)),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = system.get_block_at_ray(&ray, &blocks).expect("hit");
        assert_eq!(hit.position.x, 10.0);
    }

    #[test]
    fn ray_away_from_everything_misses() {
        let system = RaycastSystem::new(BLOCK_SIZE);
        let blocks = vec![stone(Vec3::new(10.0, 0.0, 0.0))];
        let ray = Ray::new(Vec3::ZERO, -Vec3::X);
        assert!(system.get_block_at_ray(&ray, &blocks).is_none());
    }

    #[test]
    fn collected_items_are_invisible_to_picking() {
        let system = RaycastSystem::new(BLOCK_SIZE);
        let mut near = GameItem::new(1, Vec3::new(5.0, 0.0, 0.0), ItemKind::Pistol);
        near.collected = true;
        let far = GameItem::new(2, Vec3::new(12.0, 0.0, 0.0), ItemKind::Medkit);
        let items = vec![near, far];

        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = system.get_item_at_ray(&ray, &items).expect("hit");
        assert_eq!(hit.id, 2);
    }

    #[test]
    fn empty_collection_is_a_clean_miss() {
        let system = RaycastSystem::new(BLOCK_SIZE);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        assert!(system.get_block_at_ray(&ray, &[]).is_none());
        assert!(system.get_item_at_ray(&ray, &[]).is_none());
    }

    #[test]
    fn equal_distance_tie_keeps_the_earlier_entity() {
        let system = RaycastSystem::new(BLOCK_SIZE);
        // Two props mirrored across the ray axis, same entry distance
        let props = vec![
            GameObject::new(1, Vec3::new(10.0, 0.0, 0.0), "first"),
            GameObject::new(2, Vec3::new(10.0, 0.0, 0.0), "second"),
        ];
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let hit = system.get_object_at_ray(&ray, &props).expect("hit");
        assert_eq!(hit.id, 1);
    }

    #[test]
    fn degenerate_ray_misses_everything() {
        let system = RaycastSystem::new(BLOCK_SIZE);
        let blocks = vec![stone(Vec3::ZERO)];
        // Zero-length direction normalizes to zero; treated as a miss
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO);
        assert!(system.get_block_at_ray(&ray, &blocks).is_none());
    }
}
