//! Occlusion fading — keeps the player visible when scenery blocks the
//! camera's line of sight.
//!
//! Once per frame, before rendering, [`OcclusionSystem::update`] tests
//! the observer-to-target segment against every candidate's bounding
//! volume. Only objects strictly *between* the two count; anything past
//! the target intersects the infinite ray but never occludes.
//!
//! Transitions are edge-triggered: an entity hears `set_occluded(true)`
//! exactly once when it starts blocking the view and
//! `set_occluded(false)` exactly once when it stops, so the rendering
//! layer is not pushed redundant state every frame.

use std::collections::HashSet;

use glam::Vec3;

use crate::game::entities::Occludable;
use crate::physics::collision::Ray;

#[derive(Default)]
pub struct OcclusionSystem {
    currently_occluded: HashSet<u32>,
}

impl OcclusionSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ids of the entities blocking the view as of the last update.
    pub fn currently_occluded(&self) -> &HashSet<u32> {
        &self.currently_occluded
    }

    /// Recomputes the occluded set for this frame and fires the
    /// transition toggles.
    ///
    /// The set is fully replaced every call; an entity missing from
    /// `candidates` simply drops out of tracking. All toggles fire
    /// before this returns, ahead of the frame's render call.
    pub fn update<O: Occludable>(&mut self, observer: Vec3, target: Vec3, candidates: &mut [O]) {
        let ray = Ray::between(observer, target);
        let dist2_to_target = observer.distance_squared(target);

        let mut now_occluded = HashSet::new();
        for candidate in candidates.iter() {
            if let Some(t) = candidate.bounding_box().intersect_ray(&ray) {
                let hit = ray.point_at(t);
                // Strictly closer than the target: objects at or beyond
                // it do not block the view.
                if observer.distance_squared(hit) < dist2_to_target {
                    now_occluded.insert(candidate.occluder_id());
                }
            }
        }

        for candidate in candidates.iter_mut() {
            let id = candidate.occluder_id();
            let was = self.currently_occluded.contains(&id);
            let is = now_occluded.contains(&id);
            if is != was {
                candidate.set_occluded(is);
            }
        }

        self.currently_occluded = now_occluded;
    }

    /// Clears all occlusion state and restores every tracked entity to
    /// opaque. Required on scene switches or when the tracked target
    /// changes, so nothing stays stuck transparent.
    pub fn reset<O: Occludable>(&mut self, candidates: &mut [O]) {
        for candidate in candidates.iter_mut() {
            if self.currently_occluded.contains(&candidate.occluder_id()) {
                candidate.set_occluded(false);
            }
        }
        self.currently_occluded.clear();
    }
}
