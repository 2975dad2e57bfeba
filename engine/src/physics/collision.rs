//! Collision detection module
//!
//! Ray-AABB intersection for picking and line-of-sight queries.
//!
//! # Ray-AABB Intersection
//!
//! The slab method is used for ray-AABB intersection, which finds the
//! intersection points by computing entry and exit times for each axis.
//!
//! # Example
//!
//! ```ignore
//! use paper_mob_engine::physics::collision::{Aabb, Ray, ray_aabb_intersect};
//! use glam::Vec3;
//!
//! let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
//! let bounds = Aabb::new(Vec3::splat(-1.0), Vec3::splat(1.0));
//!
//! if let Some(t) = ray_aabb_intersect(ray.origin, ray.direction, bounds.min, bounds.max) {
//!     let hit_point = ray.point_at(t);
//!     println!("Hit at distance {}: {:?}", t, hit_point);
//! }
//! ```

use glam::Vec3;

/// A ray in world space.
///
/// The direction is normalized at construction; a degenerate (near-zero)
/// direction is kept as-is and will simply never intersect anything,
/// which callers treat as a normal miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Starting point of the ray
    pub origin: Vec3,
    /// Direction of the ray (normalized)
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray from an origin and a direction.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Creates the ray from `from` toward `to`.
    pub fn between(from: Vec3, to: Vec3) -> Self {
        Self::new(from, to - from)
    }

    /// Point at parameter `t` along the ray.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner
    pub min: Vec3,
    /// Maximum corner
    pub max: Vec3,
}

impl Aabb {
    /// Creates an AABB from its two corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Creates an AABB centered on `center` with the given half extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Whether `point` lies strictly inside the box.
    pub fn contains(&self, point: Vec3) -> bool {
        point.x > self.min.x
            && point.x < self.max.x
            && point.y > self.min.y
            && point.y < self.max.y
            && point.z > self.min.z
            && point.z < self.max.z
    }

    /// Nearest intersection of `ray` with this box, as a distance along
    /// the ray. `None` on a miss.
    pub fn intersect_ray(&self, ray: &Ray) -> Option<f32> {
        ray_aabb_intersect(ray.origin, ray.direction, self.min, self.max)
    }
}

/// Performs ray-AABB (Axis-Aligned Bounding Box) intersection test using the slab method.
///
/// The slab method works by finding the intersection of the ray with each pair of
/// axis-aligned planes that make up the AABB. If the ray enters and exits the AABB
/// at valid times (t_enter < t_exit and t_exit > 0), there is an intersection.
///
/// # Arguments
///
/// * `ray_origin` - Starting point of the ray
/// * `ray_dir` - Direction of the ray (must be normalized)
/// * `aabb_min` - Minimum corner of the AABB
/// * `aabb_max` - Maximum corner of the AABB
///
/// # Returns
///
/// * `Some(t)` - Distance along the ray to the intersection point (t >= 0)
/// * `None` - No intersection, or the box lies behind the ray origin
pub fn ray_aabb_intersect(
    ray_origin: Vec3,
    ray_dir: Vec3,
    aabb_min: Vec3,
    aabb_max: Vec3,
) -> Option<f32> {
    // A zero direction cannot hit anything; treat as a miss rather than
    // propagating NaNs out of the division below.
    if ray_dir.length_squared() < 1e-12 {
        return None;
    }

    // Compute inverse direction for efficient division.
    // Near-zero components get a huge finite value so the slab test
    // degenerates to an interval check on the other axes.
    let inv_dir = Vec3::new(
        if ray_dir.x.abs() > 1e-10 { 1.0 / ray_dir.x } else { f32::MAX * ray_dir.x.signum() },
        if ray_dir.y.abs() > 1e-10 { 1.0 / ray_dir.y } else { f32::MAX * ray_dir.y.signum() },
        if ray_dir.z.abs() > 1e-10 { 1.0 / ray_dir.z } else { f32::MAX * ray_dir.z.signum() },
    );

    // Intersection times with the two YZ planes (x = aabb_min.x and x = aabb_max.x)
    let t1 = (aabb_min.x - ray_origin.x) * inv_dir.x;
    let t2 = (aabb_max.x - ray_origin.x) * inv_dir.x;

    let mut t_min = t1.min(t2);
    let mut t_max = t1.max(t2);

    // The two XZ planes (y = aabb_min.y and y = aabb_max.y)
    let t3 = (aabb_min.y - ray_origin.y) * inv_dir.y;
    let t4 = (aabb_max.y - ray_origin.y) * inv_dir.y;

    t_min = t_min.max(t3.min(t4));
    t_max = t_max.min(t3.max(t4));

    // The two XY planes (z = aabb_min.z and z = aabb_max.z)
    let t5 = (aabb_min.z - ray_origin.z) * inv_dir.z;
    let t6 = (aabb_max.z - ray_origin.z) * inv_dir.z;

    t_min = t_min.max(t5.min(t6));
    t_max = t_max.min(t5.max(t6));

    if t_max < t_min || t_max < 0.0 {
        return None;
    }

    // Origin inside the box: the first boundary crossing is behind us,
    // report the exit instead so the distance stays non-negative.
    Some(if t_min >= 0.0 { t_min } else { t_max })
}
