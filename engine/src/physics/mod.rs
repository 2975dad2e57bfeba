//! Physics module for Paper Mob Engine
//!
//! Ray and AABB primitives shared by every spatial query in the game
//! layer: block picking, line-of-sight occlusion and walkability probes.
//! Built from scratch without external physics library dependencies.
//!
//! # Unit System
//!
//! **1 unit = 1 meter** (SI units throughout). One block is
//! `block_size` units on a side (4.0 by default).
//!
//! # Submodules
//!
//! - [`collision`] - Ray-AABB intersection (slab method) and the
//!   `Ray`/`Aabb` types

pub mod collision;

// Re-export commonly used types at the physics module level
pub use collision::{Aabb, Ray, ray_aabb_intersect};
