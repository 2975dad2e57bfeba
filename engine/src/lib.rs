//! Paper Mob Engine Library
//!
//! Spatial core for a paper-style mafia sandbox: a chunked block world
//! with face-visibility culling, ray picking, line-of-sight occlusion and
//! grid pathfinding. Rendering, audio and UI live in external layers that
//! consume this crate through narrow data interfaces (dirty-chunk drains,
//! waypoint queues, occlusion toggles).
//!
//! # Modules
//!
//! - [`world`] - World-space configuration (grid cell size, map bounds)
//! - [`physics`] - Ray/AABB primitives used by every spatial query
//! - [`game`] - The block world, typed entities, and the query systems
//!   built on top of them
//!
//! # Example
//!
//! ```ignore
//! use paper_mob_engine::game::config::WorldConfig;
//! use paper_mob_engine::game::world::ChunkManager;
//! use paper_mob_engine::game::systems::PathfindingSystem;
//! use glam::Vec3;
//!
//! let config = WorldConfig::default();
//! let mut chunks = ChunkManager::new(config.block_size, config.ground_fallback_y);
//! // ... place blocks through chunks.add_block(...) ...
//!
//! let pathfinder = PathfindingSystem::new(config.block_size, config.character_size);
//! if let Some(path) = pathfinder.find_path(&chunks, Vec3::ZERO, Vec3::new(40.0, 0.0, 8.0)) {
//!     for waypoint in path {
//!         // feed the movement controller
//!     }
//! }
//! ```

pub mod physics;
pub mod world;

// Game-specific modules (located in src/game/ directory)
#[path = "../../src/game/mod.rs"]
pub mod game;

// Re-export world helpers at crate level for convenience
pub use world::{GridConfig, snap_to_cell_center, world_to_cell};
// Re-export the query primitives every system builds on
pub use physics::collision::{Aabb, Ray, ray_aabb_intersect};
