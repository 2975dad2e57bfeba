//! Game systems — self-contained modules that own state and logic.
//!
//! The four spatial query systems of the sandbox: face-visibility
//! culling for chunk meshing, ray picking, line-of-sight occlusion, and
//! grid pathfinding. All run on the main simulation thread and reach
//! the block world only through read paths on
//! [`crate::game::world::ChunkManager`].

pub mod face_culling_system;
pub mod occlusion_system;
pub mod pathfinding_system;
pub mod raycast_system;

pub use face_culling_system::FaceCullingSystem;
pub use occlusion_system::OcclusionSystem;
pub use pathfinding_system::PathfindingSystem;
pub use raycast_system::RaycastSystem;
