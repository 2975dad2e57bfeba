//! Game Module
//!
//! Contains game-specific systems that build on top of the engine.
//!
//! The block world lives in [`world`]; the query systems that operate
//! over it (face culling, ray picking, occlusion, pathfinding) live in
//! [`systems`]; the thin typed entities those queries scan live in
//! [`entities`].

pub mod config;
pub mod entities;
pub mod systems;
pub mod world;

// Re-exports from the world layer
pub use world::{
    BlockFace, BlockShape, BlockType, CHUNK_SIZE, Chunk, ChunkManager, ChunkPosition, GameBlock,
};

// Re-exports from the entity layer
pub use entities::{CarKind, GameCar, GameHouse, GameItem, GameObject, HouseKind, ItemKind, Occludable};

// Re-exports from the systems layer
pub use systems::{FaceCullingSystem, OcclusionSystem, PathfindingSystem, RaycastSystem};

// Configuration
pub use config::{ConfigError, WorldConfig};
