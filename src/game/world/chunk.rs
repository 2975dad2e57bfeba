//! Chunk — a 16x16x16 partition of block space.
//!
//! Blocks are keyed by an immutable integer local coordinate derived
//! from their world position. The chunk's world-space bounding box is
//! precomputed at construction for the external renderer's frustum
//! culling; it never changes.

use std::collections::HashMap;

use glam::{IVec3, Vec3};
use static_assertions::const_assert;

use crate::physics::collision::Aabb;
use super::block::GameBlock;

/// Chunk dimensions in blocks (16x16x16).
pub const CHUNK_SIZE: i32 = 16;

// Local addressing assumes a positive power-of-two edge length.
const_assert!(CHUNK_SIZE > 0 && (CHUNK_SIZE & (CHUNK_SIZE - 1)) == 0);

/// A chunk's position in the chunk grid. Immutable value key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkPosition {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkPosition {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    pub fn as_ivec3(self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z)
    }
}

impl From<IVec3> for ChunkPosition {
    fn from(value: IVec3) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

/// A fixed-size partition of block space.
///
/// Owns the local-coordinate → block map and a cached world AABB.
/// Mesh/GPU state is *not* owned here; the renderer keys its handles off
/// [`ChunkPosition`] and rebuilds from the dirty set the
/// [`super::ChunkManager`] tracks. Removing block data and disposing a
/// mesh are independent operations.
pub struct Chunk {
    pub position: ChunkPosition,
    block_size: f32,
    bounding_box: Aabb,
    blocks: HashMap<IVec3, GameBlock>,
}

impl Chunk {
    pub fn new(position: ChunkPosition, block_size: f32) -> Self {
        // Pre-calculate the world-space bounding box for frustum culling.
        let edge = CHUNK_SIZE as f32 * block_size;
        let world_min = Vec3::new(
            position.x as f32 * edge,
            position.y as f32 * edge,
            position.z as f32 * edge,
        );
        let world_max = world_min + Vec3::splat(edge);
        Self {
            position,
            block_size,
            bounding_box: Aabb::new(world_min, world_max),
            blocks: HashMap::new(),
        }
    }

    /// Cached world-space bounds of this chunk.
    pub fn bounding_box(&self) -> Aabb {
        self.bounding_box
    }

    /// Converts a world position to its local coordinate key within this
    /// chunk. For positions actually inside the chunk every component is
    /// in `[0, CHUNK_SIZE)`; anything else indicates an addressing bug
    /// upstream.
    pub fn world_to_local(&self, world_pos: Vec3) -> IVec3 {
        IVec3::new(
            (world_pos.x / self.block_size).floor() as i32 - self.position.x * CHUNK_SIZE,
            (world_pos.y / self.block_size).floor() as i32 - self.position.y * CHUNK_SIZE,
            (world_pos.z / self.block_size).floor() as i32 - self.position.z * CHUNK_SIZE,
        )
    }

    pub fn add_block(&mut self, block: GameBlock) {
        let local = self.world_to_local(block.position);
        debug_assert!(
            local.cmpge(IVec3::ZERO).all() && local.cmplt(IVec3::splat(CHUNK_SIZE)).all(),
            "block at {:?} does not belong to chunk {:?} (local {local:?})",
            block.position,
            self.position,
        );
        self.blocks.insert(local, block);
    }

    /// Removes and returns the block occupying the cell at `world_pos`.
    pub fn remove_block_at(&mut self, world_pos: Vec3) -> Option<GameBlock> {
        let local = self.world_to_local(world_pos);
        self.blocks.remove(&local)
    }

    pub fn get_block_at_world(&self, world_pos: Vec3) -> Option<&GameBlock> {
        let local = self.world_to_local(world_pos);
        self.blocks.get(&local)
    }

    pub fn get_block_at_world_mut(&mut self, world_pos: Vec3) -> Option<&mut GameBlock> {
        let local = self.world_to_local(world_pos);
        self.blocks.get_mut(&local)
    }

    pub fn block_at_local_mut(&mut self, local: IVec3) -> Option<&mut GameBlock> {
        self.blocks.get_mut(&local)
    }

    /// Iterate local keys and blocks.
    pub fn blocks(&self) -> impl Iterator<Item = (&IVec3, &GameBlock)> {
        self.blocks.iter()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
