//! ChunkManager — world-scale block storage and queries.
//!
//! Chunks are created lazily on the first block placed in their region
//! and dropped when emptied. Edits mark the touched chunk dirty (and the
//! neighbor chunk when the edit sits on a boundary); the external
//! renderer drains the dirty set once per frame and rebuilds meshes.

use std::collections::{HashMap, HashSet};

use glam::Vec3;
use log::debug;

use super::block::GameBlock;
use super::chunk::{CHUNK_SIZE, Chunk, ChunkPosition};

pub struct ChunkManager {
    block_size: f32,
    /// Ground level reported for columns with no solid support.
    ground_fallback_y: f32,
    chunks: HashMap<ChunkPosition, Chunk>,
    dirty_chunks: HashSet<ChunkPosition>,
}

impl ChunkManager {
    pub fn new(block_size: f32, ground_fallback_y: f32) -> Self {
        Self {
            block_size,
            ground_fallback_y,
            chunks: HashMap::new(),
            dirty_chunks: HashSet::new(),
        }
    }

    pub fn block_size(&self) -> f32 {
        self.block_size
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    pub fn chunk_at(&self, position: ChunkPosition) -> Option<&Chunk> {
        self.chunks.get(&position)
    }

    /// The chunk grid cell containing a world position.
    pub fn world_to_chunk_position(&self, world_pos: Vec3) -> ChunkPosition {
        let edge = CHUNK_SIZE as f32 * self.block_size;
        ChunkPosition::new(
            (world_pos.x / edge).floor() as i32,
            (world_pos.y / edge).floor() as i32,
            (world_pos.z / edge).floor() as i32,
        )
    }

    /// Places a block, creating its chunk if needed, and marks the
    /// affected chunk (plus any boundary neighbor) dirty.
    pub fn add_block(&mut self, block: GameBlock) {
        let chunk_pos = self.world_to_chunk_position(block.position);
        let block_pos = block.position;
        let chunk = self
            .chunks
            .entry(chunk_pos)
            .or_insert_with(|| Chunk::new(chunk_pos, self.block_size));
        chunk.add_block(block);
        self.mark_dirty(chunk_pos, block_pos);
    }

    /// Removes the block occupying the cell at `world_pos`. Empty chunks
    /// are dropped; their position stays in the dirty set so the
    /// renderer disposes the stale mesh.
    pub fn remove_block_at(&mut self, world_pos: Vec3) -> Option<GameBlock> {
        let chunk_pos = self.world_to_chunk_position(world_pos);
        let chunk = self.chunks.get_mut(&chunk_pos)?;
        let removed = chunk.remove_block_at(world_pos)?;
        let now_empty = chunk.is_empty();
        self.mark_dirty(chunk_pos, world_pos);
        if now_empty {
            self.chunks.remove(&chunk_pos);
        }
        Some(removed)
    }

    pub fn get_block_at_world(&self, world_pos: Vec3) -> Option<&GameBlock> {
        let chunk_pos = self.world_to_chunk_position(world_pos);
        self.chunks.get(&chunk_pos)?.get_block_at_world(world_pos)
    }

    pub fn get_block_at_world_mut(&mut self, world_pos: Vec3) -> Option<&mut GameBlock> {
        let chunk_pos = self.world_to_chunk_position(world_pos);
        self.chunks
            .get_mut(&chunk_pos)?
            .get_block_at_world_mut(world_pos)
    }

    /// Every placed block, chunk by chunk. Iteration order is not
    /// meaningful.
    pub fn all_blocks(&self) -> impl Iterator<Item = &GameBlock> {
        self.chunks
            .values()
            .flat_map(|chunk| chunk.blocks().map(|(_, block)| block))
    }

    /// All blocks in chunks overlapping a sphere around `center`.
    ///
    /// Chunk-granular: returns whole chunks' contents, callers that need
    /// an exact radius filter per block themselves.
    pub fn get_blocks_in_radius(&self, center: Vec3, radius: f32) -> Vec<&GameBlock> {
        let mut result = Vec::new();
        let edge = CHUNK_SIZE as f32 * self.block_size;
        let chunk_radius = (radius / edge) as i32 + 1;
        let center_chunk = self.world_to_chunk_position(center);

        for cx in (center_chunk.x - chunk_radius)..=(center_chunk.x + chunk_radius) {
            for cy in (center_chunk.y - chunk_radius)..=(center_chunk.y + chunk_radius) {
                for cz in (center_chunk.z - chunk_radius)..=(center_chunk.z + chunk_radius) {
                    if let Some(chunk) = self.chunks.get(&ChunkPosition::new(cx, cy, cz)) {
                        result.extend(chunk.blocks().map(|(_, block)| block));
                    }
                }
            }
        }
        result
    }

    /// All blocks whose XZ footprint contains the vertical column at
    /// `(x, z)`, across every chunk layer.
    pub fn get_blocks_in_column(&self, x: f32, z: f32) -> Vec<&GameBlock> {
        let half = self.block_size / 2.0;
        self.all_blocks()
            .filter(|block| {
                (x - block.position.x).abs() <= half && (z - block.position.z).abs() <= half
            })
            .collect()
    }

    /// Ground-height oracle: the top Y of the highest colliding block
    /// under the column at `(x, z)`, considering only supports at or
    /// below `current_y + step_height` (an agent can step up at most one
    /// step). Falls back to the configured ground level for empty
    /// columns.
    ///
    /// `check_radius` widens the horizontal overlap test so an agent's
    /// footprint, not just its center line, finds support.
    pub fn find_highest_support_y(
        &self,
        x: f32,
        z: f32,
        current_y: f32,
        check_radius: f32,
        step_height: f32,
    ) -> f32 {
        let mut highest = self.ground_fallback_y;
        for block in self.all_blocks() {
            if !block.block_type.has_collision() {
                continue;
            }
            let bounds = block.bounding_box(self.block_size);
            let overlaps = x + check_radius > bounds.min.x
                && x - check_radius < bounds.max.x
                && z + check_radius > bounds.min.z
                && z - check_radius < bounds.max.z;
            if !overlaps {
                continue;
            }
            let top = bounds.max.y;
            if top <= current_y + step_height && top > highest {
                highest = top;
            }
        }
        highest
    }

    /// Chunk positions edited since the last drain. The renderer
    /// rebuilds (or disposes) one mesh per entry.
    pub fn drain_dirty_chunks(&mut self) -> Vec<ChunkPosition> {
        self.dirty_chunks.drain().collect()
    }

    /// Bulk insert for initial world load. Skips per-block dirty
    /// propagation; every chunk is marked dirty once at the end.
    pub fn load_initial_blocks(&mut self, blocks: Vec<GameBlock>) {
        if blocks.is_empty() {
            return;
        }
        let count = blocks.len();
        for block in blocks {
            let chunk_pos = self.world_to_chunk_position(block.position);
            let chunk = self
                .chunks
                .entry(chunk_pos)
                .or_insert_with(|| Chunk::new(chunk_pos, self.block_size));
            chunk.add_block(block);
        }
        self.dirty_chunks.extend(self.chunks.keys().copied());
        debug!(
            "loaded {count} blocks into {} chunks",
            self.chunks.len()
        );
    }

    /// Marks a chunk dirty, plus the adjacent chunk when the edited cell
    /// sits on a shared boundary (its neighbor's mesh shows the shared
    /// face).
    fn mark_dirty(&mut self, chunk_pos: ChunkPosition, block_world_pos: Vec3) {
        self.dirty_chunks.insert(chunk_pos);

        let Some(chunk) = self.chunks.get(&chunk_pos) else {
            return;
        };
        let local = chunk.world_to_local(block_world_pos);
        let ChunkPosition { x, y, z } = chunk_pos;

        if local.x == 0 {
            self.mark_neighbor_dirty(ChunkPosition::new(x - 1, y, z));
        }
        if local.x == CHUNK_SIZE - 1 {
            self.mark_neighbor_dirty(ChunkPosition::new(x + 1, y, z));
        }
        if local.y == 0 {
            self.mark_neighbor_dirty(ChunkPosition::new(x, y - 1, z));
        }
        if local.y == CHUNK_SIZE - 1 {
            self.mark_neighbor_dirty(ChunkPosition::new(x, y + 1, z));
        }
        if local.z == 0 {
            self.mark_neighbor_dirty(ChunkPosition::new(x, y, z - 1));
        }
        if local.z == CHUNK_SIZE - 1 {
            self.mark_neighbor_dirty(ChunkPosition::new(x, y, z + 1));
        }
    }

    fn mark_neighbor_dirty(&mut self, position: ChunkPosition) {
        if self.chunks.contains_key(&position) {
            self.dirty_chunks.insert(position);
        }
    }
}
