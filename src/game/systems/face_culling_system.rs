//! Face culling — computes which faces of each full block are actually
//! visible, so the mesher emits no geometry for faces pressed against an
//! opaque neighbor.
//!
//! Three entry points with the same visibility rule:
//! - [`FaceCullingSystem::recalculate_all_faces`] — bulk pass over a flat
//!   slice, used on initial world load. Neighbors resolve through a
//!   temporary integer-keyed map instead of chunk indirection.
//! - [`FaceCullingSystem::update_faces_around`] — single-edit pass over
//!   the edited cell and its six axis neighbors.
//! - [`FaceCullingSystem::update_faces_for_chunk`] — chunk-relative pass
//!   through [`ChunkManager`] lookups, used when the renderer rebuilds a
//!   dirty chunk (neighbors may live in adjacent chunks).

use std::collections::{HashMap, HashSet};

use glam::{IVec3, Vec3};
use log::debug;

use crate::game::world::{BlockFace, ChunkManager, ChunkPosition, GameBlock};

pub struct FaceCullingSystem {
    block_size: f32,
}

impl FaceCullingSystem {
    pub fn new(block_size: f32) -> Self {
        Self { block_size }
    }

    /// A face is hidden only when a neighbor exists there, renders, and
    /// fills its whole cell. Everything else leaves the face visible.
    fn face_hidden_by(neighbor: Option<&GameBlock>) -> bool {
        match neighbor {
            Some(block) => block.block_type.is_visible() && block.shape.is_full(),
            None => false,
        }
    }

    /// Computes the visible-face set for one block.
    ///
    /// The neighbor offset is rotated by the block's Y rotation first: a
    /// rotated block's local front no longer points along +Z, and the
    /// lookup has to follow the face, not the axis.
    fn visible_faces_for<'a, F>(&self, block: &GameBlock, neighbor_at: F) -> HashSet<BlockFace>
    where
        F: Fn(Vec3) -> Option<&'a GameBlock>,
    {
        let mut faces = HashSet::new();
        for face in BlockFace::ALL {
            let neighbor_pos = block.position + block.rotated_face_offset(face, self.block_size);
            if !Self::face_hidden_by(neighbor_at(neighbor_pos)) {
                faces.insert(face);
            }
        }
        faces
    }

    /// Map key for the bulk path: the block position rounded to
    /// integers. Immutable value key, same rounding on build and
    /// lookup; rounding (not truncation) absorbs the sub-epsilon noise
    /// a rotated neighbor offset picks up.
    fn position_key(position: Vec3) -> IVec3 {
        IVec3::new(
            position.x.round() as i32,
            position.y.round() as i32,
            position.z.round() as i32,
        )
    }

    fn build_position_map(blocks: &[GameBlock]) -> HashMap<IVec3, usize> {
        blocks
            .iter()
            .enumerate()
            .map(|(index, block)| (Self::position_key(block.position), index))
            .collect()
    }

    /// Batch face culling over a flat collection, the initial-load path.
    ///
    /// Neighbor lookups go through a temporary position map, O(1) per
    /// face, instead of chunk indirection. Partial shapes are skipped
    /// entirely; their face sets stay empty and the renderer draws them
    /// in full.
    pub fn recalculate_all_faces(&self, blocks: &mut [GameBlock]) {
        if blocks.is_empty() {
            return;
        }
        debug!("batch face culling over {} blocks", blocks.len());

        let position_map = Self::build_position_map(blocks);

        // Compute with shared borrows, then write the face sets back.
        let updates: Vec<(usize, HashSet<BlockFace>)> = blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| block.shape.is_full())
            .map(|(index, block)| {
                let faces = self.visible_faces_for(block, |pos| {
                    position_map
                        .get(&Self::position_key(pos))
                        .map(|&i| &blocks[i])
                });
                (index, faces)
            })
            .collect();

        for (index, faces) in updates {
            blocks[index].visible_faces = faces;
        }
    }

    /// Single-edit path: recomputes the block occupying the cell at
    /// `position` (if any) and its six axis neighbors.
    ///
    /// Called after one block is placed or removed; the edit can only
    /// change the visibility of faces touching that cell.
    pub fn update_faces_around(&self, position: Vec3, blocks: &mut [GameBlock]) {
        let position_map = Self::build_position_map(blocks);

        let mut check_positions = vec![position];
        for face in BlockFace::ALL {
            check_positions.push(position + face.offset(self.block_size));
        }

        let updates: Vec<(usize, HashSet<BlockFace>)> = check_positions
            .iter()
            .filter_map(|&pos| {
                let &index = position_map.get(&Self::position_key(pos))?;
                let block = &blocks[index];
                if !block.shape.is_full() {
                    return None;
                }
                let faces = self.visible_faces_for(block, |p| {
                    position_map.get(&Self::position_key(p)).map(|&i| &blocks[i])
                });
                Some((index, faces))
            })
            .collect();

        for (index, faces) in updates {
            blocks[index].visible_faces = faces;
        }
    }

    /// Chunk-relative path: recomputes every full block in the chunk at
    /// `chunk_pos`, resolving neighbors through the manager so blocks in
    /// adjacent chunks occlude correctly across the boundary.
    ///
    /// No-op for a chunk position with no chunk.
    pub fn update_faces_for_chunk(&self, chunks: &mut ChunkManager, chunk_pos: ChunkPosition) {
        let Some(chunk) = chunks.chunk_at(chunk_pos) else {
            return;
        };

        let updates: Vec<(Vec3, HashSet<BlockFace>)> = chunk
            .blocks()
            .filter(|(_, block)| block.shape.is_full())
            .map(|(_, block)| {
                let faces =
                    self.visible_faces_for(block, |pos| chunks.get_block_at_world(pos));
                (block.position, faces)
            })
            .collect();

        for (position, faces) in updates {
            if let Some(block) = chunks.get_block_at_world_mut(position) {
                block.visible_faces = faces;
            }
        }
    }
}
