//! Block data — the palette of placeable block types, their shapes, and
//! the six face tags used by face culling.

use std::collections::HashSet;

use glam::{Quat, Vec3};

use crate::physics::collision::Aabb;

/// Block type palette.
///
/// Each type carries the flags the spatial systems care about: whether it
/// collides (pathfinding support / head clearance), whether it renders
/// (face culling treats invisible neighbors as absent), and a height
/// multiplier for its bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Grass,
    Cobblestone,
    Stone,
    RoomFloor,
    /// Decorative water; walk-through, never supports an agent.
    Water,
    /// Editor-only collider; blocks movement but renders nothing.
    InvisibleBarrier,
}

impl BlockType {
    /// Display name for editor UI labels.
    pub fn display_name(&self) -> &'static str {
        match self {
            BlockType::Grass => "Grass",
            BlockType::Cobblestone => "Cobblestone",
            BlockType::Stone => "Stone",
            BlockType::RoomFloor => "Room Floor",
            BlockType::Water => "Water",
            BlockType::InvisibleBarrier => "Invisible Barrier",
        }
    }

    /// Whether this type participates in collision (ground support and
    /// head-clearance checks).
    pub fn has_collision(&self) -> bool {
        !matches!(self, BlockType::Water)
    }

    /// Whether this type produces visible geometry. An invisible
    /// neighbor never hides a face.
    pub fn is_visible(&self) -> bool {
        !matches!(self, BlockType::InvisibleBarrier)
    }

    /// Vertical size multiplier applied to `block_size` for this type's
    /// bounding box.
    pub fn height(&self) -> f32 {
        1.0
    }
}

/// Geometric shape of a placed block.
///
/// Only [`BlockShape::FullBlock`] participates in face culling; partial
/// shapes are always drawn in full.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockShape {
    FullBlock,
    SlabBottom,
    SlabTop,
    VerticalSlab,
    Wedge,
    CornerWedge,
}

impl BlockShape {
    /// Whether this shape fills its entire cell (and can therefore hide
    /// a neighbor's face).
    pub fn is_full(&self) -> bool {
        matches!(self, BlockShape::FullBlock)
    }
}

/// The six faces of a full block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockFace {
    Top,
    Bottom,
    Front,
    Back,
    Left,
    Right,
}

impl BlockFace {
    /// All six faces in a fixed order.
    pub const ALL: [BlockFace; 6] = [
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Front,
        BlockFace::Back,
        BlockFace::Left,
        BlockFace::Right,
    ];

    /// Unit direction this face points toward, scaled to one block.
    ///
    /// Front faces +Z, Right faces +X, Top faces +Y.
    pub fn offset(&self, block_size: f32) -> Vec3 {
        match self {
            BlockFace::Top => Vec3::new(0.0, block_size, 0.0),
            BlockFace::Bottom => Vec3::new(0.0, -block_size, 0.0),
            BlockFace::Front => Vec3::new(0.0, 0.0, block_size),
            BlockFace::Back => Vec3::new(0.0, 0.0, -block_size),
            BlockFace::Right => Vec3::new(block_size, 0.0, 0.0),
            BlockFace::Left => Vec3::new(-block_size, 0.0, 0.0),
        }
    }

    /// The face on the opposite side of the block.
    pub fn opposite(&self) -> BlockFace {
        match self {
            BlockFace::Top => BlockFace::Bottom,
            BlockFace::Bottom => BlockFace::Top,
            BlockFace::Front => BlockFace::Back,
            BlockFace::Back => BlockFace::Front,
            BlockFace::Left => BlockFace::Right,
            BlockFace::Right => BlockFace::Left,
        }
    }
}

/// A placed block: one voxel cell's content.
///
/// `position` is the world-space block center. `visible_faces` is owned
/// by the face-culling system and only meaningful for full blocks.
#[derive(Debug, Clone)]
pub struct GameBlock {
    pub position: Vec3,
    pub block_type: BlockType,
    pub shape: BlockShape,
    /// Rotation around the Y axis in degrees. A rotated block's local
    /// front no longer points along +Z, so face culling rotates its
    /// neighbor offsets by this angle.
    pub rotation_y: f32,
    pub visible_faces: HashSet<BlockFace>,
}

impl GameBlock {
    /// Creates a block at `position` (world-space center).
    ///
    /// Full blocks start with all six faces visible; the renderer draws
    /// everything until the first culling pass. Partial shapes keep an
    /// empty set, they are always drawn in full.
    pub fn new(block_type: BlockType, shape: BlockShape, position: Vec3, rotation_y: f32) -> Self {
        let visible_faces = if shape.is_full() {
            BlockFace::ALL.into_iter().collect()
        } else {
            HashSet::new()
        };
        Self {
            position,
            block_type,
            shape,
            rotation_y,
            visible_faces,
        }
    }

    /// World-space bounding box: `block_size` wide and deep, with the
    /// type's height multiplier applied vertically.
    pub fn bounding_box(&self, block_size: f32) -> Aabb {
        let half = block_size / 2.0;
        let half_height = (self.block_type.height() * block_size) / 2.0;
        Aabb::from_center_half_extents(self.position, Vec3::new(half, half_height, half))
    }

    /// `face`'s neighbor offset rotated by this block's Y rotation.
    pub fn rotated_face_offset(&self, face: BlockFace, block_size: f32) -> Vec3 {
        Quat::from_rotation_y(self.rotation_y.to_radians()) * face.offset(block_size)
    }
}
