//! Face Culling Tests - Visibility Rule, Rotation, and Update Paths
//!
//! Integration tests for the face-culling system across its three entry
//! points: the bulk initial-load pass, the single-edit neighborhood
//! pass, and the chunk-relative pass through ChunkManager.

use glam::Vec3;
use paper_mob_engine::game::systems::FaceCullingSystem;
use paper_mob_engine::game::world::{
    BlockFace, BlockShape, BlockType, ChunkManager, ChunkPosition, GameBlock,
};

const BLOCK_SIZE: f32 = 4.0;

fn full(block_type: BlockType, position: Vec3) -> GameBlock {
    GameBlock::new(block_type, BlockShape::FullBlock, position, 0.0)
}

// ============================================================================
// The Visibility Rule
// ============================================================================

#[test]
fn test_two_adjacent_blocks_hide_exactly_the_shared_face() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    // A at the origin cell, B one cell along +X
    let mut blocks = vec![
        full(BlockType::Grass, Vec3::new(2.0, 2.0, 2.0)),
        full(BlockType::Grass, Vec3::new(6.0, 2.0, 2.0)),
    ];
    system.recalculate_all_faces(&mut blocks);

    let a = &blocks[0];
    let b = &blocks[1];
    assert!(!a.visible_faces.contains(&BlockFace::Right));
    assert!(!b.visible_faces.contains(&BlockFace::Left));
    for face in [
        BlockFace::Top,
        BlockFace::Bottom,
        BlockFace::Front,
        BlockFace::Back,
    ] {
        assert!(a.visible_faces.contains(&face), "A lost {face:?}");
        assert!(b.visible_faces.contains(&face), "B lost {face:?}");
    }
    assert!(a.visible_faces.contains(&BlockFace::Left));
    assert!(b.visible_faces.contains(&BlockFace::Right));
}

#[test]
fn test_fully_enclosed_block_shows_nothing() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    let center = Vec3::new(2.0, 2.0, 2.0);
    let mut blocks = vec![full(BlockType::Stone, center)];
    for face in BlockFace::ALL {
        blocks.push(full(BlockType::Stone, center + face.offset(BLOCK_SIZE)));
    }
    system.recalculate_all_faces(&mut blocks);
    assert!(blocks[0].visible_faces.is_empty());
}

#[test]
fn test_invisible_and_partial_neighbors_do_not_hide_faces() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    let mut blocks = vec![
        full(BlockType::Stone, Vec3::new(2.0, 2.0, 2.0)),
        // Invisible collider on +X, bottom slab on -X
        full(BlockType::InvisibleBarrier, Vec3::new(6.0, 2.0, 2.0)),
        GameBlock::new(
            BlockType::Stone,
            BlockShape::SlabBottom,
            Vec3::new(-2.0, 2.0, 2.0),
            0.0,
        ),
    ];
    system.recalculate_all_faces(&mut blocks);
    assert_eq!(blocks[0].visible_faces.len(), 6);
}

#[test]
fn test_partial_shapes_are_never_culled() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    let mut blocks = vec![
        GameBlock::new(
            BlockType::Stone,
            BlockShape::Wedge,
            Vec3::new(2.0, 2.0, 2.0),
            0.0,
        ),
        full(BlockType::Stone, Vec3::new(6.0, 2.0, 2.0)),
    ];
    system.recalculate_all_faces(&mut blocks);
    // The wedge's set stays empty; the renderer draws it in full
    assert!(blocks[0].visible_faces.is_empty());
}

#[test]
fn test_rotated_block_culls_along_the_rotated_axis() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    // 90-degree rotation: local Front points along world +X, where the
    // neighbor sits
    let mut blocks = vec![
        GameBlock::new(
            BlockType::Stone,
            BlockShape::FullBlock,
            Vec3::new(2.0, 2.0, 2.0),
            90.0,
        ),
        full(BlockType::Stone, Vec3::new(6.0, 2.0, 2.0)),
    ];
    system.recalculate_all_faces(&mut blocks);
    assert!(!blocks[0].visible_faces.contains(&BlockFace::Front));
    assert!(blocks[0].visible_faces.contains(&BlockFace::Back));
    assert!(blocks[0].visible_faces.contains(&BlockFace::Right));
}

// ============================================================================
// Single-Edit Path
// ============================================================================

#[test]
fn test_update_around_reopens_faces_after_removal() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    let mut blocks = vec![
        full(BlockType::Stone, Vec3::new(2.0, 2.0, 2.0)),
        full(BlockType::Stone, Vec3::new(6.0, 2.0, 2.0)),
        full(BlockType::Stone, Vec3::new(10.0, 2.0, 2.0)),
    ];
    system.recalculate_all_faces(&mut blocks);
    assert_eq!(blocks[1].visible_faces.len(), 4);

    // Remove the middle block and refresh its neighborhood
    let removed_at = blocks.remove(1).position;
    system.update_faces_around(removed_at, &mut blocks);

    assert!(blocks[0].visible_faces.contains(&BlockFace::Right));
    assert!(blocks[1].visible_faces.contains(&BlockFace::Left));
}

// ============================================================================
// Chunk-Relative Path
// ============================================================================

#[test]
fn test_chunk_pass_sees_neighbors_in_adjacent_chunks() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    let mut chunks = ChunkManager::new(BLOCK_SIZE, 0.0);
    // Both sides of the +X boundary between chunks (0,0,0) and (1,0,0)
    chunks.add_block(full(BlockType::Stone, Vec3::new(62.0, 2.0, 2.0)));
    chunks.add_block(full(BlockType::Stone, Vec3::new(66.0, 2.0, 2.0)));

    system.update_faces_for_chunk(&mut chunks, ChunkPosition::new(0, 0, 0));
    system.update_faces_for_chunk(&mut chunks, ChunkPosition::new(1, 0, 0));

    let west = chunks.get_block_at_world(Vec3::new(62.0, 2.0, 2.0)).unwrap();
    let east = chunks.get_block_at_world(Vec3::new(66.0, 2.0, 2.0)).unwrap();
    assert!(!west.visible_faces.contains(&BlockFace::Right));
    assert!(!east.visible_faces.contains(&BlockFace::Left));
}

#[test]
fn test_chunk_pass_on_missing_chunk_is_a_noop() {
    let system = FaceCullingSystem::new(BLOCK_SIZE);
    let mut chunks = ChunkManager::new(BLOCK_SIZE, 0.0);
    system.update_faces_for_chunk(&mut chunks, ChunkPosition::new(5, 5, 5));
    assert_eq!(chunks.chunk_count(), 0);
}
