//! Mob Sandbox - Headless Spatial-Core Demo
//!
//! Run with: `cargo run --bin mob-sandbox`
//!
//! Builds a small city street out of blocks, runs the batch face-culling
//! pass, fires a few editor-style pick rays, steps one occlusion frame
//! toward the player, and routes a pedestrian with the grid pathfinder.
//! Everything a renderer would consume (visible faces, dirty chunks,
//! occlusion toggles, waypoint queues) is narrated to the log instead.
//!
//! Set `RUST_LOG=debug` to see the per-system internals.

use glam::Vec3;
use log::info;

use paper_mob_engine::game::config::WorldConfig;
use paper_mob_engine::game::entities::{CarKind, GameCar, GameHouse, GameItem, HouseKind, ItemKind};
use paper_mob_engine::game::systems::{
    FaceCullingSystem, OcclusionSystem, PathfindingSystem, RaycastSystem,
};
use paper_mob_engine::game::world::{BlockShape, BlockType, ChunkManager, GameBlock};
use paper_mob_engine::physics::collision::Ray;
use paper_mob_engine::world::GridConfig;

/// Street dimensions in cells.
const STREET_CELLS_X: i32 = 12;
const STREET_CELLS_Z: i32 = 6;

fn cell_center(config: &WorldConfig, cx: i32, cz: i32, y: f32) -> Vec3 {
    let half = config.block_size / 2.0;
    Vec3::new(
        cx as f32 * config.block_size + half,
        y,
        cz as f32 * config.block_size + half,
    )
}

/// Cobblestone street with a stone wall across it, leaving a gap at one
/// end so a route around exists.
fn build_street(config: &WorldConfig, chunks: &mut ChunkManager) {
    let half = config.block_size / 2.0;
    let mut blocks = Vec::new();

    for cx in 0..STREET_CELLS_X {
        for cz in 0..STREET_CELLS_Z {
            blocks.push(GameBlock::new(
                BlockType::Cobblestone,
                BlockShape::FullBlock,
                cell_center(config, cx, cz, half),
                0.0,
            ));
        }
    }

    // Wall across the street at cx=6, one cell of gap at cz=0
    for cz in 1..STREET_CELLS_Z {
        blocks.push(GameBlock::new(
            BlockType::Stone,
            BlockShape::FullBlock,
            cell_center(config, 6, cz, half + config.block_size),
            0.0,
        ));
    }

    chunks.load_initial_blocks(blocks);
}

fn main() {
    env_logger::init();

    let config = WorldConfig::default();
    let mut chunks = ChunkManager::new(config.block_size, config.ground_fallback_y);

    build_street(&config, &mut chunks);
    let dirty = chunks.drain_dirty_chunks();
    info!(
        "street built: {} chunks, {} queued for meshing",
        chunks.chunk_count(),
        dirty.len()
    );

    // Batch face culling, the initial-load path over the flat block list
    let culler = FaceCullingSystem::new(config.block_size);
    let mut all_blocks: Vec<GameBlock> = chunks.all_blocks().cloned().collect();
    culler.recalculate_all_faces(&mut all_blocks);
    let faces: usize = all_blocks.iter().map(|b| b.visible_faces.len()).sum();
    info!(
        "face culling: {} blocks keep {faces} of {} faces",
        all_blocks.len(),
        all_blocks.len() * 6
    );

    // Editor-style picking: a click ray down onto the street
    let raycaster = RaycastSystem::new(config.block_size);
    let pick_ray = Ray::between(Vec3::new(10.0, 30.0, -10.0), Vec3::new(10.0, 2.0, 10.0));
    match raycaster.get_block_at_ray(&pick_ray, &all_blocks) {
        Some(block) => info!(
            "pick ray hit a {} block at {:?}",
            block.block_type.display_name(),
            block.position
        ),
        None => info!("pick ray missed"),
    }

    // Item picking skips collected pickups
    let mut money = GameItem::new(1, Vec3::new(10.0, 5.0, 10.0), ItemKind::MoneyStack);
    money.collected = true;
    let pistol = GameItem::new(2, Vec3::new(10.0, 5.0, 14.0), ItemKind::Pistol);
    let items = vec![money, pistol];
    let item_ray = Ray::between(Vec3::new(10.0, 5.0, -10.0), Vec3::new(10.0, 5.0, 20.0));
    match raycaster.get_item_at_ray(&item_ray, &items) {
        Some(item) => info!("item ray picked the {}", item.kind.display_name()),
        None => info!("item ray found nothing"),
    }

    // One occlusion frame: camera behind a tenement, player on the street
    let mut occluders = vec![
        GameHouse::new(10, Vec3::new(24.0, 2.0, 0.0), HouseKind::Tenement),
        GameHouse::new(11, Vec3::new(44.0, 2.0, 30.0), HouseKind::CornerShop),
    ];
    let camera = Vec3::new(24.0, 10.0, -30.0);
    let player = Vec3::new(24.0, 6.0, 10.0);
    let mut occlusion = OcclusionSystem::new();
    occlusion.update(camera, player, &mut occluders);
    for house in &occluders {
        if house.is_occluded() {
            info!("{} faded out of the sight line", house.kind.display_name());
        }
    }

    // A parked car for scale; cars participate in picking too
    let cars = vec![GameCar::new(20, Vec3::new(14.0, 3.0, 18.0), CarKind::Taxi)];
    let car_ray = Ray::between(camera, cars[0].position);
    if let Some(car) = raycaster.get_car_at_ray(&car_ray, &cars) {
        info!("camera ray crosses a {}", car.kind.display_name());
    }

    // Route a pedestrian from one end of the street to the other; the
    // wall forces the path through the gap. Goals from click rays can
    // land outside the map, so clamp first.
    let grid = GridConfig::new(config.block_size, config.map_size);
    let pathfinder = PathfindingSystem::new(config.block_size, config.character_size);
    let start = cell_center(&config, 1, 3, 6.0);
    let goal = grid.clamp_to_map(cell_center(&config, 10, 3, 6.0));
    match pathfinder.find_path(&chunks, start, goal) {
        Some(path) => {
            info!("route found, {} waypoints:", path.len());
            for waypoint in &path {
                info!("  -> {waypoint:?}");
            }
        }
        None => info!("no route between {start:?} and {goal:?}"),
    }
}
