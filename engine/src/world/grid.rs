//! Grid Configuration Module
//!
//! Contains grid and map configuration for world-space operations.
//!
//! ## Cell addressing
//! A grid cell is the `block_size`-sized cube containing a world position.
//! Cell indices come from floor division, so negative coordinates address
//! cells correctly (`-0.5 / 4.0` lands in cell `-1`, not cell `0`). The
//! cell *center* is the canonical position for anything grid-quantized:
//! placed blocks and pathfinding waypoints both sit on centers.

use glam::{IVec3, Vec3};

/// Grid and map configuration for world-space operations.
///
/// Controls cell size and map boundaries.
#[derive(Clone, Copy, Debug)]
pub struct GridConfig {
    /// Edge length of one grid cell in world units
    pub block_size: f32,
    /// Map bounds (-map_size to +map_size on X and Z)
    pub map_size: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            block_size: 4.0,
            map_size: 512.0,
        }
    }
}

impl GridConfig {
    /// Create a config with custom cell size and map bounds.
    pub fn new(block_size: f32, map_size: f32) -> Self {
        Self {
            block_size,
            map_size,
        }
    }

    /// Snap a position onto the center of its grid cell (X and Z only).
    ///
    /// Y is preserved; vertical placement is resolved against ground
    /// support, not the grid.
    pub fn snap_to_cell_center(&self, pos: Vec3) -> Vec3 {
        snap_to_cell_center(pos, self.block_size)
    }

    /// Clamp a position to the map boundaries.
    pub fn clamp_to_map(&self, pos: Vec3) -> Vec3 {
        clamp_to_map(pos, self.map_size)
    }
}

/// Snap a position onto the center of its enclosing grid cell.
///
/// `floor(v / block_size) * block_size + block_size / 2` per horizontal
/// axis. Applying this twice is a no-op: a cell center maps to itself.
pub fn snap_to_cell_center(pos: Vec3, block_size: f32) -> Vec3 {
    let half = block_size / 2.0;
    Vec3::new(
        (pos.x / block_size).floor() * block_size + half,
        pos.y,
        (pos.z / block_size).floor() * block_size + half,
    )
}

/// Integer cell index of the cell containing a world position.
pub fn world_to_cell(pos: Vec3, block_size: f32) -> IVec3 {
    IVec3::new(
        (pos.x / block_size).floor() as i32,
        (pos.y / block_size).floor() as i32,
        (pos.z / block_size).floor() as i32,
    )
}

/// Clamp a position to map boundaries on X and Z; Y is preserved.
pub fn clamp_to_map(pos: Vec3, bounds: f32) -> Vec3 {
    Vec3::new(
        pos.x.clamp(-bounds, bounds),
        pos.y,
        pos.z.clamp(-bounds, bounds),
    )
}
