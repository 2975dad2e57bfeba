//! World Module
//!
//! Contains world-space configuration and grid utilities.
//!
//! ## Units
//! World space uses floating-point coordinates; one block unit is
//! `block_size` world units (4.0 by default). Every spatial system in the
//! crate shares this unit.

pub mod grid;

pub use grid::{GridConfig, clamp_to_map, snap_to_cell_center, world_to_cell};
