//! tile_map - bit-packed terrain layer
//!
//! A fixed-size 2D grid classifying each cell as Plain (passable) or Mountain
//! (impassable), stored at one bit per cell. Supports point reads and writes,
//! rectangular fills, and rectangular placement checks.
//!
//! ```
//! use tile_map::{BitGrid, Rect, SurfaceType};
//!
//! let mut grid = BitGrid::new(64, 64)?;
//! grid.fill_region(Rect::new(8, 8, 4, 4), SurfaceType::Mountain)?;
//! assert_eq!(grid.get_tile(9, 9)?, SurfaceType::Mountain);
//! assert!(!grid.can_place_object_in_area(Rect::new(0, 0, 16, 16))?);
//! assert!(grid.can_place_object_in_area(Rect::new(12, 0, 52, 64))?);
//! # Ok::<(), tile_map::TileMapError>(())
//! ```
//!
//! Set `TILEMAP_DEBUG` to trace grid operations on stderr, and
//! `TILEMAP_PARALLEL_MIN_AREA` to tune when placement checks go row-parallel.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

mod config;
mod debug;

/// Error taxonomy for grid operations
pub mod error;
/// Bit-packed grid storage and region operations
pub mod grid;
/// Core data types (SurfaceType, Rect)
pub mod models;

pub use error::{Result, TileMapError};
pub use grid::{BitGrid, TileLayer};
pub use models::{Rect, SurfaceType};
