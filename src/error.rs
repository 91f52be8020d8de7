use std::fmt;

use crate::models::Rect;

/// Errors reported by tile layer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileMapError {
    /// Point coordinates fall outside `[0, width) x [0, height)`
    OutOfRange {
        /// Requested column
        x: i32,
        /// Requested row
        y: i32,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
    /// Region has a negative origin or extent, or does not fit inside the grid
    RegionOutOfRange {
        /// Offending region
        rect: Rect,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
    /// Zero dimension, or a cell count that does not fit in `usize`
    InvalidConstruction {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
}

impl fmt::Display for TileMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TileMapError::OutOfRange {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "coordinates ({}, {}) out of range for {}x{} grid",
                x, y, width, height
            ),
            TileMapError::RegionOutOfRange {
                rect,
                width,
                height,
            } => write!(
                f,
                "region {}x{} at ({}, {}) out of range for {}x{} grid",
                rect.width, rect.height, rect.x, rect.y, width, height
            ),
            TileMapError::InvalidConstruction { width, height } => {
                write!(f, "invalid grid dimensions {}x{}", width, height)
            }
        }
    }
}

impl std::error::Error for TileMapError {}

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, TileMapError>;
