//! Core data types shared by the grid and its callers

/// Axis-aligned regions in grid coordinates
pub mod rect;
/// Two-value terrain classification
pub mod surface;

pub use rect::Rect;
pub use surface::SurfaceType;
