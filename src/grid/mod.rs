//! Bit-packed terrain grid
//!
//! `BitGrid` stores one bit per cell in row-major order (`index = y * width + x`),
//! `1` for Mountain and `0` for Plain. Every bounds check is always active and
//! reported through [`TileMapError`]; nothing in here panics on bad input.

pub(crate) mod bits;
pub(crate) mod scan;

use crate::config::parallel_min_area;
use crate::debug::trace;
use crate::error::{Result, TileMapError};
use crate::models::{Rect, SurfaceType};

/// Read/write access to a fixed-size layer of surface tiles
pub trait TileLayer {
    /// Number of columns
    fn width(&self) -> usize;

    /// Number of rows
    fn height(&self) -> usize;

    /// Surface at (x, y)
    fn get_tile(&self, x: i32, y: i32) -> Result<SurfaceType>;

    /// Overwrite the surface at (x, y)
    fn set_tile(&mut self, x: i32, y: i32, surface: SurfaceType) -> Result<()>;

    /// Apply `(x, y, surface)` writes in order; stops at the first out-of-range entry
    fn set_tiles<I>(&mut self, cells: I) -> Result<()>
    where
        I: IntoIterator<Item = (i32, i32, SurfaceType)>,
        Self: Sized,
    {
        for (x, y, surface) in cells {
            self.set_tile(x, y, surface)?;
        }
        Ok(())
    }
}

/// Fixed-size terrain grid packed at one bit per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitGrid {
    /// Create a grid of the given size with every cell Plain
    ///
    /// Zero dimensions are rejected, as are sizes whose cells could not all be
    /// addressed with `i32` coordinates.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let invalid = TileMapError::InvalidConstruction { width, height };
        if width == 0 || height == 0 {
            return Err(invalid);
        }
        if width > i32::MAX as usize || height > i32::MAX as usize {
            return Err(invalid);
        }
        let cells = width.checked_mul(height).ok_or(invalid)?;

        trace!("new grid {}x{} ({} bytes)", width, height, bits::bytes_for(cells));
        Ok(Self {
            width,
            height,
            data: vec![0; bits::bytes_for(cells)],
        })
    }

    /// Build a grid from `(x, y, surface)` entries applied in sequence order
    ///
    /// Later entries win over earlier ones at the same cell; cells not named stay Plain.
    pub fn from_cells<I>(cells: I, width: usize, height: usize) -> Result<Self>
    where
        I: IntoIterator<Item = (i32, i32, SurfaceType)>,
    {
        let mut grid = Self::new(width, height)?;
        grid.set_tiles(cells)?;
        Ok(grid)
    }

    /// Get grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get grid height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the surface at (x, y)
    pub fn get_tile(&self, x: i32, y: i32) -> Result<SurfaceType> {
        let index = self.index(x, y)?;
        Ok(SurfaceType::from_bit(bits::get(&self.data, index)))
    }

    /// Set the surface at (x, y)
    pub fn set_tile(&mut self, x: i32, y: i32, surface: SurfaceType) -> Result<()> {
        let index = self.index(x, y)?;
        bits::set(&mut self.data, index, surface.is_mountain());
        Ok(())
    }

    /// Set every cell inside `area` to `surface`
    ///
    /// Same result as calling [`set_tile`](Self::set_tile) per cell; an empty
    /// region is a no-op.
    pub fn fill_region(&mut self, area: Rect, surface: SurfaceType) -> Result<()> {
        self.check_region(area)?;
        if area.is_empty() {
            return Ok(());
        }

        trace!(
            "fill {}x{} at ({}, {}) with {:?}",
            area.width, area.height, area.x, area.y, surface
        );

        let value = surface.is_mountain();
        let (left, top, span_len, rows) = Self::region_bounds(area);

        // Full-width rows are contiguous in the flat index
        if span_len == self.width {
            bits::fill_span(&mut self.data, top * self.width, span_len * rows, value);
            return Ok(());
        }

        for y in top..top + rows {
            bits::fill_span(&mut self.data, y * self.width + left, span_len, value);
        }
        Ok(())
    }

    /// Check whether every cell inside `area` allows object placement
    ///
    /// Rows are scanned top to bottom and the scan stops at the first Mountain.
    /// Large regions are handed to the row-parallel scan. An empty region is
    /// vacuously placeable.
    pub fn can_place_object_in_area(&self, area: Rect) -> Result<bool> {
        self.check_region(area)?;
        if area.is_empty() {
            return Ok(true);
        }
        if area.area() >= parallel_min_area() {
            trace!("placement query over {} cells -> parallel scan", area.area());
            return Ok(self.scan_region_parallel(area));
        }

        let (left, top, span_len, rows) = Self::region_bounds(area);
        for y in top..top + rows {
            if bits::span_any(&self.data, y * self.width + left, span_len) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Row-parallel variant of [`can_place_object_in_area`](Self::can_place_object_in_area)
    pub fn can_place_object_in_area_parallel(&self, area: Rect) -> Result<bool> {
        self.check_region(area)?;
        if area.is_empty() {
            return Ok(true);
        }
        Ok(self.scan_region_parallel(area))
    }

    /// Count cells of the given surface
    pub fn count(&self, surface: SurfaceType) -> usize {
        let mountains = bits::span_count(&self.data, 0, self.cell_count());
        self.census(surface, mountains)
    }

    /// Count cells of the given surface using parallel chunks
    pub fn count_parallel(&self, surface: SurfaceType) -> usize {
        let mountains = scan::count_ones_parallel(&self.data);
        self.census(surface, mountains)
    }

    /// Reset every cell to Plain
    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    /// Get raw packed data (row-major, LSB-first within each byte)
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over every cell as `(x, y, surface)` in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (i32, i32, SurfaceType)> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| {
                let bit = bits::get(&self.data, y * self.width + x);
                (x as i32, y as i32, SurfaceType::from_bit(bit))
            })
        })
    }

    fn cell_count(&self) -> usize {
        self.width * self.height
    }

    fn census(&self, surface: SurfaceType, mountains: usize) -> usize {
        match surface {
            SurfaceType::Mountain => mountains,
            SurfaceType::Plain => self.cell_count() - mountains,
        }
    }

    fn scan_region_parallel(&self, area: Rect) -> bool {
        let (left, top, span_len, rows) = Self::region_bounds(area);
        !scan::any_set_parallel(&self.data, self.width, left, top, top + rows, span_len)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Result<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return Err(TileMapError::OutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(y as usize * self.width + x as usize)
    }

    fn check_region(&self, area: Rect) -> Result<()> {
        let fits = area.x >= 0
            && area.y >= 0
            && area.width >= 0
            && area.height >= 0
            && area.x as usize + area.width as usize <= self.width
            && area.y as usize + area.height as usize <= self.height;
        if fits {
            Ok(())
        } else {
            Err(TileMapError::RegionOutOfRange {
                rect: area,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// (left, top, columns, rows) of a region already checked to fit
    fn region_bounds(area: Rect) -> (usize, usize, usize, usize) {
        (
            area.x as usize,
            area.y as usize,
            area.width as usize,
            area.height as usize,
        )
    }
}

impl TileLayer for BitGrid {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn get_tile(&self, x: i32, y: i32) -> Result<SurfaceType> {
        BitGrid::get_tile(self, x, y)
    }

    fn set_tile(&mut self, x: i32, y: i32, surface: SurfaceType) -> Result<()> {
        BitGrid::set_tile(self, x, y, surface)
    }
}
