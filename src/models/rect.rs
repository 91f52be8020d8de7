/// Axis-aligned region in grid coordinates, `[x, x + width) x [y, y + height)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    /// Number of columns
    pub width: i32,
    /// Number of rows
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column inside the region
    pub fn left(&self) -> i32 {
        self.x
    }

    /// First row inside the region
    pub fn top(&self) -> i32 {
        self.y
    }

    /// First column past the region (saturating)
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// First row past the region (saturating)
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Number of cells covered; zero for empty or malformed regions
    pub fn area(&self) -> usize {
        if self.width <= 0 || self.height <= 0 {
            return 0;
        }
        self.width as usize * self.height as usize
    }

    /// True when the region covers no cells
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if (x, y) lies inside the region
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left() && x < self.right() && y >= self.top() && y < self.bottom()
    }
}
