/// Terrain classification of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SurfaceType {
    /// Passable ground (stored as bit 0)
    #[default]
    Plain = 0,
    /// Impassable ground (stored as bit 1)
    Mountain = 1,
}

/// Placement table indexed by discriminant
const CAN_PLACE_OBJECT: [bool; 2] = [true, false];

impl SurfaceType {
    /// Map a stored bit back to its surface
    #[inline]
    pub fn from_bit(bit: bool) -> Self {
        if bit {
            SurfaceType::Mountain
        } else {
            SurfaceType::Plain
        }
    }

    /// Bit stored for this surface
    #[inline]
    pub fn is_mountain(self) -> bool {
        self == SurfaceType::Mountain
    }

    /// Whether an object may be placed on a cell of this surface
    #[inline]
    pub fn can_place_object(self) -> bool {
        CAN_PLACE_OBJECT[self as usize]
    }
}
