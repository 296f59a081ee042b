use glam::IVec3;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Integer block coordinate in world space.
///
/// One unit is one block. `y` is the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockPos {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl BlockPos {
    /// The world origin.
    pub const ORIGIN: Self = Self { x: 0, y: 0, z: 0 };

    /// Creates a new BlockPos with the given coordinates.
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Returns the position `n` blocks above this one.
    pub fn up(self, n: i32) -> Self {
        Self::new(self.x, self.y + n, self.z)
    }

    /// Returns the position `n` blocks below this one.
    pub fn down(self, n: i32) -> Self {
        Self::new(self.x, self.y - n, self.z)
    }

    /// Returns this position shifted by the given deltas.
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Like [`BlockPos::offset`], but `None` if any coordinate overflows.
    pub fn checked_offset(self, dx: i32, dy: i32, dz: i32) -> Option<Self> {
        Some(Self::new(
            self.x.checked_add(dx)?,
            self.y.checked_add(dy)?,
            self.z.checked_add(dz)?,
        ))
    }

    /// Returns the same column at a different height.
    pub fn with_y(self, y: i32) -> Self {
        Self::new(self.x, y, self.z)
    }
}

impl From<BlockPos> for IVec3 {
    fn from(p: BlockPos) -> IVec3 {
        IVec3::new(p.x, p.y, p.z)
    }
}

impl From<IVec3> for BlockPos {
    fn from(v: IVec3) -> BlockPos {
        BlockPos::new(v.x, v.y, v.z)
    }
}

impl Add<BlockPos> for BlockPos {
    type Output = BlockPos;

    fn add(self, rhs: BlockPos) -> Self::Output {
        BlockPos::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub<BlockPos> for BlockPos {
    type Output = BlockPos;

    fn sub(self, rhs: BlockPos) -> Self::Output {
        BlockPos::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl fmt::Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Block({}, {}, {})", self.x, self.y, self.z)
    }
}
