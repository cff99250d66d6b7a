// Wrapper types making it harder to accidentaly use the wrong underlying type.

use std::fmt::{self, Display};

use bitflags::bitflags;

use crate::direction::Direction;
use crate::math::Vector3;

// A block position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockPos(pub Vector3<i32>);

impl BlockPos {
    /// The world origin.
    pub const ZERO: BlockPos = BlockPos(Vector3::new(0, 0, 0));

    /// Creates a block position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self(Vector3::new(x, y, z))
    }

    /// The x coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    /// The y coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }

    /// The z coordinate.
    #[must_use]
    pub const fn z(&self) -> i32 {
        self.0.z
    }

    /// Returns this position moved by the given deltas.
    #[must_use]
    pub const fn offset(&self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.0.x + dx, self.0.y + dy, self.0.z + dz)
    }

    /// Returns the neighbouring position one step in `direction`.
    #[must_use]
    pub const fn relative(&self, direction: Direction) -> Self {
        let (dx, dy, dz) = direction.offset();
        self.offset(dx, dy, dz)
    }

    /// Manhattan (taxicab) distance between two positions.
    #[must_use]
    pub const fn dist_manhattan(&self, other: &BlockPos) -> i32 {
        (self.0.x - other.0.x).abs() + (self.0.y - other.0.y).abs() + (self.0.z - other.0.z).abs()
    }
}

impl Display for BlockPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.0.x, self.0.y, self.0.z)
    }
}

bitflags! {
    /// Flags passed along with a block write. They control which side effects
    /// the level performs and are otherwise opaque to block behaviors.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct UpdateFlags: u16 {
        /// Notify neighbouring blocks of the change.
        const UPDATE_NEIGHBORS = 1;
        /// Send the change to clients.
        const UPDATE_CLIENTS = 2;

        /// Neighbour notification plus client sync.
        const UPDATE_ALL = Self::UPDATE_NEIGHBORS.bits() | Self::UPDATE_CLIENTS.bits();
    }
}
