//! The six block directions and the horizontal rotations built on them.

use std::fmt::{self, Display};

use crate::math::Axis;
use crate::random::{Random, shuffle};

/// One of the six faces of a block.
///
/// The ordinal values (0-5) follow the 3D data order used by block state
/// storage and are relied on by face bitmasks.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Downward (-Y direction)
    Down = 0,
    /// Upward (+Y direction)
    Up = 1,
    /// North (-Z direction)
    North = 2,
    /// South (+Z direction)
    South = 3,
    /// West (-X direction)
    West = 4,
    /// East (+X direction)
    East = 5,
}

impl Direction {
    /// All six directions in ordinal order.
    pub const VALUES: [Direction; 6] = [
        Direction::Down,
        Direction::Up,
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// The four horizontal directions in clockwise order, starting north.
    pub const HORIZONTAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Down => Self::Up,
            Self::Up => Self::Down,
            Self::North => Self::South,
            Self::South => Self::North,
            Self::West => Self::East,
            Self::East => Self::West,
        }
    }

    /// Returns the axis this direction lies on.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Down | Self::Up => Axis::Y,
            Self::North | Self::South => Axis::Z,
            Self::West | Self::East => Axis::X,
        }
    }

    /// Gets the offset in the given direction.
    ///
    /// Returns (dx, dy, dz) for this direction.
    #[must_use]
    pub const fn offset(self) -> (i32, i32, i32) {
        match self {
            Self::Down => (0, -1, 0),
            Self::Up => (0, 1, 0),
            Self::North => (0, 0, -1),
            Self::South => (0, 0, 1),
            Self::West => (-1, 0, 0),
            Self::East => (1, 0, 0),
        }
    }

    /// Rotates a horizontal direction clockwise around the y axis (seen from above).
    ///
    /// Returns `None` for `Up` and `Down`.
    #[must_use]
    pub const fn clockwise(self) -> Option<Self> {
        match self {
            Self::North => Some(Self::East),
            Self::East => Some(Self::South),
            Self::South => Some(Self::West),
            Self::West => Some(Self::North),
            Self::Up | Self::Down => None,
        }
    }

    /// Rotates a horizontal direction counter-clockwise around the y axis.
    ///
    /// Returns `None` for `Up` and `Down`.
    #[must_use]
    pub const fn counter_clockwise(self) -> Option<Self> {
        match self {
            Self::North => Some(Self::West),
            Self::West => Some(Self::South),
            Self::South => Some(Self::East),
            Self::East => Some(Self::North),
            Self::Up | Self::Down => None,
        }
    }

    /// Returns the six directions in a random order.
    pub fn all_shuffled<R: Random + ?Sized>(random: &mut R) -> [Direction; 6] {
        let mut directions = Self::VALUES;
        shuffle(&mut directions, random);
        directions
    }

    /// Returns the lowercase name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Down => "down",
            Self::Up => "up",
            Self::North => "north",
            Self::South => "south",
            Self::West => "west",
            Self::East => "east",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A quarter-turn rotation around the y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// No rotation.
    #[default]
    None,
    /// A quarter turn clockwise.
    Clockwise90,
    /// A half turn.
    Clockwise180,
    /// A quarter turn counter-clockwise.
    CounterClockwise90,
}

impl Rotation {
    /// Rotates a direction. Vertical directions are left untouched.
    #[must_use]
    pub fn rotate(self, direction: Direction) -> Direction {
        let rotated = match self {
            Self::None => Some(direction),
            Self::Clockwise90 => direction.clockwise(),
            Self::Clockwise180 => direction.clockwise().and_then(Direction::clockwise),
            Self::CounterClockwise90 => direction.counter_clockwise(),
        };
        rotated.unwrap_or(direction)
    }
}
