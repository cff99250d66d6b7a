//! The ways a face can reach a neighbouring face, and where each one lands.

use std::fmt::{self, Display};

use steel_utils::{BlockPos, Direction};

/// A face of a cell that a multiface block could grow onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpreadPos {
    /// The cell.
    pub pos: BlockPos,
    /// The face of `pos` the block would cover.
    pub face: Direction,
}

impl SpreadPos {
    /// Creates a spread position.
    #[must_use]
    pub const fn new(pos: BlockPos, face: Direction) -> Self {
        Self { pos, face }
    }
}

impl Display for SpreadPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pos, self.face)
    }
}

/// How a block covering one face of a cell reaches a neighbouring face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpreadType {
    /// Grow another face of the same cell.
    SamePosition,
    /// Slide into the neighbour, keeping the face orientation.
    SamePlane,
    /// Curl around a convex edge onto the facing side of the diagonal cell.
    WrapAround,
}

impl SpreadType {
    /// Returns where a block on `face` of `pos` ends up when it spreads towards
    /// `spread_direction` using this rule.
    #[must_use]
    pub const fn get_spread_pos(
        self,
        pos: BlockPos,
        spread_direction: Direction,
        face: Direction,
    ) -> SpreadPos {
        match self {
            Self::SamePosition => SpreadPos::new(pos, spread_direction),
            Self::SamePlane => SpreadPos::new(pos.relative(spread_direction), face),
            Self::WrapAround => SpreadPos::new(
                pos.relative(spread_direction).relative(face),
                spread_direction.opposite(),
            ),
        }
    }
}

/// The order spread types are tried in unless a config says otherwise.
pub const DEFAULT_SPREAD_ORDER: [SpreadType; 3] = [
    SpreadType::SamePosition,
    SpreadType::SamePlane,
    SpreadType::WrapAround,
];
