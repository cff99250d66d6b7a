use std::fmt::{self, Display};

use steel_utils::Direction;

use super::{BlockRef, Faces, Fluid, FluidState};

/// The state of one cell: a block plus the properties multiface behaviors read.
///
/// States are immutable values. Every `set_*` method returns a new state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockState {
    block: BlockRef,
    faces: Faces,
    waterlogged: bool,
    level: u8,
}

impl BlockState {
    pub(super) const fn new(block: BlockRef) -> Self {
        Self {
            block,
            faces: Faces::empty(),
            waterlogged: false,
            level: 0,
        }
    }

    /// Returns the block of this state.
    #[must_use]
    pub const fn get_block(&self) -> BlockRef {
        self.block
    }

    /// Returns true if this state belongs to `block`.
    #[must_use]
    pub fn is(&self, block: &super::Block) -> bool {
        self.block == block
    }

    /// Returns the face bitmask. Always empty for non-multiface blocks.
    #[must_use]
    pub const fn faces(&self) -> Faces {
        self.faces
    }

    /// Returns a copy with the given face bitmask.
    ///
    /// Non-multiface blocks carry no faces, so the bitmask is ignored for them.
    #[must_use]
    pub const fn with_faces(mut self, faces: Faces) -> Self {
        if self.block.config.multiface {
            self.faces = faces;
        }
        self
    }

    /// Returns true if the face in `direction` is set.
    #[must_use]
    pub const fn has_face(&self, direction: Direction) -> bool {
        self.faces.has(direction)
    }

    /// Returns a copy with the face in `direction` set or cleared.
    #[must_use]
    pub const fn set_face(self, direction: Direction, value: bool) -> Self {
        self.with_faces(self.faces.with(direction, value))
    }

    /// Returns true if at least one face is set.
    #[must_use]
    pub const fn has_any_face(&self) -> bool {
        !self.faces.is_empty()
    }

    /// Returns true if a multiface block could still grow another face here.
    #[must_use]
    pub const fn has_any_vacant_face(&self) -> bool {
        self.block.config.multiface && !self.faces.is_all()
    }

    /// Returns true if the block is filled with water.
    #[must_use]
    pub const fn is_waterlogged(&self) -> bool {
        self.waterlogged
    }

    /// Returns a copy with the waterlogged flag changed.
    #[must_use]
    pub const fn set_waterlogged(mut self, waterlogged: bool) -> Self {
        self.waterlogged = waterlogged;
        self
    }

    /// Returns the fluid level. `0` is a source block.
    #[must_use]
    pub const fn level(&self) -> u8 {
        self.level
    }

    /// Returns a copy with the fluid level changed.
    #[must_use]
    pub const fn set_level(mut self, level: u8) -> Self {
        self.level = level;
        self
    }

    /// Returns true for air.
    #[must_use]
    pub const fn is_air(&self) -> bool {
        self.block.config.is_air
    }

    /// Returns true if placing a block here may overwrite this state.
    #[must_use]
    pub const fn can_be_replaced(&self) -> bool {
        self.block.config.replaceable
    }

    /// Returns true if the face towards `direction` can support an attached block.
    #[must_use]
    pub const fn is_face_sturdy(&self, _direction: Direction) -> bool {
        self.block.config.solid
    }

    /// Returns the fluid contained in this cell.
    #[must_use]
    pub fn fluid_state(&self) -> FluidState {
        match self.block.config.fluid {
            Fluid::Empty if self.waterlogged => FluidState::source(Fluid::Water),
            Fluid::Empty => FluidState::EMPTY,
            fluid => FluidState {
                fluid,
                source: self.level == 0,
            },
        }
    }
}

impl Display for BlockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.block)?;
        if self.block.config.multiface {
            let faces: Vec<&str> = self.faces.directions().map(Direction::name).collect();
            write!(f, "[{}", faces.join(","))?;
            if self.waterlogged {
                f.write_str(",waterlogged")?;
            }
            f.write_str("]")?;
        }
        Ok(())
    }
}
