//! The block model the spreader works on.
//!
//! A [`Block`] describes a kind of block and the handful of physical
//! properties multiface placement cares about. A [`BlockState`] is one cell's
//! concrete value: the block plus its face bitmask and fluid flags.

mod faces;
mod state;
pub mod vanilla_blocks;

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

pub use faces::Faces;
pub use state::BlockState;

/// A reference to a statically registered block.
pub type BlockRef = &'static Block;

/// The fluid a block carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fluid {
    /// No fluid.
    Empty,
    /// Water.
    Water,
    /// Lava.
    Lava,
}

/// The fluid contained in a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FluidState {
    /// Which fluid is present.
    pub fluid: Fluid,
    /// Whether the fluid is a source rather than flowing.
    pub source: bool,
}

impl FluidState {
    /// A cell without fluid.
    pub const EMPTY: FluidState = FluidState {
        fluid: Fluid::Empty,
        source: false,
    };

    /// A source block of `fluid`.
    #[must_use]
    pub const fn source(fluid: Fluid) -> Self {
        Self {
            fluid,
            source: true,
        }
    }

    /// Returns true if there is no fluid.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self.fluid, Fluid::Empty)
    }

    /// Returns true if this is `fluid`, source or flowing.
    #[must_use]
    pub fn is(self, fluid: Fluid) -> bool {
        self.fluid == fluid
    }

    /// Returns true if this is a source block.
    #[must_use]
    pub const fn is_source(self) -> bool {
        self.source && !self.is_empty()
    }

    /// Returns true if this is a source block of `fluid`.
    #[must_use]
    pub fn is_source_of_type(self, fluid: Fluid) -> bool {
        self.is_source() && self.fluid == fluid
    }
}

/// Static configuration of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(clippy::struct_excessive_bools)]
pub struct BlockConfig {
    /// The block is air.
    pub is_air: bool,
    /// Placement may overwrite the block.
    pub replaceable: bool,
    /// Every face of the block is sturdy enough to attach to.
    pub solid: bool,
    /// The fluid the block itself consists of.
    pub fluid: Fluid,
    /// The block is a fire block.
    pub is_fire: bool,
    /// The block stores a face bitmask.
    pub multiface: bool,
    /// Sculk may consume the block.
    pub sculk_replaceable: bool,
}

impl BlockConfig {
    /// A non-solid, non-replaceable block with no fluid.
    pub const DEFAULT: BlockConfig = BlockConfig {
        is_air: false,
        replaceable: false,
        solid: false,
        fluid: Fluid::Empty,
        is_fire: false,
        multiface: false,
        sculk_replaceable: false,
    };

    /// Marks the block as air (which is also replaceable).
    #[must_use]
    pub const fn air(mut self) -> Self {
        self.is_air = true;
        self.replaceable = true;
        self
    }

    /// Marks the block as replaceable.
    #[must_use]
    pub const fn replaceable(mut self) -> Self {
        self.replaceable = true;
        self
    }

    /// Marks the block as a full, sturdy cube.
    #[must_use]
    pub const fn solid(mut self) -> Self {
        self.solid = true;
        self
    }

    /// Sets the fluid the block is made of.
    #[must_use]
    pub const fn fluid(mut self, fluid: Fluid) -> Self {
        self.fluid = fluid;
        self
    }

    /// Marks the block as fire.
    #[must_use]
    pub const fn fire(mut self) -> Self {
        self.is_fire = true;
        self
    }

    /// Marks the block as a multiface block.
    #[must_use]
    pub const fn multiface(mut self) -> Self {
        self.multiface = true;
        self
    }

    /// Marks the block as consumable by sculk.
    #[must_use]
    pub const fn sculk_replaceable(mut self) -> Self {
        self.sculk_replaceable = true;
        self
    }
}

/// A kind of block.
///
/// Blocks are identified by name; two blocks with the same name are the same block.
#[derive(Debug)]
pub struct Block {
    /// The registry name, without namespace.
    pub name: &'static str,
    /// Static properties.
    pub config: BlockConfig,
}

impl Block {
    /// Creates a block.
    #[must_use]
    pub const fn new(name: &'static str, config: BlockConfig) -> Self {
        Self { name, config }
    }

    /// Returns the state this block is placed with by default.
    #[must_use]
    pub const fn default_state(&'static self) -> BlockState {
        BlockState::new(self)
    }
}

impl PartialEq for Block {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Block {}

impl Hash for Block {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "minecraft:{}", self.name)
    }
}
