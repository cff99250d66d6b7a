//! # Steel Multiface
//!
//! Face-by-face growth of multiface blocks such as glow lichen and sculk
//! veins.
//!
//! [`MultifaceSpreader`] walks the candidate faces around a block and commits
//! at most one face per spread step. Material rules plug in through
//! [`SpreadConfig`]. The level is borrowed through [`BlockGetter`] and
//! [`LevelAccessor`], so the same code runs against [`MemoryLevel`] in tests
//! and against any other world representation.

pub mod behavior;
pub mod block;
pub mod level;
pub mod spreader;

#[cfg(test)]
mod test_utils;

pub use behavior::blocks::{GlowLichenBlock, MultifaceBlock, SculkVeinBlock};
pub use block::{Block, BlockState, Faces};
pub use level::{BlockGetter, LevelAccessor, MemoryLevel};
pub use spreader::{
    DEFAULT_SPREAD_ORDER, DefaultSpreaderConfig, MultifaceSpreader, SpreadConfig, SpreadPos,
    SpreadType,
};
