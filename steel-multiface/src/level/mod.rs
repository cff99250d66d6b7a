//! Access to the world the block behaviors run in.
//!
//! Behaviors never own the world. They borrow it through [`BlockGetter`] for
//! queries and through [`LevelAccessor`] when they need to write.

mod memory_level;

use steel_utils::{BlockPos, UpdateFlags};

use crate::block::{BlockState, FluidState};

pub use memory_level::{BlockChange, MemoryLevel};

/// Read access to block states.
pub trait BlockGetter {
    /// Returns the state at `pos`.
    fn get_block_state(&self, pos: BlockPos) -> BlockState;

    /// Returns the fluid at `pos`.
    fn get_fluid_state(&self, pos: BlockPos) -> FluidState {
        self.get_block_state(pos).fluid_state()
    }
}

/// Write access to block states.
pub trait LevelAccessor: BlockGetter {
    /// Writes `state` at `pos`. `flags` are passed through to the level untouched.
    ///
    /// Returns true if the cell changed.
    fn set_block(&mut self, pos: BlockPos, state: BlockState, flags: UpdateFlags) -> bool;

    /// Flags `pos` to be reprocessed once world generation finishes the chunk.
    fn mark_pos_for_postprocessing(&mut self, pos: BlockPos);
}
