//! RAM-only level.
//!
//! Every cell starts as air and nothing is persisted. Used by the simulation
//! binary and as the fixture for tests and benchmarks.

use std::mem;

use rustc_hash::{FxHashMap, FxHashSet};
use steel_utils::{BlockPos, UpdateFlags};

use crate::block::{Block, BlockState, vanilla_blocks};
use crate::level::{BlockGetter, LevelAccessor};

/// A write that changed a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockChange {
    /// Where the write happened.
    pub pos: BlockPos,
    /// The state that was there before.
    pub old_state: BlockState,
    /// The state that was written.
    pub new_state: BlockState,
    /// The flags the write was issued with.
    pub flags: UpdateFlags,
}

/// In-memory level.
///
/// Only non-air cells are stored. Writes outside the vertical bounds are
/// rejected, and every successful [`LevelAccessor::set_block`] is appended to
/// a change journal.
pub struct MemoryLevel {
    blocks: FxHashMap<BlockPos, BlockState>,
    min_y: i32,
    height: i32,
    changes: Vec<BlockChange>,
    postprocessing: FxHashSet<BlockPos>,
}

impl MemoryLevel {
    /// Lowest buildable y of the overworld.
    pub const DEFAULT_MIN_Y: i32 = -64;
    /// Height of the overworld.
    pub const DEFAULT_HEIGHT: i32 = 384;

    /// Creates an empty level spanning `min_y..min_y + height`.
    #[must_use]
    pub fn new(min_y: i32, height: i32) -> Self {
        Self {
            blocks: FxHashMap::default(),
            min_y,
            height,
            changes: Vec::new(),
            postprocessing: FxHashSet::default(),
        }
    }

    /// Returns true if `pos` lies inside the vertical bounds.
    #[must_use]
    pub const fn is_in_valid_bounds(&self, pos: &BlockPos) -> bool {
        pos.y() >= self.min_y && pos.y() < self.min_y + self.height
    }

    /// Writes `state` into every cell of the box between `from` and `to` (inclusive).
    ///
    /// This is a setup helper: it bypasses the change journal.
    pub fn fill(&mut self, from: BlockPos, to: BlockPos, state: BlockState) {
        for x in from.x().min(to.x())..=from.x().max(to.x()) {
            for y in from.y().min(to.y())..=from.y().max(to.y()) {
                for z in from.z().min(to.z())..=from.z().max(to.z()) {
                    self.put(BlockPos::new(x, y, z), state);
                }
            }
        }
    }

    /// Writes a single cell, bypassing the change journal.
    pub fn put(&mut self, pos: BlockPos, state: BlockState) {
        if !self.is_in_valid_bounds(&pos) {
            return;
        }
        if state.is_air() {
            self.blocks.remove(&pos);
        } else {
            self.blocks.insert(pos, state);
        }
    }

    /// Returns the journal of changes made through [`LevelAccessor::set_block`].
    #[must_use]
    pub fn changes(&self) -> &[BlockChange] {
        &self.changes
    }

    /// Drains the change journal.
    pub fn take_changes(&mut self) -> Vec<BlockChange> {
        mem::take(&mut self.changes)
    }

    /// Returns true if `pos` has been marked for post-processing.
    #[must_use]
    pub fn is_marked_for_postprocessing(&self, pos: BlockPos) -> bool {
        self.postprocessing.contains(&pos)
    }

    /// Returns how many positions are marked for post-processing.
    #[must_use]
    pub fn postprocessing_count(&self) -> usize {
        self.postprocessing.len()
    }

    /// Returns the positions holding `block`, sorted by (x, y, z).
    #[must_use]
    pub fn positions_of(&self, block: &Block) -> Vec<BlockPos> {
        let mut positions: Vec<BlockPos> = self
            .blocks
            .iter()
            .filter(|(_, state)| state.is(block))
            .map(|(pos, _)| *pos)
            .collect();
        positions.sort_by_key(|pos| (pos.x(), pos.y(), pos.z()));
        positions
    }

    /// Counts the cells holding `block`.
    #[must_use]
    pub fn count(&self, block: &Block) -> usize {
        self.blocks.values().filter(|state| state.is(block)).count()
    }

    /// Sums the set faces over every cell holding `block`.
    #[must_use]
    pub fn count_faces(&self, block: &Block) -> u32 {
        self.blocks
            .values()
            .filter(|state| state.is(block))
            .map(|state| state.faces().bits().count_ones())
            .sum()
    }
}

impl Default for MemoryLevel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MIN_Y, Self::DEFAULT_HEIGHT)
    }
}

impl BlockGetter for MemoryLevel {
    fn get_block_state(&self, pos: BlockPos) -> BlockState {
        self.blocks
            .get(&pos)
            .copied()
            .unwrap_or(vanilla_blocks::AIR.default_state())
    }
}

impl LevelAccessor for MemoryLevel {
    fn set_block(&mut self, pos: BlockPos, state: BlockState, flags: UpdateFlags) -> bool {
        if !self.is_in_valid_bounds(&pos) {
            log::warn!("Attempted to set block {state} outside of the level at {pos}");
            return false;
        }

        let old_state = self.get_block_state(pos);
        if old_state == state {
            return false;
        }

        log::trace!("Setting {pos} from {old_state} to {state} ({flags:?})");
        self.put(pos, state);
        self.changes.push(BlockChange {
            pos,
            old_state,
            new_state: state,
            flags,
        });
        true
    }

    fn mark_pos_for_postprocessing(&mut self, pos: BlockPos) {
        self.postprocessing.insert(pos);
    }
}
