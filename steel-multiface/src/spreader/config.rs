//! Spread policies.

use steel_utils::{BlockPos, Direction, UpdateFlags};

use crate::behavior::blocks::MultifaceBlock;
use crate::block::{BlockState, Fluid, vanilla_blocks};
use crate::level::{BlockGetter, LevelAccessor};

use super::{DEFAULT_SPREAD_ORDER, SpreadPos, SpreadType};

/// The material-specific half of multiface spreading.
///
/// A [`MultifaceSpreader`](super::MultifaceSpreader) owns the traversal, this
/// trait decides which faces are valid targets and what a cell looks like
/// after growing onto one of them.
pub trait SpreadConfig {
    /// Returns the state `current` turns into when the block grows onto the
    /// `direction` face of `pos`, or `None` if it cannot grow there.
    fn get_state_for_placement<L: BlockGetter + ?Sized>(
        &self,
        current: BlockState,
        level: &L,
        pos: BlockPos,
        direction: Direction,
    ) -> Option<BlockState>;

    /// Returns true if a block on `pos` may grow onto `spread_pos`.
    fn can_spread_into<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        pos: BlockPos,
        spread_pos: SpreadPos,
    ) -> bool;

    /// The spread types to try, in priority order.
    fn get_spread_types(&self) -> &[SpreadType] {
        &DEFAULT_SPREAD_ORDER
    }

    /// Returns true if `state` covers the face in `direction`.
    fn has_face(&self, state: BlockState, direction: Direction) -> bool {
        MultifaceBlock::has_face(state, direction)
    }

    /// Returns true if `state` can seed growth from any of its sides even
    /// though it carries no faces itself.
    fn is_other_block_valid_as_source(&self, _state: BlockState) -> bool {
        false
    }

    /// Returns true if growth may start from the `direction` face of `state`.
    fn can_spread_from(&self, state: BlockState, direction: Direction) -> bool {
        self.is_other_block_valid_as_source(state) || self.has_face(state, direction)
    }

    /// Commits a spread. `state` is what currently occupies `spread_pos.pos`.
    ///
    /// Returns true if the level changed.
    fn place_block<L: LevelAccessor + ?Sized>(
        &self,
        level: &mut L,
        spread_pos: SpreadPos,
        state: BlockState,
        mark_for_postprocessing: bool,
    ) -> bool {
        let Some(new_state) =
            self.get_state_for_placement(state, &*level, spread_pos.pos, spread_pos.face)
        else {
            return false;
        };

        // A multiface block without faces is not a valid block.
        if new_state.get_block().config.multiface && !new_state.has_any_face() {
            return false;
        }

        if mark_for_postprocessing {
            level.mark_pos_for_postprocessing(spread_pos.pos);
        }
        level.set_block(spread_pos.pos, new_state, UpdateFlags::UPDATE_CLIENTS)
    }
}

/// The spread policy shared by plain multiface blocks such as glow lichen.
///
/// Grows into air, water sources and cells already holding the same block,
/// as long as the target face has something sturdy to attach to.
#[derive(Debug, Clone, Copy)]
pub struct DefaultSpreaderConfig {
    block: MultifaceBlock,
}

impl DefaultSpreaderConfig {
    /// Creates the policy for `block`.
    #[must_use]
    pub const fn new(block: MultifaceBlock) -> Self {
        Self { block }
    }

    /// Returns the multiface block this policy places.
    #[must_use]
    pub const fn block(&self) -> &MultifaceBlock {
        &self.block
    }

    /// Returns true if `state`, found at `spread_pos` while spreading from `pos`
    /// towards `direction`, may be overwritten.
    pub fn state_can_be_replaced<L: BlockGetter + ?Sized>(
        &self,
        _level: &L,
        _pos: BlockPos,
        _spread_pos: BlockPos,
        _direction: Direction,
        state: BlockState,
    ) -> bool {
        state.is_air()
            || state.is(self.block.block())
            || (state.is(&vanilla_blocks::WATER)
                && state.fluid_state().is_source_of_type(Fluid::Water))
    }

    /// The placement half of [`SpreadConfig::can_spread_into`], with
    /// `can_replace` deciding whether the state at `spread_pos` may be
    /// overwritten.
    pub fn can_spread_into_with<L, F>(
        &self,
        level: &L,
        spread_pos: SpreadPos,
        can_replace: F,
    ) -> bool
    where
        L: BlockGetter + ?Sized,
        F: FnOnce(BlockState) -> bool,
    {
        let state = level.get_block_state(spread_pos.pos);
        can_replace(state)
            && self
                .block
                .is_valid_state_for_placement(level, state, spread_pos.pos, spread_pos.face)
    }
}

impl SpreadConfig for DefaultSpreaderConfig {
    fn get_state_for_placement<L: BlockGetter + ?Sized>(
        &self,
        current: BlockState,
        level: &L,
        pos: BlockPos,
        direction: Direction,
    ) -> Option<BlockState> {
        self.block
            .get_state_for_placement(current, level, pos, direction)
    }

    fn can_spread_into<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        pos: BlockPos,
        spread_pos: SpreadPos,
    ) -> bool {
        self.can_spread_into_with(level, spread_pos, |state| {
            self.state_can_be_replaced(level, pos, spread_pos.pos, spread_pos.face, state)
        })
    }
}
