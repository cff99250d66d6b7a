//! Multiface spreading.
//!
//! Blocks like glow lichen and sculk veins cover individual faces of a cell.
//! They grow one face at a time: from a face they already cover, towards one
//! of the four directions perpendicular to it, onto the first face reachable
//! by one of the configured [`SpreadType`]s.
//!
//! The traversal lives in [`MultifaceSpreader`]. What counts as a valid target
//! and what the grown cell looks like is decided by a [`SpreadConfig`].

mod config;
mod spread_type;

use steel_utils::random::Random;
use steel_utils::{BlockPos, Direction};

use crate::block::BlockState;
use crate::level::{BlockGetter, LevelAccessor};

pub use config::{DefaultSpreaderConfig, SpreadConfig};
pub use spread_type::{DEFAULT_SPREAD_ORDER, SpreadPos, SpreadType};

/// Drives multiface growth for one material.
///
/// The spreader is stateless apart from its policy. Every operation either
/// makes progress or returns `None` / `0`; failing to spread is the common case.
#[derive(Debug, Clone)]
pub struct MultifaceSpreader<C> {
    config: C,
}

impl<C: SpreadConfig> MultifaceSpreader<C> {
    /// Creates a spreader driven by `config`.
    #[must_use]
    pub const fn new(config: C) -> Self {
        Self { config }
    }

    /// Returns the policy of this spreader.
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    /// Returns true if growth from the `spread_direction` face of `state` could
    /// reach at least one face. Nothing is written.
    pub fn can_spread_in_any_direction<L: BlockGetter + ?Sized>(
        &self,
        state: BlockState,
        level: &L,
        pos: BlockPos,
        spread_direction: Direction,
    ) -> bool {
        Direction::VALUES.into_iter().any(|direction| {
            self.get_spread_from_face_toward_direction(
                state,
                level,
                pos,
                spread_direction,
                direction,
                |level, pos, spread_pos| self.config.can_spread_into(level, pos, spread_pos),
            )
            .is_some()
        })
    }

    /// Grows at most one face: picks random covered faces, and for each tries
    /// random directions until one spread succeeds.
    pub fn spread_from_random_face_toward_random_direction<L, R>(
        &self,
        state: BlockState,
        level: &mut L,
        pos: BlockPos,
        random: &mut R,
    ) -> Option<SpreadPos>
    where
        L: LevelAccessor + ?Sized,
        R: Random + ?Sized,
    {
        Direction::all_shuffled(random)
            .into_iter()
            .filter(|direction| self.config.can_spread_from(state, *direction))
            .find_map(|direction| {
                self.spread_from_face_toward_random_direction(
                    state, level, pos, direction, random, false,
                )
            })
    }

    /// Tries every direction from every face of `state` and returns how many
    /// spreads succeeded. Directions are visited in their fixed order.
    pub fn spread_all<L: LevelAccessor + ?Sized>(
        &self,
        state: BlockState,
        level: &mut L,
        pos: BlockPos,
        mark_for_postprocessing: bool,
    ) -> u64 {
        Direction::VALUES
            .into_iter()
            .filter(|direction| self.config.can_spread_from(state, *direction))
            .map(|direction| {
                self.spread_from_face_toward_all_directions(
                    state,
                    level,
                    pos,
                    direction,
                    mark_for_postprocessing,
                )
            })
            .sum()
    }

    /// Tries to grow from the `spread_direction` face of `state` towards the
    /// directions in random order, stopping at the first success.
    pub fn spread_from_face_toward_random_direction<L, R>(
        &self,
        state: BlockState,
        level: &mut L,
        pos: BlockPos,
        spread_direction: Direction,
        random: &mut R,
        mark_for_postprocessing: bool,
    ) -> Option<SpreadPos>
    where
        L: LevelAccessor + ?Sized,
        R: Random + ?Sized,
    {
        Direction::all_shuffled(random)
            .into_iter()
            .find_map(|direction| {
                self.spread_from_face_toward_direction(
                    state,
                    level,
                    pos,
                    spread_direction,
                    direction,
                    mark_for_postprocessing,
                )
            })
    }

    fn spread_from_face_toward_all_directions<L: LevelAccessor + ?Sized>(
        &self,
        state: BlockState,
        level: &mut L,
        pos: BlockPos,
        spread_direction: Direction,
        mark_for_postprocessing: bool,
    ) -> u64 {
        let mut count = 0;
        for direction in Direction::VALUES {
            if self
                .spread_from_face_toward_direction(
                    state,
                    level,
                    pos,
                    spread_direction,
                    direction,
                    mark_for_postprocessing,
                )
                .is_some()
            {
                count += 1;
            }
        }
        count
    }

    /// Grows from the `from_face` face of `state` towards `to_face` and
    /// returns the face that was covered.
    pub fn spread_from_face_toward_direction<L: LevelAccessor + ?Sized>(
        &self,
        state: BlockState,
        level: &mut L,
        pos: BlockPos,
        from_face: Direction,
        to_face: Direction,
        mark_for_postprocessing: bool,
    ) -> Option<SpreadPos> {
        let spread_pos = self.get_spread_from_face_toward_direction(
            state,
            &*level,
            pos,
            from_face,
            to_face,
            |level, pos, spread_pos| self.config.can_spread_into(level, pos, spread_pos),
        )?;
        self.spread_to_face(level, spread_pos, mark_for_postprocessing)
    }

    /// Finds the first face, in spread type order, reachable from the
    /// `starting_face` face of `state` towards `spread_direction` that passes
    /// `predicate`.
    ///
    /// Nothing is found when `spread_direction` lies on the axis of
    /// `starting_face`, or when `state` does not cover `starting_face` (unless
    /// the config accepts it as a source anyway) or already covers
    /// `spread_direction`.
    pub fn get_spread_from_face_toward_direction<L, P>(
        &self,
        state: BlockState,
        level: &L,
        pos: BlockPos,
        starting_face: Direction,
        spread_direction: Direction,
        mut predicate: P,
    ) -> Option<SpreadPos>
    where
        L: BlockGetter + ?Sized,
        P: FnMut(&L, BlockPos, SpreadPos) -> bool,
    {
        if spread_direction.axis() == starting_face.axis() {
            return None;
        }

        // Substrate blocks have no faces to check.
        let is_source = self.config.is_other_block_valid_as_source(state)
            || (self.config.has_face(state, starting_face)
                && !self.config.has_face(state, spread_direction));
        if !is_source {
            return None;
        }

        self.config
            .get_spread_types()
            .iter()
            .map(|spread_type| spread_type.get_spread_pos(pos, spread_direction, starting_face))
            .find(|spread_pos| predicate(level, pos, *spread_pos))
    }

    /// Places the block onto `spread_pos` through the config.
    pub fn spread_to_face<L: LevelAccessor + ?Sized>(
        &self,
        level: &mut L,
        spread_pos: SpreadPos,
        mark_for_postprocessing: bool,
    ) -> Option<SpreadPos> {
        let state = level.get_block_state(spread_pos.pos);
        self.config
            .place_block(level, spread_pos, state, mark_for_postprocessing)
            .then_some(spread_pos)
    }
}
