//! Shared behavior of blocks that cover individual faces of a cell.
//!
//! Each face of a multiface block hangs on the neighbour in that direction.
//! A cell stays alive while at least one face is attached.

use steel_utils::{BlockPos, Direction, Rotation};

use crate::block::{BlockRef, BlockState, Faces, Fluid, vanilla_blocks};
use crate::level::BlockGetter;

/// Placement and survival rules of a multiface block.
#[derive(Debug, Clone, Copy)]
pub struct MultifaceBlock {
    block: BlockRef,
    supported_faces: Faces,
}

impl MultifaceBlock {
    /// Creates the behavior for `block`, allowing every face.
    #[must_use]
    pub const fn new(block: BlockRef) -> Self {
        Self {
            block,
            supported_faces: Faces::all(),
        }
    }

    /// Restricts which faces the block may cover.
    #[must_use]
    pub const fn with_supported_faces(mut self, supported_faces: Faces) -> Self {
        self.supported_faces = supported_faces;
        self
    }

    /// The block this behavior belongs to.
    #[must_use]
    pub const fn block(&self) -> BlockRef {
        self.block
    }

    /// Returns true if `state` is a multiface block covering the face in `direction`.
    #[must_use]
    pub const fn has_face(state: BlockState, direction: Direction) -> bool {
        state.get_block().config.multiface && state.has_face(direction)
    }

    /// Returns true if this block may cover faces in `direction` at all.
    #[must_use]
    pub const fn is_face_supported(&self, direction: Direction) -> bool {
        self.supported_faces.has(direction)
    }

    /// Returns true if `state` covers at least one face.
    #[must_use]
    pub const fn has_any_face(state: BlockState) -> bool {
        state.get_block().config.multiface && state.has_any_face()
    }

    /// Returns true if some supported face of `state` is still free.
    #[must_use]
    pub fn has_any_vacant_face(&self, state: BlockState) -> bool {
        Direction::VALUES
            .into_iter()
            .any(|direction| self.is_face_supported(direction) && !state.has_face(direction))
    }

    /// Returns true if a face in `direction` can hang on `neighbor`, the
    /// state found in that direction.
    #[must_use]
    pub const fn can_attach_to(direction: Direction, neighbor: BlockState) -> bool {
        neighbor.is_face_sturdy(direction.opposite())
    }

    /// Returns true if this block could cover the `direction` face of `pos`,
    /// which currently holds `state`.
    pub fn is_valid_state_for_placement<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        state: BlockState,
        pos: BlockPos,
        direction: Direction,
    ) -> bool {
        if !self.is_face_supported(direction) {
            return false;
        }
        if state.is(self.block) && state.has_face(direction) {
            return false;
        }
        Self::can_attach_to(direction, level.get_block_state(pos.relative(direction)))
    }

    /// Returns what `pos`, currently `current`, becomes once this block covers
    /// its `direction` face.
    ///
    /// Existing faces of the same block are kept. Placing into a water source
    /// waterlogs the new block.
    pub fn get_state_for_placement<L: BlockGetter + ?Sized>(
        &self,
        current: BlockState,
        level: &L,
        pos: BlockPos,
        direction: Direction,
    ) -> Option<BlockState> {
        if !self.is_valid_state_for_placement(level, current, pos, direction) {
            return None;
        }

        let base = if current.is(self.block) {
            current
        } else if current.fluid_state().is_source_of_type(Fluid::Water) {
            self.block.default_state().set_waterlogged(true)
        } else {
            self.block.default_state()
        };
        Some(base.set_face(direction, true))
    }

    /// Picks the placement state for the first of `looking` (nearest first)
    /// that yields one.
    pub fn get_state_for_placement_looking<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        pos: BlockPos,
        looking: &[Direction],
    ) -> Option<BlockState> {
        let current = level.get_block_state(pos);
        looking
            .iter()
            .find_map(|direction| self.get_state_for_placement(current, level, pos, *direction))
    }

    /// Returns true if `state` at `pos` has at least one face and every face
    /// is attached.
    pub fn can_survive<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        state: BlockState,
        pos: BlockPos,
    ) -> bool {
        Self::has_any_face(state)
            && state.faces().directions().all(|direction| {
                Self::can_attach_to(direction, level.get_block_state(pos.relative(direction)))
            })
    }

    /// Reacts to `neighbor` changing in `direction`: the face on that side is
    /// dropped when it can no longer hang there.
    #[must_use]
    pub fn update_shape(
        &self,
        state: BlockState,
        direction: Direction,
        neighbor: BlockState,
    ) -> BlockState {
        if !Self::has_any_face(state) {
            return Self::empty_cell(state);
        }
        if state.has_face(direction) && !Self::can_attach_to(direction, neighbor) {
            return Self::remove_face(state, direction);
        }
        state
    }

    /// Clears one face. Without any face left the cell is emptied, leaving
    /// water behind if the block was waterlogged.
    #[must_use]
    pub fn remove_face(state: BlockState, direction: Direction) -> BlockState {
        let state = state.set_face(direction, false);
        if state.has_any_face() {
            state
        } else {
            Self::empty_cell(state)
        }
    }

    /// Returns true if placing a block onto `state` may overwrite it.
    ///
    /// Placing this block again only merges into the cell while a face is free.
    #[must_use]
    pub fn can_be_replaced(&self, state: BlockState, placing_self: bool) -> bool {
        !placing_self || self.has_any_vacant_face(state)
    }

    /// Rotates the faces of `state` about the y axis.
    #[must_use]
    pub fn rotate(state: BlockState, rotation: Rotation) -> BlockState {
        state.with_faces(state.faces().rotate(rotation))
    }

    fn empty_cell(state: BlockState) -> BlockState {
        if state.is_waterlogged() {
            vanilla_blocks::WATER.default_state()
        } else {
            vanilla_blocks::AIR.default_state()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::MemoryLevel;

    fn lichen() -> MultifaceBlock {
        MultifaceBlock::new(&vanilla_blocks::GLOW_LICHEN)
    }

    fn stone() -> BlockState {
        vanilla_blocks::STONE.default_state()
    }

    #[test]
    fn test_can_attach_to() {
        assert!(MultifaceBlock::can_attach_to(Direction::Down, stone()));
        assert!(!MultifaceBlock::can_attach_to(
            Direction::Down,
            vanilla_blocks::AIR.default_state()
        ));
        assert!(!MultifaceBlock::can_attach_to(
            Direction::Down,
            vanilla_blocks::WATER.default_state()
        ));
    }

    #[test]
    fn test_is_valid_state_for_placement() {
        let block = lichen();
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), stone());
        let air = vanilla_blocks::AIR.default_state();

        assert!(block.is_valid_state_for_placement(&level, air, BlockPos::ZERO, Direction::Down));
        assert!(!block.is_valid_state_for_placement(&level, air, BlockPos::ZERO, Direction::Up));

        let present = vanilla_blocks::GLOW_LICHEN
            .default_state()
            .set_face(Direction::Down, true);
        assert!(!block.is_valid_state_for_placement(
            &level,
            present,
            BlockPos::ZERO,
            Direction::Down
        ));

        // A vein covering the same face does not count as present for lichen.
        let vein = vanilla_blocks::SCULK_VEIN
            .default_state()
            .set_face(Direction::Down, true);
        assert!(block.is_valid_state_for_placement(&level, vein, BlockPos::ZERO, Direction::Down));
    }

    #[test]
    fn test_unsupported_face() {
        let block = lichen().with_supported_faces(Faces::all().difference(Faces::DOWN));
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), stone());
        let air = vanilla_blocks::AIR.default_state();

        assert!(!block.is_face_supported(Direction::Down));
        assert!(!block.is_valid_state_for_placement(&level, air, BlockPos::ZERO, Direction::Down));
    }

    #[test]
    fn test_get_state_for_placement() {
        let block = lichen();
        let mut level = MemoryLevel::default();
        level.fill(BlockPos::new(-1, -1, -1), BlockPos::new(1, -1, 1), stone());
        level.put(BlockPos::new(1, 0, 0), stone());

        let air = vanilla_blocks::AIR.default_state();
        let placed = block
            .get_state_for_placement(air, &level, BlockPos::ZERO, Direction::Down)
            .unwrap();
        assert_eq!(placed.faces(), Faces::DOWN);
        assert!(!placed.is_waterlogged());

        // Faces accumulate on the existing block.
        let merged = block
            .get_state_for_placement(placed, &level, BlockPos::ZERO, Direction::East)
            .unwrap();
        assert_eq!(merged.faces(), Faces::DOWN | Faces::EAST);

        let water = vanilla_blocks::WATER.default_state();
        let wet = block
            .get_state_for_placement(water, &level, BlockPos::ZERO, Direction::Down)
            .unwrap();
        assert!(wet.is_waterlogged());

        // Flowing water is not a source, so the block stays dry.
        let flowing = water.set_level(4);
        let dry = block
            .get_state_for_placement(flowing, &level, BlockPos::ZERO, Direction::Down)
            .unwrap();
        assert!(!dry.is_waterlogged());

        assert_eq!(
            block.get_state_for_placement(air, &level, BlockPos::ZERO, Direction::Up),
            None
        );
    }

    #[test]
    fn test_get_state_for_placement_looking() {
        let block = lichen();
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, 0, -1), stone());

        let placed = block
            .get_state_for_placement_looking(
                &level,
                BlockPos::ZERO,
                &[Direction::Down, Direction::North, Direction::Up],
            )
            .unwrap();
        assert_eq!(placed.faces(), Faces::NORTH);

        assert_eq!(
            block.get_state_for_placement_looking(&level, BlockPos::ZERO, &[Direction::Up]),
            None
        );
    }

    #[test]
    fn test_can_survive() {
        let block = lichen();
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), stone());

        let down = vanilla_blocks::GLOW_LICHEN
            .default_state()
            .set_face(Direction::Down, true);
        assert!(block.can_survive(&level, down, BlockPos::ZERO));
        assert!(!block.can_survive(&level, down.set_face(Direction::Up, true), BlockPos::ZERO));
        assert!(!block.can_survive(
            &level,
            vanilla_blocks::GLOW_LICHEN.default_state(),
            BlockPos::ZERO
        ));
    }

    #[test]
    fn test_update_shape() {
        let block = lichen();
        let state = vanilla_blocks::GLOW_LICHEN
            .default_state()
            .set_face(Direction::Down, true)
            .set_face(Direction::North, true);
        let air = vanilla_blocks::AIR.default_state();

        let updated = block.update_shape(state, Direction::North, air);
        assert_eq!(updated.faces(), Faces::DOWN);

        // Neighbours on uncovered sides are ignored.
        assert_eq!(block.update_shape(state, Direction::Up, air), state);
        assert_eq!(block.update_shape(state, Direction::North, stone()), state);

        let last = block.update_shape(updated, Direction::Down, air);
        assert!(last.is_air());
    }

    #[test]
    fn test_remove_face() {
        let state = vanilla_blocks::GLOW_LICHEN
            .default_state()
            .set_face(Direction::Up, true);
        assert!(MultifaceBlock::remove_face(state, Direction::Up).is_air());
        assert!(
            MultifaceBlock::remove_face(state.set_waterlogged(true), Direction::Up)
                .is(&vanilla_blocks::WATER)
        );

        let two = state.set_face(Direction::West, true);
        assert_eq!(
            MultifaceBlock::remove_face(two, Direction::Up).faces(),
            Faces::WEST
        );
    }

    #[test]
    fn test_can_be_replaced() {
        let block = lichen();
        let partial = vanilla_blocks::GLOW_LICHEN
            .default_state()
            .set_face(Direction::Up, true);
        let full = partial.with_faces(Faces::all());

        assert!(block.can_be_replaced(full, false));
        assert!(block.can_be_replaced(partial, true));
        assert!(!block.can_be_replaced(full, true));
    }

    #[test]
    fn test_rotate() {
        let state = vanilla_blocks::GLOW_LICHEN
            .default_state()
            .set_face(Direction::North, true)
            .set_face(Direction::Up, true);
        let rotated = MultifaceBlock::rotate(state, Rotation::Clockwise90);
        assert_eq!(rotated.faces(), Faces::EAST | Faces::UP);
    }
}
