//! Sculk vein behavior.
//!
//! Veins are the thin layer sculk spreads through. Unlike lichen they can
//! sprout from any block that is not a vein itself, which lets freshly placed
//! sculk coat its surroundings.

use steel_utils::random::Random;
use steel_utils::{BlockPos, Direction, UpdateFlags};

use crate::block::{BlockRef, BlockState, Fluid, vanilla_blocks};
use crate::level::{BlockGetter, LevelAccessor};
use crate::spreader::{
    DEFAULT_SPREAD_ORDER, DefaultSpreaderConfig, MultifaceSpreader, SpreadConfig, SpreadPos,
    SpreadType,
};

use super::MultifaceBlock;

/// Spread policy of sculk veins.
#[derive(Debug, Clone, Copy)]
pub struct SculkVeinSpreaderConfig {
    default: DefaultSpreaderConfig,
    spread_types: &'static [SpreadType],
}

impl SculkVeinSpreaderConfig {
    /// Creates the policy for `block`, trying `spread_types` in order.
    #[must_use]
    pub const fn new(block: MultifaceBlock, spread_types: &'static [SpreadType]) -> Self {
        Self {
            default: DefaultSpreaderConfig::new(block),
            spread_types,
        }
    }

    /// Returns true if `state`, found at `spread_pos` while spreading from
    /// `pos` onto its `direction` face, may be overwritten.
    pub fn state_can_be_replaced<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        pos: BlockPos,
        spread_pos: BlockPos,
        direction: Direction,
        state: BlockState,
    ) -> bool {
        let attached = level.get_block_state(spread_pos.relative(direction));
        if attached.is(&vanilla_blocks::SCULK)
            || attached.is(&vanilla_blocks::SCULK_CATALYST)
            || attached.is(&vanilla_blocks::MOVING_PISTON)
        {
            return false;
        }

        // Wrapping around an edge needs the edge to be open.
        if pos.dist_manhattan(&spread_pos) == 2 {
            let corner = pos.relative(direction.opposite());
            if level.get_block_state(corner).is_face_sturdy(direction) {
                return false;
            }
        }

        let fluid = state.fluid_state();
        if !fluid.is_empty() && !fluid.is(Fluid::Water) {
            return false;
        }
        if state.get_block().config.is_fire {
            return false;
        }

        state.can_be_replaced()
            || self
                .default
                .state_can_be_replaced(level, pos, spread_pos, direction, state)
    }
}

impl SpreadConfig for SculkVeinSpreaderConfig {
    fn get_state_for_placement<L: BlockGetter + ?Sized>(
        &self,
        current: BlockState,
        level: &L,
        pos: BlockPos,
        direction: Direction,
    ) -> Option<BlockState> {
        self.default
            .get_state_for_placement(current, level, pos, direction)
    }

    fn can_spread_into<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        pos: BlockPos,
        spread_pos: SpreadPos,
    ) -> bool {
        self.default.can_spread_into_with(level, spread_pos, |state| {
            self.state_can_be_replaced(level, pos, spread_pos.pos, spread_pos.face, state)
        })
    }

    fn get_spread_types(&self) -> &[SpreadType] {
        self.spread_types
    }

    fn is_other_block_valid_as_source(&self, state: BlockState) -> bool {
        !state.is(&vanilla_blocks::SCULK_VEIN)
    }
}

/// Behavior for sculk veins.
#[derive(Debug, Clone)]
pub struct SculkVeinBlock {
    multiface: MultifaceBlock,
    vein_spreader: MultifaceSpreader<SculkVeinSpreaderConfig>,
    same_space_spreader: MultifaceSpreader<SculkVeinSpreaderConfig>,
}

impl SculkVeinBlock {
    /// Creates a new sculk vein behavior.
    #[must_use]
    pub const fn new(block: BlockRef) -> Self {
        let multiface = MultifaceBlock::new(block);
        Self {
            multiface,
            vein_spreader: MultifaceSpreader::new(SculkVeinSpreaderConfig::new(
                multiface,
                &DEFAULT_SPREAD_ORDER,
            )),
            same_space_spreader: MultifaceSpreader::new(SculkVeinSpreaderConfig::new(
                multiface,
                &[SpreadType::SamePosition],
            )),
        }
    }

    /// The shared multiface rules.
    #[must_use]
    pub const fn multiface(&self) -> &MultifaceBlock {
        &self.multiface
    }

    /// The spreader that grows veins in every direction.
    #[must_use]
    pub const fn vein_spreader(&self) -> &MultifaceSpreader<SculkVeinSpreaderConfig> {
        &self.vein_spreader
    }

    /// The spreader that only grows new faces inside the same cell.
    #[must_use]
    pub const fn same_space_spreader(&self) -> &MultifaceSpreader<SculkVeinSpreaderConfig> {
        &self.same_space_spreader
    }

    /// Replaces `pos`, currently `state`, with a fresh vein covering those of
    /// `directions` that have something to attach to.
    ///
    /// Returns false if none of them do or the level rejects the write.
    pub fn regrow<L: LevelAccessor + ?Sized>(
        &self,
        level: &mut L,
        pos: BlockPos,
        state: BlockState,
        directions: &[Direction],
    ) -> bool {
        let mut vein = self.multiface.block().default_state();
        let mut placed = false;
        for direction in directions {
            let neighbor = level.get_block_state(pos.relative(*direction));
            if MultifaceBlock::can_attach_to(*direction, neighbor) {
                vein = vein.set_face(*direction, true);
                placed = true;
            }
        }

        if !placed {
            return false;
        }
        if !state.fluid_state().is_empty() {
            vein = vein.set_waterlogged(true);
        }
        level.set_block(pos, vein, UpdateFlags::UPDATE_ALL)
    }

    /// Grows veins at `pos`.
    ///
    /// With no `facings`, only new faces inside the cell are tried. With
    /// facings, an empty or water-filled cell is regrown with them. An empty
    /// list spreads from `state` in every direction.
    pub fn attempt_spread_vein<L: LevelAccessor + ?Sized>(
        &self,
        level: &mut L,
        pos: BlockPos,
        state: BlockState,
        facings: Option<&[Direction]>,
        mark_for_postprocessing: bool,
    ) -> bool {
        match facings {
            None => {
                let current = level.get_block_state(pos);
                self.same_space_spreader
                    .spread_all(current, level, pos, mark_for_postprocessing)
                    > 0
            }
            Some([]) => {
                self.vein_spreader
                    .spread_all(state, level, pos, mark_for_postprocessing)
                    > 0
            }
            Some(facings) => {
                if !state.is_air() && !state.fluid_state().is(Fluid::Water) {
                    return false;
                }
                self.regrow(level, pos, state, facings)
            }
        }
    }

    /// Returns true if `state` is a vein with a face on a block sculk can consume.
    pub fn has_substrate_access<L: BlockGetter + ?Sized>(
        level: &L,
        state: BlockState,
        pos: BlockPos,
    ) -> bool {
        state.is(&vanilla_blocks::SCULK_VEIN)
            && state.faces().directions().any(|direction| {
                level
                    .get_block_state(pos.relative(direction))
                    .get_block()
                    .config
                    .sculk_replaceable
            })
    }

    /// Drops every face of the vein at `pos` that rests on sculk.
    ///
    /// A vein left without faces turns into air, or water if the cell holds fluid.
    pub fn on_discharged<L: LevelAccessor + ?Sized>(
        &self,
        level: &mut L,
        state: BlockState,
        pos: BlockPos,
    ) {
        if !state.is(self.multiface.block()) {
            return;
        }

        let mut discharged = state;
        for direction in state.faces().directions() {
            if level
                .get_block_state(pos.relative(direction))
                .is(&vanilla_blocks::SCULK)
            {
                discharged = discharged.set_face(direction, false);
            }
        }

        if !discharged.has_any_face() {
            discharged = if level.get_fluid_state(pos).is_empty() {
                vanilla_blocks::AIR.default_state()
            } else {
                vanilla_blocks::WATER.default_state()
            };
        }
        level.set_block(pos, discharged, UpdateFlags::UPDATE_ALL);
    }

    /// Turns a block under one of the vein's faces at `pos` into sculk, then
    /// coats the new sculk with veins.
    ///
    /// Faces are tried in random order. During world generation the new veins
    /// are marked for post-processing. Returns false if no face rests on a
    /// block sculk can consume.
    pub fn attempt_place_sculk<L, R>(
        &self,
        level: &mut L,
        pos: BlockPos,
        random: &mut R,
        world_generation: bool,
    ) -> bool
    where
        L: LevelAccessor + ?Sized,
        R: Random + ?Sized,
    {
        let state = level.get_block_state(pos);
        for direction in Direction::all_shuffled(random) {
            if !MultifaceBlock::has_face(state, direction) {
                continue;
            }

            let target = pos.relative(direction);
            if !level.get_block_state(target).get_block().config.sculk_replaceable {
                continue;
            }

            let sculk = vanilla_blocks::SCULK.default_state();
            level.set_block(target, sculk, UpdateFlags::UPDATE_ALL);
            let grown = self
                .vein_spreader
                .spread_all(sculk, level, target, world_generation);
            log::debug!("Placed sculk at {target}, grew {grown} vein faces around it");

            let opposite = direction.opposite();
            for side in Direction::VALUES {
                if side == opposite {
                    continue;
                }
                let neighbor_pos = target.relative(side);
                let neighbor = level.get_block_state(neighbor_pos);
                if neighbor.is(self.multiface.block()) {
                    self.on_discharged(level, neighbor, neighbor_pos);
                }
            }
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::Faces;
    use crate::level::MemoryLevel;
    use crate::test_utils::ScriptedRandom;

    fn vein_block() -> SculkVeinBlock {
        SculkVeinBlock::new(&vanilla_blocks::SCULK_VEIN)
    }

    fn vein(faces: Faces) -> BlockState {
        vanilla_blocks::SCULK_VEIN.default_state().with_faces(faces)
    }

    fn config() -> SculkVeinSpreaderConfig {
        *vein_block().vein_spreader().config()
    }

    fn stone() -> BlockState {
        vanilla_blocks::STONE.default_state()
    }

    #[test]
    fn test_other_blocks_are_sources() {
        let config = config();
        assert!(config.is_other_block_valid_as_source(stone()));
        assert!(config.is_other_block_valid_as_source(vanilla_blocks::SCULK.default_state()));
        assert!(!config.is_other_block_valid_as_source(vein(Faces::DOWN)));
        // Non-vein sources may spread from every side.
        assert!(config.can_spread_from(stone(), Direction::Up));
        assert!(!config.can_spread_from(vein(Faces::DOWN), Direction::Up));
    }

    #[test]
    fn test_spread_types() {
        let block = vein_block();
        assert_eq!(
            block.vein_spreader().config().get_spread_types(),
            &DEFAULT_SPREAD_ORDER
        );
        assert_eq!(
            block.same_space_spreader().config().get_spread_types(),
            &[SpreadType::SamePosition]
        );
    }

    #[test]
    fn test_rejects_attaching_to_sculk() {
        let config = config();
        let mut level = MemoryLevel::default();
        let air = vanilla_blocks::AIR.default_state();
        let origin = BlockPos::ZERO;
        let target = BlockPos::new(1, 0, 0);

        level.put(target.relative(Direction::Down), stone());
        assert!(config.state_can_be_replaced(&level, origin, target, Direction::Down, air));

        for block in [
            &vanilla_blocks::SCULK,
            &vanilla_blocks::SCULK_CATALYST,
            &vanilla_blocks::MOVING_PISTON,
        ] {
            level.put(target.relative(Direction::Down), block.default_state());
            assert!(!config.state_can_be_replaced(&level, origin, target, Direction::Down, air));
        }
    }

    #[test]
    fn test_rejects_wrap_around_closed_corner() {
        let config = config();
        let mut level = MemoryLevel::default();
        let air = vanilla_blocks::AIR.default_state();
        // Spreading from the origin onto the west face of the north-east
        // diagonal cell passes the corner east of the origin.
        let target = BlockPos::new(1, 0, -1);
        let corner = BlockPos::new(1, 0, 0);

        assert!(config.state_can_be_replaced(&level, BlockPos::ZERO, target, Direction::West, air));
        level.put(corner, stone());
        assert!(!config.state_can_be_replaced(
            &level,
            BlockPos::ZERO,
            target,
            Direction::West,
            air
        ));
    }

    #[test]
    fn test_fluid_and_fire_rules() {
        let config = config();
        let level = MemoryLevel::default();
        let check = |state: BlockState| {
            config.state_can_be_replaced(
                &level,
                BlockPos::ZERO,
                BlockPos::new(1, 0, 0),
                Direction::Down,
                state,
            )
        };

        assert!(check(vanilla_blocks::AIR.default_state()));
        assert!(check(vanilla_blocks::WATER.default_state()));
        assert!(check(vanilla_blocks::WATER.default_state().set_level(3)));
        assert!(check(vanilla_blocks::SHORT_GRASS.default_state()));
        assert!(check(vein(Faces::UP)));
        assert!(!check(vanilla_blocks::LAVA.default_state()));
        assert!(!check(vanilla_blocks::FIRE.default_state()));
        assert!(!check(stone()));
    }

    #[test]
    fn test_can_spread_into_replaceable_blocks() {
        let config = config();
        let lichen = DefaultSpreaderConfig::new(MultifaceBlock::new(&vanilla_blocks::GLOW_LICHEN));
        let mut level = MemoryLevel::default();
        let target = BlockPos::new(1, 0, 0);
        level.put(target, vanilla_blocks::SHORT_GRASS.default_state());
        level.put(target.relative(Direction::Down), stone());

        let onto_floor = SpreadPos::new(target, Direction::Down);
        assert!(config.can_spread_into(&level, BlockPos::ZERO, onto_floor));
        assert!(!lichen.can_spread_into(&level, BlockPos::ZERO, onto_floor));

        // Grass is replaceable, but the ceiling has nothing to attach to.
        let onto_ceiling = SpreadPos::new(target, Direction::Up);
        assert!(!config.can_spread_into(&level, BlockPos::ZERO, onto_ceiling));
    }

    #[test]
    fn test_regrow_reports_rejected_writes() {
        let block = vein_block();
        let mut level = MemoryLevel::new(0, 2);
        level.put(BlockPos::new(0, 1, 0), stone());
        level.put(BlockPos::new(5, 0, 0), stone());
        let air = vanilla_blocks::AIR.default_state();

        // Above the build height.
        assert!(!block.regrow(&mut level, BlockPos::new(0, 2, 0), air, &[Direction::Down]));

        // Regrowing the vein that is already there changes nothing.
        let existing = BlockPos::new(5, 1, 0);
        level.put(existing, vein(Faces::DOWN));
        assert!(!block.regrow(&mut level, existing, air, &[Direction::Down]));
        assert!(level.changes().is_empty());
    }

    #[test]
    fn test_regrow() {
        let block = vein_block();
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), stone());
        let air = vanilla_blocks::AIR.default_state();

        assert!(!block.regrow(&mut level, BlockPos::ZERO, air, &[Direction::Up]));
        assert!(level.changes().is_empty());

        assert!(block.regrow(
            &mut level,
            BlockPos::ZERO,
            air,
            &[Direction::Up, Direction::Down]
        ));
        assert_eq!(level.get_block_state(BlockPos::ZERO), vein(Faces::DOWN));
        assert_eq!(level.changes()[0].flags, UpdateFlags::UPDATE_ALL);

        let water = vanilla_blocks::WATER.default_state();
        assert!(block.regrow(&mut level, BlockPos::ZERO, water, &[Direction::Down]));
        assert!(level.get_block_state(BlockPos::ZERO).is_waterlogged());
    }

    #[test]
    fn test_attempt_spread_vein() {
        let block = vein_block();
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), stone());
        level.put(BlockPos::new(0, 0, -1), stone());
        let state = vein(Faces::DOWN);
        level.put(BlockPos::ZERO, state);

        // Same-space growth covers the north wall of the cell.
        assert!(block.attempt_spread_vein(&mut level, BlockPos::ZERO, state, None, false));
        assert_eq!(
            level.get_block_state(BlockPos::ZERO),
            vein(Faces::DOWN | Faces::NORTH)
        );

        // A cell holding something else is not regrown.
        let grass_pos = BlockPos::new(0, 0, 5);
        level.put(grass_pos.relative(Direction::Down), stone());
        assert!(!block.attempt_spread_vein(
            &mut level,
            grass_pos,
            vanilla_blocks::SHORT_GRASS.default_state(),
            Some(&[Direction::Down]),
            false,
        ));
        assert!(block.attempt_spread_vein(
            &mut level,
            grass_pos,
            vanilla_blocks::AIR.default_state(),
            Some(&[Direction::Down]),
            false,
        ));
        assert_eq!(level.get_block_state(grass_pos), vein(Faces::DOWN));
    }

    #[test]
    fn test_has_substrate_access() {
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), stone());
        level.put(BlockPos::new(0, 1, 0), vanilla_blocks::GLASS.default_state());

        assert!(SculkVeinBlock::has_substrate_access(
            &level,
            vein(Faces::DOWN),
            BlockPos::ZERO
        ));
        assert!(!SculkVeinBlock::has_substrate_access(
            &level,
            vein(Faces::UP),
            BlockPos::ZERO
        ));
        let lichen = vanilla_blocks::GLOW_LICHEN
            .default_state()
            .with_faces(Faces::DOWN);
        assert!(!SculkVeinBlock::has_substrate_access(
            &level,
            lichen,
            BlockPos::ZERO
        ));
    }

    #[test]
    fn test_on_discharged() {
        let block = vein_block();
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), vanilla_blocks::SCULK.default_state());
        level.put(BlockPos::new(0, 1, 0), stone());

        let state = vein(Faces::DOWN | Faces::UP);
        level.put(BlockPos::ZERO, state);
        block.on_discharged(&mut level, state, BlockPos::ZERO);
        assert_eq!(level.get_block_state(BlockPos::ZERO), vein(Faces::UP));

        let wet = vein(Faces::DOWN).set_waterlogged(true);
        level.put(BlockPos::ZERO, wet);
        block.on_discharged(&mut level, wet, BlockPos::ZERO);
        assert!(level.get_block_state(BlockPos::ZERO).is(&vanilla_blocks::WATER));

        let dry = vein(Faces::DOWN);
        level.put(BlockPos::ZERO, dry);
        block.on_discharged(&mut level, dry, BlockPos::ZERO);
        assert!(level.get_block_state(BlockPos::ZERO).is_air());
    }

    #[test]
    fn test_attempt_place_sculk() {
        let block = vein_block();
        let mut level = MemoryLevel::default();
        level.fill(BlockPos::new(-3, -3, -3), BlockPos::new(3, -1, 3), stone());
        let pos = BlockPos::ZERO;
        level.put(pos, vein(Faces::DOWN));

        assert!(block.attempt_place_sculk(&mut level, pos, &mut ScriptedRandom::identity(), true));

        let sculk_pos = BlockPos::new(0, -1, 0);
        assert!(level.get_block_state(sculk_pos).is(&vanilla_blocks::SCULK));
        // The feeding vein is not discharged here.
        assert_eq!(level.get_block_state(pos), vein(Faces::DOWN));

        // The top edges of the sculk are closed by stone, so new veins curl
        // over them from the cell above onto the surrounding floor.
        let grown = [
            BlockPos::new(-1, 0, 0),
            BlockPos::new(0, 0, -1),
            BlockPos::new(0, 0, 1),
            BlockPos::new(1, 0, 0),
        ];
        for vein_pos in grown {
            assert_eq!(level.get_block_state(vein_pos), vein(Faces::DOWN));
            assert!(level.is_marked_for_postprocessing(vein_pos));
        }
        assert_eq!(level.count(&vanilla_blocks::SCULK_VEIN), 5);
    }

    #[test]
    fn test_attempt_place_sculk_discharges_neighbors() {
        let block = vein_block();
        let mut level = MemoryLevel::default();
        level.fill(BlockPos::new(-3, -3, -3), BlockPos::new(3, -1, 3), stone());
        // A second vein hangs under an overhang next to the substrate.
        level.put(BlockPos::new(1, -1, 0), vein(Faces::WEST | Faces::DOWN));
        level.put(BlockPos::ZERO, vein(Faces::DOWN));

        assert!(block.attempt_place_sculk(
            &mut level,
            BlockPos::ZERO,
            &mut ScriptedRandom::identity(),
            false
        ));

        // Its west face rested on the new sculk and was dropped.
        let neighbor = level.get_block_state(BlockPos::new(1, -1, 0));
        assert!(neighbor.is(&vanilla_blocks::SCULK_VEIN));
        assert!(!neighbor.has_face(Direction::West));
        assert!(neighbor.has_face(Direction::Down));
    }

    #[test]
    fn test_attempt_place_sculk_without_substrate() {
        let block = vein_block();
        let mut level = MemoryLevel::default();
        level.put(BlockPos::new(0, -1, 0), vanilla_blocks::GLASS.default_state());
        let state = vein(Faces::DOWN);
        level.put(BlockPos::ZERO, state);

        assert!(!block.attempt_place_sculk(
            &mut level,
            BlockPos::ZERO,
            &mut ScriptedRandom::identity(),
            false
        ));
        assert!(level.changes().is_empty());
    }
}
