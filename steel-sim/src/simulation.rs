//! Grows a multiface block inside a hollow stone cave.

use std::fmt::{self, Display};

use steel_multiface::block::{Block, BlockState, vanilla_blocks};
use steel_multiface::{BlockGetter, GlowLichenBlock, MemoryLevel, SculkVeinBlock};
use steel_utils::math::Axis;
use steel_utils::random::{Random, Xoroshiro};
use steel_utils::{BlockPos, Direction};

use crate::config::{Material, SimConfig};

/// Center of the cave. High enough that the largest cave fits above the
/// bottom of the level.
const CAVE_CENTER: BlockPos = BlockPos::new(0, 64, 0);

/// Outcome of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationReport {
    /// Growth steps that committed a change.
    pub productive_ticks: u32,
    /// Faces grown while saturating.
    pub saturation_faces: u64,
    /// Cells holding the material.
    pub cells: usize,
    /// Faces of the material.
    pub faces: u32,
    /// Sculk blocks created.
    pub sculk: usize,
    /// Block writes.
    pub changes: usize,
    /// Positions marked for post-processing.
    pub postprocessing: usize,
}

impl Display for SimulationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} cells with {} faces, {} sculk, {} writes ({} productive ticks, {} faces from saturation), {} marked for post-processing",
            self.cells,
            self.faces,
            self.sculk,
            self.changes,
            self.productive_ticks,
            self.saturation_faces,
            self.postprocessing,
        )
    }
}

enum Grower {
    GlowLichen(GlowLichenBlock),
    SculkVein(SculkVeinBlock),
}

impl Grower {
    const fn new(material: Material) -> Self {
        match material {
            Material::GlowLichen => {
                Self::GlowLichen(GlowLichenBlock::new(&vanilla_blocks::GLOW_LICHEN))
            }
            Material::SculkVein => {
                Self::SculkVein(SculkVeinBlock::new(&vanilla_blocks::SCULK_VEIN))
            }
        }
    }

    const fn block(&self) -> &'static Block {
        match self {
            Self::GlowLichen(_) => &vanilla_blocks::GLOW_LICHEN,
            Self::SculkVein(_) => &vanilla_blocks::SCULK_VEIN,
        }
    }

    /// Runs one growth step at `pos`. Returns true if the level changed.
    fn grow<R: Random>(
        &self,
        level: &mut MemoryLevel,
        random: &mut R,
        pos: BlockPos,
        world_generation: bool,
    ) -> bool {
        let state = level.get_block_state(pos);
        match self {
            Self::GlowLichen(lichen) => lichen
                .perform_bonemeal(level, random, pos, state)
                .is_some(),
            Self::SculkVein(vein) => {
                if SculkVeinBlock::has_substrate_access(&*level, state, pos)
                    && vein.attempt_place_sculk(level, pos, random, world_generation)
                {
                    return true;
                }
                vein.vein_spreader()
                    .spread_from_random_face_toward_random_direction(state, level, pos, random)
                    .is_some()
            }
        }
    }

    fn spread_all(
        &self,
        level: &mut MemoryLevel,
        state: BlockState,
        pos: BlockPos,
        world_generation: bool,
    ) -> u64 {
        match self {
            Self::GlowLichen(lichen) => lichen
                .spreader()
                .spread_all(state, level, pos, world_generation),
            Self::SculkVein(vein) => vein
                .vein_spreader()
                .spread_all(state, level, pos, world_generation),
        }
    }
}

/// Builds a hollow stone cube with an air interior of half-width `radius`
/// around the cave center.
#[must_use]
pub fn build_cave(radius: i32) -> MemoryLevel {
    let mut level = MemoryLevel::default();
    let stone = vanilla_blocks::STONE.default_state();
    let shell = radius + 1;
    for axis in Axis::VALUES {
        for side in [-shell, shell] {
            let (from, to) = match axis {
                Axis::X => ((side, -shell, -shell), (side, shell, shell)),
                Axis::Y => ((-shell, side, -shell), (shell, side, shell)),
                Axis::Z => ((-shell, -shell, side), (shell, shell, side)),
            };
            level.fill(
                CAVE_CENTER.offset(from.0, from.1, from.2),
                CAVE_CENTER.offset(to.0, to.1, to.2),
                stone,
            );
        }
    }
    level
}

/// Runs the simulation described by `config`.
#[must_use]
pub fn run(config: &SimConfig) -> SimulationReport {
    let grower = Grower::new(config.material);
    let block = grower.block();
    let mut level = build_cave(config.radius);
    let mut random = Xoroshiro::from_seed(config.seed);

    let seed_pos = CAVE_CENTER.offset(0, -config.radius, 0);
    level.put(seed_pos, block.default_state().set_face(Direction::Down, true));
    log::debug!("Seeded {block} at {seed_pos}");

    let mut productive_ticks = 0;
    for tick in 0..config.ticks {
        let positions = level.positions_of(block);
        if positions.is_empty() {
            log::warn!("No {block} left after {tick} ticks");
            break;
        }
        let index = random.next_i32_bounded(positions.len() as i32) as usize;
        if grower.grow(&mut level, &mut random, positions[index], config.world_generation) {
            productive_ticks += 1;
        }
    }

    let mut saturation_faces = 0;
    if config.saturate {
        loop {
            let mut grown = 0;
            for pos in level.positions_of(block) {
                let state = level.get_block_state(pos);
                grown += grower.spread_all(&mut level, state, pos, config.world_generation);
            }
            if grown == 0 {
                break;
            }
            log::debug!("Saturation pass grew {grown} faces");
            saturation_faces += grown;
        }
    }

    SimulationReport {
        productive_ticks,
        saturation_faces,
        cells: level.count(block),
        faces: level.count_faces(block),
        sculk: level.count(&vanilla_blocks::SCULK),
        changes: level.changes().len(),
        postprocessing: level.postprocessing_count(),
    }
}
