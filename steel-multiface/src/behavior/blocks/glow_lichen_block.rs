//! Glow lichen behavior.
//!
//! Lichen only grows when bonemealed, one face per application.

use steel_utils::random::Random;
use steel_utils::{BlockPos, Direction};

use crate::block::{BlockRef, BlockState};
use crate::level::{BlockGetter, LevelAccessor};
use crate::spreader::{DefaultSpreaderConfig, MultifaceSpreader, SpreadPos};

use super::MultifaceBlock;

/// Behavior for glow lichen.
#[derive(Debug, Clone)]
pub struct GlowLichenBlock {
    multiface: MultifaceBlock,
    spreader: MultifaceSpreader<DefaultSpreaderConfig>,
}

impl GlowLichenBlock {
    /// Light level of a cell holding lichen.
    pub const LIGHT_EMISSION: u8 = 7;

    /// Creates a new glow lichen behavior.
    #[must_use]
    pub const fn new(block: BlockRef) -> Self {
        let multiface = MultifaceBlock::new(block);
        Self {
            multiface,
            spreader: MultifaceSpreader::new(DefaultSpreaderConfig::new(multiface)),
        }
    }

    /// The shared multiface rules.
    #[must_use]
    pub const fn multiface(&self) -> &MultifaceBlock {
        &self.multiface
    }

    /// The spreader bonemeal growth goes through.
    #[must_use]
    pub const fn spreader(&self) -> &MultifaceSpreader<DefaultSpreaderConfig> {
        &self.spreader
    }

    /// Returns the light level emitted by `state`.
    #[must_use]
    pub const fn light_emission(state: BlockState) -> u8 {
        if MultifaceBlock::has_any_face(state) {
            Self::LIGHT_EMISSION
        } else {
            0
        }
    }

    /// Returns true if bonemeal would grow at least one face.
    pub fn is_valid_bonemeal_target<L: BlockGetter + ?Sized>(
        &self,
        level: &L,
        pos: BlockPos,
        state: BlockState,
    ) -> bool {
        Direction::VALUES.into_iter().any(|direction| {
            self.spreader
                .can_spread_in_any_direction(state, level, pos, direction.opposite())
        })
    }

    /// Applies bonemeal, growing at most one face.
    pub fn perform_bonemeal<L, R>(
        &self,
        level: &mut L,
        random: &mut R,
        pos: BlockPos,
        state: BlockState,
    ) -> Option<SpreadPos>
    where
        L: LevelAccessor + ?Sized,
        R: Random + ?Sized,
    {
        let spread = self
            .spreader
            .spread_from_random_face_toward_random_direction(state, level, pos, random);
        if let Some(spread) = spread {
            log::debug!("Glow lichen at {pos} grew onto {spread}");
        }
        spread
    }

    /// Returns true if placing a block onto `state` may overwrite it.
    #[must_use]
    pub fn can_be_replaced(&self, state: BlockState, placing_lichen: bool) -> bool {
        self.multiface.can_be_replaced(state, placing_lichen)
    }
}
