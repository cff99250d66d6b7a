//! The vanilla blocks multiface behaviors interact with.

use super::{Block, BlockConfig, Fluid};

/// Air.
pub static AIR: Block = Block::new("air", BlockConfig::DEFAULT.air());
/// Stone.
pub static STONE: Block = Block::new("stone", BlockConfig::DEFAULT.solid().sculk_replaceable());
/// Glass. Solid for attachment but never consumed by sculk.
pub static GLASS: Block = Block::new("glass", BlockConfig::DEFAULT.solid());
/// Sculk.
pub static SCULK: Block = Block::new("sculk", BlockConfig::DEFAULT.solid());
/// Sculk catalyst.
pub static SCULK_CATALYST: Block = Block::new("sculk_catalyst", BlockConfig::DEFAULT.solid());
/// Water.
pub static WATER: Block = Block::new(
    "water",
    BlockConfig::DEFAULT.replaceable().fluid(Fluid::Water),
);
/// Lava.
pub static LAVA: Block = Block::new(
    "lava",
    BlockConfig::DEFAULT.replaceable().fluid(Fluid::Lava),
);
/// Fire.
pub static FIRE: Block = Block::new("fire", BlockConfig::DEFAULT.replaceable().fire());
/// Short grass.
pub static SHORT_GRASS: Block = Block::new("short_grass", BlockConfig::DEFAULT.replaceable());
/// A block being moved by a piston.
pub static MOVING_PISTON: Block = Block::new("moving_piston", BlockConfig::DEFAULT);
/// Glow lichen.
pub static GLOW_LICHEN: Block = Block::new(
    "glow_lichen",
    BlockConfig::DEFAULT.replaceable().multiface(),
);
/// Sculk vein.
pub static SCULK_VEIN: Block = Block::new(
    "sculk_vein",
    BlockConfig::DEFAULT.replaceable().multiface(),
);

