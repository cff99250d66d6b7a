//! Block behavior implementations for the multiface blocks.

mod glow_lichen_block;
mod multiface_block;
mod sculk_vein_block;

pub use glow_lichen_block::GlowLichenBlock;
pub use multiface_block::MultifaceBlock;
pub use sculk_vein_block::{SculkVeinBlock, SculkVeinSpreaderConfig};
