//! Block behaviors built on the multiface spreader.

pub mod blocks;
