//! # Steel Utils
//!
//! Shared value types for the Steel block simulation: positions, directions,
//! update flags and the random sources used by block behaviors.

pub mod direction;
pub mod math;
pub mod random;
pub mod types;

pub use direction::{Direction, Rotation};
pub use types::{BlockPos, UpdateFlags};
