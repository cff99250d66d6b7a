//! Random sources for block behaviors.
//!
//! Behaviors never reach for a global generator: every randomized operation
//! takes a `&mut impl Random` so ticks stay reproducible under a fixed seed
//! and tests can script the exact sequence they need.

mod xoroshiro;

pub use xoroshiro::Xoroshiro;

/// A source of uniformly distributed values.
pub trait Random {
    /// Splits off an independent generator seeded from this one.
    #[must_use]
    fn fork(&mut self) -> Self
    where
        Self: Sized;

    /// Returns a uniformly distributed `i32`.
    fn next_i32(&mut self) -> i32;

    /// Returns a uniformly distributed value in `0..bound`.
    ///
    /// `bound` must be positive.
    fn next_i32_bounded(&mut self, bound: i32) -> i32;

    /// Returns a uniformly distributed value in `min..=max`.
    fn next_i32_between(&mut self, min: i32, max: i32) -> i32 {
        self.next_i32_bounded(max - min + 1) + min
    }

    /// Returns a uniformly distributed `i64`.
    fn next_i64(&mut self) -> i64;

    /// Returns a uniformly distributed value in `[0, 1)`.
    fn next_f32(&mut self) -> f32;

    /// Returns a uniformly distributed value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a fair coin flip.
    fn next_bool(&mut self) -> bool;
}

/// Shuffles `values` in place (Fisher-Yates, walking down from the end).
pub fn shuffle<T, R: Random + ?Sized>(values: &mut [T], random: &mut R) {
    for i in (2..=values.len()).rev() {
        let j = random.next_i32_bounded(i as i32) as usize;
        values.swap(i - 1, j);
    }
}
