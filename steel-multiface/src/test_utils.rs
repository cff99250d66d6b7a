//! Fixtures shared by the unit tests.

use steel_utils::random::Random;

/// A [`Random`] replaying a fixed list of picks.
///
/// Bounded draws return the next scripted value modulo the bound, cycling
/// through the list. An empty script always picks the last index, which
/// leaves shuffles untouched.
pub struct ScriptedRandom {
    values: Vec<i32>,
    next: usize,
}

impl ScriptedRandom {
    pub fn new(values: &[i32]) -> Self {
        Self {
            values: values.to_vec(),
            next: 0,
        }
    }

    pub fn identity() -> Self {
        Self::new(&[])
    }

    fn pick(&mut self) -> Option<i32> {
        let value = *self.values.get(self.next % self.values.len().max(1))?;
        self.next += 1;
        Some(value)
    }
}

impl Random for ScriptedRandom {
    fn fork(&mut self) -> Self {
        Self::new(&self.values)
    }

    fn next_i32(&mut self) -> i32 {
        self.pick().unwrap_or(0)
    }

    fn next_i32_bounded(&mut self, bound: i32) -> i32 {
        self.pick()
            .map_or(bound - 1, |value| value.rem_euclid(bound))
    }

    fn next_i64(&mut self) -> i64 {
        i64::from(self.next_i32())
    }

    fn next_f32(&mut self) -> f32 {
        0.0
    }

    fn next_f64(&mut self) -> f64 {
        0.0
    }

    fn next_bool(&mut self) -> bool {
        self.next_i32() & 1 == 1
    }
}
