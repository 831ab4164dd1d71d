//! Seeded randomness for figure, anchor and color selection.
//!
//! A small linear congruential generator is all the game needs. One
//! `SimpleRng` is threaded through `GameState`, so any session can be
//! replayed from its seed; the deterministic scenario tests rely on that.

/// Linear congruential generator over `u32`, using the Numerical Recipes
/// multiplier and increment with an implicit modulus of 2^32.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Seed the generator. A zero seed is remapped to one so the state never
    /// starts degenerate.
    pub fn new(seed: u32) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    /// Advance the state one step and return it.
    pub fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_664_525)
            .wrapping_add(1_013_904_223);
        self.state
    }

    /// Value in `[0, max)`. The modulo bias is irrelevant at the ranges the
    /// game draws from (at most a few dozen).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Value in the half-open range `[lo, hi)`.
    pub fn next_in(&mut self, lo: i16, hi: i16) -> i16 {
        debug_assert!(lo < hi);
        lo + self.next_range((hi - lo) as u32) as i16
    }
}
