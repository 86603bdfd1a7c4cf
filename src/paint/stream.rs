/// LCG multiplier (Knuth, MMIX).
pub const LCG_A: u64 = 6_364_136_223_846_793_005;
/// LCG increment (Knuth, MMIX).
pub const LCG_C: u64 = 1_442_695_040_888_963_407;

/// Seeded deterministic number stream.
///
/// The recurrence is `state = (state * LCG_A + LCG_C) mod 2^64`; each value is the top 53 bits
/// of the new state divided by `2^53`, i.e. `state / 2^64` rounded down to `f64` precision, so
/// every value lies in `[0, 1)`. The stream is never reseeded: one instance serves one image.
#[derive(Clone, Debug)]
pub struct NumberStream {
    state: u64,
    drawn: u64,
}

impl NumberStream {
    /// Start a stream whose state is `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed,
            drawn: 0,
        }
    }

    /// Advance the state and return the next value in `[0, 1)`.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(LCG_A).wrapping_add(LCG_C);
        self.drawn += 1;
        ((self.state >> 11) as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform float in `[lo, hi)`. Consumes one value.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        lo + self.next() * (hi - lo)
    }

    /// Uniform integer in `[lo, hi]` (inclusive). Consumes one value.
    pub fn range_int(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            self.next();
            return lo;
        }
        let span = hi - lo + 1;
        let k = (self.next() * f64::from(span)).floor() as u32;
        lo + k.min(span - 1)
    }

    /// Pick an element by `floor(next() * len)`, clamped to the last index.
    ///
    /// Consumes one value even for an empty slice, which yields `None`.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        let v = self.next();
        if items.is_empty() {
            return None;
        }
        let idx = ((v * items.len() as f64).floor() as usize).min(items.len() - 1);
        items.get(idx)
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> u64 {
        self.drawn
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/stream.rs"]
mod tests;
