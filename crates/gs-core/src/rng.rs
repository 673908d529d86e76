//! Injectable uniform random sources.
//!
//! The engine only ever asks for uniform values in `[0, 1)`. Production code
//! uses a seeded [`StdRng`]; tests replay a fixed [`SequenceSource`] to hit
//! exact branches of the rarity thresholds.

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform values in `[0, 1)`.
pub trait RandomSource {
    /// The next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Pick an index into a collection of `len` items (`len > 0`).
    fn pick_index(&mut self, len: usize) -> usize {
        let scaled = (self.next_f64() * len as f64) as usize;
        scaled.min(len.saturating_sub(1))
    }
}

impl RandomSource for StdRng {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_f64(&mut self) -> f64 {
        (**self).next_f64()
    }
}

/// Replays a fixed list of values, wrapping around when exhausted.
///
/// An empty sequence yields `0.0` forever.
#[derive(Debug, Clone, Default)]
pub struct SequenceSource {
    values: Vec<f64>,
    position: usize,
}

impl SequenceSource {
    /// Create a source cycling through `values`.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            position: 0,
        }
    }

    /// A source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// How many values have been handed out so far.
    pub fn calls(&self) -> usize {
        self.position
    }
}

impl RandomSource for SequenceSource {
    fn next_f64(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}
