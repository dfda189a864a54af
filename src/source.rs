//! Random sources for tile spawning.

use rand::Rng;

/// Source of uniform samples driving tile placement.
///
/// The spawner draws one sample to pick a cell and a second to pick the
/// tile value.
pub trait TileSource {
    /// A sample in `[0, 1)`.
    fn uniform(&mut self) -> f64;
}

impl<S: TileSource + ?Sized> TileSource for &mut S {
    fn uniform(&mut self) -> f64 {
        (**self).uniform()
    }
}

/// [`TileSource`] backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> TileSource for RngSource<R> {
    fn uniform(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// [`TileSource`] replaying a fixed list of samples, cycling when exhausted.
///
/// An empty list always yields `0.0`. Samples outside `[0, 1)` are clamped.
#[derive(Debug, Clone)]
pub struct ScriptedSource<'a> {
    samples: &'a [f64],
    next: usize,
}

impl<'a> ScriptedSource<'a> {
    pub fn new(samples: &'a [f64]) -> Self {
        Self { samples, next: 0 }
    }

    /// Number of samples handed out so far.
    pub fn drawn(&self) -> usize {
        self.next
    }
}

impl TileSource for ScriptedSource<'_> {
    fn uniform(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.next % self.samples.len()];
        self.next += 1;
        sample.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
