//! Random Source
//!
//! The synthesizer draws all of its randomness through [`RandomSource`],
//! so callers decide between an entropy-seeded generator, a seeded one
//! for reproducible runs, or a scripted sequence in tests.

use std::collections::VecDeque;

use rand::Rng;

/// Capability the synthesizer needs from a random generator.
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&mut self, len: usize) -> usize;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

impl<R: Rng> RandomSource for R {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn chance(&mut self, probability: f64) -> bool {
        // Unlike gen_bool this tolerates probabilities outside [0, 1]
        self.gen::<f64>() < probability
    }
}

/// Uniformly choose one element, `None` for an empty slice.
pub fn choose<'a, T, S>(items: &'a [T], source: &mut S) -> Option<&'a T>
where
    S: RandomSource + ?Sized,
{
    if items.is_empty() {
        return None;
    }
    items.get(source.pick_index(items.len()))
}

/// Replays fixed draws, for exact-output assertions.
///
/// Indices wrap modulo the requested length so a script never selects out
/// of bounds. Once exhausted, indices fall back to `0` and chances to
/// `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    chances: VecDeque<bool>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue index draws, consumed in order.
    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices.extend(indices);
        self
    }

    /// Queue chance outcomes, consumed in order.
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Draws not yet consumed, `(indices, chances)`.
    pub fn remaining(&self) -> (usize, usize) {
        (self.indices.len(), self.chances.len())
    }
}

impl RandomSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        self.indices.pop_front().unwrap_or(0) % len.max(1)
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
