//! Injectable randomness.
//!
//! The engine never touches a concrete RNG directly; it draws through
//! [`RandomSource`]. Production code uses [`StdRng`], tests script exact
//! draws with [`ScriptedRandom`] to hit a given fate tier or expense fraction.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniformly distributed floating-point draws.
pub trait RandomSource {
    /// A draw from `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A draw from `[low, high]`.
    fn uniform(&mut self, low: f64, high: f64) -> f64;
}

impl RandomSource for StdRng {
    fn unit(&mut self) -> f64 {
        self.random::<f64>()
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.random_range(low..=high)
    }
}

/// Build the engine RNG: seeded if a seed is given, otherwise from the OS.
pub fn engine_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Replays a fixed sequence of draws, then falls back to a seeded RNG.
///
/// Scripted values are returned exactly as queued, for both [`unit`] and
/// [`uniform`]; the bounds of a `uniform` call are ignored while the script
/// lasts.
///
/// [`unit`]: RandomSource::unit
/// [`uniform`]: RandomSource::uniform
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    script: VecDeque<f64>,
    fallback: StdRng,
    draws: u64,
}

impl ScriptedRandom {
    /// Queue the given draws. The fallback RNG is seeded with 0.
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            script: draws.into_iter().collect(),
            fallback: StdRng::seed_from_u64(0),
            draws: 0,
        }
    }

    /// Reseed the fallback RNG used once the script runs out.
    pub fn with_fallback(mut self, seed: u64) -> Self {
        self.fallback = StdRng::seed_from_u64(seed);
        self
    }

    /// Number of draws taken so far, scripted or not.
    pub fn draws(&self) -> u64 {
        self.draws
    }

    /// Draws still queued.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandom {
    fn unit(&mut self) -> f64 {
        self.draws += 1;
        match self.script.pop_front() {
            Some(v) => v,
            None => self.fallback.unit(),
        }
    }

    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        self.draws += 1;
        match self.script.pop_front() {
            Some(v) => v,
            None => self.fallback.uniform(low, high),
        }
    }
}
