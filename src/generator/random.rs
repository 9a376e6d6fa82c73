// src/generator/random.rs

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The two draws obstacle placement needs.
///
/// Passed explicitly into the generator so tests can script exact sequences.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn unit(&mut self) -> f64;
    /// Uniform integer in `[min, max]`, both inclusive.
    fn int_inclusive(&mut self, min: i32, max: i32) -> i32;
}

/// Adapts any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Reproducible source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }

    fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}

/// Replays fixed rolls, cycling when exhausted. Steps are always `min`
/// unless explicit steps are given.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    rolls: Vec<f64>,
    steps: Vec<i32>,
    roll_pos: usize,
    step_pos: usize,
}

impl ScriptedSource {
    pub fn new(rolls: Vec<f64>) -> Self {
        Self { rolls, ..Self::default() }
    }

    pub fn with_steps(mut self, steps: Vec<i32>) -> Self {
        self.steps = steps;
        self
    }
}

impl RandomSource for ScriptedSource {
    fn unit(&mut self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        let r = self.rolls[self.roll_pos % self.rolls.len()];
        self.roll_pos += 1;
        r
    }

    fn int_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if self.steps.is_empty() {
            return min;
        }
        let step = self.steps[self.step_pos % self.steps.len()];
        self.step_pos += 1;
        step.clamp(min, max)
    }
}
