//! Random source backed by the thread-local generator

use rand::Rng;

use crate::traits::RandomSource;

/// Uniform random values from `rand::thread_rng`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&self) -> f64 {
        rand::thread_rng().gen_range(0.0..1.0)
    }
}
