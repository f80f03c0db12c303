use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore, SeedableRng};

/// The single source of randomness for one generator.
///
/// Every draw a run makes goes through here, so a seed plus the order of
/// requests fully determines the output.
#[derive(Debug, Clone)]
pub struct RandomSource {
    seed: u64,
    rng: StdRng,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh seed when the operator did not supply one.
    pub fn from_entropy_seed() -> Self {
        Self::new(u64::from(rand::random::<u32>()))
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `low..=high`.
    ///
    /// Sampled as `u64` so 32-bit and 64-bit hosts consume the same words.
    pub fn range_inclusive(
        &mut self,
        low: usize,
        high: usize,
    ) -> usize {
        let drawn = self.rng.gen_range(low as u64..=high as u64);
        // never exceeds `high`, which is a usize
        usize::try_from(drawn).unwrap_or(high)
    }

    /// Uniform float in `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    pub fn bytes(
        &mut self,
        len: usize,
    ) -> Vec<u8> {
        let mut buf = vec![0u8; len];
        self.rng.fill_bytes(&mut buf);
        buf
    }

    pub fn shuffle<T>(
        &mut self,
        items: &mut [T],
    ) {
        items.shuffle(&mut self.rng);
    }

    pub fn choose<'a, T>(
        &mut self,
        items: &'a [T],
    ) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}
