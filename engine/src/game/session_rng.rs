use super::bot_controller::BotRng;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seedable random source for one game session. The seed is logged at
/// startup so a session can be replayed exactly.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn random_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distr::uniform::SampleUniform,
        R: rand::distr::uniform::SampleRange<T>,
    {
        self.rng.random_range(range)
    }
}

impl BotRng for SessionRng {
    fn chance(&mut self) -> f64 {
        self.rng.random()
    }

    fn pick(&mut self, upper: usize) -> usize {
        self.rng.random_range(0..upper)
    }
}
