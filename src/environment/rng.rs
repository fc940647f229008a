use rand::{rngs::SmallRng, SeedableRng};

/// Random source owned by the environment. A fixed seed makes the true
/// probability draw and every subsequent reward sample reproducible.
#[derive(Debug)]
pub struct MaybeSeededRng {
    seed: Option<u64>,
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Self { seed, rng }
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
