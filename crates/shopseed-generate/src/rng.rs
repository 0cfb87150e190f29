use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic random source plus the seed that produced it.
#[derive(Debug, Clone)]
pub struct SeededRng {
    pub seed: u64,
    pub rng: ChaCha8Rng,
}

/// Build a ChaCha8 generator from `seed`, drawing one from OS entropy when absent.
pub fn seeded_rng(seed: Option<u64>) -> SeededRng {
    let seed = seed.unwrap_or_else(rand::random);
    SeededRng {
        seed,
        rng: ChaCha8Rng::seed_from_u64(seed),
    }
}
