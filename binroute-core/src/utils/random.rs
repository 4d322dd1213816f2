use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Creates a repeatable random generator for given seed and stream number. Different streams of
/// the same seed produce independent sequences, e.g. one per multi-start run.
pub fn create_seeded_rng(seed: u64, stream: u64) -> SmallRng {
    // mixing constant from splitmix64 to spread consecutive streams apart
    SmallRng::seed_from_u64(seed ^ stream.wrapping_mul(0x9E37_79B9_7F4A_7C15))
}
