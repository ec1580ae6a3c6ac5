//! Shared fixtures for the rijndael test suites and benchmarks
pub mod vectors;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG so failures reproduce across runs
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Decode a hex literal from a fixture table
///
/// Fixture tables are static, so a malformed entry is a bug in the table.
pub fn unhex(s: &str) -> Vec<u8> {
    match hex::decode(s) {
        Ok(bytes) => bytes,
        Err(e) => panic!("bad hex fixture {:?}: {}", s, e),
    }
}
