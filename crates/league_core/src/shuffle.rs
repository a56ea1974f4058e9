//! Reproducible shuffling from a string seed.
//!
//! The same seed always yields the same permutation for a given input length,
//! on every platform: the seed is hashed with SHA-256 and the digest keys a
//! ChaCha8 stream. Without a seed the thread-local generator is used.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Build the deterministic generator behind a string seed.
pub fn rng_from_seed(seed: &str) -> ChaCha8Rng {
    let digest = Sha256::digest(seed.as_bytes());
    let mut key = [0u8; 32];
    key.copy_from_slice(&digest);
    ChaCha8Rng::from_seed(key)
}

/// Fisher-Yates shuffle driven by `rng`.
///
/// Walks from the last index down to 1, swapping each position with one drawn
/// uniformly from `[0, i]`. Draws are taken as `u32` so the stream consumed
/// does not depend on the target's pointer width.
pub fn shuffle_with<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i as u32) as usize;
        items.swap(i, j);
    }
}

/// Shuffle `items` in place, reproducibly when `seed` is given.
pub fn seeded_shuffle<T>(items: &mut [T], seed: Option<&str>) {
    match seed {
        Some(seed) => shuffle_with(items, &mut rng_from_seed(seed)),
        None => shuffle_with(items, &mut rand::thread_rng()),
    }
}

#[cfg(test)]
#[path = "shuffle_tests.rs"]
mod shuffle_tests;
