//! Deterministic seeded generation utilities.
//!
//! Provides per-chunk RNG derivation from a world seed and chunk column
//! coordinates.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Width of a chunk column in blocks, along both X and Z.
pub const CHUNK_WIDTH: i32 = 16;

/// Derive a u64 seed for a chunk column from the world seed and its coordinates.
///
/// Uses SipHash (via std's `DefaultHasher`) to combine the inputs into a
/// well-distributed u64.
pub fn derive_chunk_seed(world_seed: u64, chunk_x: i32, chunk_z: i32) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    chunk_x.hash(&mut hasher);
    chunk_z.hash(&mut hasher);
    hasher.finish()
}

/// Derive a deterministic RNG for a specific chunk column.
///
/// The returned RNG produces an identical sequence for the same
/// `(world_seed, chunk_x, chunk_z)` triple, regardless of thread or platform.
pub fn chunk_rng(world_seed: u64, chunk_x: i32, chunk_z: i32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_chunk_seed(world_seed, chunk_x, chunk_z))
}
