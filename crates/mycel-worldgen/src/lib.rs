//! World feature generation: the generator capability, the big mushroom feature,
//! and deterministic per-chunk seeding.

mod big_mushroom;
mod feature;
mod seed;

pub use big_mushroom::{BigMushroomGenerator, CapShape};
pub use feature::{FeaturePopulator, PopulationStats, WorldGenerator, surface_height};
pub use seed::{CHUNK_WIDTH, chunk_rng, derive_chunk_seed};
