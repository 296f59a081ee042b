//! The world feature generator capability and a per-chunk population driver.

use mycel_math::BlockPos;
use mycel_voxel::{WORLD_HEIGHT, World};
use rand::{Rng, RngCore};

use crate::seed::{CHUNK_WIDTH, chunk_rng};

/// Places one multi-block structure into a world.
pub trait WorldGenerator: Send + Sync {
    /// Attempts to place the feature anchored at `position`.
    ///
    /// Returns `true` if the structure was placed. A `false` result is an
    /// ordinary outcome (no room, wrong soil, out of height); callers decide
    /// whether to retry elsewhere. Every call draws from `rng`, so repeating
    /// a call with the same source instance generally gives a different result.
    fn generate(&self, world: &mut dyn World, rng: &mut dyn RngCore, position: BlockPos) -> bool;

    /// Short name used in log output.
    fn name(&self) -> &str;
}

/// Returns the `y` of the topmost non-air block in column `(x, z)`.
pub fn surface_height(world: &dyn World, x: i32, z: i32) -> Option<i32> {
    (0..WORLD_HEIGHT)
        .rev()
        .find(|&y| !world.is_air_block(BlockPos::new(x, y, z)))
}

/// Outcome counters for one population pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PopulationStats {
    /// Candidate anchors handed to the generator.
    pub attempted: u32,
    /// Candidates where the generator reported success.
    pub placed: u32,
}

impl std::ops::AddAssign for PopulationStats {
    fn add_assign(&mut self, rhs: Self) {
        self.attempted += rhs.attempted;
        self.placed += rhs.placed;
    }
}

/// Runs a generator at random surface columns of a chunk.
///
/// Each chunk draws from its own RNG derived from the world seed, so the
/// result for a chunk does not depend on the order chunks are populated in.
pub struct FeaturePopulator {
    generator: Box<dyn WorldGenerator>,
    attempts_per_chunk: u32,
}

impl FeaturePopulator {
    /// Create a populator that tries `attempts_per_chunk` anchors per chunk.
    pub fn new(generator: Box<dyn WorldGenerator>, attempts_per_chunk: u32) -> Self {
        Self {
            generator,
            attempts_per_chunk,
        }
    }

    /// The wrapped generator.
    pub fn generator(&self) -> &dyn WorldGenerator {
        self.generator.as_ref()
    }

    /// Populate one chunk column.
    ///
    /// Anchors sit one block above the surface of a random column inside
    /// the chunk. Columns with no surface are skipped without counting.
    pub fn populate_chunk(
        &self,
        world: &mut dyn World,
        world_seed: u64,
        chunk_x: i32,
        chunk_z: i32,
    ) -> PopulationStats {
        let mut rng = chunk_rng(world_seed, chunk_x, chunk_z);
        let mut stats = PopulationStats::default();

        for _ in 0..self.attempts_per_chunk {
            let x = chunk_x * CHUNK_WIDTH + rng.random_range(0..CHUNK_WIDTH);
            let z = chunk_z * CHUNK_WIDTH + rng.random_range(0..CHUNK_WIDTH);

            let Some(surface) = surface_height(&*world, x, z) else {
                continue;
            };

            stats.attempted += 1;
            if self
                .generator
                .generate(world, &mut rng, BlockPos::new(x, surface + 1, z))
            {
                stats.placed += 1;
            }
        }

        tracing::debug!(
            "{} in chunk ({}, {}): {}/{} placed",
            self.generator.name(),
            chunk_x,
            chunk_z,
            stats.placed,
            stats.attempted
        );
        stats
    }
}
