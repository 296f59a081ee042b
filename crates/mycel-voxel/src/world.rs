//! World storage capability and a sparse in-memory implementation.
//!
//! [`World`] is the surface feature generators mutate. Reads outside the
//! valid height return air; writes outside it are rejected with a warning.

use std::sync::Arc;

use mycel_math::BlockPos;
use rustc_hash::FxHashMap;

use crate::registry::{BlockId, BlockRegistry};
use crate::state::BlockState;

/// Number of block layers; valid `y` is `[0, WORLD_HEIGHT)`.
pub const WORLD_HEIGHT: i32 = 256;

/// Block read/write access to a world region.
pub trait World {
    /// Block types known to this world.
    fn registry(&self) -> &BlockRegistry;

    /// Returns the state at `pos`. Air outside the valid height.
    fn block_state(&self, pos: BlockPos) -> BlockState;

    /// Writes `state` at `pos`. Returns `false` if the write was rejected.
    fn set_block_state(&mut self, pos: BlockPos, state: BlockState) -> bool;

    /// Whether `pos` lies inside the buildable height.
    fn is_valid(&self, pos: BlockPos) -> bool {
        (0..WORLD_HEIGHT).contains(&pos.y)
    }

    /// Block identity at `pos`.
    fn block(&self, pos: BlockPos) -> BlockId {
        self.block_state(pos).block
    }

    /// Whether `pos` holds air.
    fn is_air_block(&self, pos: BlockPos) -> bool {
        self.registry().is_air(self.block(pos))
    }
}

/// Hash-map backed world. Only non-air cells are stored.
#[derive(Clone, Debug)]
pub struct SparseWorld {
    registry: Arc<BlockRegistry>,
    cells: FxHashMap<BlockPos, BlockState>,
    /// Monotonically increasing, incremented on each accepted write.
    version: u64,
}

impl SparseWorld {
    /// Creates an all-air world over the given block registry.
    pub fn new(registry: Arc<BlockRegistry>) -> Self {
        Self {
            registry,
            cells: FxHashMap::default(),
            version: 0,
        }
    }

    /// Fills the horizontal rectangle `[min_x, max_x] × [min_z, max_z]` at height `y`.
    pub fn fill_layer(
        &mut self,
        min_x: i32,
        max_x: i32,
        min_z: i32,
        max_z: i32,
        y: i32,
        state: BlockState,
    ) {
        for x in min_x..=max_x {
            for z in min_z..=max_z {
                self.set_block_state(BlockPos::new(x, y, z), state);
            }
        }
    }

    /// Number of non-air cells.
    pub fn block_count(&self) -> usize {
        self.cells.len()
    }

    /// Counts cells holding `block`.
    pub fn count_of(&self, block: BlockId) -> usize {
        self.cells.values().filter(|s| s.block == block).count()
    }

    /// Iterates over every non-air cell in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockPos, BlockState)> + '_ {
        self.cells.iter().map(|(p, s)| (*p, *s))
    }

    /// Returns the current version counter.
    pub fn version(&self) -> u64 {
        self.version
    }
}

impl World for SparseWorld {
    fn registry(&self) -> &BlockRegistry {
        &self.registry
    }

    fn block_state(&self, pos: BlockPos) -> BlockState {
        if !self.is_valid(pos) {
            return BlockState::AIR;
        }
        self.cells.get(&pos).copied().unwrap_or(BlockState::AIR)
    }

    fn set_block_state(&mut self, pos: BlockPos, state: BlockState) -> bool {
        if !self.is_valid(pos) {
            tracing::warn!("SparseWorld::set_block_state out of bounds: {}", pos);
            return false;
        }
        if self.registry.is_air(state.block) {
            self.cells.remove(&pos);
        } else {
            self.cells.insert(pos, state);
        }
        self.version += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::blocks;

    fn world() -> SparseWorld {
        SparseWorld::new(Arc::new(BlockRegistry::vanilla()))
    }

    #[test]
    fn test_new_world_is_air() {
        let w = world();
        assert!(w.is_air_block(BlockPos::new(0, 64, 0)));
        assert_eq!(w.block_count(), 0);
        assert_eq!(w.version(), 0);
    }

    #[test]
    fn test_set_and_get() {
        let mut w = world();
        let pos = BlockPos::new(4, 10, -2);
        assert!(w.set_block_state(pos, BlockState::of(blocks::STONE)));
        assert_eq!(w.block(pos), blocks::STONE);
        assert_eq!(w.version(), 1);
    }

    #[test]
    fn test_setting_air_clears_cell() {
        let mut w = world();
        let pos = BlockPos::new(1, 1, 1);
        w.set_block_state(pos, BlockState::of(blocks::DIRT));
        w.set_block_state(pos, BlockState::AIR);
        assert_eq!(w.block_count(), 0);
        assert_eq!(w.version(), 2);
    }

    #[test]
    fn test_out_of_bounds_write_rejected() {
        let mut w = world();
        assert!(!w.set_block_state(BlockPos::new(0, -1, 0), BlockState::of(blocks::STONE)));
        let stone = BlockState::of(blocks::STONE);
        assert!(!w.set_block_state(BlockPos::new(0, WORLD_HEIGHT, 0), stone));
        assert_eq!(w.block_count(), 0);
        assert_eq!(w.version(), 0);
    }

    #[test]
    fn test_out_of_bounds_read_is_air() {
        let w = world();
        assert_eq!(w.block_state(BlockPos::new(0, 300, 0)), BlockState::AIR);
    }

    #[test]
    fn test_fill_layer() {
        let mut w = world();
        w.fill_layer(-2, 2, -2, 2, 63, BlockState::of(blocks::GRASS));
        assert_eq!(w.count_of(blocks::GRASS), 25);
        assert_eq!(w.block(BlockPos::new(2, 63, -2)), blocks::GRASS);
        assert!(w.is_air_block(BlockPos::new(3, 63, 0)));
    }
}
