//! Block types, block states, and the world storage capability consumed by feature generators.

pub mod registry;
pub mod state;
pub mod world;

pub use registry::{BlockDef, BlockId, BlockRegistry, Material, RegistryError, Transparency, blocks};
pub use state::{BlockState, MushroomVariant};
pub use world::{SparseWorld, WORLD_HEIGHT, World};
