//! Block type registry: maps compact [`BlockId`] values to rich [`BlockDef`] metadata.
//!
//! The registry is built once during startup. Air is always ID 0 so that an
//! unset world cell reads as empty space.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Compact block-type identifier (2 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BlockId(pub u16);

/// Physical category of a block, used by placement rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// Empty space.
    Air,
    /// Foliage; features may grow through it.
    Leaves,
    /// Dirt-like soil.
    Ground,
    /// Grass-covered soil.
    Grass,
    /// Stone and ores.
    Rock,
    /// Logs, planks and mushroom bodies.
    Wood,
    /// Small non-solid plants.
    Plants,
}

/// Transparency mode for a block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transparency {
    /// Fully blocks light and visibility.
    Opaque,
    /// Partially transparent (e.g. leaves, glass).
    SemiTransparent,
    /// Completely transparent (e.g. air).
    FullyTransparent,
}

/// Full descriptor for a block type.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BlockDef {
    /// Registry name (e.g. "stone", "red_mushroom_block").
    pub name: String,
    /// Physical category.
    pub material: Material,
    /// Whether entities collide with this block.
    pub solid: bool,
    /// Transparency mode.
    pub transparency: Transparency,
    /// Light emission level (0 = none, 15 = max).
    pub light_emission: u8,
}

impl BlockDef {
    /// A solid, opaque, non-emissive block.
    pub fn opaque(name: impl Into<String>, material: Material) -> Self {
        Self {
            name: name.into(),
            material,
            solid: true,
            transparency: Transparency::Opaque,
            light_emission: 0,
        }
    }
}

/// Errors that can occur during block type registration.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A type with the same name has already been registered.
    #[error("duplicate block name: {0}")]
    DuplicateName(String),
    /// All 65 536 slots have been consumed.
    #[error("block registry is full (max 65536 types)")]
    RegistryFull,
}

/// IDs of the built-in blocks registered by [`BlockRegistry::vanilla`].
pub mod blocks {
    use super::BlockId;

    pub const AIR: BlockId = BlockId(0);
    pub const STONE: BlockId = BlockId(1);
    pub const GRASS: BlockId = BlockId(2);
    pub const DIRT: BlockId = BlockId(3);
    pub const MYCELIUM: BlockId = BlockId(4);
    pub const LEAVES: BlockId = BlockId(5);
    pub const BROWN_MUSHROOM_BLOCK: BlockId = BlockId(6);
    pub const RED_MUSHROOM_BLOCK: BlockId = BlockId(7);
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Maps [`BlockId`] → [`BlockDef`] with O(1) lookup by index and
/// O(1) reverse lookup by name.
#[derive(Clone, Debug)]
pub struct BlockRegistry {
    /// Dense array where `index == BlockId.0`.
    types: Vec<BlockDef>,
    name_to_id: FxHashMap<String, BlockId>,
}

impl BlockRegistry {
    /// Creates a new registry with Air pre-registered as ID 0.
    pub fn new() -> Self {
        let air = BlockDef {
            name: "air".to_string(),
            material: Material::Air,
            solid: false,
            transparency: Transparency::FullyTransparent,
            light_emission: 0,
        };

        let mut name_to_id = FxHashMap::default();
        name_to_id.insert("air".to_string(), blocks::AIR);

        Self {
            types: vec![air],
            name_to_id,
        }
    }

    /// Creates a registry holding the built-in blocks at the IDs in [`blocks`].
    pub fn vanilla() -> Self {
        let mut registry = Self::new();
        let defs = [
            BlockDef::opaque("stone", Material::Rock),
            BlockDef::opaque("grass", Material::Grass),
            BlockDef::opaque("dirt", Material::Ground),
            BlockDef::opaque("mycelium", Material::Grass),
            BlockDef {
                transparency: Transparency::SemiTransparent,
                ..BlockDef::opaque("leaves", Material::Leaves)
            },
            BlockDef::opaque("brown_mushroom_block", Material::Wood),
            BlockDef::opaque("red_mushroom_block", Material::Wood),
        ];
        for def in defs {
            // Names are distinct and far below the slot limit.
            if let Err(e) = registry.register(def) {
                tracing::error!("built-in block registration failed: {e}");
            }
        }
        registry
    }

    /// Registers a new block type and returns its assigned ID.
    ///
    /// IDs are assigned sequentially starting from 1 (0 is Air).
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateName`] if a type with the same name
    /// already exists, or [`RegistryError::RegistryFull`] if all slots are
    /// consumed.
    pub fn register(&mut self, def: BlockDef) -> Result<BlockId, RegistryError> {
        if self.name_to_id.contains_key(&def.name) {
            return Err(RegistryError::DuplicateName(def.name));
        }
        if self.types.len() > u16::MAX as usize {
            return Err(RegistryError::RegistryFull);
        }

        let id = BlockId(self.types.len() as u16);
        self.name_to_id.insert(def.name.clone(), id);
        self.types.push(def);
        Ok(id)
    }

    /// Returns the definition for a given ID.
    pub fn get(&self, id: BlockId) -> Option<&BlockDef> {
        self.types.get(id.0 as usize)
    }

    /// Returns the ID for a named block type, or `None` if not found.
    pub fn lookup_by_name(&self, name: &str) -> Option<BlockId> {
        self.name_to_id.get(name).copied()
    }

    /// Returns the material of a block. Unknown IDs read as air.
    pub fn material(&self, id: BlockId) -> Material {
        self.get(id).map_or(Material::Air, |def| def.material)
    }

    /// Returns `true` if the given block type is air (ID 0).
    pub fn is_air(&self, id: BlockId) -> bool {
        id == blocks::AIR
    }

    /// Returns `true` for blocks that occupy their whole cell: solid and opaque.
    ///
    /// Feature generators never overwrite full blocks.
    pub fn is_full_block(&self, id: BlockId) -> bool {
        self.get(id)
            .is_some_and(|def| def.solid && def.transparency == Transparency::Opaque)
    }

    /// Returns the total number of registered types (including Air).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if only Air is registered.
    pub fn is_empty(&self) -> bool {
        self.types.len() <= 1
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_air_is_id_zero() {
        let registry = BlockRegistry::new();
        let air = registry.get(BlockId(0)).unwrap();
        assert_eq!(air.name, "air");
        assert!(!air.solid);
        assert_eq!(air.material, Material::Air);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_register_returns_sequential_ids() {
        let mut registry = BlockRegistry::new();
        let a = registry.register(BlockDef::opaque("basalt", Material::Rock)).unwrap();
        let b = registry.register(BlockDef::opaque("clay", Material::Ground)).unwrap();
        assert_eq!(a, BlockId(1));
        assert_eq!(b, BlockId(2));
    }

    #[test]
    fn test_vanilla_ids_match_constants() {
        let registry = BlockRegistry::vanilla();
        assert_eq!(registry.lookup_by_name("stone"), Some(blocks::STONE));
        assert_eq!(registry.lookup_by_name("grass"), Some(blocks::GRASS));
        assert_eq!(registry.lookup_by_name("dirt"), Some(blocks::DIRT));
        assert_eq!(registry.lookup_by_name("mycelium"), Some(blocks::MYCELIUM));
        assert_eq!(registry.lookup_by_name("leaves"), Some(blocks::LEAVES));
        assert_eq!(
            registry.lookup_by_name("brown_mushroom_block"),
            Some(blocks::BROWN_MUSHROOM_BLOCK)
        );
        assert_eq!(
            registry.lookup_by_name("red_mushroom_block"),
            Some(blocks::RED_MUSHROOM_BLOCK)
        );
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let mut registry = BlockRegistry::vanilla();
        let result = registry.register(BlockDef::opaque("stone", Material::Rock));
        assert!(matches!(result, Err(RegistryError::DuplicateName(_))));
    }

    #[test]
    fn test_full_block() {
        let registry = BlockRegistry::vanilla();
        assert!(registry.is_full_block(blocks::STONE));
        assert!(registry.is_full_block(blocks::RED_MUSHROOM_BLOCK));
        assert!(!registry.is_full_block(blocks::AIR));
        assert!(!registry.is_full_block(blocks::LEAVES));
        assert!(!registry.is_full_block(BlockId(999)));
    }

    #[test]
    fn test_material_of_unknown_is_air() {
        let registry = BlockRegistry::vanilla();
        assert_eq!(registry.material(BlockId(4000)), Material::Air);
        assert_eq!(registry.material(blocks::LEAVES), Material::Leaves);
    }
}
