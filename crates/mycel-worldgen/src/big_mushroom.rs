//! Huge mushroom feature.
//!
//! Placement is check-then-write: the space and soil checks read the world
//! only, so a failed attempt leaves the world exactly as it was.

use mycel_math::BlockPos;
use mycel_voxel::{BlockId, Material, MushroomVariant, WORLD_HEIGHT, World, blocks};
use rand::{Rng, RngCore};

use crate::feature::WorldGenerator;

/// Cap silhouette, chosen by the mushroom block type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CapShape {
    /// One wide layer at the top of the stem (brown mushrooms).
    Flat,
    /// Four narrower layers hanging down around the stem (red mushrooms).
    Dome,
}

impl CapShape {
    /// Red mushroom blocks grow a dome; every other type grows a flat cap.
    pub fn for_block(block: BlockId) -> Self {
        if block == blocks::RED_MUSHROOM_BLOCK {
            Self::Dome
        } else {
            Self::Flat
        }
    }
}

/// Grows a huge mushroom: a stem topped by a cap of mushroom blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BigMushroomGenerator {
    /// `None` picks brown or red on every call.
    mushroom_type: Option<BlockId>,
}

impl BigMushroomGenerator {
    /// A generator that picks brown or red with one random draw per call.
    pub fn new() -> Self {
        Self::default()
    }

    /// A generator that always builds from `mushroom_type`.
    pub fn with_type(mushroom_type: BlockId) -> Self {
        Self {
            mushroom_type: Some(mushroom_type),
        }
    }

    /// The configured block type, if fixed.
    pub fn mushroom_type(&self) -> Option<BlockId> {
        self.mushroom_type
    }
}

impl WorldGenerator for BigMushroomGenerator {
    fn generate(&self, world: &mut dyn World, rng: &mut dyn RngCore, position: BlockPos) -> bool {
        let block = self.mushroom_type.unwrap_or_else(|| {
            if rng.random_bool(0.5) {
                blocks::BROWN_MUSHROOM_BLOCK
            } else {
                blocks::RED_MUSHROOM_BLOCK
            }
        });

        let mut height = rng.random_range(4..7);
        if rng.random_range(0..12) == 0 {
            height *= 2;
        }

        if !within_bounds(position, height) {
            tracing::debug!("big mushroom at {position}: height {height} exceeds world bounds");
            return false;
        }
        if !has_room(&*world, position, height) {
            tracing::debug!("big mushroom at {position}: obstructed");
            return false;
        }
        let soil = world.block(position.down(1));
        if !matches!(soil, blocks::DIRT | blocks::GRASS | blocks::MYCELIUM) {
            tracing::debug!("big mushroom at {position}: unsuitable soil {soil:?}");
            return false;
        }

        let written = place_cap(world, block, position, height)
            + place_stem(world, block, position, height);
        tracing::debug!(
            "big mushroom at {position}: placed {written} blocks of {block:?}, height {height}"
        );
        true
    }

    fn name(&self) -> &str {
        "big_mushroom"
    }
}

/// Widest cap half-width; also the horizontal reach of the room check.
const CAP_RADIUS: i32 = 3;

/// The soil cell and the whole footprint fit the world's height and the
/// `i32` coordinate range, so later offsets from `position` cannot overflow.
fn within_bounds(position: BlockPos, height: i32) -> bool {
    let Some(top) = position.y.checked_add(height + 1) else {
        return false;
    };
    position.y >= 1
        && top < WORLD_HEIGHT
        && position
            .checked_offset(-CAP_RADIUS, 0, -CAP_RADIUS)
            .and_then(|_| position.checked_offset(CAP_RADIUS, 0, CAP_RADIUS))
            .is_some()
}

/// Every cell the mushroom could occupy must be air or leaves.
///
/// The lowest four layers only need the stem column; above them the full
/// 7×7 cap footprint is checked.
fn has_room(world: &dyn World, position: BlockPos, height: i32) -> bool {
    for y in position.y..=position.y + height + 1 {
        let radius = if y <= position.y + 3 { 0 } else { CAP_RADIUS };
        for x in position.x - radius..=position.x + radius {
            for z in position.z - radius..=position.z + radius {
                let pos = BlockPos::new(x, y, z);
                if !world.is_valid(pos) {
                    return false;
                }
                match world.registry().material(world.block(pos)) {
                    Material::Air | Material::Leaves => {}
                    _ => return false,
                }
            }
        }
    }
    true
}

fn is_full_block_at(world: &dyn World, pos: BlockPos) -> bool {
    world.registry().is_full_block(world.block(pos))
}

fn place_cap(world: &mut dyn World, block: BlockId, position: BlockPos, height: i32) -> u32 {
    let shape = CapShape::for_block(block);
    let top = position.y + height;
    let bottom = match shape {
        CapShape::Flat => top,
        CapShape::Dome => top - 3,
    };

    let mut written = 0;
    for y in bottom..=top {
        let radius = match shape {
            CapShape::Flat => CAP_RADIUS,
            CapShape::Dome if y < top => 2,
            CapShape::Dome => 1,
        };
        let (min_x, max_x) = (position.x - radius, position.x + radius);
        let (min_z, max_z) = (position.z - radius, position.z + radius);

        for x in min_x..=max_x {
            for z in min_z..=max_z {
                let Some(variant) = cap_variant(shape, position, radius, x, z, y < top) else {
                    continue;
                };
                // Interior cells below the top layer are never visible.
                if variant == MushroomVariant::AllInside {
                    continue;
                }
                let pos = BlockPos::new(x, y, z);
                if !is_full_block_at(&*world, pos)
                    && world.set_block_state(pos, variant.state(block))
                {
                    written += 1;
                }
            }
        }
    }
    written
}

/// Face variant of the cap cell `(x, z)` in a layer of the given radius.
///
/// Returns `None` for the square's corner cells, which are cut off on
/// every layer except the top of a dome.
fn cap_variant(
    shape: CapShape,
    center: BlockPos,
    radius: i32,
    x: i32,
    z: i32,
    below_top: bool,
) -> Option<MushroomVariant> {
    let (min_x, max_x) = (center.x - radius, center.x + radius);
    let (min_z, max_z) = (center.z - radius, center.z + radius);

    let mut meta: u8 = 5;
    if x == min_x {
        meta -= 1;
    } else if x == max_x {
        meta += 1;
    }
    if z == min_z {
        meta -= 3;
    } else if z == max_z {
        meta += 3;
    }
    let mut variant = MushroomVariant::from_meta(meta);

    if shape == CapShape::Flat || below_top {
        let x_edge = x == min_x || x == max_x;
        let z_edge = z == min_z || z == max_z;
        if x_edge && z_edge {
            return None;
        }

        // Cells next to a cut corner show two faces.
        let inner = radius - 1;
        if (x == center.x - inner && z == min_z) || (x == min_x && z == center.z - inner) {
            variant = MushroomVariant::NorthWest;
        }
        if (x == center.x + inner && z == min_z) || (x == max_x && z == center.z - inner) {
            variant = MushroomVariant::NorthEast;
        }
        if (x == center.x - inner && z == max_z) || (x == min_x && z == center.z + inner) {
            variant = MushroomVariant::SouthWest;
        }
        if (x == center.x + inner && z == max_z) || (x == max_x && z == center.z + inner) {
            variant = MushroomVariant::SouthEast;
        }
    }

    if variant == MushroomVariant::Center && below_top {
        variant = MushroomVariant::AllInside;
    }
    Some(variant)
}

fn place_stem(world: &mut dyn World, block: BlockId, position: BlockPos, height: i32) -> u32 {
    let stem = MushroomVariant::Stem.state(block);
    let mut written = 0;
    for dy in 0..height {
        let pos = position.up(dy);
        if !is_full_block_at(&*world, pos) && world.set_block_state(pos, stem) {
            written += 1;
        }
    }
    written
}
