//! Mycel demo: bootstraps the attribute registry and grows big mushrooms
//! across a flat, seeded world.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p mycel-demo -- --seed 42 --mushroom-type red_mushroom_block`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use mycel_attribute::{Attribute, AttributeRegistry};
use mycel_config::{CliArgs, Config, WorldGenConfig, default_config_dir};
use mycel_voxel::{BlockRegistry, BlockState, SparseWorld, blocks};
use mycel_worldgen::{BigMushroomGenerator, CHUNK_WIDTH, FeaturePopulator, PopulationStats};
use tracing::{error, info};

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map_or_else(default_config_dir, Ok) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir: Option<PathBuf> = config.debug.log_to_file.then(|| config_dir.join("logs"));
    if let Some(path) =
        mycel_log::init_logging(log_dir.as_deref(), cfg!(debug_assertions), Some(&config))
    {
        info!("Writing JSON log to {}", path.display());
    }

    let registry = match bootstrap_attributes(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Attribute bootstrap failed: {e}");
            return ExitCode::FAILURE;
        }
    };
    describe_attributes(&registry);

    let block_registry = Arc::new(BlockRegistry::vanilla());
    let mushroom_type = config.worldgen.mushroom_type.as_deref();
    let Some(generator) = mushroom_generator(&block_registry, mushroom_type) else {
        error!("Unknown mushroom block {:?}", mushroom_type.unwrap_or_default());
        return ExitCode::FAILURE;
    };

    let mut world = flat_world(block_registry, &config.worldgen);
    let stats = populate(&mut world, generator, &config.worldgen);
    let span = u64::from(chunk_span(&config.worldgen).unsigned_abs());
    let mushroom_blocks =
        world.count_of(blocks::BROWN_MUSHROOM_BLOCK) + world.count_of(blocks::RED_MUSHROOM_BLOCK);
    info!(
        "Populated {} chunks: {} attempts, {} mushrooms, {} mushroom blocks",
        span * span,
        stats.attempted,
        stats.placed,
        mushroom_blocks,
    );

    ExitCode::SUCCESS
}

/// Shared attributes first (when enabled), then the configured definitions.
fn bootstrap_attributes(
    config: &Config,
) -> Result<AttributeRegistry, mycel_attribute::AttributeError> {
    let mut registry = if config.attributes.include_shared {
        AttributeRegistry::with_shared_attributes()?.0
    } else {
        AttributeRegistry::new()
    };
    registry.register_defs(&config.attributes.definitions)?;
    info!("Attribute registry holds {} attributes", registry.len());
    Ok(registry)
}

fn describe_attributes(registry: &AttributeRegistry) {
    for (id, attribute) in registry.iter() {
        let probe = attribute.default_value() * 4.0 + 100.0;
        info!(
            "{:?} {} default={} watch={} clamp({probe})={}{}",
            id,
            attribute.unlocalized_name(),
            attribute.default_value(),
            attribute.should_watch(),
            attribute.clamp_value(probe),
            attribute
                .description()
                .map(|d| format!(" \"{d}\""))
                .unwrap_or_default(),
        );
    }
}

/// `None` when `name` does not resolve to a block.
fn mushroom_generator(
    block_registry: &BlockRegistry,
    name: Option<&str>,
) -> Option<BigMushroomGenerator> {
    match name {
        None => Some(BigMushroomGenerator::new()),
        Some(name) => block_registry
            .lookup_by_name(name)
            .map(BigMushroomGenerator::with_type),
    }
}

/// Dirt under a grass surface spanning every populated chunk.
fn flat_world(block_registry: Arc<BlockRegistry>, worldgen: &WorldGenConfig) -> SparseWorld {
    let mut world = SparseWorld::new(block_registry);
    let max = chunk_span(worldgen) * CHUNK_WIDTH - 1;
    let surface = worldgen.surface_height;
    world.fill_layer(0, max, 0, max, surface.saturating_sub(1), BlockState::of(blocks::DIRT));
    world.fill_layer(0, max, 0, max, surface, BlockState::of(blocks::GRASS));
    world
}

fn populate(
    world: &mut SparseWorld,
    generator: BigMushroomGenerator,
    worldgen: &WorldGenConfig,
) -> PopulationStats {
    let attempts = worldgen.mushroom_attempts_per_chunk;
    let populator = FeaturePopulator::new(Box::new(generator), attempts);
    info!(
        "Running {} with seed {:#x}",
        populator.generator().name(),
        worldgen.seed
    );

    let span = chunk_span(worldgen);
    let mut total = PopulationStats::default();
    for cx in 0..span {
        for cz in 0..span {
            total += populator.populate_chunk(&mut *world, worldgen.seed, cx, cz);
        }
    }
    total
}

/// Chunks per axis, capped so the block span still fits in `i32`.
fn chunk_span(worldgen: &WorldGenConfig) -> i32 {
    i32::try_from(worldgen.chunks_per_axis)
        .unwrap_or(i32::MAX)
        .min(i32::MAX / CHUNK_WIDTH)
}
