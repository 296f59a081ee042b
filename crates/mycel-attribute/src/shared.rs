//! The standard attribute set shared by every living entity.

use crate::attribute::{AttributeId, RangedAttribute};
use crate::error::AttributeError;
use crate::registry::AttributeRegistry;

/// Unlocalized name of the maximum health attribute.
pub const MAX_HEALTH: &str = "generic.maxHealth";
/// Unlocalized name of the target tracking range attribute.
pub const FOLLOW_RANGE: &str = "generic.followRange";
/// Unlocalized name of the knockback resistance attribute.
pub const KNOCKBACK_RESISTANCE: &str = "generic.knockbackResistance";
/// Unlocalized name of the movement speed attribute.
pub const MOVEMENT_SPEED: &str = "generic.movementSpeed";
/// Unlocalized name of the melee attack damage attribute.
pub const ATTACK_DAMAGE: &str = "generic.attackDamage";

/// Handles of the shared attributes inside a registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharedAttributes {
    pub max_health: AttributeId,
    pub follow_range: AttributeId,
    pub knockback_resistance: AttributeId,
    pub movement_speed: AttributeId,
    pub attack_damage: AttributeId,
}

impl SharedAttributes {
    /// Registers the shared set into `registry`.
    ///
    /// Fails only if one of the names is already taken.
    pub fn register(registry: &mut AttributeRegistry) -> Result<Self, AttributeError> {
        let max_health = registry.register(
            RangedAttribute::new(None, MAX_HEALTH, 20.0, 0.0, f64::MAX)?
                .with_description("Max Health")
                .with_should_watch(true),
        )?;
        let follow_range = registry.register(
            RangedAttribute::new(None, FOLLOW_RANGE, 32.0, 0.0, 2048.0)?
                .with_description("Follow Range"),
        )?;
        let knockback_resistance = registry.register(
            RangedAttribute::new(None, KNOCKBACK_RESISTANCE, 0.0, 0.0, 1.0)?
                .with_description("Knockback Resistance"),
        )?;
        let movement_speed = registry.register(
            RangedAttribute::new(None, MOVEMENT_SPEED, 0.7, 0.0, f64::MAX)?
                .with_description("Movement Speed")
                .with_should_watch(true),
        )?;
        let attack_damage =
            registry.register(RangedAttribute::new(None, ATTACK_DAMAGE, 2.0, 0.0, f64::MAX)?)?;

        Ok(Self {
            max_health,
            follow_range,
            knockback_resistance,
            movement_speed,
            attack_damage,
        })
    }
}

impl AttributeRegistry {
    /// Creates a registry pre-populated with the [`SharedAttributes`].
    pub fn with_shared_attributes() -> Result<(Self, SharedAttributes), AttributeError> {
        let mut registry = Self::new();
        let shared = SharedAttributes::register(&mut registry)?;
        Ok((registry, shared))
    }
}
