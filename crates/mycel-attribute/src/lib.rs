//! Numeric entity attributes: identity, default values, validated ranges and clamping.
//!
//! Attributes are defined once while the registry is bootstrapped and read
//! many times afterwards. A [`RangedAttribute`] rejects an inconsistent range
//! at construction, so every live instance clamps into a valid interval.

mod attribute;
mod def;
mod error;
mod registry;
mod shared;

pub use attribute::{Attribute, AttributeId, BaseAttribute, RangedAttribute};
pub use def::AttributeDef;
pub use error::{AttributeError, RangeError};
pub use registry::{AttributeRegistry, RegisteredAttribute};
pub use shared::{
    ATTACK_DAMAGE, FOLLOW_RANGE, KNOCKBACK_RESISTANCE, MAX_HEALTH, MOVEMENT_SPEED,
    SharedAttributes,
};
