//! Base and ranged attribute value types.
//!
//! A [`BaseAttribute`] is a plain identity record: optional parent handle,
//! unlocalized name, default value. A [`RangedAttribute`] composes a base
//! attribute with a closed `[minimum, maximum]` interval validated at
//! construction, plus an optional human-readable description.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{AttributeError, RangeError};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Non-owning handle to an attribute held by an [`crate::AttributeRegistry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AttributeId(pub u32);

/// Read-only surface shared by every attribute kind.
pub trait Attribute {
    /// Category attribute this one groups under, if any.
    fn parent(&self) -> Option<AttributeId>;

    /// Stable identifier used for lookup and serialization, never for display.
    fn unlocalized_name(&self) -> &str;

    /// Value assumed when none has been set explicitly.
    fn default_value(&self) -> f64;

    /// Whether values of this attribute are synchronised to observers.
    fn should_watch(&self) -> bool;

    /// Maps `value` into the attribute's legal domain.
    fn clamp_value(&self, value: f64) -> f64;
}

/// An attribute identity with a default value and no range constraint.
#[derive(Clone, Debug)]
pub struct BaseAttribute {
    parent: Option<AttributeId>,
    unlocalized_name: String,
    default_value: f64,
    should_watch: bool,
}

/// An attribute constrained to the closed interval `[minimum, maximum]`.
///
/// Invariant: `minimum <= default <= maximum`, enforced by [`RangedAttribute::new`].
#[derive(Clone, Debug)]
pub struct RangedAttribute {
    base: BaseAttribute,
    minimum_value: f64,
    maximum_value: f64,
    description: Option<String>,
}

// ---------------------------------------------------------------------------
// BaseAttribute
// ---------------------------------------------------------------------------

impl BaseAttribute {
    /// Creates a base attribute. Any default value is accepted.
    pub fn new(
        parent: Option<AttributeId>,
        unlocalized_name: impl Into<String>,
        default_value: f64,
    ) -> Self {
        Self {
            parent,
            unlocalized_name: unlocalized_name.into(),
            default_value,
            should_watch: false,
        }
    }

    /// Sets the watch flag and returns `self` for chaining.
    pub fn set_should_watch(&mut self, should_watch: bool) -> &mut Self {
        self.should_watch = should_watch;
        self
    }

    /// Consuming form of [`BaseAttribute::set_should_watch`].
    pub fn with_should_watch(mut self, should_watch: bool) -> Self {
        self.should_watch = should_watch;
        self
    }
}

impl Attribute for BaseAttribute {
    fn parent(&self) -> Option<AttributeId> {
        self.parent
    }

    fn unlocalized_name(&self) -> &str {
        &self.unlocalized_name
    }

    fn default_value(&self) -> f64 {
        self.default_value
    }

    fn should_watch(&self) -> bool {
        self.should_watch
    }

    /// A base attribute has no range; the value is returned unchanged.
    fn clamp_value(&self, value: f64) -> f64 {
        value
    }
}

// Identity is the unlocalized name.
impl PartialEq for BaseAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.unlocalized_name == other.unlocalized_name
    }
}

impl Eq for BaseAttribute {}

impl Hash for BaseAttribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unlocalized_name.hash(state);
    }
}

// ---------------------------------------------------------------------------
// RangedAttribute
// ---------------------------------------------------------------------------

impl RangedAttribute {
    /// Creates a ranged attribute, validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::InvalidRange`] carrying the first violated
    /// check, in this order: [`RangeError::MinAboveMax`],
    /// [`RangeError::DefaultBelowMin`], [`RangeError::DefaultAboveMax`].
    /// A NaN in any value that passes those checks yields
    /// [`RangeError::NotANumber`]. This fourth check is stricter than the
    /// classic three-comparison rule, under which a NaN passes every
    /// comparison and the attribute is created with an unclamped domain;
    /// here such ranges are refused outright.
    pub fn new(
        parent: Option<AttributeId>,
        unlocalized_name: impl Into<String>,
        default_value: f64,
        minimum_value: f64,
        maximum_value: f64,
    ) -> Result<Self, AttributeError> {
        let unlocalized_name = unlocalized_name.into();
        if let Err(source) = validate_range(default_value, minimum_value, maximum_value) {
            return Err(AttributeError::InvalidRange {
                name: unlocalized_name,
                source,
            });
        }

        Ok(Self {
            base: BaseAttribute::new(parent, unlocalized_name, default_value),
            minimum_value,
            maximum_value,
            description: None,
        })
    }

    /// Attaches a description, replacing any previous one.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Consuming form of [`RangedAttribute::set_description`].
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the description, or `None` if none was ever set.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the watch flag and returns `self` for chaining.
    pub fn set_should_watch(&mut self, should_watch: bool) -> &mut Self {
        self.base.set_should_watch(should_watch);
        self
    }

    /// Consuming form of [`RangedAttribute::set_should_watch`].
    pub fn with_should_watch(mut self, should_watch: bool) -> Self {
        self.base.set_should_watch(should_watch);
        self
    }

    /// Lower bound of the legal interval.
    pub fn minimum_value(&self) -> f64 {
        self.minimum_value
    }

    /// Upper bound of the legal interval.
    pub fn maximum_value(&self) -> f64 {
        self.maximum_value
    }

    /// The underlying identity record.
    pub fn base(&self) -> &BaseAttribute {
        &self.base
    }
}

impl Attribute for RangedAttribute {
    fn parent(&self) -> Option<AttributeId> {
        self.base.parent()
    }

    fn unlocalized_name(&self) -> &str {
        self.base.unlocalized_name()
    }

    fn default_value(&self) -> f64 {
        self.base.default_value()
    }

    fn should_watch(&self) -> bool {
        self.base.should_watch()
    }

    fn clamp_value(&self, value: f64) -> f64 {
        mycel_math::clamp(value, self.minimum_value, self.maximum_value)
    }
}

impl PartialEq for RangedAttribute {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl Eq for RangedAttribute {}

impl Hash for RangedAttribute {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base.hash(state);
    }
}

fn validate_range(default: f64, min: f64, max: f64) -> Result<(), RangeError> {
    if min > max {
        Err(RangeError::MinAboveMax { min, max })
    } else if default < min {
        Err(RangeError::DefaultBelowMin { default, min })
    } else if default > max {
        Err(RangeError::DefaultAboveMax { default, max })
    } else if default.is_nan() || min.is_nan() || max.is_nan() {
        Err(RangeError::NotANumber { default, min, max })
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn health() -> RangedAttribute {
        RangedAttribute::new(None, "generic.maxHealth", 20.0, 0.0, 20.0).unwrap()
    }

    #[test]
    fn test_base_attribute_accessors() {
        let attr = BaseAttribute::new(Some(AttributeId(3)), "generic.luck", -4.5);
        assert_eq!(attr.parent(), Some(AttributeId(3)));
        assert_eq!(attr.unlocalized_name(), "generic.luck");
        assert_eq!(attr.default_value(), -4.5);
        assert!(!attr.should_watch());
    }

    #[test]
    fn test_base_attribute_accepts_any_default() {
        for v in [f64::MIN, -1.0, 0.0, 1e12, f64::INFINITY] {
            let attr = BaseAttribute::new(None, "x", v);
            assert_eq!(attr.default_value(), v);
        }
    }

    #[test]
    fn test_base_attribute_clamp_is_identity() {
        let attr = BaseAttribute::new(None, "x", 0.0);
        assert_eq!(attr.clamp_value(-1e9), -1e9);
        assert_eq!(attr.clamp_value(7.25), 7.25);
    }

    #[test]
    fn test_ranged_attribute_clamps() {
        let attr = health();
        assert_eq!(attr.clamp_value(-5.0), 0.0);
        assert_eq!(attr.clamp_value(25.0), 20.0);
        assert_eq!(attr.clamp_value(10.0), 10.0);
    }

    #[test]
    fn test_ranged_attribute_bounds() {
        let attr = health();
        assert_eq!(attr.minimum_value(), 0.0);
        assert_eq!(attr.maximum_value(), 20.0);
        assert_eq!(attr.default_value(), 20.0);
        assert_eq!(attr.parent(), None);
    }

    #[test]
    fn test_min_above_max_rejected_regardless_of_default() {
        for default in [-100.0, 0.0, 7.0, 100.0] {
            let err = RangedAttribute::new(None, "bad", default, 10.0, 5.0).unwrap_err();
            assert_eq!(
                err.range_error(),
                Some(RangeError::MinAboveMax {
                    min: 10.0,
                    max: 5.0
                })
            );
        }
    }

    #[test]
    fn test_default_below_min_rejected() {
        let err = RangedAttribute::new(None, "bad", -1.0, 0.0, 10.0).unwrap_err();
        assert_eq!(
            err.range_error(),
            Some(RangeError::DefaultBelowMin {
                default: -1.0,
                min: 0.0
            })
        );
    }

    #[test]
    fn test_default_above_max_rejected() {
        let err = RangedAttribute::new(None, "bad", 11.0, 0.0, 10.0).unwrap_err();
        assert_eq!(
            err.range_error(),
            Some(RangeError::DefaultAboveMax {
                default: 11.0,
                max: 10.0
            })
        );
    }

    #[test]
    fn test_error_names_the_attribute() {
        let err = RangedAttribute::new(None, "generic.speed", 11.0, 0.0, 10.0).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("generic.speed"), "message was: {msg}");
        assert!(msg.contains("cannot be bigger than maximum"), "message was: {msg}");
    }

    #[test]
    fn test_nan_rejected() {
        let err = RangedAttribute::new(None, "nan", f64::NAN, 0.0, 1.0).unwrap_err();
        assert!(matches!(
            err.range_error(),
            Some(RangeError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_nan_checked_after_ordered_checks() {
        // Every comparison with NaN is false, so only the trailing check fires.
        for (default, min, max) in [(0.5, f64::NAN, 1.0), (0.5, 0.0, f64::NAN)] {
            let err = RangedAttribute::new(None, "nan", default, min, max).unwrap_err();
            assert!(matches!(err.range_error(), Some(RangeError::NotANumber { .. })));
        }
        // An ordered violation is still reported first.
        let err = RangedAttribute::new(None, "nan", 5.0, f64::NAN, 1.0).unwrap_err();
        assert!(matches!(
            err.range_error(),
            Some(RangeError::DefaultAboveMax { .. })
        ));
    }

    #[test]
    fn test_degenerate_range_allowed() {
        let attr = RangedAttribute::new(None, "fixed", 3.0, 3.0, 3.0).unwrap();
        assert_eq!(attr.clamp_value(100.0), 3.0);
        assert_eq!(attr.clamp_value(-100.0), 3.0);
    }

    #[test]
    fn test_description_defaults_to_none() {
        assert_eq!(health().description(), None);
    }

    #[test]
    fn test_set_description() {
        let mut attr = health();
        assert_eq!(
            attr.set_description("Movement Speed").description(),
            Some("Movement Speed")
        );
    }

    #[test]
    fn test_set_description_twice_keeps_latest() {
        let mut attr = health();
        attr.set_description("Max Health");
        attr.set_description("Health Cap");
        assert_eq!(attr.description(), Some("Health Cap"));
    }

    #[test]
    fn test_description_does_not_touch_range() {
        let attr = health().with_description("Max Health");
        assert_eq!(attr.description(), Some("Max Health"));
        assert_eq!(attr.clamp_value(50.0), 20.0);
    }

    #[test]
    fn test_should_watch_builder() {
        let attr = health().with_should_watch(true);
        assert!(attr.should_watch());
        let mut base = BaseAttribute::new(None, "x", 1.0);
        base.set_should_watch(true);
        assert!(base.should_watch());
    }

    #[test]
    fn test_equality_by_name() {
        let a = RangedAttribute::new(None, "generic.armor", 0.0, 0.0, 30.0).unwrap();
        let b = RangedAttribute::new(None, "generic.armor", 5.0, 0.0, 10.0)
            .unwrap()
            .with_description("Armor");
        let c = RangedAttribute::new(None, "generic.armorToughness", 0.0, 0.0, 30.0).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
