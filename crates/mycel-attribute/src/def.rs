//! Serializable attribute definitions, typically loaded from configuration.

use serde::{Deserialize, Serialize};

use crate::attribute::{AttributeId, BaseAttribute, RangedAttribute};
use crate::error::AttributeError;
use crate::registry::RegisteredAttribute;

/// Data-driven description of one attribute.
///
/// A definition with a `range` becomes a [`RangedAttribute`]; one without
/// becomes a [`BaseAttribute`]. The parent is referenced by unlocalized name
/// and resolved to a handle by [`crate::AttributeRegistry::register_defs`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AttributeDef {
    /// Unlocalized name.
    pub name: String,
    /// Unlocalized name of the parent attribute.
    #[serde(default)]
    pub parent: Option<String>,
    /// Default value.
    pub default: f64,
    /// Closed interval `(minimum, maximum)`.
    #[serde(default)]
    pub range: Option<(f64, f64)>,
    /// Human-readable description (ranged attributes only).
    #[serde(default)]
    pub description: Option<String>,
    /// Whether values are synchronised to observers.
    #[serde(default)]
    pub should_watch: bool,
}

impl AttributeDef {
    /// A definition without a range.
    pub fn base(name: impl Into<String>, default: f64) -> Self {
        Self {
            name: name.into(),
            parent: None,
            default,
            range: None,
            description: None,
            should_watch: false,
        }
    }

    /// A definition clamped to `[min, max]`.
    pub fn ranged(name: impl Into<String>, default: f64, min: f64, max: f64) -> Self {
        Self {
            range: Some((min, max)),
            ..Self::base(name, default)
        }
    }

    /// Builds the attribute with an already-resolved parent handle.
    ///
    /// A description on a definition without a range is ignored.
    pub fn build(
        &self,
        parent: Option<AttributeId>,
    ) -> Result<RegisteredAttribute, AttributeError> {
        match self.range {
            Some((min, max)) => {
                let mut attr = RangedAttribute::new(parent, &self.name, self.default, min, max)?;
                attr.set_should_watch(self.should_watch);
                if let Some(description) = &self.description {
                    attr.set_description(description);
                }
                Ok(attr.into())
            }
            None => {
                if self.description.is_some() {
                    tracing::warn!("attribute '{}' has a description but no range", self.name);
                }
                Ok(BaseAttribute::new(parent, &self.name, self.default)
                    .with_should_watch(self.should_watch)
                    .into())
            }
        }
    }
}
