//! Attribute registry: maps compact [`AttributeId`] handles to attribute definitions.
//!
//! The registry is filled once while the game bootstraps. Parent handles
//! always point at earlier entries, so parent chains are finite and acyclic.

use rustc_hash::FxHashMap;

use crate::attribute::{Attribute, AttributeId, BaseAttribute, RangedAttribute};
use crate::def::AttributeDef;
use crate::error::AttributeError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// An attribute stored in the registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegisteredAttribute {
    /// No range constraint.
    Base(BaseAttribute),
    /// Clamped to a validated interval.
    Ranged(RangedAttribute),
}

impl RegisteredAttribute {
    /// Returns the ranged form, if this attribute has a range.
    pub fn as_ranged(&self) -> Option<&RangedAttribute> {
        match self {
            Self::Ranged(r) => Some(r),
            Self::Base(_) => None,
        }
    }

    /// Returns the description of a ranged attribute.
    pub fn description(&self) -> Option<&str> {
        self.as_ranged().and_then(RangedAttribute::description)
    }

    fn inner(&self) -> &dyn Attribute {
        match self {
            Self::Base(b) => b,
            Self::Ranged(r) => r,
        }
    }
}

impl Attribute for RegisteredAttribute {
    fn parent(&self) -> Option<AttributeId> {
        self.inner().parent()
    }

    fn unlocalized_name(&self) -> &str {
        self.inner().unlocalized_name()
    }

    fn default_value(&self) -> f64 {
        self.inner().default_value()
    }

    fn should_watch(&self) -> bool {
        self.inner().should_watch()
    }

    fn clamp_value(&self, value: f64) -> f64 {
        self.inner().clamp_value(value)
    }
}

impl From<BaseAttribute> for RegisteredAttribute {
    fn from(attr: BaseAttribute) -> Self {
        Self::Base(attr)
    }
}

impl From<RangedAttribute> for RegisteredAttribute {
    fn from(attr: RangedAttribute) -> Self {
        Self::Ranged(attr)
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Dense attribute table with O(1) lookup by handle and by unlocalized name.
#[derive(Default)]
pub struct AttributeRegistry {
    /// `index == AttributeId.0`.
    attributes: Vec<RegisteredAttribute>,
    name_to_id: FxHashMap<String, AttributeId>,
}

impl AttributeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an attribute and returns its handle.
    ///
    /// # Errors
    ///
    /// Returns [`AttributeError::DuplicateName`] if the unlocalized name is
    /// taken, or [`AttributeError::UnknownParent`] if the parent handle was
    /// not issued by this registry.
    pub fn register(
        &mut self,
        attribute: impl Into<RegisteredAttribute>,
    ) -> Result<AttributeId, AttributeError> {
        let attribute = attribute.into();
        let name = attribute.unlocalized_name();

        if self.name_to_id.contains_key(name) {
            return Err(AttributeError::DuplicateName(name.to_string()));
        }
        if let Some(parent) = attribute.parent()
            && parent.0 as usize >= self.attributes.len()
        {
            return Err(AttributeError::UnknownParent(parent));
        }

        let id = AttributeId(self.attributes.len() as u32);
        tracing::debug!("registered attribute {name} as {id:?}");
        self.name_to_id.insert(name.to_string(), id);
        self.attributes.push(attribute);
        Ok(id)
    }

    /// Builds and registers attributes from serialized definitions, in order.
    ///
    /// A definition's `parent` must name an attribute that is already
    /// registered or that appears earlier in `defs`. Stops at the first
    /// invalid definition; entries registered before it are kept.
    pub fn register_defs(
        &mut self,
        defs: &[AttributeDef],
    ) -> Result<Vec<AttributeId>, AttributeError> {
        let mut ids = Vec::with_capacity(defs.len());
        for def in defs {
            let parent = match &def.parent {
                Some(parent_name) => Some(self.lookup_by_name(parent_name).ok_or_else(|| {
                    AttributeError::UndefinedParentName {
                        child: def.name.clone(),
                        parent: parent_name.clone(),
                    }
                })?),
                None => None,
            };
            ids.push(self.register(def.build(parent)?)?);
        }
        tracing::info!("registered {} attribute definitions", ids.len());
        Ok(ids)
    }

    /// Returns the attribute for a handle, or `None` for a foreign handle.
    pub fn get(&self, id: AttributeId) -> Option<&RegisteredAttribute> {
        self.attributes.get(id.0 as usize)
    }

    /// Returns the handle for an unlocalized name.
    pub fn lookup_by_name(&self, name: &str) -> Option<AttributeId> {
        self.name_to_id.get(name).copied()
    }

    /// Walks the parent chain of `id`, nearest parent first.
    pub fn ancestors(&self, id: AttributeId) -> impl Iterator<Item = AttributeId> + '_ {
        std::iter::successors(self.get(id).and_then(Attribute::parent), move |p| {
            self.get(*p).and_then(Attribute::parent)
        })
    }

    /// Iterates over all attributes in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeId, &RegisteredAttribute)> {
        self.attributes
            .iter()
            .enumerate()
            .map(|(i, a)| (AttributeId(i as u32), a))
    }

    /// Number of registered attributes.
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
