use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{Result, TraitError};
use crate::value::{PropertyType, Value};

/// Ordered set of trait ids.
pub type TraitSet = BTreeSet<String>;

/// Shared handle to a [`TraitsData`]. Views hold a clone of this handle.
pub type TraitsDataPtr = Arc<TraitsData>;

type Properties = BTreeMap<String, Value>;

/// Trait ids and their properties for one logical entity.
///
/// All mutators take `&self` so the container can be shared between
/// several views through a [`TraitsDataPtr`].
#[derive(Default)]
pub struct TraitsData {
    traits: RwLock<BTreeMap<String, Properties>>,
}

impl TraitsData {
    /// Creates an empty container.
    pub fn make() -> TraitsDataPtr {
        Arc::new(TraitsData::default())
    }

    /// Creates a container with the given traits and no properties.
    pub fn make_with_traits<I, S>(trait_ids: I) -> TraitsDataPtr
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let data = TraitsData::make();
        data.add_traits(trait_ids);
        data
    }

    /// Creates an independent deep copy of `other`.
    pub fn make_copy(other: &TraitsData) -> TraitsDataPtr {
        Arc::new(TraitsData {
            traits: RwLock::new(other.traits.read().clone()),
        })
    }

    pub fn trait_set(&self) -> TraitSet {
        self.traits.read().keys().cloned().collect()
    }

    pub fn has_trait(&self, trait_id: &str) -> bool {
        self.traits.read().contains_key(trait_id)
    }

    pub fn is_empty(&self) -> bool {
        self.traits.read().is_empty()
    }

    /// Adds a trait. Properties of an already present trait are kept.
    pub fn add_trait(&self, trait_id: impl Into<String>) {
        let trait_id = trait_id.into();
        let mut traits = self.traits.write();
        if !traits.contains_key(&trait_id) {
            log::trace!("adding trait {trait_id}");
            traits.insert(trait_id, Properties::new());
        }
    }

    pub fn add_traits<I, S>(&self, trait_ids: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for trait_id in trait_ids {
            self.add_trait(trait_id);
        }
    }

    /// Sets a property, adding the trait if it is not present yet.
    pub fn set_trait_property(
        &self,
        trait_id: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        let (trait_id, key, value) = (trait_id.into(), key.into(), value.into());
        log::trace!("setting {trait_id}/{key} = {value}");
        self.traits
            .write()
            .entry(trait_id)
            .or_default()
            .insert(key, value);
    }

    pub fn get_trait_property(&self, trait_id: &str, key: &str) -> Option<Value> {
        self.traits
            .read()
            .get(trait_id)
            .and_then(|properties| properties.get(key))
            .cloned()
    }

    /// Reads a property as `T`.
    ///
    /// Returns `Ok(None)` when the trait or property is absent and an error
    /// when the stored value has a different kind.
    pub fn typed_trait_property<T: PropertyType>(
        &self,
        trait_id: &str,
        key: &str,
    ) -> Result<Option<T>> {
        let Some(value) = self.get_trait_property(trait_id, key) else {
            return Ok(None);
        };
        match T::from_value(&value) {
            Some(typed) => Ok(Some(typed)),
            None => Err(TraitError::InvalidPropertyType {
                trait_id: trait_id.to_string(),
                key: key.to_string(),
                expected: T::KIND,
                found: value.kind(),
            }),
        }
    }

    /// Keys of the properties set for a trait. Empty if the trait is absent.
    pub fn trait_property_keys(&self, trait_id: &str) -> BTreeSet<String> {
        self.traits
            .read()
            .get(trait_id)
            .map(|properties| properties.keys().cloned().collect())
            .unwrap_or_default()
    }
}

impl PartialEq for TraitsData {
    fn eq(&self, other: &Self) -> bool {
        if std::ptr::eq(self, other) {
            return true;
        }
        *self.traits.read() == *other.traits.read()
    }
}

impl fmt::Display for TraitsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let traits = self.traits.read();
        f.write_str("{")?;
        for (i, (trait_id, properties)) in traits.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "'{trait_id}': {{")?;
            for (j, (key, value)) in properties.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "'{key}': {value}")?;
            }
            f.write_str("}")?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for TraitsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TraitsData({self})")
    }
}
