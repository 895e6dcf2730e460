use crate::data::{TraitSet, TraitsData, TraitsDataPtr};
use crate::error::{Result, TraitError};
use crate::value::Value;

/// A typed view binding one trait id to a shared [`TraitsData`].
///
/// Implemented by structs annotated with [`traitdef`](crate::traitdef).
pub trait TraitBase: Sized {
    const ID: &'static str;

    fn new(data: TraitsDataPtr) -> Self;

    fn traits_data(&self) -> &TraitsDataPtr;

    /// Properties written by [`imbue_to`](TraitBase::imbue_to) when unset.
    fn default_properties() -> Vec<(&'static str, Value)> {
        Vec::new()
    }

    fn is_imbued_to(data: &TraitsData) -> bool {
        data.has_trait(Self::ID)
    }

    /// Adds the trait to `data` and fills in declared defaults.
    ///
    /// Values already present are left untouched.
    fn imbue_to(data: &TraitsData) {
        log::debug!("imbuing {}", Self::ID);
        data.add_trait(Self::ID);
        for (key, value) in Self::default_properties() {
            if data.get_trait_property(Self::ID, key).is_none() {
                data.set_trait_property(Self::ID, key, value);
            }
        }
    }

    fn is_imbued(&self) -> bool {
        Self::is_imbued_to(self.traits_data())
    }

    fn imbue(&self) {
        Self::imbue_to(self.traits_data())
    }
}

/// A fixed set of traits that are created and wrapped together.
///
/// Implemented by structs annotated with [`specdef`](crate::specdef).
pub trait Specification: Sized {
    fn trait_set() -> TraitSet;

    fn wrap(data: TraitsDataPtr) -> Self;

    fn traits_data(&self) -> &TraitsDataPtr;

    /// Imbues every trait of the set.
    fn imbue_to(data: &TraitsData);

    /// Creates a new container imbued with the whole set.
    fn create() -> Self {
        let data = TraitsData::make();
        Self::imbue_to(&data);
        Self::wrap(data)
    }

    /// Wraps `data`, failing if any trait of the set is absent.
    fn try_wrap(data: TraitsDataPtr) -> Result<Self> {
        let present = data.trait_set();
        let missing: Vec<String> = Self::trait_set().difference(&present).cloned().collect();
        if !missing.is_empty() {
            return Err(TraitError::MissingTraits { missing });
        }
        Ok(Self::wrap(data))
    }
}
