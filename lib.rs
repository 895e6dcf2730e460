//! Shared trait property containers and typed views over them.
//!
//! A [`TraitsData`] holds, for one logical entity, a set of traits and the
//! properties each trait carries. Trait views are generated with
//! [`traitdef`] and bind a trait id to a shared [`TraitsDataPtr`]:
//!
//! ```
//! use traitdata::{traitdef, TraitsData};
//!
//! #[traitdef(id = "example:content.Locatable")]
//! pub struct LocatableTrait {
//!     location: String,
//! }
//!
//! let data = TraitsData::make();
//! let locatable = LocatableTrait::new(data.clone());
//! locatable.imbue();
//! locatable.set_location("file:///tmp/a.exr".to_string());
//!
//! assert!(data.has_trait(LocatableTrait::ID));
//! assert_eq!(
//!     locatable.location().unwrap().as_deref(),
//!     Some("file:///tmp/a.exr")
//! );
//! ```

mod data;
mod error;
mod value;
mod view;

pub use data::{TraitSet, TraitsData, TraitsDataPtr};
pub use error::{Result, TraitError};
pub use value::{PropertyType, Value, ValueKind};
pub use view::{Specification, TraitBase};

/// Attribute macro turning a struct into a typed view over one trait.
///
/// The struct's named fields declare the trait's properties. Each field
/// becomes a getter, a `*_or` getter and a `set_*` setter on the view.
/// Keys default to the camelCase field name and can be overridden with
/// `#[property(key = "...")]`; `#[property(default = expr)]` declares a value
/// written by `imbue`.
pub use traitdata_macro::traitdef;

/// Attribute macro turning a struct whose fields are trait views into a
/// specification: a fixed set of traits created and wrapped together.
pub use traitdata_macro::specdef;
