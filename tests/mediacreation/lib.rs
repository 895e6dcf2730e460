//! Media creation traits and specifications.
//!
//! Importing [`traits`] brings every trait module into scope:
//!
//! ```
//! use mediacreation::traits;
//! use traitdata::TraitsData;
//!
//! let managed = traits::management_policy::ManagedTrait::new(TraitsData::make());
//! managed.imbue();
//! assert!(managed.is_imbued());
//! ```
//!
//! A consumer that forgets the trait library import does not build:
//!
//! ```compile_fail
//! use traitdata::TraitsData;
//!
//! let managed = traits::management_policy::ManagedTrait::new(TraitsData::make());
//! managed.imbue();
//! ```
//!
//! Neither does one that forgets the core data container:
//!
//! ```compile_fail
//! use mediacreation::traits;
//!
//! let managed = traits::management_policy::ManagedTrait::new(TraitsData::make());
//! managed.imbue();
//! ```

pub mod traits {
    /// Traits describing how a manager handles an entity.
    pub mod management_policy {
        use traitdata::traitdef;

        /// The manager is responsible for entities with this trait set.
        #[traitdef(id = "openassetio-mediacreation:managementPolicy.Managed")]
        pub struct ManagedTrait {
            /// Whether the manager is the only source of truth for the
            /// entity, rather than a mirror of host-side data.
            exclusive: bool,
        }

        /// The manager can resolve references to entities that do not exist yet.
        #[traitdef(id = "openassetio-mediacreation:managementPolicy.ResolvesFutureEntities")]
        pub struct ResolvesFutureEntitiesTrait;
    }

    /// Traits describing the content of an entity.
    pub mod content {
        use traitdata::traitdef;

        #[traitdef(id = "openassetio-mediacreation:content.LocatableContent")]
        pub struct LocatableContentTrait {
            /// URL of the entity's data.
            location: String,
            /// MIME type of the data at `location`.
            mime_type: String,
            /// Whether `location` holds placeholder tokens to be substituted.
            is_templated: bool,
        }
    }

    pub mod identity {
        use traitdata::traitdef;

        #[traitdef(id = "openassetio-mediacreation:identity.DisplayName")]
        pub struct DisplayNameTrait {
            /// Short human readable name.
            name: String,
            /// Name disambiguated from other entities, e.g. by its hierarchy.
            qualified_name: String,
        }
    }

    pub mod usage {
        use traitdata::traitdef;

        /// Data describes an entity rather than a relationship.
        #[traitdef(id = "openassetio-mediacreation:usage.Entity")]
        pub struct EntityTrait;

        /// Data describes a relationship between entities.
        #[traitdef(id = "openassetio-mediacreation:usage.Relationship")]
        pub struct RelationshipTrait;
    }

    pub mod time_domain {
        use traitdata::traitdef;

        #[traitdef(id = "openassetio-mediacreation:timeDomain.FrameRanged")]
        pub struct FrameRangedTrait {
            /// First frame, inclusive.
            start_frame: i64,
            /// Last frame, inclusive.
            end_frame: i64,
            #[property(key = "framesPerSecond", default = 24.0)]
            frames_per_second: f64,
        }
    }
}

pub mod specifications {
    pub mod application {
        use traitdata::specdef;

        use crate::traits::content::LocatableContentTrait;
        use crate::traits::usage::EntityTrait;

        /// A file a host application saves its session to.
        #[specdef]
        pub struct WorkfileSpecification {
            entity: EntityTrait,
            locatable_content: LocatableContentTrait,
        }
    }

    pub mod timeline {
        use traitdata::specdef;

        use crate::traits::identity::DisplayNameTrait;
        use crate::traits::time_domain::FrameRangedTrait;
        use crate::traits::usage::EntityTrait;

        /// A range of frames placed on a timeline.
        #[specdef]
        pub struct ClipSpecification {
            entity: EntityTrait,
            display_name: DisplayNameTrait,
            frame_ranged: FrameRangedTrait,
        }
    }
}
