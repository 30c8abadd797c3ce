//! EasyMeta Core - display-type resolution and presentation wrappers
//!
//! Translates dynamically-typed schema metadata into a closed set of
//! presentation tags:
//! - A closed [`DisplayType`] registry bound to wrapper variants
//! - Resolution honouring `displayType` overrides before the storage-type table
//! - Entity and field wrappers with a uniform capability surface
//! - Two-hop field path labels (`owningUser.fullName`)
//! - Entity and field projections for UI consumers
//!
//! # Example
//!
//! ```
//! use easymeta_core::{Catalog, EasyMetaFactory, EntityMeta, FieldMeta, StorageType};
//!
//! let catalog = Catalog::new().with_entity(
//!     EntityMeta::new(1001, "Account")
//!         .with_field(FieldMeta::new("accountId", StorageType::Primary))
//!         .with_field(FieldMeta::new("title", StorageType::String)),
//! );
//! let factory = EasyMetaFactory::new(&catalog);
//! let account = factory.entity("Account").unwrap().entity();
//!
//! let projection = factory.field_projection(account.field("title").unwrap()).unwrap();
//! assert_eq!(projection.display_type.name(), "TEXT");
//! ```

pub mod catalog;
pub mod display_type;
pub mod easy;
pub mod errors;
pub mod factory;
pub mod label;
pub mod logging_facility;
pub mod model;
pub mod projection;
pub mod resolve;
pub mod state;

pub use catalog::{Catalog, MetadataCatalog};
pub use display_type::{DisplayType, WrapperKind};
pub use easy::{BaseEasyMeta, EasyEntity, EasyField, EasyMeta, FieldVariant, Meta};
pub use errors::{EasyMetaError, ExError, ExErrorKind, Result};
pub use factory::EasyMetaFactory;
pub use label::{BundleLabels, DescriptorLabels, LabelProvider};
pub use model::{EntityMeta, ExtraAttrs, FieldMeta, StorageType};
pub use projection::{EntityProjection, FieldProjection, RefTarget};
pub use resolve::{resolve_display_type, EntityTag};
pub use state::{ExtraAttrStateResolver, StateResolver};
