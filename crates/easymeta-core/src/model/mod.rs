pub mod entity;
pub mod extra_attrs;
pub mod field;
pub mod storage_type;

pub use entity::EntityMeta;
pub use extra_attrs::ExtraAttrs;
pub use field::FieldMeta;
pub use storage_type::StorageType;
