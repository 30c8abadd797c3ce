use easymeta_core::model::extra_attrs;
use easymeta_core::{Catalog, EntityMeta, FieldMeta, StorageType};
use easymeta_core_types::EntityCode;

/// Build the CRM-style catalog shared by the integration tests
///
/// - `User` (name field `fullName`, TEXT)
/// - `Department` (name field `name`, TEXT)
/// - `Account` with one field per interesting resolution path
/// - the `PickList` and `Classification` system entities
#[allow(dead_code)]
pub fn crm_catalog() -> Catalog {
    Catalog::new()
        .with_entity(
            EntityMeta::new(EntityCode::PICK_LIST, "PickList")
                .with_field(FieldMeta::new("itemId", StorageType::Primary))
                .with_field(FieldMeta::new("text", StorageType::String))
                .with_name_field("text"),
        )
        .with_entity(
            EntityMeta::new(EntityCode::CLASSIFICATION, "Classification")
                .with_field(FieldMeta::new("dataId", StorageType::Primary))
                .with_field(FieldMeta::new("name", StorageType::String))
                .with_name_field("name"),
        )
        .with_entity(
            EntityMeta::new(1, "User")
                .with_description("User")
                .with_extra(extra_attrs::ICON, "account")
                .with_field(FieldMeta::new("userId", StorageType::Primary))
                .with_field(
                    FieldMeta::new("fullName", StorageType::String).with_description("Full Name"),
                )
                .with_name_field("fullName"),
        )
        .with_entity(
            EntityMeta::new(2, "Department")
                .with_description("Department")
                .with_field(FieldMeta::new("departmentId", StorageType::Primary))
                .with_field(FieldMeta::new("name", StorageType::String).with_description("Name"))
                .with_name_field("name"),
        )
        .with_entity(account())
}

#[allow(dead_code)]
pub fn account() -> EntityMeta {
    EntityMeta::new(1001, "Account")
        .with_description("Account")
        .with_name_field("accountName")
        .with_field(
            FieldMeta::new("accountId", StorageType::Primary).with_flags(false, false, false),
        )
        .with_field(
            FieldMeta::new("accountName", StorageType::String)
                .with_description("Account Name")
                .with_flags(false, true, true),
        )
        .with_field(
            FieldMeta::new("owningUser", StorageType::Reference)
                .referencing("User")
                .with_description("Owner")
                .with_flags(false, true, true),
        )
        .with_field(
            FieldMeta::new("owningDept", StorageType::Reference)
                .referencing("Department")
                .with_description("Department")
                .with_flags(false, true, false),
        )
        .with_field(
            FieldMeta::new("industry", StorageType::Reference)
                .referencing("Classification")
                .with_description("Industry")
                .with_extra(extra_attrs::CLASSIFICATION_USE, "industry"),
        )
        .with_field(
            FieldMeta::new("level", StorageType::Reference)
                .referencing("PickList")
                .with_description("Level"),
        )
        .with_field(
            FieldMeta::new("contacts", StorageType::ReferenceList)
                .referencing("User")
                .with_description("Contacts"),
        )
        .with_field(FieldMeta::new("related", StorageType::AnyReference))
        .with_field(FieldMeta::new("createdOn", StorageType::Timestamp).with_flags(false, false, false))
        .with_field(FieldMeta::new("foundedOn", StorageType::Date))
        .with_field(FieldMeta::new("notes", StorageType::Ntext))
        .with_field(FieldMeta::new("vip", StorageType::Bool))
        .with_field(FieldMeta::new("employees", StorageType::Int))
        .with_field(FieldMeta::new("revenue", StorageType::Decimal))
        .with_field(
            FieldMeta::new("stage", StorageType::SmallInt)
                .with_description("Stage")
                .with_extra(extra_attrs::DISPLAY_TYPE, "STATE")
                .with_extra(extra_attrs::STATE_CLASS, "com.example.crm.AccountStage"),
        )
        .with_field(
            FieldMeta::new("email", StorageType::String)
                .with_extra(extra_attrs::DISPLAY_TYPE, "EMAIL"),
        )
        .with_field(FieldMeta::new("clockIn", StorageType::Time))
        .with_field(FieldMeta::new("fingerprint", StorageType::Binary))
}
