#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use easymeta_core::{BundleLabels, EasyMetaError, EasyMetaFactory, MetadataCatalog};

#[test]
fn test_single_segment_label() {
    let catalog = common::crm_catalog();
    let factory = EasyMetaFactory::new(&catalog);
    let account = catalog.entity("Account").unwrap();

    assert_eq!(factory.label_path(account, "owningUser").unwrap(), "Owner");
}

#[test]
fn test_two_hop_label() {
    let catalog = common::crm_catalog();
    let factory = EasyMetaFactory::new(&catalog);
    let account = catalog.entity("Account").unwrap();

    assert_eq!(
        factory.label_path(account, "owningUser.fullName").unwrap(),
        "Owner.Full Name"
    );
}

#[test]
fn test_two_hop_through_reference_list() {
    let catalog = common::crm_catalog();
    let factory = EasyMetaFactory::new(&catalog);
    let account = catalog.entity("Account").unwrap();

    assert_eq!(
        factory.label_path(account, "contacts.fullName").unwrap(),
        "Contacts.Full Name"
    );
}

#[test]
fn test_two_hop_uses_label_provider() {
    let catalog = common::crm_catalog();
    let mut labels = BundleLabels::default();
    labels.insert("Account.owningUser", "Propriétaire");
    labels.insert("User.fullName", "Nom complet");
    let factory = EasyMetaFactory::new(&catalog).with_labels(&labels);
    let account = catalog.entity("Account").unwrap();

    assert_eq!(
        factory.label_path(account, "owningUser.fullName").unwrap(),
        "Propriétaire.Nom complet"
    );
}

#[test]
fn test_unknown_first_segment() {
    let catalog = common::crm_catalog();
    let factory = EasyMetaFactory::new(&catalog);
    let account = catalog.entity("Account").unwrap();

    assert_eq!(
        factory.label_path(account, "nope.fullName"),
        Err(EasyMetaError::PathResolution {
            entity: "Account".to_string(),
            path: "nope.fullName".to_string(),
            segment: "nope".to_string(),
            reason: "no such field".to_string(),
        })
    );
}

#[test]
fn test_unknown_second_segment_names_referenced_entity() {
    let catalog = common::crm_catalog();
    let factory = EasyMetaFactory::new(&catalog);
    let account = catalog.entity("Account").unwrap();

    let err = factory.label_path(account, "owningUser.nope").unwrap_err();
    assert!(matches!(
        err,
        EasyMetaError::PathResolution { ref entity, ref segment, .. }
            if entity == "User" && segment == "nope"
    ));
}

#[test]
fn test_second_hop_off_non_reference() {
    let catalog = common::crm_catalog();
    let factory = EasyMetaFactory::new(&catalog);
    let account = catalog.entity("Account").unwrap();

    let err = factory.label_path(account, "accountName.fullName").unwrap_err();
    assert!(matches!(
        err,
        EasyMetaError::PathResolution { ref segment, ref reason, .. }
            if segment == "accountName" && reason == "not a reference field"
    ));
}
