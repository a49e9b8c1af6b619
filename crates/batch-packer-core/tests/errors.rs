use batch_packer_core::prelude::*;

#[test]
fn unknown_item_type_is_fatal() {
    let catalog = Catalog::standard();
    let mut request = ProjectionRequest::new();
    request.set("Calzone", 3);

    match pack(&request, &catalog) {
        Err(BatchPackError::UnknownItemType(name)) => assert_eq!(name, "Calzone"),
        other => panic!("expected UnknownItemType, got {other:?}"),
    }
}

#[test]
fn unknown_item_type_produces_no_batches_even_with_valid_entries() {
    let catalog = Catalog::standard();
    let mut request = ProjectionRequest::new();
    request.set("Large", 8);
    request.set("Calzone", 1);

    assert!(matches!(
        pack(&request, &catalog),
        Err(BatchPackError::UnknownItemType(_))
    ));
}

#[test]
fn unplaceable_item_fails_fast_with_capacity_too_small() {
    // Medium (126 oz) can never fit a 100 oz batch.
    let catalog = Catalog::standard().with_capacity(100);
    let mut request = ProjectionRequest::new();
    request.set("Medium", 1);

    match pack(&request, &catalog) {
        Err(BatchPackError::CapacityTooSmall {
            item,
            weight,
            capacity,
        }) => {
            assert_eq!(item, "Medium");
            assert_eq!(weight, 126);
            assert_eq!(capacity, 100);
        }
        other => panic!("expected CapacityTooSmall, got {other:?}"),
    }
}

#[test]
fn capacity_too_small_is_surfaced_by_catalog_construction() {
    let result = Catalog::builder()
        .item("Boulder", 2000)
        .capacity(1216)
        .build();
    assert!(matches!(
        result,
        Err(BatchPackError::CapacityTooSmall { weight: 2000, .. })
    ));
}

#[test]
fn structural_catalog_problems_are_rejected() {
    assert!(matches!(
        Catalog::builder().capacity(100).build(),
        Err(BatchPackError::InvalidCatalog(_))
    ));
    assert!(matches!(
        Catalog::builder().item("A", 10).capacity(0).build(),
        Err(BatchPackError::InvalidCatalog(_))
    ));
    assert!(matches!(
        Catalog::builder().item("A", 0).capacity(100).build(),
        Err(BatchPackError::InvalidCatalog(_))
    ));
    assert!(matches!(
        Catalog::builder().item("", 10).capacity(100).build(),
        Err(BatchPackError::InvalidCatalog(_))
    ));
    assert!(matches!(
        Catalog::builder()
            .item("A", 10)
            .item("A", 20)
            .capacity(100)
            .build(),
        Err(BatchPackError::InvalidCatalog(_))
    ));
}
