use batch_packer_core::prelude::*;
use std::thread;

fn run(catalog: &Catalog, large: u32) -> PackResult {
    let mut request = ProjectionRequest::new();
    request.set("Large", large);
    pack(&request, catalog).expect("packing should succeed")
}

#[test]
fn slot_starts_empty_and_holds_latest_result() {
    let catalog = Catalog::standard();
    let slot = ResultSlot::new();
    assert!(slot.is_empty());
    assert!(slot.latest().is_none());

    slot.store(run(&catalog, 8));
    slot.store(run(&catalog, 9));

    let latest = slot.latest().expect("slot holds a result");
    assert_eq!(latest.batches.len(), 2, "second run replaced the first");
    assert_eq!(latest.placed_count("Large"), 9);

    slot.clear();
    assert!(slot.is_empty());
}

#[test]
fn store_returns_a_handle_to_the_stored_result() {
    let catalog = Catalog::standard();
    let slot = ResultSlot::new();
    let handle = slot.store(run(&catalog, 8));
    assert_eq!(handle.batches.len(), 1);
    // The handle stays valid even after being replaced.
    slot.store(run(&catalog, 9));
    assert_eq!(handle.batches.len(), 1);
}

#[test]
fn clones_share_one_slot_across_threads() {
    let catalog = Catalog::standard();
    let slot = ResultSlot::new();

    let writer = {
        let slot = slot.clone();
        let catalog = catalog.clone();
        thread::spawn(move || {
            slot.store(run(&catalog, 9));
        })
    };
    writer.join().expect("writer thread");

    let latest = slot.latest().expect("result stored by the other thread");
    assert_eq!(latest.placed_count("Large"), 9);
}
