use batch_packer_core::prelude::*;

#[test]
fn csv_rows_follow_catalog_column_order() {
    let catalog = Catalog::standard();
    let mut request = ProjectionRequest::new();
    request.set("Large", 9);

    let result = pack(&request, &catalog).expect("packing should succeed");
    let csv = to_csv_string(&result, &catalog);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "batch,Pizzoli,Small,Medium,Large,XLarge,total_weight_oz"
    );
    assert_eq!(lines[1], "1,0,0,0,8,0,1216");
    assert_eq!(lines[2], "2,0,0,0,1,0,152");
}

#[test]
fn csv_of_empty_result_is_header_only() {
    let catalog = Catalog::standard();
    let result = pack(&ProjectionRequest::new(), &catalog).expect("packing should succeed");
    let csv = to_csv_string(&result, &catalog);
    assert_eq!(csv.lines().count(), 1);
}

#[test]
fn csv_quotes_awkward_type_names() {
    let catalog = Catalog::builder()
        .item("Rye, dark", 50)
        .item("Plain", 40)
        .capacity(100)
        .build()
        .expect("valid catalog");
    let mut request = ProjectionRequest::new();
    request.set("Plain", 1);

    let result = pack(&request, &catalog).expect("packing should succeed");
    let csv = to_csv_string(&result, &catalog);
    assert!(csv.starts_with("batch,\"Rye, dark\",Plain,total_weight_oz"));
}

#[test]
fn json_export_carries_batches_placed_and_capacity() {
    let catalog = Catalog::standard();
    let mut request = ProjectionRequest::new();
    request.set("Large", 9);

    let result = pack(&request, &catalog).expect("packing should succeed");
    let value = to_json(&result);

    assert_eq!(value["capacity"], 1216);
    let batches = value["batches"].as_array().expect("batches array");
    assert_eq!(batches.len(), 2);
    assert_eq!(batches[0]["index"], 1);
    assert_eq!(batches[0]["weight"], 1216);
    assert_eq!(batches[0]["utilization"], 100);
    assert_eq!(batches[1]["leftover"], 1064);

    let placed = value["placed"].as_array().expect("placed array");
    assert_eq!(placed.len(), catalog.len());
    // Catalog order: Large is the fourth entry.
    assert_eq!(placed[3]["name"], "Large");
    assert_eq!(placed[3]["count"], 9);
}

#[test]
fn write_csv_accepts_any_writer() {
    let catalog = Catalog::standard();
    let mut request = ProjectionRequest::new();
    request.set("Pizzoli", 2);

    let result = pack(&request, &catalog).expect("packing should succeed");
    let mut buf: Vec<u8> = Vec::new();
    write_csv(&mut buf, &result, &catalog).expect("write should succeed");
    let text = String::from_utf8(buf).expect("valid utf8");
    assert!(text.ends_with("1,2,0,0,0,0,120\n"));
}
