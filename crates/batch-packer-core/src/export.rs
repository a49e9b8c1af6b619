use serde_json::{Value, json};
use std::io::Write;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::model::PackResult;

/// CSV header: `batch`, one column per catalog type in declaration order,
/// then `total_weight_oz`.
pub fn csv_header(catalog: &Catalog) -> String {
    let mut cols = Vec::with_capacity(catalog.len() + 2);
    cols.push("batch".to_string());
    for item in catalog.items() {
        cols.push(csv_field(&item.name));
    }
    cols.push("total_weight_oz".to_string());
    cols.join(",")
}

/// Writes the result as delimited text: header plus one row per batch with
/// [batch index, per-type counts in catalog order, total weight].
pub fn write_csv<W: Write>(w: &mut W, result: &PackResult, catalog: &Catalog) -> Result<()> {
    writeln!(w, "{}", csv_header(catalog))?;
    for batch in &result.batches {
        let mut cols = Vec::with_capacity(catalog.len() + 2);
        cols.push(batch.index.to_string());
        for count in &batch.counts {
            cols.push(count.count.to_string());
        }
        cols.push(batch.weight.to_string());
        writeln!(w, "{}", cols.join(","))?;
    }
    Ok(())
}

/// `write_csv` into a `String`.
pub fn to_csv_string(result: &PackResult, catalog: &Catalog) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    let _ = write_csv(&mut buf, result, catalog);
    String::from_utf8(buf).unwrap_or_default()
}

/// Serialize the whole result as a JSON object `{ batches, placed, capacity }`.
/// Suitable for generic tooling and simple consumption.
pub fn to_json(result: &PackResult) -> Value {
    let batches_val: Vec<Value> = result
        .batches
        .iter()
        .map(|b| {
            let counts: Vec<Value> = b
                .counts
                .iter()
                .map(|c| json!({"name": c.name, "count": c.count}))
                .collect();
            json!({
                "index": b.index,
                "counts": counts,
                "weight": b.weight,
                "utilization": b.utilization,
                "leftover": b.leftover,
            })
        })
        .collect();
    let placed: Vec<Value> = result
        .placed
        .iter()
        .map(|c| json!({"name": c.name, "count": c.count}))
        .collect();
    json!({
        "batches": batches_val,
        "placed": placed,
        "capacity": result.capacity,
    })
}

/// Quotes a field when it contains the delimiter, a quote, or a newline,
/// doubling embedded quotes. Type names are config-controlled so this rarely
/// triggers, but a comma in a name must not shift columns.
fn csv_field(raw: &str) -> String {
    if raw.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}
