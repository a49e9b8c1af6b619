use tracing::{debug, instrument};

use crate::catalog::Catalog;
use crate::error::{BatchPackError, Result};
use crate::model::{Batch, PackResult, TrayCount, utilization_pct};
use crate::projection::ProjectionRequest;

/// Packs `request` into batches against `catalog` and returns the sealed
/// batches plus aggregate placed counts.
///
/// Deterministic greedy, first-fit-decreasing by unit weight, repeated per
/// batch: each new batch is filled heaviest type first (ties broken by catalog
/// declaration order), one tray at a time, until no remaining tray of any type
/// fits. Heavier trays go in first because they are the least flexible;
/// lighter ones fill the remaining slack. This approximates a minimal batch
/// count without backtracking and can be suboptimal - sealed batches are never
/// rebalanced.
///
/// Errors:
/// - `UnknownItemType` if a requested name is not in the catalog.
/// - `CapacityTooSmall` (via catalog validation) if some unit weight exceeds
///   the capacity; checked up front since such a type could never be placed
///   and the fill loop would otherwise make no progress.
///
/// An all-zero request yields zero batches, not one empty batch.
#[instrument(skip_all, fields(types = catalog.len(), capacity = catalog.capacity()))]
pub fn pack(request: &ProjectionRequest, catalog: &Catalog) -> Result<PackResult> {
    catalog.validate()?;

    for name in request.names() {
        if catalog.get(name).is_none() {
            return Err(BatchPackError::UnknownItemType(name.to_string()));
        }
    }

    let capacity = catalog.capacity();
    let order = catalog.by_weight_desc();

    // Working copy of the requested counts, indexed by catalog position.
    let mut remaining: Vec<u32> = catalog
        .items()
        .iter()
        .map(|item| request.get(&item.name))
        .collect();

    let mut batches: Vec<Batch> = Vec::new();

    while remaining.iter().any(|&count| count > 0) {
        let mut counts = vec![0u32; catalog.len()];
        let mut weight = 0u32;

        for &(idx, item) in &order {
            while remaining[idx] > 0 && weight as u64 + item.unit_weight as u64 <= capacity as u64 {
                counts[idx] += 1;
                remaining[idx] -= 1;
                weight += item.unit_weight;
            }
        }

        let batch = seal(batches.len() + 1, counts, weight, catalog);
        debug!(
            batch = batch.index,
            weight = batch.weight,
            utilization = batch.utilization,
            "sealed batch"
        );
        batches.push(batch);
    }

    let placed = aggregate(&batches, catalog);
    Ok(PackResult {
        batches,
        placed,
        capacity,
    })
}

/// Freezes a filled batch, deriving weight/utilization/leftover. Derived
/// fields are pure functions of the final contents and play no part in the
/// packing decisions above.
fn seal(index: usize, counts: Vec<u32>, weight: u32, catalog: &Catalog) -> Batch {
    let capacity = catalog.capacity();
    let counts = catalog
        .items()
        .iter()
        .zip(counts)
        .map(|(item, count)| TrayCount {
            name: item.name.clone(),
            count,
        })
        .collect();
    Batch {
        index,
        counts,
        weight,
        utilization: utilization_pct(weight, capacity),
        leftover: capacity - weight,
    }
}

fn aggregate(batches: &[Batch], catalog: &Catalog) -> Vec<TrayCount> {
    catalog
        .items()
        .iter()
        .enumerate()
        .map(|(idx, item)| TrayCount {
            name: item.name.clone(),
            count: batches.iter().map(|b| b.counts[idx].count).sum(),
        })
        .collect()
}
