use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Tray count for one catalog type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrayCount {
    pub name: String,
    pub count: u32,
}

/// A sealed batch: one `TrayCount` per catalog type in catalog declaration
/// order (zero counts included), plus fields derived from the final contents.
///
/// Invariant: `weight <= capacity` for the capacity the batch was packed
/// against; `leftover = capacity - weight`. Batches are immutable once sealed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Batch {
    /// 1-based position in generation order.
    pub index: usize,
    pub counts: Vec<TrayCount>,
    /// Total weight in ounces.
    pub weight: u32,
    /// Percentage of capacity used, rounded half-to-even.
    pub utilization: u32,
    /// Unused capacity in ounces.
    pub leftover: u32,
}

impl Batch {
    /// Count packed for `name` in this batch; unknown names read as zero.
    pub fn count_of(&self, name: &str) -> u32 {
        self.counts
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    /// Total trays in this batch across all types.
    pub fn tray_total(&self) -> u64 {
        self.counts.iter().map(|c| c.count as u64).sum()
    }
}

/// Result of one packing run: sealed batches in generation order plus the
/// aggregate placed counts per type (catalog order).
///
/// Invariant: for every type, the aggregate placed count equals the requested
/// count — nothing is dropped, nothing is invented.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackResult {
    pub batches: Vec<Batch>,
    pub placed: Vec<TrayCount>,
    /// Capacity this run was packed against.
    pub capacity: u32,
}

impl PackResult {
    /// Aggregate placed count for `name` across all batches.
    pub fn placed_count(&self, name: &str) -> u32 {
        self.placed
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.count)
            .unwrap_or(0)
    }

    /// Computes packing statistics for this result.
    pub fn stats(&self) -> PackStats {
        let num_batches = self.batches.len();
        let mut total_trays = 0u64;
        let mut total_weight = 0u64;
        let mut total_leftover = 0u64;
        let mut min_utilization = u32::MAX;
        let mut max_utilization = 0u32;

        for batch in &self.batches {
            total_trays += batch.tray_total();
            total_weight += batch.weight as u64;
            total_leftover += batch.leftover as u64;
            min_utilization = min_utilization.min(batch.utilization);
            max_utilization = max_utilization.max(batch.utilization);
        }

        if num_batches == 0 {
            min_utilization = 0;
        }

        let avg_utilization = if num_batches > 0 {
            let capacity_total = self.capacity as u64 * num_batches as u64;
            total_weight as f64 / capacity_total as f64 * 100.0
        } else {
            0.0
        };

        PackStats {
            num_batches,
            total_trays,
            total_weight,
            total_leftover,
            avg_utilization,
            min_utilization,
            max_utilization,
        }
    }
}

/// Statistics about how well a run filled its batches.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Total number of batches produced.
    pub num_batches: usize,
    /// Total number of trays placed across all batches.
    pub total_trays: u64,
    /// Sum of batch weights (oz).
    pub total_weight: u64,
    /// Sum of unused capacity across batches (oz).
    pub total_leftover: u64,
    /// Mean fill ratio across batches as a percentage (unrounded).
    pub avg_utilization: f64,
    /// Lowest per-batch utilization (typically the final, partial batch).
    pub min_utilization: u32,
    /// Highest per-batch utilization.
    pub max_utilization: u32,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Batches: {}, Trays: {}, Total Weight: {} oz, Leftover: {} oz, Utilization: {:.1}% avg ({}%..{}%)",
            self.num_batches,
            self.total_trays,
            self.total_weight,
            self.total_leftover,
            self.avg_utilization,
            self.min_utilization,
            self.max_utilization,
        )
    }
}

/// Percentage of `capacity` consumed by `weight`, with ties rounded to even.
///
/// Exact integer arithmetic; no floating point. With `weight <= capacity` the
/// result is at most 100. The half-to-even rule is what makes a batch at
/// exactly half-percent boundaries (e.g. 152/1216 = 12.5%) report 12, not 13.
pub fn utilization_pct(weight: u32, capacity: u32) -> u32 {
    debug_assert!(capacity > 0);
    let scaled = weight as u64 * 100;
    let cap = capacity as u64;
    let quotient = scaled / cap;
    let remainder = scaled % cap;
    let rounded = match (remainder * 2).cmp(&cap) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => {
            if quotient % 2 == 0 {
                quotient
            } else {
                quotient + 1
            }
        }
    };
    rounded as u32
}
