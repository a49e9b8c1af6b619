//! Core library for packing weighted dough-tray projections into
//! fixed-capacity batches.
//!
//! - Algorithm: deterministic greedy first-fit-decreasing by unit weight,
//!   repeated per batch; ties broken by catalog declaration order
//! - `pack` takes a per-type request plus a static catalog (types, weights,
//!   capacity) and returns sealed batches with weight, utilization, and
//!   leftover, plus aggregate placed counts
//! - Data model is serde-serializable; CSV/JSON exporters are provided in
//!   `export` and consumed by the CLI crate
//!
//! Quick example:
//! ```
//! use batch_packer_core::{Catalog, ProjectionRequest, pack};
//! # fn main() -> batch_packer_core::Result<()> {
//! let catalog = Catalog::standard();
//! let mut request = ProjectionRequest::new();
//! request.set("Large", 9);
//! let result = pack(&request, &catalog)?;
//! assert_eq!(result.batches.len(), 2);
//! assert_eq!(result.batches[0].utilization, 100);
//! # Ok(()) }
//! ```

pub mod catalog;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod projection;
pub mod store;

pub use catalog::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use projection::*;
pub use store::*;

/// Convenience prelude for common types and functions.
/// Importing `batch_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::catalog::{Catalog, CatalogBuilder, ItemType};
    pub use crate::error::{BatchPackError, Result};
    pub use crate::export::{to_csv_string, to_json, write_csv};
    pub use crate::model::{Batch, PackResult, PackStats, TrayCount, utilization_pct};
    pub use crate::packer::pack;
    pub use crate::projection::ProjectionRequest;
    pub use crate::store::ResultSlot;
}
