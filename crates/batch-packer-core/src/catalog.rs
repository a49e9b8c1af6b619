use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::error::{BatchPackError, Result};

/// A named tray type with a fixed per-tray weight.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemType {
    /// User-facing name (e.g., "Large"). Also the key used in requests.
    pub name: String,
    /// Weight of a single tray in ounces. Always positive.
    pub unit_weight: u32,
}

impl ItemType {
    pub fn new(name: impl Into<String>, unit_weight: u32) -> Self {
        Self {
            name: name.into(),
            unit_weight,
        }
    }
}

/// Static catalog of tray types plus the batch capacity shared by every batch
/// in a run.
///
/// Declaration order is significant: it is the column order for tabular export
/// and the tie-break order for types of equal unit weight. The catalog is fixed
/// configuration; types are never added or removed while packing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<ItemType>,
    capacity: u32,
}

impl Catalog {
    /// Builds a catalog and validates it.
    pub fn new(items: Vec<ItemType>, capacity: u32) -> Result<Self> {
        let catalog = Self { items, capacity };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Create a fluent builder for `Catalog`.
    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::new()
    }

    /// The house dough catalog: five tray types, 1216 oz batch capacity.
    pub fn standard() -> Self {
        Self {
            items: vec![
                ItemType::new("Pizzoli", 60),
                ItemType::new("Small", 100),
                ItemType::new("Medium", 126),
                ItemType::new("Large", 152),
                ItemType::new("XLarge", 150),
            ],
            capacity: 1216,
        }
    }

    /// Validates the catalog.
    ///
    /// Returns an error if:
    /// - Capacity is zero or the catalog has no types
    /// - A type name is empty or duplicated
    /// - A unit weight is zero, or exceeds the capacity (such a type could
    ///   never be placed, so packing would make no progress)
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(BatchPackError::InvalidCatalog(
                "capacity must be positive".into(),
            ));
        }
        if self.items.is_empty() {
            return Err(BatchPackError::InvalidCatalog(
                "catalog has no item types".into(),
            ));
        }

        let mut seen = HashSet::new();
        for item in &self.items {
            if item.name.is_empty() {
                return Err(BatchPackError::InvalidCatalog(
                    "item type with empty name".into(),
                ));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(BatchPackError::InvalidCatalog(format!(
                    "duplicate item type: {}",
                    item.name
                )));
            }
            if item.unit_weight == 0 {
                return Err(BatchPackError::InvalidCatalog(format!(
                    "item type {} has zero unit weight",
                    item.name
                )));
            }
            if item.unit_weight > self.capacity {
                return Err(BatchPackError::CapacityTooSmall {
                    item: item.name.clone(),
                    weight: item.unit_weight,
                    capacity: self.capacity,
                });
            }
        }
        Ok(())
    }

    pub fn items(&self) -> &[ItemType] {
        &self.items
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a type by name.
    pub fn get(&self, name: &str) -> Option<&ItemType> {
        self.items.iter().find(|t| t.name == name)
    }

    /// Declaration index of a type, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.items.iter().position(|t| t.name == name)
    }

    /// Types in descending unit-weight order, paired with their declaration
    /// index. Equal weights keep declaration order (stable sort), which fixes
    /// the packer's tie-break and keeps output reproducible.
    pub fn by_weight_desc(&self) -> Vec<(usize, &ItemType)> {
        let mut order: Vec<(usize, &ItemType)> = self.items.iter().enumerate().collect();
        order.sort_by_key(|(_, t)| std::cmp::Reverse(t.unit_weight));
        order
    }

    /// Same catalog with a different capacity. Validation is deferred to the
    /// next `pack`/`validate` call so callers can layer overrides freely.
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }
}

/// Builder for `Catalog` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct CatalogBuilder {
    items: Vec<ItemType>,
    capacity: u32,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn item(mut self, name: impl Into<String>, unit_weight: u32) -> Self {
        self.items.push(ItemType::new(name, unit_weight));
        self
    }

    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    pub fn build(self) -> Result<Catalog> {
        Catalog::new(self.items, self.capacity)
    }
}
